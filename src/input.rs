use nalgebra::Vector3;
use thiserror::Error;

use crate::math::Vec3;

/// The only text shown to the user when a vector field fails to parse.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid vector input!";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("expected 3 comma-separated components, got {count}")]
    WrongArity { count: usize },

    #[error("component {token:?} is not a number")]
    NotANumber { token: String },

    #[error("component {token:?} is not finite")]
    NotFinite { token: String },
}


/// Parses `"x, y, z"` into a vector. Whitespace around each component is ignored.
pub fn parse_triple(text: &str) -> Result<Vec3, InputError> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(InputError::WrongArity { count: parts.len() });
    }

    let mut out = [0.0f64; 3];
    for (slot, token) in out.iter_mut().zip(&parts) {
        let value: f64 = token.parse().map_err(|_| InputError::NotANumber {
            token: (*token).to_owned(),
        })?;
        if !value.is_finite() {
            return Err(InputError::NotFinite { token: (*token).to_owned() });
        }
        *slot = value;
    }

    Ok(Vector3::new(out[0], out[1], out[2]))
}


/// Like [`parse_triple`], but a blank field anchors the vector at the origin.
pub fn parse_position(text: &str) -> Result<Vec3, InputError> {
    if text.trim().is_empty() {
        Ok(Vector3::zeros())
    } else {
        parse_triple(text)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_padded_components() {
        assert_eq!(parse_triple(" 1 , -2.5 ,3e1 "), Ok(Vector3::new(1.0, -2.5, 30.0)));
    }

    #[test]
    fn keeps_full_double_precision() {
        assert_eq!(parse_triple("123456789,0,0"), Ok(Vector3::new(123456789.0, 0.0, 0.0)));
        assert_eq!(parse_triple("1e39, 0, -1e39"), Ok(Vector3::new(1e39, 0.0, -1e39)));
        assert_eq!(parse_triple("0.045,0,0").map(|v| v.x), Ok(0.045));
    }

    #[test]
    fn rejects_wrong_token_count() {
        assert_eq!(parse_triple("1,2"), Err(InputError::WrongArity { count: 2 }));
        assert_eq!(parse_triple("1,2,3,4"), Err(InputError::WrongArity { count: 4 }));
        assert_eq!(parse_triple(""), Err(InputError::WrongArity { count: 1 }));
    }

    #[test]
    fn rejects_non_numeric_tokens() {
        assert_eq!(
            parse_triple("a,b,c"),
            Err(InputError::NotANumber { token: "a".into() })
        );
        assert_eq!(
            parse_triple("1,,3"),
            Err(InputError::NotANumber { token: String::new() })
        );
    }

    #[test]
    fn rejects_infinite_and_nan() {
        assert_eq!(
            parse_triple("inf,0,0"),
            Err(InputError::NotFinite { token: "inf".into() })
        );
        assert!(matches!(parse_triple("0,NaN,0"), Err(InputError::NotFinite { .. })));
    }

    #[test]
    fn blank_position_is_origin() {
        assert_eq!(parse_position(""), Ok(Vector3::zeros()));
        assert_eq!(parse_position("   "), Ok(Vector3::zeros()));
        assert_eq!(parse_position("1,1,1"), Ok(Vector3::new(1.0, 1.0, 1.0)));
        assert!(parse_position("1,1").is_err());
    }
}
