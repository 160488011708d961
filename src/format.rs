use crate::math::Vec3;
use crate::scene::Scene;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayFormat {
    /// Parametric form followed by `| m = ...`.
    #[default]
    Magnitude,
    /// Parametric form only.
    Parametric,
}

impl DisplayFormat {
    pub fn from_parametric(checked: bool) -> Self {
        if checked { Self::Parametric } else { Self::Magnitude }
    }
}


/// Two decimals, with trailing zeros and a dangling point dropped.
pub fn format_number(x: f64) -> String {
    let s = format!("{:.2}", x);
    let trimmed = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };

    if trimmed == "-0" { "0".to_owned() } else { trimmed.to_owned() }
}


fn position_text(p: &Vec3) -> String {
    format!("({},{},{})", format_number(p.x), format_number(p.y), format_number(p.z))
}

fn direction_text(d: &Vec3) -> String {
    format!("t({}, {}, {})", format_number(d.x), format_number(d.y), format_number(d.z))
}


pub fn describe_scene(scene: &Scene, format: DisplayFormat) -> String {
    let mut text = String::from("Vectors:\n");

    for (i, v) in scene.vectors.iter().enumerate() {
        let line = match format {
            DisplayFormat::Parametric => {
                format!("v{}: {} + {}\n", i, position_text(&v.origin), direction_text(&v.direction))
            }
            DisplayFormat::Magnitude => format!(
                "v{}: {} + {} | m = {}\n",
                i,
                position_text(&v.origin),
                direction_text(&v.direction),
                format_number(v.magnitude()),
            ),
        };
        text.push_str(&line);
    }

    if !scene.planes.is_empty() {
        text.push_str("Planes:\n");
        for (i, p) in scene.planes.iter().enumerate() {
            let extent = format_number(p.extent);
            text.push_str(&format!(
                "p{}: z = {} | {}x{} samples in [-{}, {}]\n",
                i,
                format_number(p.z),
                p.resolution,
                p.resolution,
                extent,
                extent,
            ));
        }
    }

    text
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlaneSpec;

    #[test]
    fn trims_trailing_zeros() {
        assert_eq!(format_number(2.0), "2");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(2.25), "2.25");
        assert_eq!(format_number(-3.10), "-3.1");
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(100.0), "100");
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(format_number(1.0 / 3.0), "0.33");
        assert_eq!(format_number(2.999), "3");
        assert_eq!(format_number(0.004), "0");
    }

    #[test]
    fn rounds_on_the_exact_double_value() {
        // 0.045 is stored just below the midpoint.
        assert_eq!(format_number(0.045), "0.04");
        assert_eq!(format_number(123456789.0), "123456789");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn negative_zero_is_plain_zero() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-0.001), "0");
    }

    #[test]
    fn same_value_formats_the_same_regardless_of_trailing_zeros() {
        assert_eq!(format_number(2.50), format_number(2.5));
        assert_eq!(format_number(2.00), format_number(2.0));
    }

    #[test]
    fn readout_lists_vectors_with_magnitude() {
        let mut scene = Scene::default();
        scene.add_custom("", "1,2,2").unwrap();
        scene.add_custom("1,0,-1", "0.5,0,0").unwrap();

        let text = describe_scene(&scene, DisplayFormat::Magnitude);
        assert_eq!(
            text,
            "Vectors:\n\
             v0: (0,0,0) + t(1, 2, 2) | m = 3\n\
             v1: (1,0,-1) + t(0.5, 0, 0) | m = 0.5\n"
        );
    }

    #[test]
    fn parametric_readout_omits_magnitude() {
        let mut scene = Scene::default();
        scene.add_custom("2,2,2", "3,4,0").unwrap();

        let text = describe_scene(&scene, DisplayFormat::from_parametric(true));
        assert_eq!(text, "Vectors:\nv0: (2,2,2) + t(3, 4, 0)\n");
    }

    #[test]
    fn large_directions_read_back_exactly() {
        let mut scene = Scene::default();
        scene.add_custom("", "123456789,0,0").unwrap();
        scene.add_custom("", "1e20,0,0").unwrap();
        scene.add_custom("", "0.045,0,0").unwrap();

        let text = describe_scene(&scene, DisplayFormat::Magnitude);
        assert_eq!(
            text,
            "Vectors:\n\
             v0: (0,0,0) + t(123456789, 0, 0) | m = 123456789\n\
             v1: (0,0,0) + t(100000000000000000000, 0, 0) | m = 100000000000000000000\n\
             v2: (0,0,0) + t(0.04, 0, 0) | m = 0.04\n"
        );
    }

    #[test]
    fn empty_scene_is_just_the_header() {
        assert_eq!(describe_scene(&Scene::default(), DisplayFormat::Magnitude), "Vectors:\n");
    }

    #[test]
    fn planes_get_their_own_section() {
        let mut scene = Scene::default();
        scene.add_sample_plane(&PlaneSpec::default());

        let text = describe_scene(&scene, DisplayFormat::Parametric);
        assert_eq!(text, "Vectors:\nPlanes:\np0: z = 0 | 10x10 samples in [-2, 2]\n");
    }
}
