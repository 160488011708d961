use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Overrides the config file location.
pub const CONFIG_ENV: &str = "VECTOR_PLOTTER_CONFIG";

const MAX_GRID_SIZE: i32 = 100;
const MAX_RANDOM_RANGE: u32 = 1000;
const MAX_PLANE_RESOLUTION: usize = 200;
const MAX_PLANE_COORD: f64 = 1000.0;


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub window_title: String,
    pub window_size: [f32; 2],
    pub window_position: [f32; 2],
    /// Viewport and panel background, RGB.
    pub background: [u8; 3],
    /// Half-size of the XY grid, in unit cells.
    pub grid_size: i32,
    pub perspective: bool,
    pub random: RandomRanges,
    pub plane: PlaneSpec,
}

/// Inclusive integer bounds for generated vectors: components land in `-n..=n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomRanges {
    pub position: i32,
    pub direction: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaneSpec {
    pub extent: f64,
    pub resolution: usize,
    pub z: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window_title: "3D Vector and Plane Plotter".to_owned(),
            window_size: [800.0, 600.0],
            window_position: [100.0, 100.0],
            background: [18, 18, 18],
            grid_size: 10,
            perspective: true,
            random: RandomRanges::default(),
            plane: PlaneSpec::default(),
        }
    }
}

impl Default for RandomRanges {
    fn default() -> Self {
        Self { position: 5, direction: 10 }
    }
}

impl Default for PlaneSpec {
    fn default() -> Self {
        Self { extent: 2.0, resolution: 10, z: 0.0 }
    }
}

impl ViewerConfig {
    /// Reads the config from `$VECTOR_PLOTTER_CONFIG`, falling back to the
    /// platform config dir. A missing file means defaults.
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            Some(path) => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let cfg = Self::from_json(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(cfg)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let mut cfg: Self = serde_json::from_str(text)?;
        cfg.sanitize();
        Ok(cfg)
    }

    fn sanitize(&mut self) {
        self.grid_size = self.grid_size.clamp(1, MAX_GRID_SIZE);
        self.random.position = bounded_range(self.random.position);
        self.random.direction = bounded_range(self.random.direction);
        self.plane.resolution = self.plane.resolution.clamp(2, MAX_PLANE_RESOLUTION);
        self.plane.extent = self.plane.extent.abs().min(MAX_PLANE_COORD);
        self.plane.z = self.plane.z.clamp(-MAX_PLANE_COORD, MAX_PLANE_COORD);
    }
}


fn bounded_range(n: i32) -> i32 {
    // Fits in i32 after the min, so `-n..=n` cannot overflow.
    n.unsigned_abs().min(MAX_RANDOM_RANGE) as i32
}


fn config_path() -> Option<PathBuf> {
    if let Ok(p) = std::env::var(CONFIG_ENV) {
        return Some(PathBuf::from(p));
    }
    ProjectDirs::from("", "", "vector-plotter").map(|dirs| dirs.config_dir().join("config.json"))
}
