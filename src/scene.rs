use nalgebra::Vector3;
use rand::Rng;

use crate::config::{PlaneSpec, RandomRanges};
use crate::input::{parse_position, parse_triple, InputError};
use crate::math::{magnitude, plane_grid, segment, Vec3};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorSource {
    Custom,
    Random,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlottedVector {
    pub origin: Vec3,
    pub direction: Vec3,
    pub source: VectorSource,
}

impl PlottedVector {
    pub fn endpoints(&self) -> [Vec3; 2] {
        segment(self.origin, self.direction)
    }

    pub fn magnitude(&self) -> f64 {
        magnitude(&self.direction)
    }
}


#[derive(Debug, Clone, PartialEq)]
pub struct SamplePlane {
    pub z: f64,
    pub extent: f64,
    pub resolution: usize,
    /// Row-major, `resolution` points per row.
    pub points: Vec<Vec3>,
}

impl SamplePlane {
    pub fn new(spec: &PlaneSpec) -> Self {
        Self {
            z: spec.z,
            extent: spec.extent,
            resolution: spec.resolution,
            points: plane_grid(spec.extent, spec.resolution, spec.z),
        }
    }

    pub fn point(&self, row: usize, col: usize) -> Vec3 {
        self.points[row * self.resolution + col]
    }
}


#[derive(Debug, Default)]
pub struct Scene {
    pub vectors: Vec<PlottedVector>,
    pub planes: Vec<SamplePlane>,
}

impl Scene {
    /// Parses both fields and appends a custom vector. Nothing is added on error.
    pub fn add_custom(&mut self, position: &str, direction: &str) -> Result<&PlottedVector, InputError> {
        let direction = parse_triple(direction)?;
        let origin = parse_position(position)?;

        tracing::info!(?origin, ?direction, "custom vector added");
        Ok(self.push(PlottedVector { origin, direction, source: VectorSource::Custom }))
    }

    pub fn add_random<R: Rng + ?Sized>(&mut self, rng: &mut R, ranges: &RandomRanges) -> &PlottedVector {
        let origin = random_int_vector(rng, ranges.position);
        let direction = random_int_vector(rng, ranges.direction);

        tracing::info!(?origin, ?direction, "random vector added");
        self.push(PlottedVector { origin, direction, source: VectorSource::Random })
    }

    pub fn add_sample_plane(&mut self, spec: &PlaneSpec) -> &SamplePlane {
        self.planes.push(SamplePlane::new(spec));
        tracing::info!(count = self.planes.len(), z = spec.z, "sample plane added");
        &self.planes[self.planes.len() - 1]
    }

    fn push(&mut self, v: PlottedVector) -> &PlottedVector {
        self.vectors.push(v);
        &self.vectors[self.vectors.len() - 1]
    }
}


fn random_int_vector<R: Rng + ?Sized>(rng: &mut R, max: i32) -> Vec3 {
    Vector3::from_fn(|_, _| f64::from(rng.gen_range(-max..=max)))
}
