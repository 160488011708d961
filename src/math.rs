use nalgebra::Vector3;

pub type Vec3 = Vector3<f64>;


/// Euclidean length of `v`.
pub fn magnitude(v: &Vec3) -> f64 {
    v.norm()
}


/// Start and end of the segment drawn for a vector anchored at `origin`.
pub fn segment(origin: Vec3, direction: Vec3) -> [Vec3; 2] {
    [origin, origin + direction]
}


pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}


/// Row-major grid (y outer, x inner) of `resolution²` points at height `z`
/// spanning `[-extent, extent]` on both axes.
pub fn plane_grid(extent: f64, resolution: usize, z: f64) -> Vec<Vec3> {
    let ticks = linspace(-extent, extent, resolution);
    let mut pts = Vec::with_capacity(ticks.len() * ticks.len());

    for &y in &ticks {
        for &x in &ticks {
            pts.push(Vector3::new(x, y, z));
        }
    }
    pts
}


/// Narrows a model-space point for the screen projection.
pub fn to_render(v: &Vec3) -> Vector3<f32> {
    Vector3::new(v.x as f32, v.y as f32, v.z as f32)
}
