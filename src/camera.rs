use nalgebra::Matrix3;

use crate::math::{to_render, Vec3};

const DEFAULT_YAW: f32 = 0.5;
const DEFAULT_PITCH: f32 = 0.3;
const PITCH_LIMIT: f32 = 1.5;
/// Eye distance used for the perspective divide.
const EYE_DISTANCE: f32 = 20.0;


#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub yaw: f32,
    pub pitch: f32,
    pub zoom: f32,
    pub perspective: bool,
}

impl Camera {
    pub fn new(perspective: bool) -> Self {
        Self { yaw: DEFAULT_YAW, pitch: DEFAULT_PITCH, zoom: 1.0, perspective }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.perspective);
    }

    pub fn set_view(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    pub fn drag(&mut self, delta: egui::Vec2) {
        self.yaw += delta.x * 0.01;
        self.pitch = (self.pitch + delta.y * 0.01).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    pub fn scroll(&mut self, delta_y: f32) {
        self.zoom = (self.zoom * (1.0 + delta_y * 0.001)).clamp(0.1, 10.0);
    }

    pub fn view_matrix(&self) -> Matrix3<f32> {
        let (cr, sr) = (self.yaw.cos(), self.yaw.sin());
        let (cp, sp) = (self.pitch.cos(), self.pitch.sin());
        Matrix3::new(
            cr, 0.0, sr,
            sr * sp, cp, -cr * sp,
            -sr * cp, sp, cr * cp,
        )
    }

    /// Pixels per world unit at the focal plane.
    pub fn scale(&self, rect: egui::Rect) -> f32 {
        (rect.width().min(rect.height()) / 25.0) * self.zoom
    }

    pub fn projector(&self, rect: egui::Rect) -> impl Fn(Vec3) -> egui::Pos2 {
        let view_mat = self.view_matrix();
        let base_scale = self.scale(rect);
        let perspective = self.perspective;
        let center = rect.center();

        move |v: Vec3| {
            let v_v = view_mat * to_render(&v);
            let factor = if perspective {
                (base_scale * EYE_DISTANCE) / (EYE_DISTANCE - v_v.z).max(0.1)
            } else {
                base_scale
            };
            center + egui::vec2(v_v.x * factor, -v_v.y * factor)
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(true)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    fn rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(500.0, 250.0))
    }

    #[test]
    fn origin_projects_to_center() {
        let cam = Camera::default();
        let p = cam.projector(rect())(Vector3::zeros());
        assert_relative_eq!(p.x, 250.0);
        assert_relative_eq!(p.y, 125.0);
    }

    #[test]
    fn front_view_orthographic_maps_axes_to_screen() {
        let mut cam = Camera::new(false);
        cam.set_view(0.0, 0.0);
        let project = cam.projector(rect());
        let scale = cam.scale(rect());

        let px = project(Vector3::x());
        let py = project(Vector3::y());
        assert_relative_eq!(px.x - 250.0, scale, epsilon = 1e-4);
        assert_relative_eq!(py.y - 125.0, -scale, epsilon = 1e-4);
    }

    #[test]
    fn view_matrix_is_a_rotation() {
        let cam = Camera::default();
        let m = cam.view_matrix();
        assert_relative_eq!(m.determinant(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(m * m.transpose(), Matrix3::identity(), epsilon = 1e-5);
    }

    #[test]
    fn pitch_and_zoom_are_clamped() {
        let mut cam = Camera::default();
        cam.drag(egui::vec2(0.0, 10_000.0));
        assert_eq!(cam.pitch, 1.5);
        for _ in 0..100 {
            cam.scroll(5_000.0);
        }
        assert_eq!(cam.zoom, 10.0);

        cam.reset();
        assert_eq!(cam, Camera::default());
    }
}
