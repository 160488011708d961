use nalgebra::Vector3;

use crate::camera::Camera;
use crate::math::Vec3;
use crate::scene::{PlottedVector, SamplePlane, VectorSource};

pub const CUSTOM_COLOR: egui::Color32 = egui::Color32::from_rgb(0, 255, 0);
pub const RANDOM_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 0, 0);
const PLANE_COLOR: egui::Color32 = egui::Color32::from_rgba_premultiplied(40, 90, 150, 160);

const AXIS_COLORS: [egui::Color32; 3] = [
    egui::Color32::from_rgb(0x83, 0xB3, 0x66),
    egui::Color32::from_rgb(0xFF, 0x71, 0x54),
    egui::Color32::from_rgb(0x8B, 0xC9, 0xD7),
];


/// Unit-spaced grid on the XY plane, `size` cells out from the origin each way.
pub fn draw_grid_xy(painter: &egui::Painter, project: &impl Fn(Vec3) -> egui::Pos2, color: egui::Color32, size: i32) {
    let stroke = egui::Stroke::new(1.0, color);
    let s = f64::from(size);

    for i in -size..=size {
        let t = f64::from(i);
        painter.line_segment([project(Vector3::new(t, -s, 0.0)), project(Vector3::new(t, s, 0.0))], stroke);
        painter.line_segment([project(Vector3::new(-s, t, 0.0)), project(Vector3::new(s, t, 0.0))], stroke);
    }
}


pub fn draw_axes_3d(painter: &egui::Painter, project: &impl Fn(Vec3) -> egui::Pos2, half_len: f64) {
    for (i, color) in AXIS_COLORS.iter().enumerate() {
        let mut start = Vector3::zeros(); let mut end = Vector3::zeros();
        start[i] = -half_len; end[i] = half_len;
        painter.line_segment([project(start), project(end)], egui::Stroke::new(1.0, color.linear_multiply(0.5)));
    }
}


pub fn draw_arrow(painter: &egui::Painter, start: egui::Pos2, end: egui::Pos2, color: egui::Color32, width: f32) {
    let vec = end - start;
    let len = vec.length();
    if len < 1.0 { return; }

    painter.line_segment([start, end], egui::Stroke::new(width, color));

    let head_len = (len * 0.15).clamp(5.0, 15.0);
    let dir = vec / len;
    let perp = egui::vec2(-dir.y, dir.x) * (head_len * 0.4);
    let base = end - dir * head_len;

    painter.add(egui::Shape::convex_polygon(
        vec![end, base + perp, base - perp],
        color,
        egui::Stroke::NONE,
    ));
}


pub fn vector_color(source: VectorSource) -> egui::Color32 {
    match source {
        VectorSource::Custom => CUSTOM_COLOR,
        VectorSource::Random => RANDOM_COLOR,
    }
}


pub fn draw_vector(painter: &egui::Painter, project: &impl Fn(Vec3) -> egui::Pos2, v: &PlottedVector) {
    let [start, end] = v.endpoints();
    draw_arrow(painter, project(start), project(end), vector_color(v.source), 3.0);
}


/// Wireframe through the plane's sample points, one polyline per row and column.
pub fn draw_plane_mesh(painter: &egui::Painter, project: &impl Fn(Vec3) -> egui::Pos2, plane: &SamplePlane) {
    let n = plane.resolution;
    if n < 2 { return; }
    let stroke = egui::Stroke::new(1.0, PLANE_COLOR);

    // Translucent fill under the wires.
    let corners = [
        plane.point(0, 0),
        plane.point(0, n - 1),
        plane.point(n - 1, n - 1),
        plane.point(n - 1, 0),
    ];
    painter.add(egui::Shape::convex_polygon(
        corners.iter().map(|&c| project(c)).collect(),
        PLANE_COLOR.gamma_multiply(0.25),
        egui::Stroke::NONE,
    ));

    for r in 0..n {
        let row: Vec<egui::Pos2> = (0..n).map(|c| project(plane.point(r, c))).collect();
        painter.add(egui::Shape::line(row, stroke));
    }
    for c in 0..n {
        let col: Vec<egui::Pos2> = (0..n).map(|r| project(plane.point(r, c))).collect();
        painter.add(egui::Shape::line(col, stroke));
    }
}


/// Screen-space knob for one end of an axis in the view gizmo.
struct AxisKnob {
    label: &'static str,
    color: egui::Color32,
    pos: egui::Pos2,
    depth: f32,
    positive: bool,
    view: (f32, f32),
}


/// Yaw and pitch that point the camera straight down an axis, so that axis
/// end faces the viewer. Pitch hits the camera clamp for the Y axis.
pub fn axis_view(axis: usize, positive: bool) -> (f32, f32) {
    use std::f32::consts::{FRAC_PI_2, PI};

    match (axis, positive) {
        (0, true) => (-FRAC_PI_2, 0.0),
        (0, false) => (FRAC_PI_2, 0.0),
        (1, true) => (0.0, FRAC_PI_2),
        (1, false) => (0.0, -FRAC_PI_2),
        (_, true) => (0.0, 0.0),
        (_, false) => (PI, 0.0),
    }
}


/// Axis triad in the top-right corner. Clicking an axis knob looks down that axis.
pub fn draw_view_gizmo(ui: &egui::Ui, painter: &egui::Painter, camera: &mut Camera) {
    const RADIUS: f32 = 36.0;
    const LABELS: [&str; 3] = ["X", "Y", "Z"];

    let view_mat = camera.view_matrix();
    let clip = painter.clip_rect();
    let center = egui::pos2(clip.right() - RADIUS - 20.0, clip.top() + RADIUS + 20.0);

    let mut knobs = Vec::with_capacity(6);
    for axis in 0..3 {
        for positive in [true, false] {
            let mut dir = Vector3::<f32>::zeros();
            dir[axis] = if positive { 1.0 } else { -1.0 };
            let v = view_mat * dir;

            knobs.push(AxisKnob {
                label: LABELS[axis],
                color: if positive { AXIS_COLORS[axis] } else { AXIS_COLORS[axis].gamma_multiply(0.4) },
                pos: center + egui::vec2(v.x, -v.y) * RADIUS,
                depth: v.z,
                positive,
                view: axis_view(axis, positive),
            });
        }
    }
    // Back to front, so knobs nearer the viewer paint on top.
    knobs.sort_by(|a, b| a.depth.total_cmp(&b.depth));

    painter.circle_filled(center, RADIUS + 10.0, egui::Color32::from_black_alpha(90));

    let pointer = ui.input(|i| i.pointer.hover_pos());
    let clicked = ui.input(|i| i.pointer.primary_clicked());
    let mut snap_to = None;

    for knob in &knobs {
        let knob_radius = if knob.positive { 8.0 } else { 5.0 };
        let hovered = pointer.is_some_and(|p| p.distance(knob.pos) <= knob_radius + 2.0);

        if knob.positive {
            painter.line_segment([center, knob.pos], egui::Stroke::new(2.0, knob.color));
        }
        let fill = if hovered { egui::Color32::WHITE } else { knob.color };
        painter.circle_filled(knob.pos, knob_radius, fill);
        if knob.positive {
            painter.text(knob.pos, egui::Align2::CENTER_CENTER, knob.label, egui::FontId::proportional(10.0), egui::Color32::BLACK);
        }

        if hovered && clicked {
            snap_to = Some(knob);
        }
    }

    // The last hit in paint order is the one drawn on top.
    if let Some(knob) = snap_to {
        tracing::debug!(axis = knob.label, positive = knob.positive, "view gizmo snap");
        camera.set_view(knob.view.0, knob.view.1);
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_view_turns_that_axis_toward_the_viewer() {
        for axis in 0..3 {
            for positive in [true, false] {
                let (yaw, pitch) = axis_view(axis, positive);
                let mut cam = Camera::new(false);
                cam.set_view(yaw, pitch);

                let mut dir = Vector3::<f32>::zeros();
                dir[axis] = if positive { 1.0 } else { -1.0 };
                let facing = cam.view_matrix() * dir;
                assert!(facing.z > 0.99, "axis {axis} positive={positive}: {facing:?}");
            }
        }
    }

    #[test]
    fn vector_colors_follow_source() {
        assert_eq!(vector_color(VectorSource::Custom), CUSTOM_COLOR);
        assert_eq!(vector_color(VectorSource::Random), RANDOM_COLOR);
    }
}
