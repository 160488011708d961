use eframe::egui;

use crate::camera::Camera;
use crate::config::ViewerConfig;
use crate::format::{describe_scene, DisplayFormat};
use crate::input::INVALID_INPUT_MESSAGE;
use crate::render::{draw_axes_3d, draw_grid_xy, draw_plane_mesh, draw_vector, draw_view_gizmo, CUSTOM_COLOR, RANDOM_COLOR};
use crate::scene::Scene;


pub struct VectorPlotApp {
    config: ViewerConfig,
    scene: Scene,
    camera: Camera,

    position_input: String,
    direction_input: String,
    error: Option<&'static str>,
    parametric: bool,
}

impl VectorPlotApp {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            camera: Camera::new(config.perspective),
            config,
            scene: Scene::default(),
            position_input: String::new(),
            direction_input: String::new(),
            error: None,
            parametric: false,
        }
    }

    fn background(&self) -> egui::Color32 {
        let [r, g, b] = self.config.background;
        egui::Color32::from_rgb(r, g, b)
    }


    fn add_custom_vector(&mut self) {
        match self.scene.add_custom(&self.position_input, &self.direction_input) {
            Ok(_) => {
                self.error = None;
                self.position_input.clear();
                self.direction_input.clear();
            }
            Err(err) => {
                tracing::warn!(
                    position = %self.position_input,
                    direction = %self.direction_input,
                    %err,
                    "rejected vector input"
                );
                self.error = Some(INVALID_INPUT_MESSAGE);
            }
        }
    }


    fn add_random_vector(&mut self) {
        let ranges = self.config.random;
        self.scene.add_random(&mut rand::thread_rng(), &ranges);
    }


    fn add_plane(&mut self) {
        let spec = self.config.plane;
        self.scene.add_sample_plane(&spec);
    }


    fn handle_hotkeys(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() { return; }
        let (random, plane, persp, home) = ctx.input(|i| (
            i.key_pressed(egui::Key::R),
            i.key_pressed(egui::Key::P),
            i.key_pressed(egui::Key::V),
            i.key_pressed(egui::Key::Home),
        ));

        if random { self.add_random_vector(); }
        if plane { self.add_plane(); }
        if persp { self.camera.perspective = !self.camera.perspective; }
        if home { self.camera.reset(); }
    }


    fn draw_settings_ui(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("vector_input_grid").num_columns(2).spacing([8.0, 6.0]).show(ui, |ui| {
            ui.label("Enter Position Vector (x, y, z):");
            ui.add(egui::TextEdit::singleline(&mut self.position_input).hint_text("0, 0, 0").desired_width(120.0));
            ui.end_row();

            ui.label("Enter Direction Vector (x, y, z):");
            let resp = ui.add(egui::TextEdit::singleline(&mut self.direction_input).hint_text("1, 2, 3").desired_width(120.0));
            if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                self.add_custom_vector();
            }
            ui.end_row();
        });

        if let Some(msg) = self.error {
            ui.colored_label(egui::Color32::RED, msg);
        }

        ui.add_space(6.0);
        if ui.button(egui::RichText::new("Plot Custom Vector").color(CUSTOM_COLOR)).clicked() {
            self.add_custom_vector();
        }
        if ui.button(egui::RichText::new("Add Random Vector [R]").color(RANDOM_COLOR)).clicked() {
            self.add_random_vector();
        }
        if ui.button("Add Plane [P]").clicked() {
            self.add_plane();
        }

        ui.separator();
        ui.checkbox(&mut self.parametric, "Parameter Form");
        ui.checkbox(&mut self.camera.perspective, "Perspective [V]");

        ui.separator();
        let text = describe_scene(&self.scene, DisplayFormat::from_parametric(self.parametric));
        ui.label(egui::RichText::new(text).monospace());
    }
}


impl eframe::App for VectorPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_hotkeys(ctx);
        let bg = self.background();

        // --- SETTINGS ---
        egui::SidePanel::left("settings")
            .width_range(280.0..=420.0)
            .frame(egui::Frame::side_top_panel(&ctx.style()).fill(bg))
            .show(ctx, |ui| {
                ui.heading("Settings");
                ui.collapsing("Hotkeys", |ui| {
                    ui.label("R: Random | P: Plane\nV: Persp | Home: Reset view\nDrag: Rotate | Scroll: Zoom");
                });
                ui.separator();

                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| self.draw_settings_ui(ui));
            });

        // --- VIEWPORT ---
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(bg))
            .show(ctx, |ui| {
                let (rect, resp) = ui.allocate_exact_size(ui.available_size(), egui::Sense::drag());

                if resp.dragged_by(egui::PointerButton::Primary) {
                    self.camera.drag(resp.drag_delta());
                }
                if resp.hovered() {
                    self.camera.scroll(ui.input(|i| i.smooth_scroll_delta.y));
                }

                let painter = ui.painter_at(rect);
                let project = self.camera.projector(rect);
                let grid_size = self.config.grid_size;

                draw_grid_xy(&painter, &project, egui::Color32::from_gray(70), grid_size);
                draw_axes_3d(&painter, &project, f64::from(grid_size));

                for plane in &self.scene.planes {
                    draw_plane_mesh(&painter, &project, plane);
                }
                for v in &self.scene.vectors {
                    draw_vector(&painter, &project, v);
                }

                draw_view_gizmo(ui, &painter, &mut self.camera);
            });
    }
}
