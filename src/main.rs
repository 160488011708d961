use anyhow::Result;
use eframe::egui;

mod app;
mod camera;
mod config;
mod format;
mod input;
mod math;
mod render;
mod scene;
mod util;


use app::VectorPlotApp;
use config::ViewerConfig;


fn main() -> Result<()> {
    util::init_tracing();

    let config = ViewerConfig::load()?;
    tracing::info!(title = %config.window_title, "starting viewer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size(config.window_size)
            .with_position(config.window_position),
        ..Default::default()
    };

    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            setup_style(&cc.egui_ctx, config.background);
            Box::new(VectorPlotApp::new(config))
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe exited with error: {e}"))
}


// --- Helpers ---

fn setup_style(ctx: &egui::Context, background: [u8; 3]) {
    let [r, g, b] = background;
    let bg = egui::Color32::from_rgb(r, g, b);

    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = bg;
    visuals.window_fill = bg;
    visuals.override_text_color = Some(egui::Color32::WHITE);

    ctx.set_visuals(visuals);
}
