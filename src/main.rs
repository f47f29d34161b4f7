#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod config;
mod format;
mod io;
mod model;
mod state;
mod status;
mod ui;
mod view;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 900.0])
            .with_min_inner_size([720.0, 480.0])
            .with_title("Customer Portal"),
        ..Default::default()
    };

    eframe::run_native(
        "Customer Portal",
        options,
        Box::new(|cc| Ok(Box::new(app::PortalApp::new(cc)))),
    )
}
