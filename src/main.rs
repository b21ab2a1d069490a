#![deny(missing_docs)]

//! Entry point for the egui-based air quality prediction UI.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use aqpredict::config;
use aqpredict::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use aqpredict::logging;
use eframe::egui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let launch = config::load_or_default()
        .map_err(|err| format!("Failed to load config: {err}"))
        .and_then(|settings| EguiApp::new(&settings));
    if let Err(err) = &launch {
        tracing::error!("{err}");
    }

    let viewport = egui::ViewportBuilder::default()
        .with_title("Air Quality Prediction")
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_inner_size(egui::vec2(1100.0, 640.0));
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Air Quality Prediction",
        native_options,
        Box::new(move |_cc| match launch {
            Ok(app) => Ok(Box::new(app) as Box<dyn eframe::App>),
            Err(message) => Ok(Box::new(LaunchError { message })),
        }),
    )?;
    Ok(())
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start UI");
                ui.label(&self.message);
            });
        });
    }
}
