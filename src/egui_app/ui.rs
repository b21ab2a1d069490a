//! egui renderer for the application UI.

mod assets;
mod form_panel;
mod result_panel;
mod status_bar;
pub mod style;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::config::AppSettings;
use crate::egui_app::controller::EguiController;
use crate::prediction::HttpPredictionGateway;
use assets::AssetTextures;
use eframe::egui;

/// Minimum window size that still fits the form and result panels.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(720.0, 480.0);

const PENDING_REPAINT_INTERVAL: Duration = Duration::from_millis(100);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
    assets: AssetTextures,
}

impl EguiApp {
    /// Create the app from loaded settings, wiring the HTTP gateway.
    pub fn new(settings: &AppSettings) -> Result<Self, String> {
        let gateway = HttpPredictionGateway::from_settings(&settings.endpoint)
            .map_err(|err| format!("Failed to configure prediction endpoint: {err}"))?;
        tracing::info!("Prediction endpoint: {}", gateway.url());
        let controller = EguiController::new(Arc::new(gateway));
        Ok(Self::with_controller(controller, settings.assets.resolved_dir()))
    }

    /// Create the app around an existing controller.
    pub fn with_controller(controller: EguiController, assets_dir: PathBuf) -> Self {
        Self {
            controller,
            visuals_set: false,
            assets: AssetTextures::new(assets_dir),
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_background_jobs();
        if self.controller.is_submitting() {
            ctx.request_repaint_after(PENDING_REPAINT_INTERVAL);
        }
        self.render_status(ctx);
        self.render_result_panel(ctx);
        self.render_form_panel(ctx);
    }
}
