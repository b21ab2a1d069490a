use super::EguiApp;
use super::assets::AssetKind;
use super::style;
use eframe::egui::{self, Frame, Margin, RichText, load::SizedTexture};

const PANEL_WIDTH: f32 = 380.0;
const IMAGE_MAX_HEIGHT: f32 = 300.0;

impl EguiApp {
    /// Render the latest label, its image, or the last submission error.
    pub(super) fn render_result_panel(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::SidePanel::right("result_panel")
            .resizable(false)
            .exact_width(PANEL_WIDTH)
            .frame(
                Frame::new()
                    .fill(palette.bg_secondary)
                    .stroke(style::section_stroke())
                    .inner_margin(Margin::same(24)),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    self.render_result_body(ui);
                });
            });
    }

    fn render_result_body(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        if self.controller.is_submitting() {
            ui.add_space(8.0);
            ui.spinner();
            ui.label(RichText::new("Waiting for prediction…").color(palette.text_muted));
            ui.add_space(8.0);
        }
        if let Some(view) = self.controller.result_view() {
            ui.heading(RichText::new(&view.headline).color(egui::Color32::WHITE));
            ui.add_space(12.0);
            if let Some(image) = view.image {
                match self.assets.texture(ui.ctx(), AssetKind::Result(image)) {
                    Some(texture) => {
                        ui.add(
                            egui::Image::from_texture(SizedTexture::from_handle(&texture))
                                .max_height(IMAGE_MAX_HEIGHT)
                                .max_width(ui.available_width()),
                        )
                        .on_hover_text(image.alt_text());
                    }
                    None => {
                        ui.label(RichText::new(image.alt_text()).color(palette.text_muted));
                    }
                }
            }
        } else if !self.controller.is_submitting()
            && self.controller.ui.prediction.last_error.is_none()
        {
            ui.label(RichText::new("No prediction yet").color(palette.text_muted));
        }
        if let Some(error) = &self.controller.ui.prediction.last_error {
            ui.add_space(12.0);
            ui.colored_label(palette.warning, format!("Prediction failed: {error}"));
        }
    }
}
