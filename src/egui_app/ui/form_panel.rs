use super::EguiApp;
use super::assets::AssetKind;
use super::style;
use crate::prediction::FieldName;
use eframe::egui::{self, Frame, Margin, RichText, TextEdit};

const INPUT_WIDTH: f32 = 320.0;
const FULL_UV: egui::Rect = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FormAction {
    None,
    Submit,
    Clear,
}

impl EguiApp {
    /// Render the five inputs with their inline errors and the form buttons.
    pub(super) fn render_form_panel(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        let background = self.assets.texture(ctx, AssetKind::Background);
        let card_background = self.assets.texture(ctx, AssetKind::FormBackground);
        egui::CentralPanel::default()
            .frame(Frame::new().fill(palette.bg_primary).inner_margin(Margin::same(24)))
            .show(ctx, |ui| {
                if let Some(texture) = &background {
                    ui.painter().image(
                        texture.id(),
                        ui.max_rect(),
                        FULL_UV,
                        style::background_tint(),
                    );
                }
                let card_slot = ui.painter().add(egui::Shape::Noop);
                let card = Frame::new()
                    .fill(palette.bg_secondary.gamma_multiply(0.85))
                    .stroke(style::section_stroke())
                    .inner_margin(Margin::same(20))
                    .show(ui, |ui| self.render_form_body(ui));
                if let Some(texture) = &card_background {
                    ui.painter().set(
                        card_slot,
                        egui::Shape::image(
                            texture.id(),
                            card.response.rect,
                            FULL_UV,
                            style::background_tint(),
                        ),
                    );
                }
                match card.inner {
                    FormAction::None => {}
                    FormAction::Submit => {
                        self.controller.submit();
                    }
                    FormAction::Clear => self.controller.reset(),
                }
            });
    }

    fn render_form_body(&mut self, ui: &mut egui::Ui) -> FormAction {
        let palette = style::palette();
        let mut action = FormAction::None;
        ui.vertical(|ui| {
            ui.heading(
                RichText::new("Air Quality Prediction")
                    .color(palette.heading)
                    .strong(),
            );
            ui.add_space(16.0);
            for field in FieldName::ALL {
                if self.render_field(ui, field) {
                    action = FormAction::Submit;
                }
                ui.add_space(6.0);
            }
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                let submitting = self.controller.is_submitting();
                if ui
                    .add_enabled(!submitting, egui::Button::new("Predict"))
                    .clicked()
                {
                    action = FormAction::Submit;
                }
                if ui.button("Clear").clicked() {
                    action = FormAction::Clear;
                }
                if submitting {
                    ui.spinner();
                }
            });
        });
        action
    }

    /// Render one labeled input; returns true when Enter was pressed in it.
    fn render_field(&mut self, ui: &mut egui::Ui, field: FieldName) -> bool {
        let palette = style::palette();
        let rule = field.rule();
        ui.label(RichText::new(rule.label).color(palette.text_primary).strong());
        let error = self.controller.ui.form.visible_error(field);
        let mut raw = self.controller.ui.form.raw(field).to_string();
        let edit = TextEdit::singleline(&mut raw)
            .id_salt(field.key())
            .desired_width(INPUT_WIDTH);
        let response = ui.add(edit);
        if error.is_some() {
            ui.painter().rect_stroke(
                response.rect,
                0.0,
                style::invalid_input_stroke(),
                egui::StrokeKind::Outside,
            );
        }
        if response.changed() {
            self.controller.update_field(field, raw);
        }
        let mut submit = false;
        if response.lost_focus() {
            self.controller.blur_field(field);
            submit = ui.input(|i| i.key_pressed(egui::Key::Enter));
        }
        if let Some(message) = error {
            ui.label(RichText::new(message).color(palette.warning));
        }
        submit
    }
}
