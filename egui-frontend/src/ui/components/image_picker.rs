//! # Image Picker Window
//!
//! Stand-in for the platform image picker. It answers the dialog's pending
//! `PickImageRequest` with one of the configured sample images or a typed
//! URI. Closing the window leaves the request unanswered, which keeps the
//! previous image in the form.

use eframe::egui;

use crate::app::ExpenseTrackerApp;

impl ExpenseTrackerApp {
    pub fn render_image_picker(&mut self, ctx: &egui::Context) {
        if self.pending_pick.is_none() {
            return;
        }

        let mut chosen: Option<String> = None;
        let mut abandoned = false;

        egui::Area::new(egui::Id::new("image_picker_window"))
            .order(egui::Order::Tooltip)
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-20.0, 60.0))
            .show(ctx, |ui| {
                egui::Frame::window(ui.style()).show(ui, |ui| {
                    ui.set_max_width(420.0);
                    ui.label(egui::RichText::new("🖼️ Choose Image").strong());
                    ui.add_space(6.0);

                    ui.horizontal_wrapped(|ui| {
                        for uri in &self.config.sample_images {
                            let thumbnail = egui::Image::new(uri.as_str())
                                .max_size(egui::vec2(120.0, 90.0))
                                .sense(egui::Sense::click());
                            if ui.add(thumbnail).on_hover_text(uri.as_str()).clicked() {
                                chosen = Some(uri.clone());
                            }
                        }
                    });

                    ui.separator();

                    ui.horizontal(|ui| {
                        ui.add(egui::TextEdit::singleline(&mut self.custom_image_input)
                            .hint_text("content:// or https:// URI")
                            .desired_width(240.0));
                        let has_input = !self.custom_image_input.trim().is_empty();
                        if ui.add_enabled(has_input, egui::Button::new("Use")).clicked() {
                            chosen = Some(self.custom_image_input.trim().to_string());
                        }
                    });

                    if ui.button("Close").clicked() {
                        abandoned = true;
                    }
                });
            });

        if let Some(uri) = chosen {
            self.answer_pick(uri);
        } else if abandoned {
            self.abandon_pick();
        }
    }
}
