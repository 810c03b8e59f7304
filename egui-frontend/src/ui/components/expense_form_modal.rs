//! # Expense Form Modal
//!
//! egui rendering of the add/edit expense dialog. All behavior lives in
//! `domain::expense_form`; this module only lays out the fields and routes
//! button presses back to the dialog.

use eframe::egui;
use shared::ExpenseCategory;

use crate::app::ExpenseTrackerApp;
use crate::domain::expense_form::{CANCEL_BUTTON_LABEL, SAVE_BUTTON_LABEL};
use crate::domain::FormField;

const MODAL_SIZE: egui::Vec2 = egui::vec2(460.0, 520.0);
const ACCENT: egui::Color32 = egui::Color32::from_rgb(46, 125, 50);
const ERROR_RED: egui::Color32 = egui::Color32::from_rgb(220, 50, 50);

/// What the user did with the dialog this frame
#[derive(Debug, Default)]
struct ModalActions {
    tap_image: bool,
    save: bool,
    cancel: bool,
}

impl ExpenseTrackerApp {
    /// Render the expense form modal if a dialog is open
    pub fn render_expense_form_modal(&mut self, ctx: &egui::Context) {
        let Some(dialog) = self.expense_form.as_mut() else {
            return;
        };
        if !dialog.is_open() {
            return;
        }

        let title = dialog.title();
        let currency_symbol = self.config.currency_symbol.as_str();
        let mut actions = ModalActions::default();

        // Use Area with Foreground order to ensure it appears above everything
        egui::Area::new(egui::Id::new("expense_form_modal_overlay"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                // Dark semi-transparent background
                let screen_rect = ctx.screen_rect();
                ui.painter().rect_filled(
                    screen_rect,
                    egui::Rounding::ZERO,
                    egui::Color32::from_rgba_unmultiplied(0, 0, 0, 128),
                );

                ui.allocate_ui_at_rect(screen_rect, |ui| {
                    ui.centered_and_justified(|ui| {
                        egui::Frame::window(ui.style())
                            .fill(egui::Color32::WHITE)
                            .stroke(egui::Stroke::new(3.0, ACCENT))
                            .rounding(egui::Rounding::same(15.0))
                            .inner_margin(egui::Margin::same(40.0))
                            .show(ui, |ui| {
                                ui.set_min_size(MODAL_SIZE);
                                ui.set_max_size(MODAL_SIZE);

                                ui.vertical(|ui| {
                                    ui.label(egui::RichText::new(title)
                                        .font(egui::FontId::new(24.0, egui::FontFamily::Proportional))
                                        .strong()
                                        .color(ACCENT));
                                    ui.add_space(15.0);

                                    let form = dialog.form_mut();
                                    for field in FormField::ORDER {
                                        let hint = field.hint(currency_symbol);
                                        match field {
                                            FormField::Description => {
                                                ui.add(egui::TextEdit::singleline(&mut form.description)
                                                    .hint_text(hint)
                                                    .desired_width(f32::INFINITY));
                                            }
                                            FormField::Amount => {
                                                let response = ui.add(egui::TextEdit::singleline(&mut form.amount_input)
                                                    .hint_text(hint)
                                                    .desired_width(f32::INFINITY));
                                                if response.changed() {
                                                    let raw = form.amount_input.clone();
                                                    form.set_amount_input(&raw);
                                                }
                                                if let Some(error) = &form.amount_error {
                                                    ui.label(egui::RichText::new(format!("❌ {}", error))
                                                        .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                                                        .color(ERROR_RED));
                                                }
                                            }
                                            FormField::Category => {
                                                egui::ComboBox::from_id_source("expense_category")
                                                    .width(200.0)
                                                    .selected_text(form.category.label())
                                                    .show_ui(ui, |ui| {
                                                        for category in ExpenseCategory::ALL {
                                                            ui.selectable_value(&mut form.category, category, category.label());
                                                        }
                                                    });
                                            }
                                            FormField::Date => {
                                                ui.horizontal(|ui| {
                                                    ui.label(hint);
                                                    ui.add(egui_extras::DatePickerButton::new(&mut form.date)
                                                        .id_source("expense_date"));
                                                });
                                            }
                                            FormField::ImageUrl => {
                                                // Read-only: tapping asks the image picker instead of editing
                                                let text = if form.image_url.trim().is_empty() {
                                                    egui::RichText::new(hint).weak()
                                                } else {
                                                    egui::RichText::new(&form.image_url)
                                                };
                                                let field_button = egui::Button::new(text)
                                                    .min_size(egui::vec2(ui.available_width(), 28.0));
                                                if ui.add(field_button).clicked() {
                                                    actions.tap_image = true;
                                                }
                                                if let Some(url) = form.trimmed_image_url() {
                                                    ui.add(egui::Image::new(url)
                                                        .max_height(90.0)
                                                        .rounding(egui::Rounding::same(6.0)));
                                                }
                                            }
                                        }
                                        ui.add_space(10.0);
                                    }

                                    if let Some(error) = &form.form_error {
                                        ui.label(egui::RichText::new(format!("❌ {}", error))
                                            .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                                            .color(ERROR_RED));
                                    }

                                    ui.add_space(10.0);
                                    ui.horizontal(|ui| {
                                        let cancel_button = egui::Button::new(egui::RichText::new(CANCEL_BUTTON_LABEL)
                                            .color(egui::Color32::WHITE))
                                            .fill(egui::Color32::from_rgb(120, 120, 120))
                                            .rounding(egui::Rounding::same(10.0))
                                            .min_size(egui::vec2(100.0, 36.0));
                                        if ui.add(cancel_button).clicked() {
                                            actions.cancel = true;
                                        }

                                        ui.add_space(20.0);

                                        let save_button = egui::Button::new(egui::RichText::new(SAVE_BUTTON_LABEL)
                                            .color(egui::Color32::WHITE))
                                            .fill(ACCENT)
                                            .rounding(egui::Rounding::same(10.0))
                                            .min_size(egui::vec2(100.0, 36.0));
                                        if ui.add(save_button).clicked() {
                                            actions.save = true;
                                        }
                                    });
                                });
                            });
                    });
                });
            });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            actions.cancel = true;
        }

        if actions.tap_image {
            dialog.tap_image();
        }
        if actions.cancel {
            dialog.cancel();
        } else if actions.save {
            // Errors stay on the form and are shown next frame
            let _ = dialog.confirm();
        }
    }
}
