use eframe::egui;

use crate::app::ExpenseTrackerApp;
use crate::domain::amount::format_amount;

impl ExpenseTrackerApp {
    /// Render the header: title, total spent, sign-in box and "Add Expense"
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading(self.config.window_title.as_str());

            let total: f64 = self.expenses.iter().map(|expense| expense.amount).sum();
            ui.label(format!(
                "{} expenses, {} total",
                self.expenses.len(),
                format_amount(total, &self.config.currency_symbol)
            ));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("➕ Add Expense").clicked() {
                    log::info!("➕ Add expense clicked");
                    self.open_add_expense();
                }

                ui.add_space(20.0);

                if ui.button("Sign in").clicked() {
                    let user_id = self.user_input.clone();
                    self.set_signed_in_user(&user_id);
                }
                ui.add(egui::TextEdit::singleline(&mut self.user_input)
                    .hint_text("User id (blank = signed out)")
                    .desired_width(180.0));

                let signed_in = self.session.borrow().clone();
                match signed_in {
                    Some(user_id) => ui.label(format!("👤 {}", user_id)),
                    None => ui.weak("Not signed in"),
                };
            });
        });
    }
}
