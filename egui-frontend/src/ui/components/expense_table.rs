use chrono::Local;
use eframe::egui;
use egui_extras::{Column, TableBuilder};
use shared::ExpenseRecord;

use crate::domain::amount::format_amount;
use crate::domain::calendar_date::calendar_date_from_millis;

/// Render the expense table.
///
/// Returns the index of the row whose "Edit" button was clicked.
pub fn render_expense_table(
    ui: &mut egui::Ui,
    expenses: &[ExpenseRecord],
    currency_symbol: &str,
) -> Option<usize> {
    if expenses.is_empty() {
        ui.label("No expenses yet. Use \"Add Expense\" to record one.");
        return None;
    }

    let mut edit_clicked = None;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::exact(140.0)) // DATE
        .column(Column::remainder().at_least(180.0)) // DESCRIPTION
        .column(Column::exact(140.0)) // CATEGORY
        .column(Column::exact(110.0)) // AMOUNT
        .column(Column::exact(60.0)) // IMAGE
        .column(Column::exact(70.0)) // actions
        .header(32.0, |mut header| {
            for title in ["DATE", "DESCRIPTION", "CATEGORY", "AMOUNT", "IMAGE", ""] {
                header.col(|ui| {
                    ui.label(egui::RichText::new(title).strong());
                });
            }
        })
        .body(|mut body| {
            for (index, expense) in expenses.iter().enumerate() {
                body.row(32.0, |mut row| {
                    row.col(|ui| {
                        let date_str = match calendar_date_from_millis(expense.date, &Local) {
                            Ok(date) => date.format("%B %d, %Y").to_string(),
                            Err(_) => "Unknown".to_string(),
                        };
                        ui.label(date_str);
                    });
                    row.col(|ui| {
                        ui.label(expense.description.as_str());
                    });
                    row.col(|ui| {
                        ui.label(expense.category.as_str());
                    });
                    row.col(|ui| {
                        ui.colored_label(
                            egui::Color32::from_rgb(220, 20, 60),
                            egui::RichText::new(format_amount(expense.amount, currency_symbol)).strong(),
                        );
                    });
                    row.col(|ui| {
                        if let Some(url) = &expense.image_url {
                            ui.label("📎").on_hover_text(url.as_str());
                        }
                    });
                    row.col(|ui| {
                        if ui.button("Edit").clicked() {
                            edit_clicked = Some(index);
                        }
                    });
                });
            }
        });

    edit_clicked
}
