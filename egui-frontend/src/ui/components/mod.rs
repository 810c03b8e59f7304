//! # UI Components Module
//!
//! egui components of the expense tracker. Each submodule renders one part
//! of the screen; behavior lives in `crate::domain`.
//!
//! ## Module Organization:
//! - `expense_form_modal` - Add/edit expense dialog
//! - `expense_table` - List of recorded expenses with edit actions
//! - `header` - Title bar with totals, sign-in box and "Add Expense"
//! - `image_picker` - Built-in image picker answering the dialog's requests

pub mod expense_form_modal;
pub mod expense_table;
pub mod header;
pub mod image_picker;

pub use expense_table::render_expense_table;
