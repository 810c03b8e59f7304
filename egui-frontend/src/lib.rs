//! Expense tracker egui frontend.
//!
//! `domain` holds the headless expense form logic, `ui` the egui rendering
//! and `app` the host application tying them together.

pub mod app;
pub mod config;
pub mod domain;
pub mod ui;

pub use app::ExpenseTrackerApp;
pub use config::AppConfig;
