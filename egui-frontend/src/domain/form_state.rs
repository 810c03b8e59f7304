//! # Expense Form State
//!
//! In-memory mirror of the dialog fields. It is seeded from an existing
//! expense in edit mode and thrown away when the dialog closes.

use chrono::{NaiveDate, TimeZone};
use shared::{ExpenseCategory, ExpenseRecord};

use super::amount::{filter_amount_input, format_amount_for_input};
use super::calendar_date::{calendar_date_from_millis, date_from_components};
use super::errors::FormError;

/// Draft of the expense being created or edited
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseFormState {
    pub description: String,
    /// Raw amount text as typed
    pub amount_input: String,
    pub category: ExpenseCategory,
    pub date: NaiveDate,
    /// Image reference filled in by the image picker
    pub image_url: String,
    /// Field-scoped error shown below the amount input
    pub amount_error: Option<String>,
    /// Error not tied to a single field, shown above the buttons
    pub form_error: Option<String>,
}

impl ExpenseFormState {
    /// Empty form with `today` selected in the date control
    pub fn new(today: NaiveDate) -> Self {
        Self {
            description: String::new(),
            amount_input: String::new(),
            category: ExpenseCategory::default(),
            date: today,
            image_url: String::new(),
            amount_error: None,
            form_error: None,
        }
    }

    /// Copy an existing expense into the form fields.
    ///
    /// A category that is no longer offered falls back to the first entry;
    /// a date that cannot be placed on the calendar keeps the current one.
    pub fn populate_from_record<Tz: TimeZone>(&mut self, record: &ExpenseRecord, tz: &Tz) {
        self.description = record.description.clone();
        self.amount_input = format_amount_for_input(record.amount);
        self.image_url = record.image_url.clone().unwrap_or_default();
        self.clear_errors();

        self.category = match record.category.parse::<ExpenseCategory>() {
            Ok(category) => category,
            Err(e) => {
                log::warn!("⚠️ {} - selecting {} instead", e, ExpenseCategory::default());
                ExpenseCategory::default()
            }
        };

        match calendar_date_from_millis(record.date, tz) {
            Ok(date) => self.date = date,
            Err(e) => log::warn!("⚠️ Keeping {} in date control: {}", self.date, e),
        }
    }

    /// Replace the amount text, applying the decimal-only input filter
    pub fn set_amount_input(&mut self, raw: &str) {
        self.amount_input = filter_amount_input(raw);
        self.amount_error = None;
    }

    /// Select a date from one-based year/month/day components
    pub fn set_date_components(&mut self, year: i32, month: u32, day: u32) -> Result<(), FormError> {
        self.date = date_from_components(year, month, day)?;
        self.form_error = None;
        Ok(())
    }

    /// Show a confirm failure next to the field it belongs to
    pub fn record_error(&mut self, error: &FormError) {
        if error.is_amount_error() {
            self.amount_error = Some(error.to_string());
        } else {
            self.form_error = Some(error.to_string());
        }
    }

    pub fn clear_errors(&mut self) {
        self.amount_error = None;
        self.form_error = None;
    }

    /// Select a category by its position in the selector
    pub fn select_category_index(&mut self, index: usize) -> Option<ExpenseCategory> {
        let category = ExpenseCategory::from_index(index)?;
        self.category = category;
        Some(category)
    }

    /// Image reference to store, `None` when the field is blank
    pub fn trimmed_image_url(&self) -> Option<String> {
        let trimmed = self.image_url.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}
