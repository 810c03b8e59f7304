//! # Expense Form Dialog
//!
//! Controller behind the "Add Expense" / "Edit Expense" dialog.
//!
//! ## Responsibilities:
//! - Create and edit modes, with pre-filled fields when editing
//! - Image pick handshake with the external picker (request/response by token)
//! - Turning the draft into an `ExpensePayload` on confirm
//! - Keeping the dialog open with a field error when the amount is invalid
//!
//! ## Lifecycle:
//! A dialog starts `Open`, and ends either `Saved` (payload delivered exactly
//! once) or `Cancelled`. Once closed it ignores further input.

use chrono::{Local, TimeZone, Utc};
use shared::{ExpensePayload, ExpenseRecord};
use uuid::Uuid;

use super::amount::parse_amount;
use super::calendar_date::local_midnight_millis;
use super::collaborators::{
    CurrentUserProvider, ImagePicked, ImagePicker, PickImageRequest, PickToken, SaveCallback,
};
use super::errors::FormError;
use super::form_state::ExpenseFormState;

pub const SAVE_BUTTON_LABEL: &str = "Save";
pub const CANCEL_BUTTON_LABEL: &str = "Cancel";

/// Whether the dialog creates a new expense or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

impl FormMode {
    pub fn title(&self) -> &'static str {
        match self {
            FormMode::Create => "Add Expense",
            FormMode::Edit => "Edit Expense",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogStatus {
    Open,
    Saved,
    Cancelled,
}

/// Fields of the dialog, in the order they are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Description,
    Amount,
    Category,
    Date,
    ImageUrl,
}

impl FormField {
    pub const ORDER: [FormField; 5] = [
        FormField::Description,
        FormField::Amount,
        FormField::Category,
        FormField::Date,
        FormField::ImageUrl,
    ];

    /// Placeholder or label text for the field
    pub fn hint(&self, currency_symbol: &str) -> String {
        match self {
            FormField::Description => "Description".to_string(),
            FormField::Amount => format!("Amount ({})", currency_symbol),
            FormField::Category => "Category".to_string(),
            FormField::Date => "Date".to_string(),
            FormField::ImageUrl => "Image URL (optional)".to_string(),
        }
    }
}

/// Modal form that creates or edits one expense
pub struct ExpenseFormDialog<Tz: TimeZone = Local> {
    id: Uuid,
    mode: FormMode,
    status: DialogStatus,
    form: ExpenseFormState,
    picks_issued: u32,
    on_save: SaveCallback,
    image_picker: Option<Box<dyn ImagePicker>>,
    users: Box<dyn CurrentUserProvider>,
    time_zone: Tz,
}

impl ExpenseFormDialog<Local> {
    /// Open a dialog using the machine's local time zone.
    ///
    /// `existing` selects edit mode and pre-fills the fields.
    pub fn new(
        existing: Option<&ExpenseRecord>,
        on_save: impl FnMut(ExpensePayload) + 'static,
        users: impl CurrentUserProvider + 'static,
    ) -> Self {
        Self::with_time_zone(existing, on_save, users, Local)
    }
}

impl<Tz: TimeZone> ExpenseFormDialog<Tz> {
    /// Open a dialog whose calendar works in `time_zone`
    pub fn with_time_zone(
        existing: Option<&ExpenseRecord>,
        on_save: impl FnMut(ExpensePayload) + 'static,
        users: impl CurrentUserProvider + 'static,
        time_zone: Tz,
    ) -> Self {
        let today = Utc::now().with_timezone(&time_zone).date_naive();
        let mut form = ExpenseFormState::new(today);

        let mode = match existing {
            Some(record) => {
                form.populate_from_record(record, &time_zone);
                FormMode::Edit
            }
            None => FormMode::Create,
        };

        let id = Uuid::new_v4();
        log::info!("🧾 Opened expense form {} in {:?} mode", id, mode);

        Self {
            id,
            mode,
            status: DialogStatus::Open,
            form,
            picks_issued: 0,
            on_save: Box::new(on_save),
            image_picker: None,
            users: Box::new(users),
            time_zone,
        }
    }

    /// Attach the picker invoked when the image field is tapped
    pub fn with_image_picker(mut self, picker: impl ImagePicker + 'static) -> Self {
        self.image_picker = Some(Box::new(picker));
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn title(&self) -> &'static str {
        self.mode.title()
    }

    pub fn status(&self) -> DialogStatus {
        self.status
    }

    pub fn is_open(&self) -> bool {
        self.status == DialogStatus::Open
    }

    pub fn form(&self) -> &ExpenseFormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ExpenseFormState {
        &mut self.form
    }

    /// Handle a tap on the (read-only) image field.
    ///
    /// Sends a `PickImageRequest` to the picker and returns its token. Does
    /// nothing when no picker is attached or the dialog is closed.
    pub fn tap_image(&mut self) -> Option<PickToken> {
        if !self.is_open() {
            return None;
        }
        let picker = self.image_picker.as_mut()?;

        self.picks_issued += 1;
        let token = PickToken::new(self.id, self.picks_issued);
        log::info!("🖼️ Requesting image for expense form {} (request #{})", self.id, token.sequence());
        picker.request_image(PickImageRequest { token });

        Some(token)
    }

    /// Apply an image picker answer.
    ///
    /// Returns `false` when the answer is ignored: the dialog is closed, or
    /// the token was issued by another dialog.
    pub fn receive_image(&mut self, picked: ImagePicked) -> bool {
        if picked.token.dialog_id() != self.id {
            log::warn!(
                "🚫 Ignoring image for expense form {} (this is {})",
                picked.token.dialog_id(),
                self.id
            );
            return false;
        }
        if !self.is_open() {
            log::info!("🚫 Ignoring late image for closed expense form {}", self.id);
            return false;
        }

        log::info!("🖼️ Image selected for expense form {}: {}", self.id, picked.uri);
        self.form.image_url = picked.uri;
        true
    }

    /// Build the payload the current fields would produce
    pub fn build_payload(&self) -> Result<ExpensePayload, FormError> {
        let date = local_midnight_millis(self.form.date, &self.time_zone)?;
        let amount = parse_amount(&self.form.amount_input)?;

        Ok(ExpensePayload {
            description: self.form.description.clone(),
            amount,
            category: self.form.category,
            date,
            user_id: self.users.current_user_id().unwrap_or_default(),
            image_url: self.form.trimmed_image_url(),
        })
    }

    /// Handle the "Save" button.
    ///
    /// On success the save callback runs once and the dialog closes. A
    /// failure is recorded on the form (amount field or form-level) and the
    /// dialog stays open.
    pub fn confirm(&mut self) -> Result<(), FormError> {
        if !self.is_open() {
            return Err(FormError::DialogClosed);
        }

        let payload = match self.build_payload() {
            Ok(payload) => payload,
            Err(e) => {
                log::warn!("❌ Expense form {} not saved: {}", self.id, e);
                self.form.record_error(&e);
                return Err(e);
            }
        };

        log::info!(
            "💾 Saving expense '{}' ({:.2}, {}) from form {}",
            payload.description,
            payload.amount,
            payload.category,
            self.id
        );
        self.form.clear_errors();
        self.status = DialogStatus::Saved;
        (self.on_save)(payload);
        Ok(())
    }

    /// Handle "Cancel" or dismissal; never produces a payload
    pub fn cancel(&mut self) {
        if self.is_open() {
            log::info!("❌ Expense form {} cancelled", self.id);
            self.status = DialogStatus::Cancelled;
        }
    }
}
