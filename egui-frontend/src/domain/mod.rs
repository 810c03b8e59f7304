//! # Domain Module
//!
//! Headless logic behind the expense form dialog. Nothing in here touches
//! egui, so every rule can be exercised from plain unit tests.
//!
//! ## Module Organization:
//! - `expense_form` - Dialog controller (modes, image pick handshake, confirm/cancel)
//! - `form_state` - Draft record mirrored by the dialog fields
//! - `amount` - Amount input filtering, parsing and formatting
//! - `calendar_date` - Calendar date <-> local-midnight timestamp conversion
//! - `collaborators` - Seams to the save callback, image picker and signed-in user
//! - `errors` - Form error type

pub mod amount;
pub mod calendar_date;
pub mod collaborators;
pub mod errors;
pub mod expense_form;
pub mod form_state;

pub use collaborators::{
    CurrentUserProvider, ImagePicked, ImagePicker, PickImageRequest, PickToken, SaveCallback,
    SignedOutUser, StaticUser,
};
pub use errors::FormError;
pub use expense_form::{DialogStatus, ExpenseFormDialog, FormField, FormMode};
pub use form_state::ExpenseFormState;
