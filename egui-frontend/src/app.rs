//! # Expense Tracker App
//!
//! Host application for the expense form: keeps an in-memory list of
//! expenses, opens the dialog for adding or editing, plays the part of the
//! external image picker and applies saved payloads to the list.
//!
//! Dialog callbacks never touch app state directly. Saved payloads and image
//! pick requests travel over channels that are drained once per frame.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};

use eframe::egui;
use log::{info, warn};
use shared::{ExpensePayload, ExpenseRecord};

use crate::config::AppConfig;
use crate::domain::{ExpenseFormDialog, PickImageRequest};

/// Payload delivered by a confirmed dialog
#[derive(Debug, Clone, PartialEq)]
pub struct SavedExpense {
    /// Index of the expense being edited, `None` for a new one
    pub replaces: Option<usize>,
    pub payload: ExpensePayload,
}

/// Main application struct for the egui expense tracker
pub struct ExpenseTrackerApp {
    pub config: AppConfig,
    pub expenses: Vec<ExpenseRecord>,
    /// Dialog currently on screen
    pub expense_form: Option<ExpenseFormDialog>,
    /// Image request waiting for the user to pick something
    pub pending_pick: Option<PickImageRequest>,
    /// Free-form URI typed into the image picker window
    pub custom_image_input: String,
    /// Signed-in user id shared with open dialogs
    pub session: Rc<RefCell<Option<String>>>,
    pub user_input: String,
    saved_tx: Sender<SavedExpense>,
    saved_rx: Receiver<SavedExpense>,
    pick_tx: Sender<PickImageRequest>,
    pick_rx: Receiver<PickImageRequest>,
}

impl ExpenseTrackerApp {
    pub fn new(config: AppConfig) -> Self {
        let (saved_tx, saved_rx) = mpsc::channel();
        let (pick_tx, pick_rx) = mpsc::channel();

        Self {
            config,
            expenses: Vec::new(),
            expense_form: None,
            pending_pick: None,
            custom_image_input: String::new(),
            session: Rc::new(RefCell::new(None)),
            user_input: String::new(),
            saved_tx,
            saved_rx,
            pick_tx,
            pick_rx,
        }
    }

    /// Open the dialog in create mode
    pub fn open_add_expense(&mut self) {
        self.expense_form = Some(self.build_dialog(None));
    }

    /// Open the dialog pre-filled with the expense at `index`
    pub fn open_edit_expense(&mut self, index: usize) {
        if index >= self.expenses.len() {
            warn!("🚨 No expense at index {} to edit", index);
            return;
        }
        self.expense_form = Some(self.build_dialog(Some(index)));
    }

    fn build_dialog(&self, replaces: Option<usize>) -> ExpenseFormDialog {
        let existing = replaces.and_then(|index| self.expenses.get(index));

        let saved_tx = self.saved_tx.clone();
        let on_save = move |payload: ExpensePayload| {
            if saved_tx.send(SavedExpense { replaces, payload }).is_err() {
                warn!("🚨 Expense saved after the app stopped listening");
            }
        };

        let session = self.session.clone();
        let users = move || session.borrow().clone();

        let pick_tx = self.pick_tx.clone();
        let picker = move |request: PickImageRequest| {
            let _ = pick_tx.send(request);
        };

        ExpenseFormDialog::new(existing, on_save, users).with_image_picker(picker)
    }

    /// Sign in as `user_id`, or sign out when it is blank
    pub fn set_signed_in_user(&mut self, user_id: &str) {
        let user_id = user_id.trim();
        let mut session = self.session.borrow_mut();
        if user_id.is_empty() {
            info!("👤 Signed out");
            *session = None;
        } else {
            info!("👤 Signed in as {}", user_id);
            *session = Some(user_id.to_string());
        }
    }

    /// Pick up image requests issued by the dialog since the last frame
    pub fn collect_pick_requests(&mut self) {
        while let Ok(request) = self.pick_rx.try_recv() {
            // A newer tap supersedes a request nobody answered yet
            self.pending_pick = Some(request);
            self.custom_image_input.clear();
        }
    }

    /// Answer the pending image request with `uri`
    pub fn answer_pick(&mut self, uri: String) {
        let Some(request) = self.pending_pick.take() else {
            return;
        };

        let picked = request.respond(uri);
        match self.expense_form.as_mut() {
            Some(dialog) => {
                dialog.receive_image(picked);
            }
            None => info!("🖼️ Image picked after the expense form closed, dropping it"),
        }
    }

    /// Dismiss the image picker without answering
    pub fn abandon_pick(&mut self) {
        if self.pending_pick.take().is_some() {
            info!("🖼️ Image picker closed without a selection");
        }
    }

    /// Apply payloads saved since the last frame to the expense list
    pub fn apply_saved_expenses(&mut self) {
        while let Ok(saved) = self.saved_rx.try_recv() {
            let record = saved.payload.to_record();
            match saved.replaces {
                Some(index) if index < self.expenses.len() => {
                    info!("✏️ Updated expense #{}: {}", index, record.description);
                    self.expenses[index] = record;
                }
                Some(index) => {
                    warn!("🚨 Expense #{} disappeared while editing, adding it again", index);
                    self.expenses.push(record);
                }
                None => {
                    info!("➕ Added expense: {}", record.description);
                    self.expenses.push(record);
                }
            }
        }
    }

    /// Drop the dialog once it has been saved or cancelled, along with any
    /// image request it left behind
    pub fn close_finished_form(&mut self) {
        if self.expense_form.as_ref().is_some_and(|dialog| !dialog.is_open()) {
            self.expense_form = None;
            while self.pick_rx.try_recv().is_ok() {}
            if self.pending_pick.take().is_some() {
                info!("🖼️ Closing image picker for finished expense form");
            }
            self.custom_image_input.clear();
        }
    }
}

impl eframe::App for ExpenseTrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.collect_pick_requests();

        egui::TopBottomPanel::top("expense_header").show(ctx, |ui| {
            self.render_header(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(index) = crate::ui::components::expense_table::render_expense_table(
                ui,
                &self.expenses,
                &self.config.currency_symbol,
            ) {
                self.open_edit_expense(index);
            }
        });

        self.render_expense_form_modal(ctx);
        self.render_image_picker(ctx);

        self.apply_saved_expenses();
        self.close_finished_form();
    }
}
