//! # Collaborator Seams
//!
//! The expense dialog talks to three things it does not own: whoever stores
//! the saved expense, an image picker that may take arbitrarily long to
//! answer, and the sign-in state. Each is reached through a small trait or
//! callback so the dialog can be driven entirely from tests.

use shared::ExpensePayload;
use uuid::Uuid;

/// Receives the payload when the form is confirmed
pub type SaveCallback = Box<dyn FnMut(ExpensePayload)>;

/// Correlates an image pick answer with the dialog that asked for it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PickToken {
    dialog_id: Uuid,
    sequence: u32,
}

impl PickToken {
    pub(crate) fn new(dialog_id: Uuid, sequence: u32) -> Self {
        Self { dialog_id, sequence }
    }

    /// Dialog instance that issued the request
    pub fn dialog_id(&self) -> Uuid {
        self.dialog_id
    }

    /// Position of the request among those issued by the same dialog (1-based)
    pub fn sequence(&self) -> u32 {
        self.sequence
    }
}

/// Sent to the image picker each time the image field is tapped
#[derive(Debug, Clone, PartialEq)]
pub struct PickImageRequest {
    pub token: PickToken,
}

impl PickImageRequest {
    /// Build the answer for this request
    pub fn respond(&self, uri: impl Into<String>) -> ImagePicked {
        ImagePicked {
            token: self.token,
            uri: uri.into(),
        }
    }
}

/// Picker answer carrying the chosen image URI
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePicked {
    pub token: PickToken,
    pub uri: String,
}

/// External image picker.
///
/// `request_image` must return immediately; the answer is delivered later
/// through `ExpenseFormDialog::receive_image`, possibly never.
pub trait ImagePicker {
    fn request_image(&mut self, request: PickImageRequest);
}

impl<F> ImagePicker for F
where
    F: FnMut(PickImageRequest),
{
    fn request_image(&mut self, request: PickImageRequest) {
        self(request)
    }
}

/// Resolves the signed-in user at confirm time
pub trait CurrentUserProvider {
    /// Identifier of the signed-in user, `None` when nobody is signed in
    fn current_user_id(&self) -> Option<String>;
}

/// Nobody is signed in
#[derive(Debug, Clone, Copy, Default)]
pub struct SignedOutUser;

impl CurrentUserProvider for SignedOutUser {
    fn current_user_id(&self) -> Option<String> {
        None
    }
}

/// Always the same user
#[derive(Debug, Clone)]
pub struct StaticUser(pub String);

impl CurrentUserProvider for StaticUser {
    fn current_user_id(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

impl<F> CurrentUserProvider for F
where
    F: Fn() -> Option<String>,
{
    fn current_user_id(&self) -> Option<String> {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_user_providers() {
        assert_eq!(SignedOutUser.current_user_id(), None);
        assert_eq!(StaticUser("uid-1".to_string()).current_user_id(), Some("uid-1".to_string()));

        let session = Rc::new(RefCell::new(None::<String>));
        let provider = {
            let session = session.clone();
            move || session.borrow().clone()
        };
        assert_eq!(provider.current_user_id(), None);

        *session.borrow_mut() = Some("uid-2".to_string());
        assert_eq!(provider.current_user_id(), Some("uid-2".to_string()));
    }

    #[test]
    fn test_closure_image_picker_receives_request() {
        let received = Rc::new(RefCell::new(Vec::new()));
        let mut picker = {
            let received = received.clone();
            move |request: PickImageRequest| received.borrow_mut().push(request)
        };

        let token = PickToken::new(Uuid::new_v4(), 1);
        picker.request_image(PickImageRequest { token });

        assert_eq!(received.borrow().len(), 1);
        assert_eq!(received.borrow()[0].token, token);
    }

    #[test]
    fn test_respond_keeps_token() {
        let token = PickToken::new(Uuid::new_v4(), 3);
        let request = PickImageRequest { token };

        let picked = request.respond("content://media/images/12");
        assert_eq!(picked.token, token);
        assert_eq!(picked.token.sequence(), 3);
        assert_eq!(picked.uri, "content://media/images/12");
    }
}
