/// Errors raised while turning the expense form into a payload
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("Please enter an amount")]
    EmptyAmount,
    #[error("'{0}' is not a valid amount. Enter a number like 45 or 45.50")]
    InvalidAmount(String),
    #[error("{year}-{month:02}-{day:02} is not a valid calendar date")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[error("Date cannot be represented in the local time zone: {0}")]
    UnrepresentableDate(String),
    #[error("The expense form is already closed")]
    DialogClosed,
}

impl FormError {
    /// Whether the error belongs to the amount field and should be shown next to it
    pub fn is_amount_error(&self) -> bool {
        matches!(self, FormError::EmptyAmount | FormError::InvalidAmount(_))
    }
}
