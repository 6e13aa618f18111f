//! Error types for fault capture.
//!
//! A Rust panic is the closest analogue of a thrown fault. [`Panic`] is the
//! value a captured panic is turned into by `Outcome::catch_panic` and
//! `Outcome::perform_catching`.

use std::any::Any;

/// The message of a panic that was caught and converted into a value.
///
/// # Examples
///
/// ```rust
/// use monads::control::Panic;
///
/// let fault = Panic::new("index out of bounds");
/// assert_eq!(fault.message(), "index out of bounds");
/// assert_eq!(format!("{fault}"), "panicked: index out of bounds");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Panic {
    message: String,
}

impl Panic {
    /// Creates a `Panic` from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Extracts the message from a payload returned by `catch_unwind`.
    ///
    /// Payloads that are neither `&str` nor `String` become `"Unknown panic"`.
    pub fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(string) = payload.downcast_ref::<&str>() {
            (*string).to_string()
        } else if let Some(string) = payload.downcast_ref::<String>() {
            string.clone()
        } else {
            "Unknown panic".to_string()
        };
        Self { message }
    }

    /// Returns the panic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for Panic {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "panicked: {}", self.message)
    }
}

impl std::error::Error for Panic {}
