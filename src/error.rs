//! # Unwrap Failure
//!
//! The only failure a [`Result`](crate::Result) can produce on its own:
//! extracting the variant it does not hold.

use thiserror::Error;

/// Message carried when `unwrap` meets an `Err`
pub const UNWRAP_ON_ERR: &str = "Called unwrap on an Err value";

/// Message carried when `unwrap_err` meets an `Ok`
pub const UNWRAP_ERR_ON_OK: &str = "Called unwrap_err on an Ok value";

/// Extraction against the wrong variant.
///
/// `Display` yields the message and nothing else, so it compares equal to the
/// panic payload of the panicking forms.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
#[error("{message}")]
pub struct UnwrapError {
    message: String,
}

impl UnwrapError {
    pub fn new(message: impl Into<String>) -> Self {
        UnwrapError {
            message: message.into(),
        }
    }

    /// `unwrap` called on an `Err`
    pub fn on_err() -> Self {
        UnwrapError::new(UNWRAP_ON_ERR)
    }

    /// `unwrap_err` called on an `Ok`
    pub fn on_ok() -> Self {
        UnwrapError::new(UNWRAP_ERR_ON_OK)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Raise this error as a panic whose payload is exactly the message.
    #[cold]
    #[track_caller]
    pub fn raise(self) -> ! {
        std::panic::panic_any(self.message)
    }
}

/// Recover the message from a caught panic payload.
///
/// `panic!("{}", ..)` yields a `String`, literal panics yield `&'static str`.
pub fn panic_message(payload: &(dyn std::any::Any + Send)) -> Option<&str> {
    if let Some(s) = payload.downcast_ref::<String>() {
        Some(s.as_str())
    } else {
        payload.downcast_ref::<&'static str>().copied()
    }
}
