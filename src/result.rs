//! # Result Type
//!
//! A closed two-variant union for the outcome of a fallible computation.
//!
//! ## Features
//! - `Result<T, E>`: `Ok(value)` | `Err(error)`, never both, never neither
//! - Inspection without consuming (`is_ok`, `is_err`, `as_ref`)
//! - Extraction with exact failure messages (`unwrap`, `unwrap_err`, `expect`)
//!   and non-panicking `try_` forms
//! - Railway combinators (`map`, `map_err`, `and_then`, `or_else`)
//!
//! Every transformation consumes `self` and produces a new value. Nothing
//! re-tags an existing `Result` in place.

use crate::error::UnwrapError;

/// Result type: `Ok(T)` or `Err(E)`
#[must_use = "this `Result` may be an `Err` variant, which should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Result<T, E> {
    /// Success payload
    Ok(T),
    /// Failure payload
    Err(E),
}

impl<T, E> Result<T, E> {
    /// Returns true if the result is Ok
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Result::Ok(_))
    }

    /// Returns true if the result is Err
    #[inline]
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Converts from `&Result<T, E>` to `Result<&T, &E>`
    pub fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Result::Ok(x) => Result::Ok(x),
            Result::Err(e) => Result::Err(e),
        }
    }

    /// Converts from `&mut Result<T, E>` to `Result<&mut T, &mut E>`
    pub fn as_mut(&mut self) -> Result<&mut T, &mut E> {
        match self {
            Result::Ok(x) => Result::Ok(x),
            Result::Err(e) => Result::Err(e),
        }
    }

    /// Discards the error, keeping the success value if any
    pub fn ok(self) -> Option<T> {
        match self {
            Result::Ok(x) => Some(x),
            Result::Err(_) => None,
        }
    }

    /// Discards the success value, keeping the error if any
    pub fn err(self) -> Option<E> {
        match self {
            Result::Ok(_) => None,
            Result::Err(e) => Some(e),
        }
    }

    /// Returns the contained Ok value.
    ///
    /// # Panics
    ///
    /// Panics with `"Called unwrap on an Err value"` if the value is an `Err`.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Result::Ok(x) => x,
            Result::Err(_) => UnwrapError::on_err().raise(),
        }
    }

    /// Returns the contained Err value.
    ///
    /// # Panics
    ///
    /// Panics with `"Called unwrap_err on an Ok value"` if the value is an `Ok`.
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self {
            Result::Ok(_) => UnwrapError::on_ok().raise(),
            Result::Err(e) => e,
        }
    }

    /// Returns the contained Ok value, panicking with `msg` verbatim otherwise.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Result::Ok(x) => x,
            Result::Err(_) => UnwrapError::new(msg).raise(),
        }
    }

    /// Like [`unwrap`](Self::unwrap), reporting the mismatch as a value.
    pub fn try_unwrap(self) -> core::result::Result<T, UnwrapError> {
        match self {
            Result::Ok(x) => Ok(x),
            Result::Err(_) => Err(UnwrapError::on_err()),
        }
    }

    /// Like [`unwrap_err`](Self::unwrap_err), reporting the mismatch as a value.
    pub fn try_unwrap_err(self) -> core::result::Result<E, UnwrapError> {
        match self {
            Result::Ok(_) => Err(UnwrapError::on_ok()),
            Result::Err(e) => Ok(e),
        }
    }

    /// Like [`expect`](Self::expect), reporting the mismatch as a value.
    pub fn try_expect(self, msg: &str) -> core::result::Result<T, UnwrapError> {
        match self {
            Result::Ok(x) => Ok(x),
            Result::Err(_) => Err(UnwrapError::new(msg)),
        }
    }

    /// Returns the contained Ok value or a provided default
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Result::Ok(x) => x,
            Result::Err(_) => default,
        }
    }

    /// Returns the contained Ok value or computes one from the error
    pub fn unwrap_or_else<F: FnOnce(E) -> T>(self, op: F) -> T {
        match self {
            Result::Ok(x) => x,
            Result::Err(e) => op(e),
        }
    }

    /// Returns the contained Ok value or `T::default()`
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Result::Ok(x) => x,
            Result::Err(_) => T::default(),
        }
    }

    /// Maps a `Result<T, E>` to `Result<U, E>` by applying a function to the Ok value.
    ///
    /// An `Err` passes through untouched and `op` is never called.
    pub fn map<U, F: FnOnce(T) -> U>(self, op: F) -> Result<U, E> {
        match self {
            Result::Ok(x) => Result::Ok(op(x)),
            Result::Err(e) => Result::Err(e),
        }
    }

    /// Maps a `Result<T, E>` to `Result<T, F>` by applying a function to the Err value
    pub fn map_err<F, O: FnOnce(E) -> F>(self, op: O) -> Result<T, F> {
        match self {
            Result::Ok(x) => Result::Ok(x),
            Result::Err(e) => Result::Err(op(e)),
        }
    }

    /// Chains a fallible step onto an Ok value.
    ///
    /// The error type is fixed across the call: an `Err` short-circuits and is
    /// returned as is.
    pub fn and_then<U, F: FnOnce(T) -> Result<U, E>>(self, op: F) -> Result<U, E> {
        match self {
            Result::Ok(x) => op(x),
            Result::Err(e) => Result::Err(e),
        }
    }

    /// Recovers from an Err value with a fallible step.
    ///
    /// The success type is fixed across the call: an `Ok` short-circuits and is
    /// returned as is.
    pub fn or_else<F, O: FnOnce(E) -> Result<T, F>>(self, op: O) -> Result<T, F> {
        match self {
            Result::Ok(x) => Result::Ok(x),
            Result::Err(e) => op(e),
        }
    }

    /// Returns `res` if Ok, otherwise the Err of `self`
    pub fn and<U>(self, res: Result<U, E>) -> Result<U, E> {
        match self {
            Result::Ok(_) => res,
            Result::Err(e) => Result::Err(e),
        }
    }

    /// Returns `self` if Ok, otherwise `res`
    pub fn or<F>(self, res: Result<T, F>) -> Result<T, F> {
        match self {
            Result::Ok(x) => Result::Ok(x),
            Result::Err(_) => res,
        }
    }

    /// Calls `f` with a reference to the Ok value, if any
    pub fn inspect<F: FnOnce(&T)>(self, f: F) -> Self {
        if let Result::Ok(ref x) = self {
            f(x);
        }
        self
    }

    /// Calls `f` with a reference to the Err value, if any
    pub fn inspect_err<F: FnOnce(&E)>(self, f: F) -> Self {
        if let Result::Err(ref e) = self {
            f(e);
        }
        self
    }
}

impl<T, E> Result<Result<T, E>, E> {
    /// Removes one level of nesting
    pub fn flatten(self) -> Result<T, E> {
        self.and_then(|inner| inner)
    }
}
