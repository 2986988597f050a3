//! Free constructors.
//!
//! The variant is always named by the function, never inferred from the
//! payload type, so `Result<String, String>` is built without ambiguity.

use crate::result::Result;

/// The canonical "no value" payload for a side that carries nothing.
pub type Unit = ();

/// Build an `Ok` result.
#[inline]
pub fn make_ok<T, E>(value: T) -> Result<T, E> {
    Result::Ok(value)
}

/// Build an `Err` result.
#[inline]
pub fn make_err<T, E>(value: E) -> Result<T, E> {
    Result::Err(value)
}

/// Build an `Ok` result whose error side carries nothing.
#[inline]
pub fn make_ok_only<T>(value: T) -> Result<T, Unit> {
    make_ok(value)
}

/// Build an `Err` result whose success side carries nothing, e.g. `Result<Unit, ErrorCode>`.
#[inline]
pub fn make_err_only<E>(value: E) -> Result<Unit, E> {
    make_err(value)
}
