//! Conversions between [`Result`] and `core::result::Result`.
//!
//! Crossing into the standard type lets callers use `?` at function
//! boundaries and hand values to APIs that expect it.

use crate::result::Result;

impl<T, E> From<core::result::Result<T, E>> for Result<T, E> {
    fn from(res: core::result::Result<T, E>) -> Self {
        match res {
            Ok(x) => Result::Ok(x),
            Err(e) => Result::Err(e),
        }
    }
}

impl<T, E> From<Result<T, E>> for core::result::Result<T, E> {
    fn from(res: Result<T, E>) -> Self {
        res.into_std()
    }
}

impl<T, E> Result<T, E> {
    pub fn into_std(self) -> core::result::Result<T, E> {
        match self {
            Result::Ok(x) => Ok(x),
            Result::Err(e) => Err(e),
        }
    }

    /// `Some(v)` becomes `Ok(v)`, `None` becomes `Err(err)`
    pub fn from_option(opt: Option<T>, err: E) -> Self {
        match opt {
            Some(x) => Result::Ok(x),
            None => Result::Err(err),
        }
    }
}

impl<T, E> Result<Option<T>, E> {
    /// `Ok(None)` maps to `None`; everything else keeps its variant inside `Some`
    pub fn transpose(self) -> Option<Result<T, E>> {
        match self {
            Result::Ok(Some(x)) => Some(Result::Ok(x)),
            Result::Ok(None) => None,
            Result::Err(e) => Some(Result::Err(e)),
        }
    }
}
