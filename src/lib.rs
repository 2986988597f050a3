//! # fallible - A Two-Track Result Type
//!
//! `Result<T, E>` holds exactly one of a success value or a failure value.
//! Computations built from it run on two tracks:
//!
//! ```text
//! Ok(x) ──map──▶ Ok(f(x)) ──and_then──▶ Ok(y) ───────────────▶ unwrap() = y
//!                                  │
//!                                  └─▶ Err(e) ──map──▶ Err(e) ──or_else──▶ Ok(..) | Err(..)
//! ```
//!
//! Once a value is on the `Err` track, `map` and `and_then` pass it through
//! without calling their functions until `or_else` (or an explicit branch)
//! brings it back.
//!
//! ## Usage
//!
//! ```
//! use fallible::{make_err, make_ok, Result};
//!
//! let ok: Result<i32, String> = make_ok(42);
//! assert_eq!(ok.map(|x| x * 2).unwrap(), 84);
//!
//! let err: Result<i32, String> = make_err("Error occurred".to_string());
//! let recovered = err.or_else(|e| make_err::<i32, String>(e + " handled"));
//! assert_eq!(recovered.unwrap_err(), "Error occurred handled");
//! ```

// Core type
pub mod construct;
pub mod error;
pub mod interop;
pub mod result;

// Smoke runner support
pub mod config;
pub mod scenarios;
pub mod testing;
pub mod utilities;

pub use construct::{make_err, make_err_only, make_ok, make_ok_only, Unit};
pub use error::UnwrapError;
pub use result::Result;
