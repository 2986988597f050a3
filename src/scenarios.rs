//! Behavioural smoke scenarios for [`Result`].
//!
//! Each scenario checks one slice of the contract against an `Ok(42)` and an
//! `Err("Error occurred")` fixture and reports the first mismatch it finds.

use std::panic::{catch_unwind, UnwindSafe};

use crate::construct::{make_err, make_ok};
use crate::error::{panic_message, UNWRAP_ERR_ON_OK, UNWRAP_ON_ERR};
use crate::result::Result;
use crate::testing::ScenarioRunner;

type Outcome = core::result::Result<(), String>;

fn ok_fixture() -> Result<i32, String> {
    make_ok(42)
}

fn err_fixture() -> Result<i32, String> {
    make_err("Error occurred".to_string())
}

fn check(cond: bool, what: &str) -> Outcome {
    if cond {
        Ok(())
    } else {
        Err(format!("check failed: {}", what))
    }
}

fn check_eq<V: PartialEq + std::fmt::Debug>(actual: V, expected: V, what: &str) -> Outcome {
    if actual == expected {
        Ok(())
    } else {
        Err(format!("{}: expected {:?}, got {:?}", what, expected, actual))
    }
}

/// Run `op` and require it to panic with exactly `expected`.
fn check_panics_with<R, F>(op: F, expected: &str, what: &str) -> Outcome
where
    F: FnOnce() -> R + UnwindSafe,
{
    match catch_unwind(op) {
        Ok(_) => Err(format!("{}: expected a panic, none occurred", what)),
        Err(payload) => check_eq(panic_message(&*payload), Some(expected), what),
    }
}

pub fn construction() -> Outcome {
    let ok = ok_fixture();
    let err = err_fixture();
    check(ok.is_ok() && !ok.is_err(), "Ok fixture reports Ok")?;
    check(!err.is_ok() && err.is_err(), "Err fixture reports Err")
}

pub fn unwrapping() -> Outcome {
    check_eq(ok_fixture().unwrap(), 42, "unwrap on Ok")?;
    check_eq(err_fixture().unwrap_err(), "Error occurred".to_string(), "unwrap_err on Err")?;
    check_panics_with(|| err_fixture().unwrap(), UNWRAP_ON_ERR, "unwrap on Err")?;
    check_panics_with(|| ok_fixture().unwrap_err(), UNWRAP_ERR_ON_OK, "unwrap_err on Ok")
}

pub fn map() -> Outcome {
    let doubled = ok_fixture().map(|x| x * 2);
    let passed = err_fixture().map(|x| x * 2);
    check_eq(doubled, make_ok(84), "map on Ok")?;
    check_eq(passed, make_err("Error occurred".to_string()), "map on Err")
}

pub fn map_err() -> Outcome {
    let modify = |err: String| err + " modified";
    check_eq(ok_fixture().map_err(modify), make_ok(42), "map_err on Ok")?;
    check_eq(
        err_fixture().map_err(modify),
        make_err("Error occurred modified".to_string()),
        "map_err on Err",
    )
}

pub fn and_then() -> Outcome {
    let add_ten = |x: i32| make_ok::<i32, String>(x + 10);
    check_eq(ok_fixture().and_then(add_ten), make_ok(52), "and_then on Ok")?;
    check_eq(
        err_fixture().and_then(add_ten),
        make_err("Error occurred".to_string()),
        "and_then on Err",
    )
}

pub fn or_else() -> Outcome {
    let handle = |err: String| make_err::<i32, String>(err + " handled");
    check_eq(ok_fixture().or_else(handle), make_ok(42), "or_else on Ok")?;
    check_eq(
        err_fixture().or_else(handle),
        make_err("Error occurred handled".to_string()),
        "or_else on Err",
    )
}

pub fn expect() -> Outcome {
    check_eq(ok_fixture().expect("Unexpected error"), 42, "expect on Ok")?;
    check_panics_with(
        || err_fixture().expect("Expected error"),
        "Expected error",
        "expect on Err",
    )
}

/// Runner preloaded with every scenario, in contract order
pub fn default_runner() -> ScenarioRunner {
    let mut runner = ScenarioRunner::new();
    runner.register("construction", construction);
    runner.register("unwrap", unwrapping);
    runner.register("map", map);
    runner.register("map_err", map_err);
    runner.register("and_then", and_then);
    runner.register("or_else", or_else);
    runner.register("expect", expect);
    runner
}
