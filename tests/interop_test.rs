//! Integration tests for conversions with the standard Result

#[cfg(test)]
mod interop_tests {
    use fallible::{make_err, make_ok, Result};

    fn checked_div(a: i32, b: i32) -> Result<i32, String> {
        if b == 0 {
            make_err("division by zero".to_string())
        } else {
            make_ok(a / b)
        }
    }

    fn pipeline(a: i32, b: i32) -> core::result::Result<i32, String> {
        let q = checked_div(a, b).into_std()?;
        Ok(q + 1)
    }

    #[test]
    fn test_std_round_trip() {
        let std_ok: core::result::Result<i32, String> = Ok(3);
        let ours: Result<i32, String> = std_ok.clone().into();
        let back: core::result::Result<i32, String> = ours.into();
        assert_eq!(back, std_ok);
    }

    #[test]
    fn test_question_mark_interop() {
        assert_eq!(pipeline(10, 2), Ok(6));
        assert_eq!(pipeline(1, 0), Err("division by zero".to_string()));
    }

    #[test]
    fn test_option_adapters() {
        assert_eq!(Result::from_option(Some(1), "missing").ok(), Some(1));
        assert_eq!(Result::<i32, _>::from_option(None, "missing").err(), Some("missing"));
    }
}
