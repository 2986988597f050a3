//! ANSI color support for smoke-run report lines.
//!
//! Passing scenarios are green, failing ones red. Colouring can be switched
//! off for plain terminals and log capture.

use std::fmt;

/// ANSI color codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    code: &'static str,
}

impl Color {
    pub const RED: Self = Color { code: "\x1b[31m" };
    pub const GREEN: Self = Color { code: "\x1b[32m" };
    pub const BOLD: Self = Color { code: "\x1b[1m" };
    pub const RESET: Self = Color { code: "\x1b[0m" };
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code)
    }
}

/// Text that renders with a color when painting is enabled
pub struct Colored<'a> {
    text: &'a str,
    color: Color,
    enabled: bool,
}

impl fmt::Display for Colored<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.enabled {
            write!(f, "{}{}{}", self.color, self.text, Color::RESET)
        } else {
            f.write_str(self.text)
        }
    }
}

/// Decides whether report text gets escape codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn new(enabled: bool) -> Self {
        Painter { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn paint<'a>(&self, text: &'a str, color: Color) -> Colored<'a> {
        Colored {
            text,
            color,
            enabled: self.enabled,
        }
    }

    pub fn success<'a>(&self, text: &'a str) -> Colored<'a> {
        self.paint(text, Color::GREEN)
    }

    pub fn failure<'a>(&self, text: &'a str) -> Colored<'a> {
        self.paint(text, Color::RED)
    }

    pub fn header<'a>(&self, text: &'a str) -> Colored<'a> {
        self.paint(text, Color::BOLD)
    }

    /// `PASS` or `FAIL`, colored accordingly
    pub fn verdict(&self, passed: bool) -> Colored<'static> {
        if passed {
            self.success("PASS")
        } else {
            self.failure("FAIL")
        }
    }
}

impl Default for Painter {
    fn default() -> Self {
        Painter::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_wraps_in_codes() {
        let out = Painter::new(true).success("ok").to_string();
        assert_eq!(out, "\x1b[32mok\x1b[0m");
    }

    #[test]
    fn test_disabled_is_plain() {
        let painter = Painter::new(false);
        assert_eq!(painter.failure("bad").to_string(), "bad");
        assert_eq!(painter.verdict(true).to_string(), "PASS");
    }

    #[test]
    fn test_verdict_colors() {
        let painter = Painter::default();
        assert!(painter.verdict(false).to_string().starts_with("\x1b[31m"));
        assert!(painter.verdict(true).to_string().contains("PASS"));
    }
}
