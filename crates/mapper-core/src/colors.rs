//! ANSI color codes for terminal output.
//!
//! Roles rather than hues, so dump and lookup output stay consistent:
//! - `header`: section headers, kind names
//! - `text`: predicate strings, pattern source text
//! - `dim`: intervals, indices, provenance
//! - `mark`: the innermost matcher of an offset lookup

/// ANSI palette for table output.
///
/// Standard 16-color codes only, readable on light and dark themes.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub header: &'static str,
    pub text: &'static str,
    pub dim: &'static str,
    pub mark: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        header: "\x1b[34m",
        text: "\x1b[32m",
        dim: "\x1b[2m",
        mark: "\x1b[1;33m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        header: "",
        text: "",
        dim: "",
        mark: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }
}
