//! Terminal styling and color utilities.
//!
//! ANSI escape code definitions and color detection for the text output
//! format. JSON output never carries escape codes.

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bright bold white for headings and algorithm names.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for secondary elements (indices, units, footers).
    pub const GRAY: &str = "\x1b[90m";
    /// Cyan for coordinates.
    pub const CYAN: &str = "\x1b[36m";
    /// Green for successful searches.
    pub const GREEN: &str = "\x1b[32m";
    /// Red for searches that found nothing.
    pub const RED: &str = "\x1b[31m";
    /// Orange (256-color) for summary picks.
    pub const ORANGE: &str = "\x1b[38;5;208m";
}

/// A collection of resolved color codes, either actual ANSI sequences
/// or empty strings when color is disabled.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub heading: &'static str,
    pub muted: &'static str,
    pub coordinate: &'static str,
    pub found: &'static str,
    pub missing: &'static str,
    pub highlight: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            heading: colors::WHITE_BOLD,
            muted: colors::GRAY,
            coordinate: colors::CYAN,
            found: colors::GREEN,
            missing: colors::RED,
            highlight: colors::ORANGE,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            heading: "",
            muted: "",
            coordinate: "",
            found: "",
            missing: "",
            highlight: "",
        }
    }

    /// Create a palette based on terminal capabilities.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// This function respects:
/// - The `NO_COLOR` environment variable (https://no-color.org/)
/// - The `TERM=dumb` convention for non-capable terminals
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

/// Format a number with thousand separators (commas).
///
/// # Examples
///
/// ```
/// # use roadnet_cli::terminal::format_with_separators;
/// assert_eq!(format_with_separators(999), "999");
/// assert_eq!(format_with_separators(1000), "1,000");
/// assert_eq!(format_with_separators(1234567), "1,234,567");
/// ```
#[must_use]
pub fn format_with_separators(n: u64) -> String {
    if n < 1000 {
        return n.to_string();
    }
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
