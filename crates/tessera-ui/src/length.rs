//! Symbolic lengths for widget dimensions.
//!
//! A [`Length`] is either an absolute pixel value or a percentage of the parent's
//! corresponding dimension. Widgets resolve lengths when they are written.

use std::fmt;
use std::str::FromStr;

/// Length value for widget dimensions.
///
/// # Examples
/// ```
/// use tessera_ui::Length;
///
/// let fixed = Length::Px(100.0);
/// let relative: Length = "50%".parse().unwrap();
/// assert_eq!(relative.resolve(300.0), 150.0);
/// assert_eq!(fixed.resolve(300.0), 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    /// Fixed pixel value
    Px(f32),
    /// Percentage of parent size (0.0 - 100.0)
    Percent(f32),
}

impl Length {
    pub const ZERO: Length = Length::Px(0.0);

    /// Create a pixel length.
    pub fn px(value: f32) -> Self {
        Self::Px(value)
    }

    /// Create a percentage length.
    pub fn percent(value: f32) -> Self {
        Self::Percent(value)
    }

    /// Resolve against the parent's dimension.
    pub fn resolve(self, parent: f32) -> f32 {
        match self {
            Length::Px(v) => v,
            Length::Percent(v) => parent * v / 100.0,
        }
    }

    /// Check if this is a fixed pixel value.
    pub fn is_px(&self) -> bool {
        matches!(self, Length::Px(_))
    }

    /// Check if this is a percentage value.
    pub fn is_percent(&self) -> bool {
        matches!(self, Length::Percent(_))
    }
}

impl Default for Length {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<f32> for Length {
    fn from(value: f32) -> Self {
        Length::Px(value)
    }
}

impl From<f64> for Length {
    fn from(value: f64) -> Self {
        Length::Px(value as f32)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(v) => write!(f, "{}px", v),
            Length::Percent(v) => write!(f, "{}%", v),
        }
    }
}

/// Error returned when a textual length cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthParseError(pub String);

impl fmt::Display for LengthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid length: '{}'", self.0)
    }
}

impl std::error::Error for LengthParseError {}

impl FromStr for Length {
    type Err = LengthParseError;

    /// Accepts `"12"`, `"12px"` and `"50%"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (number, percent) = if let Some(rest) = trimmed.strip_suffix('%') {
            (rest, true)
        } else if let Some(rest) = trimmed.strip_suffix("px") {
            (rest, false)
        } else {
            (trimmed, false)
        };

        let value: f32 = number
            .trim()
            .parse()
            .map_err(|_| LengthParseError(s.to_string()))?;

        Ok(if percent {
            Length::Percent(value)
        } else {
            Length::Px(value)
        })
    }
}

/// Shorthand for [`Length::Px`].
pub fn px(value: f32) -> Length {
    Length::Px(value)
}

/// Shorthand for [`Length::Percent`].
pub fn percent(value: f32) -> Length {
    Length::Percent(value)
}
