//! Error types for property assignment and drawing primitives.

/// Errors raised when a value is written through a widget accessor.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyError {
    /// A numeric property received NaN or an infinite value.
    NonFinite { property: &'static str, value: f32 },

    /// A numeric property received a value outside its valid range.
    OutOfRange { property: &'static str, value: f32 },

    /// The value kind does not match what the accessor accepts.
    TypeMismatch {
        property: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// Event handler lists cannot be replaced.
    ReadOnlyEvent { property: &'static str },

    /// The property only has a getter.
    ReadOnly { property: &'static str },
}

impl std::fmt::Display for PropertyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyError::NonFinite { property, value } => {
                write!(f, "Property '{}' must be finite, got {}", property, value)
            }
            PropertyError::OutOfRange { property, value } => {
                write!(f, "Property '{}' is out of range: {}", property, value)
            }
            PropertyError::TypeMismatch {
                property,
                expected,
                found,
            } => write!(
                f,
                "Property '{}' expects a {} value, got {}",
                property, expected, found
            ),
            PropertyError::ReadOnlyEvent { property } => write!(
                f,
                "Event handler list '{}' is read-only, use its 'add(handler)' function",
                property
            ),
            PropertyError::ReadOnly { property } => {
                write!(f, "Property '{}' is read-only", property)
            }
        }
    }
}

impl std::error::Error for PropertyError {}

/// Result type for property writes.
pub type PropertyResult<T> = Result<T, PropertyError>;

/// Errors raised while constructing drawing primitives.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingError {
    /// Corner radii must be given as exactly one or four values.
    CornerRadiusArity(usize),

    /// Corner radius must be a finite, non-negative number.
    InvalidCornerRadius { corner: &'static str, value: f32 },
}

impl std::fmt::Display for DrawingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawingError::CornerRadiusArity(count) => write!(
                f,
                "CornerRadius must be built from 1 or 4 values, got {}",
                count
            ),
            DrawingError::InvalidCornerRadius { corner, value } => write!(
                f,
                "Corner radius '{}' must be a finite positive number, got {}",
                corner, value
            ),
        }
    }
}

impl std::error::Error for DrawingError {}

/// Result type for drawing primitive construction.
pub type DrawingResult<T> = Result<T, DrawingError>;
