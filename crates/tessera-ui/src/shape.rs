//! Shapes and corner radii for surfaces.

use crate::error::{DrawingError, DrawingResult};

fn check_radius(corner: &'static str, value: f32) -> DrawingResult<f32> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(DrawingError::InvalidCornerRadius { corner, value })
    }
}

/// Per-corner radii of a rectangle.
///
/// ```
/// use tessera_ui::CornerRadius;
///
/// let uniform = CornerRadius::uniform(4.0).unwrap();
/// assert_eq!(uniform.bottom_left(), 4.0);
///
/// assert!(CornerRadius::from_slice(&[1.0, 2.0]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CornerRadius {
    top_left: f32,
    top_right: f32,
    bottom_right: f32,
    bottom_left: f32,
}

impl CornerRadius {
    /// All corners sharp.
    pub const SHARP: CornerRadius = CornerRadius {
        top_left: 0.0,
        top_right: 0.0,
        bottom_right: 0.0,
        bottom_left: 0.0,
    };

    /// Same radius for all four corners.
    pub fn uniform(radius: f32) -> DrawingResult<Self> {
        Self::new(radius, radius, radius, radius)
    }

    pub fn new(
        top_left: f32,
        top_right: f32,
        bottom_right: f32,
        bottom_left: f32,
    ) -> DrawingResult<Self> {
        let mut radius = Self::SHARP;
        radius.set_top_left(top_left)?;
        radius.set_top_right(top_right)?;
        radius.set_bottom_right(bottom_right)?;
        radius.set_bottom_left(bottom_left)?;
        Ok(radius)
    }

    /// Build from one value (all corners) or four values (clockwise from top-left).
    pub fn from_slice(values: &[f32]) -> DrawingResult<Self> {
        match values {
            &[radius] => Self::uniform(radius),
            &[top_left, top_right, bottom_right, bottom_left] => {
                Self::new(top_left, top_right, bottom_right, bottom_left)
            }
            _ => Err(DrawingError::CornerRadiusArity(values.len())),
        }
    }

    /// Whether all corners have a zero radius.
    pub fn is_sharp(&self) -> bool {
        self.top_left == 0.0
            && self.top_right == 0.0
            && self.bottom_right == 0.0
            && self.bottom_left == 0.0
    }

    pub fn top_left(&self) -> f32 {
        self.top_left
    }

    pub fn set_top_left(&mut self, value: f32) -> DrawingResult<()> {
        self.top_left = check_radius("top_left", value)?;
        Ok(())
    }

    pub fn top_right(&self) -> f32 {
        self.top_right
    }

    pub fn set_top_right(&mut self, value: f32) -> DrawingResult<()> {
        self.top_right = check_radius("top_right", value)?;
        Ok(())
    }

    pub fn bottom_right(&self) -> f32 {
        self.bottom_right
    }

    pub fn set_bottom_right(&mut self, value: f32) -> DrawingResult<()> {
        self.bottom_right = check_radius("bottom_right", value)?;
        Ok(())
    }

    pub fn bottom_left(&self) -> f32 {
        self.bottom_left
    }

    pub fn set_bottom_left(&mut self, value: f32) -> DrawingResult<()> {
        self.bottom_left = check_radius("bottom_left", value)?;
        Ok(())
    }
}

/// Outline of a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Rectangle(CornerRadius),
    Ellipse,
}

impl Shape {
    pub fn rectangle(radius: CornerRadius) -> Self {
        Shape::Rectangle(radius)
    }
}

impl Default for Shape {
    fn default() -> Self {
        Shape::Rectangle(CornerRadius::SHARP)
    }
}

impl From<CornerRadius> for Shape {
    fn from(radius: CornerRadius) -> Self {
        Shape::Rectangle(radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_value_applies_to_all_corners() {
        let radius = CornerRadius::from_slice(&[4.0]).unwrap();
        assert_eq!(radius.top_left(), 4.0);
        assert_eq!(radius.top_right(), 4.0);
        assert_eq!(radius.bottom_right(), 4.0);
        assert_eq!(radius.bottom_left(), 4.0);
        assert!(!radius.is_sharp());
    }

    #[test]
    fn test_four_values_map_clockwise() {
        let radius = CornerRadius::from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(radius.top_left(), 1.0);
        assert_eq!(radius.top_right(), 2.0);
        assert_eq!(radius.bottom_right(), 3.0);
        assert_eq!(radius.bottom_left(), 4.0);
    }

    #[test]
    fn test_wrong_arity_fails() {
        assert_eq!(
            CornerRadius::from_slice(&[1.0, 2.0]),
            Err(DrawingError::CornerRadiusArity(2))
        );
        assert_eq!(
            CornerRadius::from_slice(&[1.0, 2.0, 3.0]),
            Err(DrawingError::CornerRadiusArity(3))
        );
        assert_eq!(
            CornerRadius::from_slice(&[]),
            Err(DrawingError::CornerRadiusArity(0))
        );
    }

    #[test]
    fn test_invalid_radius_rejected() {
        let mut radius = CornerRadius::SHARP;
        assert!(radius.set_top_left(-1.0).is_err());
        assert!(radius.set_bottom_right(f32::INFINITY).is_err());
        assert!(radius.set_top_right(f32::NAN).is_err());
        assert!(radius.is_sharp());
        assert!(CornerRadius::uniform(-2.0).is_err());
    }
}
