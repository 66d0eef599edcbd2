//! Paint and style values passed to a [`Canvas`](crate::canvas::Canvas).

use crate::application::Application;
use crate::color::Color;

/// Drop shadow beneath a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowStyle {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub color: Color,
}

impl ShadowStyle {
    pub const fn new(offset_x: f32, offset_y: f32, blur: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            color,
        }
    }
}

/// A single drawing style for a primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Style {
    Fill(Color),
    Stroke { color: Color, width: f32 },
    Shadow(ShadowStyle),
}

/// A color looked up in the application's theme, with a fallback used when the
/// widget is detached or the theme has no entry for `key`.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeColor {
    pub key: String,
    pub fallback: Box<Paint>,
}

impl ThemeColor {
    pub fn new(key: impl Into<String>, fallback: impl Into<Paint>) -> Self {
        Self {
            key: key.into(),
            fallback: Box::new(fallback.into()),
        }
    }
}

/// Fill source for a surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    Theme(ThemeColor),
}

impl Paint {
    /// Resolve to a concrete color, consulting `application`'s theme if present.
    pub fn resolve(&self, application: Option<&dyn Application>) -> Color {
        match self {
            Paint::Solid(color) => *color,
            Paint::Theme(theme_color) => application
                .and_then(|app| app.theme_color(&theme_color.key))
                .unwrap_or_else(|| theme_color.fallback.resolve(application)),
        }
    }
}

impl Default for Paint {
    fn default() -> Self {
        Paint::Solid(Color::TRANSPARENT)
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}

impl From<ThemeColor> for Paint {
    fn from(theme_color: ThemeColor) -> Self {
        Paint::Theme(theme_color)
    }
}
