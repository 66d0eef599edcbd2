//! Named color palette consulted by [`ThemeColor`](crate::style::ThemeColor)
//! paints.
//!
//! # Example
//!
//! ```
//! use tessera_ui::{Color, Theme};
//!
//! let theme = Theme::builder()
//!     .primary(Color::from_rgb_u8(60, 120, 200))
//!     .color("danger", Color::RED)
//!     .build();
//!
//! assert_eq!(theme.get("danger"), Some(Color::RED));
//! assert_eq!(theme.get("missing"), None);
//! ```

use crate::color::Color;
use tessera_core::alloc::HashMap;

/// Well-known palette keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Primary,
    AppBarBackground,
    Background,
    Surface,
    TextPrimary,
    Border,
}

impl ColorRole {
    pub const ALL: [ColorRole; 6] = [
        ColorRole::Primary,
        ColorRole::AppBarBackground,
        ColorRole::Background,
        ColorRole::Surface,
        ColorRole::TextPrimary,
        ColorRole::Border,
    ];

    /// Key under which the role is stored in a [`Theme`].
    pub const fn key(self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::AppBarBackground => "appBarBackground",
            ColorRole::Background => "background",
            ColorRole::Surface => "surface",
            ColorRole::TextPrimary => "textPrimary",
            ColorRole::Border => "border",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
    colors: HashMap<String, Color>,
}

impl Theme {
    /// An empty theme. Every lookup falls back.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dark() -> Self {
        Self::builder()
            .role(ColorRole::Primary, Color::from_rgb_u8(60, 120, 200))
            .role(ColorRole::AppBarBackground, Color::from_rgb_u8(30, 30, 30))
            .role(ColorRole::Background, Color::from_rgb_u8(18, 18, 18))
            .role(ColorRole::Surface, Color::from_rgb_u8(30, 30, 30))
            .role(ColorRole::TextPrimary, Color::WHITE)
            .role(ColorRole::Border, Color::from_rgb_u8(60, 60, 60))
            .build()
    }

    pub fn light() -> Self {
        Self::builder()
            .role(ColorRole::Primary, Color::ROYAL_BLUE)
            .role(ColorRole::AppBarBackground, Color::ROYAL_BLUE)
            .role(ColorRole::Background, Color::from_rgb_u8(250, 250, 250))
            .role(ColorRole::Surface, Color::WHITE)
            .role(ColorRole::TextPrimary, Color::BLACK)
            .role(ColorRole::Border, Color::from_rgb_u8(200, 200, 200))
            .build()
    }

    pub fn builder() -> ThemeBuilder {
        ThemeBuilder::default()
    }

    pub fn get(&self, key: &str) -> Option<Color> {
        self.colors.get(key).copied()
    }

    pub fn role(&self, role: ColorRole) -> Option<Color> {
        self.get(role.key())
    }

    /// Set `key`, returning the previous color.
    pub fn set(&mut self, key: impl Into<String>, color: Color) -> Option<Color> {
        self.colors.insert(key.into(), color)
    }

    pub fn remove(&mut self, key: &str) -> Option<Color> {
        self.colors.remove(key)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct ThemeBuilder {
    theme: Theme,
}

impl ThemeBuilder {
    pub fn primary(self, color: Color) -> Self {
        self.role(ColorRole::Primary, color)
    }

    pub fn app_bar_background(self, color: Color) -> Self {
        self.role(ColorRole::AppBarBackground, color)
    }

    pub fn role(self, role: ColorRole, color: Color) -> Self {
        self.color(role.key(), color)
    }

    pub fn color(mut self, key: impl Into<String>, color: Color) -> Self {
        self.theme.set(key, color);
        self
    }

    pub fn build(self) -> Theme {
        self.theme
    }
}
