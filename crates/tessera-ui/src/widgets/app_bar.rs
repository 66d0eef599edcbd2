//! Top-of-screen bar.

use super::{Surface, surface_defaults};
use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::PropertyResult;
use crate::property::{Lookup, Properties, PropertyHost, PropertySet, Value, apply_layers};
use crate::style::{ShadowStyle, ThemeColor};
use crate::widget::{Element, Widget, widget_defaults};
use std::any::Any;

pub const APP_BAR_PROPERTIES: PropertySet<AppBar> = PropertySet::new(|_, _| {
    Properties::new()
        .with(
            "background",
            ThemeColor::new(
                "appBarBackground",
                ThemeColor::new("primary", Color::ROYAL_BLUE),
            ),
        )
        .with(
            "shadow",
            ShadowStyle::new(0.0, 4.0, 6.0, Color::BLACK.with_alpha(0.25)),
        )
});

const APP_BAR_LAYERS: [PropertySet<AppBar>; 3] = [
    PropertySet::new(|_, _| widget_defaults()),
    PropertySet::new(|_, _| surface_defaults()),
    APP_BAR_PROPERTIES,
];

#[derive(Debug)]
pub struct AppBar {
    surface: Surface,
}

impl AppBar {
    pub fn new(props: &Properties) -> PropertyResult<Self> {
        let mut app_bar = Self {
            surface: Surface::unapplied(),
        };
        apply_layers(&APP_BAR_LAYERS, &mut app_bar, props, &())?;
        Ok(app_bar)
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }
}

impl PropertyHost for AppBar {
    fn lookup(&self, name: &str) -> Lookup {
        self.surface.lookup(name)
    }

    fn assign(&mut self, name: &'static str, value: Value) -> PropertyResult<()> {
        self.surface.assign(name, value)
    }

    fn read(&self, name: &str) -> Option<Value> {
        self.surface.read(name)
    }
}

impl Element for AppBar {
    fn widget(&self) -> &Widget {
        self.surface.widget()
    }

    fn widget_mut(&mut self) -> &mut Widget {
        self.surface.widget_mut()
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        self.surface.draw(canvas);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
