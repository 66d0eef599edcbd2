//! A focusable, theme-coloured surface.

use super::{Surface, surface_defaults};
use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::PropertyResult;
use crate::property::{Lookup, Properties, PropertyHost, PropertySet, Value, apply_layers};
use crate::shape::{CornerRadius, Shape};
use crate::style::{ShadowStyle, ThemeColor};
use crate::widget::{Element, Widget, widget_defaults};
use std::any::Any;

pub const BUTTON_PROPERTIES: PropertySet<Button> = PropertySet::new(|_, _| {
    Properties::new()
        .with("background", ThemeColor::new("primary", Color::ROYAL_BLUE))
        .with(
            "shadow",
            ShadowStyle::new(0.0, 2.0, 4.0, Color::BLACK.with_alpha(0.25)),
        )
        .with(
            "shape",
            Shape::Rectangle(CornerRadius::uniform(4.0).unwrap_or_default()),
        )
        .with("focusable", true)
});

const BUTTON_LAYERS: [PropertySet<Button>; 3] = [
    PropertySet::new(|_, _| widget_defaults()),
    PropertySet::new(|_, _| surface_defaults()),
    BUTTON_PROPERTIES,
];

#[derive(Debug)]
pub struct Button {
    surface: Surface,
}

impl Button {
    pub fn new(props: &Properties) -> PropertyResult<Self> {
        let mut button = Self {
            surface: Surface::unapplied(),
        };
        apply_layers(&BUTTON_LAYERS, &mut button, props, &())?;
        Ok(button)
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }
}

impl PropertyHost for Button {
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

impl Element for Button {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{Application, RootContext};
    use crate::style::Paint;
    use crate::theme::Theme;
    use std::rc::Rc;

    #[test]
    fn test_defaults_layer_over_surface() {
        let button = Button::new(&Properties::new()).unwrap();
        assert!(button.widget().focusable());
        assert_eq!(
            button.surface().shadow(),
            Some(ShadowStyle::new(0.0, 2.0, 4.0, Color::rgba(0.0, 0.0, 0.0, 0.25)))
        );
        assert_eq!(
            button.surface().shape(),
            &Shape::Rectangle(CornerRadius::uniform(4.0).unwrap())
        );
        assert_eq!(button.surface().resolved_background(), Color::ROYAL_BLUE);
    }

    #[test]
    fn test_override_beats_every_layer() {
        let button = Button::new(
            &Properties::new()
                .with("background", Color::GREEN)
                .with("focusable", false),
        )
        .unwrap();
        assert_eq!(button.surface().background(), &Paint::Solid(Color::GREEN));
        assert!(!button.widget().focusable());
    }

    #[test]
    fn test_background_follows_theme() {
        let theme = Theme::builder().primary(Color::RED).build();
        let context = RootContext::with_theme(theme);
        let app: Rc<dyn Application> = context.clone();
        let button = Button::new(&Properties::new()).unwrap();

        assert_eq!(button.surface().resolved_background(), Color::ROYAL_BLUE);
        button.widget().attach_to(&app);
        assert_eq!(button.surface().resolved_background(), Color::RED);
    }

    #[test]
    fn test_property_route_reaches_base() {
        let mut button = Button::new(&Properties::new()).unwrap();
        button.assign("x", Value::Number(7.0)).unwrap();
        assert_eq!(button.read("x"), Some(Value::Number(7.0)));
        assert_eq!(button.lookup("background"), Lookup::Settable);
        assert_eq!(button.lookup("attached"), Lookup::ReadOnly);
    }
}
