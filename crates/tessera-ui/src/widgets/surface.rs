//! A filled, optionally shadowed shape.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::PropertyResult;
use crate::private::{Private, PrivateFields};
use crate::property::{
    Lookup, Properties, PropertyDef, PropertyHost, PropertySet, Value, apply_layers, find,
};
use crate::shape::Shape;
use crate::style::{Paint, ShadowStyle, Style};
use crate::widget::{Element, Visibility, Widget, widget_defaults};
use std::any::Any;
use std::fmt;

struct SurfaceState {
    background: Paint,
    shadow: Option<ShadowStyle>,
    shape: Shape,
}

const SURFACE_PRIVATES: PrivateFields<SurfaceState> = PrivateFields::new(|_| SurfaceState {
    background: Paint::Solid(Color::WHITE),
    shadow: None,
    shape: Shape::default(),
});

/// Defaults contributed by the surface layer.
pub fn surface_defaults() -> Properties {
    Properties::new()
        .with("background", Color::WHITE)
        .with("shadow", Option::<ShadowStyle>::None)
        .with("shape", Shape::default())
}

pub const SURFACE_PROPERTIES: PropertySet<Surface> = PropertySet::new(|_, _| surface_defaults());

const SURFACE_LAYERS: [PropertySet<Surface>; 2] = [
    PropertySet::new(|_, _| widget_defaults()),
    SURFACE_PROPERTIES,
];

static SURFACE_PROPERTY_DEFS: [PropertyDef<Surface>; 3] = [
    PropertyDef::accessor(
        "background",
        |s: &Surface| Value::Paint(s.background().clone()),
        |s: &mut Surface, v: Value| {
            s.set_background(v.into_paint("background")?);
            Ok(())
        },
    ),
    PropertyDef::accessor(
        "shadow",
        |s: &Surface| Value::Shadow(s.shadow()),
        |s: &mut Surface, v: Value| {
            s.set_shadow(v.into_shadow("shadow")?);
            Ok(())
        },
    ),
    PropertyDef::accessor(
        "shape",
        |s: &Surface| Value::Shape(s.shape().clone()),
        |s: &mut Surface, v: Value| {
            s.set_shape(v.into_shape("shape")?);
            Ok(())
        },
    ),
];

/// A widget that paints a background shape with an optional drop shadow.
pub struct Surface {
    widget: Widget,
    state: Private<SurfaceState>,
}

impl Surface {
    pub fn new(props: &Properties) -> PropertyResult<Self> {
        let mut surface = Self::unapplied();
        apply_layers(&SURFACE_LAYERS, &mut surface, props, &())?;
        Ok(surface)
    }

    /// Allocate a surface without applying any properties.
    pub fn unapplied() -> Self {
        Self {
            widget: Widget::unapplied(),
            state: SURFACE_PRIVATES.allocate(()),
        }
    }

    pub fn background(&self) -> &Paint {
        &self.state.background
    }

    pub fn set_background(&mut self, background: impl Into<Paint>) {
        self.state.background = background.into();
        self.widget.invalidate();
    }

    /// Background resolved against the attached application's theme.
    pub fn resolved_background(&self) -> Color {
        self.state
            .background
            .resolve(self.widget.application().as_deref())
    }

    pub fn shadow(&self) -> Option<ShadowStyle> {
        self.state.shadow
    }

    pub fn set_shadow(&mut self, shadow: Option<ShadowStyle>) {
        self.state.shadow = shadow;
        self.widget.invalidate();
    }

    pub fn shape(&self) -> &Shape {
        &self.state.shape
    }

    pub fn set_shape(&mut self, shape: impl Into<Shape>) {
        self.state.shape = shape.into();
        self.widget.invalidate();
    }

    /// Shadow first, then fill.
    fn styles(&self) -> Vec<Style> {
        let mut styles = Vec::with_capacity(2);
        if let Some(shadow) = self.state.shadow {
            styles.push(Style::Shadow(shadow));
        }
        styles.push(Style::Fill(self.resolved_background()));
        styles
    }
}

impl PropertyHost for Surface {
    fn lookup(&self, name: &str) -> Lookup {
        match find(&SURFACE_PROPERTY_DEFS, name) {
            Some(def) => def.lookup(),
            None => self.widget.lookup(name),
        }
    }

    fn assign(&mut self, name: &'static str, value: Value) -> PropertyResult<()> {
        match find(&SURFACE_PROPERTY_DEFS, name) {
            Some(def) => def.assign(self, value),
            None => self.widget.assign(name, value),
        }
    }

    fn read(&self, name: &str) -> Option<Value> {
        match find(&SURFACE_PROPERTY_DEFS, name) {
            Some(def) => def.read(self),
            None => self.widget.read(name),
        }
    }
}

impl Element for Surface {
    fn widget(&self) -> &Widget {
        &self.widget
    }

    fn widget_mut(&mut self) -> &mut Widget {
        &mut self.widget
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        if self.widget.visibility() != Visibility::Visible {
            return;
        }
        canvas.draw_shape(self.widget.bounds(), &self.state.shape, &self.styles());
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl fmt::Debug for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface")
            .field("widget", &self.widget)
            .field("background", self.background())
            .field("shadow", &self.shadow())
            .field("shape", self.shape())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{Application, RootContext};
    use crate::draw_list::{DrawCommand, RecordingCanvas};
    use crate::shape::CornerRadius;
    use crate::style::ThemeColor;
    use std::rc::Rc;

    #[test]
    fn test_defaults() {
        let surface = Surface::new(&Properties::new()).unwrap();
        assert_eq!(surface.background(), &Paint::Solid(Color::WHITE));
        assert_eq!(surface.shadow(), None);
        assert_eq!(surface.shape(), &Shape::default());
    }

    #[test]
    fn test_overrides_reach_both_layers() {
        let surface = Surface::new(
            &Properties::new()
                .with("width", 40.0)
                .with("background", Color::RED)
                .with("shadow", ShadowStyle::new(1.0, 1.0, 2.0, Color::BLACK)),
        )
        .unwrap();
        assert_eq!(surface.widget().width(), 40.0);
        assert_eq!(surface.resolved_background(), Color::RED);
        assert!(surface.shadow().is_some());
    }

    #[test]
    fn test_unset_shadow_override_clears() {
        let surface =
            Surface::new(&Properties::new().with("shadow", Value::Unset)).unwrap();
        assert_eq!(surface.shadow(), None);
    }

    #[test]
    fn test_wrong_type_fails_construction() {
        let result = Surface::new(&Properties::new().with("background", true));
        assert!(result.is_err());
    }

    #[test]
    fn test_draw_emits_shadow_then_fill() {
        let surface = Surface::new(
            &Properties::new()
                .with("width", 10.0)
                .with("height", 5.0)
                .with("shadow", ShadowStyle::new(0.0, 2.0, 4.0, Color::BLACK))
                .with("shape", CornerRadius::uniform(3.0).unwrap()),
        )
        .unwrap();
        let mut canvas = RecordingCanvas::new(100.0, 100.0);
        surface.draw(&mut canvas);

        let [DrawCommand::Shape { styles, .. }] = canvas.commands() else {
            panic!("expected one shape, got {:?}", canvas.commands());
        };
        assert!(matches!(styles.as_slice(), [Style::Shadow(_), Style::Fill(_)]));
    }

    #[test]
    fn test_invisible_draws_nothing() {
        let mut surface = Surface::new(&Properties::new()).unwrap();
        surface.widget_mut().set_visibility(Visibility::Invisible);
        let mut canvas = RecordingCanvas::new(10.0, 10.0);
        surface.draw(&mut canvas);
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_setters_invalidate_when_attached() {
        let context = RootContext::new();
        let app: Rc<dyn Application> = context.clone();
        let mut surface = Surface::new(&Properties::new()).unwrap();
        surface.widget().attach_to(&app);

        surface.set_background(ThemeColor::new("primary", Color::RED));
        surface.set_shadow(None);
        surface.set_shape(Shape::Ellipse);
        assert_eq!(context.invalidation_count(), 3);
        assert_eq!(surface.resolved_background(), Color::ROYAL_BLUE);
    }
}
