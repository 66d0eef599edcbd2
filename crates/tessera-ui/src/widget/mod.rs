//! The base widget entity.
//!
//! A [`Widget`] owns its geometry, flags and event handler lists in a private
//! record. Every visual mutation through a public setter calls
//! [`Widget::invalidate`], which forwards a single redraw request to the owning
//! [`Application`] when the widget is attached and does nothing otherwise.
//!
//! # Example
//!
//! ```
//! use tessera_ui::property::Properties;
//! use tessera_ui::{Visibility, Widget};
//!
//! let mut widget = Widget::new(
//!     &Properties::new()
//!         .with("width", 10.0)
//!         .with("height", 10.0),
//! )
//! .unwrap();
//!
//! assert!(widget.hit_test(10.0, 10.0));
//! assert!(!widget.hit_test(10.0001, 5.0));
//!
//! widget.set_visibility(Visibility::Gone);
//! assert_eq!(widget.width(), 0.0);
//! ```

mod element;
mod lineage;

pub use crate::widget_id::WidgetId;
pub use element::{Element, WidgetRef, widget_ref};
pub use lineage::{Lineage, Owner};

use crate::application::Application;
use crate::error::{PropertyError, PropertyResult};
use crate::event::{ClickEvent, FocusEvent, HandlerList, PointerEvent, WidgetEvents};
use crate::length::Length;
use crate::private::{Private, PrivateFields};
use crate::property::{
    Lookup, Properties, PropertyDef, PropertyHost, PropertySet, Value, find,
};
use std::fmt;
use std::rc::Rc;
use tessera_core::geometry::Rect;
use tessera_core::math::Vec2;

/// Visibility state of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    /// Drawn and hit-testable.
    #[default]
    Visible,
    /// Not drawn but still occupies its size.
    Invisible,
    /// Not drawn, reports zero size and never hit-tests.
    Gone,
}

struct WidgetState {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    hit_test_enabled: bool,
    visibility: Visibility,
    focusable: bool,
    events: WidgetEvents,
    /// Values assigned under names no accessor defines.
    attributes: Properties,
}

impl WidgetState {
    fn new(_: ()) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            hit_test_enabled: true,
            visibility: Visibility::Visible,
            focusable: false,
            events: WidgetEvents::default(),
            attributes: Properties::new(),
        }
    }

    fn is_gone(&self) -> bool {
        self.visibility == Visibility::Gone
    }
}

const WIDGET_PRIVATES: PrivateFields<WidgetState> = PrivateFields::new(WidgetState::new);

/// Base-layer defaults shared by every widget type.
///
/// Types extending [`Widget`] wrap this in a `PropertySet` of their own type
/// so the values are written through their most-derived accessors.
pub fn widget_defaults() -> Properties {
    Properties::new()
        .with("x", 0.0)
        .with("y", 0.0)
        .with("width", 0.0)
        .with("height", 0.0)
        .with("hit_test_enabled", true)
        .with("visibility", Visibility::Visible)
        .with("focusable", false)
}

/// Default properties for [`Widget`].
pub const WIDGET_PROPERTIES: PropertySet<Widget> = PropertySet::new(|_, _| widget_defaults());

fn check_finite(property: &'static str, value: f32) -> PropertyResult<f32> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PropertyError::NonFinite { property, value })
    }
}

fn check_dimension(property: &'static str, value: f32) -> PropertyResult<f32> {
    let value = check_finite(property, value)?;
    if value < 0.0 {
        return Err(PropertyError::OutOfRange { property, value });
    }
    Ok(value)
}

static WIDGET_PROPERTY_DEFS: [PropertyDef<Widget>; 16] = [
    PropertyDef::accessor(
        "x",
        |w: &Widget| Value::Number(w.x()),
        |w: &mut Widget, v: Value| w.set_x(v.into_number("x")?),
    ),
    PropertyDef::accessor(
        "y",
        |w: &Widget| Value::Number(w.y()),
        |w: &mut Widget, v: Value| w.set_y(v.into_number("y")?),
    ),
    PropertyDef::accessor(
        "width",
        |w: &Widget| Value::Number(w.width()),
        |w: &mut Widget, v: Value| w.set_width(v.into_length("width")?),
    ),
    PropertyDef::accessor(
        "height",
        |w: &Widget| Value::Number(w.height()),
        |w: &mut Widget, v: Value| w.set_height(v.into_length("height")?),
    ),
    PropertyDef::accessor(
        "hit_test_enabled",
        |w: &Widget| Value::Bool(w.hit_test_enabled()),
        |w: &mut Widget, v: Value| {
            w.set_hit_test_enabled(v.into_bool("hit_test_enabled")?);
            Ok(())
        },
    ),
    PropertyDef::accessor(
        "visibility",
        |w: &Widget| Value::Visibility(w.visibility()),
        |w: &mut Widget, v: Value| {
            w.set_visibility_value(v);
            Ok(())
        },
    ),
    PropertyDef::accessor(
        "focusable",
        |w: &Widget| Value::Bool(w.focusable()),
        |w: &mut Widget, v: Value| {
            w.set_focusable(v.into_bool("focusable")?);
            Ok(())
        },
    ),
    PropertyDef::read_only("attached", |w: &Widget| Value::Bool(w.is_attached())),
    PropertyDef::read_only("intrinsic_width", |w: &Widget| {
        Value::Length(w.intrinsic_width())
    }),
    PropertyDef::read_only("intrinsic_height", |w: &Widget| {
        Value::Length(w.intrinsic_height())
    }),
    PropertyDef::write_only("on_click", |_: &mut Widget, _: Value| {
        Err(PropertyError::ReadOnlyEvent {
            property: "on_click",
        })
    }),
    PropertyDef::write_only("on_pointer_down", |_: &mut Widget, _: Value| {
        Err(PropertyError::ReadOnlyEvent {
            property: "on_pointer_down",
        })
    }),
    PropertyDef::write_only("on_pointer_move", |_: &mut Widget, _: Value| {
        Err(PropertyError::ReadOnlyEvent {
            property: "on_pointer_move",
        })
    }),
    PropertyDef::write_only("on_pointer_up", |_: &mut Widget, _: Value| {
        Err(PropertyError::ReadOnlyEvent {
            property: "on_pointer_up",
        })
    }),
    PropertyDef::write_only("on_focus", |_: &mut Widget, _: Value| {
        Err(PropertyError::ReadOnlyEvent {
            property: "on_focus",
        })
    }),
    PropertyDef::write_only("on_focus_lost", |_: &mut Widget, _: Value| {
        Err(PropertyError::ReadOnlyEvent {
            property: "on_focus_lost",
        })
    }),
];

/// A widget that can be drawn on the user's screen by the application.
pub struct Widget {
    id: WidgetId,
    lineage: Rc<Lineage>,
    state: Private<WidgetState>,
}

impl Widget {
    /// Create a widget with the default properties, replaced by any present in
    /// `props`.
    pub fn new(props: &Properties) -> PropertyResult<Self> {
        let mut widget = Self::unapplied();
        WIDGET_PROPERTIES.apply(&mut widget, props, &())?;
        Ok(widget)
    }

    /// Allocate a widget without applying any properties.
    ///
    /// Constructors of extending types embed this and then apply every layer,
    /// starting with [`widget_defaults`], to the assembled value.
    pub fn unapplied() -> Self {
        Self {
            id: WidgetId::next(),
            lineage: Lineage::new(),
            state: WIDGET_PRIVATES.allocate(()),
        }
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn lineage(&self) -> &Rc<Lineage> {
        &self.lineage
    }

    /// Top-left x-axis coordinate.
    pub fn x(&self) -> f32 {
        self.state.x
    }

    pub fn set_x(&mut self, x: f32) -> PropertyResult<()> {
        self.state.x = check_finite("x", x)?;
        self.invalidate();
        Ok(())
    }

    /// Top-left y-axis coordinate.
    pub fn y(&self) -> f32 {
        self.state.y
    }

    pub fn set_y(&mut self, y: f32) -> PropertyResult<()> {
        self.state.y = check_finite("y", y)?;
        self.invalidate();
        Ok(())
    }

    /// Resolved width, or zero while [`Visibility::Gone`].
    pub fn width(&self) -> f32 {
        if self.state.is_gone() { 0.0 } else { self.state.width }
    }

    /// Set the width. Percentages resolve against the parent's width, or zero
    /// when there is no parent widget.
    pub fn set_width(&mut self, width: impl Into<Length>) -> PropertyResult<()> {
        let parent = self.lineage.parent_extent().width;
        self.state.width = check_dimension("width", width.into().resolve(parent))?;
        self.sync_extent();
        self.invalidate();
        Ok(())
    }

    /// Resolved height, or zero while [`Visibility::Gone`].
    pub fn height(&self) -> f32 {
        if self.state.is_gone() { 0.0 } else { self.state.height }
    }

    pub fn set_height(&mut self, height: impl Into<Length>) -> PropertyResult<()> {
        let parent = self.lineage.parent_extent().height;
        self.state.height = check_dimension("height", height.into().resolve(parent))?;
        self.sync_extent();
        self.invalidate();
        Ok(())
    }

    pub fn visibility(&self) -> Visibility {
        self.state.visibility
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.state.visibility = visibility;
        self.sync_extent();
        self.invalidate();
    }

    /// Values other than [`Value::Visibility`] are dropped without error.
    pub fn set_visibility_value(&mut self, value: Value) {
        match value {
            Value::Visibility(visibility) => self.set_visibility(visibility),
            other => tracing::debug!(kind = other.kind(), "ignoring invalid visibility"),
        }
    }

    /// Whether the widget takes part in pointer hit testing.
    pub fn hit_test_enabled(&self) -> bool {
        self.state.hit_test_enabled
    }

    pub fn set_hit_test_enabled(&mut self, enabled: bool) {
        self.state.hit_test_enabled = enabled;
    }

    pub fn focusable(&self) -> bool {
        self.state.focusable
    }

    pub fn set_focusable(&mut self, focusable: bool) {
        self.state.focusable = focusable;
    }

    /// Effective bounds (zero-sized while gone).
    pub fn bounds(&self) -> Rect<f32> {
        Rect::new(self.x(), self.y(), self.width(), self.height())
    }

    pub fn intrinsic_width(&self) -> Length {
        Length::ZERO
    }

    pub fn intrinsic_height(&self) -> Length {
        Length::ZERO
    }

    /// Value stored under a name that no accessor defines.
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.state.attributes.get(name)
    }

    pub fn on_click(&self) -> &HandlerList<ClickEvent> {
        &self.state.events.on_click
    }

    pub fn on_pointer_down(&self) -> &HandlerList<PointerEvent> {
        &self.state.events.on_pointer_down
    }

    pub fn on_pointer_move(&self) -> &HandlerList<PointerEvent> {
        &self.state.events.on_pointer_move
    }

    pub fn on_pointer_up(&self) -> &HandlerList<PointerEvent> {
        &self.state.events.on_pointer_up
    }

    pub fn on_focus(&self) -> &HandlerList<FocusEvent> {
        &self.state.events.on_focus
    }

    pub fn on_focus_lost(&self) -> &HandlerList<FocusEvent> {
        &self.state.events.on_focus_lost
    }

    /// The application reached through the parent chain.
    pub fn application(&self) -> Option<Rc<dyn Application>> {
        self.lineage.application()
    }

    pub fn is_attached(&self) -> bool {
        self.application().is_some()
    }

    /// Link this widget under `parent`. Called by whoever owns the child list.
    ///
    /// Returns `false` without changing anything when `parent` is this widget
    /// or one of its descendants.
    pub fn set_parent(&self, parent: Option<&Widget>) -> bool {
        self.lineage
            .set_parent(parent.map(|parent| Owner::widget(&parent.lineage)))
    }

    /// Make this widget a root of `application`.
    pub fn attach_to(&self, application: &Rc<dyn Application>) {
        self.lineage
            .set_parent(Some(Owner::application(application)));
    }

    pub fn detach(&self) {
        self.lineage.set_parent(None);
    }

    /// Request a redraw from the owning application. No-op while detached.
    pub fn invalidate(&self) {
        self.lineage.invalidate();
    }

    /// Ask the owning application to focus this widget. No-op while detached.
    pub fn focus(&self) {
        if let Some(app) = self.application() {
            tracing::debug!(widget = %self.id, "requesting focus");
            app.set_focused_widget(Some(self.id));
        }
    }

    /// Closed-interval test against `[x, x + width] × [y, y + height]`.
    pub fn hit_test(&self, x: f32, y: f32) -> bool {
        self.hit_test_enabled() && !self.state.is_gone() && self.bounds().contains(x, y)
    }

    pub fn hit_test_point(&self, point: Vec2) -> bool {
        self.hit_test(point.x, point.y)
    }

    fn sync_extent(&self) {
        self.lineage.set_extent(self.bounds().size());
    }
}

impl PropertyHost for Widget {
    fn lookup(&self, name: &str) -> Lookup {
        find(&WIDGET_PROPERTY_DEFS, name).map_or(Lookup::Missing, PropertyDef::lookup)
    }

    fn assign(&mut self, name: &'static str, value: Value) -> PropertyResult<()> {
        match find(&WIDGET_PROPERTY_DEFS, name) {
            Some(def) => def.assign(self, value),
            None => {
                self.state.attributes.insert(name, value);
                self.invalidate();
                Ok(())
            }
        }
    }

    fn read(&self, name: &str) -> Option<Value> {
        match find(&WIDGET_PROPERTY_DEFS, name) {
            Some(def) => def.read(self),
            None => self.state.attributes.get(name).cloned(),
        }
    }
}

impl fmt::Debug for Widget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Widget")
            .field("id", &self.id)
            .field("bounds", &self.bounds())
            .field("visibility", &self.visibility())
            .field("attached", &self.is_attached())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::RootContext;

    fn sized(width: f32, height: f32) -> Widget {
        Widget::new(
            &Properties::new()
                .with("width", width)
                .with("height", height),
        )
        .unwrap()
    }

    #[test]
    fn test_defaults() {
        let widget = Widget::new(&Properties::new()).unwrap();
        assert_eq!(widget.x(), 0.0);
        assert_eq!(widget.y(), 0.0);
        assert_eq!(widget.width(), 0.0);
        assert_eq!(widget.height(), 0.0);
        assert!(widget.hit_test_enabled());
        assert!(!widget.focusable());
        assert_eq!(widget.visibility(), Visibility::Visible);
        assert!(!widget.is_attached());
    }

    #[test]
    fn test_gone_masks_size_without_losing_it() {
        let mut widget = sized(30.0, 20.0);
        widget.set_visibility(Visibility::Gone);
        assert_eq!(widget.width(), 0.0);
        assert_eq!(widget.height(), 0.0);

        widget.set_visibility(Visibility::Visible);
        assert_eq!(widget.width(), 30.0);
        assert_eq!(widget.height(), 20.0);
    }

    #[test]
    fn test_invisible_keeps_size() {
        let mut widget = sized(30.0, 20.0);
        widget.set_visibility(Visibility::Invisible);
        assert_eq!(widget.width(), 30.0);
    }

    #[test]
    fn test_invalid_visibility_value_is_ignored() {
        let mut widget = sized(1.0, 1.0);
        widget.set_visibility(Visibility::Invisible);
        widget.set_visibility_value(Value::Bool(false));
        assert_eq!(widget.visibility(), Visibility::Invisible);
        assert!(widget.assign("visibility", Value::Number(2.0)).is_ok());
        assert_eq!(widget.visibility(), Visibility::Invisible);
    }

    #[test]
    fn test_non_finite_geometry_rejected() {
        let mut widget = sized(5.0, 5.0);
        assert!(matches!(
            widget.set_x(f32::NAN),
            Err(PropertyError::NonFinite { property: "x", .. })
        ));
        assert!(widget.set_y(f32::INFINITY).is_err());
        assert!(widget.set_width(-1.0).is_err());
        assert!(widget.set_height(f32::NEG_INFINITY).is_err());
        assert_eq!(widget.x(), 0.0);
        assert_eq!(widget.width(), 5.0);
    }

    #[test]
    fn test_hit_test_closed_interval() {
        let widget = sized(10.0, 10.0);
        assert!(widget.hit_test(0.0, 0.0));
        assert!(widget.hit_test(10.0, 10.0));
        assert!(widget.hit_test(10.0, 0.0));
        assert!(!widget.hit_test(10.0001, 5.0));
        assert!(!widget.hit_test(5.0, -0.0001));
        assert!(widget.hit_test_point(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn test_hit_test_disabled_or_gone() {
        let mut widget = sized(10.0, 10.0);
        widget.set_hit_test_enabled(false);
        assert!(!widget.hit_test(5.0, 5.0));

        widget.set_hit_test_enabled(true);
        widget.set_visibility(Visibility::Gone);
        assert!(!widget.hit_test(0.0, 0.0));
    }

    #[test]
    fn test_event_registries_cannot_be_assigned() {
        let mut widget = sized(1.0, 1.0);
        let err = widget.assign("on_click", Value::Unset).unwrap_err();
        assert_eq!(
            err,
            PropertyError::ReadOnlyEvent {
                property: "on_click"
            }
        );
        assert!(widget.read("on_click").is_none());
        assert_eq!(widget.lookup("on_focus_lost"), Lookup::Settable);
    }

    #[test]
    fn test_event_override_fails_construction() {
        let props = Properties::new().with("width", 4.0);
        assert!(Widget::new(&props).is_ok());

        const WITH_EVENT: PropertySet<Widget> =
            PropertySet::new(|_, _| Properties::new().with("on_click", true));
        let mut widget = Widget::new(&Properties::new()).unwrap();
        assert!(WITH_EVENT.apply(&mut widget, &Properties::new(), &()).is_err());
    }

    #[test]
    fn test_read_only_and_missing_names() {
        let mut widget = sized(1.0, 1.0);
        assert_eq!(widget.lookup("attached"), Lookup::ReadOnly);
        assert_eq!(widget.lookup("tooltip"), Lookup::Missing);

        widget.assign("tooltip", Value::Bool(true)).unwrap();
        assert_eq!(widget.attribute("tooltip"), Some(&Value::Bool(true)));
        assert_eq!(widget.read("attached"), Some(Value::Bool(false)));
    }

    #[test]
    fn test_invalidate_only_when_attached() {
        let context = RootContext::new();
        let mut widget = sized(10.0, 10.0);

        widget.set_x(3.0).unwrap();
        assert_eq!(context.invalidation_count(), 0);

        let app: Rc<dyn Application> = context.clone();
        widget.attach_to(&app);
        widget.set_x(4.0).unwrap();
        assert_eq!(context.invalidation_count(), 1);

        widget.set_hit_test_enabled(false);
        widget.set_focusable(true);
        assert_eq!(context.invalidation_count(), 1);

        widget.detach();
        widget.set_y(1.0).unwrap();
        assert_eq!(context.invalidation_count(), 1);
    }

    #[test]
    fn test_focus_requests_application() {
        let context = RootContext::new();
        let widget = sized(10.0, 10.0);

        widget.focus();
        assert_eq!(context.focused_widget(), None);

        let app: Rc<dyn Application> = context.clone();
        widget.attach_to(&app);
        widget.focus();
        assert_eq!(context.focused_widget(), Some(widget.id()));
    }

    #[test]
    fn test_percent_width_resolves_against_parent() {
        let parent = sized(200.0, 100.0);
        let mut child = sized(0.0, 0.0);

        child.set_width(Length::Percent(50.0)).unwrap();
        assert_eq!(child.width(), 0.0);

        child.set_parent(Some(&parent));
        child.set_width(Length::Percent(50.0)).unwrap();
        child.set_height(Length::Percent(25.0)).unwrap();
        assert_eq!(child.width(), 100.0);
        assert_eq!(child.height(), 25.0);
    }

    #[test]
    fn test_parent_cycle_is_rejected() {
        let context = RootContext::new();
        let app: Rc<dyn Application> = context.clone();
        let a = sized(10.0, 10.0);
        let b = sized(10.0, 10.0);
        let c = sized(10.0, 10.0);

        assert!(a.set_parent(Some(&b)));
        assert!(b.set_parent(Some(&c)));
        assert!(!c.set_parent(Some(&a)));
        assert!(!a.set_parent(Some(&a)));

        c.attach_to(&app);
        a.invalidate();
        assert_eq!(context.invalidation_count(), 1);
        assert!(a.lineage().is_child_of(b.lineage()));
    }

    #[test]
    fn test_application_found_through_parent_chain() {
        let context = RootContext::new();
        let app: Rc<dyn Application> = context.clone();

        let root = sized(10.0, 10.0);
        let middle = sized(10.0, 10.0);
        let mut leaf = sized(10.0, 10.0);

        middle.set_parent(Some(&root));
        leaf.set_parent(Some(&middle));
        assert!(!leaf.is_attached());

        root.attach_to(&app);
        assert!(leaf.is_attached());
        leaf.set_x(1.0).unwrap();
        assert_eq!(context.invalidation_count(), 1);

        drop(middle);
        assert!(!leaf.is_attached());
    }
}
