//! Declarative property defaults routed through accessors.
//!
//! Each widget type contributes a table of [`PropertyDef`]s, one per accessor it
//! defines, and implements [`PropertyHost`] by consulting its own table before
//! delegating to the type it extends. A [`PropertySet`] produces the defaults of
//! one type, merges them with caller overrides and writes the result through
//! [`PropertyHost::assign`], so every value runs through the most-derived
//! accessor (and its validation and invalidation) no matter which layer declared
//! the default.
//!
//! ```
//! use tessera_ui::property::{Properties, PropertySet};
//! use tessera_ui::{Visibility, Widget};
//!
//! const OFFSET_DEFAULTS: PropertySet<Widget> =
//!     PropertySet::new(|_, _| Properties::new().with("x", 8.0).with("y", 8.0));
//!
//! let mut widget = Widget::new(&Properties::new()).unwrap();
//! let overrides = Properties::new().with("y", 2.0);
//! OFFSET_DEFAULTS.apply(&mut widget, &overrides, &()).unwrap();
//!
//! assert_eq!(widget.x(), 8.0);
//! assert_eq!(widget.y(), 2.0);
//! assert_eq!(widget.visibility(), Visibility::Visible);
//! ```

use crate::color::Color;
use crate::error::{PropertyError, PropertyResult};
use crate::length::Length;
use crate::shape::{CornerRadius, Shape};
use crate::style::{Paint, ShadowStyle, ThemeColor};
use crate::widget::Visibility;
use indexmap::IndexMap;
use tessera_core::profiling::profile_function;

/// Dynamically typed property value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Explicitly absent. An override holding `Unset` still wins over the default.
    #[default]
    Unset,
    Bool(bool),
    Number(f32),
    Length(Length),
    Visibility(Visibility),
    Paint(Paint),
    Shadow(Option<ShadowStyle>),
    Shape(Shape),
}

impl Value {
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Unset => "unset",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Length(_) => "length",
            Value::Visibility(_) => "visibility",
            Value::Paint(_) => "paint",
            Value::Shadow(_) => "shadow",
            Value::Shape(_) => "shape",
        }
    }

    fn mismatch(&self, property: &'static str, expected: &'static str) -> PropertyError {
        PropertyError::TypeMismatch {
            property,
            expected,
            found: self.kind(),
        }
    }

    pub fn into_bool(self, property: &'static str) -> PropertyResult<bool> {
        match self {
            Value::Bool(v) => Ok(v),
            other => Err(other.mismatch(property, "bool")),
        }
    }

    pub fn into_number(self, property: &'static str) -> PropertyResult<f32> {
        match self {
            Value::Number(v) => Ok(v),
            other => Err(other.mismatch(property, "number")),
        }
    }

    /// Numbers are accepted as pixel lengths.
    pub fn into_length(self, property: &'static str) -> PropertyResult<Length> {
        match self {
            Value::Number(v) => Ok(Length::Px(v)),
            Value::Length(v) => Ok(v),
            other => Err(other.mismatch(property, "length")),
        }
    }

    pub fn into_paint(self, property: &'static str) -> PropertyResult<Paint> {
        match self {
            Value::Paint(v) => Ok(v),
            other => Err(other.mismatch(property, "paint")),
        }
    }

    /// `Unset` clears the shadow.
    pub fn into_shadow(self, property: &'static str) -> PropertyResult<Option<ShadowStyle>> {
        match self {
            Value::Shadow(v) => Ok(v),
            Value::Unset => Ok(None),
            other => Err(other.mismatch(property, "shadow")),
        }
    }

    pub fn into_shape(self, property: &'static str) -> PropertyResult<Shape> {
        match self {
            Value::Shape(v) => Ok(v),
            other => Err(other.mismatch(property, "shape")),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Number(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v as f32)
    }
}

impl From<Length> for Value {
    fn from(v: Length) -> Self {
        Value::Length(v)
    }
}

impl From<Visibility> for Value {
    fn from(v: Visibility) -> Self {
        Value::Visibility(v)
    }
}

impl From<Paint> for Value {
    fn from(v: Paint) -> Self {
        Value::Paint(v)
    }
}

impl From<Color> for Value {
    fn from(v: Color) -> Self {
        Value::Paint(Paint::Solid(v))
    }
}

impl From<ThemeColor> for Value {
    fn from(v: ThemeColor) -> Self {
        Value::Paint(Paint::Theme(v))
    }
}

impl From<ShadowStyle> for Value {
    fn from(v: ShadowStyle) -> Self {
        Value::Shadow(Some(v))
    }
}

impl From<Option<ShadowStyle>> for Value {
    fn from(v: Option<ShadowStyle>) -> Self {
        Value::Shadow(v)
    }
}

impl From<Shape> for Value {
    fn from(v: Shape) -> Self {
        Value::Shape(v)
    }
}

impl From<CornerRadius> for Value {
    fn from(v: CornerRadius) -> Self {
        Value::Shape(Shape::Rectangle(v))
    }
}

/// Ordered map from property name to value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties {
    values: IndexMap<&'static str, Value>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: &'static str, value: impl Into<Value>) -> Self {
        self.values.insert(name, value.into());
        self
    }

    pub fn insert(&mut self, name: &'static str, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(name, value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Whether `name` is present, even when its value is [`Value::Unset`].
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.values.iter().map(|(name, value)| (*name, value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl IntoIterator for Properties {
    type Item = (&'static str, Value);
    type IntoIter = indexmap::map::IntoIter<&'static str, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl FromIterator<(&'static str, Value)> for Properties {
    fn from_iter<I: IntoIterator<Item = (&'static str, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// How a name resolves on a [`PropertyHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// No layer defines an accessor; assignment stores an ad-hoc attribute.
    Missing,
    /// Getter only; assignment through a [`PropertySet`] is skipped.
    ReadOnly,
    /// An accessor with a setter.
    Settable,
}

/// One accessor contributed by a type.
pub struct PropertyDef<T> {
    pub name: &'static str,
    pub get: Option<fn(&T) -> Value>,
    pub set: Option<fn(&mut T, Value) -> PropertyResult<()>>,
}

impl<T> PropertyDef<T> {
    pub const fn accessor(
        name: &'static str,
        get: fn(&T) -> Value,
        set: fn(&mut T, Value) -> PropertyResult<()>,
    ) -> Self {
        Self {
            name,
            get: Some(get),
            set: Some(set),
        }
    }

    pub const fn read_only(name: &'static str, get: fn(&T) -> Value) -> Self {
        Self {
            name,
            get: Some(get),
            set: None,
        }
    }

    /// A setter whose value cannot be represented as a [`Value`].
    pub const fn write_only(name: &'static str, set: fn(&mut T, Value) -> PropertyResult<()>) -> Self {
        Self {
            name,
            get: None,
            set: Some(set),
        }
    }

    pub fn lookup(&self) -> Lookup {
        if self.set.is_some() {
            Lookup::Settable
        } else {
            Lookup::ReadOnly
        }
    }

    pub fn assign(&self, target: &mut T, value: Value) -> PropertyResult<()> {
        match self.set {
            Some(set) => set(target, value),
            None => Err(PropertyError::ReadOnly {
                property: self.name,
            }),
        }
    }

    pub fn read(&self, target: &T) -> Option<Value> {
        self.get.map(|get| get(target))
    }
}

/// Find the accessor named `name` in a type's own table.
pub fn find<'a, T>(table: &'a [PropertyDef<T>], name: &str) -> Option<&'a PropertyDef<T>> {
    table.iter().find(|def| def.name == name)
}

/// A value whose accessors can be resolved by name.
///
/// Implementations check their own [`PropertyDef`] table first and then
/// delegate to the type they extend.
pub trait PropertyHost {
    fn lookup(&self, name: &str) -> Lookup;

    fn assign(&mut self, name: &'static str, value: Value) -> PropertyResult<()>;

    fn read(&self, name: &str) -> Option<Value>;
}

/// Defaults of one type, merged with overrides and applied through accessors.
///
/// The factory receives the target so defaults may depend on the instance, and
/// one argument value `A` (use a tuple for several). `merge` and `apply` forward
/// the same argument value.
pub struct PropertySet<T, A = ()> {
    factory: fn(&T, &A) -> Properties,
}

impl<T, A> PropertySet<T, A> {
    pub const fn new(factory: fn(&T, &A) -> Properties) -> Self {
        Self { factory }
    }

    pub fn defaults(&self, target: &T, args: &A) -> Properties {
        (self.factory)(target, args)
    }

    /// Defaults with each key replaced by the override when the override map
    /// contains it. Keys only present in `overrides` are ignored.
    pub fn merge(&self, target: &T, overrides: &Properties, args: &A) -> Properties {
        self.defaults(target, args)
            .into_iter()
            .map(|(name, default)| match overrides.get(name) {
                Some(value) => (name, value.clone()),
                None => (name, default),
            })
            .collect()
    }
}

impl<T: PropertyHost, A> PropertySet<T, A> {
    /// Merge and write every value through `target`'s accessors.
    ///
    /// Read-only accessors are skipped. The first failing setter aborts the
    /// application and its error is returned.
    pub fn apply(&self, target: &mut T, overrides: &Properties, args: &A) -> PropertyResult<()> {
        profile_function!();

        let values = self.merge(target, overrides, args);
        for (name, value) in values {
            match target.lookup(name) {
                Lookup::ReadOnly => {
                    tracing::trace!(property = name, "skipping read-only property");
                }
                Lookup::Missing | Lookup::Settable => target.assign(name, value)?,
            }
        }
        Ok(())
    }
}

/// Apply `layers` in order, base type first, to the fully assembled `target`.
///
/// Every layer writes through `target`'s own accessors, so a base-layer default
/// reaches the most-derived setter for its name. Stops at the first error.
pub fn apply_layers<T: PropertyHost, A>(
    layers: &[PropertySet<T, A>],
    target: &mut T,
    overrides: &Properties,
    args: &A,
) -> PropertyResult<()> {
    layers
        .iter()
        .try_for_each(|layer| layer.apply(target, overrides, args))
}
