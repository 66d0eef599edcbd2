//! Tessera UI - the structural core of a retained-mode widget toolkit.
//!
//! This crate provides:
//! - A base widget entity with geometry, visibility, focus and hit testing
//! - Declarative default properties merged with caller overrides
//! - Encapsulated per-instance private state
//! - Invalidation that reaches the owning application only while attached
//! - An observable, identity-keyed widget list
//!
//! Drawing, theming and the application loop are consumed through the
//! [`Canvas`] and [`Application`] traits.
//!
//! ## Quick Start
//!
//! ```
//! use tessera_ui::property::Properties;
//! use tessera_ui::widgets::{Button, Container};
//! use tessera_ui::{RecordingCanvas, RootContext, widget_ref};
//!
//! let app = RootContext::new();
//! let button = widget_ref(
//!     Button::new(
//!         &Properties::new()
//!             .with("width", 120.0)
//!             .with("height", 32.0),
//!     )
//!     .unwrap(),
//! );
//! let root = Container::new(
//!     &Properties::new().with("width", 800.0).with("height", 600.0),
//!     vec![button.clone()],
//! )
//! .unwrap();
//! app.attach(widget_ref(root));
//!
//! let mut canvas = RecordingCanvas::new(800.0, 600.0);
//! app.draw(&mut canvas);
//! assert!(!canvas.is_empty());
//! ```

pub mod application;
pub mod canvas;
pub mod color;
pub mod draw_list;
pub mod error;
pub mod event;
pub mod length;
pub mod private;
pub mod property;
pub mod shape;
pub mod style;
pub mod theme;
pub mod widget;
mod widget_id;
pub mod widget_list;
pub mod widgets;

pub use application::{Application, RootContext};
pub use canvas::{Canvas, CanvasFlags, ImageDest, ImageRegion, ImageSource};
pub use color::Color;
pub use draw_list::{DrawCommand, RecordingCanvas};
pub use error::{DrawingError, DrawingResult, PropertyError, PropertyResult};
pub use event::{ClickEvent, FocusEvent, HandlerList, PointerButton, PointerEvent};
pub use length::{Length, LengthParseError, percent, px};
pub use private::{Private, PrivateFields};
pub use property::{Properties, PropertyHost, PropertySet, Value, apply_layers};
pub use shape::{CornerRadius, Shape};
pub use style::{Paint, ShadowStyle, Style, ThemeColor};
pub use theme::{ColorRole, Theme};
pub use widget::{
    Element, Visibility, WIDGET_PROPERTIES, Widget, WidgetId, WidgetRef, widget_defaults, widget_ref,
};
pub use widget_list::{ListChange, ListObserver, WidgetList};
