//! Event handler lists and event payloads.
//!
//! Every widget owns one [`HandlerList`] per event kind. The lists are created
//! with the widget and cannot be replaced; callers subscribe with
//! [`HandlerList::add`] and the environment raises events with
//! [`HandlerList::invoke`].

use crate::widget::WidgetId;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tessera_core::math::Vec2;

/// Pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
}

/// Pointer press, move or release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub position: Vec2,
    pub button: Option<PointerButton>,
}

/// Widget was clicked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickEvent {
    pub position: Vec2,
}

/// Focus gained or lost by `widget`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusEvent {
    pub widget: WidgetId,
}

type Handler<E> = Rc<dyn Fn(&E)>;

/// Ordered, append-only list of event handlers.
pub struct HandlerList<E> {
    handlers: RefCell<Vec<Handler<E>>>,
}

impl<E> HandlerList<E> {
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }

    /// Subscribe a handler. Handlers run in subscription order.
    pub fn add(&self, handler: impl Fn(&E) + 'static) {
        self.handlers.borrow_mut().push(Rc::new(handler));
    }

    /// Call every subscribed handler with `event`.
    ///
    /// Handlers added while dispatching are not called for this event.
    pub fn invoke(&self, event: &E) {
        self.snapshot().invoke(event);
    }

    /// Capture the current handlers so they can be invoked after the owning
    /// widget is no longer borrowed.
    pub fn snapshot(&self) -> Dispatch<E> {
        Dispatch {
            handlers: self.handlers.borrow().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.borrow().is_empty()
    }
}

impl<E> Default for HandlerList<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for HandlerList<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerList")
            .field("handlers", &self.len())
            .finish()
    }
}

/// Handlers captured by [`HandlerList::snapshot`].
pub struct Dispatch<E> {
    handlers: Vec<Handler<E>>,
}

impl<E> Dispatch<E> {
    pub fn invoke(&self, event: &E) {
        tracing::trace!(handlers = self.handlers.len(), "dispatching event");
        for handler in &self.handlers {
            handler(event);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// The fixed set of handler lists every widget owns.
#[derive(Debug, Default)]
pub(crate) struct WidgetEvents {
    pub on_click: HandlerList<ClickEvent>,
    pub on_pointer_down: HandlerList<PointerEvent>,
    pub on_pointer_move: HandlerList<PointerEvent>,
    pub on_pointer_up: HandlerList<PointerEvent>,
    pub on_focus: HandlerList<FocusEvent>,
    pub on_focus_lost: HandlerList<FocusEvent>,
}
