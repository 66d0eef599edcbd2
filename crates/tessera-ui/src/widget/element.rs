//! The overridable surface shared by every widget type.

use super::Widget;
use crate::canvas::Canvas;
use crate::length::Length;
use crate::widget_list::WidgetList;
use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to a widget in a tree. Identity is the `Rc` allocation.
pub type WidgetRef = Rc<RefCell<dyn Element>>;

/// Wrap an element into a [`WidgetRef`].
pub fn widget_ref<E: Element>(element: E) -> WidgetRef {
    Rc::new(RefCell::new(element))
}

/// Base trait for all widget types.
///
/// Concrete widgets embed the type they extend and expose the base [`Widget`]
/// through [`Element::widget`]. The remaining methods are extension points with
/// base behaviour.
pub trait Element: Any {
    fn widget(&self) -> &Widget;

    fn widget_mut(&mut self) -> &mut Widget;

    /// Issue primitive draw calls. The base widget draws nothing.
    fn draw(&self, _canvas: &mut dyn Canvas) {}

    fn hit_test(&self, x: f32, y: f32) -> bool {
        self.widget().hit_test(x, y)
    }

    /// Natural content width reported to an external layout pass.
    fn intrinsic_width(&self) -> Length {
        self.widget().intrinsic_width()
    }

    /// Natural content height reported to an external layout pass.
    fn intrinsic_height(&self) -> Length {
        self.widget().intrinsic_height()
    }

    /// Child widgets, for container types.
    fn children(&self) -> Option<&WidgetList> {
        None
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl Element for Widget {
    fn widget(&self) -> &Widget {
        self
    }

    fn widget_mut(&mut self) -> &mut Widget {
        self
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
