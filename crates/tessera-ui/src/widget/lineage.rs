//! Non-owning links from a widget to its parent and application.
//!
//! Every widget owns an `Rc<Lineage>`. Children hold `Weak` references to their
//! parent's lineage, so walking up to the application never borrows a widget and
//! never keeps a parent alive. A missing or dead link means the widget is
//! detached, which is a normal state.

use crate::application::Application;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use tessera_core::geometry::Size;
use tessera_core::profiling::profile_function;

/// What a widget is attached to.
#[derive(Clone)]
pub enum Owner {
    Widget(Weak<Lineage>),
    Application(Weak<dyn Application>),
}

impl Owner {
    pub fn widget(parent: &Rc<Lineage>) -> Self {
        Owner::Widget(Rc::downgrade(parent))
    }

    pub fn application(application: &Rc<dyn Application>) -> Self {
        Owner::Application(Rc::downgrade(application))
    }
}

impl fmt::Debug for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Owner::Widget(parent) => f
                .debug_tuple("Widget")
                .field(&(parent.strong_count() > 0))
                .finish(),
            Owner::Application(app) => f
                .debug_tuple("Application")
                .field(&(app.strong_count() > 0))
                .finish(),
        }
    }
}

/// Parent link and effective extent of one widget.
pub struct Lineage {
    parent: RefCell<Option<Owner>>,
    extent: Cell<Size<f32>>,
}

impl Lineage {
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Self {
            parent: RefCell::new(None),
            extent: Cell::new(Size::new(0.0, 0.0)),
        })
    }

    pub fn parent(&self) -> Option<Owner> {
        self.parent.borrow().clone()
    }

    /// Replace the parent link. Returns `false` and keeps the current link when
    /// `owner` is this lineage or one of its descendants.
    pub fn set_parent(&self, owner: Option<Owner>) -> bool {
        if let Some(Owner::Widget(parent)) = &owner
            && self.is_ancestor_of(parent)
        {
            tracing::warn!("refusing parent link that would form a cycle");
            return false;
        }
        *self.parent.borrow_mut() = owner;
        true
    }

    /// Whether `node` is this lineage or reaches it through parent links.
    fn is_ancestor_of(&self, node: &Weak<Lineage>) -> bool {
        let mut current = node.upgrade();
        while let Some(lineage) = current {
            if std::ptr::eq(Rc::as_ptr(&lineage), self) {
                return true;
            }
            current = match lineage.parent() {
                Some(Owner::Widget(parent)) => parent.upgrade(),
                _ => None,
            };
        }
        false
    }

    /// Whether this lineage's parent link points at `parent`.
    pub fn is_child_of(&self, parent: &Rc<Lineage>) -> bool {
        match &*self.parent.borrow() {
            Some(Owner::Widget(link)) => std::ptr::eq(link.as_ptr(), Rc::as_ptr(parent)),
            _ => false,
        }
    }

    /// Whether this lineage is a root of `application`.
    pub fn is_root_of(&self, application: &Weak<dyn Application>) -> bool {
        match &*self.parent.borrow() {
            Some(Owner::Application(link)) => Weak::ptr_eq(link, application),
            _ => false,
        }
    }

    /// The application reached by following parent links, if any. Parent
    /// chains are acyclic because [`Lineage::set_parent`] rejects cycles.
    pub fn application(&self) -> Option<Rc<dyn Application>> {
        let mut current = self.parent();
        while let Some(owner) = current {
            match owner {
                Owner::Application(app) => return app.upgrade(),
                Owner::Widget(parent) => current = parent.upgrade()?.parent(),
            }
        }
        None
    }

    /// Effective size of the parent widget, or zero when there is none.
    pub fn parent_extent(&self) -> Size<f32> {
        match &*self.parent.borrow() {
            Some(Owner::Widget(parent)) => parent
                .upgrade()
                .map_or(Size::new(0.0, 0.0), |parent| parent.extent()),
            _ => Size::new(0.0, 0.0),
        }
    }

    /// Effective size of this widget as seen by its children.
    pub fn extent(&self) -> Size<f32> {
        self.extent.get()
    }

    pub(crate) fn set_extent(&self, extent: Size<f32>) {
        self.extent.set(extent);
    }

    /// Forward one invalidation to the application, if attached.
    pub fn invalidate(&self) {
        profile_function!();

        match self.application() {
            Some(app) => app.invalidate(),
            None => tracing::trace!("invalidate on detached widget ignored"),
        }
    }
}

impl fmt::Debug for Lineage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lineage")
            .field("parent", &*self.parent.borrow())
            .field("extent", &self.extent.get())
            .finish()
    }
}
