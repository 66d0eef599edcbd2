//! The owning context of a widget tree.
//!
//! Widgets only talk to their application through the narrow [`Application`]
//! trait: redraw requests, focus, and theme colours. [`RootContext`] is the
//! stock implementation used by hosts and tests.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::event::{ClickEvent, Dispatch, FocusEvent, PointerEvent};
use crate::theme::Theme;
use crate::widget::{Element, Owner, WidgetId, WidgetRef};
use crate::widget_list::{ListChange, ListObserver, WidgetList};
use std::cell::{Cell, Ref, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use tessera_core::math::Vec2;
use tessera_core::profiling::profile_function;

/// Environment a widget tree is attached to.
pub trait Application {
    /// Schedule a redraw. Called once per visual mutation of an attached widget.
    fn invalidate(&self);

    fn set_focused_widget(&self, widget: Option<WidgetId>);

    fn focused_widget(&self) -> Option<WidgetId>;

    /// Look up a theme colour by key.
    fn theme_color(&self, _key: &str) -> Option<Color> {
        None
    }
}

/// Application that owns a list of root widgets, a [`Theme`] and the focus
/// slot, and counts redraw requests.
pub struct RootContext {
    theme: RefCell<Theme>,
    invalidations: Cell<u64>,
    focused: Cell<Option<WidgetId>>,
    roots: RefCell<WidgetList>,
}

impl RootContext {
    pub fn new() -> Rc<Self> {
        Self::with_theme(Theme::light())
    }

    pub fn with_theme(theme: Theme) -> Rc<Self> {
        Rc::new_cyclic(|this: &Weak<RootContext>| {
            let application: Weak<dyn Application> = this.clone();
            let mut roots = WidgetList::new();
            roots.observe(root_observer(application));
            Self {
                theme: RefCell::new(theme),
                invalidations: Cell::new(0),
                focused: Cell::new(None),
                roots: RefCell::new(roots),
            }
        })
    }

    /// Number of redraw requests received so far.
    pub fn invalidation_count(&self) -> u64 {
        self.invalidations.get()
    }

    pub fn theme(&self) -> Ref<'_, Theme> {
        self.theme.borrow()
    }

    pub fn set_theme(&self, theme: Theme) {
        *self.theme.borrow_mut() = theme;
        self.invalidate();
    }

    /// Make `widget` a root of this application.
    pub fn attach(&self, widget: WidgetRef) {
        self.roots.borrow_mut().add(&[widget]);
    }

    /// Remove a root. Returns `false` when `widget` is not one.
    pub fn detach(&self, widget: &WidgetRef) -> bool {
        self.roots.borrow_mut().remove(widget)
    }

    pub fn roots(&self) -> Vec<WidgetRef> {
        self.roots.borrow().to_vec()
    }

    /// Clear `canvas` and draw every root in order. Starts a new profiler frame.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        profile_function!();
        tessera_core::profiling::new_frame();

        canvas.clear();
        for root in self.roots() {
            match root.try_borrow() {
                Ok(element) => element.draw(canvas),
                Err(_) => tracing::warn!("skipping root borrowed during draw"),
            }
        }
    }

    /// Topmost widget under `(x, y)`, searching children before parents.
    pub fn widget_at(&self, x: f32, y: f32) -> Option<WidgetRef> {
        self.roots()
            .iter()
            .rev()
            .find_map(|root| pick(root, x, y))
    }

    /// Find an attached widget by id.
    pub fn find(&self, id: WidgetId) -> Option<WidgetRef> {
        self.roots().iter().find_map(|root| find_by_id(root, id))
    }

    /// Deliver a click at `position`. Returns whether a widget received it.
    ///
    /// A focusable target is focused before its click handlers run.
    pub fn click(&self, position: Vec2) -> bool {
        let Some(target) = self.widget_at(position.x, position.y) else {
            return false;
        };
        let (id, focusable, handlers) = {
            let element = target.borrow();
            let widget = element.widget();
            (widget.id(), widget.focusable(), widget.on_click().snapshot())
        };
        if focusable {
            self.set_focused_widget(Some(id));
        }
        handlers.invoke(&ClickEvent { position });
        true
    }

    /// Deliver a pointer press to the topmost widget under the pointer.
    pub fn pointer_down(&self, event: PointerEvent) -> bool {
        self.dispatch_pointer(event, |element| element.widget().on_pointer_down().snapshot())
    }

    pub fn pointer_move(&self, event: PointerEvent) -> bool {
        self.dispatch_pointer(event, |element| element.widget().on_pointer_move().snapshot())
    }

    pub fn pointer_up(&self, event: PointerEvent) -> bool {
        self.dispatch_pointer(event, |element| element.widget().on_pointer_up().snapshot())
    }

    fn dispatch_pointer(
        &self,
        event: PointerEvent,
        handlers: impl FnOnce(&dyn Element) -> Dispatch<PointerEvent>,
    ) -> bool {
        let Some(target) = self.widget_at(event.position.x, event.position.y) else {
            return false;
        };
        let dispatch = handlers(&*target.borrow());
        dispatch.invoke(&event);
        true
    }

    fn focus_dispatch(
        &self,
        id: WidgetId,
        handlers: impl FnOnce(&dyn Element) -> Dispatch<FocusEvent>,
    ) {
        let Some(target) = self.find(id) else {
            return;
        };
        // The requesting widget may be mutably borrowed by its caller.
        let dispatch = match target.try_borrow() {
            Ok(element) => handlers(&*element),
            Err(_) => {
                tracing::warn!(widget = %id, "focus event dropped for borrowed widget");
                return;
            }
        };
        dispatch.invoke(&FocusEvent { widget: id });
    }
}

impl Application for RootContext {
    fn invalidate(&self) {
        self.invalidations.set(self.invalidations.get() + 1);
        tracing::trace!(count = self.invalidations.get(), "redraw requested");
    }

    fn set_focused_widget(&self, widget: Option<WidgetId>) {
        let previous = self.focused.replace(widget);
        if previous == widget {
            return;
        }
        tracing::debug!(?previous, ?widget, "focus changed");
        if let Some(previous) = previous {
            self.focus_dispatch(previous, |element| element.widget().on_focus_lost().snapshot());
        }
        if let Some(widget) = widget {
            self.focus_dispatch(widget, |element| element.widget().on_focus().snapshot());
        }
    }

    fn focused_widget(&self) -> Option<WidgetId> {
        self.focused.get()
    }

    fn theme_color(&self, key: &str) -> Option<Color> {
        self.theme.borrow().get(key)
    }
}

impl fmt::Debug for RootContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RootContext")
            .field("invalidations", &self.invalidations.get())
            .field("focused", &self.focused.get())
            .field("roots", &*self.roots.borrow())
            .finish()
    }
}

/// Keeps root parent links in sync with the root list.
fn root_observer(application: Weak<dyn Application>) -> ListObserver {
    Rc::new(move |_: &WidgetList, change: &ListChange| {
        for widget in change.added() {
            match widget.try_borrow() {
                Ok(element) => {
                    element
                        .widget()
                        .lineage()
                        .set_parent(Some(Owner::Application(application.clone())));
                }
                Err(_) => tracing::warn!("cannot attach a root that is already borrowed"),
            }
        }
        for widget in change.removed() {
            if let Ok(element) = widget.try_borrow() {
                let lineage = element.widget().lineage();
                if lineage.is_root_of(&application) {
                    lineage.set_parent(None);
                }
            }
        }
        if let Some(application) = application.upgrade() {
            application.invalidate();
        }
    })
}

fn pick(widget: &WidgetRef, x: f32, y: f32) -> Option<WidgetRef> {
    let element = widget.try_borrow().ok()?;
    if !element.hit_test(x, y) {
        return None;
    }
    let child = element
        .children()
        .and_then(|children| children.to_vec().iter().rev().find_map(|child| pick(child, x, y)));
    Some(child.unwrap_or_else(|| widget.clone()))
}

fn find_by_id(widget: &WidgetRef, id: WidgetId) -> Option<WidgetRef> {
    let element = widget.try_borrow().ok()?;
    if element.widget().id() == id {
        return Some(widget.clone());
    }
    element
        .children()
        .and_then(|children| children.iter().find_map(|child| find_by_id(&child, id)))
}
