//! A widget owning an ordered list of children.
//!
//! The container keeps each child's parent link in sync with its
//! [`WidgetList`]: added children are linked to the container, removed children
//! are unlinked if they still point at it. Children share the container's
//! coordinate space.

use crate::canvas::Canvas;
use crate::error::PropertyResult;
use crate::private::{Private, PrivateFields};
use crate::property::{Lookup, Properties, PropertyHost, PropertySet, Value};
use crate::widget::{Element, Lineage, Owner, Visibility, Widget, WidgetRef, widget_defaults};
use crate::widget_list::{ListChange, ListObserver, WidgetList};
use std::any::Any;
use std::fmt;
use std::rc::{Rc, Weak};
use tessera_core::profiling::profile_function;

struct ContainerState {
    children: WidgetList,
}

const CONTAINER_PRIVATES: PrivateFields<ContainerState, Vec<WidgetRef>> =
    PrivateFields::new(|children| ContainerState {
        children: WidgetList::from_widgets(children),
    });

const CONTAINER_PROPERTIES: PropertySet<Container> = PropertySet::new(|_, _| widget_defaults());

pub struct Container {
    widget: Widget,
    state: Private<ContainerState>,
}

impl Container {
    pub fn new(props: &Properties, children: Vec<WidgetRef>) -> PropertyResult<Self> {
        let widget = Widget::unapplied();
        let mut state = CONTAINER_PRIVATES.allocate(children);

        let lineage = Rc::downgrade(widget.lineage());
        for child in state.children.iter() {
            adopt(&child, &lineage);
        }
        state.children.observe(child_observer(lineage));

        let mut container = Self { widget, state };
        CONTAINER_PROPERTIES.apply(&mut container, props, &())?;
        Ok(container)
    }

    pub fn children(&self) -> &WidgetList {
        &self.state.children
    }

    /// Mutable access to the child list. Mutations notify the container.
    pub fn children_mut(&mut self) -> &mut WidgetList {
        &mut self.state.children
    }

    pub fn add_child(&mut self, child: WidgetRef) {
        self.state.children.add(&[child]);
    }

    pub fn remove_child(&mut self, child: &WidgetRef) -> bool {
        self.state.children.remove(child)
    }

    /// Topmost child under `(x, y)`.
    pub fn child_at(&self, x: f32, y: f32) -> Option<WidgetRef> {
        self.state.children.to_vec().into_iter().rev().find(|child| {
            child
                .try_borrow()
                .is_ok_and(|element| element.hit_test(x, y))
        })
    }
}

fn adopt(child: &WidgetRef, parent: &Weak<Lineage>) {
    match child.try_borrow() {
        Ok(element) => {
            element
                .widget()
                .lineage()
                .set_parent(Some(Owner::Widget(parent.clone())));
        }
        Err(_) => tracing::warn!("cannot adopt a child that is already borrowed"),
    }
}

fn release(child: &WidgetRef, parent: &Rc<Lineage>) {
    if let Ok(element) = child.try_borrow() {
        let lineage = element.widget().lineage();
        if lineage.is_child_of(parent) {
            lineage.set_parent(None);
        }
    }
}

fn child_observer(parent: Weak<Lineage>) -> ListObserver {
    Rc::new(move |_: &WidgetList, change: &ListChange| {
        for child in change.added() {
            adopt(child, &parent);
        }
        let Some(lineage) = parent.upgrade() else {
            return;
        };
        for child in change.removed() {
            release(child, &lineage);
        }
        lineage.invalidate();
    })
}

impl PropertyHost for Container {
    fn lookup(&self, name: &str) -> Lookup {
        self.widget.lookup(name)
    }

    fn assign(&mut self, name: &'static str, value: Value) -> PropertyResult<()> {
        self.widget.assign(name, value)
    }

    fn read(&self, name: &str) -> Option<Value> {
        self.widget.read(name)
    }
}

impl Element for Container {
    fn widget(&self) -> &Widget {
        &self.widget
    }

    fn widget_mut(&mut self) -> &mut Widget {
        &mut self.widget
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        profile_function!();

        if self.widget.visibility() != Visibility::Visible {
            return;
        }
        for child in self.state.children.iter() {
            match child.try_borrow() {
                Ok(element) => element.draw(canvas),
                Err(_) => tracing::warn!("skipping child borrowed during draw"),
            }
        }
    }

    fn children(&self) -> Option<&WidgetList> {
        Some(&self.state.children)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("widget", &self.widget)
            .field("children", &self.state.children.len())
            .finish()
    }
}
