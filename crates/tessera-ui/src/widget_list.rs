//! Observable ordered collection of widgets.
//!
//! Membership is by identity: two [`WidgetRef`]s are the same member only when
//! they point at the same allocation. Every mutating call notifies each
//! observer exactly once, synchronously and in registration order, with the
//! widgets added and removed by that call.

use crate::widget::WidgetRef;
use std::fmt;
use std::rc::Rc;
use tessera_core::profiling::profile_function;

/// Callback fired after every mutation of a [`WidgetList`].
pub type ListObserver = Rc<dyn Fn(&WidgetList, &ListChange)>;

/// What one mutating call changed.
#[derive(Clone, Default)]
pub struct ListChange {
    added: Vec<WidgetRef>,
    removed: Vec<WidgetRef>,
}

impl ListChange {
    pub fn added(&self) -> &[WidgetRef] {
        &self.added
    }

    pub fn removed(&self) -> &[WidgetRef] {
        &self.removed
    }
}

impl fmt::Debug for ListChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListChange")
            .field("added", &self.added.len())
            .field("removed", &self.removed.len())
            .finish()
    }
}

#[derive(Default)]
pub struct WidgetList {
    widgets: Vec<WidgetRef>,
    observers: Vec<ListObserver>,
}

impl WidgetList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a list, keeping only the first occurrence of each widget.
    ///
    /// [`WidgetList::add`] does not deduplicate.
    pub fn from_widgets(widgets: impl IntoIterator<Item = WidgetRef>) -> Self {
        let mut list = Self::new();
        for widget in widgets {
            if !list.contains(&widget) {
                list.widgets.push(widget);
            }
        }
        list
    }

    /// Append `widgets` in order. Observers are notified once, even when
    /// `widgets` is empty.
    pub fn add(&mut self, widgets: &[WidgetRef]) {
        self.widgets.extend(widgets.iter().cloned());
        tracing::trace!(count = widgets.len(), len = self.widgets.len(), "widgets added");
        self.notify(ListChange {
            added: widgets.to_vec(),
            removed: Vec::new(),
        });
    }

    /// Remove the first occurrence of `widget`. Returns `false` and notifies
    /// nobody when it is not a member.
    pub fn remove(&mut self, widget: &WidgetRef) -> bool {
        let Some(index) = self.index_of(widget) else {
            return false;
        };
        let removed = self.widgets.remove(index);
        tracing::trace!(index, "widget removed");
        self.notify(ListChange {
            added: Vec::new(),
            removed: vec![removed],
        });
        true
    }

    /// Insert `widget` at `index` clamped to `[0, len]`. Returns the index
    /// actually used.
    pub fn insert(&mut self, index: isize, widget: WidgetRef) -> usize {
        let index = index.clamp(0, self.widgets.len() as isize) as usize;
        self.widgets.insert(index, widget.clone());
        tracing::trace!(index, "widget inserted");
        self.notify(ListChange {
            added: vec![widget],
            removed: Vec::new(),
        });
        index
    }

    pub fn index_of(&self, widget: &WidgetRef) -> Option<usize> {
        self.widgets.iter().position(|w| Rc::ptr_eq(w, widget))
    }

    pub fn contains(&self, widget: &WidgetRef) -> bool {
        self.index_of(widget).is_some()
    }

    pub fn get(&self, index: usize) -> Option<WidgetRef> {
        self.widgets.get(index).cloned()
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Register `observer`. Registering the same observer twice has no effect.
    pub fn observe(&mut self, observer: ListObserver) {
        if self.observer_index(&observer).is_none() {
            self.observers.push(observer);
        }
    }

    /// Unregister `observer`. Unknown observers are ignored.
    pub fn unobserve(&mut self, observer: &ListObserver) {
        if let Some(index) = self.observer_index(observer) {
            self.observers.remove(index);
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Iterate over the members as they were when this call was made.
    pub fn iter(&self) -> std::vec::IntoIter<WidgetRef> {
        self.widgets.clone().into_iter()
    }

    pub fn to_vec(&self) -> Vec<WidgetRef> {
        self.widgets.clone()
    }

    fn observer_index(&self, observer: &ListObserver) -> Option<usize> {
        self.observers.iter().position(|o| Rc::ptr_eq(o, observer))
    }

    fn notify(&self, change: ListChange) {
        profile_function!();

        if self.observers.is_empty() {
            return;
        }
        tracing::trace!(observers = self.observers.len(), ?change, "notifying list observers");
        for observer in self.observers.clone() {
            observer(self, &change);
        }
    }
}

impl<'a> IntoIterator for &'a WidgetList {
    type Item = WidgetRef;
    type IntoIter = std::vec::IntoIter<WidgetRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for WidgetList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetList")
            .field("len", &self.widgets.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::Properties;
    use crate::widget::{Widget, widget_ref};
    use std::cell::RefCell;

    fn widget() -> WidgetRef {
        widget_ref(Widget::new(&Properties::new()).unwrap())
    }

    type Log = Rc<RefCell<Vec<(usize, usize, usize)>>>;

    /// Observer recording `(len, added, removed)` per notification.
    fn recorder() -> (ListObserver, Log) {
        let log: Log = Rc::default();
        let sink = log.clone();
        let observer: ListObserver = Rc::new(move |list: &WidgetList, change: &ListChange| {
            sink.borrow_mut()
                .push((list.len(), change.added().len(), change.removed().len()));
        });
        (observer, log)
    }

    #[test]
    fn test_from_widgets_skips_duplicates() {
        let a = widget();
        let b = widget();
        let list = WidgetList::from_widgets([a.clone(), b.clone(), a.clone()]);
        assert_eq!(list.len(), 2);
        assert_eq!(list.index_of(&a), Some(0));
        assert_eq!(list.index_of(&b), Some(1));
    }

    #[test]
    fn test_add_allows_duplicates_and_notifies_once() {
        let a = widget();
        let mut list = WidgetList::new();
        let (observer, log) = recorder();
        list.observe(observer);

        list.add(&[a.clone(), a.clone()]);
        assert_eq!(list.len(), 2);
        assert_eq!(*log.borrow(), vec![(2, 2, 0)]);
    }

    #[test]
    fn test_empty_add_still_notifies() {
        let mut list = WidgetList::new();
        let (observer, log) = recorder();
        list.observe(observer);

        list.add(&[]);
        assert_eq!(*log.borrow(), vec![(0, 0, 0)]);
    }

    #[test]
    fn test_remove_missing_is_silent() {
        let a = widget();
        let mut list = WidgetList::from_widgets([a.clone()]);
        let (observer, log) = recorder();
        list.observe(observer);

        assert!(!list.remove(&widget()));
        assert!(log.borrow().is_empty());

        assert!(list.remove(&a));
        assert!(list.is_empty());
        assert_eq!(*log.borrow(), vec![(0, 0, 1)]);
    }

    #[test]
    fn test_insert_clamps_index() {
        let (a, b, c) = (widget(), widget(), widget());
        let mut list = WidgetList::from_widgets([a.clone()]);

        assert_eq!(list.insert(-5, b.clone()), 0);
        assert_eq!(list.insert(99, c.clone()), 2);
        assert_eq!(list.index_of(&b), Some(0));
        assert_eq!(list.index_of(&a), Some(1));
        assert_eq!(list.index_of(&c), Some(2));
    }

    #[test]
    fn test_observe_is_idempotent() {
        let mut list = WidgetList::new();
        let (observer, log) = recorder();
        list.observe(observer.clone());
        list.observe(observer.clone());
        assert_eq!(list.observer_count(), 1);

        list.add(&[widget()]);
        assert_eq!(log.borrow().len(), 1);

        list.unobserve(&observer);
        list.unobserve(&observer);
        list.add(&[widget()]);
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_observers_fire_in_registration_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut list = WidgetList::new();
        for tag in 0..3 {
            let order = order.clone();
            list.observe(Rc::new(move |_: &WidgetList, _: &ListChange| {
                order.borrow_mut().push(tag)
            }));
        }
        list.add(&[widget()]);
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_iter_is_a_snapshot() {
        let (a, b) = (widget(), widget());
        let mut list = WidgetList::from_widgets([a.clone()]);
        let iter = list.iter();
        list.add(&[b]);
        let seen: Vec<_> = iter.collect();
        assert_eq!(seen.len(), 1);
        assert!(Rc::ptr_eq(&seen[0], &a));
        assert_eq!(list.to_vec().len(), 2);
    }
}
