//! Per-instance private state records.
//!
//! A [`PrivateFields`] describes how to build the hidden record of a type. Each
//! constructor calls [`PrivateFields::allocate`] exactly once and keeps the
//! resulting [`Private`] in a private field, so the record is owned by exactly one
//! instance and is dropped with it.
//!
//! ```
//! use tessera_ui::private::PrivateFields;
//!
//! struct Counter {
//!     hits: u32,
//! }
//!
//! const COUNTER_PRIVATES: PrivateFields<Counter, u32> =
//!     PrivateFields::new(|start| Counter { hits: start });
//!
//! let mut a = COUNTER_PRIVATES.allocate(1);
//! let b = COUNTER_PRIVATES.allocate(1);
//! a.hits += 1;
//! assert_eq!(a.hits, 2);
//! assert_eq!(b.hits, 1);
//! ```

use std::fmt;
use std::ops::{Deref, DerefMut};

/// Factory for the private record of a type, optionally seeded with arguments.
pub struct PrivateFields<T, A = ()> {
    factory: fn(A) -> T,
}

impl<T, A> PrivateFields<T, A> {
    pub const fn new(factory: fn(A) -> T) -> Self {
        Self { factory }
    }

    /// Build a fresh record by calling the factory with `args`.
    pub fn allocate(&self, args: A) -> Private<T> {
        tracing::trace!(record = std::any::type_name::<T>(), "allocating private record");
        Private((self.factory)(args))
    }
}

/// A private record owned by a single instance.
///
/// Not `Clone`: a record is never shared between instances. `Debug` never
/// prints the contents.
pub struct Private<T>(T);

impl<T> Deref for Private<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Private<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T> fmt::Debug for Private<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Private(..)")
    }
}
