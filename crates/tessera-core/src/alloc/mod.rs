//! Optimized collection types for Tessera.
//!
//! Re-exports of hash collections using AHash.

// Re-export optimized hash collections
pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};
