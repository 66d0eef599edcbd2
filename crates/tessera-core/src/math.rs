//! Math types re-exported from [`glam`].
//!
//! Pointer positions and other 2D quantities use [`Vec2`].
//!
//! ```
//! use tessera_core::math::Vec2;
//!
//! let pointer = Vec2::new(10.0, 20.0);
//! assert_eq!(pointer + Vec2::ONE, Vec2::new(11.0, 21.0));
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::{Vec2, Vec3, Vec4, vec2};
