//! Concrete widgets built on [`Widget`](crate::widget::Widget).
//!
//! Each type embeds the type it extends, contributes its own property table and
//! defaults, and delegates every other property name to the embedded base.
//!
//! - [`Surface`] paints a background shape with an optional shadow.
//! - [`Button`] is a focusable surface coloured from the theme's `primary` key.
//! - [`AppBar`] is a surface coloured from `appBarBackground`.
//! - [`Container`] owns child widgets and keeps their parent links in sync.

mod app_bar;
mod button;
mod container;
mod surface;

pub use app_bar::{APP_BAR_PROPERTIES, AppBar};
pub use button::{BUTTON_PROPERTIES, Button};
pub use container::Container;
pub use surface::{SURFACE_PROPERTIES, Surface, surface_defaults};
