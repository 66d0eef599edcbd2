//! Drawing surface contract consumed by widgets.
//!
//! Widgets only issue primitive calls through [`Canvas`]; the backend that turns
//! them into pixels lives outside this crate.

use crate::shape::Shape;
use crate::style::Style;
use bitflags::bitflags;
use tessera_core::geometry::{Rect, Size};
use tessera_core::math::Vec2;

bitflags! {
    /// Capabilities of a drawing surface.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CanvasFlags: u8 {
        /// The surface follows its host's size.
        const RESIZABLE = 0b01;
        /// The surface honours a device scale factor.
        const SCALABLE  = 0b10;
    }
}

/// Source image for [`Canvas::draw_image`].
pub trait ImageSource {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
}

/// Where to place an image. `size: None` draws at the source size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageDest {
    pub position: Vec2,
    pub size: Option<Size<f32>>,
}

/// Sub-rectangle of the source image. `size: None` extends to the image edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageRegion {
    pub origin: Vec2,
    pub size: Option<Size<f32>>,
}

/// Canvas for drawing shapes, text and images.
pub trait Canvas {
    fn width(&self) -> f32;

    fn height(&self) -> f32;

    fn scale_factor(&self) -> f32;

    fn flags(&self) -> CanvasFlags;

    fn resizable(&self) -> bool {
        self.flags().contains(CanvasFlags::RESIZABLE)
    }

    fn scalable(&self) -> bool {
        self.flags().contains(CanvasFlags::SCALABLE)
    }

    /// Draw a rectangle.
    fn draw_rect(&mut self, rect: Rect<f32>, styles: &[Style]);

    /// Draw `shape` fitted into `rect`.
    fn draw_shape(&mut self, rect: Rect<f32>, shape: &Shape, styles: &[Style]);

    /// Draw an image, optionally scaled and cropped.
    fn draw_image(&mut self, image: &dyn ImageSource, dest: ImageDest, region: Option<ImageRegion>);

    /// Draw text with its top-left corner at `position`.
    fn draw_text(&mut self, text: &str, position: Vec2, styles: &[Style]);

    /// Clear the entire canvas.
    fn clear(&mut self);
}
