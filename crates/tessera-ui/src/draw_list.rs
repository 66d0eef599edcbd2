//! Retained list of draw commands.
//!
//! [`RecordingCanvas`] implements [`Canvas`] by recording every primitive call as
//! a [`DrawCommand`]. It backs headless rendering and tests.

use crate::canvas::{Canvas, CanvasFlags, ImageDest, ImageRegion, ImageSource};
use crate::shape::Shape;
use crate::style::Style;
use tessera_core::geometry::{Rect, Size};
use tessera_core::math::Vec2;

/// A recorded drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Rect {
        rect: Rect<f32>,
        styles: Vec<Style>,
    },
    Shape {
        rect: Rect<f32>,
        shape: Shape,
        styles: Vec<Style>,
    },
    Image {
        source_size: Size<f32>,
        dest: ImageDest,
        region: Option<ImageRegion>,
    },
    Text {
        text: String,
        position: Vec2,
        styles: Vec<Style>,
    },
}

/// A [`Canvas`] that records commands instead of rasterising them.
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    size: Size<f32>,
    scale_factor: f32,
    flags: CanvasFlags,
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            scale_factor: 1.0,
            flags: CanvasFlags::RESIZABLE | CanvasFlags::SCALABLE,
            commands: Vec::new(),
        }
    }

    pub fn with_scale_factor(mut self, scale_factor: f32) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    pub fn with_flags(mut self, flags: CanvasFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Commands recorded since the last [`Canvas::clear`] (including the clear itself).
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Canvas for RecordingCanvas {
    fn width(&self) -> f32 {
        self.size.width
    }

    fn height(&self) -> f32 {
        self.size.height
    }

    fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    fn flags(&self) -> CanvasFlags {
        self.flags
    }

    fn draw_rect(&mut self, rect: Rect<f32>, styles: &[Style]) {
        self.commands.push(DrawCommand::Rect {
            rect,
            styles: styles.to_vec(),
        });
    }

    fn draw_shape(&mut self, rect: Rect<f32>, shape: &Shape, styles: &[Style]) {
        self.commands.push(DrawCommand::Shape {
            rect,
            shape: *shape,
            styles: styles.to_vec(),
        });
    }

    fn draw_image(&mut self, image: &dyn ImageSource, dest: ImageDest, region: Option<ImageRegion>) {
        self.commands.push(DrawCommand::Image {
            source_size: Size::new(image.width(), image.height()),
            dest,
            region,
        });
    }

    fn draw_text(&mut self, text: &str, position: Vec2, styles: &[Style]) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            styles: styles.to_vec(),
        });
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    struct Bitmap;

    impl ImageSource for Bitmap {
        fn width(&self) -> f32 {
            32.0
        }

        fn height(&self) -> f32 {
            16.0
        }
    }

    #[test]
    fn test_records_in_call_order() {
        let mut canvas = RecordingCanvas::new(100.0, 50.0);
        canvas.draw_rect(Rect::new(0.0, 0.0, 10.0, 10.0), &[Style::Fill(Color::RED)]);
        canvas.draw_text("hi", Vec2::new(1.0, 2.0), &[]);

        assert_eq!(canvas.len(), 2);
        assert!(matches!(canvas.commands()[0], DrawCommand::Rect { .. }));
        assert!(matches!(canvas.commands()[1], DrawCommand::Text { ref text, .. } if text == "hi"));
    }

    #[test]
    fn test_clear_resets_commands() {
        let mut canvas = RecordingCanvas::new(100.0, 50.0);
        canvas.draw_rect(Rect::new(0.0, 0.0, 10.0, 10.0), &[]);
        canvas.clear();
        assert_eq!(canvas.commands(), &[DrawCommand::Clear]);
    }

    #[test]
    fn test_image_records_source_size() {
        let mut canvas = RecordingCanvas::new(100.0, 50.0);
        let dest = ImageDest {
            position: Vec2::ZERO,
            size: None,
        };
        canvas.draw_image(&Bitmap, dest, None);
        assert_eq!(
            canvas.commands()[0],
            DrawCommand::Image {
                source_size: Size::new(32.0, 16.0),
                dest,
                region: None,
            }
        );
    }

    #[test]
    fn test_surface_attributes() {
        let canvas = RecordingCanvas::new(640.0, 480.0)
            .with_scale_factor(2.0)
            .with_flags(CanvasFlags::SCALABLE);
        assert_eq!(canvas.width(), 640.0);
        assert_eq!(canvas.height(), 480.0);
        assert_eq!(canvas.scale_factor(), 2.0);
        assert!(canvas.scalable());
        assert!(!canvas.resizable());
    }
}
