// The drawing API a sketch talks to, and its software implementation.

use crate::draw::draw_ellipse;
use crate::error::Error;
use crate::types::{FrameBuffer, Rgb, Style};

/// Surface size before any `create_canvas` call.
pub const DEFAULT_SIZE: (usize, usize) = (100, 100);

/// Immediate-mode drawing calls. Style setters affect every shape drawn after them.
pub trait Graphics {
    /// Replace the surface with a fresh one of `width`×`height` pixels.
    fn create_canvas(&mut self, width: usize, height: usize) -> Result<(), Error>;
    /// Flood-fill the whole surface.
    fn background(&mut self, color: Rgb);
    fn stroke_weight(&mut self, weight: f32);
    fn stroke(&mut self, color: Rgb);
    fn no_stroke(&mut self);
    fn fill(&mut self, color: Rgb);
    fn no_fill(&mut self);
    /// Ellipse centered at (x,y) with the current style.
    fn ellipse(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn width(&self) -> usize;
    fn height(&self) -> usize;
}

/// Software canvas: a framebuffer plus the current pen.
#[derive(Clone, Debug)]
pub struct Canvas {
    surface: FrameBuffer,
    style: Style,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    pub fn new() -> Self {
        let (w, h) = DEFAULT_SIZE;
        Self {
            surface: FrameBuffer::new(w, h),
            style: Style::default(),
        }
    }

    pub fn surface(&self) -> &FrameBuffer {
        &self.surface
    }

    pub fn style(&self) -> &Style {
        &self.style
    }
}

impl Graphics for Canvas {
    fn create_canvas(&mut self, width: usize, height: usize) -> Result<(), Error> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidCanvas { width, height });
        }
        self.surface = FrameBuffer::new(width, height);
        log::debug!("created canvas {width}x{height}");
        Ok(())
    }

    fn background(&mut self, color: Rgb) {
        self.surface.fill(color);
    }

    fn stroke_weight(&mut self, weight: f32) {
        self.style.stroke_weight = weight;
    }

    fn stroke(&mut self, color: Rgb) {
        self.style.stroke = Some(color);
    }

    fn no_stroke(&mut self) {
        self.style.stroke = None;
    }

    fn fill(&mut self, color: Rgb) {
        self.style.fill = Some(color);
    }

    fn no_fill(&mut self) {
        self.style.fill = None;
    }

    fn ellipse(&mut self, x: f64, y: f64, w: f64, h: f64) {
        log::trace!("ellipse @({x}, {y}) {w}x{h}");
        draw_ellipse(&mut self.surface, x, y, w, h, &self.style);
    }

    fn width(&self) -> usize {
        self.surface.width
    }

    fn height(&self) -> usize {
        self.surface.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_with_default_surface_and_pen() {
        let c = Canvas::new();
        assert_eq!((c.width(), c.height()), DEFAULT_SIZE);
        assert_eq!(c.style(), &Style::default());
    }

    #[test]
    fn create_canvas_resizes() {
        let mut c = Canvas::new();
        c.create_canvas(400, 300).unwrap();
        assert_eq!((c.width(), c.height()), (400, 300));
        assert_eq!(c.surface().pixels.len(), 400 * 300);
    }

    #[test]
    fn create_canvas_rejects_zero() {
        let mut c = Canvas::new();
        let err = c.create_canvas(0, 300).unwrap_err();
        assert!(matches!(err, Error::InvalidCanvas { width: 0, height: 300 }));
        // Previous surface untouched.
        assert_eq!((c.width(), c.height()), DEFAULT_SIZE);
    }

    #[test]
    fn no_fill_leaves_interior() {
        let mut c = Canvas::new();
        c.background(Rgb::new(255, 0, 0));
        c.stroke_weight(2.0);
        c.stroke(Rgb::new(210, 0, 100));
        c.no_fill();
        c.ellipse(50.0, 50.0, 40.0, 40.0);

        assert_eq!(c.surface().pixel(50, 50), Some(Rgb::new(255, 0, 0)));
        assert_eq!(c.surface().pixel(69, 50), Some(Rgb::new(210, 0, 100)));
    }

    #[test]
    fn no_stroke_draws_fill_only() {
        let mut c = Canvas::new();
        c.background(Rgb::WHITE);
        c.no_stroke();
        c.fill(Rgb::BLACK);
        c.ellipse(50.0, 50.0, 20.0, 20.0);

        assert_eq!(c.style().stroke, None);
        assert_eq!(c.surface().pixel(50, 50), Some(Rgb::BLACK));
        assert_eq!(c.surface().pixel(61, 50), Some(Rgb::WHITE));
    }
}
