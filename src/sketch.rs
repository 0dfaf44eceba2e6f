// Sketch lifecycle and the growing circle.

use crate::error::Error;
use crate::graphics::Graphics;
use crate::types::{Pointer, Rgb};

/// Something a [`Runtime`](crate::runtime::Runtime) can drive.
///
/// `initialize` runs exactly once, before the first `render_frame`. Frames are
/// rendered one at a time, never concurrently.
pub trait Sketch {
    fn initialize(&mut self, g: &mut dyn Graphics) -> Result<(), Error>;
    fn render_frame(&mut self, g: &mut dyn Graphics, pointer: Pointer) -> Result<(), Error>;
}

pub const WIDTH: usize = 400;
pub const HEIGHT: usize = 300;
pub const BACKGROUND: Rgb = Rgb::new(255, 0, 0);
pub const OUTLINE_WEIGHT: f32 = 10.0;
pub const OUTLINE: Rgb = Rgb::new(210, 0, 100);
pub const INTERIOR: Rgb = Rgb::new(0, 0, 0);

/// A circle under the pointer that grows by one pixel every frame.
/// The background is repainted each frame, so nothing trails behind it.
#[derive(Clone, Debug, PartialEq)]
pub struct GrowingCircle {
    diameter: f64,
}

impl Default for GrowingCircle {
    fn default() -> Self {
        Self::new()
    }
}

impl GrowingCircle {
    pub fn new() -> Self {
        Self { diameter: 1.0 }
    }

    /// Diameter the next frame will be drawn with.
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    fn apply_style(g: &mut dyn Graphics) {
        g.stroke_weight(OUTLINE_WEIGHT);
        g.stroke(OUTLINE);
        g.fill(INTERIOR);
    }
}

impl Sketch for GrowingCircle {
    fn initialize(&mut self, g: &mut dyn Graphics) -> Result<(), Error> {
        g.create_canvas(WIDTH, HEIGHT)?;
        g.background(BACKGROUND);
        Ok(())
    }

    fn render_frame(&mut self, g: &mut dyn Graphics, pointer: Pointer) -> Result<(), Error> {
        g.background(BACKGROUND);
        Self::apply_style(g);
        let d = self.diameter;
        g.ellipse(f64::from(pointer.x), f64::from(pointer.y), d, d);
        self.diameter += 1.0;
        Ok(())
    }
}
