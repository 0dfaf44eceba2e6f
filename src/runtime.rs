// Loop controller: owns the canvas and calls into a sketch.

use std::time::{Duration, Instant};

use crate::draw::Drawer;
use crate::error::Error;
use crate::graphics::Canvas;
use crate::sketch::Sketch;
use crate::types::Pointer;

pub struct Runtime<S> {
    sketch: S,
    canvas: Canvas,
    frames: u64,
}

impl<S: Sketch> Runtime<S> {
    /// Run the sketch's one-time setup against a fresh canvas.
    pub fn new(mut sketch: S) -> Result<Self, Error> {
        let mut canvas = Canvas::new();
        sketch.initialize(&mut canvas)?;
        log::info!(
            "sketch initialized on {}x{} canvas",
            canvas.surface().width,
            canvas.surface().height
        );
        Ok(Self { sketch, canvas, frames: 0 })
    }

    /// Render one frame with the given pointer position.
    pub fn step(&mut self, pointer: Pointer) -> Result<(), Error> {
        log::trace!("frame {} pointer ({}, {})", self.frames, pointer.x, pointer.y);
        self.sketch.render_frame(&mut self.canvas, pointer)?;
        self.frames += 1;
        Ok(())
    }

    /// Render one frame per pointer position, in order.
    pub fn headless<I>(&mut self, pointers: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = Pointer>,
    {
        for pointer in pointers {
            self.step(pointer)?;
        }
        log::debug!("headless run finished after {} frames", self.frames);
        Ok(())
    }

    /// Open a window and render until it is closed or ESC is pressed.
    /// The pointer keeps its last in-window position while it is outside.
    pub fn windowed(&mut self, title: &str, target_fps: usize) -> Result<(), Error> {
        let surface = self.canvas.surface();
        let mut drawer = Drawer::new(title, surface.width, surface.height)?;
        drawer.set_target_fps(target_fps);
        drawer.present(self.canvas.surface())?;

        let mut pointer = Pointer::default();
        let mut fps = FpsMeter::new(Instant::now());

        while drawer.is_open() && !drawer.esc_pressed() {
            pointer = next_pointer(pointer, drawer.pointer());
            self.step(pointer)?;
            drawer.present(self.canvas.surface())?;

            if let Some(rate) = fps.tick(Instant::now()) {
                log::info!("FPS: {rate:.1}");
            }
        }
        log::info!("window closed after {} frames", self.frames);
        Ok(())
    }

    /// Frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn sketch(&self) -> &S {
        &self.sketch
    }
}

/// Pointer for the next frame: the freshly observed position, or the last one
/// while the pointer is outside the window.
fn next_pointer(last: Pointer, seen: Option<Pointer>) -> Pointer {
    seen.unwrap_or(last)
}

/// Counts frames and reports the rate once at least a second has passed.
struct FpsMeter {
    since: Instant,
    frames: u32,
}

impl FpsMeter {
    fn new(now: Instant) -> Self {
        Self { since: now, frames: 0 }
    }

    /// Record one presented frame.
    fn tick(&mut self, now: Instant) -> Option<f32> {
        self.frames += 1;
        let elapsed = now.duration_since(self.since);
        if elapsed < Duration::from_secs(1) {
            return None;
        }
        let rate = self.frames as f32 / elapsed.as_secs_f32();
        self.frames = 0;
        self.since = now;
        Some(rate)
    }
}
