// Window + software drawing utilities.
// Visual effects provided here:
// 1) A window that shows the sketch surface.
// 2) Solid ellipses with a centered outline, rasterized into the framebuffer.

use crate::error::Error;
use crate::types::{FrameBuffer, Pointer, Rgb, Style};
use minifb::{Key, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a window sized to the sketch surface.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        log::debug!("opened window \"{title}\" ({width}x{height})");
        Ok(Self { window })
    }

    /// Pace `present` to at most `fps` updates per second (0 = unpaced).
    pub fn set_target_fps(&mut self, fps: usize) {
        self.window.set_target_fps(fps);
    }

    /// Push the pixels for this frame to the screen.
    /// Visual: the window immediately displays the new frame.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we'll exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Pointer position in surface coordinates, None while it is outside the window.
    pub fn pointer(&self) -> Option<Pointer> {
        self.window
            .get_mouse_pos(MouseMode::Discard)
            .map(|(x, y)| Pointer::new(x, y))
    }
}

/* ---------- Software drawing: pixels, ellipses ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i64, y: i64, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Is (dx,dy), relative to the center, inside an ellipse with semi-axes (ra,rb)?
#[inline]
fn inside(dx: f64, dy: f64, ra: f64, rb: f64) -> bool {
    if ra <= 0.0 || rb <= 0.0 {
        return false;
    }
    let nx = dx / ra;
    let ny = dy / rb;
    nx * nx + ny * ny <= 1.0
}

/// Draw an ellipse centered at (cx,cy) of size w×h with the given style.
/// The interior is painted with `style.fill`; the outline straddles the edge,
/// half of `stroke_weight` inside and half outside.
/// A pixel is covered when its center falls inside the shape.
pub fn draw_ellipse(fb: &mut FrameBuffer, cx: f64, cy: f64, w: f64, h: f64, style: &Style) {
    let a = w.abs() / 2.0;
    let b = h.abs() / 2.0;
    let half = match style.stroke {
        Some(_) => f64::from(style.stroke_weight.max(0.0)) / 2.0,
        None => 0.0,
    };
    let (outer_a, outer_b) = (a + half, b + half);
    if outer_a <= 0.0 || outer_b <= 0.0 || fb.width == 0 || fb.height == 0 {
        return;
    }

    // Scan the bounding box, clipped to the surface.
    let x0 = ((cx - outer_a).floor() as i64).max(0);
    let x1 = ((cx + outer_a).ceil() as i64).min(fb.width as i64 - 1);
    let y0 = ((cy - outer_b).floor() as i64).max(0);
    let y1 = ((cy + outer_b).ceil() as i64).min(fb.height as i64 - 1);

    let stroke = style.stroke.map(Rgb::pack);
    let fill = style.fill.map(Rgb::pack);

    for y in y0..=y1 {
        let dy = y as f64 + 0.5 - cy;
        for x in x0..=x1 {
            let dx = x as f64 + 0.5 - cx;
            if let Some(color) = stroke {
                if inside(dx, dy, outer_a, outer_b) && !inside(dx, dy, a - half, b - half) {
                    put_pixel(fb, x, y, color);
                    continue;
                }
            }
            if let Some(color) = fill {
                if inside(dx, dy, a, b) {
                    put_pixel(fb, x, y, color);
                }
            }
        }
    }
}
