// Core value types shared by the canvas, the sketch and the runtime.

use std::path::Path;

use image::{ImageBuffer, Rgb as ImageRgb, RgbImage};

use crate::error::Error;

/// Opaque color, one byte per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack as 0x00RRGGBB, the layout minifb expects.
    #[inline]
    pub const fn pack(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    #[inline]
    pub const fn unpack(px: u32) -> Self {
        Self {
            r: ((px >> 16) & 0xFF) as u8,
            g: ((px >> 8) & 0xFF) as u8,
            b: (px & 0xFF) as u8,
        }
    }
}

/// Pointer position in surface pixel coordinates.
/// Reads (0,0) until the pointer has moved over the surface at least once.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
}

impl Pointer {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The pen applied to subsequently drawn shapes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub stroke: Option<Rgb>, // None = no outline
    pub stroke_weight: f32,  // outline width in pixels, centered on the shape edge
    pub fill: Option<Rgb>,   // None = hollow
}

impl Default for Style {
    // Fresh pen: 1px black outline, white interior.
    fn default() -> Self {
        Self {
            stroke: Some(Rgb::BLACK),
            stroke_weight: 1.0,
            fill: Some(Rgb::WHITE),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FrameBuffer {
    pub width: usize,     // surface width (pixels)
    pub height: usize,    // surface height (pixels)
    pub pixels: Vec<u32>, // each entry is 0x00RRGGBB for minifb, row-major
}

impl FrameBuffer {
    /// A black surface of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0u32; width * height],
        }
    }

    /// Color at (x,y), or None outside the surface.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(Rgb::unpack(self.pixels[y * self.width + x]))
    }

    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color.pack());
    }

    /// Convert to an RGB image for encoding.
    /// Fails when a dimension does not fit the image's u32 size.
    pub fn to_rgb_image(&self) -> Result<RgbImage, Error> {
        let too_large = || Error::SurfaceTooLarge {
            width: self.width,
            height: self.height,
        };
        let w = u32::try_from(self.width).map_err(|_| too_large())?;
        let h = u32::try_from(self.height).map_err(|_| too_large())?;
        Ok(ImageBuffer::from_fn(w, h, |x, y| {
            let c = Rgb::unpack(self.pixels[y as usize * self.width + x as usize]);
            ImageRgb([c.r, c.g, c.b])
        }))
    }

    /// Write the surface as a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        self.to_rgb_image()?
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|source| Error::Snapshot {
                path: path.to_path_buf(),
                source,
            })?;
        log::info!("saved snapshot to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pack_layout_matches_minifb() {
        assert_eq!(Rgb::new(255, 0, 0).pack(), 0x00FF_0000);
        assert_eq!(Rgb::new(210, 0, 100).pack(), 0x00D2_0064);
        assert_eq!(Rgb::unpack(0x00D2_0064), Rgb::new(210, 0, 100));
    }

    #[test]
    fn pixel_outside_is_none() {
        let fb = FrameBuffer::new(4, 3);
        assert_eq!(fb.pixel(3, 2), Some(Rgb::BLACK));
        assert_eq!(fb.pixel(4, 0), None);
        assert_eq!(fb.pixel(0, 3), None);
    }

    #[test]
    fn rgb_image_keeps_pixels() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.fill(Rgb::new(255, 0, 0));
        fb.pixels[3] = Rgb::new(1, 2, 3).pack();
        let img = fb.to_rgb_image().unwrap();
        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0]);
        assert_eq!(img.get_pixel(1, 1).0, [1, 2, 3]);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn oversized_surface_is_rejected() {
        // Zero rows keep the pixel vector empty while the width overflows u32.
        let fb = FrameBuffer::new(u32::MAX as usize + 1, 0);
        let err = fb.to_rgb_image().unwrap_err();
        assert!(matches!(err, Error::SurfaceTooLarge { height: 0, .. }));

        let path = std::env::temp_dir().join("growing-circle-oversized.png");
        assert!(matches!(fb.save_png(&path), Err(Error::SurfaceTooLarge { .. })));
        assert!(!path.exists());
    }

    #[test]
    fn default_pen() {
        let s = Style::default();
        assert_eq!(s.stroke, Some(Rgb::BLACK));
        assert_eq!(s.stroke_weight, 1.0);
        assert_eq!(s.fill, Some(Rgb::WHITE));
    }
}
