use serde::{Deserialize, Serialize};

use crate::math::Vec3;

/// The settings for a `Film`.
#[derive(Debug, Copy, Clone, Deserialize, Serialize)]
pub struct FilmSettings {
    pub width: usize,
    pub height: usize,
}

impl Default for FilmSettings {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
        }
    }
}

impl FilmSettings {
    pub fn aspect_ratio(&self) -> f32 {
        (self.width as f32) / (self.height as f32)
    }
}

/// Flat row-major RGB byte buffer the render workers write into. Workers
/// only ever touch their own pixel's bytes.
pub struct Film {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
    ready: bool,
}

impl Film {
    /// Creates a new zeroed `Film`.
    pub fn new(settings: FilmSettings) -> Self {
        Self {
            width: settings.width,
            height: settings.height,
            pixels: vec![0; settings.width * settings.height * 3],
            ready: false,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns a reference to the raw pixel bytes of this `Film`.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Returns `true` if a full render pass has completed since the last
    /// resize.
    pub fn ready(&self) -> bool {
        self.ready
    }

    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    /// Resizes this `Film` according to `settings`, clearing the pixels.
    pub fn resize(&mut self, settings: FilmSettings) {
        self.width = settings.width;
        self.height = settings.height;
        self.pixels = vec![0; settings.width * settings.height * 3];
        self.ready = false;
    }

    /// Quantizes `color`, with channels expected in `[0, 1]`, into the
    /// pixel at (x, y).
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Vec3<f32>) {
        let i = (x + y * self.width) * 3;
        self.pixels[i] = (255.0 * color.x) as u8;
        self.pixels[i + 1] = (255.0 * color.y) as u8;
        self.pixels[i + 2] = (255.0 * color.z) as u8;
    }

    /// Returns the stored color of the pixel at (x, y).
    pub fn pixel(&self, x: usize, y: usize) -> Vec3<f32> {
        let i = (x + y * self.width) * 3;
        Vec3::new(
            (self.pixels[i] as f32) / 255.0,
            (self.pixels[i + 1] as f32) / 255.0,
            (self.pixels[i + 2] as f32) / 255.0,
        )
    }
}
