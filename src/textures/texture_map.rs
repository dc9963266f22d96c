use std::path::Path;

use crate::math::{Vec2, Vec3};

/// A decoded RGB texture sampled over parametric `[0,1]x[0,1]` coordinates.
pub struct TextureMap {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Decode(image::error::ImageError),
    Format(String),
}

impl TextureMap {
    /// Creates a new `TextureMap` over a raw row-major RGB byte array.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, LoadError> {
        if data.len() != width * height * 3 {
            return Err(LoadError::Format(format!(
                "Expected {}x{}x3 bytes, got {}",
                width,
                height,
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Decodes the image at `path` into a new `TextureMap`.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let img = image::io::Reader::open(path)
            .map_err(LoadError::Io)?
            .decode()
            .map_err(LoadError::Decode)?
            .to_rgb8();

        Ok(Self {
            width: img.width() as usize,
            height: img.height() as usize,
            data: img.into_raw(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Samples the map at `uv` with bilinear interpolation. Coordinates that
    /// land exactly on a pixel row or column degenerate to fewer taps.
    pub fn sample(&self, uv: Vec2<f32>) -> Vec3<f32> {
        if self.data.is_empty() {
            return Vec3::from(1.0);
        }

        let x = uv.x * ((self.width - 1) as f32);
        let y = uv.y * ((self.height - 1) as f32);

        let x_f = x.floor();
        let y_f = y.floor();
        let x_c = x.ceil();
        let y_c = y.ceil();

        if x_f == x && y_f == y {
            self.pixel_at(x as usize, y as usize)
        } else if x_f == x {
            let lower = self.pixel_at(x as usize, y_f as usize);
            let upper = self.pixel_at(x as usize, y_c as usize);
            lower * (y_c - y) + upper * (y - y_f)
        } else if y_f == y {
            let lower = self.pixel_at(x_f as usize, y as usize);
            let upper = self.pixel_at(x_c as usize, y as usize);
            lower * (x_c - x) + upper * (x - x_f)
        } else {
            let c11 = self.pixel_at(x_f as usize, y_f as usize);
            let c12 = self.pixel_at(x_f as usize, y_c as usize);
            let c21 = self.pixel_at(x_c as usize, y_f as usize);
            let c22 = self.pixel_at(x_c as usize, y_c as usize);

            let cy1 = c11 * (y_c - y) + c12 * (y - y_f);
            let cy2 = c21 * (y_c - y) + c22 * (y - y_f);

            cy1 * (x_c - x) + cy2 * (x - x_f)
        }
    }

    fn pixel_at(&self, x: usize, y: usize) -> Vec3<f32> {
        let x = x.min(self.width - 1);
        let y = y.min(self.height - 1);

        let pixel = &self.data[(x + y * self.width) * 3..];
        Vec3::new(
            (pixel[0] as f32) / 255.0,
            (pixel[1] as f32) / 255.0,
            (pixel[2] as f32) / 255.0,
        )
    }
}
