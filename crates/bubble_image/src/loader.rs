//! Image decoding

use image::{DynamicImage, GenericImageView};

use crate::error::{ImageError, Result};
use crate::source::ImageSource;

/// Decoded RGBA image
#[derive(Debug, Clone)]
pub struct ImageData {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl ImageData {
    /// Wrap raw RGBA pixels, checking the buffer length
    pub fn from_rgba(pixels: Vec<u8>, width: u32, height: u32) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(ImageError::InvalidPixels {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Load and decode synchronously
    pub fn load(source: &ImageSource) -> Result<Self> {
        match source {
            ImageSource::File(path) => {
                let data = std::fs::read(path).map_err(|source| ImageError::FileLoad {
                    path: path.display().to_string(),
                    source,
                })?;
                Self::from_bytes(&data)
            }
            ImageSource::Bytes(data) => Self::from_bytes(data),
        }
    }

    /// Decode from encoded bytes (PNG, JPEG, GIF)
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(data)?;
        Ok(Self::from_dynamic_image(img))
    }

    fn from_dynamic_image(img: DynamicImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            pixels: img.to_rgba8().into_raw(),
            width,
            height,
        }
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
