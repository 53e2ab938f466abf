// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding for the raster formats enabled on `image_rs`.

use super::orientation::{self, Orientation};
use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use std::fs;
use std::path::Path;

/// A decoded, display-ready bitmap.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }

    /// Whether either dimension is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Load an image from the given path, upright according to its EXIF orientation.
///
/// # Errors
///
/// - The file cannot be read ([`Error::Io`])
/// - The bytes are not a supported image ([`Error::Decode`])
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let img_bytes = fs::read(path.as_ref())?;
    decode_image(&img_bytes)
}

/// Decodes encoded image bytes, applying the EXIF orientation.
pub fn decode_image(bytes: &[u8]) -> Result<ImageData> {
    let img = image_rs::load_from_memory(bytes).map_err(Error::from)?;

    let orientation = orientation::read_orientation(bytes);
    let img = if orientation == Orientation::Normal {
        img
    } else {
        orientation.apply(img)
    };

    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();

    Ok(ImageData::from_rgba(width, height, pixels))
}
