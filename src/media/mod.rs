// SPDX-License-Identifier: MPL-2.0
//! Image decoding and format detection.

pub mod image;
pub mod orientation;

use std::path::Path;

pub use extensions::IMAGE_EXTENSIONS;
pub use image::{load_image, ImageData};
pub use orientation::Orientation;

/// Supported media extensions
pub mod extensions {
    /// Image file extensions, lowercase.
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "bmp", "tiff", "tif", "webp", "ico",
    ];
}

/// Whether `path` carries a supported image extension (case-insensitive).
pub fn is_supported_image<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_lowercase)
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}
