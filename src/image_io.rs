//! Image loading and tagged saving
//!
//! Thin adapter between raster files on disk and the in-memory pixel grids
//! the decomposition code operates on. Loading rejects sources without
//! three color channels; saving appends an optional channel tag to the
//! base file name (`basename_R.png`, `basename_O.png`, ...).

use crate::constants::channel::NUM_CHANNELS;
use crate::error::{ChannelError, Result};
use image::{DynamicImage, GrayImage, ImageReader, RgbImage};
use std::path::{Path, PathBuf};

/// Load a color image as an 8-bit RGB pixel grid
///
/// Any alpha channel is discarded. Sources that carry no color information
/// (grayscale formats) are rejected rather than silently expanded, since
/// channel decomposition of a gray image is meaningless.
///
/// # Errors
///
/// Returns `ChannelError::ImageLoad` if the file cannot be opened or
/// decoded, and `ChannelError::InvalidShape` for non-3-channel sources.
pub fn load_rgb(path: &Path) -> Result<RgbImage> {
    let reader = ImageReader::open(path).map_err(|e| {
        ChannelError::image_load(format!("Failed to open image file: {}", path.display()), e)
    })?;

    let img: DynamicImage = reader.decode().map_err(|e| {
        ChannelError::image_load(format!("Failed to decode image: {}", path.display()), e)
    })?;

    let channels = img.color().channel_count();
    if channels < NUM_CHANNELS {
        return Err(ChannelError::InvalidShape { expected: NUM_CHANNELS, found: channels });
    }

    Ok(img.to_rgb8())
}

/// Write a color image as PNG, appending an optional tag to the base name
///
/// The output path is `{dir}/{base}_{tag}.png`, or `{dir}/{base}.png` when
/// the tag is empty. An existing file at that path is overwritten.
///
/// # Returns
///
/// The path the image was written to.
pub fn save_with_tag(image: &RgbImage, dir: &Path, base: &str, tag: &str) -> Result<PathBuf> {
    let path = tagged_path(dir, base, tag);
    image.save(&path).map_err(|e| {
        ChannelError::image_save(format!("Failed to write image: {}", path.display()), e)
    })?;
    Ok(path)
}

/// Grayscale counterpart of [`save_with_tag`]
pub fn save_gray_with_tag(image: &GrayImage, dir: &Path, base: &str, tag: &str) -> Result<PathBuf> {
    let path = tagged_path(dir, base, tag);
    image.save(&path).map_err(|e| {
        ChannelError::image_save(format!("Failed to write image: {}", path.display()), e)
    })?;
    Ok(path)
}

fn tagged_path(dir: &Path, base: &str, tag: &str) -> PathBuf {
    if tag.is_empty() {
        dir.join(format!("{}.png", base))
    } else {
        dir.join(format!("{}_{}.png", base, tag))
    }
}

/// File extensions the loader accepts
pub fn supported_extensions() -> &'static [&'static str] {
    &["jpg", "jpeg", "png", "gif", "webp", "tiff", "tif", "bmp", "tga", "qoi"]
}

/// Check if a file extension is supported
pub fn is_supported_extension(ext: &str) -> bool {
    let ext_lower = ext.to_lowercase();
    supported_extensions().contains(&ext_lower.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_path_with_tag() {
        let path = tagged_path(Path::new("out"), "forest", "R");
        assert_eq!(path, Path::new("out").join("forest_R.png"));
    }

    #[test]
    fn test_tagged_path_without_tag() {
        let path = tagged_path(Path::new("out"), "forest", "");
        assert_eq!(path, Path::new("out").join("forest.png"));
    }

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_extension("png"));
        assert!(is_supported_extension("JPEG"));
        assert!(!is_supported_extension("heic"));
        assert!(!is_supported_extension("doc"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_rgb(Path::new("does_not_exist.png")).unwrap_err();
        match err {
            ChannelError::ImageLoad { .. } => {}
            other => panic!("Expected ImageLoad, got: {:?}", other),
        }
    }
}
