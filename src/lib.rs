//! # RYB Channels
//!
//! A Rust crate for converting pixel colors between the RGB (additive,
//! display) and RYB (subtractive, paint-mixing) color systems, and for
//! decomposing images into per-channel visualizations.
//!
//! This library provides:
//! - Bidirectional RGB/RYB pixel conversion with magnitude preservation
//! - Complementary color computation
//! - Single-channel isolation as raw grayscale planes or hue-rendered images
//! - Two-channel "everything except" recombination with secondary-color
//!   mixing rules
//!
//! ## Example
//!
//! ```rust,no_run
//! use ryb_channels::{decompose_to_files, DecomposeConfig};
//! use std::path::Path;
//!
//! let config = DecomposeConfig::default();
//! let written = decompose_to_files(Path::new("forest.jpg"), &config)?;
//! println!("Wrote {} channel images", written.len());
//! # Ok::<(), ryb_channels::ChannelError>(())
//! ```
//!
//! Single pixels convert directly:
//!
//! ```rust
//! use ryb_channels::color::rgb_to_ryb;
//!
//! // RGB green splits into yellow and blue pigment
//! assert_eq!(rgb_to_ryb(0u8, 255, 0), (0, 255, 255));
//! ```

use std::path::{Path, PathBuf};

pub mod color;
pub mod config;
pub mod constants;
pub mod decompose;
pub mod error;
pub mod image_io;

pub use color::{Channel, ColorSystem};
pub use config::DecomposeConfig;
pub use error::{ChannelError, Result};

/// Decompose an image file into per-channel output images
///
/// This is the main entry point for file-based decomposition. The source
/// image is loaded once and every derived image requested by the
/// configuration is written to the configured output directory, named by
/// the source base name plus the channel tag (`forest_R.png`,
/// `forest_O.png`, grayscale planes get an extra `_L` suffix).
///
/// # Arguments
///
/// * `image_path` - Path to the source image file
/// * `config` - Which isolations/recombinations to produce and where
///
/// # Returns
///
/// The paths of all images written, in production order.
///
/// # Errors
///
/// Returns `ChannelError` if:
/// - The source image cannot be loaded or has fewer than 3 channels
/// - An output image cannot be written
pub fn decompose_to_files(image_path: &Path, config: &DecomposeConfig) -> Result<Vec<PathBuf>> {
    let image = image_io::load_rgb(image_path)?;
    let base = image_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    let mut written = Vec::new();

    if config.isolation.enabled {
        for &channel in &config.isolation.channels {
            if config.isolation.colored {
                let derived = decompose::isolate_channel_colored(&image, channel)?;
                written.push(image_io::save_with_tag(
                    &derived,
                    &config.output_dir,
                    base,
                    channel.tag(),
                )?);
            } else {
                let derived = decompose::isolate_channel_grayscale(&image, channel)?;
                let tag = format!("{}_L", channel.tag());
                written.push(image_io::save_gray_with_tag(
                    &derived,
                    &config.output_dir,
                    base,
                    &tag,
                )?);
            }
        }
    }

    if config.recombination.enabled {
        for &channel in &config.recombination.channels {
            let derived =
                decompose::recombine_except(&image, channel, config.recombination.color_system)?;
            written.push(image_io::save_with_tag(
                &derived,
                &config.output_dir,
                base,
                channel.pair_tag(),
            )?);
        }
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose_missing_file() {
        let config = DecomposeConfig::default();
        let result = decompose_to_files(Path::new("nonexistent.png"), &config);
        assert!(result.is_err());
    }
}
