//! Per-channel image decomposition
//!
//! Produces derived images that isolate or recombine color information:
//! - Raw single-channel grayscale planes
//! - Hue-rendered single-channel images after RYB conversion
//! - Two-channel "everything except" recombinations with secondary-color
//!   mixing rules
//!
//! Every operation reads the source image and returns a newly allocated
//! image; the source is never modified. Pixels are independent, so the
//! per-pixel work is parallelized across the buffer with rayon.

use image::{GrayImage, RgbImage};
use rayon::prelude::*;

use crate::color::{rgb_to_ryb, Channel, ColorSystem};
use crate::constants::{channel::MAX_8BIT, mixing};
use crate::error::{ChannelError, Result};

/// Sum two channel magnitudes, clamping at the 8-bit maximum
pub fn saturating_add(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

/// Clamped channel sum over the `f64` working representation
///
/// Fractions are truncated before summing, matching the integer mixing of
/// the recombination rules.
fn channel_sum(a: f64, b: f64) -> f64 {
    (a.trunc() + b.trunc()).min(MAX_8BIT)
}

/// Apply a per-pixel operation in parallel, producing a new color image
fn map_pixels<F>(source: &RgbImage, op: F) -> Result<RgbImage>
where
    F: Fn(&[u8]) -> [u8; 3] + Sync,
{
    let (width, height) = source.dimensions();
    let mut buffer = vec![0u8; source.as_raw().len()];
    buffer
        .par_chunks_exact_mut(3)
        .zip(source.as_raw().par_chunks_exact(3))
        .for_each(|(out, px)| out.copy_from_slice(&op(px)));
    RgbImage::from_raw(width, height, buffer)
        .ok_or_else(|| ChannelError::Processing("output buffer size mismatch".into()))
}

/// Extract one raw channel plane as a grayscale image
///
/// No color conversion is performed; this is the literal plane of the
/// source image (e.g. the red plane of an RGB image) for per-channel
/// inspection.
pub fn isolate_channel_grayscale(image: &RgbImage, channel: Channel) -> Result<GrayImage> {
    let (width, height) = image.dimensions();
    let idx = channel.index();
    let mut buffer = vec![0u8; (width as usize) * (height as usize)];
    buffer
        .par_iter_mut()
        .zip(image.as_raw().par_chunks_exact(3))
        .for_each(|(out, px)| *out = px[idx]);
    GrayImage::from_raw(width, height, buffer)
        .ok_or_else(|| ChannelError::Processing("output buffer size mismatch".into()))
}

/// Render a single RYB channel in its own hue
///
/// Each pixel is converted RGB to RYB, then every channel except the
/// selected one is zeroed. Yellow has no screen-renderable channel of its
/// own, so it is rendered as (y, y, 0) - the RGB approximation of yellow
/// at the pigment's magnitude.
pub fn isolate_channel_colored(image: &RgbImage, channel: Channel) -> Result<RgbImage> {
    map_pixels(image, |px| {
        let (r, y, b) = rgb_to_ryb(px[0], px[1], px[2]);
        match channel {
            Channel::Red => [r, 0, 0],
            Channel::Yellow => [y, y, 0],
            Channel::Blue => [0, 0, b],
        }
    })
}

/// Recombine all channels except one into a displayable approximation
///
/// In RYB mode each pixel is first converted RGB to RYB; in RGB mode the
/// pixel values are used directly. The excluded channel selects the
/// secondary-color mixing rule: excluding blue shows orange (red+yellow),
/// excluding yellow shows purple (red+blue), excluding red shows green
/// (yellow+blue). The coefficients live in [`crate::constants::mixing`].
pub fn recombine_except(
    image: &RgbImage,
    excluded: Channel,
    system: ColorSystem,
) -> Result<RgbImage> {
    match system {
        ColorSystem::Ryb => map_pixels(image, |px| {
            let green_orig = px[1] as f64;
            let (r, y, b) = rgb_to_ryb(px[0] as f64, green_orig, px[2] as f64);
            match excluded {
                // Mix red and yellow to get orange
                Channel::Blue => [channel_sum(r, y) as u8, y as u8, 0],
                // Mix red and blue to get purple
                Channel::Yellow => [
                    channel_sum(r, r * mixing::PURPLE_RED_BOOST) as u8,
                    0,
                    (b * mixing::PURPLE_BLUE_DAMP) as u8,
                ],
                // Mix yellow and blue to get green; fold in some of the
                // original RGB green the RYB conversion redistributed
                Channel::Red => {
                    let y_mixed = channel_sum(y, green_orig * mixing::GREEN_YELLOW_FOLD);
                    [(y_mixed * mixing::GREEN_RED_RATIO) as u8, y_mixed as u8, b as u8]
                }
            }
        }),
        ColorSystem::Rgb => map_pixels(image, |px| match excluded {
            Channel::Blue => [px[0], (px[1] as f64 * mixing::ORANGE_GREEN_DAMP) as u8, 0],
            Channel::Yellow => {
                let magenta = (mixing::MAGENTA_LEVEL * MAX_8BIT) as u8;
                [magenta, 0, magenta]
            }
            Channel::Red => [0, px[1], 0],
        }),
    }
}
