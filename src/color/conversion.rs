//! RGB/RYB color system conversion
//!
//! Converts single pixels between the additive red-green-blue system and
//! the subtractive red-yellow-blue system:
//! - White removal before mixing, restored after
//! - Magnitude normalization so the brightest channel is preserved
//! - Complementary color helper
//!
//! The two directions are structural inverses, but the round trip is an
//! approximation: clamping and truncation in the stored numeric type mean
//! `ryb_to_rgb(rgb_to_ryb(p))` is close to `p`, not necessarily equal.
//!
//! All functions are stateless; arithmetic runs in `f64` and the result is
//! cast back to the input's numeric type.

use crate::error::{ChannelError, Result};

/// Numeric type usable as a channel value
///
/// Implemented for `u8` (0..=255 storage), `f32` and `f64` (normalized
/// 0.0..=1.0). Conversion back from the `f64` working representation must
/// clamp to the type's representable range; for integers this is a
/// saturating, truncating cast.
pub trait ChannelValue: Copy {
    /// Upper bound of the representable range (255 for `u8`, 1.0 for floats)
    const LIMIT: f64;

    /// Widen to the `f64` working representation
    fn to_f64(self) -> f64;

    /// Cast back from the working representation, clamping as needed
    fn from_f64(value: f64) -> Self;
}

impl ChannelValue for u8 {
    const LIMIT: f64 = 255.0;

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(value: f64) -> Self {
        // `as` saturates at the type bounds and truncates the fraction
        value as u8
    }
}

impl ChannelValue for f32 {
    const LIMIT: f64 = 1.0;

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl ChannelValue for f64 {
    const LIMIT: f64 = 1.0;

    fn to_f64(self) -> f64 {
        self
    }

    fn from_f64(value: f64) -> Self {
        value
    }
}

/// Convert a red-green-blue pixel to the red-yellow-blue system
///
/// Preserves the maximum channel magnitude: after white removal the
/// brightest channel of the output equals the brightest channel of the
/// input. Pure red, pure blue and all grayscale values are fixed points.
///
/// # Arguments
///
/// * `red`, `green`, `blue` - channel values in the type's valid range
///
/// # Returns
///
/// `(red, yellow, blue)` in the same numeric type as the input
pub fn rgb_to_ryb<T: ChannelValue>(red: T, green: T, blue: T) -> (T, T, T) {
    let (mut red, mut green, mut blue) = (red.to_f64(), green.to_f64(), blue.to_f64());

    // Factor out the whiteness shared by all three channels
    let white = red.min(green).min(blue);
    red -= white;
    green -= white;
    blue -= white;

    let mag_rgb = red.max(green).max(blue);

    // Yellow is the portion of red and green expressible as one pigment
    let mut yellow = red.min(green);
    red -= yellow;
    green -= yellow;

    // Halve the shared contributions so their mix stays in range
    if blue != 0.0 && green != 0.0 {
        blue /= 2.0;
        green /= 2.0;
    }

    // RYB has no green channel; fold the residual into yellow and blue
    yellow += green;
    blue += green;

    // Rescale so the brightest channel keeps its pre-mix magnitude
    let mag_ryb = red.max(yellow).max(blue);
    if mag_ryb != 0.0 {
        let ratio = mag_rgb / mag_ryb;
        red *= ratio;
        yellow *= ratio;
        blue *= ratio;
    }

    red += white;
    yellow += white;
    blue += white;

    (T::from_f64(red), T::from_f64(yellow), T::from_f64(blue))
}

/// Convert a red-yellow-blue pixel back to the red-green-blue system
///
/// Structural inverse of [`rgb_to_ryb`]: green is extracted where yellow
/// and blue overlap, and the shared contributions are doubled (not halved)
/// under the same nonzero condition. The round trip through both functions
/// is approximate, not exact.
///
/// # Arguments
///
/// * `red`, `yellow`, `blue` - channel values in the type's valid range
///
/// # Returns
///
/// `(red, green, blue)` in the same numeric type as the input
pub fn ryb_to_rgb<T: ChannelValue>(red: T, yellow: T, blue: T) -> (T, T, T) {
    let (mut red, mut yellow, mut blue) = (red.to_f64(), yellow.to_f64(), blue.to_f64());

    let white = red.min(yellow).min(blue);
    red -= white;
    yellow -= white;
    blue -= white;

    let mag_ryb = red.max(yellow).max(blue);

    // Green is the portion of yellow and blue expressible as one channel
    let mut green = yellow.min(blue);
    yellow -= green;
    blue -= green;

    // Undo the range-preserving halving of the forward direction
    if blue != 0.0 && green != 0.0 {
        blue *= 2.0;
        green *= 2.0;
    }

    // Yellow light is red plus green
    red += yellow;
    green += yellow;

    let mag_rgb = red.max(green).max(blue);
    if mag_rgb != 0.0 {
        let ratio = mag_ryb / mag_rgb;
        red *= ratio;
        green *= ratio;
        blue *= ratio;
    }

    red += white;
    green += white;
    blue += white;

    (T::from_f64(red), T::from_f64(green), T::from_f64(blue))
}

/// Return the complementary color for a given color
///
/// Each channel is mirrored around `limit`: typically 255 for 8-bit
/// channels, 1.0 for normalized floating-point channels. Applying the
/// complement twice returns the original triple exactly.
pub fn complementary<T: ChannelValue>(red: T, green: T, blue: T, limit: T) -> (T, T, T) {
    let limit = limit.to_f64();
    (
        T::from_f64(limit - red.to_f64()),
        T::from_f64(limit - green.to_f64()),
        T::from_f64(limit - blue.to_f64()),
    )
}

/// Range-checked variant of [`complementary`]
///
/// # Errors
///
/// Returns `ChannelError::NumericRange` if any input channel lies outside
/// `0..=limit`.
pub fn checked_complementary<T: ChannelValue>(
    red: T,
    green: T,
    blue: T,
    limit: T,
) -> Result<(T, T, T)> {
    let max = limit.to_f64();
    for value in [red.to_f64(), green.to_f64(), blue.to_f64()] {
        if !(0.0..=max).contains(&value) {
            return Err(ChannelError::NumericRange { value, limit: max });
        }
    }
    Ok(complementary(red, green, blue, limit))
}
