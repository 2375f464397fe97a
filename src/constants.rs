//! Channel and mixing constants for RGB/RYB decomposition
//!
//! The mixing module reproduces the empirically tuned coefficients of the
//! reference RYB renderer verbatim. They have no documented derivation and
//! form a fixed lookup table, not a formula.

/// Channel layout and value range
pub mod channel {
    /// Maximum 8-bit channel value
    pub const MAX_8BIT: f64 = 255.0;

    /// Channels per color pixel
    pub const NUM_CHANNELS: u8 = 3;

    /// Positional index of the red channel
    pub const I_RED: usize = 0;

    /// Positional index of the green (RGB) or yellow (RYB) channel
    pub const I_YELLOW: usize = 1;

    /// Positional index of the blue channel
    pub const I_BLUE: usize = 2;
}

/// Secondary-color mixing coefficients for two-channel recombination
///
/// Chosen for perceptually plausible secondary colors when two channels
/// are rendered together on an RGB display.
pub mod mixing {
    /// RYB, excluding yellow: extra red mixed in to push toward purple
    pub const PURPLE_RED_BOOST: f64 = 0.1;

    /// RYB, excluding yellow: damping applied to blue
    pub const PURPLE_BLUE_DAMP: f64 = 0.9;

    /// RYB, excluding red: fraction of the original RGB green folded into yellow
    pub const GREEN_YELLOW_FOLD: f64 = 0.4;

    /// RYB, excluding red: red rendered as this fraction of the mixed yellow
    pub const GREEN_RED_RATIO: f64 = 0.7;

    /// RGB, excluding blue: damping applied to green for an orange cast
    pub const ORANGE_GREEN_DAMP: f64 = 0.647;

    /// RGB, excluding yellow: red and blue as this fraction of the channel
    /// limit (128 at 8-bit, i.e. web magenta 0x800080)
    pub const MAGENTA_LEVEL: f64 = 0.502;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_layout() {
        assert_eq!(channel::MAX_8BIT, u8::MAX as f64);
        assert_eq!(channel::NUM_CHANNELS, 3);
        assert!(channel::I_RED < channel::I_YELLOW && channel::I_YELLOW < channel::I_BLUE);
    }

    #[test]
    fn test_mixing_coefficients_in_unit_range() {
        for c in [
            mixing::PURPLE_RED_BOOST,
            mixing::PURPLE_BLUE_DAMP,
            mixing::GREEN_YELLOW_FOLD,
            mixing::GREEN_RED_RATIO,
            mixing::ORANGE_GREEN_DAMP,
            mixing::MAGENTA_LEVEL,
        ] {
            assert!(c > 0.0 && c < 1.0);
        }
    }

    #[test]
    fn test_magenta_level_is_half_scale() {
        // 0.502 * 255 truncates to the 0x80 magenta component
        assert_eq!((mixing::MAGENTA_LEVEL * channel::MAX_8BIT) as u8, 128);
    }
}
