//! Channel and color-system vocabulary
//!
//! Defines the enumerated channel identifiers shared by the conversion and
//! decomposition code, together with the single-letter tags used in output
//! file names: {R, Y, B} for single-channel images and {G, P, O} for the
//! complement pair ("all but" that channel).

use crate::constants::channel::{I_BLUE, I_RED, I_YELLOW};
use crate::error::{ChannelError, Result};
use serde::{Deserialize, Serialize};

/// Color channel identifier
///
/// Index 0 is red, index 1 is green-or-yellow depending on the color
/// system, index 2 is blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Red channel (index 0)
    Red,
    /// Yellow in RYB, green in RGB (index 1)
    Yellow,
    /// Blue channel (index 2)
    Blue,
}

impl Channel {
    /// All channels in positional order
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Yellow, Channel::Blue];

    /// Positional index of this channel within a pixel triple
    pub fn index(self) -> usize {
        match self {
            Channel::Red => I_RED,
            Channel::Yellow => I_YELLOW,
            Channel::Blue => I_BLUE,
        }
    }

    /// Single-channel tag used for isolation output naming
    pub fn tag(self) -> &'static str {
        match self {
            Channel::Red => "R",
            Channel::Yellow => "Y",
            Channel::Blue => "B",
        }
    }

    /// Complement-pair tag: the combined color of the other two channels
    ///
    /// "G" = green-ish (all but red), "P" = purple-ish (all but yellow),
    /// "O" = orange-ish (all but blue).
    pub fn pair_tag(self) -> &'static str {
        match self {
            Channel::Red => "G",
            Channel::Yellow => "P",
            Channel::Blue => "O",
        }
    }

    /// Parse a single-channel tag
    ///
    /// # Errors
    ///
    /// Returns `ChannelError::InvalidChannel` for tags outside {R, Y, B}.
    pub fn from_tag(tag: &str) -> Result<Channel> {
        match tag.to_ascii_uppercase().as_str() {
            "R" => Ok(Channel::Red),
            "Y" => Ok(Channel::Yellow),
            "B" => Ok(Channel::Blue),
            _ => Err(ChannelError::InvalidChannel { tag: tag.to_string() }),
        }
    }
}

/// Color system selecting the mixing rule for two-channel recombination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSystem {
    /// Additive red-green-blue (display-native)
    Rgb,
    /// Subtractive red-yellow-blue (paint mixing)
    Ryb,
}

impl ColorSystem {
    /// Parse a system name as used on the command line
    pub fn from_name(name: &str) -> Result<ColorSystem> {
        match name.to_ascii_lowercase().as_str() {
            "rgb" => Ok(ColorSystem::Rgb),
            "ryb" => Ok(ColorSystem::Ryb),
            _ => Err(ChannelError::Processing(format!(
                "Unknown color system {:?}, expected \"rgb\" or \"ryb\"",
                name
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_indices() {
        assert_eq!(Channel::Red.index(), 0);
        assert_eq!(Channel::Yellow.index(), 1);
        assert_eq!(Channel::Blue.index(), 2);
    }

    #[test]
    fn test_single_tags() {
        assert_eq!(Channel::Red.tag(), "R");
        assert_eq!(Channel::Yellow.tag(), "Y");
        assert_eq!(Channel::Blue.tag(), "B");
    }

    #[test]
    fn test_pair_tags() {
        assert_eq!(Channel::Red.pair_tag(), "G");
        assert_eq!(Channel::Yellow.pair_tag(), "P");
        assert_eq!(Channel::Blue.pair_tag(), "O");
    }

    #[test]
    fn test_from_tag_roundtrip() {
        for channel in Channel::ALL {
            assert_eq!(Channel::from_tag(channel.tag()).unwrap(), channel);
        }
        // Case-insensitive
        assert_eq!(Channel::from_tag("r").unwrap(), Channel::Red);
    }

    #[test]
    fn test_from_tag_invalid() {
        let err = Channel::from_tag("G").unwrap_err();
        match err {
            ChannelError::InvalidChannel { tag } => assert_eq!(tag, "G"),
            other => panic!("Expected InvalidChannel, got: {:?}", other),
        }
        assert!(Channel::from_tag("").is_err());
    }

    #[test]
    fn test_color_system_parsing() {
        assert_eq!(ColorSystem::from_name("RYB").unwrap(), ColorSystem::Ryb);
        assert_eq!(ColorSystem::from_name("rgb").unwrap(), ColorSystem::Rgb);
        assert!(ColorSystem::from_name("cmyk").is_err());
    }

    #[test]
    fn test_channel_serde() {
        let json = serde_json::to_string(&Channel::Yellow).unwrap();
        assert_eq!(json, "\"yellow\"");
        let channel: Channel = serde_json::from_str("\"blue\"").unwrap();
        assert_eq!(channel, Channel::Blue);
    }
}
