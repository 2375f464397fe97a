//! Configuration for the channel decomposition pipeline
//!
//! Controls which derived images [`crate::decompose_to_files`] produces.
//! Can be serialized to/from JSON for reproducible runs:
//!
//! ```no_run
//! use ryb_channels::DecomposeConfig;
//! use std::path::Path;
//!
//! let config = DecomposeConfig::from_json_file(Path::new("decompose.json"))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::color::{Channel, ColorSystem};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete decomposition run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecomposeConfig {
    /// Directory the derived images are written to
    pub output_dir: PathBuf,

    /// Single-channel isolation settings
    pub isolation: IsolationConfig,

    /// Two-channel recombination settings
    #[serde(default)]
    pub recombination: RecombinationConfig,
}

/// Single-channel isolation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsolationConfig {
    /// Produce isolation images at all
    pub enabled: bool,

    /// Hue-rendered color output; when false, raw grayscale planes are
    /// written instead (with an extra "L" tag suffix)
    pub colored: bool,

    /// Channels to isolate
    pub channels: Vec<Channel>,
}

/// Two-channel recombination settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecombinationConfig {
    /// Produce recombination images at all
    pub enabled: bool,

    /// Mixing rule to apply
    pub color_system: ColorSystem,

    /// Channels to exclude, one output image each
    pub channels: Vec<Channel>,
}

impl Default for RecombinationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            color_system: ColorSystem::Ryb,
            channels: Channel::ALL.to_vec(),
        }
    }
}

impl Default for DecomposeConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            isolation: IsolationConfig {
                enabled: true,
                colored: true,
                channels: Channel::ALL.to_vec(),
            },
            recombination: RecombinationConfig::default(),
        }
    }
}

impl DecomposeConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_isolates_all_channels_in_color() {
        let config = DecomposeConfig::default();
        assert!(config.isolation.enabled);
        assert!(config.isolation.colored);
        assert_eq!(config.isolation.channels, Channel::ALL.to_vec());
        assert!(!config.recombination.enabled);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut config = DecomposeConfig::default();
        config.recombination.enabled = true;
        config.recombination.color_system = ColorSystem::Rgb;
        config.recombination.channels = vec![Channel::Yellow];

        let json = serde_json::to_string(&config).unwrap();
        let parsed: DecomposeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_recombination_section_is_optional() {
        // Older config files without the recombination section still parse
        let json = r#"{
            "output_dir": "out",
            "isolation": { "enabled": true, "colored": false, "channels": ["red"] }
        }"#;
        let config: DecomposeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.isolation.channels, vec![Channel::Red]);
        assert!(!config.recombination.enabled);
    }
}
