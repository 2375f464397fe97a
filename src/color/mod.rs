//! Color system conversion module
//!
//! Handles conversion between the RGB and RYB color systems and the
//! channel vocabulary shared by the decomposition code.

pub mod channel;
pub mod conversion;

pub use channel::{Channel, ColorSystem};
pub use conversion::{checked_complementary, complementary, rgb_to_ryb, ryb_to_rgb, ChannelValue};
