//! The four editable tone-curve channels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one of the editable curves.
///
/// `Rgb` is the combined curve applied to all three color components;
/// the others affect a single component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Combined curve (applied to R, G and B).
    #[default]
    Rgb,
    /// Red component curve.
    Red,
    /// Green component curve.
    Green,
    /// Blue component curve.
    Blue,
}

impl Channel {
    /// All channels in selector-button order.
    pub const ALL: [Channel; 4] = [Channel::Rgb, Channel::Red, Channel::Green, Channel::Blue];

    /// Key used in the serialized backing value.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }

    /// Short label for the point-count readout.
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::Rgb => "RGB",
            Self::Red => "R",
            Self::Green => "G",
            Self::Blue => "B",
        }
    }

    /// Label drawn on the channel selector button.
    pub const fn button_label(self) -> &'static str {
        match self {
            Self::Rgb => "RGB",
            Self::Red => "RED",
            Self::Green => "GREEN",
            Self::Blue => "BLUE",
        }
    }

    /// Whether this is the combined curve.
    pub const fn is_combined(self) -> bool {
        matches!(self, Self::Rgb)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
