//! Built-in curve presets and the auto-adjust template.
//!
//! Every preset carries boundary anchors near x = 0 and x = 1. Channels a
//! preset does not shape are the identity line.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::channel::Channel;
use crate::curve_set::CurveSet;
use crate::error::CurveError;
use crate::point::{ControlPoint, points_from};

const ID: &[[f32; 2]] = &[[0.0, 0.0], [1.0, 1.0]];

/// Gentle S-curve applied to the combined channel by the Auto action.
const AUTO_COMBINED: &[[f32; 2]] = &[[0.0, 0.0], [0.25, 0.22], [0.5, 0.5], [0.75, 0.78], [1.0, 1.0]];
/// Auto template for single channels: same S with a slightly lifted midpoint.
const AUTO_SINGLE: &[[f32; 2]] = &[[0.0, 0.0], [0.25, 0.22], [0.5, 0.52], [0.75, 0.78], [1.0, 1.0]];

/// A named four-channel curve template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    #[default]
    None,
    AutoEnhance,
    HighContrast,
    LowContrast,
    WarmTones,
    CoolTones,
    VintageFade,
    Cinematic,
    MatteLook,
    CrossProcess,
    SepiaTone,
    BleachBypass,
    GoldenHour,
    Moonlight,
    VibrantPop,
    Noir,
    SunsetGlow,
    ForestGreen,
}

/// Raw `[rgb, red, green, blue]` point tables.
type Template = [&'static [[f32; 2]]; 4];

impl Preset {
    /// Presets in selector order.
    pub fn all() -> &'static [Self] {
        const ALL: [Preset; 18] = [
            Preset::None,
            Preset::AutoEnhance,
            Preset::HighContrast,
            Preset::LowContrast,
            Preset::WarmTones,
            Preset::CoolTones,
            Preset::VintageFade,
            Preset::Cinematic,
            Preset::MatteLook,
            Preset::CrossProcess,
            Preset::SepiaTone,
            Preset::BleachBypass,
            Preset::GoldenHour,
            Preset::Moonlight,
            Preset::VibrantPop,
            Preset::Noir,
            Preset::SunsetGlow,
            Preset::ForestGreen,
        ];
        &ALL
    }

    /// Name shown by the preset selector.
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::AutoEnhance => "auto_enhance",
            Self::HighContrast => "high_contrast",
            Self::LowContrast => "low_contrast",
            Self::WarmTones => "warm_tones",
            Self::CoolTones => "cool_tones",
            Self::VintageFade => "vintage_fade",
            Self::Cinematic => "cinematic",
            Self::MatteLook => "matte_look",
            Self::CrossProcess => "cross_process",
            Self::SepiaTone => "sepia_tone",
            Self::BleachBypass => "bleach_bypass",
            Self::GoldenHour => "golden_hour",
            Self::Moonlight => "moonlight",
            Self::VibrantPop => "vibrant_pop",
            Self::Noir => "noir",
            Self::SunsetGlow => "sunset_glow",
            Self::ForestGreen => "forest_green",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|p| p.name() == name)
    }

    /// A fresh copy of this preset's curves.
    pub fn curves(self) -> CurveSet {
        let [rgb, red, green, blue] = self.template();
        CurveSet::from_channels(
            points_from(rgb),
            points_from(red),
            points_from(green),
            points_from(blue),
        )
    }

    fn template(self) -> Template {
        match self {
            Self::None => [ID, ID, ID, ID],
            Self::AutoEnhance => [AUTO_COMBINED, ID, ID, ID],
            Self::HighContrast => [
                &[[0.0, 0.0], [0.25, 0.15], [0.5, 0.5], [0.75, 0.85], [1.0, 1.0]],
                ID,
                ID,
                ID,
            ],
            Self::LowContrast => [&[[0.0, 0.1], [0.5, 0.5], [1.0, 0.9]], ID, ID, ID],
            Self::WarmTones => [
                ID,
                &[[0.0, 0.0], [0.5, 0.55], [1.0, 1.0]],
                ID,
                &[[0.0, 0.0], [0.5, 0.45], [1.0, 1.0]],
            ],
            Self::CoolTones => [
                ID,
                &[[0.0, 0.0], [0.5, 0.45], [1.0, 1.0]],
                ID,
                &[[0.0, 0.0], [0.5, 0.55], [1.0, 1.0]],
            ],
            Self::VintageFade => [
                &[[0.0, 0.05], [1.0, 0.95]],
                &[[0.0, 0.02], [0.5, 0.52], [1.0, 1.0]],
                &[[0.0, 0.0], [0.5, 0.48], [1.0, 0.95]],
                &[[0.0, 0.05], [0.5, 0.45], [1.0, 0.9]],
            ],
            Self::Cinematic => [
                &[[0.0, 0.03], [0.5, 0.5], [1.0, 0.97]],
                &[[0.0, 0.0], [0.5, 0.48], [1.0, 1.0]],
                &[[0.0, 0.0], [0.5, 0.5], [1.0, 0.98]],
                &[[0.0, 0.05], [0.5, 0.52], [1.0, 1.0]],
            ],
            Self::MatteLook => [
                &[[0.0, 0.08], [0.25, 0.28], [0.75, 0.75], [1.0, 0.92]],
                ID,
                ID,
                ID,
            ],
            Self::CrossProcess => [
                ID,
                &[[0.0, 0.05], [0.5, 0.45], [1.0, 1.0]],
                &[[0.0, 0.0], [0.5, 0.55], [1.0, 0.95]],
                &[[0.0, 0.1], [0.5, 0.4], [1.0, 0.9]],
            ],
            Self::SepiaTone => [
                &[[0.0, 0.0], [0.5, 0.5], [1.0, 0.95]],
                &[[0.0, 0.0], [0.5, 0.55], [1.0, 1.0]],
                &[[0.0, 0.0], [0.5, 0.48], [1.0, 0.9]],
                &[[0.0, 0.0], [0.5, 0.35], [1.0, 0.8]],
            ],
            Self::BleachBypass => [
                &[[0.0, 0.0], [0.2, 0.12], [0.5, 0.5], [0.8, 0.88], [1.0, 1.0]],
                ID,
                ID,
                &[[0.0, 0.0], [0.5, 0.45], [1.0, 1.0]],
            ],
            Self::GoldenHour => [
                &[[0.0, 0.0], [0.5, 0.52], [1.0, 1.0]],
                &[[0.0, 0.0], [0.5, 0.55], [1.0, 1.0]],
                &[[0.0, 0.0], [0.5, 0.52], [1.0, 0.98]],
                &[[0.0, 0.0], [0.5, 0.4], [1.0, 0.85]],
            ],
            Self::Moonlight => [
                &[[0.0, 0.0], [0.5, 0.48], [1.0, 0.95]],
                &[[0.0, 0.0], [0.5, 0.45], [1.0, 0.9]],
                &[[0.0, 0.0], [0.5, 0.5], [1.0, 0.95]],
                &[[0.0, 0.05], [0.5, 0.55], [1.0, 1.0]],
            ],
            Self::VibrantPop => [
                &[[0.0, 0.0], [0.2, 0.15], [0.5, 0.5], [0.8, 0.85], [1.0, 1.0]],
                &[[0.0, 0.0], [0.5, 0.52], [1.0, 1.0]],
                &[[0.0, 0.0], [0.5, 0.52], [1.0, 1.0]],
                &[[0.0, 0.0], [0.5, 0.52], [1.0, 1.0]],
            ],
            Self::Noir => [
                &[[0.0, 0.0], [0.15, 0.05], [0.5, 0.5], [0.85, 0.95], [1.0, 1.0]],
                &[[0.0, 0.0], [0.5, 0.48], [1.0, 1.0]],
                &[[0.0, 0.0], [0.5, 0.48], [1.0, 1.0]],
                &[[0.0, 0.0], [0.5, 0.48], [1.0, 1.0]],
            ],
            Self::SunsetGlow => [
                ID,
                &[[0.0, 0.0], [0.5, 0.58], [1.0, 1.0]],
                &[[0.0, 0.0], [0.5, 0.48], [1.0, 0.95]],
                &[[0.0, 0.0], [0.5, 0.38], [1.0, 0.8]],
            ],
            Self::ForestGreen => [
                &[[0.0, 0.02], [0.5, 0.5], [1.0, 0.98]],
                &[[0.0, 0.0], [0.5, 0.45], [1.0, 0.95]],
                &[[0.0, 0.0], [0.5, 0.55], [1.0, 1.0]],
                &[[0.0, 0.0], [0.5, 0.45], [1.0, 0.9]],
            ],
        }
    }
}

impl FromStr for Preset {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| CurveError::UnknownPreset(s.to_string()))
    }
}

/// Points the Auto action writes into `channel`.
pub fn auto_adjust_points(channel: Channel) -> Vec<ControlPoint> {
    if channel.is_combined() {
        points_from(AUTO_COMBINED)
    } else {
        points_from(AUTO_SINGLE)
    }
}
