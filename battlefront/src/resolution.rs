//! Supported screen resolutions and the scale factors used to convert design pixels
//! (laid out for 800x600) into device pixels.
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the fixed screen sizes the game can run at.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    #[serde(rename = "800x600")]
    Res800x600,
    #[serde(rename = "1024x768")]
    Res1024x768,
    #[serde(rename = "1280x960")]
    Res1280x960,
}

impl Resolution {
    /// All supported resolutions, smallest first. This is also the order of the
    /// resolution menu.
    pub const ALL: &'static [Resolution] = &[
        Resolution::Res800x600,
        Resolution::Res1024x768,
        Resolution::Res1280x960,
    ];

    /// Get the scale profile for this resolution.
    pub fn profile(self) -> ResolutionProfile {
        match self {
            Resolution::Res800x600 => ResolutionProfile {
                width: 800,
                height: 600,
                scale_multiplier: 1.0,
                offset_x: 0,
                offset_y: 0,
            },
            Resolution::Res1024x768 => ResolutionProfile {
                width: 1024,
                height: 768,
                scale_multiplier: 1.28,
                offset_x: 224,
                offset_y: 168,
            },
            Resolution::Res1280x960 => ResolutionProfile {
                width: 1280,
                height: 960,
                scale_multiplier: 1.6,
                offset_x: 480,
                offset_y: 360,
            },
        }
    }

    /// The `WIDTHxHEIGHT` label used in menus and configuration.
    pub fn label(self) -> &'static str {
        match self {
            Resolution::Res800x600 => "800x600",
            Resolution::Res1024x768 => "1024x768",
            Resolution::Res1280x960 => "1280x960",
        }
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution::Res800x600
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Error returned when a resolution label doesn't name a supported resolution.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("unsupported resolution {0:?}, expected one of 800x600, 1024x768, 1280x960")]
pub struct ParseResolutionError(String);

impl FromStr for Resolution {
    type Err = ParseResolutionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resolution::ALL
            .iter()
            .copied()
            .find(|res| res.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseResolutionError(s.to_owned()))
    }
}

/// Device scale factors for one [`Resolution`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ResolutionProfile {
    /// Device width in pixels.
    pub width: u32,
    /// Device height in pixels.
    pub height: u32,
    /// Factor applied to design-pixel positions.
    pub scale_multiplier: f64,
    /// Horizontal growth over the 800 pixel design width.
    pub offset_x: i32,
    /// Vertical growth over the 600 pixel design height.
    pub offset_y: i32,
}

impl ResolutionProfile {
    /// Scale a design-pixel value to device pixels, rounding to the nearest pixel.
    pub fn scale(&self, design: i32) -> i32 {
        (f64::from(design) * self.scale_multiplier).round() as i32
    }
}

impl Default for ResolutionProfile {
    fn default() -> Self {
        Resolution::default().profile()
    }
}
