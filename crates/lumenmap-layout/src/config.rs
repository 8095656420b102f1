use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::shapes::RingSpec;

/// Millimeters to output units.
pub const DEFAULT_SCALE: f64 = 0.01;

/// Distance between neighbouring LEDs on banners and strips.
pub const DEFAULT_LED_SPACING_MM: f64 = 10.0;

/// Ring array fitted to the round panel, outermost ring first.
pub const DEFAULT_RINGS: [RingSpec; 5] = [
    RingSpec::new(32, 111.8),
    RingSpec::new(24, 91.8),
    RingSpec::new(16, 71.8),
    RingSpec::new(12, 51.8),
    RingSpec::new(8, 31.8),
];

/// Fixed parameters of a [`LayoutGenerator`](crate::LayoutGenerator).
///
/// Any field missing from a JSON config falls back to its default, so `{}`
/// is a valid config.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub scale: f64,
    pub led_spacing_mm: f64,
    pub rings: Vec<RingSpec>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            led_spacing_mm: DEFAULT_LED_SPACING_MM,
            rings: DEFAULT_RINGS.to_vec(),
        }
    }
}

impl LayoutConfig {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

/// How the layout document is laid out on the page.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum OutputStyle {
    Compact,
    #[default]
    Pretty,
}
