// SPDX-License-Identifier: MPL-2.0
//! Sheet configuration: layout metrics, selection cap, fetch limits.
//!
//! The configuration is plain data that can be parsed from and rendered to
//! TOML. Reading or writing files is left to the host; the library only deals
//! with strings.
//!
//! # Examples
//!
//! ```
//! use picker_sheet::config::SheetConfig;
//!
//! let config = SheetConfig::from_toml_str(
//!     r#"
//!     [selection]
//!     maximum_selection = 3
//!     "#,
//! )
//! .expect("valid config");
//!
//! assert_eq!(config.selection.maximum_selection, Some(3));
//! assert_eq!(config.assets.fetch_limit, 50);
//! ```

pub mod defaults;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub use defaults::*;

/// Which generation of platform styling the sheet mimics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlatformTier {
    /// Grouped, rounded rows with a detached Cancel block.
    #[default]
    Modern,
    /// Flat, square rows without background insets.
    Legacy,
}

/// Layout metrics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    pub edge_inset: f32,
    pub corner_radius: f32,
    pub default_inset: f32,
    pub inner_inset: f32,
    pub collapsed_preview_height: f32,
    pub min_enlarged_preview_height: f32,
    pub max_preview_height: f32,
    pub platform_tier: PlatformTier,
    /// Device pixel scale applied to thumbnail request sizes.
    pub screen_scale: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            edge_inset: EDGE_INSET,
            corner_radius: CORNER_RADIUS,
            default_inset: DEFAULT_INSET,
            inner_inset: INNER_INSET,
            collapsed_preview_height: COLLAPSED_PREVIEW_HEIGHT,
            min_enlarged_preview_height: MIN_ENLARGED_PREVIEW_HEIGHT,
            max_preview_height: MAX_PREVIEW_HEIGHT,
            platform_tier: PlatformTier::default(),
            screen_scale: SCREEN_SCALE,
        }
    }
}

impl LayoutConfig {
    /// Height of a single action row, excluding background insets.
    #[must_use]
    pub fn action_row_height(&self) -> f32 {
        match self.platform_tier {
            PlatformTier::Modern => MODERN_ACTION_ROW_HEIGHT,
            PlatformTier::Legacy => LEGACY_ACTION_ROW_HEIGHT,
        }
    }
}

/// Selection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct SelectionConfig {
    /// Maximum number of images selected at once. `None` means unlimited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_selection: Option<usize>,
}

/// Asset fetching settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AssetsConfig {
    pub fetch_limit: usize,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            fetch_limit: ASSET_FETCH_LIMIT,
        }
    }
}

/// Animation timing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
    pub enlarge_duration_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enlarge_duration_ms: ENLARGE_DURATION_MS,
        }
    }
}

impl AnimationConfig {
    #[must_use]
    pub fn enlarge_duration(&self) -> Duration {
        Duration::from_millis(self.enlarge_duration_ms)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Sheet configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SheetConfig {
    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub selection: SelectionConfig,

    #[serde(default)]
    pub assets: AssetsConfig,

    #[serde(default)]
    pub animation: AnimationConfig,
}

impl SheetConfig {
    /// Parses and validates a configuration from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for malformed TOML and
    /// [`Error::InvalidConfiguration`] for out-of-range values.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Renders the configuration as pretty TOML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks every value against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.selection.maximum_selection == Some(0) {
            return Err(invalid("maximum_selection must be at least 1"));
        }

        let layout = &self.layout;
        if layout.screen_scale.is_nan() || layout.screen_scale <= 0.0 {
            return Err(invalid("screen_scale must be positive"));
        }

        let insets = [
            ("edge_inset", layout.edge_inset),
            ("corner_radius", layout.corner_radius),
            ("default_inset", layout.default_inset),
            ("inner_inset", layout.inner_inset),
            ("collapsed_preview_height", layout.collapsed_preview_height),
        ];
        if let Some((name, _)) = insets.iter().find(|(_, value)| value.is_nan() || *value < 0.0) {
            return Err(invalid(&format!("{name} must not be negative")));
        }

        if layout.min_enlarged_preview_height > layout.max_preview_height {
            return Err(invalid(
                "min_enlarged_preview_height must not exceed max_preview_height",
            ));
        }

        if self.assets.fetch_limit == 0 {
            return Err(invalid("fetch_limit must be at least 1"));
        }

        Ok(())
    }
}

fn invalid(reason: &str) -> Error {
    Error::InvalidConfiguration(reason.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SheetConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config = SheetConfig::from_toml_str("").expect("empty config parses");
        assert_eq!(config, SheetConfig::default());
    }

    #[test]
    fn round_trip_preserves_sections() {
        let mut config = SheetConfig::default();
        config.selection.maximum_selection = Some(4);
        config.layout.platform_tier = PlatformTier::Legacy;
        config.animation.enlarge_duration_ms = 150;

        let rendered = config.to_toml_string().expect("serializes");
        let parsed = SheetConfig::from_toml_str(&rendered).expect("parses back");

        assert_eq!(parsed, config);
    }

    #[test]
    fn platform_tier_is_lowercase_in_toml() {
        let config = SheetConfig::from_toml_str("[layout]\nplatform_tier = \"legacy\"\n")
            .expect("valid tier");
        assert_eq!(config.layout.platform_tier, PlatformTier::Legacy);
        assert!((config.layout.action_row_height() - LEGACY_ACTION_ROW_HEIGHT).abs() < f32::EPSILON);
    }

    #[test]
    fn zero_maximum_selection_is_rejected() {
        let err = SheetConfig::from_toml_str("[selection]\nmaximum_selection = 0\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn inverted_preview_bounds_are_rejected() {
        let mut config = SheetConfig::default();
        config.layout.min_enlarged_preview_height = 400.0;
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn negative_inset_is_rejected() {
        let mut config = SheetConfig::default();
        config.layout.inner_inset = -1.0;
        let err = config.validate().unwrap_err();
        assert!(format!("{err}").contains("inner_inset"));
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let err = SheetConfig::from_toml_str("[layout\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn zero_screen_scale_is_rejected() {
        let mut config = SheetConfig::default();
        config.layout.screen_scale = 0.0;
        assert!(config.validate().is_err());
    }
}
