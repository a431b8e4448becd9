//! Operating configuration for the mode engine.
//!
//! Mirrors the user-facing option tree: one section per operating mode plus
//! the shared multiplier options. All fields default so a partial TOML file
//! (or an empty one) yields a working configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{
    L5Fmt, OperMode, S400pMode, S480pMode, ScalerAspect, ScalerFramelock, ScalerOutMode,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level operating configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperatingConfig {
    pub oper_mode: OperMode,
    pub line_mult: LineMultSettings,
    pub adaptive: AdaptiveSettings,
    pub scaler: ScalerSettings,
}

impl OperatingConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }
}

/// Pure line multiplier options: per-group multiplier selection and the
/// sub-mode selectors that pick an optimized console variant.
///
/// The `pm_*` selectors index the per-group multiplier lists (0 is always
/// passthrough); the `l2_mode`..`l5_mode` selectors pick the sampling
/// variant within each multiplier family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineMultSettings {
    pub l2_mode: u8,
    pub l3_mode: u8,
    pub l4_mode: u8,
    pub l5_mode: u8,
    pub l5_fmt: L5Fmt,
    pub pm_240p: u8,
    pub pm_384p: u8,
    pub pm_480i: u8,
    pub pm_480p: u8,
    pub pm_1080i: u8,
    pub s400p_mode: S400pMode,
    pub s480p_mode: S480pMode,
    /// Double the sampling rate of low-dotclock modes instead of using
    /// TX-side pixel repetition.
    pub upsample2x: bool,
}

impl Default for LineMultSettings {
    fn default() -> Self {
        Self {
            l2_mode: 0,
            l3_mode: 0,
            l4_mode: 0,
            l5_mode: 0,
            l5_fmt: L5Fmt::default(),
            pm_240p: default_pm_240p(),
            pm_384p: 0,
            pm_480i: 0,
            pm_480p: 0,
            pm_1080i: 0,
            s400p_mode: S400pMode::default(),
            s480p_mode: S480pMode::default(),
            upsample2x: false,
        }
    }
}

fn default_pm_240p() -> u8 {
    // Line2x out of the box, like the hardware defaults.
    1
}

/// Adaptive line multiplier options: per-group output target and sampling
/// mode selectors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdaptiveSettings {
    pub pm_ad_240p: u8,
    pub pm_ad_288p: u8,
    pub pm_ad_480i: u8,
    pub pm_ad_576i: u8,
    pub pm_ad_480p: u8,
    pub pm_ad_576p: u8,
    pub sm_ad_240p_288p: u8,
    pub sm_ad_480i_576i: u8,
    pub sm_ad_480p: u8,
    pub sm_ad_576p: u8,
}

/// Scaler options: output mode, framelock policy, aspect placement and the
/// per-group sampling mode selectors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScalerSettings {
    pub out_mode: ScalerOutMode,
    pub framelock: ScalerFramelock,
    pub aspect: ScalerAspect,
    pub sm_scl_240p_288p: u8,
    pub sm_scl_480i_576i: u8,
    pub sm_scl_480p: u8,
    pub sm_scl_576p: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg = OperatingConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, OperatingConfig::default());
        assert_eq!(cfg.oper_mode, OperMode::PureLm);
        assert_eq!(cfg.line_mult.pm_240p, 1);
    }

    #[test]
    fn partial_section_fills_remaining_fields() {
        let cfg = OperatingConfig::from_toml_str(
            r#"
            oper_mode = "adaptive_lm"

            [adaptive]
            pm_ad_240p = 5
            "#,
        )
        .unwrap();
        assert_eq!(cfg.oper_mode, OperMode::AdaptiveLm);
        assert_eq!(cfg.adaptive.pm_ad_240p, 5);
        assert_eq!(cfg.adaptive.pm_ad_288p, 0);
        assert_eq!(cfg.scaler, ScalerSettings::default());
    }

    #[test]
    fn scaler_enums_parse_snake_case() {
        let cfg = OperatingConfig::from_toml_str(
            r#"
            [scaler]
            out_mode = "out1080p"
            framelock = "off50_hz"
            aspect = "aspect16x9"
            "#,
        );
        // Enum renames follow serde's snake_case of the variant names.
        assert!(cfg.is_ok());
    }

    #[test]
    fn bad_toml_is_a_parse_error() {
        let err = OperatingConfig::from_toml_str("oper_mode = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
