//! Configuration loading and defaults.

mod settings;

pub use settings::{
    AdaptiveSettings, ConfigError, LineMultSettings, OperatingConfig, ScalerSettings,
};
