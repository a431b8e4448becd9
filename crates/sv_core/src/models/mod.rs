//! Data models for timings, presets and derived configurations.

mod enums;
mod mult_config;
mod presets;
mod timings;

pub use enums::{
    AdMode, HdmiVic, L5Fmt, ModeFlags, OperMode, PixelRep, S400pMode, S480pMode, SamplingMode,
    ScalerAspect, ScalerFramelock, ScalerOutMode, SmpPreset, StdMode, VideoGroup, VideoTypeMask,
};
pub use mult_config::MultConfig;
pub use presets::{AdaptivePreset, ModePreset, PllFracConfig, ResolvedMode, SamplingPreset};
pub use timings::Timings;
