//! SV Core - mode-matching engine for a video scan converter
//!
//! This crate contains the timing analysis and output mode selection logic
//! with zero hardware dependencies. It decides, for a measured input signal,
//! which output video mode to produce and how the line multiplier / scaler
//! datapath must be configured. Chip drivers and register programming live
//! in the firmware layers that consume the results.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod matchers;
pub mod models;
pub mod orchestrator;
pub mod timing;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
