//! Mode matchers: map a measured input signal to an output mode and a
//! multiplier/scaler configuration.

mod adaptive_lm;
mod framelock;
mod pure_lm;
mod scaler;

pub use adaptive_lm::adaptive_lm_mode;
pub use framelock::{framelock_config, FramelockMatch};
pub use pure_lm::pure_lm_mode;
pub use scaler::scaler_mode;

use thiserror::Error;

/// Maximum distance (in lines) an input frame may fall short of a preset's
/// line count and still match it.
pub const LINECNT_MAX_TOLERANCE: u16 = 30;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    /// No preset is compatible with the measured input under the current
    /// configuration.
    #[error("no matching preset for input signal")]
    NoMatchingPreset,
}

pub type MatchResult<T> = Result<T, MatchError>;
