//! Operating-mode dispatch over the matchers.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::errors::SelectionResult;
use crate::catalog::{Catalog, STD_MODE_SEQUENCE};
use crate::config::OperatingConfig;
use crate::matchers::{adaptive_lm_mode, pure_lm_mode, scaler_mode};
use crate::models::{MultConfig, OperMode, ResolvedMode, Timings};

/// Raw sync measurement from the input stage.
///
/// Analog sources only yield vertical counts; `h_total` and `h_synclen`
/// are known for digital sources (and for analog ones once the sampler
/// has been configured).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SignalMeasurement {
    pub h_total: Option<u16>,
    pub h_synclen: Option<u16>,
    pub v_total: u16,
    /// Refresh rate in units of 0.01 Hz.
    pub v_hz_x100: u32,
    pub interlaced: bool,
}

impl SignalMeasurement {
    /// Build the working input descriptor the matchers operate on. Fields
    /// the measurement cannot provide are left zero for backfill.
    pub fn to_resolved(self) -> ResolvedMode {
        ResolvedMode {
            timings: Timings {
                h_total: self.h_total.unwrap_or(0),
                h_synclen: self.h_synclen.unwrap_or(0),
                v_total: self.v_total,
                v_hz_x100: self.v_hz_x100,
                v_hz_max: ((self.v_hz_x100 + 50) / 100) as u8,
                interlaced: self.interlaced,
                ..Timings::default()
            },
            ..ResolvedMode::default()
        }
    }
}

/// A completed mode decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Operating mode that actually produced the result (the adaptive
    /// multiplier falls back to pure line multiplication).
    pub mode: OperMode,
    pub input: ResolvedMode,
    pub output: ResolvedMode,
    pub mult: MultConfig,
}

/// Dispatches measurements to the matcher for the configured operating
/// mode and keeps the most recent decision.
#[derive(Debug, Clone, Default)]
pub struct ModeSelector {
    catalog: Catalog,
    last: Option<Selection>,
}

impl ModeSelector {
    pub fn new(catalog: Catalog) -> Self {
        ModeSelector {
            catalog,
            last: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The most recent successful selection, if any.
    pub fn last_selection(&self) -> Option<&Selection> {
        self.last.as_ref()
    }

    /// Select an output mode for the measured input under the given
    /// configuration.
    ///
    /// A failed selection leaves the previous one in place.
    pub fn select_mode(
        &mut self,
        measurement: SignalMeasurement,
        cc: &OperatingConfig,
    ) -> SelectionResult<&Selection> {
        let mut vm_in = measurement.to_resolved();

        let (mode, output, mult) = match cc.oper_mode {
            OperMode::PureLm => {
                let (out, conf) = pure_lm_mode(&mut vm_in, &self.catalog, cc)?;
                (OperMode::PureLm, out, conf)
            }
            OperMode::AdaptiveLm => match adaptive_lm_mode(&mut vm_in, &self.catalog, cc) {
                Ok((out, conf)) => (OperMode::AdaptiveLm, out, conf),
                Err(err) => {
                    debug!(%err, "no adaptive mode, trying pure line multiplication");
                    let (out, conf) = pure_lm_mode(&mut vm_in, &self.catalog, cc)?;
                    (OperMode::PureLm, out, conf)
                }
            },
            OperMode::Scaler => {
                let (out, conf) = scaler_mode(&mut vm_in, &self.catalog, cc)?;
                (OperMode::Scaler, out, conf)
            }
        };

        info!(
            mode = %mode,
            input = vm_in.name,
            output = output.name,
            "mode selected"
        );
        Ok(self.last.insert(Selection {
            mode,
            input: vm_in,
            output,
            mult,
        }))
    }

    /// Standalone output mode for test pattern generation: no input, no
    /// multiplier configuration. The index wraps around the sequence.
    pub fn standard_mode(&self, idx: usize) -> (ResolvedMode, MultConfig) {
        let id = STD_MODE_SEQUENCE[idx % STD_MODE_SEQUENCE.len()];
        (self.catalog.std_mode(id).resolve(), MultConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchers::MatchError;
    use crate::orchestrator::SelectionError;

    fn measurement(v_total: u16, v_hz_x100: u32, interlaced: bool) -> SignalMeasurement {
        SignalMeasurement {
            v_total,
            v_hz_x100,
            interlaced,
            ..SignalMeasurement::default()
        }
    }

    #[test]
    fn refresh_rate_rounds_to_nearest_hz() {
        let vm = measurement(262, 5994, false).to_resolved();
        assert_eq!(vm.timings.v_hz_max, 60);
        assert_eq!(vm.timings.v_hz_x100, 5994);

        let vm = measurement(312, 5025, false).to_resolved();
        assert_eq!(vm.timings.v_hz_max, 50);
    }

    #[test]
    fn pure_lm_selection_with_default_config() {
        let mut sel = ModeSelector::default();
        let cc = OperatingConfig::default(); // pure LM, Line2x for 240p

        let s = sel
            .select_mode(measurement(263, 5994, false), &cc)
            .unwrap()
            .clone();
        assert_eq!(s.mode, OperMode::PureLm);
        assert_eq!(s.output.name, "240p x2");
        assert_eq!(sel.last_selection(), Some(&s));
    }

    #[test]
    fn adaptive_selection_reports_adaptive_mode() {
        let mut sel = ModeSelector::default();
        let mut cc = OperatingConfig::default();
        cc.oper_mode = OperMode::AdaptiveLm;
        cc.adaptive.pm_ad_240p = 1; // 480p target

        let s = sel.select_mode(measurement(262, 6000, false), &cc).unwrap();
        assert_eq!(s.mode, OperMode::AdaptiveLm);
        assert_eq!(s.output.name, "480p");
        assert_eq!(s.output.pclk_mult, 0);
    }

    #[test]
    fn adaptive_falls_back_to_pure_lm() {
        let mut sel = ModeSelector::default();
        let mut cc = OperatingConfig::default();
        cc.oper_mode = OperMode::AdaptiveLm; // all adaptive targets off

        let s = sel.select_mode(measurement(262, 6000, false), &cc).unwrap();
        assert_eq!(s.mode, OperMode::PureLm);
        assert_eq!(s.output.name, "240p x2");
    }

    #[test]
    fn scaler_selection_framelocks_by_default() {
        let mut sel = ModeSelector::default();
        let mut cc = OperatingConfig::default();
        cc.oper_mode = OperMode::Scaler;

        let s = sel.select_mode(measurement(263, 5994, false), &cc).unwrap();
        assert_eq!(s.mode, OperMode::Scaler);
        assert_eq!(s.output.name, "1080p_60");
        assert!(s.mult.framelock);
    }

    #[test]
    fn failed_selection_keeps_the_previous_one() {
        let mut sel = ModeSelector::default();
        let cc = OperatingConfig::default();

        sel.select_mode(measurement(263, 5994, false), &cc).unwrap();
        let err = sel
            .select_mode(measurement(2000, 6000, false), &cc)
            .unwrap_err();
        assert_eq!(err, SelectionError::Match(MatchError::NoMatchingPreset));
        assert_eq!(
            sel.last_selection().map(|s| s.output.name.as_str()),
            Some("240p x2")
        );
    }

    #[test]
    fn selection_is_deterministic() {
        let mut sel = ModeSelector::default();
        let mut cc = OperatingConfig::default();
        cc.oper_mode = OperMode::AdaptiveLm;
        cc.adaptive.pm_ad_240p = 1;
        let m = measurement(262, 6000, false);

        let first = sel.select_mode(m, &cc).unwrap().clone();
        let second = sel.select_mode(m, &cc).unwrap().clone();
        assert_eq!(first, second);
    }

    #[test]
    fn standard_mode_wraps_around_the_sequence() {
        let sel = ModeSelector::default();

        let (first, conf) = sel.standard_mode(0);
        assert_eq!(first.name, "240p");
        assert_eq!(conf, MultConfig::default());

        let (wrapped, _) = sel.standard_mode(STD_MODE_SEQUENCE.len());
        assert_eq!(wrapped.name, "240p");

        let (last, _) = sel.standard_mode(STD_MODE_SEQUENCE.len() - 1);
        assert_eq!(last.name, "2560x1440_60");
    }
}
