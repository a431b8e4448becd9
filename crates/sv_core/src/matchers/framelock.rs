//! Framelocked preset lookup shared by the adaptive multiplier and the
//! scaler.

use tracing::debug;

use crate::catalog::{Catalog, AD_MODE_ID_MAP};
use crate::models::{
    AdMode, AdaptivePreset, PllFracConfig, ResolvedMode, SamplingMode, SamplingPreset, Timings,
    VideoGroup,
};

/// Result of a framelock search.
#[derive(Debug, Clone)]
pub enum FramelockMatch {
    /// An adaptive row matched: the output runs from the row's fractional
    /// PLL configuration.
    Adaptive {
        out: ResolvedMode,
        preset: &'static AdaptivePreset,
    },
    /// A sampling preset lines up with the target output raster, so the
    /// input passes through with an integer clock multiple.
    Passthru {
        out: ResolvedMode,
        smp: &'static SamplingPreset,
    },
}

impl FramelockMatch {
    pub fn output(&self) -> &ResolvedMode {
        match self {
            FramelockMatch::Adaptive { out, .. } => out,
            FramelockMatch::Passthru { out, .. } => out,
        }
    }

    pub fn into_output(self) -> ResolvedMode {
        match self {
            FramelockMatch::Adaptive { out, .. } => out,
            FramelockMatch::Passthru { out, .. } => out,
        }
    }
}

/// Per-group framelock targets: up to two output candidates (50/60 Hz) per
/// input group.
pub type TargetAdIds = [[Option<AdMode>; 2]; VideoGroup::COUNT];
/// Per-group sampling mode required for analog inputs.
pub type TargetSms = [Option<SamplingMode>; VideoGroup::COUNT];

/// Fill the not-yet-measured (zero) timing fields of a live input from the
/// preset it matched. The sampled line length and phase always come from
/// the preset since the measurement cannot provide them.
fn backfill_input(vm_in: &mut ResolvedMode, preset_t: &Timings) {
    if vm_in.timings.h_active == 0 {
        vm_in.timings.h_active = preset_t.h_active;
    }
    if vm_in.timings.v_active == 0 {
        vm_in.timings.v_active = preset_t.v_active;
    }
    // hsync length is only trusted when the backporch was measured too.
    if vm_in.timings.h_synclen == 0 || vm_in.timings.h_backporch == 0 {
        vm_in.timings.h_synclen = preset_t.h_synclen;
    }
    if vm_in.timings.v_synclen == 0 {
        vm_in.timings.v_synclen = preset_t.v_synclen;
    }
    if vm_in.timings.h_backporch == 0 {
        vm_in.timings.h_backporch = preset_t.h_backporch;
    }
    if vm_in.timings.v_backporch == 0 {
        vm_in.timings.v_backporch = preset_t.v_backporch;
    }
    vm_in.timings.h_total = preset_t.h_total;
    vm_in.timings.h_total_adj = preset_t.h_total_adj;
}

fn adopt_smp_preset(vm_in: &mut ResolvedMode, smp: &SamplingPreset) {
    backfill_input(vm_in, &smp.timings);
    vm_in.sampler_phase = smp.sampler_phase;
    vm_in.type_mask = smp.type_mask;
    if vm_in.name.is_empty() {
        vm_in.name = smp.name.to_string();
    }
}

/// Search for a framelocked configuration for the input.
///
/// Adaptive rows are checked first; if none fits, the sampling presets are
/// scanned for one whose frame layout equals a target output raster, which
/// allows integer-multiple passthrough. Digital inputs (known `h_total`)
/// match on exact line length instead of the configured sampling mode.
///
/// On a match the input descriptor is backfilled from the winning sampling
/// preset.
pub fn framelock_config(
    vm_in: &mut ResolvedMode,
    target_ad_ids: &TargetAdIds,
    target_sms: &TargetSms,
    catalog: &Catalog,
) -> Option<FramelockMatch> {
    // Adaptive rows first.
    for ad_preset in catalog.adaptive_modes() {
        let smp = catalog.smp_preset(ad_preset.smp_preset);

        if smp.timings.v_hz_max != 0 && vm_in.timings.v_hz_max > smp.timings.v_hz_max {
            continue;
        }

        let v_total_matches = if ad_preset.v_total_override != 0 {
            vm_in.timings.v_total == ad_preset.v_total_override
        } else {
            vm_in.timings.v_total == smp.timings.v_total
        };
        let group = smp.group as usize;

        if v_total_matches
            && (vm_in.timings.h_total == 0 || vm_in.timings.h_total == smp.timings.h_total)
            && vm_in.timings.interlaced == smp.timings.interlaced
            && (target_ad_ids[group][0] == Some(ad_preset.id)
                || target_ad_ids[group][1] == Some(ad_preset.id))
            && (vm_in.timings.h_total != 0 || target_sms[group] == Some(smp.sm))
        {
            adopt_smp_preset(vm_in, smp);

            let mut out = catalog.std_mode(AD_MODE_ID_MAP[ad_preset.id as usize]).resolve();
            out.pclk_mult = 0;
            out.pll_conf = ad_preset.pll_conf;

            debug!(target = out.name, smp = smp.name, "adaptive framelock match");
            return Some(FramelockMatch::Adaptive { out, preset: ad_preset });
        }
    }

    // Then look for a sampling preset that lines up with a target output
    // raster for integer passthrough.
    for smp in catalog.smp_presets() {
        if smp.timings.v_hz_max != 0 && vm_in.timings.v_hz_max > smp.timings.v_hz_max {
            continue;
        }

        let group = smp.group as usize;
        for target in target_ad_ids[group].iter().flatten() {
            let mode_preset = catalog.std_mode(AD_MODE_ID_MAP[*target as usize]);

            if vm_in.timings.v_total == smp.timings.v_total
                && vm_in.timings.v_total == mode_preset.timings.v_total
                && (vm_in.timings.h_total == 0
                    || (vm_in.timings.h_total == smp.timings.h_total
                        && vm_in.timings.h_total == mode_preset.timings.h_total))
                && vm_in.timings.interlaced == smp.timings.interlaced
                && (vm_in.timings.h_total != 0 || target_sms[group] == Some(smp.sm))
            {
                adopt_smp_preset(vm_in, smp);

                let mut out = mode_preset.resolve();
                out.pll_conf = PllFracConfig::default();
                // Interlaced input folded to a progressive output needs the
                // source clock doubled; otherwise passthrough is 1:1.
                out.pclk_mult = if vm_in.timings.interlaced && !mode_preset.timings.interlaced {
                    2
                } else {
                    1
                };

                debug!(target = out.name, smp = smp.name, "passthru framelock match");
                return Some(FramelockMatch::Passthru { out, smp });
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StdMode;

    fn measured(v_total: u16, v_hz_max: u8, interlaced: bool) -> ResolvedMode {
        ResolvedMode {
            timings: Timings {
                v_total,
                v_hz_max,
                interlaced,
                ..Timings::default()
            },
            ..ResolvedMode::default()
        }
    }

    fn targets_for(group: VideoGroup, id: AdMode, sm: SamplingMode) -> (TargetAdIds, TargetSms) {
        let mut ad_ids: TargetAdIds = Default::default();
        let mut sms: TargetSms = Default::default();
        ad_ids[group as usize][0] = Some(id);
        sms[group as usize] = Some(sm);
        (ad_ids, sms)
    }

    #[test]
    fn analog_240p_matches_generic_adaptive_row() {
        let catalog = Catalog::default();
        let mut vm_in = measured(262, 60, false);
        let (ad_ids, sms) = targets_for(VideoGroup::Grp240p, AdMode::Ad480p, SamplingMode::Gen4x3);

        let m = framelock_config(&mut vm_in, &ad_ids, &sms, &catalog)
            .expect("262-line input should match the generic 262 row");
        match m {
            FramelockMatch::Adaptive { out, preset } => {
                assert_eq!(preset.v_total_override, 262);
                assert_eq!(out.name, "480p");
                assert_eq!(out.pclk_mult, 0);
                assert_eq!(out.pll_conf, preset.pll_conf);
            }
            FramelockMatch::Passthru { .. } => panic!("expected adaptive match"),
        }
        // Backfilled from the 720x240 sampling preset.
        assert_eq!(vm_in.timings.h_total, 858);
        assert_eq!(vm_in.timings.h_active, 720);
        assert_eq!(vm_in.name, "720x240");
    }

    #[test]
    fn measured_fields_survive_backfill() {
        let catalog = Catalog::default();
        let mut vm_in = measured(262, 60, false);
        vm_in.timings.v_synclen = 4;
        let (ad_ids, sms) = targets_for(VideoGroup::Grp240p, AdMode::Ad480p, SamplingMode::Gen4x3);

        framelock_config(&mut vm_in, &ad_ids, &sms, &catalog).expect("match");
        assert_eq!(vm_in.timings.v_synclen, 4);
    }

    #[test]
    fn analog_1080i_passes_through_to_1080p_with_clock_doubling() {
        let catalog = Catalog::default();
        // 1125-line interlaced input, no adaptive 1080i row targets 1080p60.
        let mut vm_in = measured(1125, 60, true);
        let (ad_ids, sms) = targets_for(
            VideoGroup::Grp1080i,
            AdMode::Ad1080p60Lb,
            SamplingMode::OptPcHdtv,
        );

        let m = framelock_config(&mut vm_in, &ad_ids, &sms, &catalog)
            .expect("1080i should pass through to 1080p");
        match m {
            FramelockMatch::Passthru { out, smp } => {
                assert_eq!(out.name, "1080p_60");
                assert_eq!(out.pclk_mult, 2);
                assert_eq!(out.pll_conf.outdiv, 0);
                assert_eq!(smp.name, "1080i_60");
            }
            FramelockMatch::Adaptive { .. } => panic!("expected passthru match"),
        }
    }

    #[test]
    fn refresh_ceiling_rejects_fast_input() {
        let catalog = Catalog::default();
        // 70 Hz exceeds the 65 Hz ceiling of the generic 240p presets.
        let mut vm_in = measured(262, 70, false);
        let (ad_ids, sms) = targets_for(VideoGroup::Grp240p, AdMode::Ad480p, SamplingMode::Gen4x3);

        assert!(framelock_config(&mut vm_in, &ad_ids, &sms, &catalog).is_none());
    }

    #[test]
    fn wrong_interlace_does_not_match() {
        let catalog = Catalog::default();
        let mut vm_in = measured(262, 60, true);
        let (ad_ids, sms) = targets_for(VideoGroup::Grp240p, AdMode::Ad480p, SamplingMode::Gen4x3);

        assert!(framelock_config(&mut vm_in, &ad_ids, &sms, &catalog).is_none());
    }

    #[test]
    fn digital_input_matches_on_exact_line_length() {
        let catalog = Catalog::default();
        let mut vm_in = measured(262, 60, false);
        vm_in.timings.h_total = 858;
        // Sampling mode selector deliberately wrong: a known h_total must
        // override it.
        let (ad_ids, sms) = targets_for(
            VideoGroup::Grp240p,
            AdMode::Ad480p,
            SamplingMode::OptSnes256Col,
        );

        let m = framelock_config(&mut vm_in, &ad_ids, &sms, &catalog).expect("match");
        assert!(matches!(m, FramelockMatch::Adaptive { .. }));
    }

    #[test]
    fn no_target_configured_means_no_match() {
        let catalog = Catalog::default();
        let mut vm_in = measured(262, 60, false);
        let ad_ids: TargetAdIds = Default::default();
        let sms: TargetSms = Default::default();

        assert!(framelock_config(&mut vm_in, &ad_ids, &sms, &catalog).is_none());
    }

    #[test]
    fn passthru_output_is_the_default_table_row() {
        let catalog = Catalog::default();
        let mut vm_in = measured(750, 60, false);
        let (ad_ids, sms) = targets_for(VideoGroup::None, AdMode::Ad720p60, SamplingMode::OptPcHdtv);

        let m = framelock_config(&mut vm_in, &ad_ids, &sms, &catalog).expect("match");
        let out = m.output();
        let row = catalog.std_mode(StdMode::Mode720p60);
        assert_eq!(out.timings, row.timings);
        assert_eq!(out.pclk_mult, 1);
    }
}
