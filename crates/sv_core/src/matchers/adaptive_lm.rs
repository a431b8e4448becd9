//! Adaptive line multiplier matcher.
//!
//! Unlike the pure multiplier, the output here runs from a fractional PLL
//! configuration that locks the output frame rate to the input, so any of
//! the standard output rasters can be targeted regardless of the input
//! line count. The line buffer geometry is computed so the read pointer
//! never overtakes the write pointer.

use tracing::debug;

use super::framelock::{framelock_config, FramelockMatch, TargetAdIds, TargetSms};
use super::{MatchError, MatchResult};
use crate::catalog::Catalog;
use crate::config::OperatingConfig;
use crate::models::{AdMode, MultConfig, ResolvedMode, SamplingMode};

const PM_AD_240P: [Option<AdMode>; 11] = [
    None,
    Some(AdMode::Ad480p),
    Some(AdMode::Ad720p60),
    Some(AdMode::Ad1280x1024p60),
    Some(AdMode::Ad1080i60Lb),
    Some(AdMode::Ad1080p60Lb),
    Some(AdMode::Ad1080p60Cr),
    Some(AdMode::Ad1600x1200p60),
    Some(AdMode::Ad1920x1200p60),
    Some(AdMode::Ad1920x1440p60),
    Some(AdMode::Ad2560x1440p60),
];
const PM_AD_288P: [Option<AdMode>; 7] = [
    None,
    Some(AdMode::Ad576p),
    Some(AdMode::Ad1080i50Cr),
    Some(AdMode::Ad1080p50Cr),
    Some(AdMode::Ad1920x1200p50),
    Some(AdMode::Ad1920x1440p50),
    Some(AdMode::Ad2560x1440p50),
];
const PM_AD_480I: [Option<AdMode>; 7] = [
    None,
    Some(AdMode::Ad240p),
    Some(AdMode::Ad1280x1024p60),
    Some(AdMode::Ad1080i60Lb),
    Some(AdMode::Ad1080p60Lb),
    Some(AdMode::Ad1920x1440p60),
    Some(AdMode::Ad2560x1440p60),
];
const PM_AD_576I: [Option<AdMode>; 4] = [
    None,
    Some(AdMode::Ad288p),
    Some(AdMode::Ad1080i50Cr),
    Some(AdMode::Ad1080p50Cr),
];
const PM_AD_480P: [Option<AdMode>; 7] = PM_AD_480I;
const PM_AD_576P: [Option<AdMode>; 3] = [None, Some(AdMode::Ad288p), Some(AdMode::Ad1920x1200p50)];

const SM_240P_288P: [SamplingMode; 16] = [
    SamplingMode::Gen4x3,
    SamplingMode::OptSnes256Col,
    SamplingMode::OptSnes512Col,
    SamplingMode::OptMd256Col,
    SamplingMode::OptMd320Col,
    SamplingMode::OptPsx256Col,
    SamplingMode::OptPsx320Col,
    SamplingMode::OptPsx384Col,
    SamplingMode::OptPsx512Col,
    SamplingMode::OptPsx640Col,
    SamplingMode::OptSat320Col,
    SamplingMode::OptSat352Col,
    SamplingMode::OptSat640Col,
    SamplingMode::OptSat704Col,
    SamplingMode::OptN64320Col,
    SamplingMode::OptN64640Col,
];
const SM_480I: [SamplingMode; 4] = [
    SamplingMode::Gen4x3,
    SamplingMode::Gen16x9,
    SamplingMode::OptDtv480i,
    SamplingMode::OptDtv480iWs,
];
// DTV 576i has no widescreen sampling variant; the last selector position
// maps to the same preset.
const SM_576I: [SamplingMode; 4] = [
    SamplingMode::Gen4x3,
    SamplingMode::Gen16x9,
    SamplingMode::OptDtv576i,
    SamplingMode::OptDtv576i,
];
const SM_480P: [SamplingMode; 5] = [
    SamplingMode::Gen4x3,
    SamplingMode::Gen16x9,
    SamplingMode::OptDtv480p,
    SamplingMode::OptDtv480pWs,
    SamplingMode::OptVga480p60,
];
const SM_576P: [SamplingMode; 1] = [SamplingMode::Gen4x3];

fn ad_target(map: &[Option<AdMode>], sel: u8) -> Option<AdMode> {
    map.get(sel as usize).copied().flatten()
}

fn sm_target(map: &[SamplingMode], sel: u8) -> Option<SamplingMode> {
    map.get(sel as usize).copied()
}

/// Per-group framelock targets from the adaptive multiplier configuration.
/// The 384p and 1080i groups have no adaptive targets.
pub(super) fn adaptive_targets(cc: &OperatingConfig) -> (TargetAdIds, TargetSms) {
    let ad = &cc.adaptive;
    let target_ad_ids: TargetAdIds = [
        [None, None],
        [ad_target(&PM_AD_240P, ad.pm_ad_240p), None],
        [ad_target(&PM_AD_288P, ad.pm_ad_288p), None],
        [None, None],
        [ad_target(&PM_AD_480I, ad.pm_ad_480i), None],
        [ad_target(&PM_AD_576I, ad.pm_ad_576i), None],
        [ad_target(&PM_AD_480P, ad.pm_ad_480p), None],
        [ad_target(&PM_AD_576P, ad.pm_ad_576p), None],
        [None, None],
    ];
    let target_sms: TargetSms = [
        None,
        sm_target(&SM_240P_288P, ad.sm_ad_240p_288p),
        sm_target(&SM_240P_288P, ad.sm_ad_240p_288p),
        None,
        sm_target(&SM_480I, ad.sm_ad_480i_576i),
        sm_target(&SM_576I, ad.sm_ad_480i_576i),
        sm_target(&SM_480P, ad.sm_ad_480p),
        sm_target(&SM_576P, ad.sm_ad_576p),
        None,
    ];
    (target_ad_ids, target_sms)
}

/// Match the input against the adaptive mode table.
///
/// Only a row with a fractional PLL configuration qualifies; an
/// integer-passthrough framelock is not an adaptive mode and yields an
/// error so the caller can fall back to pure line multiplication.
pub fn adaptive_lm_mode(
    vm_in: &mut ResolvedMode,
    catalog: &Catalog,
    cc: &OperatingConfig,
) -> MatchResult<(ResolvedMode, MultConfig)> {
    let (target_ad_ids, target_sms) = adaptive_targets(cc);

    let (vm_out, ad_preset) =
        match framelock_config(vm_in, &target_ad_ids, &target_sms, catalog) {
            Some(FramelockMatch::Adaptive { out, preset }) => (out, preset),
            Some(FramelockMatch::Passthru { .. }) | None => {
                return Err(MatchError::NoMatchingPreset)
            }
        };

    let smp = catalog.smp_preset(ad_preset.smp_preset);

    let in_interlace_mult: i32 = if vm_in.timings.interlaced { 2 } else { 1 };
    let out_interlace_mult: i32 = if vm_out.timings.interlaced { 2 } else { 1 };

    let mut vm_conf = MultConfig {
        x_rpt: ad_preset.x_rpt,
        y_rpt: ad_preset.y_rpt,
        h_skip: smp.h_skip,
        framelock: true,
        ..MultConfig::default()
    };

    let x_mult = i32::from(vm_conf.x_rpt) + 1;
    let x_offset = (i32::from(vm_out.timings.h_active)
        - i32::from(vm_in.timings.h_active) * x_mult)
        / 2
        + i32::from(ad_preset.x_offset_i);
    vm_conf.x_offset = x_offset as i16;
    vm_conf.x_start_lb = if x_offset >= 0 {
        0
    } else {
        (-x_offset / x_mult) as u16
    };
    vm_conf.x_size =
        (i32::from(vm_in.timings.h_active) * x_mult).min(4095) as u16;

    if vm_conf.y_rpt == -1 {
        // Half-rate mode: two input fields fold into one output frame.
        let y_start_lb = (i32::from(vm_in.timings.v_active)
            - i32::from(vm_out.timings.v_active) * 2)
            / 2
            + i32::from(ad_preset.y_offset_i) * 2;
        vm_conf.y_start_lb = y_start_lb as i16;
        vm_conf.y_offset = (-y_start_lb / 2) as i16;
        vm_conf.y_size = vm_in.timings.v_active / 2;
    } else {
        let y_mult = i32::from(vm_conf.y_rpt) + 1;
        let y_start_lb = (i32::from(vm_in.timings.v_active)
            - i32::from(vm_out.timings.v_active) / y_mult)
            / 2
            + i32::from(ad_preset.y_offset_i);
        vm_conf.y_start_lb = y_start_lb as i16;
        vm_conf.y_offset = (-y_mult * y_start_lb) as i16;
        vm_conf.y_size = (i32::from(vm_in.timings.v_active) * y_mult) as u16;
    }

    // Time (in output lines, rounded up) from source frame start until the
    // first visible line sits in the line buffer.
    let mut v_linediff = ((i32::from(vm_in.timings.v_synclen)
        + i32::from(vm_in.timings.v_backporch)
        + i32::from(vm_conf.y_start_lb.max(0))
        + 1)
        * i32::from(vm_out.timings.v_total)
        * in_interlace_mult)
        / (i32::from(vm_in.timings.v_total) * out_interlace_mult)
        + 1;

    // Output blanking lines remaining after that point give the frame start
    // offset.
    v_linediff = (i32::from(vm_out.timings.v_synclen)
        + i32::from(vm_out.timings.v_backporch)
        + i32::from(vm_conf.y_offset.max(0)))
        - v_linediff;

    // If the buffer is read faster than written, delay the output frame
    // start so the read pointer cannot catch the write pointer.
    let vtotal_ref = if vm_conf.y_rpt == -1 {
        i32::from(vm_in.timings.v_total) * out_interlace_mult / 2
    } else {
        i32::from(vm_in.timings.v_total)
            * out_interlace_mult
            * (i32::from(vm_conf.y_rpt) + 1)
    };
    if i32::from(vm_out.timings.v_total) * in_interlace_mult > vtotal_ref {
        v_linediff -= (i32::from(vm_in.timings.v_active)
            * i32::from(vm_out.timings.v_total)
            * in_interlace_mult)
            / (i32::from(vm_in.timings.v_total) * out_interlace_mult)
            - i32::from(vm_conf.y_size);
    }

    vm_conf.framesync_line = if v_linediff < 0 {
        (i32::from(vm_out.timings.v_total) / out_interlace_mult + v_linediff) as u16
    } else {
        v_linediff as u16
    };

    debug!(
        input = vm_in.name,
        output = vm_out.name,
        framesync_line = vm_conf.framesync_line,
        "adaptive LM match"
    );
    Ok((vm_out, vm_conf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Timings;

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

    #[test]
    fn generic_240p_to_480p_framelock() {
        let catalog = Catalog::default();
        let mut vm_in = measured(262, 60, false);
        let mut cc = OperatingConfig::default();
        cc.adaptive.pm_ad_240p = 1; // 480p target

        let (vm_out, vm_conf) = adaptive_lm_mode(&mut vm_in, &catalog, &cc).unwrap();
        assert_eq!(vm_out.name, "480p");
        assert_eq!(vm_out.pclk_mult, 0);
        assert_ne!(vm_out.pll_conf.fb_p1, 0);
        assert_eq!(vm_conf.x_rpt, 0);
        assert_eq!(vm_conf.y_rpt, 1);
        assert_eq!(vm_conf.x_offset, 0);
        assert_eq!(vm_conf.x_size, 720);
        assert_eq!(vm_conf.y_size, 480);
        // 19 blanking lines into a 525/262 rate ratio lands the write 39
        // lines in; 36 output blanking lines leaves -3, wrapped to 522.
        assert_eq!(vm_conf.framesync_line, 522);
        assert!(vm_conf.framelock);
    }

    #[test]
    fn snes_preset_centers_narrow_active_area() {
        let catalog = Catalog::default();
        let mut vm_in = measured(262, 60, false);
        let mut cc = OperatingConfig::default();
        cc.adaptive.pm_ad_240p = 1; // 480p target
        cc.adaptive.sm_ad_240p_288p = 1; // SNES 256-column sampling

        let (vm_out, vm_conf) = adaptive_lm_mode(&mut vm_in, &catalog, &cc).unwrap();
        assert_eq!(vm_out.name, "480p");
        assert_eq!(vm_in.name, "SNES 256x240");
        assert_eq!(vm_in.timings.h_total, 341);
        assert_eq!(vm_conf.x_rpt, 1);
        assert_eq!(vm_conf.h_skip, 3);
        assert_eq!(vm_conf.x_size, 512);
        assert_eq!(vm_conf.x_offset, (720 - 512) / 2);
        assert_eq!(vm_conf.x_start_lb, 0);
    }

    #[test]
    fn half_rate_folds_480p_to_240p() {
        let catalog = Catalog::default();
        let mut vm_in = measured(525, 60, false);
        let mut cc = OperatingConfig::default();
        cc.adaptive.pm_ad_480p = 1; // 240p target

        let (vm_out, vm_conf) = adaptive_lm_mode(&mut vm_in, &catalog, &cc).unwrap();
        assert_eq!(vm_out.name, "240p");
        assert_eq!(vm_conf.y_rpt, -1);
        assert_eq!(vm_conf.y_size, 240);
        assert_eq!(vm_conf.y_start_lb, 0);
        assert_eq!(vm_conf.y_offset, 0);
        // 37 input blanking lines scale to 19 output lines against the 18
        // blanking lines of the 240p raster.
        assert_eq!(vm_conf.framesync_line, 261);
    }

    #[test]
    fn framesync_line_stays_inside_the_output_frame() {
        // The frame start delay derives from the output blanking budget, so
        // a valid match can never place it beyond the frame.
        let catalog = Catalog::default();
        for target in 1..=10u8 {
            for v_total in [261u16, 262, 263, 264] {
                let mut vm_in = measured(v_total, 60, false);
                let mut cc = OperatingConfig::default();
                cc.adaptive.pm_ad_240p = target;

                let (vm_out, vm_conf) = adaptive_lm_mode(&mut vm_in, &catalog, &cc)
                    .unwrap_or_else(|_| panic!("no match for {v_total} lines, target {target}"));
                let frame_lines = vm_out.timings.v_total
                    >> u16::from(vm_out.timings.interlaced);
                assert!(
                    vm_conf.framesync_line < frame_lines,
                    "framesync {} outside {} ({} -> {})",
                    vm_conf.framesync_line,
                    frame_lines,
                    v_total,
                    vm_out.name
                );
            }
        }
    }

    #[test]
    fn passthrough_selector_yields_no_adaptive_mode() {
        let catalog = Catalog::default();
        let mut vm_in = measured(262, 60, false);
        let cc = OperatingConfig::default(); // all pm_ad selectors 0

        assert_eq!(
            adaptive_lm_mode(&mut vm_in, &catalog, &cc),
            Err(MatchError::NoMatchingPreset)
        );
    }

    #[test]
    fn groups_without_adaptive_targets_never_match() {
        let catalog = Catalog::default();
        // 1080i input: the adaptive multiplier has no targets for the group.
        let mut vm_in = measured(1125, 60, true);
        let mut cc = OperatingConfig::default();
        cc.adaptive.pm_ad_240p = 1;

        assert_eq!(
            adaptive_lm_mode(&mut vm_in, &catalog, &cc),
            Err(MatchError::NoMatchingPreset)
        );
    }

    #[test]
    fn out_of_range_selector_is_treated_as_off() {
        let catalog = Catalog::default();
        let mut vm_in = measured(262, 60, false);
        let mut cc = OperatingConfig::default();
        cc.adaptive.pm_ad_240p = 200;

        assert_eq!(
            adaptive_lm_mode(&mut vm_in, &catalog, &cc),
            Err(MatchError::NoMatchingPreset)
        );
    }
}
