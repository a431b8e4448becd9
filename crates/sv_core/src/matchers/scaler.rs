//! Scaler mode matcher.
//!
//! The scaler can render any input into any output raster, so matching is
//! about policy rather than arithmetic: framelock to the input when
//! configured and possible, otherwise free-run the output at the target
//! rate closest to the configured preference.

use tracing::debug;

use super::framelock::{framelock_config, FramelockMatch, TargetAdIds, TargetSms};
use super::{MatchError, MatchResult};
use crate::catalog::{Catalog, AD_MODE_ID_MAP};
use crate::config::OperatingConfig;
use crate::models::{
    AdMode, MultConfig, ResolvedMode, SamplingMode, SamplingPreset, ScalerAspect, ScalerFramelock,
};

/// 50/60 Hz output target pair per [`ScalerOutMode`](crate::models::ScalerOutMode)
/// row.
const PM_SCL_MAP: [[Option<AdMode>; 2]; 9] = [
    [None, Some(AdMode::Ad480p)],
    [Some(AdMode::Ad576p), None],
    [None, Some(AdMode::Ad720p60)],
    [None, Some(AdMode::Ad1280x1024p60)],
    [Some(AdMode::Ad1080p50Cr), Some(AdMode::Ad1080p60Lb)],
    [None, Some(AdMode::Ad1600x1200p60)],
    [Some(AdMode::Ad1920x1200p50), Some(AdMode::Ad1920x1200p60)],
    [Some(AdMode::Ad1920x1440p50), Some(AdMode::Ad1920x1440p60)],
    [Some(AdMode::Ad2560x1440p50), Some(AdMode::Ad2560x1440p60)],
];

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
const SM_480I: [SamplingMode; 2] = [SamplingMode::Gen4x3, SamplingMode::OptDtv480i];
const SM_576I: [SamplingMode; 2] = [SamplingMode::Gen4x3, SamplingMode::OptDtv576i];
const SM_480P: [SamplingMode; 3] = [
    SamplingMode::Gen4x3,
    SamplingMode::OptDtv480p,
    SamplingMode::OptVga480p60,
];
const SM_576P: [SamplingMode; 2] = [SamplingMode::Gen4x3, SamplingMode::OptDtv576p];

fn sm_target(map: &[SamplingMode], sel: u8) -> SamplingMode {
    map.get(sel as usize).copied().unwrap_or(map[0])
}

/// Scan the sampling presets for the one whose line count sits closest to
/// the measured input.
fn closest_smp_preset<'a>(
    vm_in: &ResolvedMode,
    target_sms: &TargetSms,
    catalog: &'a Catalog,
) -> Option<&'a SamplingPreset> {
    let mut mindiff_lines: u16 = 1000;
    let mut best = None;

    for smp in catalog.smp_presets() {
        if vm_in.timings.interlaced == smp.timings.interlaced
            && (smp.timings.v_hz_max == 0 || vm_in.timings.v_hz_max <= smp.timings.v_hz_max)
            && target_sms[smp.group as usize] == Some(smp.sm)
        {
            let diff_lines = vm_in.timings.v_total.abs_diff(smp.timings.v_total);
            if diff_lines < mindiff_lines {
                mindiff_lines = diff_lines;
                best = Some(smp);
            }
            if mindiff_lines == 0 {
                break;
            }
        }
    }

    best
}

/// Match the input for scaler output.
///
/// On a framelock match the output frame rate locks to the input; otherwise
/// the output free-runs at the target preset's own rate and an analog input
/// is sampled with the closest-line-count preset. The image is then placed
/// inside the output raster per the configured aspect ratio.
pub fn scaler_mode(
    vm_in: &mut ResolvedMode,
    catalog: &Catalog,
    cc: &OperatingConfig,
) -> MatchResult<(ResolvedMode, MultConfig)> {
    let scl = &cc.scaler;

    // Unlike the adaptive multiplier, the output target is independent of
    // the input group, so every group shares the configured pair.
    let pair = PM_SCL_MAP[scl.out_mode as usize];
    let target_ad_ids: TargetAdIds = [pair; 9];
    let target_sms: TargetSms = [
        Some(SamplingMode::OptPcHdtv),
        Some(sm_target(&SM_240P_288P, scl.sm_scl_240p_288p)),
        Some(sm_target(&SM_240P_288P, scl.sm_scl_240p_288p)),
        Some(SamplingMode::OptPcHdtv),
        Some(sm_target(&SM_480I, scl.sm_scl_480i_576i)),
        Some(sm_target(&SM_576I, scl.sm_scl_480i_576i)),
        Some(sm_target(&SM_480P, scl.sm_scl_480p)),
        Some(sm_target(&SM_576P, scl.sm_scl_576p)),
        Some(SamplingMode::OptPcHdtv),
    ];

    let mut h_skip: u8 = 0;
    let mut locked_out = None;
    let mut freerun_target = None;

    match scl.framelock {
        ScalerFramelock::On => {
            match framelock_config(vm_in, &target_ad_ids, &target_sms, catalog) {
                Some(m) => {
                    h_skip = match &m {
                        FramelockMatch::Adaptive { preset, .. } => {
                            catalog.smp_preset(preset.smp_preset).h_skip
                        }
                        FramelockMatch::Passthru { smp, .. } => smp.h_skip,
                    };
                    locked_out = Some(m.into_output());
                }
                None => freerun_target = pair[0].or(pair[1]),
            }
        }
        ScalerFramelock::Off50Hz => freerun_target = pair[0].or(pair[1]),
        ScalerFramelock::Off60Hz => freerun_target = pair[1].or(pair[0]),
    }

    let framelock = locked_out.is_some();
    let vm_out = match locked_out {
        Some(out) => out,
        None => {
            let target = freerun_target.ok_or(MatchError::NoMatchingPreset)?;

            // Analog sources still need a sampling preset; pick the one
            // with the closest line count.
            if vm_in.timings.h_total == 0 {
                let smp = closest_smp_preset(vm_in, &target_sms, catalog)
                    .ok_or(MatchError::NoMatchingPreset)?;

                vm_in.timings.h_active = smp.timings.h_active;
                vm_in.timings.v_active = smp.timings.v_active;
                vm_in.timings.h_synclen = smp.timings.h_synclen;
                vm_in.timings.v_synclen = smp.timings.v_synclen;
                vm_in.timings.h_backporch = smp.timings.h_backporch;
                vm_in.timings.v_backporch = smp.timings.v_backporch;
                vm_in.timings.h_total = smp.timings.h_total;
                vm_in.timings.h_total_adj = smp.timings.h_total_adj;
                vm_in.sampler_phase = smp.sampler_phase;
                vm_in.type_mask = smp.type_mask;
                vm_in.name = smp.name.to_string();

                h_skip = smp.h_skip;
            }

            catalog.std_mode(AD_MODE_ID_MAP[target as usize]).resolve()
        }
    };

    let mut vm_conf = MultConfig {
        h_skip,
        framelock,
        ..MultConfig::default()
    };

    let out_h = u32::from(vm_out.timings.h_active);
    let out_v = u32::from(vm_out.timings.v_active);
    let aspect: Option<(u32, u32)> = match scl.aspect {
        ScalerAspect::Aspect4x3 => Some((4, 3)),
        ScalerAspect::Aspect16x9 => Some((16, 9)),
        ScalerAspect::Aspect8x7 => Some((8, 7)),
        ScalerAspect::Source => Some((
            u32::from(vm_in.timings.h_active),
            u32::from(vm_in.timings.v_active),
        )),
        ScalerAspect::Full => None,
    };

    match aspect {
        Some((num, den)) => {
            if out_v * num <= out_h * den {
                // Pillarbox
                vm_conf.y_size = vm_out.timings.v_active;
                vm_conf.x_size = (num * out_v / den) as u16;
                vm_conf.x_offset = ((out_h - u32::from(vm_conf.x_size)) / 2) as i16;
            } else {
                // Letterbox
                vm_conf.x_size = vm_out.timings.h_active;
                vm_conf.y_size = (den * out_h / num) as u16;
                vm_conf.y_offset = ((out_v - u32::from(vm_conf.y_size)) / 2) as i16;
            }
        }
        None => {
            vm_conf.x_size = vm_out.timings.h_active;
            vm_conf.y_size = vm_out.timings.v_active;
        }
    }

    debug!(
        input = vm_in.name,
        output = vm_out.name,
        framelock,
        x_size = vm_conf.x_size,
        y_size = vm_conf.y_size,
        "scaler match"
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
    fn analog_1080i_framelocks_to_1080p_passthrough() {
        let catalog = Catalog::default();
        let mut vm_in = measured(1125, 60, true);
        let cc = OperatingConfig::default(); // 1080p output, framelock on, 4:3

        let (vm_out, vm_conf) = scaler_mode(&mut vm_in, &catalog, &cc).unwrap();
        // The 50 Hz half of the target pair is checked first and the
        // 1125-line raster fits it just as well.
        assert_eq!(vm_out.name, "1080p_50");
        assert!(vm_conf.framelock);
        // Interlace fold doubles the source clock; the fractional PLL stays
        // unused on an integer-multiple lock.
        assert_eq!(vm_out.pclk_mult, 2);
        assert_eq!(vm_out.pll_conf.outdiv, 0);
        assert_eq!(vm_out.pll_conf.fb_p1, 0);
        // 4:3 pillarbox inside 1920x1080.
        assert_eq!(vm_conf.x_size, 1440);
        assert_eq!(vm_conf.x_offset, 240);
        assert_eq!(vm_conf.y_size, 1080);
    }

    #[test]
    fn freerun_60hz_picks_closest_sampling_preset() {
        let catalog = Catalog::default();
        let mut vm_in = measured(263, 60, false);
        let mut cc = OperatingConfig::default();
        cc.scaler.framelock = ScalerFramelock::Off60Hz;

        let (vm_out, vm_conf) = scaler_mode(&mut vm_in, &catalog, &cc).unwrap();
        assert_eq!(vm_out.name, "1080p_60");
        assert!(!vm_conf.framelock);
        // Closest line count wins; the measured total is kept.
        assert_eq!(vm_in.name, "720x240");
        assert_eq!(vm_in.timings.h_total, 858);
        assert_eq!(vm_in.timings.v_total, 263);
    }

    #[test]
    fn framelock_on_falls_back_to_freerun() {
        let catalog = Catalog::default();
        // 300 lines matches no framelock row of any kind.
        let mut vm_in = measured(300, 60, false);
        let cc = OperatingConfig::default();

        let (vm_out, vm_conf) = scaler_mode(&mut vm_in, &catalog, &cc).unwrap();
        assert!(!vm_conf.framelock);
        // The 50 Hz target is preferred when both exist.
        assert_eq!(vm_out.name, "1080p_50");
        // 288p presets cap at 55 Hz, so the 240p preset is closest.
        assert_eq!(vm_in.name, "720x240");
    }

    #[test]
    fn adaptive_framelock_carries_sampling_h_skip() {
        let catalog = Catalog::default();
        let mut vm_in = measured(262, 60, false);
        let mut cc = OperatingConfig::default();
        cc.scaler.out_mode = crate::models::ScalerOutMode::Out480p;
        cc.scaler.sm_scl_240p_288p = 1; // SNES 256-column sampling

        let (vm_out, vm_conf) = scaler_mode(&mut vm_in, &catalog, &cc).unwrap();
        assert_eq!(vm_out.name, "480p");
        assert!(vm_conf.framelock);
        assert_eq!(vm_in.name, "SNES 256x240");
        assert_eq!(vm_conf.h_skip, 3);
        // Framelocked output runs from the fractional PLL.
        assert_eq!(vm_out.pclk_mult, 0);
        assert_ne!(vm_out.pll_conf.fb_p1, 0);
    }

    #[test]
    fn letterbox_wide_aspect_in_narrow_raster() {
        let catalog = Catalog::default();
        let mut vm_in = measured(263, 60, false);
        let mut cc = OperatingConfig::default();
        cc.scaler.out_mode = crate::models::ScalerOutMode::Out1280x1024;
        cc.scaler.framelock = ScalerFramelock::Off60Hz;
        cc.scaler.aspect = ScalerAspect::Aspect16x9;

        let (vm_out, vm_conf) = scaler_mode(&mut vm_in, &catalog, &cc).unwrap();
        assert_eq!(vm_out.name, "1280x1024_60");
        assert_eq!(vm_conf.x_size, 1280);
        assert_eq!(vm_conf.y_size, 720);
        assert_eq!(vm_conf.y_offset, 152);
        assert_eq!(vm_conf.x_offset, 0);
    }

    #[test]
    fn matching_aspect_fills_1080p_exactly() {
        let catalog = Catalog::default();
        let mut vm_in = measured(263, 60, false);
        let mut cc = OperatingConfig::default();
        cc.scaler.framelock = ScalerFramelock::Off60Hz;
        cc.scaler.aspect = ScalerAspect::Aspect16x9;

        let (_, vm_conf) = scaler_mode(&mut vm_in, &catalog, &cc).unwrap();
        // 16:9 into 1920x1080 is a borderline pillarbox with no bars.
        assert_eq!(vm_conf.x_size, 1920);
        assert_eq!(vm_conf.y_size, 1080);
        assert_eq!(vm_conf.x_offset, 0);
        assert_eq!(vm_conf.y_offset, 0);
    }

    #[test]
    fn full_aspect_fills_the_raster() {
        let catalog = Catalog::default();
        let mut vm_in = measured(263, 60, false);
        let mut cc = OperatingConfig::default();
        cc.scaler.framelock = ScalerFramelock::Off60Hz;
        cc.scaler.aspect = ScalerAspect::Full;

        let (vm_out, vm_conf) = scaler_mode(&mut vm_in, &catalog, &cc).unwrap();
        assert_eq!(vm_conf.x_size, vm_out.timings.h_active);
        assert_eq!(vm_conf.y_size, vm_out.timings.v_active);
        assert_eq!(vm_conf.x_offset, 0);
        assert_eq!(vm_conf.y_offset, 0);
    }

    #[test]
    fn digital_freerun_keeps_measured_input() {
        let catalog = Catalog::default();
        let mut vm_in = measured(263, 60, false);
        vm_in.timings.h_total = 858;
        vm_in.timings.h_active = 720;
        vm_in.timings.v_active = 240;
        vm_in.name = "hdmi".to_string();
        let mut cc = OperatingConfig::default();
        cc.scaler.framelock = ScalerFramelock::Off60Hz;

        let (_, vm_conf) = scaler_mode(&mut vm_in, &catalog, &cc).unwrap();
        assert_eq!(vm_in.name, "hdmi");
        assert_eq!(vm_conf.h_skip, 0);
    }
}
