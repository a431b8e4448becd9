//! Pure line multiplier matcher.
//!
//! Scans the output mode catalog in priority order and picks the first
//! preset compatible with the input and the configured multiplier for its
//! group. The output dotclock stays an integer multiple of the input line
//! rate, so no resynthesis is involved.

use tracing::{debug, warn};

use super::{MatchError, MatchResult, LINECNT_MAX_TOLERANCE};
use crate::catalog::Catalog;
use crate::config::OperatingConfig;
use crate::models::{
    HdmiVic, L5Fmt, ModeFlags, MultConfig, PixelRep, ResolvedMode, S400pMode, S480pMode, Timings,
    VideoGroup,
};
use crate::timing::hv_multiply;

/// A single line-multiplier capability bit, resolved for dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LmVariant {
    Pt,
    L2,
    L2Col512,
    L2Col384,
    L2Col320,
    L2Col256,
    L2Narrow,
    L3Gen16x9,
    L3Gen4x3,
    L3Col512,
    L3Col384,
    L3Col320,
    L3Col256,
    L3Narrow,
    L4Gen4x3,
    L4Col512,
    L4Col384,
    L4Col320,
    L4Col256,
    L5Gen4x3,
    L5Col512,
    L5Col384,
    L5Col320,
    L5Col256,
}

impl LmVariant {
    /// Resolve a single-bit flag value. Returns `None` for an empty or
    /// multi-bit value, which indicates a misconfigured selector.
    fn from_flags(flags: ModeFlags) -> Option<LmVariant> {
        Some(match flags {
            ModeFlags::PT => LmVariant::Pt,
            ModeFlags::L2 => LmVariant::L2,
            ModeFlags::L2_512_COL => LmVariant::L2Col512,
            ModeFlags::L2_384_COL => LmVariant::L2Col384,
            ModeFlags::L2_320_COL => LmVariant::L2Col320,
            ModeFlags::L2_256_COL => LmVariant::L2Col256,
            ModeFlags::L2_240X360 => LmVariant::L2Narrow,
            ModeFlags::L3_GEN_16_9 => LmVariant::L3Gen16x9,
            ModeFlags::L3_GEN_4_3 => LmVariant::L3Gen4x3,
            ModeFlags::L3_512_COL => LmVariant::L3Col512,
            ModeFlags::L3_384_COL => LmVariant::L3Col384,
            ModeFlags::L3_320_COL => LmVariant::L3Col320,
            ModeFlags::L3_256_COL => LmVariant::L3Col256,
            ModeFlags::L3_240X360 => LmVariant::L3Narrow,
            ModeFlags::L4_GEN_4_3 => LmVariant::L4Gen4x3,
            ModeFlags::L4_512_COL => LmVariant::L4Col512,
            ModeFlags::L4_384_COL => LmVariant::L4Col384,
            ModeFlags::L4_320_COL => LmVariant::L4Col320,
            ModeFlags::L4_256_COL => LmVariant::L4Col256,
            ModeFlags::L5_GEN_4_3 => LmVariant::L5Gen4x3,
            ModeFlags::L5_512_COL => LmVariant::L5Col512,
            ModeFlags::L5_384_COL => LmVariant::L5Col384,
            ModeFlags::L5_320_COL => LmVariant::L5Col320,
            ModeFlags::L5_256_COL => LmVariant::L5Col256,
            _ => return None,
        })
    }
}

/// TMDS clocks below 25 MHz are out of HDMI spec and need pixel repetition
/// or upsampling.
fn below_tmds_floor(t: &Timings) -> bool {
    (u32::from(t.v_hz_max) * u32::from(t.v_total) * u32::from(t.h_total)) >> u32::from(t.interlaced)
        < 25_000_000
}

fn out_pclk_mult(conf: &MultConfig) -> u8 {
    ((u16::from(conf.x_rpt) + 1) * ((conf.y_rpt + 1) as u16) / (u16::from(conf.h_skip) + 1)) as u8
}

/// Multiply the output raster by the configured repeat factors and derive
/// the matching source clock multiplier.
fn mult_output(vm_out: &mut ResolvedMode, conf: &MultConfig) {
    hv_multiply(&mut vm_out.timings, conf.x_rpt + 1, (conf.y_rpt + 1) as u8);
    vm_out.pclk_mult = out_pclk_mult(conf);
}

/// Match the input against the catalog for pure line multiplication.
///
/// Zero timing fields of the input are backfilled from the winning preset.
/// Returns the derived output mode and multiplier configuration, or an
/// error when no catalog row accepts the input.
pub fn pure_lm_mode(
    vm_in: &mut ResolvedMode,
    catalog: &Catalog,
    cc: &OperatingConfig,
) -> MatchResult<(ResolvedMode, MultConfig)> {
    let lm = &cc.line_mult;

    // Per-multiplier target flag, indexed by the group's multiplier
    // selector. The group fixups below rewrite entries for groups with
    // fixed variants, and the rewrites persist for the rest of the scan.
    let mut valid_lm = [
        ModeFlags::PT,
        ModeFlags::L2.union(ModeFlags::L2.shl(lm.l2_mode)),
        ModeFlags::L3_GEN_16_9.shl(lm.l3_mode),
        ModeFlags::L4_GEN_4_3.shl(lm.l4_mode),
        ModeFlags::L5_GEN_4_3.shl(lm.l5_mode),
    ];

    let group_sel = |group: VideoGroup| -> u8 {
        match group {
            VideoGroup::None => 0,
            VideoGroup::Grp240p | VideoGroup::Grp288p => lm.pm_240p,
            VideoGroup::Grp384p => lm.pm_384p,
            VideoGroup::Grp480i | VideoGroup::Grp576i => lm.pm_480i,
            VideoGroup::Grp480p | VideoGroup::Grp576p => lm.pm_480p,
            VideoGroup::Grp1080i => lm.pm_1080i,
        }
    };

    // Upsampling only applies to analog inputs where we control sampling.
    let upsample2x = if vm_in.timings.h_total != 0 {
        false
    } else {
        lm.upsample2x
    };

    for mode in catalog.modes() {
        match mode.group {
            VideoGroup::Grp384p => {
                // Fixed Line2x/3x variants for 240x360.
                valid_lm[2] = ModeFlags::L2_240X360;
                valid_lm[3] = ModeFlags::L3_240X360;
                valid_lm[4] = ModeFlags::L3_GEN_16_9;
                // The two VGA 400p modes share a 449-line raster; an analog
                // input cannot tell them apart, so the user picks.
                if vm_in.timings.h_total == 0 && mode.timings.v_total == 449 {
                    if mode.name == "720x400_70" {
                        if lm.s400p_mode == S400pMode::Vga640x400 {
                            continue;
                        }
                    } else if mode.name == "640x400_70" && lm.s400p_mode == S400pMode::Vga720x400 {
                        continue;
                    }
                }
            }
            VideoGroup::Grp480i | VideoGroup::Grp576i => {
                // Fixed Line3x/4x variants for interlaced SD.
                valid_lm[2] = ModeFlags::L3_GEN_16_9;
                valid_lm[3] = ModeFlags::L4_GEN_4_3;
            }
            VideoGroup::Grp480p => {
                if mode.vic == HdmiVic::Vic480p60 {
                    match lm.s480p_mode {
                        S480pMode::Auto => {
                            // DTV 480p has a short hsync; VESA 640x480 does not.
                            if vm_in.timings.h_synclen > 82 {
                                continue;
                            }
                        }
                        S480pMode::Dtv480p => {}
                        S480pMode::Vesa640x480 => continue,
                    }
                } else if mode.vic == HdmiVic::Vic640x480p60 {
                    match lm.s480p_mode {
                        S480pMode::Auto | S480pMode::Vesa640x480 => {}
                        S480pMode::Dtv480p => continue,
                    }
                }
            }
            _ => {}
        }

        if mode.timings.v_hz_max != 0 && vm_in.timings.v_hz_max > mode.timings.v_hz_max {
            continue;
        }

        let sel = group_sel(mode.group) as usize;
        let mut target_lm = valid_lm.get(sel).copied().unwrap_or(valid_lm[0]);

        // Digital inputs are already sampled; derive repeat factors from the
        // selected multiplier instead of resampling, and match passthrough.
        let mut nonsampled_v_mult: u8 = 0;
        let mut nonsampled_h_mult: u8 = 0;
        if vm_in.timings.h_total != 0 {
            nonsampled_v_mult = if target_lm >= ModeFlags::L5_GEN_4_3 {
                5
            } else if target_lm >= ModeFlags::L4_GEN_4_3 {
                4
            } else if target_lm >= ModeFlags::L3_GEN_16_9 {
                3
            } else if target_lm >= ModeFlags::L2 {
                2
            } else {
                1
            };
            target_lm = ModeFlags::PT;
        }

        if target_lm.intersects(mode.flags)
            && vm_in.timings.interlaced == mode.timings.interlaced
            && vm_in.timings.v_total <= mode.timings.v_total + LINECNT_MAX_TOLERANCE
        {
            if vm_in.timings.h_active == 0 {
                vm_in.timings.h_active = mode.timings.h_active;
            }
            if vm_in.timings.v_active == 0 {
                vm_in.timings.v_active = mode.timings.v_active;
            }
            if vm_in.timings.h_synclen == 0 || vm_in.timings.h_backporch == 0 {
                vm_in.timings.h_synclen = mode.timings.h_synclen;
            }
            if vm_in.timings.v_synclen == 0 {
                vm_in.timings.v_synclen = mode.timings.v_synclen;
            }
            if vm_in.timings.h_backporch == 0 {
                vm_in.timings.h_backporch = mode.timings.h_backporch;
            }
            if vm_in.timings.v_backporch == 0 {
                vm_in.timings.v_backporch = mode.timings.v_backporch;
            }
            if vm_in.timings.h_total == 0 {
                vm_in.timings.h_total = mode.timings.h_total;
            }
            vm_in.timings.h_total_adj = mode.timings.h_total_adj;
            vm_in.sampler_phase = mode.sampler_phase;
            vm_in.type_mask = mode.type_mask;
            if vm_in.vic == HdmiVic::Unknown {
                vm_in.vic = mode.vic;
            }
            if vm_in.name.is_empty() {
                vm_in.name = mode.name.to_string();
            }

            let mut vm_out = vm_in.clone();
            vm_out.vic = HdmiVic::Unknown;
            vm_out.pclk_mult = 1;
            vm_out.tx_pixelrep = PixelRep::X1;
            vm_out.pixr_ifr = PixelRep::X1;

            let mut vm_conf = MultConfig::default();

            // Reduce to the single variant bit this row supports.
            target_lm = target_lm & mode.flags;

            if nonsampled_v_mult != 0 {
                if nonsampled_v_mult > 1 {
                    // Horizontal multiple approximating a 4:3 output from
                    // the multiplied height; +5/10 rounds to nearest.
                    nonsampled_h_mult = ((u32::from(vm_in.timings.v_active)
                        * u32::from(nonsampled_v_mult)
                        * 40
                        / 3
                        / u32::from(vm_in.timings.h_active)
                        + 5)
                        / 10) as u8;
                }

                vm_conf.x_rpt = nonsampled_h_mult.saturating_sub(1);
                vm_conf.y_rpt = (nonsampled_v_mult - 1) as i8;

                hv_multiply(
                    &mut vm_out.timings,
                    vm_conf.x_rpt + 1,
                    (vm_conf.y_rpt + 1) as u8,
                );

                if below_tmds_floor(&vm_out.timings) {
                    vm_out.tx_pixelrep = PixelRep::X2;
                    vm_out.pixr_ifr = PixelRep::X2;
                }

                vm_out.pclk_mult = out_pclk_mult(&vm_conf);
            } else {
                let variant = match LmVariant::from_flags(target_lm) {
                    Some(v) => v,
                    None => {
                        warn!(flags = target_lm.0, "invalid line multiplier target");
                        continue;
                    }
                };

                match variant {
                    LmVariant::Pt => {
                        vm_out.vic = vm_in.vic;
                        // Upsample or pixel-repeat to stay above the TMDS floor.
                        if below_tmds_floor(&vm_out.timings) {
                            if upsample2x {
                                hv_multiply(&mut vm_in.timings, 2, 1);
                                hv_multiply(&mut vm_out.timings, 2, 1);
                            } else {
                                vm_out.tx_pixelrep = PixelRep::X2;
                            }
                            vm_out.pixr_ifr = PixelRep::X2;
                        }
                        vm_out.pclk_mult = out_pclk_mult(&vm_conf);
                    }
                    LmVariant::L2 => {
                        vm_conf.y_rpt = 1;

                        // 384p/480p/576p and sub-1200-sample 960i lines are
                        // doubled horizontally as well.
                        let widen = matches!(
                            mode.group,
                            VideoGroup::Grp384p | VideoGroup::Grp480p | VideoGroup::Grp576p
                        ) || (mode.group == VideoGroup::Grp1080i
                            && mode.timings.h_total < 1200);
                        if widen {
                            if upsample2x {
                                hv_multiply(&mut vm_in.timings, 2, 1);
                                hv_multiply(&mut vm_out.timings, 2, 2);
                            } else {
                                hv_multiply(&mut vm_out.timings, 1, 2);
                                vm_out.tx_pixelrep = PixelRep::X2;
                            }
                        } else {
                            hv_multiply(&mut vm_out.timings, 1, 2);
                        }
                        vm_out.pclk_mult = out_pclk_mult(&vm_conf);
                    }
                    LmVariant::L2Col512 | LmVariant::L2Col384 | LmVariant::L2Col320 => {
                        vm_conf.y_rpt = 1;
                        vm_conf.x_rpt = 1;
                        vm_conf.h_skip = 1;
                        mult_output(&mut vm_out, &vm_conf);
                    }
                    LmVariant::L2Col256 => {
                        vm_conf.y_rpt = 1;
                        vm_conf.x_rpt = 2;
                        vm_conf.h_skip = 2;
                        mult_output(&mut vm_out, &vm_conf);
                    }
                    LmVariant::L2Narrow => {
                        vm_conf.y_rpt = 1;
                        vm_conf.x_rpt = 4;
                        vm_conf.h_skip = 4;
                        mult_output(&mut vm_out, &vm_conf);
                    }
                    LmVariant::L3Gen16x9 => {
                        vm_conf.y_rpt = 2;

                        // Interlaced SD is doubled horizontally as well.
                        if matches!(mode.group, VideoGroup::Grp480i | VideoGroup::Grp576i) {
                            if upsample2x {
                                hv_multiply(&mut vm_in.timings, 2, 1);
                                hv_multiply(&mut vm_out.timings, 2, 3);
                            } else {
                                hv_multiply(&mut vm_out.timings, 1, 3);
                                vm_out.tx_pixelrep = PixelRep::X2;
                            }
                        } else {
                            hv_multiply(&mut vm_out.timings, 1, 3);
                        }
                        vm_out.pclk_mult = out_pclk_mult(&vm_conf);
                    }
                    LmVariant::L3Gen4x3 => {
                        // Quadruple the source clock and center a 4:3 image
                        // inside a raster a third as wide.
                        vm_conf.y_rpt = 2;
                        vm_conf.x_size = vm_out.timings.h_active;
                        vm_out.timings.h_synclen /= 3;
                        vm_out.timings.h_backporch /= 3;
                        vm_out.timings.h_active /= 3;
                        vm_conf.x_offset = (vm_out.timings.h_active / 2) as i16;
                        vm_out.timings.h_total /= 3;
                        vm_out.timings.h_total_adj = 0;
                        hv_multiply(&mut vm_out.timings, 4, 3);
                        vm_out.pclk_mult = 4;
                    }
                    LmVariant::L3Col512 => {
                        vm_conf.y_rpt = 2;
                        vm_conf.x_rpt = 1;
                        vm_conf.h_skip = 1;
                        mult_output(&mut vm_out, &vm_conf);
                    }
                    LmVariant::L3Col384 => {
                        vm_conf.y_rpt = 2;
                        vm_conf.x_rpt = 2;
                        vm_conf.h_skip = 2;
                        mult_output(&mut vm_out, &vm_conf);
                    }
                    LmVariant::L3Col320 => {
                        vm_conf.y_rpt = 2;
                        vm_conf.x_rpt = 3;
                        vm_conf.h_skip = 3;
                        mult_output(&mut vm_out, &vm_conf);
                    }
                    LmVariant::L3Col256 => {
                        vm_conf.y_rpt = 2;
                        vm_conf.x_rpt = 4;
                        vm_conf.h_skip = 4;
                        mult_output(&mut vm_out, &vm_conf);
                    }
                    LmVariant::L3Narrow => {
                        vm_conf.y_rpt = 2;
                        vm_conf.x_rpt = 6;
                        vm_conf.h_skip = 6;
                        mult_output(&mut vm_out, &vm_conf);
                    }
                    LmVariant::L4Gen4x3 => {
                        vm_conf.y_rpt = 3;

                        // Interlaced SD is doubled horizontally as well.
                        if matches!(mode.group, VideoGroup::Grp480i | VideoGroup::Grp576i) {
                            if upsample2x {
                                hv_multiply(&mut vm_in.timings, 2, 1);
                                hv_multiply(&mut vm_out.timings, 2, 4);
                            } else {
                                hv_multiply(&mut vm_out.timings, 1, 4);
                                vm_out.tx_pixelrep = PixelRep::X2;
                            }
                        } else {
                            hv_multiply(&mut vm_out.timings, 1, 4);
                        }
                        vm_out.pclk_mult = out_pclk_mult(&vm_conf);
                    }
                    LmVariant::L4Col512 => {
                        vm_conf.y_rpt = 3;
                        vm_conf.x_rpt = 1;
                        vm_conf.h_skip = 1;
                        mult_output(&mut vm_out, &vm_conf);
                    }
                    LmVariant::L4Col384 => {
                        vm_conf.y_rpt = 3;
                        vm_conf.x_rpt = 2;
                        vm_conf.h_skip = 2;
                        mult_output(&mut vm_out, &vm_conf);
                    }
                    LmVariant::L4Col320 => {
                        vm_conf.y_rpt = 3;
                        vm_conf.x_rpt = 3;
                        vm_conf.h_skip = 3;
                        mult_output(&mut vm_out, &vm_conf);
                    }
                    LmVariant::L4Col256 => {
                        vm_conf.y_rpt = 3;
                        vm_conf.x_rpt = 4;
                        vm_conf.h_skip = 4;
                        mult_output(&mut vm_out, &vm_conf);
                    }
                    LmVariant::L5Gen4x3 => {
                        vm_conf.y_rpt = 4;
                        mult_output(&mut vm_out, &vm_conf);
                    }
                    LmVariant::L5Col512 => {
                        vm_conf.y_rpt = 4;
                        vm_conf.x_rpt = 2;
                        vm_conf.h_skip = 2;
                        mult_output(&mut vm_out, &vm_conf);
                    }
                    LmVariant::L5Col384 => {
                        vm_conf.y_rpt = 4;
                        vm_conf.x_rpt = 3;
                        vm_conf.h_skip = 3;
                        mult_output(&mut vm_out, &vm_conf);
                    }
                    LmVariant::L5Col320 => {
                        vm_conf.y_rpt = 4;
                        vm_conf.x_rpt = 4;
                        vm_conf.h_skip = 4;
                        mult_output(&mut vm_out, &vm_conf);
                    }
                    LmVariant::L5Col256 => {
                        vm_conf.y_rpt = 4;
                        vm_conf.x_rpt = 5;
                        vm_conf.h_skip = 5;
                        mult_output(&mut vm_out, &vm_conf);
                    }
                }
            }

            vm_out.name = format!("{} x{}", vm_in.name, vm_conf.y_rpt + 1);

            // Line5x output raster fixup.
            if vm_conf.y_rpt == 4 {
                // Widen the raster to 1920 and center the image.
                if lm.l5_fmt != L5Fmt::Fmt1600x1200 && nonsampled_h_mult == 0 {
                    vm_conf.x_size = vm_out.timings.h_active;
                    vm_conf.x_offset = ((1920 - vm_out.timings.h_active) / 2) as i16;
                    vm_out.timings.h_synclen = (vm_out.timings.h_total - 1920) / 4;
                    vm_out.timings.h_backporch = (vm_out.timings.h_total - 1920) / 2;
                    vm_out.timings.h_active = 1920;
                }

                // Crop the multiplied height down to 1080.
                if lm.l5_fmt == L5Fmt::Fmt1920x1080 {
                    vm_conf.y_start_lb = ((vm_out.timings.v_active - 1080) / 10) as i16;
                    vm_out.timings.v_backporch += 5 * vm_conf.y_start_lb as u16;
                    vm_out.timings.v_active = 1080;
                }
            }

            vm_conf.framesync_line = if vm_in.timings.interlaced {
                (vm_out.timings.v_total >> u16::from(vm_out.timings.interlaced))
                    - (vm_conf.y_rpt + 1) as u16
            } else {
                0
            };

            if vm_conf.x_size == 0 {
                vm_conf.x_size = vm_out.timings.h_active;
            }
            if vm_conf.y_size == 0 {
                vm_conf.y_size = vm_out.timings.v_active;
            }

            vm_conf.framelock = true;

            debug!(
                input = vm_in.name,
                output = vm_out.name,
                y_rpt = vm_conf.y_rpt,
                "pure LM match"
            );
            return Ok((vm_out, vm_conf));
        }
    }

    Err(MatchError::NoMatchingPreset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OperatingConfig;

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

    fn cfg_with_pm_240p(pm: u8) -> OperatingConfig {
        let mut cc = OperatingConfig::default();
        cc.line_mult.pm_240p = pm;
        cc
    }

    #[test]
    fn ntsc_240p_passthrough_gets_pixel_repetition() {
        let catalog = Catalog::default();
        let mut vm_in = measured(263, 60, false);
        let cc = cfg_with_pm_240p(0);

        let (vm_out, vm_conf) = pure_lm_mode(&mut vm_in, &catalog, &cc).unwrap();
        assert_eq!(vm_in.name, "240p");
        assert_eq!(vm_out.name, "240p x1");
        // 60 * 262 * 858 = 13.5 MHz, below the TMDS floor.
        assert_eq!(vm_out.tx_pixelrep, PixelRep::X2);
        assert_eq!(vm_out.pixr_ifr, PixelRep::X2);
        assert_eq!(vm_out.pclk_mult, 1);
        assert_eq!(vm_conf.y_rpt, 0);
        assert_eq!(vm_conf.framesync_line, 0);
    }

    #[test]
    fn line_count_tolerance_is_thirty() {
        let catalog = Catalog::default();
        let cc = cfg_with_pm_240p(0);

        // The last 240p-group row has v_total 262; 292 still matches it.
        let mut ok = measured(262 + LINECNT_MAX_TOLERANCE, 60, false);
        assert!(pure_lm_mode(&mut ok, &catalog, &cc).is_ok());

        let mut too_many = measured(262 + LINECNT_MAX_TOLERANCE + 1, 60, false);
        assert_eq!(
            pure_lm_mode(&mut too_many, &catalog, &cc),
            Err(MatchError::NoMatchingPreset)
        );
    }

    #[test]
    fn line2x_240p_doubles_vertically() {
        let catalog = Catalog::default();
        let mut vm_in = measured(262, 60, false);
        let cc = cfg_with_pm_240p(1);

        let (vm_out, vm_conf) = pure_lm_mode(&mut vm_in, &catalog, &cc).unwrap();
        assert_eq!(vm_out.name, "240p x2");
        assert_eq!(vm_conf.y_rpt, 1);
        assert_eq!(vm_conf.x_rpt, 0);
        assert_eq!(vm_out.timings.v_active, 480);
        assert_eq!(vm_out.timings.v_total, 524);
        assert_eq!(vm_out.timings.h_total, 858);
        assert_eq!(vm_out.pclk_mult, 2);
        assert_eq!(vm_out.tx_pixelrep, PixelRep::X1);
    }

    #[test]
    fn line5x_240p_produces_1920x1080_raster() {
        let catalog = Catalog::default();
        let mut vm_in = measured(262, 60, false);
        let cc = cfg_with_pm_240p(4);

        let (vm_out, vm_conf) = pure_lm_mode(&mut vm_in, &catalog, &cc).unwrap();
        // Matches the L5 generic 4:3 row (1600x240) and widens to 1920.
        assert_eq!(vm_in.name, "1600x240");
        assert_eq!(vm_out.name, "1600x240 x5");
        assert_eq!(vm_conf.y_rpt, 4);
        assert_eq!(vm_out.pclk_mult, 5);
        assert_eq!(vm_out.timings.h_active, 1920);
        assert_eq!(vm_out.timings.h_synclen, (2046 - 1920) / 4);
        assert_eq!(vm_out.timings.h_backporch, (2046 - 1920) / 2);
        assert_eq!(vm_conf.x_size, 1600);
        assert_eq!(vm_conf.x_offset, 160);
        // 1200-line multiple cropped to 1080 with the cut split 5:1.
        assert_eq!(vm_out.timings.v_active, 1080);
        assert_eq!(vm_conf.y_start_lb, 12);
        assert_eq!(vm_out.timings.v_backporch, 15 * 5 + 60);
        assert_eq!(vm_conf.y_size, 1080);
        // Progressive source: no framesync offset.
        assert_eq!(vm_conf.framesync_line, 0);
    }

    #[test]
    fn line5x_1600x1200_format_keeps_full_raster() {
        let catalog = Catalog::default();
        let mut vm_in = measured(262, 60, false);
        let mut cc = cfg_with_pm_240p(4);
        cc.line_mult.l5_fmt = L5Fmt::Fmt1600x1200;

        let (vm_out, vm_conf) = pure_lm_mode(&mut vm_in, &catalog, &cc).unwrap();
        assert_eq!(vm_out.timings.h_active, 1600);
        assert_eq!(vm_out.timings.v_active, 1200);
        assert_eq!(vm_conf.y_start_lb, 0);
    }

    #[test]
    fn interlaced_input_sets_framesync_near_frame_end() {
        let catalog = Catalog::default();
        let mut vm_in = measured(525, 60, true);
        let mut cc = OperatingConfig::default();
        cc.line_mult.pm_480i = 1; // Line2x (bob deinterlace)

        let (vm_out, vm_conf) = pure_lm_mode(&mut vm_in, &catalog, &cc).unwrap();
        assert_eq!(vm_in.name, "480i");
        assert!(!vm_out.timings.interlaced);
        assert_eq!(vm_out.timings.v_total, 525);
        assert_eq!(vm_conf.framesync_line, 525 - 2);
    }

    #[test]
    fn digital_240p_derives_horizontal_multiplier() {
        let catalog = Catalog::default();
        // HDMI source: h_total known up front.
        let mut vm_in = measured(262, 60, false);
        vm_in.timings.h_total = 858;
        vm_in.timings.h_active = 720;
        vm_in.timings.v_active = 240;
        let cc = cfg_with_pm_240p(4); // Line5x selector

        let (vm_out, vm_conf) = pure_lm_mode(&mut vm_in, &catalog, &cc).unwrap();
        // (240*5*40/3)/720 = 22.2 -> rounds to h_mult 2.
        assert_eq!(vm_conf.x_rpt, 1);
        assert_eq!(vm_conf.y_rpt, 4);
        assert_eq!(vm_out.pclk_mult, 10);
        assert_eq!(vm_out.timings.h_active, 1440);
        // Raster fixup to 1920 does not apply to derived multiples.
        assert_ne!(vm_out.timings.h_active, 1920);
    }

    #[test]
    fn vga400p_choice_follows_config() {
        let catalog = Catalog::default();
        let cc = OperatingConfig::default(); // s400p_mode = 640x400

        let mut vm_in = measured(449, 70, false);
        pure_lm_mode(&mut vm_in, &catalog, &cc).unwrap();
        assert_eq!(vm_in.name, "640x400_70");

        let mut cc2 = OperatingConfig::default();
        cc2.line_mult.s400p_mode = S400pMode::Vga720x400;
        let mut vm_in2 = measured(449, 70, false);
        pure_lm_mode(&mut vm_in2, &catalog, &cc2).unwrap();
        assert_eq!(vm_in2.name, "720x400_70");
    }

    #[test]
    fn s480p_auto_discriminates_on_hsync_length() {
        let catalog = Catalog::default();
        let cc = OperatingConfig::default();

        // Long hsync: VESA 640x480.
        let mut vesa = measured(525, 60, false);
        vesa.timings.h_synclen = 96;
        vesa.timings.h_backporch = 48;
        pure_lm_mode(&mut vesa, &catalog, &cc).unwrap();
        assert_eq!(vesa.name, "640x480_60");

        // Short hsync: DTV 480p.
        let mut dtv = measured(525, 60, false);
        dtv.timings.h_synclen = 62;
        dtv.timings.h_backporch = 60;
        pure_lm_mode(&mut dtv, &catalog, &cc).unwrap();
        assert_eq!(dtv.name, "480p");
    }

    #[test]
    fn group_fixups_persist_across_the_scan() {
        // After the scan has passed the 384p rows, the Line3x selector entry
        // for index 2 has been rewritten, so a 480p input with pm_480p=2
        // resolves to the rewritten variant rather than generic Line3x.
        let catalog = Catalog::default();
        let mut cc = OperatingConfig::default();
        cc.line_mult.pm_480p = 2;

        let mut vm_in = measured(525, 60, false);
        vm_in.timings.h_synclen = 62;
        // 480p rows sit after 480i in the table, which rewrites entry 2 to
        // generic Line3x 16:9; that flag is absent from the 480p rows, so
        // no pure LM mode exists for this selector.
        assert_eq!(
            pure_lm_mode(&mut vm_in, &catalog, &cc),
            Err(MatchError::NoMatchingPreset)
        );
    }

    #[test]
    fn upsample2x_doubles_sampling_instead_of_pixelrep() {
        let catalog = Catalog::default();
        let mut vm_in = measured(263, 60, false);
        let mut cc = cfg_with_pm_240p(0);
        cc.line_mult.upsample2x = true;

        let (vm_out, _) = pure_lm_mode(&mut vm_in, &catalog, &cc).unwrap();
        assert_eq!(vm_out.tx_pixelrep, PixelRep::X1);
        assert_eq!(vm_out.pixr_ifr, PixelRep::X2);
        assert_eq!(vm_in.timings.h_total, 2 * 858);
        assert_eq!(vm_out.timings.h_active, 1440);
    }
}
