//! Timing arithmetic shared by the matchers.

use crate::models::{ResolvedMode, Timings, VideoTypeMask};

/// Multiply a mode's raster horizontally and vertically in place.
///
/// Saturates each field at its datapath register width; horizontal and
/// vertical sync overflow spills into the respective backporch so the total
/// blanking stays intact. An even vertical multiple of an interlaced mode
/// folds both fields into one progressive frame.
pub fn hv_multiply(t: &mut Timings, h_mult: u8, v_mult: u8) {
    let h_mult = u32::from(h_mult);
    let v_mult = u32::from(v_mult);

    let mut val = u32::from(t.h_synclen) * h_mult;
    let mut bp_extra = 0;
    if val >= (1 << 8) {
        t.h_synclen = (1 << 8) - 1;
        bp_extra = val - u32::from(t.h_synclen);
    } else {
        t.h_synclen = val as u16;
    }

    val = u32::from(t.h_backporch) * h_mult + bp_extra;
    t.h_backporch = if val >= (1 << 9) { (1 << 9) - 1 } else { val as u16 };

    val = u32::from(t.h_active) * h_mult;
    t.h_active = if val >= (1 << 11) { (1 << 11) - 1 } else { val as u16 };

    // The fractional line-length term is in units of 0.05 samples.
    t.h_total =
        (h_mult * u32::from(t.h_total) + (h_mult * u32::from(t.h_total_adj) * 5 + 50) / 100) as u16;

    val = u32::from(t.v_synclen) * v_mult;
    bp_extra = 0;
    if val >= (1 << 4) {
        t.v_synclen = (1 << 4) - 1;
        bp_extra = val - u32::from(t.v_synclen);
    } else {
        t.v_synclen = val as u8;
    }

    val = u32::from(t.v_backporch) * v_mult + bp_extra;
    t.v_backporch = if val >= (1 << 9) { (1 << 9) - 1 } else { val as u16 };

    val = u32::from(t.v_active) * v_mult;
    t.v_active = if val >= (1 << 11) { (1 << 11) - 1 } else { val as u16 };

    if t.interlaced && (v_mult % 2) == 0 {
        t.interlaced = false;
        t.v_total *= (v_mult / 2) as u16;
    } else {
        t.v_total *= v_mult as u16;
    }
}

/// Estimate the input dotclock from the measured line rate.
///
/// SDTV/EDTV sources are assumed to be sampled at the 27 MHz-family rate
/// (858 samples per line); for everything else the sampled line length is
/// authoritative.
pub fn estimate_dotclk(vm_in: &ResolvedMode, h_hz: u32) -> u32 {
    if vm_in.type_mask.intersects(VideoTypeMask::SDTV)
        || vm_in.type_mask.intersects(VideoTypeMask::EDTV)
    {
        h_hz * 858
    } else {
        u32::from(vm_in.timings.h_total) * h_hz
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::VIDEO_MODES_DEFAULT;
    use crate::models::StdMode;

    fn mode_240p() -> Timings {
        VIDEO_MODES_DEFAULT[StdMode::Mode240p as usize].timings
    }

    #[test]
    fn line5x_multiplies_raster() {
        let mut t = mode_240p();
        hv_multiply(&mut t, 1, 5);
        assert_eq!(t.v_active, 1200);
        assert_eq!(t.v_total, 1310);
        assert_eq!(t.v_synclen, 15);
        assert_eq!(t.h_total, 858);
    }

    #[test]
    fn sync_overflow_spills_into_backporch() {
        let mut t = mode_240p();
        t.h_synclen = 100;
        t.h_backporch = 10;
        hv_multiply(&mut t, 4, 1);
        assert_eq!(t.h_synclen, 255);
        // 4*100 - 255 = 145 excess lands in the backporch.
        assert_eq!(t.h_backporch, 4 * 10 + 145);
    }

    #[test]
    fn vertical_sync_overflow_spills_into_backporch() {
        let mut t = mode_240p();
        t.v_synclen = 5;
        t.v_backporch = 10;
        hv_multiply(&mut t, 1, 4);
        assert_eq!(t.v_synclen, 15);
        assert_eq!(t.v_backporch, 4 * 10 + 5);
    }

    #[test]
    fn active_saturates_at_field_width() {
        let mut t = mode_240p();
        t.h_active = 1600;
        hv_multiply(&mut t, 2, 1);
        assert_eq!(t.h_active, 2047);
    }

    #[test]
    fn fractional_total_rounds_to_nearest() {
        // MD 320x224: h_total 427 + 10 * 0.05 = 427.5 per line.
        let mut t = Timings {
            h_total: 427,
            h_total_adj: 10,
            ..Timings::default()
        };
        hv_multiply(&mut t, 2, 1);
        assert_eq!(t.h_total, 855);
        let mut t4 = Timings {
            h_total: 427,
            h_total_adj: 10,
            ..Timings::default()
        };
        hv_multiply(&mut t4, 4, 1);
        assert_eq!(t4.h_total, 1710);
    }

    #[test]
    fn even_multiple_folds_interlace() {
        let mut t = VIDEO_MODES_DEFAULT[StdMode::Mode480i as usize].timings;
        assert!(t.interlaced);
        hv_multiply(&mut t, 1, 2);
        assert!(!t.interlaced);
        assert_eq!(t.v_total, 525);
        assert_eq!(t.v_active, 480);
    }

    #[test]
    fn odd_multiple_keeps_interlace() {
        let mut t = VIDEO_MODES_DEFAULT[StdMode::Mode480i as usize].timings;
        hv_multiply(&mut t, 1, 3);
        assert!(t.interlaced);
        assert_eq!(t.v_total, 3 * 525);
    }

    #[test]
    fn sdtv_dotclk_assumes_858_sample_line() {
        let vm = VIDEO_MODES_DEFAULT[StdMode::Mode240p as usize].resolve();
        assert_eq!(estimate_dotclk(&vm, 15734), 15734 * 858);
    }

    #[test]
    fn pc_dotclk_uses_sampled_line_length() {
        let vm = VIDEO_MODES_DEFAULT[StdMode::Mode1080p60 as usize].resolve();
        assert_eq!(estimate_dotclk(&vm, 67500), 2200 * 67500);
    }
}
