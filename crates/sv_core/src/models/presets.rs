//! Preset row types for the mode catalog and the working mode descriptor.

use serde::{Deserialize, Serialize};

use super::enums::{
    AdMode, HdmiVic, ModeFlags, PixelRep, SamplingMode, SmpPreset, VideoGroup, VideoTypeMask,
};
use super::timings::Timings;

/// Fractional clock synthesizer configuration for a framelocked output.
///
/// The values are register-ready P1/P2/P3 terms for the feedback multiplier
/// and the output multisynth stage, carried verbatim from the mode tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PllFracConfig {
    pub fb_p1: u32,
    pub fb_p2: u32,
    pub fb_p3: u32,
    pub ms_p1: u32,
    pub ms_p2: u32,
    pub ms_p3: u32,
    pub clkin_div: u8,
    pub divby4: u8,
    pub outdiv: u8,
}

/// One row of the output mode catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModePreset {
    pub name: &'static str,
    pub vic: HdmiVic,
    pub timings: Timings,
    pub sampler_phase: u8,
    pub type_mask: VideoTypeMask,
    pub group: VideoGroup,
    pub flags: ModeFlags,
    pub tx_pixelrep: PixelRep,
    /// Pixel repetition signalled in the TX infoframe (may differ from the
    /// physical repetition when the sink is meant to discard the repeats).
    pub pixr_ifr: PixelRep,
    /// Integer pixel clock multiplier from the 27 MHz reference
    /// (0 = use the fractional PLL configuration instead).
    pub pclk_mult: u8,
    pub pll_conf: PllFracConfig,
}

impl ModePreset {
    /// Build a working descriptor from this catalog row.
    pub fn resolve(&self) -> ResolvedMode {
        ResolvedMode {
            name: self.name.to_string(),
            vic: self.vic,
            timings: self.timings,
            sampler_phase: self.sampler_phase,
            type_mask: self.type_mask,
            group: self.group,
            flags: self.flags,
            tx_pixelrep: self.tx_pixelrep,
            pixr_ifr: self.pixr_ifr,
            pclk_mult: self.pclk_mult,
            pll_conf: self.pll_conf,
        }
    }
}

/// One row of the input sampling preset table: how to sample a given source
/// shape, including per-console oversampling (`h_skip`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingPreset {
    pub name: &'static str,
    pub sm: SamplingMode,
    pub timings: Timings,
    /// Oversampling factor minus one: a value of `n` keeps every (n+1)th
    /// sample of the oversampled line.
    pub h_skip: u8,
    pub sampler_phase: u8,
    pub type_mask: VideoTypeMask,
    pub group: VideoGroup,
}

/// One row of the adaptive mode table: a (sampling preset, output target)
/// pair with repeat factors, placement tweaks and the exact fractional PLL
/// configuration that framelocks the output to this input line count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdaptivePreset {
    pub id: AdMode,
    pub smp_preset: SmpPreset,
    /// Input frame line count this row matches (0 = use the sampling
    /// preset's own total).
    pub v_total_override: u16,
    pub x_rpt: u8,
    /// Vertical repeat; -1 selects the half-rate mode that folds two input
    /// fields into one output frame.
    pub y_rpt: i8,
    pub x_offset_i: i16,
    pub y_offset_i: i16,
    pub pll_conf: PllFracConfig,
}

/// Working mode descriptor used during matching.
///
/// Built either from a catalog row or assembled from a live measurement and
/// then backfilled by the matchers. Unlike the catalog rows the name is
/// owned, since multiplied outputs are renamed (e.g. "240p x5").
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResolvedMode {
    pub name: String,
    pub vic: HdmiVic,
    pub timings: Timings,
    pub sampler_phase: u8,
    pub type_mask: VideoTypeMask,
    pub group: VideoGroup,
    pub flags: ModeFlags,
    pub tx_pixelrep: PixelRep,
    pub pixr_ifr: PixelRep,
    pub pclk_mult: u8,
    pub pll_conf: PllFracConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_copies_row_fields() {
        let preset = crate::catalog::VIDEO_MODES_DEFAULT[0];
        let resolved = preset.resolve();
        assert_eq!(resolved.name, preset.name);
        assert_eq!(resolved.timings, preset.timings);
        assert_eq!(resolved.flags, preset.flags);
    }
}
