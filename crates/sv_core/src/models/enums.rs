//! Core enums used throughout the mode engine.

use serde::{Deserialize, Serialize};

/// Broad signal class of a video source, stored as a bitmask so a preset
/// can cover several classes at once (e.g. HDTV and PC timings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VideoTypeMask(pub u8);

impl VideoTypeMask {
    pub const NONE: VideoTypeMask = VideoTypeMask(0);
    pub const SDTV: VideoTypeMask = VideoTypeMask(1 << 0);
    pub const EDTV: VideoTypeMask = VideoTypeMask(1 << 1);
    pub const HDTV: VideoTypeMask = VideoTypeMask(1 << 2);
    pub const PC: VideoTypeMask = VideoTypeMask(1 << 3);

    pub const fn union(self, other: VideoTypeMask) -> VideoTypeMask {
        VideoTypeMask(self.0 | other.0)
    }

    pub fn intersects(self, other: VideoTypeMask) -> bool {
        (self.0 & other.0) != 0
    }
}

impl std::ops::BitOr for VideoTypeMask {
    type Output = VideoTypeMask;

    fn bitor(self, rhs: VideoTypeMask) -> VideoTypeMask {
        VideoTypeMask(self.0 | rhs.0)
    }
}

/// Input line-count family. Determines which per-group processing options
/// and sub-mode selectors apply, and doubles as an index into the per-group
/// target tables used by the matchers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoGroup {
    #[default]
    None = 0,
    Grp240p = 1,
    Grp288p = 2,
    Grp384p = 3,
    Grp480i = 4,
    Grp576i = 5,
    Grp480p = 6,
    Grp576p = 7,
    Grp1080i = 8,
}

impl VideoGroup {
    /// Number of groups, i.e. the length of every per-group lookup table.
    pub const COUNT: usize = 9;
}

/// Line-multiplier capability flags carried by every catalog mode.
///
/// The bit layout is part of the matcher contract: the sub-mode selectors
/// pick an optimized console variant by shifting a base flag left, so the
/// variants of each multiplier family must stay on consecutive bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct ModeFlags(pub u32);

impl ModeFlags {
    pub const NONE: ModeFlags = ModeFlags(0);
    pub const PT: ModeFlags = ModeFlags(1 << 2);
    pub const L2: ModeFlags = ModeFlags(1 << 3);
    pub const L2_512_COL: ModeFlags = ModeFlags(1 << 4);
    pub const L2_384_COL: ModeFlags = ModeFlags(1 << 5);
    pub const L2_320_COL: ModeFlags = ModeFlags(1 << 6);
    pub const L2_256_COL: ModeFlags = ModeFlags(1 << 7);
    pub const L2_240X360: ModeFlags = ModeFlags(1 << 8);
    pub const L3_GEN_16_9: ModeFlags = ModeFlags(1 << 9);
    pub const L3_GEN_4_3: ModeFlags = ModeFlags(1 << 10);
    pub const L3_512_COL: ModeFlags = ModeFlags(1 << 11);
    pub const L3_384_COL: ModeFlags = ModeFlags(1 << 12);
    pub const L3_320_COL: ModeFlags = ModeFlags(1 << 13);
    pub const L3_256_COL: ModeFlags = ModeFlags(1 << 14);
    pub const L3_240X360: ModeFlags = ModeFlags(1 << 15);
    pub const L4_GEN_4_3: ModeFlags = ModeFlags(1 << 16);
    pub const L4_512_COL: ModeFlags = ModeFlags(1 << 17);
    pub const L4_384_COL: ModeFlags = ModeFlags(1 << 18);
    pub const L4_320_COL: ModeFlags = ModeFlags(1 << 19);
    pub const L4_256_COL: ModeFlags = ModeFlags(1 << 20);
    pub const L5_GEN_4_3: ModeFlags = ModeFlags(1 << 21);
    pub const L5_512_COL: ModeFlags = ModeFlags(1 << 22);
    pub const L5_384_COL: ModeFlags = ModeFlags(1 << 23);
    pub const L5_320_COL: ModeFlags = ModeFlags(1 << 24);
    pub const L5_256_COL: ModeFlags = ModeFlags(1 << 25);

    pub const fn union(self, other: ModeFlags) -> ModeFlags {
        ModeFlags(self.0 | other.0)
    }

    /// Shift the flag left by `n` variant positions.
    pub const fn shl(self, n: u8) -> ModeFlags {
        ModeFlags(self.0 << n)
    }

    pub const fn intersection(self, other: ModeFlags) -> ModeFlags {
        ModeFlags(self.0 & other.0)
    }

    pub fn intersects(self, other: ModeFlags) -> bool {
        (self.0 & other.0) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for ModeFlags {
    type Output = ModeFlags;

    fn bitor(self, rhs: ModeFlags) -> ModeFlags {
        ModeFlags(self.0 | rhs.0)
    }
}

impl std::ops::BitAnd for ModeFlags {
    type Output = ModeFlags;

    fn bitand(self, rhs: ModeFlags) -> ModeFlags {
        ModeFlags(self.0 & rhs.0)
    }
}

/// HDMI Video Identification Code advertised for a mode, where one exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HdmiVic {
    #[default]
    Unknown,
    Vic240p60Pr2x,
    Vic288p50,
    Vic480i60Pr2x,
    Vic480p60,
    Vic640x480p60,
    Vic576i50,
    Vic576p50,
    Vic720p50,
    Vic720p60,
    Vic1080i50,
    Vic1080i60,
    Vic1080p50,
    Vic1080p60,
}

/// TX-side pixel repetition factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PixelRep {
    #[default]
    X1,
    X2,
    X4,
}

/// Sampling profile of an input preset. Generic profiles sample at a
/// standard aspect ratio; the optimized ones match a specific console or
/// DTV/VESA source pixel clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SamplingMode {
    Gen4x3,
    Gen16x9,
    OptDtv480i,
    OptDtv480iWs,
    OptDtv576i,
    OptDtv576iWs,
    OptDtv480p,
    OptDtv480pWs,
    OptDtv576p,
    OptDtv576pWs,
    OptVga480p60,
    OptPcHdtv,
    OptSnes256Col,
    OptSnes512Col,
    OptMd256Col,
    OptMd320Col,
    OptPsx256Col,
    OptPsx320Col,
    OptPsx384Col,
    OptPsx512Col,
    OptPsx640Col,
    OptSat320Col,
    OptSat352Col,
    OptSat640Col,
    OptSat704Col,
    OptN64320Col,
    OptN64640Col,
}

/// Adaptive/framelocked output mode targets.
///
/// LB/CR suffixes distinguish letterboxed and cropped placements of the
/// same output raster. The discriminant indexes [`crate::catalog::AD_MODE_ID_MAP`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdMode {
    Ad240p = 0,
    Ad288p,
    Ad480p,
    Ad576p,
    Ad720p50,
    Ad720p60,
    Ad1280x1024p60,
    Ad1080i50Cr,
    Ad1080i60Lb,
    Ad1080p50Cr,
    Ad1080p60Lb,
    Ad1080p60Cr,
    Ad1600x1200p60,
    Ad1920x1200p50,
    Ad1920x1200p60,
    Ad1920x1440p50,
    Ad1920x1440p60,
    Ad2560x1440p50,
    Ad2560x1440p60,
}

impl AdMode {
    pub const COUNT: usize = 19;

    /// The default-table mode this adaptive target renders into.
    pub fn output_mode(self) -> StdMode {
        crate::catalog::AD_MODE_ID_MAP[self as usize]
    }
}

/// Named rows of the default mode table. The discriminant is the row index,
/// so the variants must track the table layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StdMode {
    Mode240p = 7,
    Mode288p = 15,
    Mode480i = 23,
    Mode480p = 24,
    Mode576i = 27,
    Mode576p = 28,
    Mode720p50 = 30,
    Mode720p60 = 31,
    Mode1280x1024p60 = 34,
    Mode1080i50 = 36,
    Mode1080i60 = 37,
    Mode1080p50 = 38,
    Mode1080p60 = 39,
    Mode1080p120 = 40,
    Mode1600x1200p60 = 41,
    Mode1920x1200p50 = 42,
    Mode1920x1200p60 = 43,
    Mode1920x1440p50 = 44,
    Mode1920x1440p60 = 45,
    Mode2560x1440p50 = 46,
    Mode2560x1440p60 = 47,
}

/// Named rows of the sampling preset table, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SmpPreset {
    Gen720x240 = 0,
    Gen960x240,
    Gen1280x240,
    Gen1600x240,
    Gen1920x240,
    Gen720x288,
    Gen1536x288,
    Gen1920x288,
    Gen720x480i,
    Gen1280x480i,
    Gen1920x480i,
    Gen1280x480iWs,
    Gen1707x480iWs,
    Gen720x576i,
    Gen1536x576i,
    Gen720x480,
    Gen1280x480,
    Gen1920x480,
    Gen1280x480Ws,
    Gen1707x480Ws,
    Gen720x576,
    Gen1536x576,
    Dtv480i,
    Dtv480iWs,
    Dtv576i,
    Dtv576iWs,
    Pc384p,
    Vga720x400,
    Vga640x400,
    Vga480p60,
    Dtv480p,
    Dtv480pWs,
    Dtv576p,
    Dtv576pWs,
    Dtv720p50,
    Dtv720p60,
    Dtv1080i50,
    Dtv1080i60,
    Dtv1080p50,
    Dtv1080p60,
    Snes256x240,
    Snes512x240,
    Md256x224,
    Md320x224,
    Psx256x240,
    Psx320x240,
    Psx384x240,
    Psx512x240,
    Psx640x240,
    Sat320x240,
    Sat352x240,
    Sat640x240,
    Sat704x240,
    N64320x240,
    N64640x240,
}

/// Operating mode of the conversion datapath.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperMode {
    /// Integer line multiplication locked to the input dotclock.
    #[default]
    PureLm,
    /// Line multiplication with a fractional PLL framelocked to the input.
    AdaptiveLm,
    /// Full scaler with free-running or framelocked output.
    Scaler,
}

impl OperMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::PureLm => "Pure LM",
            Self::AdaptiveLm => "Adaptive LM",
            Self::Scaler => "Scaler",
        }
    }
}

impl std::fmt::Display for OperMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Output raster used by Line5x modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum L5Fmt {
    #[default]
    Fmt1920x1080 = 0,
    Fmt1600x1200 = 1,
    Fmt1920x1200 = 2,
}

/// 400p source discrimination for the two VGA text/graphics modes that
/// share a 449-line raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum S400pMode {
    #[default]
    Vga640x400 = 0,
    Vga720x400 = 1,
}

/// 480p source discrimination between DTV 480p and VESA 640x480.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum S480pMode {
    /// Pick by measured hsync length.
    #[default]
    Auto = 0,
    Dtv480p = 1,
    Vesa640x480 = 2,
}

/// Scaler output framelock policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalerFramelock {
    #[default]
    On,
    Off50Hz,
    Off60Hz,
}

/// Aspect-ratio placement of the scaled image inside the output raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalerAspect {
    #[default]
    Aspect4x3 = 0,
    Aspect16x9 = 1,
    Aspect8x7 = 2,
    /// Keep the sampled input aspect ratio.
    Source = 3,
    /// Stretch to the full output raster.
    Full = 4,
}

/// Scaler output mode selector, one row of the 50/60 Hz target pair map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalerOutMode {
    Out480p = 0,
    Out576p = 1,
    Out720p = 2,
    Out1280x1024 = 3,
    #[default]
    Out1080p = 4,
    Out1600x1200 = 5,
    Out1920x1200 = 6,
    Out1920x1440 = 7,
    Out2560x1440 = 8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_flag_variant_shift_selects_console_flags() {
        // The sub-mode selectors rely on consecutive variant bits.
        assert_eq!(ModeFlags::L2.shl(1), ModeFlags::L2_512_COL);
        assert_eq!(ModeFlags::L3_GEN_16_9.shl(6), ModeFlags::L3_240X360);
        assert_eq!(ModeFlags::L4_GEN_4_3.shl(4), ModeFlags::L4_256_COL);
        assert_eq!(ModeFlags::L5_GEN_4_3.shl(4), ModeFlags::L5_256_COL);
    }

    #[test]
    fn mode_flag_families_are_ordered() {
        // The digital-input path derives the vertical multiplier by
        // comparing flags across families.
        assert!(ModeFlags::L5_GEN_4_3 > ModeFlags::L4_GEN_4_3);
        assert!(ModeFlags::L4_GEN_4_3 > ModeFlags::L3_GEN_16_9);
        assert!(ModeFlags::L3_GEN_16_9 > ModeFlags::L2);
        assert!(ModeFlags::L2 > ModeFlags::PT);
    }

    #[test]
    fn type_mask_intersection() {
        let t = VideoTypeMask::HDTV | VideoTypeMask::PC;
        assert!(t.intersects(VideoTypeMask::PC));
        assert!(!t.intersects(VideoTypeMask::SDTV));
    }

    #[test]
    fn group_discriminants_index_per_group_tables() {
        assert_eq!(VideoGroup::None as usize, 0);
        assert_eq!(VideoGroup::Grp1080i as usize, VideoGroup::COUNT - 1);
    }

    #[test]
    fn oper_mode_serializes_snake_case() {
        let json = serde_json::to_string(&OperMode::AdaptiveLm).unwrap();
        assert_eq!(json, "\"adaptive_lm\"");
    }
}
