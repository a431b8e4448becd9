//! Default output mode table.
//!
//! Row order is the matching priority of the pure line multiplier: smaller
//! optimized modes come before the generic mode of each group, and groups
//! are ordered by line count. Never reorder rows; the named indices in
//! [`StdMode`](crate::models::StdMode) track this layout.

use crate::models::{
    HdmiVic as V, ModeFlags as F, ModePreset, PixelRep as P, PllFracConfig, Timings,
    VideoGroup as G, VideoTypeMask as VT,
};

pub(crate) const DEFAULT_SAMPLER_PHASE: u8 = 0;

pub(crate) const fn t(
    h_active: u16,
    v_active: u16,
    v_hz_max: u8,
    h_total: u16,
    h_total_adj: u8,
    v_total: u16,
    h_backporch: u16,
    v_backporch: u16,
    h_synclen: u16,
    v_synclen: u8,
    interlaced: bool,
) -> Timings {
    Timings {
        h_active,
        v_active,
        v_hz_max,
        v_hz_x100: 0,
        h_total,
        h_total_adj,
        v_total,
        h_backporch,
        v_backporch,
        h_synclen,
        v_synclen,
        interlaced,
    }
}

pub(crate) const fn pll(
    fb_p1: u32,
    fb_p2: u32,
    fb_p3: u32,
    ms_p1: u32,
    ms_p2: u32,
    ms_p3: u32,
    clkin_div: u8,
    divby4: u8,
    outdiv: u8,
) -> PllFracConfig {
    PllFracConfig {
        fb_p1,
        fb_p2,
        fb_p3,
        ms_p1,
        ms_p2,
        ms_p3,
        clkin_div,
        divby4,
        outdiv,
    }
}

pub(crate) const PLL_NONE: PllFracConfig = pll(0, 0, 0, 0, 0, 0, 0, 0, 0);
// 27 MHz reference passed through with the divide-by-4 output stage bypassed.
const PLL_27M_DIV4: PllFracConfig = pll(0, 0, 0, 0, 0, 0, 0, 1, 0);

const fn m(
    name: &'static str,
    vic: V,
    timings: Timings,
    type_mask: VT,
    group: G,
    flags: F,
    tx_pixelrep: P,
    pixr_ifr: P,
    pclk_mult: u8,
    pll_conf: PllFracConfig,
) -> ModePreset {
    ModePreset {
        name,
        vic,
        timings,
        sampler_phase: DEFAULT_SAMPLER_PHASE,
        type_mask,
        group,
        flags,
        tx_pixelrep,
        pixr_ifr,
        pclk_mult,
        pll_conf,
    }
}

const L2345_512: F = F::L2_512_COL
    .union(F::L3_512_COL)
    .union(F::L4_512_COL)
    .union(F::L5_512_COL);
const L2345_384: F = F::L2_384_COL
    .union(F::L3_384_COL)
    .union(F::L4_384_COL)
    .union(F::L5_384_COL);
const L2345_320: F = F::L2_320_COL
    .union(F::L3_320_COL)
    .union(F::L4_320_COL)
    .union(F::L5_320_COL);
const L2345_256: F = F::L2_256_COL
    .union(F::L3_256_COL)
    .union(F::L4_256_COL)
    .union(F::L5_256_COL);
const PT_L2: F = F::PT.union(F::L2);
const HDTV_PC: VT = VT::HDTV.union(VT::PC);

#[rustfmt::skip]
pub const VIDEO_MODES_DEFAULT: &[ModePreset] = &[
    /* 240p modes */
    m("1600x240",     V::Unknown,       t(1600,  240,  0, 2046, 0,  262, 202, 15, 150, 3, false), VT::SDTV, G::Grp240p,  F::L5_GEN_4_3,                         P::X1, P::X1, 1, PLL_NONE),
    m("1280x240",     V::Unknown,       t(1280,  240,  0, 1560, 0,  262, 170, 15,  72, 3, false), VT::SDTV, G::Grp240p,  F::L3_GEN_16_9.union(F::L4_GEN_4_3),   P::X1, P::X1, 1, PLL_NONE),
    m("960x240",      V::Unknown,       t( 960,  240,  0, 1170, 0,  262, 128, 15,  54, 3, false), VT::SDTV, G::Grp240p,  F::L3_GEN_4_3,                         P::X1, P::X1, 1, PLL_NONE),
    m("512x240",      V::Unknown,       t( 512,  240,  0,  682, 0,  262,  77, 14,  50, 3, false), VT::SDTV, G::Grp240p,  L2345_512,                             P::X1, P::X1, 1, PLL_NONE),
    m("384x240",      V::Unknown,       t( 384,  240,  0,  512, 0,  262,  59, 14,  37, 3, false), VT::SDTV, G::Grp240p,  L2345_384,                             P::X1, P::X1, 1, PLL_NONE),
    m("320x240",      V::Unknown,       t( 320,  240,  0,  426, 0,  262,  49, 14,  31, 3, false), VT::SDTV, G::Grp240p,  L2345_320,                             P::X1, P::X1, 1, PLL_NONE),
    m("256x240",      V::Unknown,       t( 256,  240,  0,  341, 0,  262,  39, 14,  25, 3, false), VT::SDTV, G::Grp240p,  L2345_256,                             P::X1, P::X1, 1, PLL_NONE),
    m("240p",         V::Vic240p60Pr2x, t( 720,  240,  0,  858, 0,  262,  57, 15,  62, 3, false), VT::SDTV, G::Grp240p,  PT_L2,                                 P::X2, P::X2, 1, PLL_27M_DIV4),
    /* 288p modes */
    m("1600x240L",    V::Unknown,       t(1600,  240,  0, 2046, 0,  312, 202, 43, 150, 3, false), VT::SDTV, G::Grp288p,  F::L5_GEN_4_3,                         P::X1, P::X1, 1, PLL_NONE),
    m("1280x288",     V::Unknown,       t(1280,  288,  0, 1560, 0,  312, 170, 19,  72, 3, false), VT::SDTV, G::Grp288p,  F::L3_GEN_16_9.union(F::L4_GEN_4_3),   P::X1, P::X1, 1, PLL_NONE),
    m("960x288",      V::Unknown,       t( 960,  288,  0, 1170, 0,  312, 128, 19,  54, 3, false), VT::SDTV, G::Grp288p,  F::L3_GEN_4_3,                         P::X1, P::X1, 1, PLL_NONE),
    m("512x240LB",    V::Unknown,       t( 512,  240,  0,  682, 0,  312,  77, 41,  50, 3, false), VT::SDTV, G::Grp288p,  L2345_512,                             P::X1, P::X1, 1, PLL_NONE),
    m("384x240LB",    V::Unknown,       t( 384,  240,  0,  512, 0,  312,  59, 41,  37, 3, false), VT::SDTV, G::Grp288p,  L2345_384,                             P::X1, P::X1, 1, PLL_NONE),
    m("320x240LB",    V::Unknown,       t( 320,  240,  0,  426, 0,  312,  49, 41,  31, 3, false), VT::SDTV, G::Grp288p,  L2345_320,                             P::X1, P::X1, 1, PLL_NONE),
    m("256x240LB",    V::Unknown,       t( 256,  240,  0,  341, 0,  312,  39, 41,  25, 3, false), VT::SDTV, G::Grp288p,  L2345_256,                             P::X1, P::X1, 1, PLL_NONE),
    m("288p",         V::Vic288p50,     t( 720,  288,  0,  864, 0,  312,  69, 19,  63, 3, false), VT::SDTV, G::Grp288p,  PT_L2,                                 P::X2, P::X2, 1, PLL_27M_DIV4),
    /* 360p: GBI */
    m("480x360",      V::Unknown,       t( 480,  360,  0,  600, 0,  375,  63, 10,  38, 3, false), VT::EDTV, G::Grp384p,  PT_L2,                                 P::X1, P::X1, 1, PLL_NONE),
    m("240x360",      V::Unknown,       t( 256,  360,  0,  300, 0,  375,  24, 10,  18, 3, false), VT::EDTV, G::Grp384p,  F::L2_240X360.union(F::L3_240X360),    P::X1, P::X1, 1, PLL_NONE),
    /* 384p: Sega Model 2 (real vtotal=423, avoid collision with PC88/98 and VGA400p) */
    m("384p",         V::Unknown,       t( 496,  384,  0,  640, 0,  408,  50, 29,  62, 3, false), VT::EDTV, G::Grp384p,  PT_L2,                                 P::X1, P::X1, 1, PLL_NONE),
    /* 400p line3x */
    m("1600x400",     V::Unknown,       t(1600,  400,  0, 2000, 0,  449, 120, 34, 240, 2, false), VT::PC,   G::Grp384p,  F::L3_GEN_16_9,                        P::X1, P::X1, 1, PLL_NONE),
    /* 720x400@70Hz, VGA Mode 3+/7+ */
    m("720x400_70",   V::Unknown,       t( 720,  400, 75,  900, 0,  449,  64, 34,  96, 2, false), VT::PC,   G::Grp384p,  PT_L2,                                 P::X1, P::X1, 1, PLL_NONE),
    /* 640x400@70Hz, VGA Mode 13h */
    m("640x400_70",   V::Unknown,       t( 640,  400, 75,  800, 0,  449,  48, 34,  96, 2, false), VT::PC,   G::Grp384p,  PT_L2,                                 P::X1, P::X1, 1, PLL_NONE),
    /* 384p: X68k @ 24kHz */
    m("640x384",      V::Unknown,       t( 640,  384,  0,  800, 0,  492,  48, 63,  96, 2, false), VT::PC,   G::Grp384p,  PT_L2,                                 P::X1, P::X1, 1, PLL_NONE),
    /* ~525-line modes */
    m("480i",         V::Vic480i60Pr2x, t( 720,  240,  0,  858, 0,  525,  57, 15,  62, 3, true),  VT::SDTV, G::Grp480i,  PT_L2.union(F::L3_GEN_16_9).union(F::L4_GEN_4_3), P::X2, P::X2, 1, PLL_27M_DIV4),
    m("480p",         V::Vic480p60,     t( 720,  480,  0,  858, 0,  525,  60, 30,  62, 6, false), VT::EDTV, G::Grp480p,  PT_L2,                                 P::X1, P::X1, 1, PLL_NONE),
    m("640x480_60",   V::Vic640x480p60, t( 640,  480, 65,  800, 0,  525,  48, 33,  96, 2, false), VT::PC,   G::Grp480p,  PT_L2,                                 P::X1, P::X1, 1, PLL_NONE),
    /* X68k @ 31kHz */
    m("640x512",      V::Unknown,       t( 640,  512,  0,  800, 0,  568,  48, 28,  96, 2, false), VT::PC,   G::Grp480p,  PT_L2,                                 P::X1, P::X1, 1, PLL_NONE),
    /* ~625-line modes */
    m("576i",         V::Vic576i50,     t( 720,  288, 55,  864, 0,  625,  69, 19,  63, 3, true),  VT::SDTV, G::Grp576i,  PT_L2.union(F::L3_GEN_16_9).union(F::L4_GEN_4_3), P::X2, P::X2, 1, PLL_27M_DIV4),
    m("576p",         V::Vic576p50,     t( 720,  576, 55,  864, 0,  625,  68, 39,  64, 5, false), VT::EDTV, G::Grp576p,  PT_L2,                                 P::X1, P::X1, 1, PLL_NONE),
    m("800x600_60",   V::Unknown,       t( 800,  600, 65, 1056, 0,  628,  88, 23, 128, 4, false), VT::PC,   G::None,     F::PT,                                 P::X1, P::X1, 1, PLL_NONE),
    /* CEA 720p modes */
    m("720p_50",      V::Vic720p50,     t(1280,  720, 55, 1980, 0,  750, 220, 20,  40, 5, false), HDTV_PC,  G::None,     F::PT,                                 P::X1, P::X1, 0, pll(3712, 0, 1, 1024, 0, 1, 0, 0, 0)),
    m("720p_60",      V::Vic720p60,     t(1280,  720,  0, 1650, 0,  750, 220, 20,  40, 5, false), HDTV_PC,  G::None,     F::PT,                                 P::X1, P::X1, 0, pll(3712, 0, 1, 1024, 0, 1, 0, 0, 0)),
    /* VESA XGA,1280x960 and SXGA modes */
    m("1024x768_60",  V::Unknown,       t(1024,  768, 65, 1344, 0,  806, 160, 29, 136, 6, false), VT::PC,   G::None,     F::PT,                                 P::X1, P::X1, 1, PLL_NONE),
    m("1280x960_60",  V::Unknown,       t(1280,  960, 65, 1800, 0, 1000, 312, 36, 112, 3, false), VT::PC,   G::None,     F::PT,                                 P::X1, P::X1, 4, PLL_NONE),
    m("1280x1024_60", V::Unknown,       t(1280, 1024, 65, 1688, 0, 1066, 248, 38, 112, 3, false), VT::PC,   G::None,     F::PT,                                 P::X1, P::X1, 4, PLL_NONE),
    /* PS2 GSM 960i mode */
    m("640x960i",     V::Unknown,       t( 640,  480,  0,  800, 0, 1050,  48, 33,  96, 2, true),  VT::EDTV, G::Grp1080i, PT_L2,                                 P::X1, P::X1, 1, PLL_NONE),
    /* CEA 1080i/p modes */
    m("1080i_50",     V::Vic1080i50,    t(1920,  540, 55, 2640, 0, 1125, 148, 15,  44, 5, true),  HDTV_PC,  G::Grp1080i, PT_L2,                                 P::X1, P::X1, 0, pll(3712, 0, 1, 1024, 0, 1, 0, 0, 0)),
    m("1080i_60",     V::Vic1080i60,    t(1920,  540,  0, 2200, 0, 1125, 148, 15,  44, 5, true),  HDTV_PC,  G::Grp1080i, PT_L2,                                 P::X1, P::X1, 0, pll(3712, 0, 1, 1024, 0, 1, 0, 0, 0)),
    m("1080p_50",     V::Vic1080p50,    t(1920, 1080, 55, 2640, 0, 1125, 148, 36,  44, 5, false), HDTV_PC,  G::None,     F::PT,                                 P::X1, P::X1, 0, pll(3712, 0, 1, 256, 0, 1, 0, 0, 0)),
    m("1080p_60",     V::Vic1080p60,    t(1920, 1080, 65, 2200, 0, 1125, 148, 36,  44, 5, false), HDTV_PC,  G::None,     F::PT,                                 P::X1, P::X1, 0, pll(3712, 0, 1, 256, 0, 1, 0, 0, 0)),
    /* 1080p @ 120Hz (CVT-RB) with pixelrep */
    m("1080p_120",    V::Unknown,       t( 960, 1080,  0, 1040, 0, 1144,  40, 36,  28, 5, false), HDTV_PC,  G::None,     F::PT,                                 P::X2, P::X1, 0, pll(3544, 32, 36, 256, 0, 1, 0, 0, 0)),
    /* VESA UXGA mode */
    m("1600x1200_60", V::Unknown,       t(1600, 1200, 65, 2160, 0, 1250, 304, 46, 192, 3, false), VT::PC,   G::None,     F::PT,                                 P::X1, P::X1, 6, PLL_NONE),
    /* CVT 1920x1200 modes (60Hz with reduced blanking) */
    m("1920x1200_50", V::Unknown,       t(1920, 1200, 55, 2560, 0, 1238, 320, 29, 200, 6, false), VT::PC,   G::None,     F::PT,                                 P::X1, P::X1, 1, PLL_NONE),
    m("1920x1200_60", V::Unknown,       t(1920, 1200,  0, 2080, 0, 1235,  80, 26,  32, 6, false), VT::PC,   G::None,     F::PT,                                 P::X1, P::X1, 0, pll(2408, 8, 27, 0, 0, 1, 0, 0, 3)),
    /* CVT 1920x1440 modes (60Hz with reduced blanking) */
    m("1920x1440_50", V::Unknown,       t(1920, 1440, 55, 2592, 0, 1484, 336, 37, 200, 4, false), VT::PC,   G::None,     F::PT,                                 P::X1, P::X1, 1, PLL_NONE),
    m("1920x1440_60", V::Unknown,       t(1920, 1440,  0, 2080, 0, 1481,  80, 34,  32, 4, false), VT::PC,   G::None,     F::PT,                                 P::X1, P::X1, 0, pll(2991, 11, 27, 0, 0, 1, 0, 0, 3)),
    /* 2560x1440 (CVT-RB) */
    m("2560x1440_50", V::Unknown,       t(2560, 1440, 55, 2720, 0, 1474,  80, 26,  32, 5, false), VT::PC,   G::None,     F::PT,                                 P::X1, P::X1, 0, pll(3285, 1, 3, 0, 0, 1, 0, 0, 3)),
    m("2560x1440_60", V::Unknown,       t(2560, 1440,  0, 2720, 0, 1481,  80, 33,  32, 5, false), VT::PC,   G::None,     F::PT,                                 P::X1, P::X1, 0, pll(4067, 5, 9, 0, 0, 1, 0, 0, 3)),
];
