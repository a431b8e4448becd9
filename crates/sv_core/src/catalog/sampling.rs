//! Input sampling preset table.
//!
//! Generic presets sample at an integer multiple of the active width; the
//! console presets oversample the line (`h_skip`) to hit the exact source
//! dot clock. Row order matches the [`SmpPreset`] discriminants.

use super::modes::{t, DEFAULT_SAMPLER_PHASE};
use crate::models::{
    SamplingMode as SM, SamplingPreset, Timings, VideoGroup as G, VideoTypeMask as VT,
};

const fn s(
    name: &'static str,
    sm: SM,
    timings: Timings,
    h_skip: u8,
    type_mask: VT,
    group: G,
) -> SamplingPreset {
    SamplingPreset {
        name,
        sm,
        timings,
        h_skip,
        sampler_phase: DEFAULT_SAMPLER_PHASE,
        type_mask,
        group,
    }
}

#[rustfmt::skip]
pub const SMP_PRESETS_DEFAULT: &[SamplingPreset] = &[
    /* Generic 240p presets */
    s("720x240",      SM::Gen4x3,        t( 720,  240, 65,  858,  0,  262,  57, 15,  62, 3, false), 0, VT::SDTV, G::Grp240p),
    s("960x240",      SM::Gen4x3,        t( 960,  240, 65, 1170,  0,  262, 128, 15,  54, 3, false), 0, VT::SDTV, G::Grp240p),
    s("1280x240",     SM::Gen4x3,        t(1280,  240, 65, 1560,  0,  262, 170, 15,  72, 3, false), 0, VT::SDTV, G::Grp240p),
    s("1600x240",     SM::Gen4x3,        t(1600,  240, 65, 1950,  0,  262, 212, 15,  90, 3, false), 0, VT::SDTV, G::Grp240p),
    s("1920x240",     SM::Gen4x3,        t(1920,  240, 65, 2340,  0,  262, 256, 15, 108, 3, false), 0, VT::SDTV, G::Grp240p),
    /* Generic 288p presets */
    s("720x288",      SM::Gen4x3,        t( 720,  288, 55,  864,  0,  312,  69, 19,  63, 3, false), 0, VT::SDTV, G::Grp288p),
    s("1536x288",     SM::Gen4x3,        t(1536,  288, 55, 1872,  0,  312, 150, 19, 136, 3, false), 0, VT::SDTV, G::Grp288p),
    s("1920x288",     SM::Gen4x3,        t(1920,  288, 55, 2340,  0,  312, 187, 19, 171, 3, false), 0, VT::SDTV, G::Grp288p),
    /* Generic 480i presets */
    s("720x480i",     SM::Gen4x3,        t( 720,  240, 65,  858,  0,  525,  57, 15,  62, 3, true),  0, VT::SDTV, G::Grp480i),
    s("1280x480i",    SM::Gen4x3,        t(1280,  240, 65, 1560,  0,  525, 170, 15,  72, 3, true),  0, VT::SDTV, G::Grp480i),
    s("1920x480i",    SM::Gen4x3,        t(1920,  240, 65, 2340,  0,  525, 256, 15, 108, 3, true),  0, VT::SDTV, G::Grp480i),
    /* Generic 480i 16:9 presets */
    s("1280x480i",    SM::Gen16x9,       t(1280,  240, 65, 1560,  0,  525, 170, 15,  72, 3, true),  0, VT::SDTV, G::Grp480i),
    s("1707x480i",    SM::Gen16x9,       t(1707,  240, 65, 2080,  0,  525, 228, 15,  96, 3, true),  0, VT::SDTV, G::Grp480i),
    /* Generic 576i presets */
    s("720x576i",     SM::Gen4x3,        t( 720,  288, 55,  864,  0,  625,  69, 19,  63, 3, true),  0, VT::SDTV, G::Grp576i),
    s("1536x576i",    SM::Gen4x3,        t(1536,  288, 55, 1872,  0,  625, 150, 19, 136, 3, true),  0, VT::SDTV, G::Grp576i),
    /* Generic 480p presets */
    s("720x480",      SM::Gen4x3,        t( 720,  480, 65,  858,  0,  525,  60, 30,  62, 6, false), 0, VT::EDTV, G::Grp480p),
    s("1280x480",     SM::Gen4x3,        t(1280,  480, 65, 1560,  0,  525, 170, 30,  72, 6, false), 0, VT::EDTV, G::Grp480p),
    s("1920x480",     SM::Gen4x3,        t(1920,  480, 65, 2340,  0,  525, 256, 30, 108, 6, false), 0, VT::EDTV, G::Grp480p),
    /* Generic 480p 16:9 presets */
    s("1280x480",     SM::Gen16x9,       t(1280,  480, 65, 1560,  0,  525, 170, 30,  72, 6, false), 0, VT::EDTV, G::Grp480p),
    s("1707x480",     SM::Gen16x9,       t(1707,  480, 65, 2080,  0,  525, 228, 30,  96, 6, false), 0, VT::EDTV, G::Grp480p),
    /* Generic 576p presets */
    s("720x576",      SM::Gen4x3,        t( 720,  576, 55,  864,  0,  625,  68, 39,  64, 5, false), 0, VT::EDTV, G::Grp576p),
    s("1536x576",     SM::Gen4x3,        t(1536,  576, 55, 1872,  0,  625, 150, 39, 136, 5, false), 0, VT::EDTV, G::Grp576p),

    /* DTV 480i */
    s("480i",         SM::OptDtv480i,    t( 720,  240, 65,  858,  0,  525,  57, 15,  62, 3, true),  0, VT::SDTV, G::Grp480i),
    s("480i wide",    SM::OptDtv480iWs,  t( 720,  240, 65,  858,  0,  525,  57, 15,  62, 3, true),  0, VT::SDTV, G::Grp480i),
    /* DTV 576i */
    s("576i",         SM::OptDtv576i,    t( 720,  288, 55,  864,  0,  625,  69, 19,  63, 3, true),  0, VT::SDTV, G::Grp576i),
    s("576i wide",    SM::OptDtv576iWs,  t( 720,  288, 55,  864,  0,  625,  69, 19,  63, 3, true),  0, VT::SDTV, G::Grp576i),
    /* 384p: Sega Model 2 */
    s("384p",         SM::OptPcHdtv,     t( 496,  384,  0,  640,  0,  423,  50, 29,  62, 3, false), 0, VT::EDTV, G::Grp384p),
    /* 720x400@70Hz, VGA Mode 3+/7+ */
    s("720x400_70",   SM::OptPcHdtv,     t( 720,  400, 75,  900,  0,  449,  64, 34,  96, 2, false), 0, VT::PC,   G::Grp384p),
    /* 640x400@70Hz, VGA Mode 13h */
    s("640x400_70",   SM::OptPcHdtv,     t( 640,  400, 75,  800,  0,  449,  48, 34,  96, 2, false), 0, VT::PC,   G::Grp384p),
    /* VESA 640x480_60 */
    s("640x480_60",   SM::OptVga480p60,  t( 640,  480, 65,  800,  0,  525,  48, 33,  96, 2, false), 0, VT::EDTV, G::Grp480p),
    /* DTV 480p */
    s("480p",         SM::OptDtv480p,    t( 720,  480, 65,  858,  0,  525,  60, 30,  62, 6, false), 0, VT::EDTV, G::Grp480p),
    s("480p wide",    SM::OptDtv480pWs,  t( 720,  480, 65,  858,  0,  525,  60, 30,  62, 6, false), 0, VT::EDTV, G::Grp480p),
    /* DTV 576p */
    s("576p",         SM::OptDtv576p,    t( 720,  576, 55,  864,  0,  625,  68, 39,  64, 5, false), 0, VT::EDTV, G::Grp576p),
    s("576p wide",    SM::OptDtv576pWs,  t( 720,  576, 55,  864,  0,  625,  68, 39,  64, 5, false), 0, VT::EDTV, G::Grp576p),
    /* DTV 720p */
    s("720p_50",      SM::OptPcHdtv,     t(1280,  720, 55, 1980,  0,  750, 220, 20,  40, 5, false), 0, VT::HDTV, G::None),
    s("720p_60",      SM::OptPcHdtv,     t(1280,  720,  0, 1650,  0,  750, 220, 20,  40, 5, false), 0, VT::HDTV, G::None),
    /* DTV 1080i */
    s("1080i_50",     SM::OptPcHdtv,     t(1920,  540, 55, 2640,  0, 1125, 148, 15,  44, 5, true),  0, VT::HDTV, G::Grp1080i),
    s("1080i_60",     SM::OptPcHdtv,     t(1920,  540,  0, 2200,  0, 1125, 148, 15,  44, 5, true),  0, VT::HDTV, G::Grp1080i),
    /* DTV 1080p */
    s("1080p_50",     SM::OptPcHdtv,     t(1920, 1080, 55, 2640,  0, 1125, 148, 36,  44, 5, false), 0, VT::HDTV, G::None),
    s("1080p_60",     SM::OptPcHdtv,     t(1920, 1080, 65, 2200,  0, 1125, 148, 36,  44, 5, false), 0, VT::HDTV, G::None),

    /* NES/SNES */
    s("SNES 256x240", SM::OptSnes256Col, t( 256,  240,  0,  341,  0,  262,  39, 14,  25, 3, false), 3, VT::SDTV, G::Grp240p),
    s("SNES 512x240", SM::OptSnes512Col, t( 512,  240,  0,  682,  0,  262,  78, 14,  50, 3, false), 1, VT::SDTV, G::Grp240p),
    /* MD */
    s("MD 256x224",   SM::OptMd256Col,   t( 256,  224,  0,  342,  0,  262,  39, 24,  25, 3, false), 2, VT::SDTV, G::Grp240p),
    s("MD 320x224",   SM::OptMd320Col,   t( 320,  224,  0,  427, 10,  262,  52, 24,  31, 3, false), 1, VT::SDTV, G::Grp240p),
    /* PSX */
    s("PSX 256x240",  SM::OptPsx256Col,  t( 256,  240,  0,  341,  6,  263,  37, 14,  25, 3, false), 9, VT::SDTV, G::Grp240p),
    s("PSX 320x240",  SM::OptPsx320Col,  t( 320,  240,  0,  426, 12,  263,  47, 14,  31, 3, false), 7, VT::SDTV, G::Grp240p),
    s("PSX 384x240",  SM::OptPsx384Col,  t( 384,  240,  0,  487, 11,  263,  43, 14,  38, 3, false), 6, VT::SDTV, G::Grp240p),
    s("PSX 512x240",  SM::OptPsx512Col,  t( 512,  240,  0,  682, 12,  263,  74, 14,  50, 3, false), 4, VT::SDTV, G::Grp240p),
    s("PSX 640x240",  SM::OptPsx640Col,  t( 640,  240,  0,  853,  5,  263,  94, 14,  62, 3, false), 3, VT::SDTV, G::Grp240p),
    /* Saturn */
    s("SAT 320x240",  SM::OptSat320Col,  t( 320,  240,  0,  426, 10,  263,  48, 15,  31, 3, false), 1, VT::SDTV, G::Grp240p),
    s("SAT 352x240",  SM::OptSat352Col,  t( 352,  240,  0,  455,  0,  263,  45, 15,  34, 3, false), 1, VT::SDTV, G::Grp240p),
    s("SAT 640x240",  SM::OptSat640Col,  t( 640,  240,  0,  853,  0,  263,  96, 15,  62, 3, false), 0, VT::SDTV, G::Grp240p),
    s("SAT 704x240",  SM::OptSat704Col,  t( 704,  240,  0,  910,  0,  263,  90, 15,  68, 3, false), 0, VT::SDTV, G::Grp240p),
    /* N64 */
    s("N64 320x240",  SM::OptN64320Col,  t( 320,  240,  0,  386, 15,  263,  36, 14,  22, 3, false), 3, VT::SDTV, G::Grp240p),
    s("N64 640x240",  SM::OptN64640Col,  t( 640,  240,  0,  773, 10,  263,  72, 14,  44, 3, false), 1, VT::SDTV, G::Grp240p),
];
