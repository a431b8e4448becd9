//! Adaptive framelocked mode table.
//!
//! Each row pairs a sampling preset with an output target and carries the
//! fractional synthesizer configuration that locks the output dotclock to
//! the exact input frame rate. Generic rows match on the measured frame
//! line count (`v_total_override`); console rows match the preset total.

use super::modes::pll;
use crate::models::{AdMode as A, AdaptivePreset, PllFracConfig, SmpPreset as S};

const fn a(
    id: A,
    smp_preset: S,
    v_total_override: u16,
    x_rpt: u8,
    y_rpt: i8,
    pll_conf: PllFracConfig,
) -> AdaptivePreset {
    AdaptivePreset {
        id,
        smp_preset,
        v_total_override,
        x_rpt,
        y_rpt,
        x_offset_i: 0,
        y_offset_i: 0,
        pll_conf,
    }
}

#[rustfmt::skip]
pub const ADAPTIVE_MODES: &[AdaptivePreset] = &[
    /* Generic 261-line modes */
    a(A::Ad480p,         S::Gen720x240,    261, 0,  1, pll(7984,    16,    29,  3712, 0, 1, 0, 0, 0)),
    a(A::Ad720p60,       S::Gen960x240,    261, 0,  2, pll(5712,   656,  1131,  1024, 0, 1, 0, 0, 0)),
    a(A::Ad1280x1024p60, S::Gen1280x240,   261, 0,  3, pll(4154,  2348,  2610,   544, 0, 4, 0, 0, 0)),
    a(A::Ad1080i60Lb,    S::Gen1280x240,   261, 0,  1, pll(4156,   166,   377,  1024, 0, 1, 0, 0, 0)),
    a(A::Ad1080p60Lb,    S::Gen1280x240,   261, 0,  3, pll(4156,   166,   377,   256, 0, 1, 0, 0, 0)),
    a(A::Ad1080p60Cr,    S::Gen1600x240,   261, 0,  4, pll(3222,   282,   377,   256, 0, 1, 0, 0, 0)),
    a(A::Ad1600x1200p60, S::Gen1600x240,   261, 0,  4, pll(2204,    68,   377,     0, 0, 1, 0, 0, 3)),
    a(A::Ad1920x1200p60, S::Gen1600x240,   261, 0,  4, pll(2072,   152,   783,     0, 0, 1, 0, 0, 3)),
    a(A::Ad1920x1440p60, S::Gen1920x240,   261, 0,  5, pll(2070,  1058,  2349,     0, 0, 1, 0, 0, 3)),
    a(A::Ad2560x1440p60, S::Gen1920x240,   261, 0,  5, pll(2865,  1543, 30537,     0, 0, 1, 0, 0, 3)),

    /* Generic 262-line modes */
    a(A::Ad480p,         S::Gen720x240,    262, 0,  1, pll(8016,   256,  1048,  3744, 0, 4, 0, 0, 0)),
    a(A::Ad720p60,       S::Gen960x240,    262, 0,  2, pll(5688,  1400,  1703,  1024, 0, 1, 0, 0, 0)),
    a(A::Ad1280x1024p60, S::Gen1280x240,   262, 0,  3, pll(4137,   228,  2620,   544, 0, 4, 0, 0, 0)),
    a(A::Ad1080i60Lb,    S::Gen1280x240,   262, 0,  1, pll(4138,  1050,  1703,  1024, 0, 1, 0, 0, 0)),
    a(A::Ad1080p60Lb,    S::Gen1280x240,   262, 0,  3, pll(4138,  1050,  1703,   256, 0, 1, 0, 0, 0)),
    a(A::Ad1080p60Cr,    S::Gen1600x240,   262, 0,  4, pll(3208,   840,  1703,   256, 0, 1, 0, 0, 0)),
    a(A::Ad1600x1200p60, S::Gen1600x240,   262, 0,  4, pll(2193,  1385,  1703,     0, 0, 1, 0, 0, 3)),
    a(A::Ad1920x1200p60, S::Gen1600x240,   262, 0,  4, pll(2062,   130,   393,     0, 0, 1, 0, 0, 3)),
    a(A::Ad1920x1440p60, S::Gen1920x240,   262, 0,  5, pll(2060,   700,  1179,     0, 0, 1, 0, 0, 3)),
    a(A::Ad2560x1440p60, S::Gen1920x240,   262, 0,  5, pll(2852,  2468, 15327,     0, 0, 1, 0, 0, 3)),

    /* Generic 263-line modes */
    a(A::Ad480p,         S::Gen720x240,    263, 0,  1, pll(7983,   860,  1052,  3744, 0, 4, 0, 0, 0)),
    a(A::Ad720p60,       S::Gen960x240,    263, 0,  2, pll(5665,   837,  3419,  1024, 0, 1, 0, 0, 0)),
    a(A::Ad1280x1024p60, S::Gen1280x240,   263, 0,  3, pll(4119,  1078,  2630,   544, 0, 4, 0, 0, 0)),
    a(A::Ad1080i60Lb,    S::Gen1280x240,   263, 0,  1, pll(4120,  3192,  3419,  1024, 0, 1, 0, 0, 0)),
    a(A::Ad1080p60Lb,    S::Gen1280x240,   263, 0,  3, pll(4120,  3192,  3419,   256, 0, 1, 0, 0, 0)),
    a(A::Ad1080p60Cr,    S::Gen1600x240,   263, 0,  4, pll(3194,  1186,  3419,   256, 0, 1, 0, 0, 0)),
    a(A::Ad1600x1200p60, S::Gen1600x240,   263, 0,  4, pll(2183,  1795,  3419,     0, 0, 1, 0, 0, 3)),
    a(A::Ad1920x1200p60, S::Gen1600x240,   263, 0,  4, pll(2052,   428,   789,     0, 0, 1, 0, 0, 3)),
    a(A::Ad1920x1440p60, S::Gen1920x240,   263, 0,  5, pll(2050,  1922,  2367,     0, 0, 1, 0, 0, 3)),
    a(A::Ad2560x1440p60, S::Gen1920x240,   263, 0,  5, pll(2839, 11371, 30771,     0, 0, 1, 0, 0, 3)),

    /* Generic 264-line modes */
    a(A::Ad480p,         S::Gen720x240,    264, 0,  1, pll(8015,    48,   176,  3776, 0, 2, 0, 0, 0)),
    a(A::Ad720p60,       S::Gen960x240,    264, 0,  2, pll(5641,    11,    13,  1024, 0, 1, 0, 0, 0)),
    a(A::Ad1280x1024p60, S::Gen1280x240,   264, 0,  3, pll(4101,   208,   240,   544, 0, 4, 0, 0, 0)),
    a(A::Ad1080i60Lb,    S::Gen1280x240,   264, 0,  1, pll(4103,    20,    52,  1024, 0, 1, 0, 0, 0)),
    a(A::Ad1080p60Lb,    S::Gen1280x240,   264, 0,  3, pll(4103,    20,    52,   256, 0, 1, 0, 0, 0)),
    a(A::Ad1080p60Cr,    S::Gen1600x240,   264, 0,  4, pll(3180,     4,    13,   256, 0, 1, 0, 0, 0)),
    a(A::Ad1600x1200p60, S::Gen1600x240,   264, 0,  4, pll(2173,    45,   143,     0, 0, 1, 0, 0, 3)),
    a(A::Ad1920x1200p60, S::Gen1600x240,   264, 0,  4, pll(2042,    82,    99,     0, 0, 1, 0, 0, 3)),
    a(A::Ad1920x1440p60, S::Gen1920x240,   264, 0,  5, pll(2041,    31,   297,     0, 0, 1, 0, 0, 3)),
    a(A::Ad2560x1440p60, S::Gen1920x240,   264, 0,  5, pll(2826,  2606,  3861,     0, 0, 1, 0, 0, 3)),

    /* Generic 311-line modes */
    a(A::Ad576p,         S::Gen720x288,    311, 0,  1, pll(7976,   232,   311,  3712, 0, 1, 0, 0, 0)),
    a(A::Ad1080i50Cr,    S::Gen1536x288,   311, 0,  1, pll(3405,  3569,  4043,  1024, 0, 1, 0, 0, 0)),
    a(A::Ad1080p50Cr,    S::Gen1536x288,   311, 0,  3, pll(3405,  3569,  4043,   256, 0, 1, 0, 0, 0)),
    a(A::Ad1920x1200p50, S::Gen1536x288,   311, 0,  3, pll(2275,  6391, 36387,     0, 0, 1, 0, 0, 3)),
    a(A::Ad1920x1440p50, S::Gen1920x288,   311, 0,  4, pll(2194,  4386, 20215,     0, 0, 1, 0, 0, 3)),
    a(A::Ad2560x1440p50, S::Gen1920x288,   311, 0,  4, pll(2308, 26228, 36387,     0, 0, 1, 0, 0, 3)),

    /* Generic 312-line modes */
    a(A::Ad576p,         S::Gen720x288,    312, 0,  1, pll(8013,   800,  1248,  3744, 0, 4, 0, 0, 0)),
    a(A::Ad1080i50Cr,    S::Gen1536x288,   312, 0,  1, pll(3393,   220,   676,  1024, 0, 1, 0, 0, 0)),
    a(A::Ad1080p50Cr,    S::Gen1536x288,   312, 0,  3, pll(3393,   220,   676,   256, 0, 1, 0, 0, 0)),
    a(A::Ad1920x1200p50, S::Gen1536x288,   312, 0,  3, pll(2266,  1106,  4563,     0, 0, 1, 0, 0, 3)),
    a(A::Ad1920x1440p50, S::Gen1920x288,   312, 0,  4, pll(2185,   459,   845,     0, 0, 1, 0, 0, 3)),
    a(A::Ad2560x1440p50, S::Gen1920x288,   312, 0,  4, pll(2299,  3103,  4563,     0, 0, 1, 0, 0, 3)),

    /* Generic 313-line modes */
    a(A::Ad576p,         S::Gen720x288,    313, 0,  1, pll(7986,   504,  1252,  3744, 0, 4, 0, 0, 0)),
    a(A::Ad1080i50Cr,    S::Gen1536x288,   313, 0,  1, pll(3380,  3452,  4069,  1024, 0, 1, 0, 0, 0)),
    a(A::Ad1080p50Cr,    S::Gen1536x288,   313, 0,  3, pll(3380,  3452,  4069,   256, 0, 1, 0, 0, 0)),
    a(A::Ad1920x1200p50, S::Gen1536x288,   313, 0,  3, pll(2257, 13411, 36621,     0, 0, 1, 0, 0, 3)),
    a(A::Ad1920x1440p50, S::Gen1920x288,   313, 0,  4, pll(2176, 18816, 20345,     0, 0, 1, 0, 0, 3)),
    a(A::Ad2560x1440p50, S::Gen1920x288,   313, 0,  4, pll(2290, 25526, 36621,     0, 0, 1, 0, 0, 3)),

    /* Generic 314-line modes */
    a(A::Ad576p,         S::Gen720x288,    314, 0,  1, pll(7959,   424,  1256,  3744, 0, 4, 0, 0, 0)),
    a(A::Ad1080i50Cr,    S::Gen1536x288,   314, 0,  1, pll(3368,   920,  2041,  1024, 0, 1, 0, 0, 0)),
    a(A::Ad1080p50Cr,    S::Gen1536x288,   314, 0,  3, pll(3368,   920,  2041,   256, 0, 1, 0, 0, 0)),
    a(A::Ad1920x1200p50, S::Gen1536x288,   314, 0,  3, pll(2248, 10040, 18369,     0, 0, 1, 0, 0, 3)),
    a(A::Ad1920x1440p50, S::Gen1920x288,   314, 0,  4, pll(2168,  3688, 10205,     0, 0, 1, 0, 0, 3)),
    a(A::Ad2560x1440p50, S::Gen1920x288,   314, 0,  4, pll(2281, 14167, 18369,     0, 0, 1, 0, 0, 3)),

    /* Generic 525-line interlace modes */
    a(A::Ad240p,         S::Gen720x480i,   525, 0,  0, pll(8015,   127,   175,  8032, 0, 4, 0, 0, 0)),
    a(A::Ad1280x1024p60, S::Gen1280x480i,  525, 0,  3, pll(4128,   608,  2625,   544, 0, 4, 0, 0, 0)),
    a(A::Ad1080i60Lb,    S::Gen1280x480i,  525, 0,  1, pll(4129,    69,    91,  1024, 0, 1, 0, 0, 0)),
    a(A::Ad1080p60Lb,    S::Gen1280x480i,  525, 0,  3, pll(4129,    69,    91,   256, 0, 1, 0, 0, 0)),
    a(A::Ad1920x1440p60, S::Gen1920x480i,  525, 0,  5, pll(2055,  3277,  4725,     0, 0, 1, 0, 0, 3)),
    a(A::Ad2560x1440p60, S::Gen1920x480i,  525, 0,  5, pll(2845, 46259, 61425,     0, 0, 1, 0, 0, 3)),

    /* Generic 525-line interlace 16:9 modes */
    a(A::Ad1080i60Lb,    S::Gen1707x480iWs, 525, 0, 1, pll(2969,    29,    91,  1024, 0, 1, 0, 0, 0)),
    a(A::Ad1080p60Lb,    S::Gen1707x480iWs, 525, 0, 3, pll(2969,    29,    91,   256, 0, 1, 0, 0, 0)),
    a(A::Ad2560x1440p60, S::Gen1280x480iWs, 525, 1, 5, pll(4524, 12892, 20475,     0, 0, 1, 0, 0, 3)),

    /* Generic 625-line interlace modes */
    a(A::Ad288p,         S::Gen720x576i,   625, 0,  0, pll(8018,   206,   625,  8032, 0, 4, 0, 0, 0)),
    a(A::Ad1080i50Cr,    S::Gen1536x576i,  625, 0,  1, pll(3387,     1,    13,  1024, 0, 1, 0, 0, 0)),
    a(A::Ad1080p50Cr,    S::Gen1536x576i,  625, 0,  3, pll(3387,     1,    13,   256, 0, 1, 0, 0, 0)),

    /* Generic 524-line modes */
    a(A::Ad240p,         S::Gen720x480,    524, 0, -1, pll(3744,     0,     4,  8000, 0, 2, 0, 0, 0)),
    a(A::Ad1280x1024p60, S::Gen1280x480,   524, 0,  1, pll(4137,   228,  2620,   544, 0, 4, 1, 0, 0)),
    a(A::Ad1080i60Lb,    S::Gen1280x480,   524, 0,  0, pll(4138,  1050,  1703,  1024, 0, 1, 1, 0, 0)),
    a(A::Ad1080p60Lb,    S::Gen1280x480,   524, 0,  1, pll(4138,  1050,  1703,   256, 0, 1, 1, 0, 0)),
    a(A::Ad1920x1440p60, S::Gen1920x480,   524, 0,  2, pll(2060,   700,  1179,     0, 0, 1, 1, 0, 3)),
    a(A::Ad2560x1440p60, S::Gen1920x480,   524, 0,  2, pll(2852,  2468, 15327,     0, 0, 1, 1, 0, 3)),

    /* Generic 525-line modes */
    a(A::Ad240p,         S::Gen720x480,    525, 0, -1, pll(3751,   302,   350,  8032, 0, 4, 0, 0, 0)),
    a(A::Ad1280x1024p60, S::Gen1280x480,   525, 0,  1, pll(4128,   608,  2625,   544, 0, 4, 1, 0, 0)),
    a(A::Ad1080i60Lb,    S::Gen1280x480,   525, 0,  0, pll(4129,    69,    91,  1024, 0, 1, 1, 0, 0)),
    a(A::Ad1080p60Lb,    S::Gen1280x480,   525, 0,  1, pll(4129,    69,    91,   256, 0, 1, 1, 0, 0)),
    a(A::Ad1920x1440p60, S::Gen1920x480,   525, 0,  2, pll(2055,  3277,  4725,     0, 0, 1, 1, 0, 3)),
    a(A::Ad2560x1440p60, S::Gen1920x480,   525, 0,  2, pll(2845, 46259, 61425,     0, 0, 1, 1, 0, 3)),

    /* Generic 525-line 16:9 modes */
    a(A::Ad1080i60Lb,    S::Gen1707x480Ws, 525, 0,  0, pll(2969,    29,    91,  1024, 0, 1, 1, 0, 0)),
    a(A::Ad1080p60Lb,    S::Gen1707x480Ws, 525, 0,  1, pll(2969,    29,    91,   256, 0, 1, 1, 0, 0)),
    a(A::Ad2560x1440p60, S::Gen1280x480Ws, 525, 1,  2, pll(4524, 12892, 20475,     0, 0, 1, 1, 0, 3)),

    /* Generic 526-line modes */
    a(A::Ad240p,         S::Gen720x480,    526, 0, -1, pll(3743,   796,  1052,  8032, 0, 4, 0, 0, 0)),
    a(A::Ad1280x1024p60, S::Gen1280x480,   526, 0,  1, pll(4119,  1078,  2630,   544, 0, 4, 1, 0, 0)),
    a(A::Ad1080i60Lb,    S::Gen1280x480,   526, 0,  0, pll(4120,  3192,  3419,  1024, 0, 1, 1, 0, 0)),
    a(A::Ad1080p60Lb,    S::Gen1280x480,   526, 0,  1, pll(4120,  3192,  3419,   256, 0, 1, 1, 0, 0)),
    a(A::Ad1920x1440p60, S::Gen1920x480,   526, 0,  2, pll(2050,  1922,  2367,     0, 0, 1, 1, 0, 3)),
    a(A::Ad2560x1440p60, S::Gen1920x480,   526, 0,  2, pll(2839, 11371, 30771,     0, 0, 1, 1, 0, 3)),

    /* Generic 624-line modes */
    a(A::Ad288p,         S::Gen720x576,    624, 0, -1, pll(3744,     0,     4,  8000, 0, 2, 0, 0, 0)),
    a(A::Ad1920x1200p50, S::Gen1536x576,   624, 0,  1, pll(2266,  1106,  4563,     0, 0, 1, 1, 0, 3)),

    /* Generic 625-line modes */
    a(A::Ad288p,         S::Gen720x576,    625, 0, -1, pll(3753,   103,   625,  8032, 0, 4, 0, 0, 0)),
    a(A::Ad1920x1200p50, S::Gen1536x576,   625, 0,  1, pll(2261, 11659, 14625,     0, 0, 1, 1, 0, 3)),

    /* Generic 626-line modes */
    a(A::Ad288p,         S::Gen720x576,    626, 0, -1, pll(3746,   110,   313,  8032, 0, 4, 0, 0, 0)),
    a(A::Ad1920x1200p50, S::Gen1536x576,   626, 0,  1, pll(2257, 13411, 36621,     0, 0, 1, 1, 0, 3)),

    /* DTV 480i 4:3 modes */
    a(A::Ad240p,         S::Dtv480i,         0, 0,  0, pll(8015,   127,   175,  8032, 0, 4, 0, 0, 0)),
    a(A::Ad1280x1024p60, S::Dtv480i,         0, 1,  3, pll(7924,   412,   525,   544, 0, 4, 0, 0, 0)),
    a(A::Ad1080i60Lb,    S::Dtv480i,         0, 1,  1, pll(7927,    51,    91,  1024, 0, 1, 0, 0, 0)),
    a(A::Ad1080p60Lb,    S::Dtv480i,         0, 1,  3, pll(7927,    51,    91,   256, 0, 1, 0, 0, 0)),
    a(A::Ad1920x1440p60, S::Dtv480i,         0, 2,  5, pll(6490,  2774,  3465,     0, 0, 1, 0, 0, 3)),
    a(A::Ad2560x1440p60, S::Dtv480i,         0, 2,  5, pll(8645, 22903, 45045,     0, 0, 1, 0, 0, 3)),

    /* DTV 480i 16:9 modes */
    a(A::Ad1080i60Lb,    S::Dtv480iWs,       0, 2,  1, pll(7927,    51,    91,  1024, 0, 1, 0, 0, 0)),
    a(A::Ad1080p60Lb,    S::Dtv480iWs,       0, 2,  3, pll(7927,    51,    91,   256, 0, 1, 0, 0, 0)),
    a(A::Ad2560x1440p60, S::Dtv480iWs,       0, 3,  5, pll(8645, 22903, 45045,     0, 0, 1, 0, 0, 3)),

    /* DTV 576i 4:3 modes */
    a(A::Ad288p,         S::Dtv576i,         0, 0,  0, pll(8018,   206,   625,  8032, 0, 4, 0, 0, 0)),
    a(A::Ad1080i50Cr,    S::Dtv576i,         0, 1,  1, pll(7936,     0,     1,  1024, 0, 1, 0, 0, 0)),
    a(A::Ad1080p50Cr,    S::Dtv576i,         0, 1,  3, pll(7936,     0,     1,   256, 0, 1, 0, 0, 0)),

    /* VESA 640x480_60 modes */
    a(A::Ad240p,         S::Vga480p60,       0, 0, -1, pll(4095, 34656,140000,  8096, 0, 4, 0, 0, 0)),
    a(A::Ad1280x1024p60, S::Vga480p60,       0, 1,  1, pll(4012,  7904, 35000,   544, 0, 4, 0, 0, 0)),
    a(A::Ad1080i60Lb,    S::Vga480p60,       0, 1,  0, pll(4013,    10,    14,  1024, 0, 1, 0, 0, 0)),
    a(A::Ad1080p60Lb,    S::Vga480p60,       0, 1,  1, pll(4013,    10,    14,   256, 0, 1, 0, 0, 0)),
    a(A::Ad1920x1440p60, S::Vga480p60,       0, 2,  2, pll(3243,   661,  2625,     0, 0, 1, 0, 0, 3)),
    a(A::Ad2560x1440p60, S::Vga480p60,       0, 2,  2, pll(4398,  1874,  2625,     0, 0, 1, 0, 0, 3)),

    /* DTV 480p 4:3 modes */
    a(A::Ad1280x1024p60, S::Dtv480p,         0, 1,  1, pll(3706,   206,   525,   544, 0, 4, 0, 0, 0)),
    a(A::Ad1080i60Lb,    S::Dtv480p,         0, 1,  0, pll(3707,    71,    91,  1024, 0, 1, 0, 0, 0)),
    a(A::Ad1080p60Lb,    S::Dtv480p,         0, 1,  1, pll(3707,    71,    91,   256, 0, 1, 0, 0, 0)),
    a(A::Ad1920x1440p60, S::Dtv480p,         0, 2,  2, pll(2989,  1387,  3465,     0, 0, 1, 0, 0, 3)),
    a(A::Ad2560x1440p60, S::Dtv480p,         0, 2,  2, pll(4066, 33974, 45045,     0, 0, 1, 0, 0, 3)),

    /* DTV 480p 16:9 modes */
    a(A::Ad1080i60Lb,    S::Dtv480pWs,       0, 2,  0, pll(3707,    71,    91,  1024, 0, 1, 0, 0, 0)),
    a(A::Ad1080p60Lb,    S::Dtv480pWs,       0, 2,  1, pll(3707,    71,    91,   256, 0, 1, 0, 0, 0)),
    a(A::Ad2560x1440p60, S::Dtv480pWs,       0, 3,  2, pll(4066, 33974, 45045,     0, 0, 1, 0, 0, 3)),

    /* (S)NES 256x240 modes (NTSC) */
    a(A::Ad480p,         S::Snes256x240,     0, 1,  1, pll(4812,  3344, 16244,  3712, 0, 1, 0, 0, 0)),
    a(A::Ad720p60,       S::Snes256x240,     0, 3,  2, pll(4806,  3602,  4061,  1024, 0, 1, 0, 0, 0)),
    a(A::Ad1280x1024p60, S::Snes256x240,     0, 4,  3, pll(4805,  1118,  8122,   544, 0, 4, 0, 0, 0)),
    a(A::Ad1080i60Lb,    S::Snes256x240,     0, 4,  1, pll(4806,  3602,  4061,  1024, 0, 1, 0, 0, 0)),
    a(A::Ad1080p60Lb,    S::Snes256x240,     0, 4,  3, pll(4806,  3602,  4061,   256, 0, 1, 0, 0, 0)),
    a(A::Ad1080p60Cr,    S::Snes256x240,     0, 5,  4, pll(4806,  3602,  4061,   256, 0, 1, 0, 0, 0)),
    a(A::Ad1600x1200p60, S::Snes256x240,     0, 5,  4, pll(3356, 12572, 44671,     0, 0, 1, 0, 0, 3)),
    a(A::Ad1920x1200p60, S::Snes256x240,     0, 5,  4, pll(3168, 13920, 44671,     0, 0, 1, 0, 0, 3)),
    a(A::Ad1920x1440p60, S::Snes256x240,     0, 6,  5, pll(3901, 17597, 44671,     0, 0, 1, 0, 0, 3)),

    /* SNES 512x240 modes (NTSC) */
    a(A::Ad480p,         S::Snes512x240,     0, 0,  1, pll(4812,  3344, 16244,  3712, 0, 1, 0, 0, 0)),
    a(A::Ad720p60,       S::Snes512x240,     0, 1,  2, pll(4806,  3602,  4061,  1024, 0, 1, 0, 0, 0)),
    a(A::Ad1280x1024p60, S::Snes512x240,     0, 1,  3, pll(4805,  1118,  8122,   544, 0, 4, 0, 0, 0)),
    a(A::Ad1080i60Lb,    S::Snes512x240,     0, 1,  1, pll(4806,  3602,  4061,  1024, 0, 1, 0, 0, 0)),
    a(A::Ad1080p60Lb,    S::Snes512x240,     0, 1,  3, pll(4806,  3602,  4061,   256, 0, 1, 0, 0, 0)),
    a(A::Ad1080p60Cr,    S::Snes512x240,     0, 2,  4, pll(4806,  3602,  4061,   256, 0, 1, 0, 0, 0)),
    a(A::Ad1600x1200p60, S::Snes512x240,     0, 2,  4, pll(3356, 12572, 44671,     0, 0, 1, 0, 0, 3)),
    a(A::Ad1920x1200p60, S::Snes512x240,     0, 2,  4, pll(3168, 13920, 44671,     0, 0, 1, 0, 0, 3)),
    a(A::Ad1920x1440p60, S::Snes512x240,     0, 3,  5, pll(3901, 17597, 44671,     0, 0, 1, 0, 0, 3)),

    /* MD 256x224 modes (NTSC) */
    a(A::Ad480p,         S::Md256x224,       0, 1,  1, pll(6619,  2536,  3144,  3744, 0, 4, 0, 0, 0)),
    a(A::Ad720p60,       S::Md256x224,       0, 3,  2, pll(6559,   281,  2489,  1024, 0, 1, 0, 0, 0)),
    a(A::Ad1280x1024p60, S::Md256x224,       0, 4,  3, pll(6556, 17636, 22401,   544, 0, 4, 0, 0, 0)),
    a(A::Ad1080i60Lb,    S::Md256x224,       0, 4,  1, pll(6559,   281,  2489,  1024, 0, 1, 0, 0, 0)),
    a(A::Ad1080p60Lb,    S::Md256x224,       0, 4,  3, pll(6559,   281,  2489,   256, 0, 1, 0, 0, 0)),
    a(A::Ad1080p60Cr,    S::Md256x224,       0, 5,  4, pll(6559,   281,  2489,   256, 0, 1, 0, 0, 0)),
    a(A::Ad1600x1200p60, S::Md256x224,       0, 5,  4, pll(4630,  1562,  2489,     0, 0, 1, 0, 0, 3)),
    a(A::Ad1920x1200p60, S::Md256x224,       0, 5,  4, pll(4380,  2596,  3537,     0, 0, 1, 0, 0, 3)),
    a(A::Ad1920x1440p60, S::Md256x224,       0, 6,  5, pll(5355, 21439, 67203,     0, 0, 1, 0, 0, 3)),

    /* MD 320x224 modes (NTSC) */
    a(A::Ad480p,         S::Md320x224,       0, 1,  1, pll(8046,    88,   524,  3744, 0, 4, 0, 0, 0)),
    a(A::Ad720p60,       S::Md320x224,       0, 2,  2, pll(7973,   835,  2489,  1024, 0, 1, 0, 0, 0)),
    a(A::Ad1280x1024p60, S::Md320x224,       0, 3,  3, pll(7970, 20338, 37335,   544, 0, 4, 0, 0, 0)),
    a(A::Ad1080i60Lb,    S::Md320x224,       0, 3,  1, pll(7973,   835,  2489,  1024, 0, 1, 0, 0, 0)),
    a(A::Ad1080p60Lb,    S::Md320x224,       0, 3,  3, pll(7973,   835,  2489,   256, 0, 1, 0, 0, 0)),
    a(A::Ad1080p60Cr,    S::Md320x224,       0, 4,  4, pll(7973,   835,  2489,   256, 0, 1, 0, 0, 0)),
    a(A::Ad1600x1200p60, S::Md320x224,       0, 4,  4, pll(5659,   381,  2489,     0, 0, 1, 0, 0, 3)),
    a(A::Ad1920x1200p60, S::Md320x224,       0, 4,  4, pll(5359,   331,  1179,     0, 0, 1, 0, 0, 3)),
    a(A::Ad1920x1440p60, S::Md320x224,       0, 5,  5, pll(6528, 17536, 22401,     0, 0, 1, 0, 0, 3)),

    /* PSX 256x240 modes (NTSC) */
    a(A::Ad480p,         S::Psx256x240,      0, 1,  1, pll(3759, 499651, 897619, 3744, 0, 4, 1, 0, 0)),
    a(A::Ad720p60,       S::Psx256x240,      0, 3,  2, pll(3723, 183535, 897619, 1024, 0, 1, 1, 0, 0)),
    a(A::Ad1280x1024p60, S::Psx256x240,      0, 4,  3, pll(3721, 728469, 897619,  544, 0, 4, 1, 0, 0)),
    a(A::Ad1080i60Lb,    S::Psx256x240,      0, 4,  1, pll(3723, 183535, 897619, 1024, 0, 1, 1, 0, 0)),
    a(A::Ad1080p60Lb,    S::Psx256x240,      0, 4,  3, pll(3723, 183535, 897619,  256, 0, 1, 1, 0, 0)),
    a(A::Ad1080p60Cr,    S::Psx256x240,      0, 5,  4, pll(3723, 183535, 897619,  256, 0, 1, 1, 0, 0)),
    a(A::Ad1600x1200p60, S::Psx256x240,      0, 5,  4, pll(2568, 133480, 897619,    0, 0, 1, 1, 0, 3)),
    a(A::Ad1920x1200p60, S::Psx256x240,      0, 5,  4, pll(2418, 427530, 897619,    0, 0, 1, 1, 0, 3)),
    a(A::Ad1920x1440p60, S::Psx256x240,      0, 6,  5, pll(3002, 178354, 897619,    0, 0, 1, 1, 0, 3)),

    /* PSX 320x240 modes (NTSC) */
    a(A::Ad480p,         S::Psx320x240,      0, 1,  1, pll(3759, 499651, 897619, 3744, 0, 4, 1, 0, 0)),
    a(A::Ad720p60,       S::Psx320x240,      0, 2,  2, pll(3723, 183535, 897619, 1024, 0, 1, 1, 0, 0)),
    a(A::Ad1280x1024p60, S::Psx320x240,      0, 3,  3, pll(3721, 728469, 897619,  544, 0, 4, 1, 0, 0)),
    a(A::Ad1080i60Lb,    S::Psx320x240,      0, 3,  1, pll(3723, 183535, 897619, 1024, 0, 1, 1, 0, 0)),
    a(A::Ad1080p60Lb,    S::Psx320x240,      0, 3,  3, pll(3723, 183535, 897619,  256, 0, 1, 1, 0, 0)),
    a(A::Ad1080p60Cr,    S::Psx320x240,      0, 4,  4, pll(3723, 183535, 897619,  256, 0, 1, 1, 0, 0)),
    a(A::Ad1600x1200p60, S::Psx320x240,      0, 4,  4, pll(2568, 133480, 897619,    0, 0, 1, 1, 0, 3)),
    a(A::Ad1920x1200p60, S::Psx320x240,      0, 4,  4, pll(2418, 427530, 897619,    0, 0, 1, 1, 0, 3)),
    a(A::Ad1920x1440p60, S::Psx320x240,      0, 5,  5, pll(3002, 178354, 897619,    0, 0, 1, 1, 0, 3)),

    /* PSX 384x240 modes (NTSC) */
    a(A::Ad480p,         S::Psx384x240,      0, 1,  1, pll(3759, 499651, 897619, 3744, 0, 4, 1, 0, 0)),
    a(A::Ad720p60,       S::Psx384x240,      0, 2,  2, pll(3723, 183535, 897619, 1024, 0, 1, 1, 0, 0)),
    a(A::Ad1280x1024p60, S::Psx384x240,      0, 2,  3, pll(3721, 728469, 897619,  544, 0, 4, 1, 0, 0)),
    a(A::Ad1080i60Lb,    S::Psx384x240,      0, 2,  1, pll(3723, 183535, 897619, 1024, 0, 1, 1, 0, 0)),
    a(A::Ad1080p60Lb,    S::Psx384x240,      0, 2,  3, pll(3723, 183535, 897619,  256, 0, 1, 1, 0, 0)),
    a(A::Ad1080p60Cr,    S::Psx384x240,      0, 3,  4, pll(3723, 183535, 897619,  256, 0, 1, 1, 0, 0)),
    a(A::Ad1600x1200p60, S::Psx384x240,      0, 3,  4, pll(2568, 133480, 897619,    0, 0, 1, 1, 0, 3)),
    a(A::Ad1920x1200p60, S::Psx384x240,      0, 3,  4, pll(2418, 427530, 897619,    0, 0, 1, 1, 0, 3)),
    a(A::Ad1920x1440p60, S::Psx384x240,      0, 4,  5, pll(3002, 178354, 897619,    0, 0, 1, 1, 0, 3)),

    /* PSX 512x240 modes (NTSC) */
    a(A::Ad480p,         S::Psx512x240,      0, 0,  1, pll(3759, 499651, 897619, 3744, 0, 4, 1, 0, 0)),
    a(A::Ad720p60,       S::Psx512x240,      0, 1,  2, pll(3723, 183535, 897619, 1024, 0, 1, 1, 0, 0)),
    a(A::Ad1280x1024p60, S::Psx512x240,      0, 1,  3, pll(3721, 728469, 897619,  544, 0, 4, 1, 0, 0)),
    a(A::Ad1080i60Lb,    S::Psx512x240,      0, 1,  1, pll(3723, 183535, 897619, 1024, 0, 1, 1, 0, 0)),
    a(A::Ad1080p60Lb,    S::Psx512x240,      0, 1,  3, pll(3723, 183535, 897619,  256, 0, 1, 1, 0, 0)),
    a(A::Ad1080p60Cr,    S::Psx512x240,      0, 2,  4, pll(3723, 183535, 897619,  256, 0, 1, 1, 0, 0)),
    a(A::Ad1600x1200p60, S::Psx512x240,      0, 2,  4, pll(2568, 133480, 897619,    0, 0, 1, 1, 0, 3)),
    a(A::Ad1920x1200p60, S::Psx512x240,      0, 2,  4, pll(2418, 427530, 897619,    0, 0, 1, 1, 0, 3)),
    a(A::Ad1920x1440p60, S::Psx512x240,      0, 2,  5, pll(3002, 178354, 897619,    0, 0, 1, 1, 0, 3)),

    /* PSX 640x240 modes (NTSC) */
    a(A::Ad480p,         S::Psx640x240,      0, 0,  1, pll(3759, 499651, 897619, 3744, 0, 4, 1, 0, 0)),
    a(A::Ad720p60,       S::Psx640x240,      0, 1,  2, pll(3723, 183535, 897619, 1024, 0, 1, 1, 0, 0)),
    a(A::Ad1280x1024p60, S::Psx640x240,      0, 1,  3, pll(3721, 728469, 897619,  544, 0, 4, 1, 0, 0)),
    a(A::Ad1080i60Lb,    S::Psx640x240,      0, 1,  1, pll(3723, 183535, 897619, 1024, 0, 1, 1, 0, 0)),
    a(A::Ad1080p60Lb,    S::Psx640x240,      0, 1,  3, pll(3723, 183535, 897619,  256, 0, 1, 1, 0, 0)),
    a(A::Ad1080p60Cr,    S::Psx640x240,      0, 2,  4, pll(3723, 183535, 897619,  256, 0, 1, 1, 0, 0)),
    a(A::Ad1600x1200p60, S::Psx640x240,      0, 1,  4, pll(2568, 133480, 897619,    0, 0, 1, 1, 0, 3)),
    a(A::Ad1920x1200p60, S::Psx640x240,      0, 2,  4, pll(2418, 427530, 897619,    0, 0, 1, 1, 0, 3)),
    a(A::Ad1920x1440p60, S::Psx640x240,      0, 2,  5, pll(3002, 178354, 897619,    0, 0, 1, 1, 0, 3)),

    /* Saturn 320x240 modes (NTSC) */
    a(A::Ad480p,         S::Sat320x240,      0, 1,  1, pll(8033, 276890, 448678, 3744, 0, 4, 0, 0, 0)),
    a(A::Ad720p60,       S::Sat320x240,      0, 2,  2, pll(7960, 199992, 224339, 1024, 0, 1, 0, 0, 0)),
    a(A::Ad1280x1024p60, S::Sat320x240,      0, 3,  3, pll(7958,  23518, 224339,  544, 0, 4, 0, 0, 0)),
    a(A::Ad1080i60Lb,    S::Sat320x240,      0, 3,  1, pll(7960, 199992, 224339, 1024, 0, 1, 0, 0, 0)),
    a(A::Ad1080p60Lb,    S::Sat320x240,      0, 3,  3, pll(7960, 199992, 224339,  256, 0, 1, 0, 0, 0)),
    a(A::Ad1080p60Cr,    S::Sat320x240,      0, 4,  4, pll(7960, 199992, 224339,  256, 0, 1, 0, 0, 0)),
    a(A::Ad1600x1200p60, S::Sat320x240,      0, 4,  4, pll(5650,  23082, 224339,    0, 0, 1, 0, 0, 3)),
    a(A::Ad1920x1200p60, S::Sat320x240,      0, 4,  4, pll(5350, 150382, 224339,    0, 0, 1, 0, 0, 3)),
    a(A::Ad1920x1440p60, S::Sat320x240,      0, 5,  5, pll(6518, 102590, 224339,    0, 0, 1, 0, 0, 3)),
    a(A::Ad2560x1440p60, S::Sat320x240,      0, 5,  5, pll(8681, 151413, 224339,    0, 0, 1, 0, 0, 3)),

    /* Saturn 352x240 modes (NTSC) */
    a(A::Ad480p,         S::Sat352x240,      0, 1,  1, pll(7498,    360,   1052, 3744, 0, 4, 0, 0, 0)),
    a(A::Ad720p60,       S::Sat352x240,      0, 2,  2, pll(7430,   4114,  23933, 1024, 0, 1, 0, 0, 0)),
    a(A::Ad1280x1024p60, S::Sat352x240,      0, 3,  3, pll(7424,   5153,   9205,  544, 0, 4, 0, 0, 0)),
    a(A::Ad1080i60Lb,    S::Sat352x240,      0, 3,  1, pll(7430,   4114,  23933, 1024, 0, 1, 0, 0, 0)),
    a(A::Ad1080p60Lb,    S::Sat352x240,      0, 3,  3, pll(7430,   4114,  23933,  256, 0, 1, 0, 0, 0)),
    a(A::Ad1080p60Cr,    S::Sat352x240,      0, 4,  4, pll(7430,   4114,  23933,  256, 0, 1, 0, 0, 0)),
    a(A::Ad1600x1200p60, S::Sat352x240,      0, 4,  4, pll(5264,   2992,  29333,    0, 0, 1, 0, 0, 3)),
    a(A::Ad1920x1200p60, S::Sat352x240,      0, 4,  4, pll(4983,    825,   1841,    0, 0, 1, 0, 0, 3)),
    a(A::Ad1920x1440p60, S::Sat352x240,      0, 5,  5, pll(6078,    162,   1841,    0, 0, 1, 0, 0, 3)),
    a(A::Ad2560x1440p60, S::Sat352x240,      0, 5,  5, pll(8105,  19323,  23933,    0, 0, 1, 0, 0, 3)),

    /* Saturn 640x240 modes (NTSC) */
    a(A::Ad480p,         S::Sat640x240,      0, 0,  1, pll(8033, 276890, 448678, 3744, 0, 4, 0, 0, 0)),
    a(A::Ad720p60,       S::Sat640x240,      0, 1,  2, pll(7960, 199992, 224339, 1024, 0, 1, 0, 0, 0)),
    a(A::Ad1280x1024p60, S::Sat640x240,      0, 1,  3, pll(7958,  23518, 224339,  544, 0, 4, 0, 0, 0)),
    a(A::Ad1080i60Lb,    S::Sat640x240,      0, 1,  1, pll(7960, 199992, 224339, 1024, 0, 1, 0, 0, 0)),
    a(A::Ad1080p60Lb,    S::Sat640x240,      0, 1,  3, pll(7960, 199992, 224339,  256, 0, 1, 0, 0, 0)),
    a(A::Ad1080p60Cr,    S::Sat640x240,      0, 2,  4, pll(7960, 199992, 224339,  256, 0, 1, 0, 0, 0)),
    a(A::Ad1600x1200p60, S::Sat640x240,      0, 1,  4, pll(5650,  23082, 224339,    0, 0, 1, 0, 0, 3)),
    a(A::Ad1920x1200p60, S::Sat640x240,      0, 2,  4, pll(5350, 150382, 224339,    0, 0, 1, 0, 0, 3)),
    a(A::Ad1920x1440p60, S::Sat640x240,      0, 2,  5, pll(6518, 102590, 224339,    0, 0, 1, 0, 0, 3)),
    a(A::Ad2560x1440p60, S::Sat640x240,      0, 2,  5, pll(8681, 151413, 224339,    0, 0, 1, 0, 0, 3)),

    /* Saturn 704x240 modes (NTSC) */
    a(A::Ad480p,         S::Sat704x240,      0, 0,  1, pll(7498,    360,   1052, 3744, 0, 4, 0, 0, 0)),
    a(A::Ad720p60,       S::Sat704x240,      0, 1,  2, pll(7430,   4114,  23933, 1024, 0, 1, 0, 0, 0)),
    a(A::Ad1280x1024p60, S::Sat704x240,      0, 1,  3, pll(7424,   5153,   9205,  544, 0, 4, 0, 0, 0)),
    a(A::Ad1080i60Lb,    S::Sat704x240,      0, 1,  1, pll(7430,   4114,  23933, 1024, 0, 1, 0, 0, 0)),
    a(A::Ad1080p60Lb,    S::Sat704x240,      0, 1,  3, pll(7430,   4114,  23933,  256, 0, 1, 0, 0, 0)),
    a(A::Ad1080p60Cr,    S::Sat704x240,      0, 2,  4, pll(7430,   4114,  23933,  256, 0, 1, 0, 0, 0)),
    a(A::Ad1600x1200p60, S::Sat704x240,      0, 1,  4, pll(5264,   2992,  29333,    0, 0, 1, 0, 0, 3)),
    a(A::Ad1920x1200p60, S::Sat704x240,      0, 2,  4, pll(4983,    825,   1841,    0, 0, 1, 0, 0, 3)),
    a(A::Ad1920x1440p60, S::Sat704x240,      0, 2,  5, pll(6078,    162,   1841,    0, 0, 1, 0, 0, 3)),
    a(A::Ad2560x1440p60, S::Sat704x240,      0, 2,  5, pll(8105,  19323,  23933,    0, 0, 1, 0, 0, 3)),

    /* N64 320x240 modes (NTSC) */
    a(A::Ad480p,         S::N64320x240,      0, 1,  1, pll(4199,   8638,   8942, 3744, 0, 4, 0, 0, 0)),
    a(A::Ad720p60,       S::N64320x240,      0, 2,  2, pll(4159, 352269, 406861, 1024, 0, 1, 0, 0, 0)),
    a(A::Ad1280x1024p60, S::N64320x240,      0, 3,  3, pll(4158,  10306,  31297,  544, 0, 4, 0, 0, 0)),
    a(A::Ad1080i60Lb,    S::N64320x240,      0, 3,  1, pll(4159, 352269, 406861, 1024, 0, 1, 0, 0, 0)),
    a(A::Ad1080p60Lb,    S::N64320x240,      0, 3,  3, pll(4159, 352269, 406861,  256, 0, 1, 0, 0, 0)),
    a(A::Ad1080p60Cr,    S::N64320x240,      0, 4,  4, pll(4159, 352269, 406861,  256, 0, 1, 0, 0, 0)),
    a(A::Ad1600x1200p60, S::N64320x240,      0, 4,  4, pll(2885, 293183, 406861,    0, 0, 1, 0, 0, 3)),
    a(A::Ad1920x1200p60, S::N64320x240,      0, 4,  4, pll(2720,  19296,  31297,    0, 0, 1, 0, 0, 3)),
    a(A::Ad1920x1440p60, S::N64320x240,      0, 5,  5, pll(3364,  16348,  31297,    0, 0, 1, 0, 0, 3)),
    a(A::Ad2560x1440p60, S::N64320x240,      0, 5,  5, pll(4557,   7143,  23933,    0, 0, 1, 0, 0, 3)),

    /* N64 640x240 modes (NTSC) */
    a(A::Ad480p,         S::N64640x240,      0, 0,  1, pll(4199,   8638,   8942, 3744, 0, 4, 0, 0, 0)),
    a(A::Ad720p60,       S::N64640x240,      0, 1,  2, pll(4159, 352269, 406861, 1024, 0, 1, 0, 0, 0)),
    a(A::Ad1280x1024p60, S::N64640x240,      0, 1,  3, pll(4158,  10306,  31297,  544, 0, 4, 0, 0, 0)),
    a(A::Ad1080i60Lb,    S::N64640x240,      0, 1,  1, pll(4159, 352269, 406861, 1024, 0, 1, 0, 0, 0)),
    a(A::Ad1080p60Lb,    S::N64640x240,      0, 1,  3, pll(4159, 352269, 406861,  256, 0, 1, 0, 0, 0)),
    a(A::Ad1080p60Cr,    S::N64640x240,      0, 2,  4, pll(4159, 352269, 406861,  256, 0, 1, 0, 0, 0)),
    a(A::Ad1600x1200p60, S::N64640x240,      0, 1,  4, pll(2885, 293183, 406861,    0, 0, 1, 0, 0, 3)),
    a(A::Ad1920x1200p60, S::N64640x240,      0, 2,  4, pll(2720,  19296,  31297,    0, 0, 1, 0, 0, 3)),
    a(A::Ad1920x1440p60, S::N64640x240,      0, 2,  5, pll(3364,  16348,  31297,    0, 0, 1, 0, 0, 3)),
    a(A::Ad2560x1440p60, S::N64640x240,      0, 2,  5, pll(4557,   7143,  23933,    0, 0, 1, 0, 0, 3)),
];
