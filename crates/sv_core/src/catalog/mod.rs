//! Mode catalog: the built-in preset tables and a mutable working copy.

mod adaptive;
mod modes;
mod sampling;

pub use adaptive::ADAPTIVE_MODES;
pub use modes::VIDEO_MODES_DEFAULT;
pub use sampling::SMP_PRESETS_DEFAULT;

use crate::models::{AdaptivePreset, ModePreset, SamplingPreset, SmpPreset, StdMode};

/// Default-table row rendered by each adaptive target, indexed by
/// [`AdMode`](crate::models::AdMode) discriminant. The 1080p60 letterbox and
/// crop targets share one output raster, hence the repeated entry.
pub const AD_MODE_ID_MAP: [StdMode; 19] = [
    StdMode::Mode240p,
    StdMode::Mode288p,
    StdMode::Mode480p,
    StdMode::Mode576p,
    StdMode::Mode720p50,
    StdMode::Mode720p60,
    StdMode::Mode1280x1024p60,
    StdMode::Mode1080i50,
    StdMode::Mode1080i60,
    StdMode::Mode1080p50,
    StdMode::Mode1080p60,
    StdMode::Mode1080p60,
    StdMode::Mode1600x1200p60,
    StdMode::Mode1920x1200p50,
    StdMode::Mode1920x1200p60,
    StdMode::Mode1920x1440p50,
    StdMode::Mode1920x1440p60,
    StdMode::Mode2560x1440p50,
    StdMode::Mode2560x1440p60,
];

/// Cycling order of the standalone test-pattern modes.
pub const STD_MODE_SEQUENCE: [StdMode; 15] = [
    StdMode::Mode240p,
    StdMode::Mode288p,
    StdMode::Mode480i,
    StdMode::Mode480p,
    StdMode::Mode576i,
    StdMode::Mode576p,
    StdMode::Mode720p60,
    StdMode::Mode1280x1024p60,
    StdMode::Mode1080i60,
    StdMode::Mode1080p60,
    StdMode::Mode1080p120,
    StdMode::Mode1600x1200p60,
    StdMode::Mode1920x1200p60,
    StdMode::Mode1920x1440p60,
    StdMode::Mode2560x1440p60,
];

/// Owned working copy of the output mode table.
///
/// The pure line multiplier scans and annotates this copy; the framelocked
/// and scaler paths read the default table rows through [`SmpPreset`] and
/// [`StdMode`] indices directly.
#[derive(Debug, Clone)]
pub struct Catalog {
    modes: Vec<ModePreset>,
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog {
            modes: VIDEO_MODES_DEFAULT.to_vec(),
        }
    }
}

impl Catalog {
    /// Output mode rows in scan (priority) order.
    pub fn modes(&self) -> &[ModePreset] {
        &self.modes
    }

    pub fn std_mode(&self, id: StdMode) -> &ModePreset {
        &self.modes[id as usize]
    }

    pub fn smp_preset(&self, id: SmpPreset) -> &'static SamplingPreset {
        &SMP_PRESETS_DEFAULT[id as usize]
    }

    /// Sampling preset rows in scan order.
    pub fn smp_presets(&self) -> &'static [SamplingPreset] {
        SMP_PRESETS_DEFAULT
    }

    /// Adaptive rows in table order.
    pub fn adaptive_modes(&self) -> &'static [AdaptivePreset] {
        ADAPTIVE_MODES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AdMode, SamplingMode, VideoGroup};

    #[test]
    fn std_mode_indices_track_table_rows() {
        assert_eq!(VIDEO_MODES_DEFAULT.len(), 48);
        assert_eq!(VIDEO_MODES_DEFAULT[StdMode::Mode240p as usize].name, "240p");
        assert_eq!(VIDEO_MODES_DEFAULT[StdMode::Mode288p as usize].name, "288p");
        assert_eq!(VIDEO_MODES_DEFAULT[StdMode::Mode480i as usize].name, "480i");
        assert_eq!(VIDEO_MODES_DEFAULT[StdMode::Mode480p as usize].name, "480p");
        assert_eq!(VIDEO_MODES_DEFAULT[StdMode::Mode576i as usize].name, "576i");
        assert_eq!(VIDEO_MODES_DEFAULT[StdMode::Mode576p as usize].name, "576p");
        assert_eq!(
            VIDEO_MODES_DEFAULT[StdMode::Mode1080p60 as usize].name,
            "1080p_60"
        );
        assert_eq!(
            VIDEO_MODES_DEFAULT[StdMode::Mode2560x1440p60 as usize].name,
            "2560x1440_60"
        );
    }

    #[test]
    fn smp_preset_indices_track_table_rows() {
        assert_eq!(SMP_PRESETS_DEFAULT.len(), 55);
        assert_eq!(
            SMP_PRESETS_DEFAULT[SmpPreset::Gen720x240 as usize].name,
            "720x240"
        );
        assert_eq!(
            SMP_PRESETS_DEFAULT[SmpPreset::Dtv480i as usize].sm,
            SamplingMode::OptDtv480i
        );
        assert_eq!(
            SMP_PRESETS_DEFAULT[SmpPreset::N64640x240 as usize].name,
            "N64 640x240"
        );
    }

    #[test]
    fn adaptive_rows_reference_matching_groups() {
        // Every generic adaptive row with a 262-line override must sample a
        // 240p-group preset.
        for row in ADAPTIVE_MODES
            .iter()
            .filter(|r| r.v_total_override == 262)
        {
            let smp = &SMP_PRESETS_DEFAULT[row.smp_preset as usize];
            assert_eq!(smp.group, VideoGroup::Grp240p);
        }
    }

    #[test]
    fn ad_mode_map_covers_every_target() {
        assert_eq!(AD_MODE_ID_MAP.len(), AdMode::COUNT);
        assert_eq!(AdMode::Ad1080p60Lb.output_mode(), StdMode::Mode1080p60);
        assert_eq!(AdMode::Ad1080p60Cr.output_mode(), StdMode::Mode1080p60);
    }

    #[test]
    fn catalog_starts_as_default_table() {
        let catalog = Catalog::default();
        assert_eq!(catalog.modes().len(), VIDEO_MODES_DEFAULT.len());
        assert_eq!(catalog.std_mode(StdMode::Mode480p).name, "480p");
    }
}
