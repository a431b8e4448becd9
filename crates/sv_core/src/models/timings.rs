//! Sync timing descriptor shared by catalog presets and live measurements.

use serde::{Deserialize, Serialize};

/// Horizontal/vertical raster timings of a video mode.
///
/// Catalog entries are fully populated. On a live-measured descriptor a zero
/// field means "not yet known": the matchers backfill those fields from the
/// preset they settle on and never overwrite a measured (non-zero) value.
/// For interlaced modes `v_total` counts the lines of the full frame (both
/// fields) while the active/blanking fields describe a single field.
///
/// The saturation limits applied by the timing transform mirror the register
/// field widths of the video datapath, so values passed downstream always
/// fit their hardware fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Timings {
    pub h_active: u16,
    pub v_active: u16,
    /// Refresh-rate ceiling in Hz for preset matching (0 = unbounded).
    /// Live inputs carry their rounded measured rate here.
    pub v_hz_max: u8,
    /// Measured refresh rate in units of 0.01 Hz, informational. Zero on
    /// catalog entries.
    pub v_hz_x100: u32,
    pub h_total: u16,
    /// Fractional line-length correction in units of 0.05 samples,
    /// applied when the horizontal total is multiplied.
    pub h_total_adj: u8,
    pub v_total: u16,
    pub h_backporch: u16,
    pub v_backporch: u16,
    pub h_synclen: u16,
    pub v_synclen: u8,
    pub interlaced: bool,
}
