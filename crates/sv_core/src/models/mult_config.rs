//! Derived multiplier/scaler datapath configuration.

use serde::{Deserialize, Serialize};

/// Line multiplier and scaler placement configuration for a selected mode.
///
/// Fully derived by the matchers and recomputed on every selection; never an
/// input to matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MultConfig {
    /// Horizontal pixel repeat factor minus one.
    pub x_rpt: u8,
    /// Vertical line repeat factor minus one; -1 selects the half-rate mode
    /// that folds two input fields into one output frame.
    pub y_rpt: i8,
    /// Input samples skipped per kept pixel (console oversampling).
    pub h_skip: u8,
    pub x_offset: i16,
    pub y_offset: i16,
    pub x_size: u16,
    pub y_size: u16,
    /// Output line on which the frame start is synchronized to the input.
    pub framesync_line: u16,
    /// First line-buffer column to display when the image is cropped left.
    pub x_start_lb: u16,
    /// First line-buffer line to display; negative when the image is
    /// letterboxed inside the output raster.
    pub y_start_lb: i16,
    /// Whether the output pixel clock is genlocked to the input.
    pub framelock: bool,
}
