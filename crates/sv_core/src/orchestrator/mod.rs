//! Mode selection: ties a signal measurement, the operating configuration
//! and the catalog together into an output mode decision.

mod errors;
mod selector;

pub use errors::{SelectionError, SelectionResult};
pub use selector::{ModeSelector, Selection, SignalMeasurement};
