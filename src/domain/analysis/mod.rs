//! Column analysis over the sliding window of past outcomes.
//!
//! Everything here is pure: the simulator owns the [`AnalysisWindow`] and
//! hands it in by reference each spin.

mod per_column;
mod selector;
mod statistics;
mod weights;
mod window;

pub use per_column::PerColumn;
pub use selector::{ColumnSelection, select_columns};
pub use statistics::{
    DEFAULT_OLD_STREAK_CUTOFF, StatisticsSnapshot, delays, frequencies, old_streaks,
    recent_streaks,
};
pub use weights::{WeightSet, generate_weights};
pub use window::AnalysisWindow;
