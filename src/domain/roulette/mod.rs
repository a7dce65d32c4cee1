// Wheel vocabulary: spin outcomes and the three 12-number columns
mod column;
mod outcome;

pub use column::Column;
pub use outcome::{Color, HOUSE_NUMBER, MAX_NUMBER, Outcome};
