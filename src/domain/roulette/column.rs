use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three 12-number columns of the layout.
///
/// The house number (0) belongs to no column. Declaration order is the
/// tie-break order used everywhere a ranking is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Column {
    First,
    Second,
    Third,
}

const FIRST_MEMBERS: [u8; 12] = [1, 4, 7, 10, 13, 16, 19, 22, 25, 28, 31, 34];
const SECOND_MEMBERS: [u8; 12] = [2, 5, 8, 11, 14, 17, 20, 23, 26, 29, 32, 35];
const THIRD_MEMBERS: [u8; 12] = [3, 6, 9, 12, 15, 18, 21, 24, 27, 30, 33, 36];

impl Column {
    pub const ALL: [Column; 3] = [Column::First, Column::Second, Column::Third];

    /// Classify a spin number through the member tables. `0` and anything
    /// above 36 map to `None`.
    pub fn of(number: u8) -> Option<Column> {
        Column::ALL.into_iter().find(|column| column.contains(number))
    }

    pub fn members(self) -> &'static [u8; 12] {
        match self {
            Column::First => &FIRST_MEMBERS,
            Column::Second => &SECOND_MEMBERS,
            Column::Third => &THIRD_MEMBERS,
        }
    }

    pub fn contains(self, number: u8) -> bool {
        self.members().contains(&number)
    }

    /// Position in `Column::ALL`.
    pub fn index(self) -> usize {
        match self {
            Column::First => 0,
            Column::Second => 1,
            Column::Third => 2,
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Column::First => write!(f, "column_1"),
            Column::Second => write!(f, "column_2"),
            Column::Third => write!(f, "column_3"),
        }
    }
}
