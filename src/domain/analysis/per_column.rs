use crate::domain::roulette::Column;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A value for every column. Never has a missing key.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PerColumn<T> {
    values: [T; 3],
}

impl<T> PerColumn<T> {
    pub fn new(first: T, second: T, third: T) -> Self {
        Self {
            values: [first, second, third],
        }
    }

    pub fn from_fn(mut f: impl FnMut(Column) -> T) -> Self {
        Self {
            values: Column::ALL.map(&mut f),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Column, &T)> {
        Column::ALL.into_iter().zip(self.values.iter())
    }

    pub fn values(&self) -> &[T; 3] {
        &self.values
    }
}

impl<T: Copy> PerColumn<T> {
    pub fn splat(value: T) -> Self {
        Self { values: [value; 3] }
    }
}

impl<T: Copy + std::iter::Sum<T>> PerColumn<T> {
    pub fn total(&self) -> T {
        self.values.iter().copied().sum()
    }
}

impl<T> Index<Column> for PerColumn<T> {
    type Output = T;

    fn index(&self, column: Column) -> &T {
        &self.values[column.index()]
    }
}

impl<T> IndexMut<Column> for PerColumn<T> {
    fn index_mut(&mut self, column: Column) -> &mut T {
        &mut self.values[column.index()]
    }
}
