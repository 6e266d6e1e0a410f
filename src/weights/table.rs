use std::ops::Index;

use super::Weight;
use crate::stats::TableStats;

/// A named, read-only view of one static table.
#[derive(Debug, Clone, Copy)]
pub struct WeightTable {
    name: &'static str,
    values: &'static [Weight],
}

impl WeightTable {
    pub const fn new(name: &'static str, values: &'static [Weight]) -> Self {
        Self { name, values }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn len(&self) -> usize {
        self.values.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub const fn values(&self) -> &'static [Weight] {
        self.values
    }

    pub fn get(&self, idx: usize) -> Option<Weight> {
        self.values.get(idx).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Weight> + 'static {
        self.values.iter().copied()
    }

    pub fn stats(&self) -> TableStats {
        TableStats::of(self.values)
    }

    /// Native-endian bytes of the table, the layout `loader::from_ne_bytes` reads back
    pub fn as_bytes(&self) -> &'static [u8] {
        bytemuck::cast_slice(self.values)
    }
}

impl Index<usize> for WeightTable {
    type Output = Weight;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.values[idx]
    }
}
