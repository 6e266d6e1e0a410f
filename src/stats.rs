//! Summary the exporter prints above every table: shape, extremes and zero count.

use std::fmt;

use float_ord::FloatOrd;
use itertools::{Itertools, MinMaxResult};

use crate::weights::Weight;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableStats {
    pub len: usize,
    pub min: Weight,
    pub max: Weight,
    pub zeros: usize,
}

impl TableStats {
    /// An empty slice reports 0.0 for both extremes.
    pub fn of(values: &[Weight]) -> Self {
        let (min, max) = match values.iter().map(|&v| FloatOrd(v)).minmax() {
            MinMaxResult::NoElements => (0.0, 0.0),
            MinMaxResult::OneElement(v) => (v.0, v.0),
            MinMaxResult::MinMax(lo, hi) => (lo.0, hi.0),
        };
        let zeros = values.iter().filter(|&&v| v == 0.0).count();
        Self { len: values.len(), min, max, zeros }
    }
}

impl fmt::Display for TableStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shape [{}], min {:.4}, max {:.4}, zeros {}", self.len, self.min, self.max, self.zeros)
    }
}
