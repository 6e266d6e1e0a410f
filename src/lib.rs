//! Bias vector `b4` of the MNIST MLP firmware, exported for HLS.
//!
//! The table is compiled in as static data. Enabling the `synthesis` feature swaps the literal
//! values for zeros, leaving the real contents to an external tool pass; the [`loader`] reads
//! those values back from the exporter's text or binary files.
pub mod error;
pub mod loader;
pub mod mode;
pub mod stats;
mod text;
pub mod weights;

#[cfg(test)]
#[allow(dead_code)]
#[path = "../build/codegen.rs"]
mod codegen;

pub use error::{Result, WeightError};
pub use mode::BuildMode;
pub use stats::TableStats;
pub use weights::{
    b4::{B4, B4_LEN, B4_TABLE},
    lookup, tables,
    table::WeightTable,
    Weight,
};
