use super::{table::WeightTable, Weight};

pub const B4_LEN: usize = 256;

/// Biases of the fourth dense layer. `build.rs` turns `weights/b4.txt` into the array literal.
#[cfg(not(feature = "synthesis"))]
pub static B4: [Weight; B4_LEN] = include!(concat!(env!("OUT_DIR"), "/b4.rs"));

/// Biases of the fourth dense layer, left zeroed for the synthesis front end to fill in.
#[cfg(feature = "synthesis")]
pub static B4: [Weight; B4_LEN] = [0.0; B4_LEN];

pub static B4_TABLE: WeightTable = WeightTable::new("b4", &B4);
