use phf::phf_map;

use self::{b4::B4_TABLE, table::WeightTable};

pub mod b4;
pub mod table;

/// Element type of every exported table
pub type Weight = f32;

static TABLES: phf::Map<&'static str, &'static WeightTable> = phf_map! {
    "b4" => &B4_TABLE,
};

/// Finds a table by the name the exporter gave it
pub fn lookup(name: &str) -> Option<&'static WeightTable> {
    TABLES.get(name).copied()
}

pub fn tables() -> impl Iterator<Item = &'static WeightTable> {
    TABLES.values().copied()
}
