//! Style cascade: merging, named styles and conditional regions.

mod cascade;
pub mod regions;
mod resolve;
mod sheet;

pub use cascade::Cascade;
pub use regions::{regions_for_cell, CellPosition};
pub use resolve::{resolve_cell, CellLevels, ResolvedCell};
pub use sheet::StyleSheet;
