//! Table statistics for a conversion result.

use crate::convert::ConvertResult;
use serde::{Deserialize, Serialize};

/// Counts collected over the resolved tables of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStats {
    /// Number of tables, nested ones included
    pub table_count: u32,

    /// Number of tables nested inside a cell
    pub nested_count: u32,

    /// Number of rows over all tables
    pub row_count: u32,

    /// Number of cells over all tables
    pub cell_count: u32,

    /// Number of tables referencing a named style
    pub styled_count: u32,
}

impl TableStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics from a conversion result.
    pub fn from_result(result: &ConvertResult) -> Self {
        let mut stats = Self::new();
        for table in &result.tables {
            stats.table_count += 1;
            if table.depth > 0 {
                stats.nested_count += 1;
            }
            if table.style_id.is_some() {
                stats.styled_count += 1;
            }
            stats.row_count += table.row_count() as u32;
            stats.cell_count += table.cell_count() as u32;
        }
        stats
    }
}
