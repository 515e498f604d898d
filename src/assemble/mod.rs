//! Reassembling flattened table content into nested table markup.
//!
//! Conversion happens in two passes. The [`Flattener`] walks the document
//! body, turns every paragraph into an output block appended to the tree's
//! root, and registers which table each paragraph came from. Afterwards
//! [`Tables::apply_markup`] re-nests those blocks into table, row and cell
//! containers at the position of each table's first block.

mod flatten;
mod tables;

pub use flatten::{BlockConverter, Flattened, Flattener, TextBlockConverter};
pub use tables::{TableKey, Tables};

use crate::html::ElementId;
use indexmap::IndexMap;
use roxmltree::NodeId;
use serde::{Deserialize, Serialize};

/// Output block → source paragraph it was converted from.
pub type ObjectMap = IndexMap<ElementId, NodeId>;

/// Element names emitted for tables, rows and cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagNames {
    /// Table container
    pub table: String,
    /// Row container
    pub row: String,
    /// Cell container
    pub cell: String,
}

impl Default for TagNames {
    fn default() -> Self {
        Self {
            table: "table".to_string(),
            row: "table-row".to_string(),
            cell: "table-cell".to_string(),
        }
    }
}

impl TagNames {
    /// Plain HTML tag names: `table`, `tr` and `td`.
    pub fn html() -> Self {
        Self {
            table: "table".to_string(),
            row: "tr".to_string(),
            cell: "td".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_names() {
        let default = TagNames::default();
        assert_eq!(default.row, "table-row");
        assert_eq!(default.cell, "table-cell");

        let html = TagNames::html();
        assert_eq!((html.table.as_str(), html.row.as_str(), html.cell.as_str()), ("table", "tr", "td"));
    }
}
