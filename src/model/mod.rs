//! Style record types for table formatting.
//!
//! Every property is an `Option`, where `None` means "no value at this
//! level, defer to the ancestor". A record built without a source node is
//! therefore its `Default`: a pure pass-through.

mod border;
mod cell;
mod row;
mod table;
mod value;

pub use border::{Border, BorderEdge, Borders};
pub use cell::{CellStyle, Merge, VerticalAlign};
pub use row::{HeightRule, RowHeight, RowStyle};
pub use table::{OverrideBundle, Overrides, Region, TableStyle};
pub use value::{format_significant, Margin, Width};

/// Flat, ordered CSS-style property declarations.
pub type Declarations = indexmap::IndexMap<String, String>;
