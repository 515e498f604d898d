//! Rendering conversion results to output formats.

mod json;
mod stats;

pub use json::{to_json, JsonFormat};
pub use stats::TableStats;
