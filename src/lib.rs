//! # docx-tables
//!
//! Table style resolution and table reassembly for WordprocessingML documents.
//!
//! The library reads the table, row and cell formatting of a `document.xml`
//! part, cascades it over the named table styles of `styles.xml`
//! (including conditional regions such as header rows and banding), and
//! re-nests a flattened stream of converted paragraphs into table markup.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docx_tables::{convert_files, render, JsonFormat};
//!
//! fn main() -> docx_tables::Result<()> {
//!     let result = convert_files("word/document.xml", Some("word/styles.xml"))?;
//!     println!("{}", result.html);
//!
//!     let json = render::to_json(&result, JsonFormat::Pretty)?;
//!     println!("{}", json);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Typed style records**: every property is independently inherited
//! - **Named styles**: `w:basedOn` chains and conditional region overrides
//! - **Reassembly**: nested tables, content controls and whitespace layout

pub mod assemble;
pub mod convert;
pub mod error;
pub mod html;
pub mod model;
pub mod names;
pub mod parser;
pub mod render;
pub mod style;

// Re-export commonly used types
pub use assemble::{BlockConverter, Flattener, ObjectMap, TableKey, Tables, TagNames};
pub use convert::{ConvertOptions, ConvertResult, ResolvedTable, TableConverter};
pub use error::{Error, Result};
pub use html::{ElementId, HtmlTree};
pub use model::{
    Border, BorderEdge, Borders, CellStyle, Declarations, HeightRule, Margin, Merge,
    OverrideBundle, Region, RowHeight, RowStyle, TableStyle, VerticalAlign, Width,
};
pub use parser::{BasicFragmentResolver, FragmentResolver, PropertyOrigin};
pub use render::{JsonFormat, TableStats};
pub use style::{Cascade, CellPosition, ResolvedCell, StyleSheet};

use std::path::Path;

/// Convert a `document.xml` part, optionally against a `styles.xml` part.
///
/// # Example
///
/// ```no_run
/// use docx_tables::convert_document;
///
/// let document = std::fs::read_to_string("word/document.xml").unwrap();
/// let result = convert_document(&document, None).unwrap();
/// println!("{} tables", result.tables.len());
/// ```
pub fn convert_document(document_xml: &str, styles_xml: Option<&str>) -> Result<ConvertResult> {
    convert_document_with_options(document_xml, styles_xml, ConvertOptions::default())
}

/// Convert a `document.xml` part with custom options.
pub fn convert_document_with_options(
    document_xml: &str,
    styles_xml: Option<&str>,
    options: ConvertOptions,
) -> Result<ConvertResult> {
    let mut converter = TableConverter::new(options);
    if let Some(styles) = styles_xml {
        converter = converter.with_styles(styles)?;
    }
    converter.convert(document_xml)
}

/// Convert extracted `document.xml` and `styles.xml` files.
///
/// # Example
///
/// ```no_run
/// use docx_tables::convert_files;
///
/// let result = convert_files("word/document.xml", None::<&str>).unwrap();
/// std::fs::write("tables.html", result.html).unwrap();
/// ```
pub fn convert_files<P: AsRef<Path>, S: AsRef<Path>>(
    document: P,
    styles: Option<S>,
) -> Result<ConvertResult> {
    let document_xml = std::fs::read_to_string(document)?;
    let styles_xml = styles.map(std::fs::read_to_string).transpose()?;
    convert_document(&document_xml, styles_xml.as_deref())
}

/// Convert a `document.xml` part straight to HTML.
pub fn to_html(document_xml: &str, styles_xml: Option<&str>) -> Result<String> {
    Ok(convert_document(document_xml, styles_xml)?.html)
}

/// Convert a `document.xml` part to JSON.
pub fn to_json(document_xml: &str, styles_xml: Option<&str>, format: JsonFormat) -> Result<String> {
    let result = convert_document(document_xml, styles_xml)?;
    render::to_json(&result, format)
}
