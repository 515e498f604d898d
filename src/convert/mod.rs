//! Document conversion pipeline.
//!
//! [`TableConverter`] ties the pieces together: it flattens a
//! `document.xml` body, reassembles its tables, and resolves the style
//! cascade of every cell against an optional `styles.xml`.
//!
//! # Example
//!
//! ```no_run
//! use docx_tables::convert::{ConvertOptions, TableConverter};
//!
//! fn main() -> docx_tables::Result<()> {
//!     let document = std::fs::read_to_string("word/document.xml")?;
//!     let styles = std::fs::read_to_string("word/styles.xml")?;
//!
//!     let result = TableConverter::new(ConvertOptions::new().with_html_tags())
//!         .with_styles(&styles)?
//!         .convert(&document)?;
//!     println!("{}", result.html);
//!     Ok(())
//! }
//! ```

use crate::assemble::{Flattener, TagNames};
use crate::error::{Error, Result};
use crate::html::{ElementId, HtmlTree};
use crate::model::{CellStyle, Declarations, RowStyle, TableStyle};
use crate::names::{self, child, get, is_tag};
use crate::parser::{BasicFragmentResolver, FragmentResolver, PropertyOrigin};
use crate::style::{resolve_cell, CellLevels, CellPosition, Cascade, ResolvedCell, StyleSheet};
use roxmltree::Node;
use serde::Serialize;

/// Options for document conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Element names for tables, rows and cells
    pub tag_names: TagNames,

    /// Whether to resolve the style cascade of every cell
    pub resolve_styles: bool,

    /// Whether to indent assembled tables with newlines and tabs
    pub pretty: bool,

    /// Whether to write resolved declarations into `style` attributes
    pub inline_styles: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            tag_names: TagNames::default(),
            resolve_styles: true,
            pretty: true,
            inline_styles: false,
        }
    }
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the element names for tables, rows and cells.
    pub fn with_tag_names(mut self, tag_names: TagNames) -> Self {
        self.tag_names = tag_names;
        self
    }

    /// Emit `table`, `tr` and `td`.
    pub fn with_html_tags(self) -> Self {
        self.with_tag_names(TagNames::html())
    }

    /// Enable or disable cascade resolution.
    pub fn with_resolve_styles(mut self, resolve: bool) -> Self {
        self.resolve_styles = resolve;
        self
    }

    /// Enable or disable table indentation.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Enable or disable inline `style` attributes.
    pub fn with_inline_styles(mut self, inline: bool) -> Self {
        self.inline_styles = inline;
        self
    }
}

/// Resolved formatting of one source table.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedTable {
    /// Referenced named style (`w:tblStyle`), if any
    pub style_id: Option<String>,

    /// Nesting depth; top-level tables are 0
    pub depth: usize,

    /// Table formatting without conditional regions
    pub table: TableStyle,

    /// Resolved cells, row by row
    pub rows: Vec<Vec<ResolvedCell>>,
}

impl ResolvedTable {
    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of cells over all rows.
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

/// Result of document conversion.
#[derive(Debug, Clone, Serialize)]
pub struct ConvertResult {
    /// Serialized output tree
    pub html: String,

    /// Resolved tables in document order; empty unless styles are resolved
    pub tables: Vec<ResolvedTable>,
}

impl ConvertResult {
    /// Get HTML length in bytes.
    pub fn html_len(&self) -> usize {
        self.html.len()
    }
}

/// Converts a `document.xml` part into reassembled table markup.
pub struct TableConverter {
    options: ConvertOptions,
    styles: StyleSheet,
    resolver: Box<dyn FragmentResolver>,
}

impl Default for TableConverter {
    fn default() -> Self {
        Self::new(ConvertOptions::default())
    }
}

impl TableConverter {
    /// Create a converter without named styles.
    pub fn new(options: ConvertOptions) -> Self {
        Self {
            options,
            styles: StyleSheet::new(),
            resolver: Box::new(BasicFragmentResolver),
        }
    }

    /// Replace the resolver used for paragraph and run fragments.
    ///
    /// Affects styles loaded after this call.
    pub fn with_resolver(mut self, resolver: impl FragmentResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    /// Load named table styles from a `styles.xml` part.
    pub fn with_styles(mut self, styles_xml: &str) -> Result<Self> {
        self.styles = StyleSheet::parse(styles_xml, self.resolver.as_ref())?;
        Ok(self)
    }

    /// Use an already loaded style sheet.
    pub fn with_style_sheet(mut self, styles: StyleSheet) -> Self {
        self.styles = styles;
        self
    }

    /// Get the conversion options.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert a `document.xml` part.
    pub fn convert(&self, document_xml: &str) -> Result<ConvertResult> {
        let doc = roxmltree::Document::parse(document_xml)?;
        let root = doc.root_element();
        let body = if is_tag(root, "body") {
            root
        } else {
            child(root, "body").ok_or_else(|| Error::MissingElement("w:body".to_string()))?
        };

        let mut tree = HtmlTree::new("body");
        let flat = Flattener::new()
            .with_tag_names(self.options.tag_names.clone())
            .with_pretty(self.options.pretty)
            .flatten(body, &mut tree);
        let built = flat.assemble(&mut tree)?;

        let mut tables = Vec::new();
        if self.options.resolve_styles {
            for node in flat.tables.nodes() {
                let resolved = self.resolve_table(node);
                if self.options.inline_styles {
                    if let Some(element) = built.get(&node.id()) {
                        write_inline_styles(&mut tree, *element, node, &resolved);
                    }
                }
                tables.push(resolved);
            }
            log::debug!("resolved styles for {} tables", tables.len());
        }

        Ok(ConvertResult {
            html: tree.to_html_document(),
            tables,
        })
    }

    /// Resolve every cell of a source table.
    pub fn resolve_table(&self, tbl: Node<'_, '_>) -> ResolvedTable {
        let tbl_pr = child(tbl, "tblPr");
        let style_id = tbl_pr
            .and_then(|pr| child(pr, "tblStyle"))
            .and_then(|s| get(s, "val"))
            .map(str::to_string);
        let direct = tbl_pr
            .map(|pr| TableStyle::from_properties(pr, PropertyOrigin::Direct, self.resolver.as_ref()))
            .unwrap_or_default();
        let named = self.styles.table_style(style_id.as_deref());

        let mut table = TableStyle::new();
        if let Some(named) = named {
            table.update(named);
        }
        table.update(&direct);
        table.overrides = None;

        let trs = names::rows(tbl);
        let mut rows = Vec::with_capacity(trs.len());
        for (r, tr) in trs.iter().enumerate() {
            let row_style = child(*tr, "trPr")
                .map(RowStyle::from_properties)
                .unwrap_or_default();
            let tcs = names::cells(*tr);
            let mut cells = Vec::with_capacity(tcs.len());
            for (c, tc) in tcs.iter().enumerate() {
                let cell_style = child(*tc, "tcPr")
                    .map(CellStyle::from_properties)
                    .unwrap_or_default();
                let levels = CellLevels {
                    named,
                    table: &direct,
                    row: &row_style,
                    cell: &cell_style,
                };
                cells.push(resolve_cell(levels, CellPosition::new(r, c, trs.len(), tcs.len())));
            }
            rows.push(cells);
        }

        ResolvedTable {
            style_id,
            depth: tbl.ancestors().skip(1).filter(|n| is_tag(*n, "tbl")).count(),
            table,
            rows,
        }
    }
}

/// Render declarations as a `style` attribute value.
pub fn style_attribute(declarations: &Declarations) -> String {
    declarations
        .iter()
        .map(|(name, value)| format!("{}: {}", name, value))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Rows and cells of an assembled table line up with the source `w:tr` and `w:tc`.
fn write_inline_styles(
    tree: &mut HtmlTree,
    element: ElementId,
    tbl: Node<'_, '_>,
    resolved: &ResolvedTable,
) {
    set_style(tree, element, &resolved.table.declarations());

    let row_elements = tree.children(element).to_vec();
    for ((row_element, tr), cells) in row_elements
        .into_iter()
        .zip(names::rows(tbl))
        .zip(&resolved.rows)
    {
        if let Some(first) = cells.first() {
            set_style(tree, row_element, &first.row.declarations());
        }
        let cell_elements = tree.children(row_element).to_vec();
        for ((cell_element, _), cell) in cell_elements.into_iter().zip(names::cells(tr)).zip(cells) {
            let mut declarations = cell.cell.declarations();
            declarations.extend(cell.block.iter().map(|(k, v)| (k.clone(), v.clone())));
            declarations.extend(cell.char.iter().map(|(k, v)| (k.clone(), v.clone())));
            set_style(tree, cell_element, &declarations);
        }
    }
}

fn set_style(tree: &mut HtmlTree, element: ElementId, declarations: &Declarations) {
    if !declarations.is_empty() {
        tree.set_attribute(element, "style", style_attribute(declarations));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Width;
    use crate::names::WML_NS;

    fn document(body: &str) -> String {
        format!(
            r#"<w:document xmlns:w="{}"><w:body>{}</w:body></w:document>"#,
            WML_NS, body
        )
    }

    const STYLES: &str = r#"<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
        <w:style w:type="table" w:styleId="Grid">
          <w:tblPr><w:tblW w:w="5000" w:type="pct"/></w:tblPr>
          <w:tblStylePr w:type="firstRow">
            <w:tcPr><w:shd w:val="clear" w:fill="4472C4"/></w:tcPr>
          </w:tblStylePr>
        </w:style>
      </w:styles>"#;

    #[test]
    fn test_convert_options_builder() {
        let options = ConvertOptions::new()
            .with_html_tags()
            .with_pretty(false)
            .with_inline_styles(true);

        assert_eq!(options.tag_names.cell, "td");
        assert!(!options.pretty);
        assert!(options.inline_styles);
        assert!(options.resolve_styles);
    }

    #[test]
    fn test_missing_body() {
        let xml = format!(r#"<w:document xmlns:w="{}"/>"#, WML_NS);
        let err = TableConverter::default().convert(&xml).unwrap_err();
        assert!(matches!(err, Error::MissingElement(_)));
    }

    #[test]
    fn test_resolves_named_style() {
        let xml = document(
            r#"<w:tbl>
                 <w:tblPr><w:tblStyle w:val="Grid"/><w:tblLook w:val="0020"/></w:tblPr>
                 <w:tr><w:tc><w:p/></w:tc></w:tr>
                 <w:tr><w:tc><w:p/></w:tc></w:tr>
               </w:tbl>"#,
        );
        let result = TableConverter::default()
            .with_styles(STYLES)
            .unwrap()
            .convert(&xml)
            .unwrap();

        assert_eq!(result.tables.len(), 1);
        let table = &result.tables[0];
        assert_eq!(table.style_id.as_deref(), Some("Grid"));
        assert_eq!(table.table.width, Some(Width::Percent(100.0)));
        assert_eq!(table.row_count(), 2);
        assert_eq!(
            table.rows[0][0].cell.background_color.as_deref(),
            Some("#4472C4")
        );
        assert_eq!(table.rows[1][0].cell.background_color, None);
    }

    #[test]
    fn test_inline_styles() {
        let xml = document(
            r#"<w:tbl>
                 <w:tblPr><w:tblStyle w:val="Grid"/><w:tblLook w:val="0020"/></w:tblPr>
                 <w:tr><w:tc><w:p/></w:tc></w:tr>
               </w:tbl>"#,
        );
        let result = TableConverter::new(ConvertOptions::new().with_inline_styles(true))
            .with_styles(STYLES)
            .unwrap()
            .convert(&xml)
            .unwrap();

        assert!(result.html.contains(r#"<table style="width: 100%">"#));
        assert!(result.html.contains("background-color: #4472C4"));
    }

    #[test]
    fn test_skip_style_resolution() {
        let xml = document(r#"<w:tbl><w:tr><w:tc><w:p/></w:tc></w:tr></w:tbl>"#);
        let result = TableConverter::new(ConvertOptions::new().with_resolve_styles(false))
            .convert(&xml)
            .unwrap();
        assert!(result.tables.is_empty());
        assert!(result.html.contains("<table-cell>"));
    }

    #[test]
    fn test_style_attribute() {
        let mut declarations = Declarations::new();
        declarations.insert("width".to_string(), "10pt".to_string());
        declarations.insert("color".to_string(), "red".to_string());
        assert_eq!(style_attribute(&declarations), "width: 10pt; color: red");
    }
}
