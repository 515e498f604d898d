//! Table style record and named-style override bundles.

use super::{Borders, CellStyle, Declarations, Margin, RowStyle, Width};
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Resolved table-level properties. `None` means inherited.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TableStyle {
    /// Preferred table width
    pub width: Option<Width>,

    /// Default cell padding, left edge
    pub cell_padding_left: Option<Width>,

    /// Default cell padding, right edge
    pub cell_padding_right: Option<Width>,

    /// Default cell padding, top edge
    pub cell_padding_top: Option<Width>,

    /// Default cell padding, bottom edge
    pub cell_padding_bottom: Option<Width>,

    /// Left margin (set by right or center justification)
    pub margin_left: Option<Margin>,

    /// Right margin (set by left or center justification)
    pub margin_right: Option<Margin>,

    /// Table background color
    pub background_color: Option<String>,

    /// Spacing between cells
    pub spacing: Option<Width>,

    /// Indent from the leading margin
    pub indent: Option<Width>,

    /// Table borders, including the inside edges
    pub borders: Borders,

    /// Number of columns in each vertical band
    pub col_band_size: Option<u32>,

    /// Number of rows in each horizontal band
    pub row_band_size: Option<u32>,

    /// Conditional formatting flags (`w:tblLook`)
    pub look: Option<u32>,

    /// Conditional region overrides; only defined by named styles
    pub overrides: Option<Overrides>,
}

impl TableStyle {
    /// Create a record with every property inherited.
    pub fn new() -> Self {
        Self::default()
    }

    /// Column band size, falling back to a single column.
    pub fn col_band_size(&self) -> u32 {
        self.col_band_size.unwrap_or(1).max(1)
    }

    /// Row band size, falling back to a single row.
    pub fn row_band_size(&self) -> u32 {
        self.row_band_size.unwrap_or(1).max(1)
    }

    /// Look flags, falling back to none.
    pub fn look(&self) -> u32 {
        self.look.unwrap_or(0)
    }

    /// Get the override bundle for a region, if the style defines one.
    pub fn override_for(&self, region: Region) -> Option<&OverrideBundle> {
        self.overrides.as_ref().and_then(|o| o.get(&region))
    }

    /// Flat CSS-style declarations for the explicit properties.
    pub fn declarations(&self) -> Declarations {
        let mut out = Declarations::new();
        if let Some(width) = self.width {
            out.insert("width".to_string(), width.to_string());
        }
        if let Some(margin) = self.margin_left {
            out.insert("margin-left".to_string(), margin.to_string());
        } else if let Some(indent) = self.indent {
            out.insert("margin-left".to_string(), indent.to_string());
        }
        if let Some(margin) = self.margin_right {
            out.insert("margin-right".to_string(), margin.to_string());
        }
        if let Some(color) = &self.background_color {
            out.insert("background-color".to_string(), color.clone());
        }
        if let Some(spacing) = self.spacing {
            out.insert("border-spacing".to_string(), spacing.to_string());
        }
        self.borders.write_declarations(&mut out);
        out
    }
}

/// A conditional table region a named style can format separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Region {
    /// The whole table
    WholeTable,
    /// Odd vertical bands
    Band1Vert,
    /// Even vertical bands
    Band2Vert,
    /// Odd horizontal bands
    Band1Horz,
    /// Even horizontal bands
    Band2Horz,
    /// First column
    FirstCol,
    /// Last column
    LastCol,
    /// First (header) row
    FirstRow,
    /// Last row
    LastRow,
    /// Top-right cell
    NeCell,
    /// Top-left cell
    NwCell,
    /// Bottom-right cell
    SeCell,
    /// Bottom-left cell
    SwCell,
}

impl Region {
    /// Parse the `w:tblStylePr/@w:type` value.
    pub fn parse(value: &str) -> Option<Self> {
        let region = match value {
            "wholeTable" => Region::WholeTable,
            "band1Vert" => Region::Band1Vert,
            "band2Vert" => Region::Band2Vert,
            "band1Horz" => Region::Band1Horz,
            "band2Horz" => Region::Band2Horz,
            "firstCol" => Region::FirstCol,
            "lastCol" => Region::LastCol,
            "firstRow" => Region::FirstRow,
            "lastRow" => Region::LastRow,
            "neCell" => Region::NeCell,
            "nwCell" => Region::NwCell,
            "seCell" => Region::SeCell,
            "swCell" => Region::SwCell,
            _ => return None,
        };
        Some(region)
    }

    /// The WordprocessingML name of this region.
    pub fn as_str(self) -> &'static str {
        match self {
            Region::WholeTable => "wholeTable",
            Region::Band1Vert => "band1Vert",
            Region::Band2Vert => "band2Vert",
            Region::Band1Horz => "band1Horz",
            Region::Band2Horz => "band2Horz",
            Region::FirstCol => "firstCol",
            Region::LastCol => "lastCol",
            Region::FirstRow => "firstRow",
            Region::LastRow => "lastRow",
            Region::NeCell => "neCell",
            Region::NwCell => "nwCell",
            Region::SeCell => "seCell",
            Region::SwCell => "swCell",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conditional overrides of a named table style, in declaration order.
pub type Overrides = IndexMap<Region, OverrideBundle>;

/// The formatting a named style attaches to one conditional region.
///
/// A slot is only `Some` when the matching fragment is present in the style.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OverrideBundle {
    /// Table properties (`w:tblPr`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<TableStyle>,

    /// Row properties (`w:trPr`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<RowStyle>,

    /// Cell properties (`w:tcPr`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell: Option<CellStyle>,

    /// Paragraph properties (`w:pPr`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<Declarations>,

    /// Run properties (`w:rPr`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub char: Option<Declarations>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_fully_inherited() {
        let style = TableStyle::new();
        assert!(style.width.is_none());
        assert!(style.overrides.is_none());
        assert!(style.look.is_none());
        assert!(style.declarations().is_empty());
    }

    #[test]
    fn test_concrete_fallbacks() {
        let mut style = TableStyle::new();
        assert_eq!(style.col_band_size(), 1);
        assert_eq!(style.look(), 0);

        style.row_band_size = Some(0);
        assert_eq!(style.row_band_size(), 1);
    }

    #[test]
    fn test_region_names() {
        for name in ["wholeTable", "band2Horz", "nwCell", "lastCol"] {
            assert_eq!(Region::parse(name).unwrap().as_str(), name);
        }
        assert!(Region::parse("firstColumn").is_none());
    }

    #[test]
    fn test_declarations_prefer_margin_over_indent() {
        let mut style = TableStyle::new();
        style.indent = Some(Width::Points(10.0));
        assert_eq!(style.declarations()["margin-left"], "10pt");

        style.margin_left = Some(Margin::Auto);
        style.width = Some(Width::Percent(100.0));
        let css = style.declarations();
        assert_eq!(css["margin-left"], "auto");
        assert_eq!(css["width"], "100%");
    }
}
