//! Cell style record.

use super::{Borders, Declarations, Width};
use serde::Serialize;
use std::fmt;

/// Resolved cell-level properties. `None` means inherited.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CellStyle {
    /// Cell background color
    pub background_color: Option<String>,

    /// Cell padding, left edge
    pub cell_padding_left: Option<Width>,

    /// Cell padding, right edge
    pub cell_padding_right: Option<Width>,

    /// Cell padding, top edge
    pub cell_padding_top: Option<Width>,

    /// Cell padding, bottom edge
    pub cell_padding_bottom: Option<Width>,

    /// Preferred cell width
    pub width: Option<Width>,

    /// Vertical alignment of the content
    pub vertical_align: Option<VerticalAlign>,

    /// Number of grid columns the cell spans
    pub col_span: Option<u32>,

    /// Vertical merge marker
    pub v_merge: Option<Merge>,

    /// Horizontal merge marker
    pub h_merge: Option<Merge>,

    /// Cell borders
    pub borders: Borders,
}

impl CellStyle {
    /// Create a record with every property inherited.
    pub fn new() -> Self {
        Self::default()
    }

    /// Column span, falling back to a single column.
    pub fn col_span(&self) -> u32 {
        self.col_span.unwrap_or(1).max(1)
    }

    /// Flat CSS-style declarations for the explicit properties.
    pub fn declarations(&self) -> Declarations {
        let mut out = Declarations::new();
        if let Some(color) = &self.background_color {
            out.insert("background-color".to_string(), color.clone());
        }
        let padding = [
            ("padding-left", self.cell_padding_left),
            ("padding-right", self.cell_padding_right),
            ("padding-top", self.cell_padding_top),
            ("padding-bottom", self.cell_padding_bottom),
        ];
        for (key, value) in padding {
            if let Some(value) = value {
                out.insert(key.to_string(), value.to_string());
            }
        }
        if let Some(width) = self.width {
            out.insert("width".to_string(), width.to_string());
        }
        if let Some(align) = self.vertical_align {
            out.insert("vertical-align".to_string(), align.to_string());
        }
        self.borders.write_declarations(&mut out);
        out
    }
}

/// Vertical alignment of cell content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    /// Top alignment
    Top,
    /// Middle/center alignment
    Middle,
    /// Bottom alignment
    Bottom,
}

impl VerticalAlign {
    /// Map a `w:vAlign` value; anything unrecognised centres the content.
    pub fn from_wml(value: Option<&str>) -> Self {
        match value {
            Some("top") => VerticalAlign::Top,
            Some("bottom") => VerticalAlign::Bottom,
            _ => VerticalAlign::Middle,
        }
    }
}

impl fmt::Display for VerticalAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VerticalAlign::Top => "top",
            VerticalAlign::Middle => "middle",
            VerticalAlign::Bottom => "bottom",
        })
    }
}

/// A horizontal or vertical merge marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Merge {
    /// The cell continues the merged region of the previous cell
    Continue,
    /// The cell starts a new merged region
    Restart,
}

impl Merge {
    /// Map a merge `w:val`; a missing value means `continue`.
    pub fn from_wml(value: Option<&str>) -> Self {
        match value {
            Some("restart") => Merge::Restart,
            _ => Merge::Continue,
        }
    }
}
