//! Row style record.

use super::{Declarations, Width};
use serde::Serialize;

/// Resolved row-level properties. `None` means inherited.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RowStyle {
    /// Row height and how it is applied
    pub height: Option<RowHeight>,

    /// Whether the row must not break across pages
    pub cant_split: Option<bool>,

    /// Whether the row is hidden
    pub hidden: Option<bool>,

    /// Spacing between cells in this row
    pub spacing: Option<Width>,
}

impl RowStyle {
    /// Create a record with every property inherited.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flat CSS-style declarations for the explicit properties.
    pub fn declarations(&self) -> Declarations {
        let mut out = Declarations::new();
        if let Some(height) = &self.height {
            if let Some(points) = height.points() {
                let key = match height.rule {
                    HeightRule::Exact => Some("height"),
                    HeightRule::AtLeast => Some("min-height"),
                    HeightRule::Auto => None,
                };
                if let Some(key) = key {
                    out.insert(key.to_string(), format!("{}pt", points));
                }
            }
        }
        if self.cant_split == Some(true) {
            out.insert("page-break-inside".to_string(), "avoid".to_string());
        }
        if self.hidden == Some(true) {
            out.insert("display".to_string(), "none".to_string());
        }
        if let Some(spacing) = self.spacing {
            out.insert("border-spacing".to_string(), spacing.to_string());
        }
        out
    }
}

/// How a declared row height is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum HeightRule {
    /// Height determined by content
    Auto,
    /// Declared height is a minimum
    AtLeast,
    /// Declared height is fixed
    Exact,
}

impl HeightRule {
    /// Parse a `w:hRule` value; unsupported rules yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(HeightRule::Auto),
            "atLeast" => Some(HeightRule::AtLeast),
            "exact" => Some(HeightRule::Exact),
            _ => None,
        }
    }
}

/// A row height declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowHeight {
    /// How the value applies
    pub rule: HeightRule,

    /// Raw `w:val` in twentieths of a point, if declared
    pub value: Option<String>,
}

impl RowHeight {
    /// The declared height in points, if the value is numeric.
    pub fn points(&self) -> Option<f64> {
        self.value
            .as_deref()
            .and_then(|v| v.trim().parse::<f64>().ok())
            .map(|twips| twips / 20.0)
    }
}
