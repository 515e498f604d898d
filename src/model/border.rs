//! Border types.

use indexmap::IndexMap;
use serde::Serialize;

/// A border edge of a table or cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BorderEdge {
    /// Left edge
    Left,
    /// Top edge
    Top,
    /// Right edge
    Right,
    /// Bottom edge
    Bottom,
    /// Horizontal borders between rows
    InsideH,
    /// Vertical borders between columns
    InsideV,
}

impl BorderEdge {
    /// Every edge a table or cell border container may declare, in reading order.
    pub const ALL: [BorderEdge; 6] = [
        BorderEdge::Left,
        BorderEdge::Top,
        BorderEdge::Right,
        BorderEdge::Bottom,
        BorderEdge::InsideH,
        BorderEdge::InsideV,
    ];

    /// The WordprocessingML element name for this edge.
    pub fn element_name(self) -> &'static str {
        match self {
            BorderEdge::Left => "left",
            BorderEdge::Top => "top",
            BorderEdge::Right => "right",
            BorderEdge::Bottom => "bottom",
            BorderEdge::InsideH => "insideH",
            BorderEdge::InsideV => "insideV",
        }
    }

    fn css_name(self) -> &'static str {
        match self {
            BorderEdge::Left => "left",
            BorderEdge::Top => "top",
            BorderEdge::Right => "right",
            BorderEdge::Bottom => "bottom",
            BorderEdge::InsideH => "inside-h",
            BorderEdge::InsideV => "inside-v",
        }
    }
}

/// Properties of a single border edge. `None` means inherited.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Border {
    /// CSS line style (solid, double, dotted, dashed, none, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,

    /// Line width in points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,

    /// Line color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Space between the border and the content, in points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
}

impl Border {
    /// Check if no sub-property is set at this level.
    pub fn is_inherited(&self) -> bool {
        self.style.is_none() && self.width.is_none() && self.color.is_none() && self.padding.is_none()
    }

    fn update(&mut self, other: &Border) {
        if other.style.is_some() {
            self.style.clone_from(&other.style);
        }
        if other.width.is_some() {
            self.width = other.width;
        }
        if other.color.is_some() {
            self.color.clone_from(&other.color);
        }
        if other.padding.is_some() {
            self.padding = other.padding;
        }
    }

    fn resolve_based_on(&mut self, parent: &Border) {
        if self.style.is_none() {
            self.style.clone_from(&parent.style);
        }
        if self.width.is_none() {
            self.width = parent.width;
        }
        if self.color.is_none() {
            self.color.clone_from(&parent.color);
        }
        if self.padding.is_none() {
            self.padding = parent.padding;
        }
    }
}

/// The full border edge set of a table or cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Borders {
    /// Left edge
    pub left: Border,
    /// Top edge
    pub top: Border,
    /// Right edge
    pub right: Border,
    /// Bottom edge
    pub bottom: Border,
    /// Inside horizontal edges
    pub inside_h: Border,
    /// Inside vertical edges
    pub inside_v: Border,
}

impl Borders {
    /// Get an edge.
    pub fn edge(&self, edge: BorderEdge) -> &Border {
        match edge {
            BorderEdge::Left => &self.left,
            BorderEdge::Top => &self.top,
            BorderEdge::Right => &self.right,
            BorderEdge::Bottom => &self.bottom,
            BorderEdge::InsideH => &self.inside_h,
            BorderEdge::InsideV => &self.inside_v,
        }
    }

    /// Get an edge mutably.
    pub fn edge_mut(&mut self, edge: BorderEdge) -> &mut Border {
        match edge {
            BorderEdge::Left => &mut self.left,
            BorderEdge::Top => &mut self.top,
            BorderEdge::Right => &mut self.right,
            BorderEdge::Bottom => &mut self.bottom,
            BorderEdge::InsideH => &mut self.inside_h,
            BorderEdge::InsideV => &mut self.inside_v,
        }
    }

    /// Merge every explicit sub-property of `other` over this set.
    pub fn update(&mut self, other: &Borders) {
        for edge in BorderEdge::ALL {
            self.edge_mut(edge).update(other.edge(edge));
        }
    }

    /// Fill every inherited sub-property from `parent`.
    pub fn resolve_based_on(&mut self, parent: &Borders) {
        for edge in BorderEdge::ALL {
            self.edge_mut(edge).resolve_based_on(parent.edge(edge));
        }
    }

    /// Append CSS-style declarations for the explicit sub-properties.
    pub fn write_declarations(&self, out: &mut IndexMap<String, String>) {
        for edge in BorderEdge::ALL {
            let border = self.edge(edge);
            let name = edge.css_name();
            if let Some(style) = &border.style {
                out.insert(format!("border-{}-style", name), style.clone());
            }
            if let Some(width) = border.width {
                out.insert(format!("border-{}-width", name), format!("{}pt", width));
            }
            if let Some(color) = &border.color {
                out.insert(format!("border-{}-color", name), color.clone());
            }
            if let Some(padding) = border.padding {
                out.insert(format!("padding-{}", name), format!("{}pt", padding));
            }
        }
    }
}
