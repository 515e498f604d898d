//! Readers shared with non-table content: shading, borders and toggles.

use crate::model::{BorderEdge, Borders};
use crate::names::{children, get};
use roxmltree::Node;

/// Map a WordprocessingML border `w:val` to a CSS line style.
fn line_style(value: &str) -> &'static str {
    match value {
        "basicBlackDashes" | "basicBlackSquares" | "dashed" | "dashSmallGap" | "dotDash"
        | "dotDotDash" => "dashed",
        "basicBlackDots" | "dotted" => "dotted",
        "dashDotStroked" | "threeDEngrave" => "groove",
        "threeDEmboss" => "ridge",
        "double" | "triple" | "thickThinLargeGap" | "thickThinMediumGap" | "thickThinSmallGap"
        | "thinThickLargeGap" | "thinThickMediumGap" | "thinThickSmallGap"
        | "thinThickThinLargeGap" | "thinThickThinMediumGap" | "thinThickThinSmallGap" => {
            "double"
        }
        "inset" => "inset",
        "outset" => "outset",
        "nil" | "none" => "none",
        _ => "solid",
    }
}

/// Convert a six digit hex color to CSS, using `auto` for anything else.
pub fn simple_color(value: &str, auto: &str) -> String {
    let value = value.trim();
    if value.len() != 6 || value == "auto" || !value.chars().all(|c| c.is_ascii_hexdigit()) {
        return auto.to_string();
    }
    format!("#{}", value)
}

/// Read `w:shd/@w:fill` as a background color.
pub fn read_shading(parent: Node<'_, '_>) -> Option<String> {
    let mut ans = None;
    for shd in children(parent, "shd") {
        match get(shd, "fill") {
            Some(fill) if !fill.is_empty() => ans = Some(simple_color(fill, "transparent")),
            _ => {}
        }
    }
    ans
}

/// Read the `edges` of every `w:<container>` child into `dest`.
///
/// Sub-properties that are not declared stay inherited independently.
pub fn read_borders(parent: Node<'_, '_>, dest: &mut Borders, edges: &[BorderEdge], container: &str) {
    for borders in children(parent, container) {
        for &edge in edges {
            let target = dest.edge_mut(edge);
            for elem in children(borders, edge.element_name()) {
                if let Some(color) = get(elem, "color") {
                    target.color = Some(simple_color(color, "black"));
                }
                if let Some(style) = get(elem, "val") {
                    target.style = Some(line_style(style).to_string());
                }
                if let Some(space) = get(elem, "space").and_then(|s| s.trim().parse::<f64>().ok()) {
                    target.padding = Some(space);
                }
                // Art borders (sz above 96) only occur on page borders.
                if let Some(size) = get(elem, "sz").and_then(|s| s.trim().parse::<f64>().ok()) {
                    target.width = Some(size.clamp(2.0, 96.0) / 8.0);
                }
            }
        }
    }
}

/// Read an on/off toggle element such as `w:cantSplit`.
pub fn read_toggle(parent: Node<'_, '_>, name: &str) -> Option<bool> {
    let elem = children(parent, name).next()?;
    let value = get(elem, "val").unwrap_or("on");
    Some(matches!(value, "on" | "1" | "true"))
}
