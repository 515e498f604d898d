//! Paragraph and run style fragments carried by table style overrides.

use super::shared::read_toggle;
use crate::model::{format_significant, Declarations};
use crate::names::{child, get};
use roxmltree::Node;

/// Resolves paragraph (`w:pPr`) and run (`w:rPr`) property fragments.
///
/// Paragraph and character formatting belong to the wider conversion
/// pipeline; tables only carry the resolved fragments a named style
/// attaches to a conditional region.
pub trait FragmentResolver {
    /// Resolve a `w:pPr` fragment.
    fn paragraph(&self, p_pr: Node<'_, '_>) -> Declarations;

    /// Resolve a `w:rPr` fragment.
    fn run(&self, r_pr: Node<'_, '_>) -> Declarations;
}

/// Resolver covering alignment, spacing and basic character formatting.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicFragmentResolver;

fn twips_to_pt(value: &str) -> Option<String> {
    let twips = value.trim().parse::<f64>().ok()?;
    Some(format!("{}pt", format_significant(twips / 20.0, 3)))
}

impl FragmentResolver for BasicFragmentResolver {
    fn paragraph(&self, p_pr: Node<'_, '_>) -> Declarations {
        let mut out = Declarations::new();

        if let Some(jc) = child(p_pr, "jc").and_then(|jc| get(jc, "val")) {
            let align = match jc {
                "left" | "start" => Some("left"),
                "right" | "end" => Some("right"),
                "center" => Some("center"),
                "both" | "distribute" => Some("justify"),
                _ => None,
            };
            if let Some(align) = align {
                out.insert("text-align".to_string(), align.to_string());
            }
        }

        if let Some(spacing) = child(p_pr, "spacing") {
            if let Some(v) = get(spacing, "before").and_then(twips_to_pt) {
                out.insert("margin-top".to_string(), v);
            }
            if let Some(v) = get(spacing, "after").and_then(twips_to_pt) {
                out.insert("margin-bottom".to_string(), v);
            }
        }

        if let Some(ind) = child(p_pr, "ind") {
            let left = get(ind, "left").or_else(|| get(ind, "start"));
            if let Some(v) = left.and_then(twips_to_pt) {
                out.insert("margin-left".to_string(), v);
            }
        }

        out
    }

    fn run(&self, r_pr: Node<'_, '_>) -> Declarations {
        let mut out = Declarations::new();

        if let Some(bold) = read_toggle(r_pr, "b") {
            let weight = if bold { "bold" } else { "normal" };
            out.insert("font-weight".to_string(), weight.to_string());
        }
        if let Some(italic) = read_toggle(r_pr, "i") {
            let style = if italic { "italic" } else { "normal" };
            out.insert("font-style".to_string(), style.to_string());
        }
        if let Some(u) = child(r_pr, "u") {
            let value = match get(u, "val") {
                Some("none") => "none",
                _ => "underline",
            };
            out.insert("text-decoration".to_string(), value.to_string());
        }
        if let Some(color) = child(r_pr, "color").and_then(|c| get(c, "val")) {
            if color != "auto" {
                out.insert(
                    "color".to_string(),
                    super::shared::simple_color(color, "black"),
                );
            }
        }
        // w:sz is in half-points
        if let Some(size) = child(r_pr, "sz")
            .and_then(|sz| get(sz, "val"))
            .and_then(|v| v.trim().parse::<f64>().ok())
        {
            out.insert(
                "font-size".to_string(),
                format!("{}pt", format_significant(size / 2.0, 3)),
            );
        }

        out
    }
}
