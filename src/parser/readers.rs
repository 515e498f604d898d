//! Table, row and cell property readers.
//!
//! Each reader looks at one kind of child of a property container
//! (`w:tblPr`, `w:trPr` or `w:tcPr`) and sets one property, or one group of
//! related properties, on the destination record. Missing or malformed
//! constructs leave the destination inherited unless a concrete default is
//! documented on the reader.

use super::shared::{read_borders, read_shading, read_toggle};
use crate::model::{
    BorderEdge, CellStyle, HeightRule, Margin, Merge, RowHeight, RowStyle, TableStyle,
    VerticalAlign, Width,
};
use crate::names::{children, get};
use roxmltree::Node;

/// Whether a property container belongs to a table or to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// `w:tblPr`
    Table,
    /// `w:tcPr`
    Cell,
}

impl Scope {
    fn padding_container(self) -> &'static str {
        match self {
            Scope::Table => "tblCellMar",
            Scope::Cell => "tcMar",
        }
    }

    fn border_container(self) -> &'static str {
        match self {
            Scope::Table => "tblBorders",
            Scope::Cell => "tcBorders",
        }
    }
}

/// The four padding edges of a table or cell.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Padding {
    pub left: Option<Width>,
    pub top: Option<Width>,
    pub right: Option<Width>,
    pub bottom: Option<Width>,
}

/// Resolve a width node from its `w:w` magnitude and `w:type` unit.
pub fn read_width_value(elem: Node<'_, '_>) -> Option<Width> {
    let magnitude = get(elem, "w")
        .and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(0);
    let unit = get(elem, "type").unwrap_or("auto");
    Width::from_units(magnitude, unit)
}

/// The last `w:<name>` child read as a width.
fn read_width_child(parent: Node<'_, '_>, name: &str) -> Option<Width> {
    children(parent, name).last().and_then(read_width_value)
}

/// `w:tblW`
pub fn read_table_width(parent: Node<'_, '_>) -> Option<Width> {
    read_width_child(parent, "tblW")
}

/// `w:tcW`
pub fn read_cell_width(parent: Node<'_, '_>) -> Option<Width> {
    read_width_child(parent, "tcW")
}

/// `w:tblCellSpacing`
pub fn read_spacing(parent: Node<'_, '_>) -> Option<Width> {
    read_width_child(parent, "tblCellSpacing")
}

/// `w:tblInd`
pub fn read_indent(parent: Node<'_, '_>) -> Option<Width> {
    read_width_child(parent, "tblInd")
}

/// `w:tblCellMar` or `w:tcMar`; every edge is read independently.
pub fn read_padding(parent: Node<'_, '_>, scope: Scope) -> Padding {
    let mut padding = Padding::default();
    for mar in children(parent, scope.padding_container()) {
        let edges = [
            ("left", &mut padding.left),
            ("top", &mut padding.top),
            ("right", &mut padding.right),
            ("bottom", &mut padding.bottom),
        ];
        for (name, slot) in edges {
            for edge in children(mar, name) {
                *slot = read_width_value(edge);
            }
        }
    }
    padding
}

/// `w:jc`, expressed as automatic margins: `(margin_left, margin_right)`.
pub fn read_justification(parent: Node<'_, '_>) -> (Option<Margin>, Option<Margin>) {
    let (mut left, mut right) = (None, None);
    for jc in children(parent, "jc") {
        match get(jc, "val") {
            Some("left") | Some("start") => right = Some(Margin::Auto),
            Some("right") | Some("end") => left = Some(Margin::Auto),
            Some("center") => {
                left = Some(Margin::Auto);
                right = Some(Margin::Auto);
            }
            _ => {}
        }
    }
    (left, right)
}

/// `w:trHeight`; unsupported `w:hRule` values are ignored.
pub fn read_height(parent: Node<'_, '_>) -> Option<RowHeight> {
    let mut ans = None;
    for rh in children(parent, "trHeight") {
        if let Some(rule) = HeightRule::parse(get(rh, "hRule").unwrap_or("auto")) {
            ans = Some(RowHeight {
                rule,
                value: get(rh, "val").map(str::to_string),
            });
        }
    }
    ans
}

/// `w:vAlign`
pub fn read_vertical_align(parent: Node<'_, '_>) -> Option<VerticalAlign> {
    children(parent, "vAlign")
        .last()
        .map(|va| VerticalAlign::from_wml(get(va, "val")))
}

/// `w:gridSpan`; non-numeric values are skipped rather than zeroed.
pub fn read_col_span(parent: Node<'_, '_>) -> Option<u32> {
    children(parent, "gridSpan")
        .filter_map(|gs| get(gs, "val").and_then(|v| v.trim().parse::<u32>().ok()))
        .last()
}

/// `w:hMerge` and `w:vMerge`: `(h_merge, v_merge)`.
pub fn read_merge(parent: Node<'_, '_>) -> (Option<Merge>, Option<Merge>) {
    let read = |name| {
        children(parent, name)
            .last()
            .map(|m| Merge::from_wml(get(m, "val")))
    };
    (read("hMerge"), read("vMerge"))
}

/// `w:tblStyleColBandSize` and `w:tblStyleRowBandSize`: `(col, row)`.
///
/// Each defaults to 1 when absent or non-numeric.
pub fn read_band_size(parent: Node<'_, '_>) -> (u32, u32) {
    let read = |name| {
        children(parent, name)
            .filter_map(|b| get(b, "val").and_then(|v| v.trim().parse::<u32>().ok()))
            .last()
            .unwrap_or(1)
    };
    (read("tblStyleColBandSize"), read("tblStyleRowBandSize"))
}

const LOOK_ATTRIBUTES: [(&str, u32); 6] = [
    ("firstRow", 0x0020),
    ("lastRow", 0x0040),
    ("firstColumn", 0x0080),
    ("lastColumn", 0x0100),
    ("noHBand", 0x0200),
    ("noVBand", 0x0400),
];

/// `w:tblLook`; defaults to 0 when absent or malformed.
///
/// The hex `w:val` form wins; without it the boolean attribute form is
/// folded into the same bits.
pub fn read_look(parent: Node<'_, '_>) -> u32 {
    let mut ans = 0;
    for look in children(parent, "tblLook") {
        if let Some(val) = get(look, "val") {
            let digits = val.trim();
            let digits = digits
                .strip_prefix("0x")
                .or_else(|| digits.strip_prefix("0X"))
                .unwrap_or(digits);
            if let Ok(v) = u32::from_str_radix(digits, 16) {
                ans = v;
            }
        } else {
            ans = LOOK_ATTRIBUTES
                .iter()
                .filter(|(attr, _)| matches!(get(look, attr), Some("1" | "true" | "on")))
                .fold(0, |acc, (_, bit)| acc | bit);
        }
    }
    ans
}

fn table_width(node: Node<'_, '_>, dest: &mut TableStyle) {
    dest.width = read_table_width(node);
}

fn table_padding(node: Node<'_, '_>, dest: &mut TableStyle) {
    let p = read_padding(node, Scope::Table);
    dest.cell_padding_left = p.left;
    dest.cell_padding_top = p.top;
    dest.cell_padding_right = p.right;
    dest.cell_padding_bottom = p.bottom;
}

fn table_shading(node: Node<'_, '_>, dest: &mut TableStyle) {
    dest.background_color = read_shading(node);
}

fn table_justification(node: Node<'_, '_>, dest: &mut TableStyle) {
    let (left, right) = read_justification(node);
    dest.margin_left = left;
    dest.margin_right = right;
}

fn table_spacing(node: Node<'_, '_>, dest: &mut TableStyle) {
    dest.spacing = read_spacing(node);
}

fn table_indent(node: Node<'_, '_>, dest: &mut TableStyle) {
    dest.indent = read_indent(node);
}

fn table_borders(node: Node<'_, '_>, dest: &mut TableStyle) {
    read_borders(
        node,
        &mut dest.borders,
        &BorderEdge::ALL,
        Scope::Table.border_container(),
    );
}

fn table_band_size(node: Node<'_, '_>, dest: &mut TableStyle) {
    let (col, row) = read_band_size(node);
    dest.col_band_size = Some(col);
    dest.row_band_size = Some(row);
}

fn table_look(node: Node<'_, '_>, dest: &mut TableStyle) {
    dest.look = Some(read_look(node));
}

/// Readers applied to `w:tblPr`, in order.
pub(crate) const TABLE_READERS: [(&str, fn(Node<'_, '_>, &mut TableStyle)); 9] = [
    ("width", table_width),
    ("padding", table_padding),
    ("shading", table_shading),
    ("justification", table_justification),
    ("spacing", table_spacing),
    ("indent", table_indent),
    ("borders", table_borders),
    ("band_size", table_band_size),
    ("look", table_look),
];

fn row_height(node: Node<'_, '_>, dest: &mut RowStyle) {
    dest.height = read_height(node);
}

fn row_cant_split(node: Node<'_, '_>, dest: &mut RowStyle) {
    dest.cant_split = read_toggle(node, "cantSplit");
}

fn row_hidden(node: Node<'_, '_>, dest: &mut RowStyle) {
    dest.hidden = read_toggle(node, "hidden");
}

fn row_spacing(node: Node<'_, '_>, dest: &mut RowStyle) {
    dest.spacing = read_spacing(node);
}

/// Readers applied to `w:trPr`, in order.
pub(crate) const ROW_READERS: [(&str, fn(Node<'_, '_>, &mut RowStyle)); 4] = [
    ("height", row_height),
    ("cant_split", row_cant_split),
    ("hidden", row_hidden),
    ("spacing", row_spacing),
];

fn cell_borders(node: Node<'_, '_>, dest: &mut CellStyle) {
    read_borders(
        node,
        &mut dest.borders,
        &BorderEdge::ALL,
        Scope::Cell.border_container(),
    );
}

fn cell_shading(node: Node<'_, '_>, dest: &mut CellStyle) {
    dest.background_color = read_shading(node);
}

fn cell_padding(node: Node<'_, '_>, dest: &mut CellStyle) {
    let p = read_padding(node, Scope::Cell);
    dest.cell_padding_left = p.left;
    dest.cell_padding_top = p.top;
    dest.cell_padding_right = p.right;
    dest.cell_padding_bottom = p.bottom;
}

fn cell_width(node: Node<'_, '_>, dest: &mut CellStyle) {
    dest.width = read_cell_width(node);
}

fn cell_vertical_align(node: Node<'_, '_>, dest: &mut CellStyle) {
    dest.vertical_align = read_vertical_align(node);
}

fn cell_col_span(node: Node<'_, '_>, dest: &mut CellStyle) {
    dest.col_span = read_col_span(node);
}

fn cell_merge(node: Node<'_, '_>, dest: &mut CellStyle) {
    let (h, v) = read_merge(node);
    dest.h_merge = h;
    dest.v_merge = v;
}

/// Readers applied to `w:tcPr`, in order.
pub(crate) const CELL_READERS: [(&str, fn(Node<'_, '_>, &mut CellStyle)); 7] = [
    ("borders", cell_borders),
    ("shading", cell_shading),
    ("padding", cell_padding),
    ("cell_width", cell_width),
    ("vertical_align", cell_vertical_align),
    ("col_span", cell_col_span),
    ("merge", cell_merge),
];
