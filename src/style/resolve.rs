//! Resolving the full cascade for a single cell.

use super::regions::{regions_for_cell, CellPosition};
use super::Cascade;
use crate::model::{Border, BorderEdge, CellStyle, Declarations, RowStyle, TableStyle};
use serde::Serialize;

/// The fully cascaded formatting of one cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResolvedCell {
    /// Position the cell was resolved for
    pub position: Option<CellPosition>,

    /// Table properties as seen from this cell
    pub table: TableStyle,

    /// Row properties
    pub row: RowStyle,

    /// Cell properties
    pub cell: CellStyle,

    /// Paragraph declarations contributed by conditional regions
    pub block: Declarations,

    /// Run declarations contributed by conditional regions
    pub char: Declarations,
}

/// The formatting levels that apply to one cell, least specific first.
#[derive(Debug, Clone, Copy)]
pub struct CellLevels<'a> {
    /// The named (or default) table style
    pub named: Option<&'a TableStyle>,
    /// Direct `w:tblPr` formatting
    pub table: &'a TableStyle,
    /// Direct `w:trPr` formatting
    pub row: &'a RowStyle,
    /// Direct `w:tcPr` formatting
    pub cell: &'a CellStyle,
}

/// Resolve the cascade for the cell at `pos`.
///
/// The table record merges the named style, then the matching region
/// bundles in priority order, then direct formatting. Rows and cells merge
/// region bundles and then their own direct formatting; a cell finally
/// inherits the padding, shading and edge borders of the resolved table.
pub fn resolve_cell(levels: CellLevels<'_>, pos: CellPosition) -> ResolvedCell {
    let (look, col_band, row_band) = selection_flags(&levels);
    let regions = regions_for_cell(pos, look, col_band, row_band);
    let bundles: Vec<_> = regions
        .iter()
        .filter_map(|region| levels.named.and_then(|named| named.override_for(*region)))
        .collect();

    let mut table = TableStyle::new();
    if let Some(named) = levels.named {
        table.update(named);
    }
    for bundle in &bundles {
        if let Some(fragment) = &bundle.table {
            table.update(fragment);
        }
    }
    table.update(levels.table);
    table.overrides = None;

    let mut row = RowStyle::new();
    for bundle in &bundles {
        if let Some(fragment) = &bundle.row {
            row.update(fragment);
        }
    }
    row.update(levels.row);

    let mut cell = CellStyle::new();
    for bundle in &bundles {
        if let Some(fragment) = &bundle.cell {
            cell.update(fragment);
        }
    }
    cell.update(levels.cell);
    cell.resolve_based_on(&cell_defaults(&table, pos));

    let mut block = Declarations::new();
    let mut char = Declarations::new();
    for bundle in &bundles {
        if let Some(fragment) = &bundle.block {
            block.extend(fragment.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        if let Some(fragment) = &bundle.char {
            char.extend(fragment.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
    }

    ResolvedCell {
        position: Some(pos),
        table,
        row,
        cell,
        block,
        char,
    }
}

/// Look flags come from direct formatting, band sizes from the named style.
fn selection_flags(levels: &CellLevels<'_>) -> (u32, u32, u32) {
    let look = levels
        .table
        .look
        .or_else(|| levels.named.and_then(|n| n.look))
        .unwrap_or(0);
    let source = levels.named.unwrap_or(levels.table);
    (look, source.col_band_size(), source.row_band_size())
}

/// What a cell inherits from its table at a given position.
fn cell_defaults(table: &TableStyle, pos: CellPosition) -> CellStyle {
    let mut cell = CellStyle {
        background_color: table.background_color.clone(),
        cell_padding_left: table.cell_padding_left,
        cell_padding_right: table.cell_padding_right,
        cell_padding_top: table.cell_padding_top,
        cell_padding_bottom: table.cell_padding_bottom,
        ..CellStyle::new()
    };

    let outer_or_inside = |outer: BorderEdge, inside: BorderEdge, on_edge: bool| -> Border {
        table.borders.edge(if on_edge { outer } else { inside }).clone()
    };
    let last_row = pos.row + 1 >= pos.rows;
    let last_col = pos.col + 1 >= pos.cols;
    cell.borders.top = outer_or_inside(BorderEdge::Top, BorderEdge::InsideH, pos.row == 0);
    cell.borders.bottom = outer_or_inside(BorderEdge::Bottom, BorderEdge::InsideH, last_row);
    cell.borders.left = outer_or_inside(BorderEdge::Left, BorderEdge::InsideV, pos.col == 0);
    cell.borders.right = outer_or_inside(BorderEdge::Right, BorderEdge::InsideV, last_col);
    cell
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OverrideBundle, Overrides, Region, VerticalAlign, Width};
    use crate::style::regions::{LOOK_FIRST_ROW, LOOK_NO_VBAND};

    fn shaded(color: &str) -> CellStyle {
        CellStyle {
            background_color: Some(color.to_string()),
            ..Default::default()
        }
    }

    fn named_style() -> TableStyle {
        let mut overrides = Overrides::new();
        overrides.insert(
            Region::FirstRow,
            OverrideBundle {
                cell: Some(shaded("#4472C4")),
                char: Some(Declarations::from([(
                    "font-weight".to_string(),
                    "bold".to_string(),
                )])),
                ..Default::default()
            },
        );
        overrides.insert(
            Region::Band1Horz,
            OverrideBundle {
                cell: Some(shaded("#D9E2F3")),
                ..Default::default()
            },
        );
        let mut style = TableStyle {
            width: Some(Width::Percent(50.0)),
            cell_padding_left: Some(Width::Points(5.4)),
            overrides: Some(overrides),
            col_band_size: Some(1),
            row_band_size: Some(1),
            ..Default::default()
        };
        style.borders.inside_h.style = Some("solid".to_string());
        style.borders.top.style = Some("double".to_string());
        style
    }

    #[test]
    fn test_header_and_band_overrides() {
        let named = named_style();
        let direct = TableStyle {
            look: Some(LOOK_FIRST_ROW | LOOK_NO_VBAND),
            width: Some(Width::Percent(100.0)),
            ..Default::default()
        };
        let row = RowStyle::new();
        let plain = CellStyle::new();
        let levels = CellLevels {
            named: Some(&named),
            table: &direct,
            row: &row,
            cell: &plain,
        };

        let header = resolve_cell(levels, CellPosition::new(0, 0, 3, 2));
        assert_eq!(header.cell.background_color.as_deref(), Some("#4472C4"));
        assert_eq!(header.char["font-weight"], "bold");
        assert_eq!(header.table.width, Some(Width::Percent(100.0)));
        assert_eq!(header.cell.cell_padding_left, Some(Width::Points(5.4)));
        assert_eq!(header.cell.borders.top.style.as_deref(), Some("double"));
        assert_eq!(header.cell.borders.bottom.style.as_deref(), Some("solid"));

        let body = resolve_cell(levels, CellPosition::new(1, 1, 3, 2));
        assert_eq!(body.cell.background_color.as_deref(), Some("#D9E2F3"));
        assert!(body.char.is_empty());
        assert_eq!(body.cell.borders.top.style.as_deref(), Some("solid"));

        let band2 = resolve_cell(levels, CellPosition::new(2, 1, 3, 2));
        assert_eq!(band2.cell.background_color, None);
    }

    #[test]
    fn test_direct_cell_formatting_wins() {
        let named = named_style();
        let direct = TableStyle {
            look: Some(LOOK_FIRST_ROW),
            ..Default::default()
        };
        let row = RowStyle::new();
        let cell = CellStyle {
            vertical_align: Some(VerticalAlign::Bottom),
            ..shaded("#FF0000")
        };
        let levels = CellLevels {
            named: Some(&named),
            table: &direct,
            row: &row,
            cell: &cell,
        };

        let resolved = resolve_cell(levels, CellPosition::new(0, 0, 1, 1));
        assert_eq!(resolved.cell.background_color.as_deref(), Some("#FF0000"));
        assert_eq!(resolved.cell.vertical_align, Some(VerticalAlign::Bottom));
    }

    #[test]
    fn test_without_named_style() {
        let direct = TableStyle::new();
        let row = RowStyle {
            cant_split: Some(true),
            ..Default::default()
        };
        let cell = CellStyle::new();
        let levels = CellLevels {
            named: None,
            table: &direct,
            row: &row,
            cell: &cell,
        };

        let resolved = resolve_cell(levels, CellPosition::new(0, 0, 1, 1));
        assert_eq!(resolved.row.cant_split, Some(true));
        assert_eq!(resolved.cell, CellStyle::new());
        assert!(resolved.block.is_empty());
    }
}
