//! Building style records from property containers.

use super::fragments::FragmentResolver;
use super::readers::{CELL_READERS, ROW_READERS, TABLE_READERS};
use crate::model::{CellStyle, OverrideBundle, Overrides, Region, RowStyle, TableStyle};
use crate::names::{children, get};
use roxmltree::Node;

/// Where a `w:tblPr` block was found.
#[derive(Debug, Clone, Copy)]
pub enum PropertyOrigin<'a, 'input> {
    /// Direct formatting on a `w:tbl`, or a fragment inside an override
    Direct,
    /// The table properties of a named style; carries the `w:style` element
    NamedStyle(Node<'a, 'input>),
}

impl TableStyle {
    /// Read a `w:tblPr` container.
    ///
    /// Conditional overrides are only collected for [`PropertyOrigin::NamedStyle`].
    pub fn from_properties(
        tbl_pr: Node<'_, '_>,
        origin: PropertyOrigin<'_, '_>,
        resolver: &dyn FragmentResolver,
    ) -> Self {
        let mut style = TableStyle::new();
        for (_, read) in TABLE_READERS.iter() {
            read(tbl_pr, &mut style);
        }
        if let PropertyOrigin::NamedStyle(definition) = origin {
            style.overrides = Some(read_overrides(definition, resolver));
        }
        style
    }

    /// Read the table formatting of a named `w:style` definition.
    ///
    /// A definition without `w:tblPr` still contributes its overrides.
    pub fn from_definition(definition: Node<'_, '_>, resolver: &dyn FragmentResolver) -> Self {
        match children(definition, "tblPr").last() {
            Some(tbl_pr) => Self::from_properties(
                tbl_pr,
                PropertyOrigin::NamedStyle(definition),
                resolver,
            ),
            None => TableStyle {
                overrides: Some(read_overrides(definition, resolver)),
                ..TableStyle::new()
            },
        }
    }
}

impl RowStyle {
    /// Read a `w:trPr` container.
    pub fn from_properties(tr_pr: Node<'_, '_>) -> Self {
        let mut style = RowStyle::new();
        for (_, read) in ROW_READERS.iter() {
            read(tr_pr, &mut style);
        }
        style
    }
}

impl CellStyle {
    /// Read a `w:tcPr` container.
    pub fn from_properties(tc_pr: Node<'_, '_>) -> Self {
        let mut style = CellStyle::new();
        for (_, read) in CELL_READERS.iter() {
            read(tc_pr, &mut style);
        }
        style
    }
}

/// Collect the `w:tblStylePr` bundles of a named style definition.
fn read_overrides(definition: Node<'_, '_>, resolver: &dyn FragmentResolver) -> Overrides {
    let mut overrides = Overrides::new();
    for style_pr in children(definition, "tblStylePr") {
        let Some(kind) = get(style_pr, "type") else {
            continue;
        };
        let Some(region) = Region::parse(kind) else {
            log::debug!("ignoring unknown conditional region type {:?}", kind);
            continue;
        };

        let mut bundle = OverrideBundle::default();
        for tbl_pr in children(style_pr, "tblPr") {
            bundle.table = Some(TableStyle::from_properties(
                tbl_pr,
                PropertyOrigin::Direct,
                resolver,
            ));
        }
        for tr_pr in children(style_pr, "trPr") {
            bundle.row = Some(RowStyle::from_properties(tr_pr));
        }
        for tc_pr in children(style_pr, "tcPr") {
            bundle.cell = Some(CellStyle::from_properties(tc_pr));
        }
        for p_pr in children(style_pr, "pPr") {
            bundle.block = Some(resolver.paragraph(p_pr));
        }
        for r_pr in children(style_pr, "rPr") {
            bundle.char = Some(resolver.run(r_pr));
        }
        overrides.insert(region, bundle);
    }
    overrides
}
