//! Property-by-property merging of style records.

use crate::model::{CellStyle, RowStyle, TableStyle};

/// Merge operations shared by every style record.
///
/// A cascade is applied from the least to the most specific level with
/// [`Cascade::update`]; [`Cascade::resolve_based_on`] then fills whatever is
/// still inherited from an already-resolved parent.
pub trait Cascade {
    /// Copy every explicit property of `other` over `self`.
    fn update(&mut self, other: &Self);

    /// Fill every still-inherited property of `self` from `parent`.
    fn resolve_based_on(&mut self, parent: &Self);
}

macro_rules! impl_cascade {
    ($ty:ty, [$($field:ident),* $(,)?] $(, borders: $borders:ident)?) => {
        impl Cascade for $ty {
            fn update(&mut self, other: &Self) {
                $(
                    if other.$field.is_some() {
                        self.$field.clone_from(&other.$field);
                    }
                )*
                $( self.$borders.update(&other.$borders); )?
            }

            fn resolve_based_on(&mut self, parent: &Self) {
                $(
                    if self.$field.is_none() {
                        self.$field.clone_from(&parent.$field);
                    }
                )*
                $( self.$borders.resolve_based_on(&parent.$borders); )?
            }
        }
    };
}

impl_cascade!(
    TableStyle,
    [
        width,
        cell_padding_left,
        cell_padding_right,
        cell_padding_top,
        cell_padding_bottom,
        margin_left,
        margin_right,
        background_color,
        spacing,
        indent,
        overrides,
        col_band_size,
        row_band_size,
        look,
    ],
    borders: borders
);

impl_cascade!(RowStyle, [height, cant_split, hidden, spacing]);

impl_cascade!(
    CellStyle,
    [
        background_color,
        cell_padding_left,
        cell_padding_right,
        cell_padding_top,
        cell_padding_bottom,
        width,
        vertical_align,
        col_span,
        v_merge,
        h_merge,
    ],
    borders: borders
);
