//! WordprocessingML property readers.

mod fragments;
mod readers;
mod records;
mod shared;

pub use fragments::{BasicFragmentResolver, FragmentResolver};
pub use readers::{
    read_band_size, read_cell_width, read_col_span, read_height, read_indent,
    read_justification, read_look, read_merge, read_padding, read_spacing, read_table_width,
    read_vertical_align, read_width_value, Padding, Scope,
};
pub use records::PropertyOrigin;
pub use shared::{read_borders, read_shading, read_toggle, simple_color};
