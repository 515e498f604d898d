//! Conditional region selection for a cell position.

use crate::model::Region;
use serde::Serialize;

/// `w:tblLook` bit: apply first-row formatting.
pub const LOOK_FIRST_ROW: u32 = 0x0020;
/// `w:tblLook` bit: apply last-row formatting.
pub const LOOK_LAST_ROW: u32 = 0x0040;
/// `w:tblLook` bit: apply first-column formatting.
pub const LOOK_FIRST_COLUMN: u32 = 0x0080;
/// `w:tblLook` bit: apply last-column formatting.
pub const LOOK_LAST_COLUMN: u32 = 0x0100;
/// `w:tblLook` bit: do not apply horizontal banding.
pub const LOOK_NO_HBAND: u32 = 0x0200;
/// `w:tblLook` bit: do not apply vertical banding.
pub const LOOK_NO_VBAND: u32 = 0x0400;

/// Logical position of a cell within its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellPosition {
    /// Row index (0-based)
    pub row: usize,
    /// Cell index within the row (0-based)
    pub col: usize,
    /// Number of rows in the table
    pub rows: usize,
    /// Number of cells in this row
    pub cols: usize,
}

impl CellPosition {
    /// Create a position.
    pub fn new(row: usize, col: usize, rows: usize, cols: usize) -> Self {
        Self {
            row,
            col,
            rows,
            cols,
        }
    }

    fn is_first_row(&self) -> bool {
        self.row == 0
    }

    fn is_last_row(&self) -> bool {
        self.row + 1 >= self.rows
    }

    fn is_first_col(&self) -> bool {
        self.col == 0
    }

    fn is_last_col(&self) -> bool {
        self.col + 1 >= self.cols
    }
}

/// Regions that apply to the cell at `pos`, from lowest to highest priority.
///
/// Header rows and columns enabled by `look` are left out of band counting.
pub fn regions_for_cell(pos: CellPosition, look: u32, col_band: u32, row_band: u32) -> Vec<Region> {
    let has = |bit: u32| look & bit != 0;
    let first_row = has(LOOK_FIRST_ROW) && pos.is_first_row();
    let last_row = has(LOOK_LAST_ROW) && pos.is_last_row();
    let first_col = has(LOOK_FIRST_COLUMN) && pos.is_first_col();
    let last_col = has(LOOK_LAST_COLUMN) && pos.is_last_col();

    let mut regions = vec![Region::WholeTable];

    if !has(LOOK_NO_VBAND) && !first_col {
        let index = pos.col - usize::from(has(LOOK_FIRST_COLUMN));
        regions.push(if is_odd_band(index, col_band) {
            Region::Band1Vert
        } else {
            Region::Band2Vert
        });
    }
    if !has(LOOK_NO_HBAND) && !first_row {
        let index = pos.row - usize::from(has(LOOK_FIRST_ROW));
        regions.push(if is_odd_band(index, row_band) {
            Region::Band1Horz
        } else {
            Region::Band2Horz
        });
    }

    // Word ranks columns below rows, whatever the schema suggests.
    if first_col {
        regions.push(Region::FirstCol);
    }
    if last_col {
        regions.push(Region::LastCol);
    }
    if first_row {
        regions.push(Region::FirstRow);
    }
    if last_row {
        regions.push(Region::LastRow);
    }

    if first_row && first_col {
        regions.push(Region::NwCell);
    }
    if first_row && last_col {
        regions.push(Region::NeCell);
    }
    if last_row && first_col {
        regions.push(Region::SwCell);
    }
    if last_row && last_col {
        regions.push(Region::SeCell);
    }

    regions
}

/// Whether `index` falls in a first (odd-numbered) band.
fn is_odd_band(index: usize, band_size: u32) -> bool {
    let size = band_size.max(1) as usize;
    (index / size) % 2 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT_LOOK: u32 = 0x04A0; // firstRow, firstColumn, noVBand

    #[test]
    fn test_header_cell() {
        let regions = regions_for_cell(CellPosition::new(0, 0, 3, 3), DEFAULT_LOOK, 1, 1);
        assert_eq!(
            regions,
            vec![
                Region::WholeTable,
                Region::FirstCol,
                Region::FirstRow,
                Region::NwCell
            ]
        );
    }

    #[test]
    fn test_body_banding_skips_header() {
        let first_body = regions_for_cell(CellPosition::new(1, 1, 4, 3), DEFAULT_LOOK, 1, 1);
        assert_eq!(first_body, vec![Region::WholeTable, Region::Band1Horz]);

        let second_body = regions_for_cell(CellPosition::new(2, 1, 4, 3), DEFAULT_LOOK, 1, 1);
        assert_eq!(second_body, vec![Region::WholeTable, Region::Band2Horz]);
    }

    #[test]
    fn test_band_size() {
        let band = |row| regions_for_cell(CellPosition::new(row, 0, 9, 1), LOOK_NO_VBAND, 1, 2)[1];
        assert_eq!(band(0), Region::Band1Horz);
        assert_eq!(band(1), Region::Band1Horz);
        assert_eq!(band(2), Region::Band2Horz);
        assert_eq!(band(4), Region::Band1Horz);
    }

    #[test]
    fn test_no_look_flags() {
        let regions = regions_for_cell(CellPosition::new(0, 2, 1, 3), 0, 1, 1);
        assert_eq!(
            regions,
            vec![Region::WholeTable, Region::Band1Vert, Region::Band1Horz]
        );
    }

    #[test]
    fn test_last_row_and_column() {
        let look = LOOK_LAST_ROW | LOOK_LAST_COLUMN | LOOK_NO_HBAND | LOOK_NO_VBAND;
        let regions = regions_for_cell(CellPosition::new(2, 2, 3, 3), look, 1, 1);
        assert_eq!(
            regions,
            vec![
                Region::WholeTable,
                Region::LastCol,
                Region::LastRow,
                Region::SeCell
            ]
        );
    }
}
