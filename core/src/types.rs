/// Single coordinate axis used for board size, rows and columns.
pub type Coord = u16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Zero-based row-major position of a cell, `row * size + col`.
pub type CellIndex = CellCount;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Converts `(row, col)` to a cell index on a square grid of `size`, returning a value only when it is in bounds.
pub fn cell_index(size: Coord, (row, col): Coord2) -> Option<CellIndex> {
    if row < size && col < size {
        Some(mult(row, size) + CellIndex::from(col))
    } else {
        None
    }
}

/// Converts a cell index back to `(row, col)` on a square grid of `size`.
pub fn cell_coords(size: Coord, index: CellIndex) -> Option<Coord2> {
    if size == 0 || index >= mult(size, size) {
        return None;
    }
    let size = CellIndex::from(size);
    let row = (index / size).try_into().ok()?;
    let col = (index % size).try_into().ok()?;
    Some((row, col))
}
