/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for tile counts and pair counts.
pub type CellCount = u16;

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

/// Converts an `ndarray` index back into board coordinates.
///
/// Board dimensions are bounded by [`Coord`], so any index produced by iterating a board grid fits.
pub(crate) fn from_nd_index((row, col): (usize, usize)) -> Coord2 {
    (row as Coord, col as Coord)
}
