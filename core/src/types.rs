use core::slice;

/// Row or column index. Boards never exceed 255 on either side.
pub type Coord = u8;

/// Number of cells or mines on a board.
pub type CellCount = u16;

/// Board position as `(row, col)`, counted from the top-left corner.
pub type Coord2 = (Coord, Coord);

/// Conversion into the index type used by `ndarray` storage.
pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        let (row, col) = self;
        [usize::from(row), usize::from(col)]
    }
}

/// Cell count of a `rows` by `cols` board, clamped at [`CellCount::MAX`].
pub const fn mult(rows: Coord, cols: Coord) -> CellCount {
    (rows as CellCount).saturating_mul(cols as CellCount)
}

const OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Positions touching `center`, including diagonals, in row-major order.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    size: Coord2,
    offsets: slice::Iter<'static, (i8, i8)>,
}

impl NeighborIter {
    pub(crate) fn new(center: Coord2, size: Coord2) -> Self {
        Self {
            center,
            size,
            offsets: OFFSETS.iter(),
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        let ((row, col), (rows, cols)) = (self.center, self.size);
        self.offsets.find_map(|&(d_row, d_col)| {
            let row = row.checked_add_signed(d_row)?;
            let col = col.checked_add_signed(d_col)?;
            (row < rows && col < cols).then_some((row, col))
        })
    }
}
