use core::fmt;

use crate::{Axis, Cell, CellKind, Coordinate, Direction, Error, Move, Piece, PieceKind, Result};

/// A square grid of cells
///
/// The throne sits at the center and the four provinces at the corners; this layout is fixed when
/// the board is built. The board owns its cells: every query returns copies, and the only ways to
/// change what is on the board are [`Board::place`] and [`Board::remove`].
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: u8,
    /// Row-major
    cells: Vec<Cell>,
}

impl Board {
    /// The size of the boards every supported variant plays on
    pub const DEFAULT_SIZE: u8 = 7;

    /// An empty board with `size` rows and columns
    ///
    /// # Panics
    ///
    /// If `size` is even or smaller than 3, as such a board has no center for the throne.
    pub fn new(size: u8) -> Self {
        assert!(
            size >= 3 && size % 2 == 1 && size <= i8::MAX as u8,
            "board size must be odd and at least 3, got {size}"
        );
        let last = (size - 1) as i8;
        let center = last / 2;
        let cells = (0..size as i8)
            .flat_map(|row| (0..size as i8).map(move |col| Coordinate::new(row, col)))
            .map(|coordinate| {
                let kind = if (coordinate.row == 0 || coordinate.row == last)
                    && (coordinate.col == 0 || coordinate.col == last)
                {
                    CellKind::Province
                } else if coordinate.row == center && coordinate.col == center {
                    CellKind::Throne
                } else {
                    CellKind::Normal
                };
                Cell::new(coordinate, kind)
            })
            .collect();
        Self { size, cells }
    }

    /// The number of rows (and columns)
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// Whether the coordinate names a cell on this board
    pub const fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.row >= 0
            && coordinate.col >= 0
            && (coordinate.row as u8) < self.size
            && (coordinate.col as u8) < self.size
    }

    /// Where the throne is
    pub const fn throne(&self) -> Coordinate {
        let center = (self.size / 2) as i8;
        Coordinate::new(center, center)
    }

    /// The four corners, clockwise from the top-left
    pub const fn provinces(&self) -> [Coordinate; 4] {
        let last = (self.size - 1) as i8;
        [
            Coordinate::new(0, 0),
            Coordinate::new(0, last),
            Coordinate::new(last, last),
            Coordinate::new(last, 0),
        ]
    }

    fn index(&self, coordinate: Coordinate) -> Result<usize> {
        if self.contains(coordinate) {
            Ok(coordinate.row as usize * self.size as usize + coordinate.col as usize)
        } else {
            Err(Error::OutOfBounds(coordinate))
        }
    }

    /// A copy of the cell at the given coordinate
    pub fn cell_at(&self, coordinate: Coordinate) -> Result<Cell> {
        self.index(coordinate).map(|idx| self.cells[idx])
    }

    /// The piece at the given coordinate, if any
    pub fn piece_at(&self, coordinate: Coordinate) -> Result<Option<Piece>> {
        self.cell_at(coordinate).map(|cell| cell.piece())
    }

    /// Put a piece on the given cell, replacing whatever stood there
    pub fn place(&mut self, piece: Piece, coordinate: Coordinate) -> Result<()> {
        let idx = self.index(coordinate)?;
        self.cells[idx].place(piece);
        Ok(())
    }

    /// Take the piece off the given cell, returning it
    pub fn remove(&mut self, coordinate: Coordinate) -> Result<Option<Piece>> {
        let idx = self.index(coordinate)?;
        Ok(self.cells[idx].clear())
    }

    /// The cell one step away in the given direction, if both it and `coordinate` are on the board
    pub fn neighbor(&self, coordinate: Coordinate, direction: Direction) -> Option<Cell> {
        if !self.contains(coordinate) {
            return None;
        }
        self.cell_at(coordinate.offset(direction)).ok()
    }

    /// The orthogonally adjacent cells that are on the board
    ///
    /// A corner has two neighbors, an edge cell three, and every other cell four. They are listed
    /// in the order of [`Direction::ALL`].
    pub fn neighbors(&self, coordinate: Coordinate) -> Result<Vec<Cell>> {
        self.index(coordinate)?;
        Ok(Direction::ALL
            .iter()
            .filter_map(|&direction| self.neighbor(coordinate, direction))
            .collect())
    }

    /// The (up to two) neighbors lying along one axis
    pub fn neighbors_along_axis(&self, coordinate: Coordinate, axis: Axis) -> Result<Vec<Cell>> {
        self.index(coordinate)?;
        Ok(axis
            .directions()
            .iter()
            .filter_map(|&direction| self.neighbor(coordinate, direction))
            .collect())
    }

    /// An independent copy of the whole board
    pub fn snapshot(&self) -> Board {
        self.clone()
    }

    /// How many pieces of the given kind are on the board
    pub fn count_pieces(&self, kind: PieceKind) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.piece().is_some_and(|piece| piece.kind() == kind))
            .count()
    }

    /// How many pieces of any kind are on the board
    pub fn total_pieces(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Copies of every cell, row by row from the top
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Build a move between two cells of this board, as they stand right now
    pub fn propose(&self, from: Coordinate, to: Coordinate) -> Result<Move> {
        Ok(Move::new(self.cell_at(from)?, self.cell_at(to)?))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE)
    }
}

/// Draws the board with ranks down the left and files along the bottom
///
/// ```text
/// 7 - - - A - - -
/// ...
/// 1 - - - A - - -
///   a b c d e f g
/// ```
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.size.to_string().len();
        for (row, cells) in self.cells.chunks(self.size as usize).enumerate() {
            write!(f, "{:>width$}", self.size as usize - row)?;
            for cell in cells {
                let letter = cell.piece().map_or('-', |piece| piece.kind().letter());
                write!(f, " {letter}")?;
            }
            writeln!(f)?;
        }
        write!(f, "{:width$}", "")?;
        for file in (b'a'..).take(self.size as usize) {
            write!(f, " {}", file as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("size", &self.size)
            .field("layout", &format_args!("\n{self}"))
            .finish()
    }
}
