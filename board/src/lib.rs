//! Board representation for games of Tafl
//!
//! This crate holds the plain data of a game: the value types, the cells and the grid they live
//! in, proposed moves, the algebraic notation used to talk about them, and the [`variants`] that
//! decide the starting layout and how far pieces may travel. Deciding what is legal and what gets
//! captured is left to the referee built on top of it.

use core::fmt;

mod cell;
mod grid;
mod movement;
mod notation;
pub mod variants;

pub use crate::cell::Cell;
pub use crate::grid::Board;
pub use crate::movement::Move;
pub use crate::notation::{MoveText, NotationError};

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("coordinate {0} lies outside the board")]
    OutOfBounds(Coordinate),
}

/// The colors a piece can have
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// The king and its defenders
    Light,
    /// The attackers
    Dark,
}
impl Color {
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }
}
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::Light => "light",
            Color::Dark => "dark",
        })
    }
}

/// The types of pieces there are
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Attacker,
    Defender,
    King,
}
impl PieceKind {
    /// All the kinds of pieces there are
    pub const KINDS: [PieceKind; 3] = [Self::Attacker, Self::Defender, Self::King];

    /// The side that owns pieces of this kind
    pub const fn color(self) -> Color {
        match self {
            PieceKind::Attacker => Color::Dark,
            PieceKind::Defender | PieceKind::King => Color::Light,
        }
    }

    /// The letter used for this piece when rendering a board
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Attacker => 'A',
            PieceKind::Defender => 'D',
            PieceKind::King => 'K',
        }
    }
}

/// A piece
///
/// The color is fixed by the kind, so the only way to build one is [`Piece::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
}
impl Piece {
    pub const ATTACKER: Self = Self::new(PieceKind::Attacker);
    pub const DEFENDER: Self = Self::new(PieceKind::Defender);
    pub const KING: Self = Self::new(PieceKind::King);

    pub const fn new(kind: PieceKind) -> Self {
        Self { kind }
    }

    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    pub const fn color(self) -> Color {
        self.kind.color()
    }

    pub const fn is_king(self) -> bool {
        matches!(self.kind, PieceKind::King)
    }
}
impl From<PieceKind> for Piece {
    fn from(kind: PieceKind) -> Self {
        Self::new(kind)
    }
}

/// What a cell is, regardless of what stands on it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    Normal,
    /// The center of the board
    Throne,
    /// One of the four corners
    Province,
}
impl CellKind {
    /// Whether only the king may stop on a cell of this kind
    pub const fn is_reserved(self) -> bool {
        matches!(self, CellKind::Throne | CellKind::Province)
    }
}

/// The two lines a piece can move along
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Along a row
    Horizontal,
    /// Along a column
    Vertical,
}
impl Axis {
    pub const AXES: [Axis; 2] = [Self::Horizontal, Self::Vertical];

    /// The two directions pointing along this axis
    pub const fn directions(self) -> [Direction; 2] {
        match self {
            Axis::Horizontal => [Direction::West, Direction::East],
            Axis::Vertical => [Direction::North, Direction::South],
        }
    }
}

/// An orthogonal direction on the board
///
/// North points towards row 0, west towards column 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}
impl Direction {
    pub const ALL: [Direction; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// The `(row, col)` step taken by moving once in this direction
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

/// A position on a board, counted from the top-left corner
///
/// Both components are signed so that positions off the board can still be named (and rejected
/// with [`Error::OutOfBounds`]) instead of wrapping around.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: i8,
    pub col: i8,
}
impl Coordinate {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Step once in the given direction
    ///
    /// Components stop at the limits of `i8` instead of wrapping; such positions are off every
    /// board anyway.
    ///
    /// ```
    /// use board::{Coordinate, Direction};
    /// assert_eq!(Coordinate::new(3, 3).offset(Direction::North), Coordinate::new(2, 3));
    /// assert_eq!(Coordinate::new(0, 0).offset(Direction::West), Coordinate::new(0, -1));
    /// assert_eq!(Coordinate::new(i8::MAX, 0).offset(Direction::South), Coordinate::new(i8::MAX, 0));
    /// ```
    pub const fn offset(self, direction: Direction) -> Self {
        let (row, col) = direction.delta();
        Self::new(self.row.saturating_add(row), self.col.saturating_add(col))
    }

    /// The direction to travel in a straight line from `self` to `other`
    ///
    /// Returns `None` if the two coordinates share no row or column, or are the same coordinate.
    ///
    /// ```
    /// use board::{Coordinate, Direction};
    /// assert_eq!(Coordinate::new(2, 2).direction_to(Coordinate::new(4, 2)), Some(Direction::South));
    /// assert_eq!(Coordinate::new(2, 2).direction_to(Coordinate::new(3, 3)), None);
    /// assert_eq!(Coordinate::new(2, 2).direction_to(Coordinate::new(2, 2)), None);
    /// ```
    pub const fn direction_to(self, other: Self) -> Option<Direction> {
        if self.row == other.row {
            if self.col < other.col {
                Some(Direction::East)
            } else if self.col > other.col {
                Some(Direction::West)
            } else {
                None
            }
        } else if self.col == other.col {
            if self.row < other.row {
                Some(Direction::South)
            } else {
                Some(Direction::North)
            }
        } else {
            None
        }
    }

    /// The number of steps between two coordinates sharing a line
    pub const fn distance(self, other: Self) -> u8 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The possible states of a game
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    /// The king was captured
    AttackerWon,
    /// The king reached a province
    DefenderWon,
}
impl GameOutcome {
    pub const fn is_over(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }
}
