use crate::{CellKind, Color, Coordinate, Piece};

/// A position on the board together with what is on it
///
/// Cells handed out by a [`Board`](crate::Board) are copies, so changing one never changes the
/// board it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    coordinate: Coordinate,
    kind: CellKind,
    piece: Option<Piece>,
}
impl Cell {
    /// An empty cell
    pub const fn new(coordinate: Coordinate, kind: CellKind) -> Self {
        Self {
            coordinate,
            kind,
            piece: None,
        }
    }

    pub const fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub const fn kind(&self) -> CellKind {
        self.kind
    }

    pub const fn piece(&self) -> Option<Piece> {
        self.piece
    }

    /// The color of the piece standing here, if any
    pub const fn color(&self) -> Option<Color> {
        match self.piece {
            Some(piece) => Some(piece.color()),
            None => None,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.piece.is_none()
    }

    pub fn place(&mut self, piece: Piece) {
        self.piece = Some(piece);
    }

    /// Take the piece off this cell, returning it
    pub fn clear(&mut self) -> Option<Piece> {
        self.piece.take()
    }
}
