//! Variants of the game, and the different behaviors we need to implement them
//!
//! Capturing and winning depend only on the geometry of the board, so they are shared by every
//! variant. What differs is where the pieces start and how far a piece may travel in one move.

use core::{fmt, str::FromStr};

use crate::{Board, Color, Coordinate, Move, PieceKind, Result};

mod ard_ri;
mod brandubh;

pub use ard_ri::ArdRi;
pub use brandubh::Brandubh;

/// The starting position: each kind of piece with every cell it starts on
pub type Layout = &'static [(PieceKind, &'static [Coordinate])];

/// The details handled differently by supported Tafl variants
pub trait Variant: Copy + Eq + fmt::Debug + Default {
    /// The name used to pick this variant
    const NAME: VariantName;

    /// The number of rows and columns of the board
    const SIZE: u8;

    /// Which side moves first
    const FIRST_TURN: Color = Color::Dark;

    /// Where the pieces start
    const LAYOUT: Layout;

    /// Whether the straight line travelled by the move is free of pieces
    ///
    /// The move is known to have a direction, and both of its ends to be on the board. By
    /// default, every cell strictly between the origin and the destination must be empty.
    fn path_clear(board: &Board, mv: &Move) -> Result<bool> {
        for coordinate in mv.between() {
            if !board.cell_at(coordinate)?.is_empty() {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// The furthest a piece may travel in one move, if there is a limit
    const MAX_DISTANCE: Option<u8> = None;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown variant {0:?}, expected \"brandubh\" or \"ardri\"")]
pub struct UnknownVariantError(pub String);

/// The variants that can be picked by name
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VariantName {
    Brandubh,
    ArdRi,
}
impl VariantName {
    pub const ALL: [VariantName; 2] = [Self::Brandubh, Self::ArdRi];

    pub const fn as_str(self) -> &'static str {
        match self {
            VariantName::Brandubh => "brandubh",
            VariantName::ArdRi => "ardri",
        }
    }
}
impl fmt::Display for VariantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
impl FromStr for VariantName {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect();
        Self::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| UnknownVariantError(s.to_owned()))
    }
}
