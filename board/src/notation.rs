//! Algebraic notation for coordinates and moves
//!
//! Files are letters counted from the left (`a` is column 0) and ranks are digits counted from the
//! bottom, so on a 7x7 board `a7` is the top-left corner `(0, 0)` and `g1` the bottom-right corner
//! `(6, 6)`. A move is written as its two squares back to back, e.g. `d7d5`.

use core::{fmt, str::FromStr};

use crate::{Board, Coordinate, Move};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("expected {expected} characters, got {text:?}")]
    WrongLength { text: String, expected: usize },
    #[error("{0:?} is not a file letter")]
    InvalidFile(char),
    #[error("{0:?} is not a rank digit")]
    InvalidRank(char),
    #[error("{square} is not on a board of size {size}")]
    OffBoard { square: String, size: u8 },
}

/// One square as written, before it is checked against a board
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Square {
    /// 0 for `a`
    file: u8,
    /// As written, so 1 for the bottom row
    rank: u8,
}
impl Square {
    fn parse(file: char, rank: char) -> Result<Self, NotationError> {
        let file = match file {
            'a'..='z' => file as u8 - b'a',
            _ => return Err(NotationError::InvalidFile(file)),
        };
        let rank = match rank {
            '1'..='9' => rank as u8 - b'0',
            _ => return Err(NotationError::InvalidRank(rank)),
        };
        Ok(Self { file, rank })
    }

    fn to_coordinate(self, size: u8) -> Result<Coordinate, NotationError> {
        if self.file < size && self.rank <= size {
            Ok(Coordinate::new((size - self.rank) as i8, self.file as i8))
        } else {
            Err(NotationError::OffBoard {
                square: self.to_string(),
                size,
            })
        }
    }
}
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, self.rank)
    }
}

fn split_squares<const N: usize>(text: &str) -> Result<[Square; N], NotationError> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() != 2 * N {
        return Err(NotationError::WrongLength {
            text: text.to_owned(),
            expected: 2 * N,
        });
    }
    let mut squares = [Square { file: 0, rank: 0 }; N];
    for (square, pair) in squares.iter_mut().zip(chars.chunks(2)) {
        *square = Square::parse(pair[0], pair[1])?;
    }
    Ok(squares)
}

impl Coordinate {
    /// Read a square like `d4` on a board of the given size
    ///
    /// ```
    /// use board::Coordinate;
    /// assert_eq!(Coordinate::from_algebraic("a7", 7), Ok(Coordinate::new(0, 0)));
    /// assert_eq!(Coordinate::from_algebraic("d4", 7), Ok(Coordinate::new(3, 3)));
    /// assert!(Coordinate::from_algebraic("h1", 7).is_err());
    /// ```
    pub fn from_algebraic(text: &str, size: u8) -> Result<Self, NotationError> {
        let [square] = split_squares::<1>(text)?;
        square.to_coordinate(size)
    }

    /// Write this coordinate as a square on a board of the given size
    ///
    /// Returns `None` if the coordinate is not on such a board.
    ///
    /// ```
    /// use board::Coordinate;
    /// assert_eq!(Coordinate::new(6, 6).to_algebraic(7).as_deref(), Some("g1"));
    /// assert_eq!(Coordinate::new(7, 0).to_algebraic(7), None);
    /// ```
    pub fn to_algebraic(self, size: u8) -> Option<String> {
        if self.row < 0 || self.col < 0 || self.row as u8 >= size || self.col as u8 >= size {
            return None;
        }
        let square = Square {
            file: self.col as u8,
            rank: size - self.row as u8,
        };
        Some(square.to_string())
    }
}

/// A move as typed, e.g. `d7d5`
///
/// Parsing only checks the shape of the text; whether the squares are on the board is decided by
/// [`MoveText::coordinates`] or [`MoveText::resolve`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveText {
    from: Square,
    to: Square,
}
impl MoveText {
    /// The origin and destination on a board of the given size
    pub fn coordinates(&self, size: u8) -> Result<(Coordinate, Coordinate), NotationError> {
        Ok((self.from.to_coordinate(size)?, self.to.to_coordinate(size)?))
    }

    /// The move this text describes on the given board, as it stands right now
    pub fn resolve(&self, board: &Board) -> Result<Move, NotationError> {
        let (from, to) = self.coordinates(board.size())?;
        // Both coordinates were just checked against the board's size
        board
            .propose(from, to)
            .map_err(|_| NotationError::OffBoard {
                square: self.to_string(),
                size: board.size(),
            })
    }
}
impl FromStr for MoveText {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [from, to] = split_squares::<2>(s)?;
        Ok(Self { from, to })
    }
}
impl fmt::Display for MoveText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
