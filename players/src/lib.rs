//! Traits for an arbitrary player

use core::cell::RefCell;

use board::{Board, Color, Coordinate, Move, MoveText, NotationError};
use referee::IllegalMove;

/// What a player asks the game to do on its turn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Make the move written in algebraic notation
    Play(MoveText),
    /// Take back the last move made, by either side
    Undo,
    /// Abandon the game
    Quit,
}

/// Why the game refused a command
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("{0}")]
    Notation(#[from] NotationError),
    #[error("illegal move: {0}")]
    Illegal(#[from] IllegalMove),
    #[error("there is no move to take back")]
    NothingToUndo,
}

/// A player in a game
///
/// This trait is generic over how the player decides what to do, so humans at a terminal and
/// scripted players can both implement this.
pub trait Player {
    /// Decide what to do, with the board as it stands and `turn` to move
    ///
    /// This is asked again, with the same board, after every rejected command.
    fn next_command(&mut self, board: &Board, turn: Color) -> Command;

    /// React to the last command being refused
    fn command_rejected(&mut self, rejection: &Rejection);

    /// React to the opponent making the given move, which captured the pieces at `captured`
    fn react_to_move(&mut self, _board: &Board, _mv: &Move, _captured: &[Coordinate]) {}
}

/// One player sitting on both sides of the board
///
/// Only one side is ever asked at a time, so the borrow never overlaps.
impl<P: Player> Player for &RefCell<P> {
    fn next_command(&mut self, board: &Board, turn: Color) -> Command {
        self.borrow_mut().next_command(board, turn)
    }

    fn command_rejected(&mut self, rejection: &Rejection) {
        self.borrow_mut().command_rejected(rejection)
    }

    fn react_to_move(&mut self, board: &Board, mv: &Move, captured: &[Coordinate]) {
        self.borrow_mut().react_to_move(board, mv, captured)
    }
}
