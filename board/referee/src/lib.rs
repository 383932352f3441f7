//! The referee of a game of Tafl
//!
//! [`Referee`] owns the board of one game and is the only thing that changes it. A turn goes:
//!
//!  1. [`Referee::is_legal`] (or [`Referee::validate`]) on the proposed move,
//!  2. [`Referee::apply_move`],
//!  3. [`Referee::resolve_captures`],
//!  4. [`Referee::outcome`] to see whether the game is over,
//!  5. [`Referee::change_turn`] if it isn't.
//!
//! The referee doesn't stop anyone from carrying on after a win; callers are expected to stop
//! once [`Referee::outcome`] says the game is over.

use core::marker::PhantomData;

use board::variants::Variant;
use board::{
    Board, CellKind, Color, Coordinate, Direction, GameOutcome, Move, PieceKind, Result,
};

mod captures;
mod history;

pub use crate::history::{History, Record};

/// Why a well-formed move may not be made
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum IllegalMove {
    #[error("there is no piece to move")]
    NoPiece,
    #[error("the piece belongs to the side not on turn")]
    WrongTurn,
    #[error("the destination is already occupied")]
    DestinationOccupied,
    #[error("pieces only move along a row or a column")]
    NoDirection,
    #[error("only the king may stop on the throne or a province")]
    ReservedCell,
    #[error("pieces may not move that far in this variant")]
    TooFar,
    #[error("another piece stands in the way")]
    PathBlocked,
    #[error("the destination is already closed in by the opponent")]
    Flanked,
}

/// Runs one game of the variant `V`
#[derive(Clone, Debug)]
pub struct Referee<V: Variant> {
    board: Board,
    turn: Color,
    /// Number of moves made so far
    ply: u32,
    last_move: Option<Move>,
    /// Set once the king is captured, and never unset
    king_captured: bool,
    history: History,
    variant: PhantomData<V>,
}

impl<V: Variant> Referee<V> {
    /// A referee for a game on the given board
    ///
    /// The board is used as it is; see [`Referee::place_initial_layout`] to set up a game.
    ///
    /// # Panics
    ///
    /// If the board isn't the size the variant is played on.
    pub fn new(board: Board) -> Self {
        assert_eq!(
            board.size(),
            V::SIZE,
            "{} is played on a board of size {}",
            V::NAME,
            V::SIZE
        );
        Self {
            board,
            turn: V::FIRST_TURN,
            ply: 0,
            last_move: None,
            king_captured: false,
            history: History::new(),
            variant: PhantomData,
        }
    }

    /// A referee with the pieces where the variant starts them
    pub fn with_initial_layout() -> Result<Self> {
        let mut referee = Self::new(Board::new(V::SIZE));
        referee.place_initial_layout()?;
        Ok(referee)
    }

    /// Put the pieces where the variant starts them, and give the first move to the side that
    /// makes it
    pub fn place_initial_layout(&mut self) -> Result<()> {
        self.place_pieces(V::LAYOUT, V::FIRST_TURN)
    }

    /// Put the given pieces on the board and hand the move to `turn`
    ///
    /// Every coordinate is checked before anything is placed, so on error the board is left as
    /// it was.
    pub fn place_pieces(
        &mut self,
        layout: &[(PieceKind, &[Coordinate])],
        turn: Color,
    ) -> Result<()> {
        for &(_, coordinates) in layout {
            for &coordinate in coordinates {
                self.board.cell_at(coordinate)?;
            }
        }
        for &(kind, coordinates) in layout {
            for &coordinate in coordinates {
                self.board.place(kind.into(), coordinate)?;
            }
        }
        self.turn = turn;
        Ok(())
    }

    /// The side to move
    pub const fn current_turn(&self) -> Color {
        self.turn
    }

    /// The number of moves made so far
    pub const fn current_ply(&self) -> u32 {
        self.ply
    }

    /// The board as it stands
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// A copy of the board as it stands, independent of the game
    pub fn board_snapshot(&self) -> Board {
        self.board.snapshot()
    }

    /// The move most recently made, if any
    pub const fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// The number of moves that can be undone
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Check whether the move may be made right now
    ///
    /// Returns `Ok(None)` for a legal move, or the first reason it is illegal. The checks are
    /// made against the live board at the move's coordinates, in this order:
    ///  1. There is a piece at the origin.
    ///  2. It belongs to the side to move.
    ///  3. The destination is empty.
    ///  4. The move runs along a row or a column.
    ///  5. Only the king stops on the throne or a province.
    ///  6. The variant allows moving that far, and nothing stands in the way.
    ///  7. The piece doesn't stop where it would already be closed in by the opponent, unless the
    ///     move itself captures one of the pieces doing the closing.
    ///
    /// Fails only if a coordinate of the move is off the board.
    pub fn validate(&self, mv: &Move) -> Result<Option<IllegalMove>> {
        let origin = self.board.cell_at(mv.source())?;
        let destination = self.board.cell_at(mv.target())?;
        let Some(piece) = origin.piece() else {
            return Ok(Some(IllegalMove::NoPiece));
        };
        if piece.color() != self.turn {
            return Ok(Some(IllegalMove::WrongTurn));
        }
        if !destination.is_empty() {
            return Ok(Some(IllegalMove::DestinationOccupied));
        }
        let Some(distance) = mv.distance() else {
            return Ok(Some(IllegalMove::NoDirection));
        };
        if destination.kind().is_reserved() && !piece.is_king() {
            return Ok(Some(IllegalMove::ReservedCell));
        }
        if V::MAX_DISTANCE.is_some_and(|max| distance > max) {
            return Ok(Some(IllegalMove::TooFar));
        }
        if !V::path_clear(&self.board, mv)? {
            return Ok(Some(IllegalMove::PathBlocked));
        }
        if self.lands_flanked(mv)? {
            return Ok(Some(IllegalMove::Flanked));
        }
        Ok(None)
    }

    /// Whether the move may be made right now
    pub fn is_legal(&self, mv: &Move) -> Result<bool> {
        Ok(self.validate(mv)?.is_none())
    }

    /// Whether the moving piece would stand closed in at its destination, once whatever it
    /// captures there is gone
    fn lands_flanked(&self, mv: &Move) -> Result<bool> {
        let mut after = self.board.snapshot();
        if let Some(piece) = after.remove(mv.source())? {
            after.place(piece, mv.target())?;
        }
        for captured in captures::captured_by(&after, mv.target())? {
            after.remove(captured)?;
        }
        captures::enclosed(&after, mv.target())
    }

    /// Every legal move for the side to move
    pub fn legal_moves(&self) -> Result<Vec<Move>> {
        let reach = V::MAX_DISTANCE.unwrap_or(V::SIZE);
        let mut moves = Vec::new();
        for cell in self.board.cells() {
            if cell.color() != Some(self.turn) {
                continue;
            }
            for direction in Direction::ALL {
                let mut target = cell.coordinate();
                for _ in 0..reach {
                    target = target.offset(direction);
                    let Ok(destination) = self.board.cell_at(target) else {
                        break;
                    };
                    let mv = Move::new(cell, destination);
                    if self.validate(&mv)?.is_none() {
                        moves.push(mv);
                    }
                }
            }
        }
        Ok(moves)
    }

    /// Make the move
    ///
    /// The move is expected to have been checked with [`Referee::is_legal`]; it isn't checked
    /// again. The board as it was is kept so that the move can be undone.
    pub fn apply_move(&mut self, mv: Move) -> Result<()> {
        self.board.cell_at(mv.source())?;
        self.board.cell_at(mv.target())?;
        self.history.push(Record::new(self.board.snapshot(), mv));
        if let Some(piece) = self.board.remove(mv.source())? {
            self.board.place(piece, mv.target())?;
        }
        self.last_move = Some(mv);
        self.ply += 1;
        Ok(())
    }

    /// Remove whatever the last move captured, returning where the captured pieces stood
    ///
    /// A captured king is removed too, and the attackers are marked as having won.
    pub fn resolve_captures(&mut self) -> Result<Vec<Coordinate>> {
        let Some(mv) = self.last_move else {
            return Ok(Vec::new());
        };
        let captured = captures::captured_by(&self.board, mv.target())?;
        for &coordinate in &captured {
            if self.board.remove(coordinate)?.is_some_and(|piece| piece.is_king()) {
                self.king_captured = true;
            }
        }
        Ok(captured)
    }

    /// Whether the king has been captured
    pub const fn has_attacker_won(&self) -> bool {
        self.king_captured
    }

    /// Whether the king has reached a province
    pub fn has_king_won(&self) -> bool {
        !self.king_captured
            && self.board.cells().any(|cell| {
                cell.kind() == CellKind::Province && cell.piece().is_some_and(|p| p.is_king())
            })
    }

    /// Where the game stands
    pub fn outcome(&self) -> GameOutcome {
        if self.has_attacker_won() {
            GameOutcome::AttackerWon
        } else if self.has_king_won() {
            GameOutcome::DefenderWon
        } else {
            GameOutcome::InProgress
        }
    }

    /// Hand the move to the other side
    ///
    /// The ply counter is advanced by [`Referee::apply_move`] alone, so a full turn counts once.
    pub fn change_turn(&mut self) {
        self.turn = self.turn.opposite();
    }

    /// Take back the last move, putting the board back as it was before it
    ///
    /// The move taken back stays available as [`Referee::last_move`]. Returns whether there was a move to take back.
    pub fn undo(&mut self) -> bool {
        let Some(record) = self.history.pop() else {
            return false;
        };
        self.last_move = Some(record.mv);
        self.board = record.board;
        self.ply = self.ply.saturating_sub(1);
        self.change_turn();
        true
    }
}

impl<V: Variant> Default for Referee<V> {
    fn default() -> Self {
        Self::new(Board::new(V::SIZE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use board::variants::{ArdRi, Brandubh};
    use board::Piece;
    use quickcheck::quickcheck;

    const fn at(row: i8, col: i8) -> Coordinate {
        Coordinate::new(row, col)
    }

    fn referee_with(layout: &[(PieceKind, &[Coordinate])], turn: Color) -> Referee<Brandubh> {
        let mut referee = Referee::default();
        referee.place_pieces(layout, turn).unwrap();
        referee
    }

    fn propose<V: Variant>(referee: &Referee<V>, from: Coordinate, to: Coordinate) -> Move {
        referee.board().propose(from, to).unwrap()
    }

    /// Make a move that must be legal, returning what it captured
    #[track_caller]
    fn play<V: Variant>(referee: &mut Referee<V>, from: Coordinate, to: Coordinate) -> Vec<Coordinate> {
        let mv = propose(referee, from, to);
        assert_eq!(referee.validate(&mv), Ok(None), "{from} -> {to}");
        referee.apply_move(mv).unwrap();
        referee.resolve_captures().unwrap()
    }

    #[track_caller]
    fn verdict<V: Variant>(referee: &Referee<V>, from: Coordinate, to: Coordinate) -> Option<IllegalMove> {
        referee.validate(&propose(referee, from, to)).unwrap()
    }

    #[test]
    fn initial_layout() {
        let referee = Referee::<Brandubh>::with_initial_layout().unwrap();
        let board = referee.board();
        assert_eq!(board.count_pieces(PieceKind::Attacker), 8);
        assert_eq!(board.count_pieces(PieceKind::Defender), 4);
        assert_eq!(board.count_pieces(PieceKind::King), 1);
        assert_eq!(board.piece_at(at(3, 3)), Ok(Some(Piece::KING)));
        assert_eq!(referee.current_turn(), Color::Dark);
        assert_eq!(referee.current_ply(), 0);
        assert_eq!(referee.outcome(), GameOutcome::InProgress);

        let referee = Referee::<ArdRi>::with_initial_layout().unwrap();
        assert_eq!(referee.board().count_pieces(PieceKind::Attacker), 16);
        assert_eq!(referee.board().count_pieces(PieceKind::Defender), 8);
    }

    #[test]
    fn placing_off_the_board_changes_nothing() {
        let mut referee = Referee::<Brandubh>::default();
        let result = referee.place_pieces(
            &[(PieceKind::Attacker, &[at(0, 3), at(7, 3)])],
            Color::Light,
        );
        assert_eq!(result, Err(board::Error::OutOfBounds(at(7, 3))));
        assert_eq!(referee.board().total_pieces(), 0);
        assert_eq!(referee.current_turn(), Color::Dark);
    }

    #[test]
    #[should_panic]
    fn board_must_fit_the_variant() {
        Referee::<Brandubh>::new(Board::new(9));
    }

    #[test]
    fn basic_legality() {
        let referee = referee_with(
            &[
                (PieceKind::Attacker, &[at(0, 3), at(1, 1)]),
                (PieceKind::Defender, &[at(2, 3)]),
            ],
            Color::Dark,
        );
        assert_eq!(verdict(&referee, at(0, 0), at(0, 1)), Some(IllegalMove::NoPiece));
        assert_eq!(verdict(&referee, at(2, 3), at(2, 4)), Some(IllegalMove::WrongTurn));
        assert_eq!(
            verdict(&referee, at(0, 3), at(2, 3)),
            Some(IllegalMove::DestinationOccupied)
        );
        assert_eq!(verdict(&referee, at(0, 3), at(1, 4)), Some(IllegalMove::NoDirection));
        assert_eq!(
            verdict(&referee, at(0, 3), at(0, 3)),
            Some(IllegalMove::DestinationOccupied)
        );
        assert_eq!(verdict(&referee, at(0, 3), at(3, 3)), Some(IllegalMove::ReservedCell));
        assert_eq!(verdict(&referee, at(1, 1), at(1, 0)), None);
        assert_eq!(verdict(&referee, at(1, 1), at(1, 6)), None);
        assert_eq!(verdict(&referee, at(1, 1), at(6, 1)), None);

        let mut referee = referee;
        referee.place_pieces(&[(PieceKind::Defender, &[at(1, 3)])], Color::Dark).unwrap();
        assert_eq!(verdict(&referee, at(1, 1), at(1, 5)), Some(IllegalMove::PathBlocked));
    }

    #[test]
    fn off_board_moves_are_errors() {
        let referee = referee_with(&[(PieceKind::Attacker, &[at(0, 3)])], Color::Dark);
        let inside = referee.board().cell_at(at(0, 3)).unwrap();
        let outside = Board::new(9).cell_at(at(8, 3)).unwrap();
        assert_eq!(
            referee.is_legal(&Move::new(inside, outside)),
            Err(board::Error::OutOfBounds(at(8, 3)))
        );
    }

    #[test]
    fn diagonal_never_legal() {
        let referee = referee_with(&[(PieceKind::Defender, &[at(2, 2)])], Color::Light);
        for to in [at(3, 3), at(1, 1), at(3, 1), at(1, 3), at(4, 4)] {
            assert_eq!(verdict(&referee, at(2, 2), to), Some(IllegalMove::NoDirection));
        }
    }

    #[test]
    fn only_the_king_lands_on_special_cells() {
        let referee = referee_with(
            &[
                (PieceKind::Attacker, &[at(3, 1), at(0, 2)]),
                (PieceKind::Defender, &[at(6, 2), at(5, 3)]),
            ],
            Color::Dark,
        );
        assert_eq!(verdict(&referee, at(3, 1), at(3, 3)), Some(IllegalMove::ReservedCell));
        assert_eq!(verdict(&referee, at(0, 2), at(0, 0)), Some(IllegalMove::ReservedCell));
        assert_eq!(verdict(&referee, at(0, 2), at(0, 6)), Some(IllegalMove::ReservedCell));

        let referee = referee_with(
            &[(PieceKind::Defender, &[at(6, 2), at(5, 3)]), (PieceKind::King, &[at(1, 3)])],
            Color::Light,
        );
        assert_eq!(verdict(&referee, at(6, 2), at(6, 0)), Some(IllegalMove::ReservedCell));
        assert_eq!(verdict(&referee, at(5, 3), at(3, 3)), Some(IllegalMove::ReservedCell));
        assert_eq!(verdict(&referee, at(1, 3), at(3, 3)), None);
    }

    #[test]
    fn pieces_may_pass_over_the_empty_throne() {
        let referee = referee_with(&[(PieceKind::Attacker, &[at(3, 1)])], Color::Dark);
        assert_eq!(verdict(&referee, at(3, 1), at(3, 5)), None);
    }

    #[test]
    fn custodian_capture() {
        let mut referee = referee_with(
            &[
                (PieceKind::Attacker, &[at(2, 1), at(0, 3)]),
                (PieceKind::Defender, &[at(2, 2)]),
            ],
            Color::Dark,
        );
        let before = referee.board().total_pieces();
        assert_eq!(play(&mut referee, at(0, 3), at(2, 3)), [at(2, 2)]);
        assert_eq!(referee.board().total_pieces(), before - 1);
        assert_eq!(referee.board().piece_at(at(2, 2)), Ok(None));
        assert_eq!(referee.board().piece_at(at(2, 3)), Ok(Some(Piece::ATTACKER)));
    }

    #[test]
    fn capture_against_the_empty_throne() {
        let mut referee = referee_with(
            &[(PieceKind::Attacker, &[at(5, 1)]), (PieceKind::Defender, &[at(3, 2)])],
            Color::Dark,
        );
        assert_eq!(play(&mut referee, at(5, 1), at(3, 1)), [at(3, 2)]);
        assert_eq!(referee.board().count_pieces(PieceKind::Defender), 0);
    }

    #[test]
    fn occupied_throne_is_not_hostile_to_defenders() {
        let mut referee = referee_with(
            &[
                (PieceKind::Attacker, &[at(5, 1)]),
                (PieceKind::Defender, &[at(3, 2)]),
                (PieceKind::King, &[at(3, 3)]),
            ],
            Color::Dark,
        );
        assert!(play(&mut referee, at(5, 1), at(3, 1)).is_empty());
        assert_eq!(referee.board().count_pieces(PieceKind::Defender), 1);
    }

    #[test]
    fn king_on_throne_is_an_anvil_for_defenders() {
        let mut referee = referee_with(
            &[
                (PieceKind::Attacker, &[at(3, 2)]),
                (PieceKind::Defender, &[at(5, 1)]),
                (PieceKind::King, &[at(3, 3)]),
            ],
            Color::Light,
        );
        assert_eq!(play(&mut referee, at(5, 1), at(3, 1)), [at(3, 2)]);
    }

    #[test]
    fn capture_against_a_province() {
        let mut referee = referee_with(
            &[(PieceKind::Attacker, &[at(0, 1)]), (PieceKind::Defender, &[at(4, 2)])],
            Color::Light,
        );
        assert_eq!(play(&mut referee, at(4, 2), at(0, 2)), [at(0, 1)]);
    }

    #[test]
    fn king_captured_on_throne() {
        let mut referee = referee_with(
            &[
                (PieceKind::Attacker, &[at(2, 3), at(4, 3), at(3, 2), at(3, 6)]),
                (PieceKind::King, &[at(3, 3)]),
            ],
            Color::Dark,
        );
        assert_eq!(play(&mut referee, at(3, 6), at(3, 4)), [at(3, 3)]);
        assert!(referee.has_attacker_won());
        assert!(!referee.has_king_won());
        assert_eq!(referee.outcome(), GameOutcome::AttackerWon);
        assert_eq!(referee.board().count_pieces(PieceKind::King), 0);
    }

    #[test]
    fn king_on_throne_survives_three_attackers() {
        let mut referee = referee_with(
            &[
                (PieceKind::Attacker, &[at(2, 3), at(3, 2), at(3, 6)]),
                (PieceKind::Defender, &[at(4, 3)]),
                (PieceKind::King, &[at(3, 3)]),
            ],
            Color::Dark,
        );
        assert!(play(&mut referee, at(3, 6), at(3, 4)).is_empty());
        assert!(!referee.has_attacker_won());
    }

    #[test]
    fn king_beside_throne_captured_by_three() {
        let mut referee = referee_with(
            &[
                (PieceKind::Attacker, &[at(1, 3), at(2, 2), at(2, 6)]),
                (PieceKind::King, &[at(2, 3)]),
            ],
            Color::Dark,
        );
        assert_eq!(play(&mut referee, at(2, 6), at(2, 4)), [at(2, 3)]);
        assert!(referee.has_attacker_won());
    }

    #[test]
    fn king_beside_throne_not_captured_by_two() {
        let mut referee = referee_with(
            &[
                (PieceKind::Attacker, &[at(2, 2), at(2, 6)]),
                (PieceKind::King, &[at(2, 3)]),
            ],
            Color::Dark,
        );
        assert!(play(&mut referee, at(2, 6), at(2, 4)).is_empty());
        assert!(!referee.has_attacker_won());
    }

    #[test]
    fn king_away_from_throne_captured_like_any_piece() {
        let mut referee = referee_with(
            &[
                (PieceKind::Attacker, &[at(1, 1), at(1, 5)]),
                (PieceKind::King, &[at(1, 2)]),
            ],
            Color::Dark,
        );
        assert_eq!(play(&mut referee, at(1, 5), at(1, 3)), [at(1, 2)]);
        assert!(referee.has_attacker_won());
    }

    #[test]
    fn defenders_cannot_capture_their_king() {
        let mut referee = referee_with(
            &[
                (PieceKind::Attacker, &[at(1, 1)]),
                (PieceKind::Defender, &[at(5, 3)]),
                (PieceKind::King, &[at(1, 2)]),
            ],
            Color::Light,
        );
        play(&mut referee, at(5, 3), at(1, 3));
        assert!(!referee.has_attacker_won());
        assert_eq!(referee.board().count_pieces(PieceKind::King), 1);
    }

    #[test]
    fn king_escapes_to_a_province() {
        for (from, to) in [
            (at(0, 2), at(0, 0)),
            (at(2, 6), at(0, 6)),
            (at(6, 3), at(6, 6)),
            (at(4, 0), at(6, 0)),
        ] {
            let mut referee = referee_with(&[(PieceKind::King, &[from])], Color::Light);
            assert!(!referee.has_king_won());
            play(&mut referee, from, to);
            assert!(referee.has_king_won(), "{from} -> {to}");
            assert_eq!(referee.outcome(), GameOutcome::DefenderWon);
        }
    }

    #[test]
    fn king_on_the_edge_has_not_escaped() {
        let mut referee = referee_with(&[(PieceKind::King, &[at(3, 3)])], Color::Light);
        play(&mut referee, at(3, 3), at(0, 3));
        assert!(!referee.has_king_won());
    }

    #[test]
    fn no_stepping_between_two_enemies() {
        let referee = referee_with(
            &[
                (PieceKind::Attacker, &[at(2, 1), at(2, 3)]),
                (PieceKind::Defender, &[at(4, 2)]),
            ],
            Color::Light,
        );
        assert_eq!(verdict(&referee, at(4, 2), at(2, 2)), Some(IllegalMove::Flanked));
    }

    #[test]
    fn stepping_between_enemies_allowed_when_it_captures() {
        let mut referee = referee_with(
            &[
                (PieceKind::Attacker, &[at(2, 1), at(2, 3)]),
                (PieceKind::Defender, &[at(4, 2), at(2, 4)]),
            ],
            Color::Light,
        );
        assert_eq!(play(&mut referee, at(4, 2), at(2, 2)), [at(2, 3)]);
    }

    #[test]
    fn no_stepping_between_enemy_and_province() {
        let referee = referee_with(
            &[(PieceKind::Attacker, &[at(4, 1)]), (PieceKind::Defender, &[at(0, 2)])],
            Color::Dark,
        );
        assert_eq!(verdict(&referee, at(4, 1), at(0, 1)), Some(IllegalMove::Flanked));
    }

    #[test]
    fn no_stepping_between_enemy_and_empty_throne() {
        let referee = referee_with(
            &[(PieceKind::Attacker, &[at(3, 1)]), (PieceKind::Defender, &[at(5, 2)])],
            Color::Light,
        );
        assert_eq!(verdict(&referee, at(5, 2), at(3, 2)), Some(IllegalMove::Flanked));
    }

    #[test]
    fn stepping_between_friends_is_fine() {
        let referee = referee_with(
            &[(PieceKind::Defender, &[at(2, 1), at(2, 3), at(4, 2)])],
            Color::Light,
        );
        assert_eq!(verdict(&referee, at(4, 2), at(2, 2)), None);
    }

    #[test]
    fn king_may_step_off_the_throne_beside_an_attacker() {
        let referee = referee_with(
            &[(PieceKind::Attacker, &[at(1, 3)]), (PieceKind::King, &[at(3, 3)])],
            Color::Light,
        );
        assert_eq!(verdict(&referee, at(3, 3), at(2, 3)), None);
    }

    #[test]
    fn king_may_not_step_beside_the_throne_into_three_attackers() {
        let referee = referee_with(
            &[
                (PieceKind::Attacker, &[at(1, 3), at(2, 2), at(2, 4)]),
                (PieceKind::King, &[at(3, 3)]),
            ],
            Color::Light,
        );
        assert_eq!(verdict(&referee, at(3, 3), at(2, 3)), Some(IllegalMove::Flanked));
        // Two attackers and the throne are not enough
        let referee = referee_with(
            &[
                (PieceKind::Attacker, &[at(1, 3), at(2, 2)]),
                (PieceKind::King, &[at(3, 3)]),
            ],
            Color::Light,
        );
        assert_eq!(verdict(&referee, at(3, 3), at(2, 3)), None);
    }

    #[test]
    fn ard_ri_moves_one_cell() {
        let mut referee = Referee::<ArdRi>::default();
        referee
            .place_pieces(&[(PieceKind::Attacker, &[at(1, 1)])], Color::Dark)
            .unwrap();
        assert_eq!(verdict(&referee, at(1, 1), at(1, 2)), None);
        assert_eq!(verdict(&referee, at(1, 1), at(1, 3)), Some(IllegalMove::TooFar));
        assert_eq!(verdict(&referee, at(1, 1), at(3, 1)), Some(IllegalMove::TooFar));
        assert_eq!(referee.legal_moves().unwrap().len(), 4);
    }

    #[test]
    fn opening_moves() {
        let referee = Referee::<Brandubh>::with_initial_layout().unwrap();
        let moves = referee.legal_moves().unwrap();
        assert!(!moves.is_empty());
        assert!(moves
            .iter()
            .all(|mv| referee.board().piece_at(mv.source()) == Ok(Some(Piece::ATTACKER))));
        // (0, 3) can go sideways but never onto a province
        assert!(moves.iter().any(|mv| mv.source() == at(0, 3) && mv.target() == at(0, 1)));
        assert!(!moves.iter().any(|mv| mv.target() == at(0, 0)));
    }

    #[test]
    fn ply_counts_each_move_once() {
        let mut referee = Referee::<Brandubh>::with_initial_layout().unwrap();
        play(&mut referee, at(0, 3), at(0, 1));
        referee.change_turn();
        assert_eq!(referee.current_ply(), 1);
        assert_eq!(referee.current_turn(), Color::Light);
        play(&mut referee, at(2, 3), at(2, 1));
        referee.change_turn();
        assert_eq!(referee.current_ply(), 2);
        assert_eq!(referee.current_turn(), Color::Dark);
    }

    #[test]
    fn undo_restores_the_board() {
        let mut referee = referee_with(
            &[
                (PieceKind::Attacker, &[at(2, 1), at(0, 3)]),
                (PieceKind::Defender, &[at(2, 2)]),
            ],
            Color::Dark,
        );
        let before = referee.board_snapshot();
        play(&mut referee, at(0, 3), at(2, 3));
        referee.change_turn();
        assert_ne!(referee.board(), &before);
        assert_eq!(referee.history_len(), 1);

        assert!(referee.undo());
        assert_eq!(referee.board(), &before);
        assert_eq!(referee.current_turn(), Color::Dark);
        assert_eq!(referee.current_ply(), 0);
        assert_eq!(referee.last_move(), before.propose(at(0, 3), at(2, 3)).ok());
        assert_eq!(referee.history_len(), 0);

        assert!(!referee.undo());
        assert_eq!(referee.board(), &before);
        assert_eq!(referee.current_turn(), Color::Dark);
    }

    #[test]
    fn undo_keeps_the_move_taken_back() {
        let mut referee = Referee::<Brandubh>::with_initial_layout().unwrap();
        let opening = propose(&referee, at(0, 3), at(0, 1));
        play(&mut referee, at(0, 3), at(0, 1));
        referee.change_turn();
        assert!(referee.undo());
        assert_eq!(referee.last_move(), Some(opening));

        play(&mut referee, at(0, 3), at(0, 1));
        referee.change_turn();
        let reply = propose(&referee, at(2, 3), at(2, 1));
        play(&mut referee, at(2, 3), at(2, 1));
        referee.change_turn();
        assert!(referee.undo());
        assert_eq!(referee.last_move(), Some(reply));
        assert_eq!(referee.current_turn(), Color::Light);
        assert_eq!(referee.current_ply(), 1);
    }

    #[test]
    fn snapshots_are_detached() {
        let referee = Referee::<Brandubh>::with_initial_layout().unwrap();
        let mut snapshot = referee.board_snapshot();
        snapshot.remove(at(3, 3)).unwrap();
        assert_eq!(referee.board().piece_at(at(3, 3)), Ok(Some(Piece::KING)));
        assert_eq!(referee.board_snapshot(), referee.board_snapshot());
    }

    /// Play out a game from the start, picking each move from the legal ones with `choices`
    ///
    /// `check` sees the referee before and after every move.
    fn random_game<V: Variant>(
        choices: &[u8],
        mut check: impl FnMut(&Referee<V>, &Referee<V>) -> bool,
    ) -> bool {
        let mut referee = Referee::<V>::with_initial_layout().unwrap();
        for &choice in choices {
            let moves = referee.legal_moves().unwrap();
            if moves.is_empty() {
                break;
            }
            let before = referee.clone();
            referee.apply_move(moves[choice as usize % moves.len()]).unwrap();
            referee.resolve_captures().unwrap();
            if !check(&before, &referee) {
                return false;
            }
            if referee.outcome().is_over() {
                break;
            }
            referee.change_turn();
        }
        true
    }

    quickcheck! {
        fn test_pieces_are_never_added(choices: Vec<u8>) -> bool {
            random_game::<Brandubh>(&choices, |before, after| {
                after.board().total_pieces() <= before.board().total_pieces()
                    && after.board().count_pieces(PieceKind::King) <= 1
                    && after.current_ply() == before.current_ply() + 1
            })
        }

        fn test_ard_ri_pieces_are_never_added(choices: Vec<u8>) -> bool {
            random_game::<ArdRi>(&choices, |before, after| {
                after.board().total_pieces() <= before.board().total_pieces()
                    && after.board().count_pieces(PieceKind::King) <= 1
            })
        }

        fn test_undo_round_trip(choices: Vec<u8>) -> bool {
            random_game::<Brandubh>(&choices, |before, after| {
                let mut undone = after.clone();
                // The turn is changed after the check, so undo's toggle has to be matched here
                undone.change_turn();
                undone.undo()
                    && undone.board() == before.board()
                    && undone.current_turn() == before.current_turn()
                    && undone.current_ply() == before.current_ply()
            })
        }

        fn test_special_cells_stay_special(choices: Vec<u8>) -> bool {
            random_game::<Brandubh>(&choices, |_, after| {
                after.board().cells().all(|cell| {
                    !cell.kind().is_reserved()
                        || cell.piece().map_or(true, |piece| piece.is_king())
                })
            })
        }
    }
}
