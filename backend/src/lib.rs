use board::variants::Variant;
use board::{Color, GameOutcome, Result};
use players::{Command, Player, Rejection};
use referee::Referee;

/// How a game came to an end
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// One side won
    Finished(GameOutcome),
    /// A player quit before either side won
    Abandoned,
}

/// A backend which queries moves from the two players until the game is done
pub struct Backend<V: Variant, Attacker, Defender> {
    /// The current state of the game
    referee: Referee<V>,
    /// The player moving the dark pieces
    attacker: Attacker,
    /// The player moving the king and its defenders
    defender: Defender,
}

impl<V: Variant, Attacker: Player, Defender: Player> Backend<V, Attacker, Defender> {
    /// Create a new instance with the pieces where the variant starts them
    pub fn new(attacker: Attacker, defender: Defender) -> Result<Self> {
        Ok(Self::from_referee(
            Referee::with_initial_layout()?,
            attacker,
            defender,
        ))
    }

    /// Carry on the game the referee is in the middle of
    pub const fn from_referee(referee: Referee<V>, attacker: Attacker, defender: Defender) -> Self {
        Self {
            referee,
            attacker,
            defender,
        }
    }

    /// Query whoever's turn it is until they give a command that can be carried out, and carry
    /// it out
    ///
    /// A move is shown to the other player once it is made. Returns how the game ended, if this
    /// half move ended it. A side left without a legal move loses.
    pub fn play_half_move(&mut self) -> Result<Option<GameResult>> {
        let turn = self.referee.current_turn();
        if self.referee.legal_moves()?.is_empty() {
            return Ok(Some(GameResult::Finished(match turn {
                Color::Dark => GameOutcome::DefenderWon,
                Color::Light => GameOutcome::AttackerWon,
            })));
        }
        loop {
            let board = self.referee.board();
            let command = match turn {
                Color::Dark => self.attacker.next_command(board, turn),
                Color::Light => self.defender.next_command(board, turn),
            };
            let rejection = match command {
                Command::Quit => return Ok(Some(GameResult::Abandoned)),
                Command::Undo => {
                    if self.referee.undo() {
                        return Ok(None);
                    }
                    Rejection::NothingToUndo
                }
                Command::Play(text) => match text.resolve(board) {
                    Err(e) => e.into(),
                    Ok(mv) => match self.referee.validate(&mv)? {
                        Some(illegal) => illegal.into(),
                        None => {
                            self.referee.apply_move(mv)?;
                            let captured = self.referee.resolve_captures()?;
                            let board = self.referee.board();
                            match turn {
                                Color::Dark => self.defender.react_to_move(board, &mv, &captured),
                                Color::Light => self.attacker.react_to_move(board, &mv, &captured),
                            }
                            let outcome = self.referee.outcome();
                            if outcome.is_over() {
                                return Ok(Some(GameResult::Finished(outcome)));
                            }
                            self.referee.change_turn();
                            return Ok(None);
                        }
                    },
                },
            };
            match turn {
                Color::Dark => self.attacker.command_rejected(&rejection),
                Color::Light => self.defender.command_rejected(&rejection),
            }
        }
    }

    /// Play the game until it ends
    pub fn play_game(&mut self) -> Result<GameResult> {
        loop {
            if let Some(result) = self.play_half_move()? {
                return Ok(result);
            }
        }
    }

    /// Get the state of the game right now
    pub const fn referee(&self) -> &Referee<V> {
        &self.referee
    }
}
