//! A player typing commands into a terminal

use std::io::{self, BufRead, Write};

use board::{Board, Color, Coordinate, Move, MoveText};
use players::{Command, Player, Rejection};

/// An input for a human typing in the terminal
///
/// Each turn the board is drawn and one line is read. `quit` or `exit` abandons the game, `undo`
/// takes back the last move, and anything else is read as a move like `d7d5`. Running out of input
/// counts as quitting.
pub struct TerminalUIPlayer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalUIPlayer<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the streams this player was reading and writing
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Read one line, or `None` once the input is exhausted
    fn read_line(&mut self) -> Option<String> {
        let mut buffer = String::new();
        match self.input.read_line(&mut buffer) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(buffer),
        }
    }

    fn prompt(&mut self, board: &Board, turn: Color) -> io::Result<()> {
        writeln!(self.output, "\n{board}")?;
        write!(self.output, "{} to move ({}): ", turn, side(turn))?;
        self.output.flush()
    }
}

/// The name of the pieces the given color plays
const fn side(color: Color) -> &'static str {
    match color {
        Color::Dark => "attackers",
        Color::Light => "defenders",
    }
}

fn square(board: &Board, coordinate: Coordinate) -> String {
    coordinate
        .to_algebraic(board.size())
        .unwrap_or_else(|| coordinate.to_string())
}

impl<R: BufRead, W: Write> Player for TerminalUIPlayer<R, W> {
    fn next_command(&mut self, board: &Board, turn: Color) -> Command {
        loop {
            let _ = self.prompt(board, turn);
            let Some(line) = self.read_line() else {
                return Command::Quit;
            };
            let line = line.trim();
            match line.to_ascii_lowercase().as_str() {
                "" => continue,
                "quit" | "exit" => return Command::Quit,
                "undo" => return Command::Undo,
                _ => {}
            }
            match line.parse::<MoveText>() {
                Ok(text) => return Command::Play(text),
                Err(e) => {
                    let _ = writeln!(self.output, "{e}");
                }
            }
        }
    }

    fn command_rejected(&mut self, rejection: &Rejection) {
        let _ = writeln!(self.output, "{rejection}");
    }

    fn react_to_move(&mut self, board: &Board, mv: &Move, captured: &[Coordinate]) {
        let mover = board
            .piece_at(mv.target())
            .ok()
            .flatten()
            .map_or("someone", |piece| side(piece.color()));
        let _ = write!(
            self.output,
            "The {mover} moved {}{}",
            square(board, mv.source()),
            square(board, mv.target())
        );
        if !captured.is_empty() {
            let squares: Vec<String> = captured.iter().map(|&c| square(board, c)).collect();
            let _ = write!(self.output, ", capturing {}", squares.join(" "));
        }
        let _ = writeln!(self.output);
    }
}
