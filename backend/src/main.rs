use std::cell::RefCell;
use std::io;
use std::process::ExitCode;

use backend::{Backend, GameResult};
use board::variants::{ArdRi, Brandubh, Variant, VariantName};
use board::GameOutcome;
use clap::Parser;
use players::Player;
use terminal_ui::TerminalUIPlayer;

#[derive(Parser, Debug)]
#[command(name = "tafl", about = "Play a game of Tafl at the terminal")]
struct Args {
    /// Variant to play: brandubh | ardri
    #[arg(default_value = "brandubh")]
    variant: VariantName,
}

fn play<V: Variant>(player: impl Player + Copy) -> board::Result<GameResult> {
    Backend::<V, _, _>::new(player, player)?.play_game()
}

fn main() -> ExitCode {
    let args = Args::parse();
    println!(
        "Welcome to {}. The attackers move first; type a move like d7d5, `undo` or `quit`.",
        args.variant
    );
    let terminal = RefCell::new(TerminalUIPlayer::new(io::stdin().lock(), io::stdout()));
    let result = match args.variant {
        VariantName::Brandubh => play::<Brandubh>(&terminal),
        VariantName::ArdRi => play::<ArdRi>(&terminal),
    };
    match result {
        Ok(GameResult::Finished(GameOutcome::AttackerWon)) => println!("The attackers win!"),
        Ok(GameResult::Finished(GameOutcome::DefenderWon)) => println!("The king escapes!"),
        Ok(GameResult::Finished(GameOutcome::InProgress)) | Ok(GameResult::Abandoned) => {
            println!("Game abandoned.")
        }
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
