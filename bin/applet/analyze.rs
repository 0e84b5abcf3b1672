use anyhow::Error as Anyhow;
use clap::Parser;
use tracing::{info, instrument};

/// Analyzes a game read from the standard input.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Analyze {}

impl Analyze {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let game = super::load()?;
        let board = game.board();

        info!(id = game.id(), %board, moves = game.moves().len());

        for p in game.players() {
            println!("{}: {} ({} points)", p.color(), p.name(), p.points());
        }

        match (game.outcome(), game.turn()) {
            (Some(o), _) => println!("outcome: {}", o),
            (None, None) => {}
            (None, Some(turn)) => {
                println!("turn: {}", turn);
                println!("check: {}", board.is_king_in_check(turn));

                for (sq, p) in board.pieces(turn) {
                    let moves = board.legal_moves(sq, turn)?;
                    let moves: Vec<_> = moves.iter().map(|m| m.to_string()).collect();
                    println!("{}@{}: {}", p, sq, moves.join(" "));
                }
            }
        }

        Ok(())
    }
}
