use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::Color;
use lib::game::{Game, GameRecord, Options, Player};
use tracing::{info, instrument};

/// Starts a new game and prints its record.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct New {
    /// The game identifier.
    #[clap(short, long, default_value_t = 1)]
    id: u64,

    /// The game configuration.
    #[clap(short, long, default_value_t)]
    options: Options,

    /// The player with the white pieces.
    #[clap(short, long, default_value = "White")]
    white: String,

    /// The player with the black pieces.
    #[clap(short, long, default_value = "computer")]
    black: String,
}

impl Default for New {
    fn default() -> Self {
        New {
            id: 1,
            options: Options::default(),
            white: "White".into(),
            black: "computer".into(),
        }
    }
}

impl New {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut game = Game::with_options(self.id, self.options);
        game.set_players([
            Player::new(self.white, Color::White),
            Player::new(self.black, Color::Black),
        ])?;

        game.start(self.options.perspective)?;
        info!(id = game.id(), board = %game.board());
        println!("{}", GameRecord::from(&game));
        Ok(())
    }
}
