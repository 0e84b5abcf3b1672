use anyhow::{Context, Error as Anyhow};
use clap::Subcommand;
use derive_more::From;
use lib::game::{Game, GameRecord};
use std::io::{read_to_string, stdin};

mod analyze;
mod new;
mod play;

#[derive(From, Subcommand)]
pub enum Applet {
    Analyze(analyze::Analyze),
    New(new::New),
    Play(play::Play),
}

impl Default for Applet {
    fn default() -> Self {
        new::New::default().into()
    }
}

impl Applet {
    pub fn execute(self) -> Result<(), Anyhow> {
        match self {
            Applet::Analyze(a) => Ok(a.execute()?),
            Applet::New(a) => Ok(a.execute()?),
            Applet::Play(a) => Ok(a.execute()?),
        }
    }
}

/// Reads a [`GameRecord`] from the standard input and resumes the game it describes.
fn load() -> Result<Game, Anyhow> {
    let json = read_to_string(stdin()).context("failed to read the standard input")?;
    let record: GameRecord = json.parse()?;
    let mut game = Game::try_from(record)?;
    game.resume(game.perspective())?;
    Ok(game)
}
