use anyhow::Error as Anyhow;
use clap::Parser;
use derive_more::{Display, Error, From};
use lib::chess::{ParsePromotionError, ParseSquareError, Promotion, Square};
use lib::game::{Event, GameRecord};
use std::str::FromStr;
use tracing::{info, instrument};

/// A move in coordinate notation, such as `E2-E4` or `E7E8N`.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq)]
#[display(fmt = "{}-{}", whence, whither)]
struct Step {
    whence: Square,
    whither: Square,
    promotion: Option<Promotion>,
}

/// The reason why parsing [`Step`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
enum ParseStepError {
    #[display(fmt = "failed to parse move")]
    InvalidSquare(ParseSquareError),
    #[display(fmt = "failed to parse move")]
    InvalidPromotion(ParsePromotionError),
    #[from(ignore)]
    #[display(fmt = "failed to parse move, expected coordinates such as `E2-E4`")]
    InvalidLength,
}

impl FromStr for Step {
    type Err = ParseStepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s: String = s.chars().filter(|c| !matches!(c, '-' | '=' | 'x')).collect();

        let (whence, whither, promotion) = match s.len() {
            4 if s.is_ascii() => (&s[..2], &s[2..], None),
            5 if s.is_ascii() => (&s[..2], &s[2..4], Some(&s[4..])),
            _ => return Err(ParseStepError::InvalidLength),
        };

        Ok(Step {
            whence: whence.parse()?,
            whither: whither.parse()?,
            promotion: promotion.map(str::parse).transpose()?,
        })
    }
}

/// Plays moves on a game read from the standard input and prints its updated record.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// The moves to play in coordinate notation.
    moves: Vec<Step>,
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut game = super::load()?;
        game.add_observer(|e: &Event| info!(event = %e));

        for step in self.moves {
            game.play(step.whence, step.whither, step.promotion)?;
        }

        println!("{}", GameRecord::from(&game));
        Ok(())
    }
}
