use crate::chess::{Color, IllegalMove, Outcome};
use derive_more::{Display, Error, From};

/// The reason why a [`Game`][`crate::game::Game`] rejected an action.
#[derive(Debug, Display, Clone, Eq, PartialEq, Hash, Error, From)]
pub enum InvalidAction {
    #[display(fmt = "the game has not started")]
    #[from(ignore)]
    NotStarted,

    #[display(fmt = "the game is in progress")]
    #[from(ignore)]
    InProgress,

    #[display(fmt = "the game has ended by {}", _0)]
    #[from(ignore)]
    GameHasEnded(#[error(not(source))] Outcome),

    #[display(fmt = "the game requires two players")]
    #[from(ignore)]
    MissingPlayers,

    #[display(fmt = "both players have the {} pieces", _0)]
    #[from(ignore)]
    DuplicateColor(#[error(not(source))] Color),

    #[display(fmt = "illegal move")]
    IllegalMove(IllegalMove),
}
