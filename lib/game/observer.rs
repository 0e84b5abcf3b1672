use crate::chess::{Color, Move, Piece};
use derive_more::Display;

/// Something noteworthy that happened during a [`Game`][`crate::game::Game`].
#[derive(Debug, Display, Clone, Eq, PartialEq, Hash)]
pub enum Event {
    #[display(fmt = "{} played {}", "_0.color()", _0)]
    MoveMade(Move),

    #[display(fmt = "captured {}", _0)]
    PieceCaptured(Piece),

    #[display(fmt = "{} to move", _0)]
    PlayerSwitched(Color),

    #[display(fmt = "{} is in check", _0)]
    Check(Color),

    #[display(fmt = "{} wins by checkmate", _0)]
    Checkmate(Color),

    #[display(fmt = "game ended: {}", _0)]
    GameEnded(String),
}

/// Trait for types that want to be told about [`Event`]s.
///
/// Observers are notified synchronously, in the order they were added.
#[cfg_attr(test, mockall::automock)]
pub trait Observer {
    /// Handles an [`Event`].
    fn notify(&mut self, event: &Event);
}

impl<F: FnMut(&Event)> Observer for F {
    fn notify(&mut self, event: &Event) {
        self(event)
    }
}

/// A handle to an [`Observer`] added to a [`Game`][`crate::game::Game`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[display(fmt = "#{}", _0)]
pub struct ObserverId(pub(super) u64);
