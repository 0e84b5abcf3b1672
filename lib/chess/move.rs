use crate::chess::{Color, Piece, Square};
use std::fmt;

/// A move as recorded in the history of a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Move {
    color: Color,
    whence: Square,
    whither: Square,
    captured: Option<Piece>,
}

impl Move {
    /// Constructs a [`Move`] that captured nothing.
    #[inline(always)]
    pub fn new(color: Color, whence: Square, whither: Square) -> Self {
        Move {
            color,
            whence,
            whither,
            captured: None,
        }
    }

    /// This move with the piece it captured attached.
    #[inline(always)]
    pub fn with_capture(self, captured: Option<Piece>) -> Self {
        Move { captured, ..self }
    }

    /// The [`Color`] of the side that moved.
    #[inline(always)]
    pub fn color(&self) -> Color {
        self.color
    }

    /// The source [`Square`].
    #[inline(always)]
    pub fn whence(&self) -> Square {
        self.whence
    }

    /// The destination [`Square`].
    #[inline(always)]
    pub fn whither(&self) -> Square {
        self.whither
    }

    /// The [`Piece`] captured by this move, if any.
    #[inline(always)]
    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }

    /// Whether both moves were played by the same side between the same squares.
    #[inline(always)]
    pub fn repeats(&self, other: &Move) -> bool {
        self.color == other.color && self.whence == other.whence && self.whither == other.whither
    }

    /// Whether `other` goes back exactly the way this move came.
    #[inline(always)]
    pub fn reverses(&self, other: &Move) -> bool {
        self.whence == other.whither && self.whither == other.whence
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.whence, self.whither)?;

        if let Some(p) = self.captured {
            write!(f, " (captured {})", p)?;
        }

        Ok(())
    }
}
