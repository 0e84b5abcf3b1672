use crate::{chess::Color, util::Enum};
use derive_more::{Display, Error};
use std::str::FromStr;

/// A row on the chess board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Rank {
    #[display(fmt = "1")]
    First,
    #[display(fmt = "2")]
    Second,
    #[display(fmt = "3")]
    Third,
    #[display(fmt = "4")]
    Fourth,
    #[display(fmt = "5")]
    Fifth,
    #[display(fmt = "6")]
    Sixth,
    #[display(fmt = "7")]
    Seventh,
    #[display(fmt = "8")]
    Eighth,
}

impl Rank {
    /// The rank pawns of a [`Color`] start the game on.
    #[inline(always)]
    pub fn pawns(c: Color) -> Self {
        match c {
            Color::White => Rank::Second,
            Color::Black => Rank::Seventh,
        }
    }

    /// The rank pawns of a [`Color`] promote on.
    #[inline(always)]
    pub fn promotion(c: Color) -> Self {
        match c {
            Color::White => Rank::Eighth,
            Color::Black => Rank::First,
        }
    }

    /// The rank the other pieces of a [`Color`] start the game on.
    #[inline(always)]
    pub fn back(c: Color) -> Self {
        Rank::promotion(!c)
    }
}

impl Enum for Rank {
    #[rustfmt::skip]
    const VARIANTS: &'static [Self] = &[
        Rank::First, Rank::Second, Rank::Third, Rank::Fourth,
        Rank::Fifth, Rank::Sixth, Rank::Seventh, Rank::Eighth,
    ];

    #[inline(always)]
    fn repr(&self) -> u8 {
        *self as _
    }
}

/// The reason why parsing [`Rank`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(
    fmt = "failed to parse rank, expected digit in the range `({}..={})`",
    "Rank::First",
    "Rank::Eighth"
)]
pub struct ParseRankError;

impl TryFrom<u8> for Rank {
    type Error = ParseRankError;

    /// Converts a one-based rank number.
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        n.checked_sub(1)
            .and_then(Rank::try_from_repr)
            .ok_or(ParseRankError)
    }
}

impl FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Rank::First),
            "2" => Ok(Rank::Second),
            "3" => Ok(Rank::Third),
            "4" => Ok(Rank::Fourth),
            "5" => Ok(Rank::Fifth),
            "6" => Ok(Rank::Sixth),
            "7" => Ok(Rank::Seventh),
            "8" => Ok(Rank::Eighth),
            _ => Err(ParseRankError),
        }
    }
}
