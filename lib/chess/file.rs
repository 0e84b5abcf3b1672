use crate::util::Enum;
use derive_more::{Display, Error};
use std::str::FromStr;

/// A column on the chess board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum File {
    #[display(fmt = "A")]
    A,
    #[display(fmt = "B")]
    B,
    #[display(fmt = "C")]
    C,
    #[display(fmt = "D")]
    D,
    #[display(fmt = "E")]
    E,
    #[display(fmt = "F")]
    F,
    #[display(fmt = "G")]
    G,
    #[display(fmt = "H")]
    H,
}

impl Enum for File {
    #[rustfmt::skip]
    const VARIANTS: &'static [Self] = &[
        File::A, File::B, File::C, File::D, File::E, File::F, File::G, File::H,
    ];

    #[inline(always)]
    fn repr(&self) -> u8 {
        *self as _
    }
}

/// The reason why parsing [`File`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(
    fmt = "failed to parse file, expected letter in the range `({}..={})`",
    "File::A",
    "File::H"
)]
pub struct ParseFileError;

impl TryFrom<char> for File {
    type Error = ParseFileError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            c @ 'A'..='H' => File::try_from_repr(c as u8 - b'A').ok_or(ParseFileError),
            _ => Err(ParseFileError),
        }
    }
}

impl FromStr for File {
    type Err = ParseFileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.try_into(),
            _ => Err(ParseFileError),
        }
    }
}
