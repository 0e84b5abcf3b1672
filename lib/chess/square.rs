use crate::chess::{File, ParseFileError, ParseRankError, Rank};
use crate::util::Enum;
use derive_more::{Display, Error, From};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

/// A square on the chess board.
///
/// Squares are ordered by [`Rank`] first and [`File`] second.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
#[rustfmt::skip]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

impl Square {
    /// Constructs [`Square`] from a pair of [`File`] and [`Rank`].
    #[inline(always)]
    pub fn new(f: File, r: Rank) -> Self {
        Square::VARIANTS[(r.repr() * 8 + f.repr()) as usize]
    }

    /// Constructs [`Square`] from a file letter and a one-based rank number.
    pub fn from_coords(file: char, rank: u8) -> Result<Self, ParseSquareError> {
        Ok(Square::new(file.try_into()?, rank.try_into()?))
    }

    /// This square's [`File`].
    #[inline(always)]
    pub fn file(&self) -> File {
        File::VARIANTS[(self.repr() % 8) as usize]
    }

    /// This square's [`Rank`].
    #[inline(always)]
    pub fn rank(&self) -> Rank {
        Rank::VARIANTS[(self.repr() / 8) as usize]
    }

    /// The square displaced by `df` files and `dr` ranks, if still on the board.
    #[inline(always)]
    pub fn offset(&self, df: i8, dr: i8) -> Option<Self> {
        Some(Square::new(self.file().step(df)?, self.rank().step(dr)?))
    }

    /// This square's index in the range `0..64`.
    #[inline(always)]
    pub fn index(&self) -> usize {
        self.repr() as usize
    }
}

impl Enum for Square {
    #[rustfmt::skip]
    const VARIANTS: &'static [Self] = &[
        Square::A1, Square::B1, Square::C1, Square::D1, Square::E1, Square::F1, Square::G1, Square::H1,
        Square::A2, Square::B2, Square::C2, Square::D2, Square::E2, Square::F2, Square::G2, Square::H2,
        Square::A3, Square::B3, Square::C3, Square::D3, Square::E3, Square::F3, Square::G3, Square::H3,
        Square::A4, Square::B4, Square::C4, Square::D4, Square::E4, Square::F4, Square::G4, Square::H4,
        Square::A5, Square::B5, Square::C5, Square::D5, Square::E5, Square::F5, Square::G5, Square::H5,
        Square::A6, Square::B6, Square::C6, Square::D6, Square::E6, Square::F6, Square::G6, Square::H6,
        Square::A7, Square::B7, Square::C7, Square::D7, Square::E7, Square::F7, Square::G7, Square::H7,
        Square::A8, Square::B8, Square::C8, Square::D8, Square::E8, Square::F8, Square::G8, Square::H8,
    ];

    #[inline(always)]
    fn repr(&self) -> u8 {
        *self as _
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.file(), f)?;
        fmt::Display::fmt(&self.rank(), f)?;
        Ok(())
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseSquareError {
    #[display(fmt = "failed to parse square")]
    InvalidFile(ParseFileError),
    #[display(fmt = "failed to parse square")]
    InvalidRank(ParseRankError),
    #[from(ignore)]
    #[display(fmt = "failed to parse square, expected two characters")]
    InvalidLength,
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.char_indices().nth(1) {
            Some((i, _)) if s.chars().count() == 2 => Ok(Square::new(s[..i].parse()?, s[i..].parse()?)),
            _ => Err(ParseSquareError::InvalidLength),
        }
    }
}

impl Serialize for Square {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Square {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn new_constructs_square_from_pair_of_file_and_rank(sq: Square) {
        assert_eq!(Square::new(sq.file(), sq.rank()), sq);
    }

    #[proptest]
    fn squares_are_ordered_by_rank_then_file(a: Square, b: Square) {
        assert_eq!(a.cmp(&b), (a.rank(), a.file()).cmp(&(b.rank(), b.file())));
    }

    #[proptest]
    fn offset_by_zero_is_an_identity(sq: Square) {
        assert_eq!(sq.offset(0, 0), Some(sq));
    }

    #[proptest]
    fn offset_returns_none_if_off_the_board(
        sq: Square,
        #[strategy(-8i8..=8)] df: i8,
        #[strategy(-8i8..=8)] dr: i8,
    ) {
        let f = sq.file().repr() as i8 + df;
        let r = sq.rank().repr() as i8 + dr;
        assert_eq!(
            sq.offset(df, dr).is_some(),
            (0..8).contains(&f) && (0..8).contains(&r)
        );
    }

    #[proptest]
    fn parsing_printed_square_is_an_identity(sq: Square) {
        assert_eq!(sq.to_string().parse(), Ok(sq));
    }

    #[proptest]
    fn parsing_square_is_case_insensitive_and_trims_whitespace(sq: Square) {
        let s = format!("  {} \n", sq.to_string().to_lowercase());
        assert_eq!(s.parse(), Ok(sq));
    }

    #[test]
    fn every_square_prints_in_canonical_upper_case() {
        for sq in Square::iter() {
            let s = sq.to_string();
            assert_eq!(s.len(), 2);
            assert_eq!(s, s.to_uppercase());
        }
    }

    #[test]
    fn parsing_square_fails_for_out_of_range_coordinates() {
        assert_eq!(
            "A9".parse::<Square>(),
            Err(ParseSquareError::InvalidRank(ParseRankError))
        );

        assert_eq!(
            "I1".parse::<Square>(),
            Err(ParseSquareError::InvalidFile(ParseFileError))
        );

        assert_eq!("".parse::<Square>(), Err(ParseSquareError::InvalidLength));
        assert_eq!("A10".parse::<Square>(), Err(ParseSquareError::InvalidLength));
    }

    #[proptest]
    fn parsing_square_fails_if_file_invalid(
        #[filter(!('a'..='h').contains(&#c.to_ascii_lowercase()) && !#c.is_whitespace())] c: char,
        r: Rank,
    ) {
        assert_eq!(
            [c.to_string(), r.to_string()].concat().parse::<Square>(),
            Err(ParseSquareError::InvalidFile(ParseFileError))
        );
    }

    #[proptest]
    fn parsing_square_fails_if_rank_invalid(
        f: File,
        #[filter(!('1'..='8').contains(&#c) && !#c.is_whitespace())] c: char,
    ) {
        assert_eq!(
            [f.to_string(), c.to_string()].concat().parse::<Square>(),
            Err(ParseSquareError::InvalidRank(ParseRankError))
        );
    }

    #[test]
    fn square_can_be_constructed_from_coordinates() {
        assert_eq!(Square::from_coords('e', 4), Ok(Square::E4));
        assert_eq!(
            Square::from_coords('E', 0),
            Err(ParseSquareError::InvalidRank(ParseRankError))
        );

        assert_eq!(
            Square::from_coords('J', 1),
            Err(ParseSquareError::InvalidFile(ParseFileError))
        );
    }

    #[proptest]
    fn square_serializes_to_its_canonical_string(sq: Square) {
        let json = serde_json::to_string(&sq)?;
        assert_eq!(json, format!("\"{}\"", sq));
        assert_eq!(serde_json::from_str::<Square>(&json)?, sq);
    }
}
