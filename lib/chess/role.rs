use crate::util::Enum;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Formatter, Write};
use std::str::FromStr;

/// The type of a chess [`Piece`][`crate::chess::Piece`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Role {
    #[serde(rename = "P", alias = "PAWN")]
    Pawn,
    #[serde(rename = "N", alias = "KNIGHT")]
    Knight,
    #[serde(rename = "B", alias = "BISHOP")]
    Bishop,
    #[serde(rename = "R", alias = "ROOK")]
    Rook,
    #[serde(rename = "Q", alias = "QUEEN")]
    Queen,
    #[serde(rename = "K", alias = "KING")]
    King,
}

impl Role {
    /// The one-character type tag.
    #[inline(always)]
    pub fn tag(&self) -> char {
        match self {
            Role::Pawn => 'P',
            Role::Knight => 'N',
            Role::Bishop => 'B',
            Role::Rook => 'R',
            Role::Queen => 'Q',
            Role::King => 'K',
        }
    }

    /// The number of points awarded for capturing a piece of this role.
    #[inline(always)]
    pub fn value(&self) -> u32 {
        match self {
            Role::Pawn => 6,
            Role::Knight => 30,
            Role::Bishop => 30,
            Role::Rook => 50,
            Role::Queen => 90,
            Role::King => 0,
        }
    }
}

impl Enum for Role {
    const VARIANTS: &'static [Self] = &[
        Role::Pawn,
        Role::Knight,
        Role::Bishop,
        Role::Rook,
        Role::Queen,
        Role::King,
    ];

    #[inline(always)]
    fn repr(&self) -> u8 {
        *self as _
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char(self.tag())
    }
}

/// The reason why parsing [`Role`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse piece type")]
pub struct ParseRoleError;

impl FromStr for Role {
    type Err = ParseRoleError;

    /// Parses either the type tag or the full name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Role::iter()
            .find(|r| {
                let name = format!("{:?}", r);
                s.eq_ignore_ascii_case(&name) || s.eq_ignore_ascii_case(&r.to_string())
            })
            .ok_or(ParseRoleError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn parsing_printed_role_is_an_identity(r: Role) {
        assert_eq!(r.to_string().parse(), Ok(r));
    }

    #[proptest]
    fn parsing_role_accepts_full_name_in_any_case(r: Role) {
        let name = format!("{:?}", r);
        assert_eq!(name.to_uppercase().parse(), Ok(r));
        assert_eq!(name.to_lowercase().parse(), Ok(r));
    }

    #[proptest]
    fn parsing_role_fails_if_not_one_of_pnbrqk(
        #[filter(!"pnbrqk".contains(#c.to_ascii_lowercase()) && !#c.is_whitespace())] c: char,
    ) {
        assert_eq!(c.to_string().parse::<Role>(), Err(ParseRoleError));
    }

    #[test]
    fn capture_values_follow_the_scoring_table() {
        assert_eq!(Role::Queen.value(), 90);
        assert_eq!(Role::Rook.value(), 50);
        assert_eq!(Role::Bishop.value(), 30);
        assert_eq!(Role::Knight.value(), 30);
        assert_eq!(Role::Pawn.value(), 6);
        assert_eq!(Role::King.value(), 0);
    }

    #[proptest]
    fn role_serializes_to_its_type_tag(r: Role) {
        assert_eq!(serde_json::to_string(&r)?, format!("\"{}\"", r.tag()));
    }

    #[test]
    fn role_deserializes_from_full_name() {
        assert_eq!(serde_json::from_str::<Role>("\"KNIGHT\"").ok(), Some(Role::Knight));
    }
}
