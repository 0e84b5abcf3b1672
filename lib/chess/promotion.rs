use crate::chess::Role;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A promotion specifier.
#[derive(
    Debug, Display, Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize,
)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(rename_all = "lowercase")]
pub enum Promotion {
    #[display(fmt = "N")]
    Knight,
    #[display(fmt = "B")]
    Bishop,
    #[display(fmt = "R")]
    Rook,
    #[default]
    #[display(fmt = "Q")]
    Queen,
}

/// The reason why a [`Role`] cannot be promoted to.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "cannot promote to `{}`", _0)]
pub struct InvalidPromotion(#[error(not(source))] pub Role);

impl From<Promotion> for Role {
    fn from(p: Promotion) -> Self {
        match p {
            Promotion::Knight => Role::Knight,
            Promotion::Bishop => Role::Bishop,
            Promotion::Rook => Role::Rook,
            Promotion::Queen => Role::Queen,
        }
    }
}

impl TryFrom<Role> for Promotion {
    type Error = InvalidPromotion;

    fn try_from(r: Role) -> Result<Self, Self::Error> {
        match r {
            Role::Knight => Ok(Promotion::Knight),
            Role::Bishop => Ok(Promotion::Bishop),
            Role::Rook => Ok(Promotion::Rook),
            Role::Queen => Ok(Promotion::Queen),
            Role::Pawn | Role::King => Err(InvalidPromotion(r)),
        }
    }
}

/// The reason why parsing [`Promotion`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse promotion, expected one of `Q`, `R`, `B` or `N`")]
pub struct ParsePromotionError;

impl FromStr for Promotion {
    type Err = ParsePromotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let role: Role = s.parse().map_err(|_| ParsePromotionError)?;
        role.try_into().map_err(|_| ParsePromotionError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn parsing_printed_promotion_is_an_identity(p: Promotion) {
        assert_eq!(p.to_string().parse(), Ok(p));
        assert_eq!(p.to_string().to_lowercase().parse(), Ok(p));
    }

    #[proptest]
    fn promotion_has_an_equivalent_role(p: Promotion) {
        assert_eq!(Promotion::try_from(Role::from(p)), Ok(p));
    }

    #[test]
    fn pawns_and_kings_cannot_be_promoted_to() {
        assert_eq!(Promotion::try_from(Role::Pawn), Err(InvalidPromotion(Role::Pawn)));
        assert_eq!(Promotion::try_from(Role::King), Err(InvalidPromotion(Role::King)));
        assert_eq!("K".parse::<Promotion>(), Err(ParsePromotionError));
        assert_eq!("pawn".parse::<Promotion>(), Err(ParsePromotionError));
    }

    #[test]
    fn promotion_defaults_to_queen() {
        assert_eq!(Promotion::default(), Promotion::Queen);
    }
}
