use std::{iter::Copied, slice::Iter};

/// Trait for enums that represent a contiguous sequence.
///
/// Variants must be listed in [`Enum::VARIANTS`] in the order of their
/// representation, starting from zero.
pub trait Enum: Copy + Ord + 'static {
    /// All variants, in order.
    const VARIANTS: &'static [Self];

    /// Casts to integer.
    fn repr(&self) -> u8;

    /// Casts from integer, or returns `None` if out of range.
    #[inline(always)]
    fn try_from_repr(i: u8) -> Option<Self> {
        Self::VARIANTS.get(i as usize).copied()
    }

    /// An iterator over all variants.
    #[inline(always)]
    fn iter() -> Copied<Iter<'static, Self>> {
        Self::VARIANTS.iter().copied()
    }

    /// The variant offset from this one by `delta`, if in range.
    #[inline(always)]
    fn step(&self, delta: i8) -> Option<Self> {
        let i = self.repr() as i16 + delta as i16;
        u8::try_from(i).ok().and_then(Self::try_from_repr)
    }
}
