use crate::Color;
use derive_more::{Display, Error};
use std::{ops::Sub, str::FromStr};

/// A row on the shogi board.
///
/// Ranks run from white's home row at the top, [`Rank::A`], down to black's
/// home row at the bottom, [`Rank::I`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(i8)]
pub enum Rank {
    #[display("a")]
    A,
    #[display("b")]
    B,
    #[display("c")]
    C,
    #[display("d")]
    D,
    #[display("e")]
    E,
    #[display("f")]
    F,
    #[display("g")]
    G,
    #[display("h")]
    H,
    #[display("i")]
    I,
}

impl Rank {
    pub const ALL: [Rank; 9] = [
        Rank::A,
        Rank::B,
        Rank::C,
        Rank::D,
        Rank::E,
        Rank::F,
        Rank::G,
        Rank::H,
        Rank::I,
    ];

    /// Iterates over all ranks from [`Rank::A`] to [`Rank::I`].
    #[inline(always)]
    pub fn iter() -> impl DoubleEndedIterator<Item = Rank> + ExactSizeIterator {
        Self::ALL.into_iter()
    }

    #[inline(always)]
    pub fn get(self) -> i8 {
        self as i8
    }

    /// This rank as seen from the opposite side of the board.
    #[inline(always)]
    pub fn flip(self) -> Rank {
        Self::ALL[(8 - self.get()) as usize]
    }

    /// This rank shifted by `delta` rows, if still on the board.
    #[inline(always)]
    pub fn shift(self, delta: i8) -> Option<Rank> {
        usize::try_from(self.get() as i16 + delta as i16)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Whether this rank lies in `side`'s promotion zone.
    ///
    /// The promotion zone is the three ranks furthest from `side`'s home row.
    #[inline(always)]
    pub fn in_promotion_zone(self, side: Color) -> bool {
        match side {
            Color::Black => self.get() < 3,
            Color::White => self.get() > 5,
        }
    }
}

impl Sub for Rank {
    type Output = i8;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        self.get() - rhs.get()
    }
}

/// The reason why parsing [`Rank`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(
    "failed to parse rank, expected letter in the range `({}..={})`",
    Rank::A,
    Rank::I
)]
pub struct ParseRankError;

impl FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a" => Ok(Rank::A),
            "b" => Ok(Rank::B),
            "c" => Ok(Rank::C),
            "d" => Ok(Rank::D),
            "e" => Ok(Rank::E),
            "f" => Ok(Rank::F),
            "g" => Ok(Rank::G),
            "h" => Ok(Rank::H),
            "i" => Ok(Rank::I),
            _ => Err(ParseRankError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[test]
    fn rank_guarantees_zero_value_optimization() {
        assert_eq!(
            std::mem::size_of::<Option<Rank>>(),
            std::mem::size_of::<Rank>()
        );
    }

    #[proptest]
    fn flipping_rank_returns_complement(r: Rank) {
        assert_eq!(r.flip().get(), 8 - r.get());
        assert_eq!(r.flip().flip(), r);
    }

    #[proptest]
    fn subtracting_ranks_returns_distance(a: Rank, b: Rank) {
        assert_eq!(a - b, a.get() - b.get());
    }

    #[proptest]
    fn shifting_rank_is_reversible(r: Rank, #[strategy(-8i8..=8)] d: i8) {
        if let Some(q) = r.shift(d) {
            assert_eq!(q.shift(-d), Some(r));
        }
    }

    #[proptest]
    fn promotion_zones_are_mirrored(r: Rank, c: Color) {
        assert_eq!(r.in_promotion_zone(c), r.flip().in_promotion_zone(!c));
    }

    #[proptest]
    fn promotion_zone_spans_three_ranks(c: Color) {
        assert_eq!(Rank::iter().filter(|r| r.in_promotion_zone(c)).count(), 3);
    }

    #[proptest]
    fn no_rank_is_in_both_promotion_zones(r: Rank) {
        assert!(!(r.in_promotion_zone(Color::Black) && r.in_promotion_zone(Color::White)));
    }

    #[proptest]
    fn parsing_printed_rank_is_an_identity(r: Rank) {
        assert_eq!(r.to_string().parse(), Ok(r));
    }

    #[proptest]
    fn parsing_rank_fails_if_not_lower_case_letter_between_a_and_i(
        #[filter(!('a'..='i').contains(&#c))] c: char,
    ) {
        assert_eq!(c.to_string().parse::<Rank>(), Err(ParseRankError));
    }

    #[proptest]
    fn parsing_rank_fails_if_length_not_one(#[filter(#s.len() != 1)] s: String) {
        assert_eq!(s.parse::<Rank>(), Err(ParseRankError));
    }
}
