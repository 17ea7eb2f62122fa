use crate::{Color, Square};
use derive_more::{Display, From};

/// Where a shogi [`Piece`][`crate::Piece`] currently sits.
///
/// A piece is either standing on a board square or waiting in one of
/// the players' hands after being captured.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, From)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Placement {
    #[display("{_0}")]
    On(Square),
    #[display("{_0} hand")]
    #[from(ignore)]
    Hand(Color),
}

impl Placement {
    /// The board square this placement refers to, if any.
    #[inline(always)]
    pub fn square(self) -> Option<Square> {
        match self {
            Placement::On(sq) => Some(sq),
            Placement::Hand(_) => None,
        }
    }

    #[inline(always)]
    pub fn is_on_board(self) -> bool {
        matches!(self, Placement::On(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn square_is_some_only_on_the_board(p: Placement) {
        assert_eq!(p.square().is_some(), p.is_on_board());
    }

    #[proptest]
    fn placement_converts_from_square(s: Square) {
        assert_eq!(Placement::from(s), Placement::On(s));
    }
}
