use derive_more::Display;
use std::ops::Not;

/// The side controlling a shogi [`Piece`][`crate::Piece`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Color {
    #[display("black")]
    Black,
    #[display("white")]
    White,
}

impl Color {
    /// The direction this side's pawns march, as a rank delta.
    ///
    /// Black starts at the bottom of the board and advances towards
    /// [`Rank::A`][`crate::Rank::A`], white advances the opposite way.
    #[inline(always)]
    pub fn forward(self) -> i8 {
        match self {
            Color::Black => -1,
            Color::White => 1,
        }
    }
}

impl Not for Color {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}
