use crate::{Color, File, ParseFileError, ParseRankError, Rank};
use derive_more::{Display, Error, From};
use std::str::FromStr;

/// A square on the shogi board, identified by file and rank.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display("{file}{rank}")]
pub struct Square {
    pub file: File,
    pub rank: Rank,
}

impl Square {
    #[inline(always)]
    pub fn new(file: File, rank: Rank) -> Self {
        Square { file, rank }
    }

    /// Iterates over all 81 squares, rank by rank from the top.
    #[inline(always)]
    pub fn iter() -> impl Iterator<Item = Square> {
        Rank::iter().flat_map(|rank| File::iter().map(move |file| Square { file, rank }))
    }

    /// This square displaced by `(df, dr)`, if still on the board.
    #[inline(always)]
    pub fn shift(self, df: i8, dr: i8) -> Option<Square> {
        Some(Square {
            file: self.file.shift(df)?,
            rank: self.rank.shift(dr)?,
        })
    }

    /// Whether this square lies in `side`'s promotion zone.
    #[inline(always)]
    pub fn in_promotion_zone(self, side: Color) -> bool {
        self.rank.in_promotion_zone(side)
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseSquareError {
    #[display("failed to parse square, {_0}")]
    InvalidFile(ParseFileError),
    #[display("failed to parse square, {_0}")]
    InvalidRank(ParseRankError),
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let split = s.char_indices().nth(1).map_or(s.len(), |(i, _)| i);
        let (file, rank) = s.split_at(split);
        Ok(Square {
            file: file.parse()?,
            rank: rank.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn iter_visits_all_squares_once(s: Square) {
        assert_eq!(Square::iter().count(), 81);
        assert_eq!(Square::iter().filter(|&q| q == s).count(), 1);
    }

    #[proptest]
    fn shifting_square_by_zero_is_an_identity(s: Square) {
        assert_eq!(s.shift(0, 0), Some(s));
    }

    #[proptest]
    fn shifting_square_shifts_file_and_rank(
        s: Square,
        #[strategy(-8i8..=8)] df: i8,
        #[strategy(-8i8..=8)] dr: i8,
    ) {
        assert_eq!(
            s.shift(df, dr),
            s.file
                .shift(df)
                .zip(s.rank.shift(dr))
                .map(|(file, rank)| Square { file, rank })
        );
    }

    #[proptest]
    fn square_promotion_zone_follows_its_rank(s: Square, c: Color) {
        assert_eq!(s.in_promotion_zone(c), s.rank.in_promotion_zone(c));
    }

    #[proptest]
    fn parsing_printed_square_is_an_identity(s: Square) {
        assert_eq!(s.to_string().parse(), Ok(s));
    }

    #[proptest]
    fn parsing_square_fails_if_file_invalid(
        #[filter(!('1'..='9').contains(&#c))] c: char,
        r: Rank,
    ) {
        assert_eq!(
            format!("{c}{r}").parse::<Square>(),
            Err(ParseFileError.into())
        );
    }

    #[proptest]
    fn parsing_square_fails_if_rank_invalid(f: File, #[filter(!('a'..='i').contains(&#c))] c: char) {
        assert_eq!(
            format!("{f}{c}").parse::<Square>(),
            Err(ParseRankError.into())
        );
    }

    #[proptest]
    fn parsing_square_fails_if_length_not_two(#[filter(#s.chars().count() != 2)] s: String) {
        assert!(s.parse::<Square>().is_err());
    }
}
