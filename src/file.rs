use derive_more::{Display, Error};
use std::{ops::Sub, str::FromStr};

/// A column on the shogi board.
///
/// Files are numbered from the right edge of the board as seen by black,
/// following the customary shogi notation.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(i8)]
pub enum File {
    #[display("1")]
    One,
    #[display("2")]
    Two,
    #[display("3")]
    Three,
    #[display("4")]
    Four,
    #[display("5")]
    Five,
    #[display("6")]
    Six,
    #[display("7")]
    Seven,
    #[display("8")]
    Eight,
    #[display("9")]
    Nine,
}

impl File {
    pub const ALL: [File; 9] = [
        File::One,
        File::Two,
        File::Three,
        File::Four,
        File::Five,
        File::Six,
        File::Seven,
        File::Eight,
        File::Nine,
    ];

    /// Iterates over all files from [`File::One`] to [`File::Nine`].
    #[inline(always)]
    pub fn iter() -> impl DoubleEndedIterator<Item = File> + ExactSizeIterator {
        Self::ALL.into_iter()
    }

    #[inline(always)]
    pub fn get(self) -> i8 {
        self as i8
    }

    /// This file shifted sideways by `delta` columns, if still on the board.
    #[inline(always)]
    pub fn shift(self, delta: i8) -> Option<File> {
        usize::try_from(self.get() as i16 + delta as i16)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }
}

impl Sub for File {
    type Output = i8;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        self.get() - rhs.get()
    }
}

/// The reason why parsing [`File`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(
    "failed to parse file, expected digit in the range `({}..={})`",
    File::One,
    File::Nine
)]
pub struct ParseFileError;

impl FromStr for File {
    type Err = ParseFileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(File::One),
            "2" => Ok(File::Two),
            "3" => Ok(File::Three),
            "4" => Ok(File::Four),
            "5" => Ok(File::Five),
            "6" => Ok(File::Six),
            "7" => Ok(File::Seven),
            "8" => Ok(File::Eight),
            "9" => Ok(File::Nine),
            _ => Err(ParseFileError),
        }
    }
}
