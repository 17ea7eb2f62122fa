use arrayvec::ArrayVec;
use derive_more::{Display, Error};
use std::str::FromStr;

const AROUND: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

const ORTHOGONALS: [(i8, i8); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];
const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// The kind of a shogi [`Piece`][`crate::Piece`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Role {
    #[display("k")]
    King,
    #[display("r")]
    Rook,
    #[display("+r")]
    Dragon,
    #[display("b")]
    Bishop,
    #[display("+b")]
    Horse,
    #[display("g")]
    Gold,
    #[display("s")]
    Silver,
    #[display("+s")]
    PromotedSilver,
    #[display("n")]
    Knight,
    #[display("+n")]
    PromotedKnight,
    #[display("l")]
    Lance,
    #[display("+l")]
    PromotedLance,
    #[display("p")]
    Pawn,
    #[display("+p")]
    PromotedPawn,
}

impl Role {
    /// The role this piece assumes upon promotion, if it can promote.
    #[inline(always)]
    pub fn promoted(self) -> Option<Role> {
        match self {
            Role::Rook => Some(Role::Dragon),
            Role::Bishop => Some(Role::Horse),
            Role::Silver => Some(Role::PromotedSilver),
            Role::Knight => Some(Role::PromotedKnight),
            Role::Lance => Some(Role::PromotedLance),
            Role::Pawn => Some(Role::PromotedPawn),
            _ => None,
        }
    }

    /// The base role this piece reverts to when captured, if promoted.
    #[inline(always)]
    pub fn demoted(self) -> Option<Role> {
        match self {
            Role::Dragon => Some(Role::Rook),
            Role::Horse => Some(Role::Bishop),
            Role::PromotedSilver => Some(Role::Silver),
            Role::PromotedKnight => Some(Role::Knight),
            Role::PromotedLance => Some(Role::Lance),
            Role::PromotedPawn => Some(Role::Pawn),
            _ => None,
        }
    }

    /// The single-square displacements available to this role.
    ///
    /// `forward` is the rank delta towards the opponent's home row, see
    /// [`Color::forward`][`crate::Color::forward`].
    pub(crate) fn steps(self, forward: i8) -> ArrayVec<(i8, i8), 8> {
        let f = forward;
        match self {
            Role::King | Role::Dragon | Role::Horse => AROUND.into_iter().collect(),
            Role::Gold
            | Role::PromotedSilver
            | Role::PromotedKnight
            | Role::PromotedLance
            | Role::PromotedPawn => [(0, f), (-1, f), (1, f), (-1, 0), (1, 0), (0, -f)]
                .into_iter()
                .collect(),
            Role::Silver => [(0, f), (-1, f), (1, f), (-1, -f), (1, -f)]
                .into_iter()
                .collect(),
            Role::Knight => [(-1, 2 * f), (1, 2 * f)].into_iter().collect(),
            Role::Pawn => [(0, f)].into_iter().collect(),
            Role::Rook | Role::Bishop | Role::Lance => ArrayVec::new(),
        }
    }

    /// The sliding directions available to this role.
    pub(crate) fn rays(self, forward: i8) -> ArrayVec<(i8, i8), 4> {
        match self {
            Role::Rook | Role::Dragon => ORTHOGONALS.into_iter().collect(),
            Role::Bishop | Role::Horse => DIAGONALS.into_iter().collect(),
            Role::Lance => [(0, forward)].into_iter().collect(),
            _ => ArrayVec::new(),
        }
    }
}

/// The reason why parsing [`Role`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display("failed to parse role")]
pub struct ParseRoleError;

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "k" => Ok(Role::King),
            "r" => Ok(Role::Rook),
            "+r" => Ok(Role::Dragon),
            "b" => Ok(Role::Bishop),
            "+b" => Ok(Role::Horse),
            "g" => Ok(Role::Gold),
            "s" => Ok(Role::Silver),
            "+s" => Ok(Role::PromotedSilver),
            "n" => Ok(Role::Knight),
            "+n" => Ok(Role::PromotedKnight),
            "l" => Ok(Role::Lance),
            "+l" => Ok(Role::PromotedLance),
            "p" => Ok(Role::Pawn),
            "+p" => Ok(Role::PromotedPawn),
            _ => Err(ParseRoleError),
        }
    }
}
