use crate::{PieceId, Square};
use derive_more::{Display, Error};
use std::fmt::{self, Formatter};

/// A move offer found by [`Scene::possible_moves`][`crate::Scene::possible_moves`].
///
/// An offer records whether promotion is available; it is turned into a
/// playable [`Move`] with [`PossibleMove::confirm`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[display("{piece}:{target}")]
pub struct PossibleMove {
    pub piece: PieceId,
    pub target: Square,
    pub can_promote: bool,
}

impl PossibleMove {
    /// Commits the promotion decision, yielding a playable [`Move`].
    pub fn confirm(&self, promote: bool) -> Result<Move, IllegalPromotion> {
        if promote && !self.can_promote {
            Err(IllegalPromotion(*self))
        } else {
            Ok(Move {
                piece: self.piece,
                target: self.target,
                promote,
            })
        }
    }
}

/// A move of one piece to a target square.
///
/// Covers both moves across the board and drops out of hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Move {
    pub piece: PieceId,
    pub target: Square,
    pub promote: bool,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.piece, self.target)?;

        if self.promote {
            f.write_str("+")?;
        }

        Ok(())
    }
}

/// The move offer does not admit promotion.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display("promotion is not available for `{_0}`")]
pub struct IllegalPromotion(#[error(not(source))] pub PossibleMove);

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn confirming_without_promotion_always_succeeds(t: Square, can_promote: bool) {
        let offer = PossibleMove {
            piece: PieceId::new(0),
            target: t,
            can_promote,
        };

        assert_eq!(
            offer.confirm(false),
            Ok(Move {
                piece: offer.piece,
                target: t,
                promote: false
            })
        );
    }

    #[proptest]
    fn confirming_promotion_requires_the_offer_to_allow_it(t: Square) {
        let offer = PossibleMove {
            piece: PieceId::new(0),
            target: t,
            can_promote: false,
        };

        assert_eq!(offer.confirm(true), Err(IllegalPromotion(offer)));

        let offer = PossibleMove {
            can_promote: true,
            ..offer
        };

        assert_eq!(
            offer.confirm(true),
            Ok(Move {
                piece: offer.piece,
                target: t,
                promote: true
            })
        );
    }

    #[proptest]
    fn promoting_move_displays_trailing_plus(t: Square) {
        let m = Move {
            piece: PieceId::new(4),
            target: t,
            promote: true,
        };

        assert_eq!(m.to_string(), format!("4:{t}+"));
    }
}
