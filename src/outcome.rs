use crate::Color;
use derive_more::Display;

/// One of the possible ways a shogi game can end.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Outcome {
    #[display("checkmate by the {_0} player")]
    Checkmate(Color),
    #[display("resignation by the {_0} player")]
    Resignation(Color),
    #[display("loss on time by the {_0} player")]
    LossOnTime(Color),
    #[display("two unpromoted pawns on one file by the {_0} player")]
    TwoPawns(Color),
    #[display("checkmate by pawn drop by the {_0} player")]
    DropPawnMate(Color),
    #[display("king left in check by the {_0} player")]
    LeftInCheck(Color),
    #[display("impasse")]
    Impasse,
    #[display("repetition")]
    Repetition,
}

impl Outcome {
    /// The winning side, if the outcome is decisive.
    #[inline(always)]
    pub fn winner(&self) -> Option<Color> {
        match *self {
            Outcome::Checkmate(c) => Some(c),
            Outcome::Resignation(c)
            | Outcome::LossOnTime(c)
            | Outcome::TwoPawns(c)
            | Outcome::DropPawnMate(c)
            | Outcome::LeftInCheck(c) => Some(!c),
            Outcome::Impasse | Outcome::Repetition => None,
        }
    }

    /// Whether the outcome declares a winner.
    #[inline(always)]
    pub fn is_decisive(&self) -> bool {
        self.winner().is_some()
    }

    /// Whether the game ended in a draw.
    #[inline(always)]
    pub fn is_draw(&self) -> bool {
        self.winner().is_none()
    }
}
