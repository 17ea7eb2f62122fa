use crate::{Color, Placement, Role, Square};
use arrayvec::ArrayVec;
use derive_more::{Display, Error, From};
use std::fmt::{self, Formatter, Write};

/// The identity of a shogi [`Piece`] within a [`Scene`][`crate::Scene`].
///
/// Identities are stable across moves, so a piece can be tracked through
/// promotions and captures.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[display("{_0}")]
pub struct PieceId(u16);

impl PieceId {
    #[inline(always)]
    pub(crate) fn new(index: usize) -> Self {
        debug_assert!(index <= u16::MAX as usize);
        PieceId(index as u16)
    }

    #[inline(always)]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// A shogi piece.
///
/// The `owner` is the side the piece started the game with and never
/// changes, while the `controller` is the side currently entitled to move
/// it and flips whenever the piece is captured.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Piece {
    id: PieceId,
    role: Role,
    owner: Color,
    controller: Color,
    placement: Placement,
}

impl Piece {
    #[inline(always)]
    pub(crate) fn new(
        id: PieceId,
        role: Role,
        owner: Color,
        controller: Color,
        placement: Placement,
    ) -> Self {
        Piece {
            id,
            role,
            owner,
            controller,
            placement,
        }
    }

    #[inline(always)]
    pub fn id(&self) -> PieceId {
        self.id
    }

    #[inline(always)]
    pub fn role(&self) -> Role {
        self.role
    }

    #[inline(always)]
    pub fn owner(&self) -> Color {
        self.owner
    }

    #[inline(always)]
    pub fn controller(&self) -> Color {
        self.controller
    }

    #[inline(always)]
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// The squares this piece could move to on an otherwise empty board.
    pub fn reachable_squares(&self) -> Result<Vec<Square>, OffBoard> {
        match self.placement.square() {
            None => Err(OffBoard(self.id)),
            Some(_) => Ok(self.routes().into_iter().map(|(sq, _)| sq).collect()),
        }
    }

    /// The squares strictly between this piece and `target`, in order.
    ///
    /// The route is empty for a single step and never includes the origin
    /// or the target themselves.
    pub fn route_to(&self, target: Square) -> Result<ArrayVec<Square, 7>, NoRoute> {
        if !self.placement.is_on_board() {
            return Err(OffBoard(self.id).into());
        }

        match self.routes().into_iter().find(|&(sq, _)| sq == target) {
            Some((_, route)) => Ok(route),
            None => Err(NoRoute::Unreachable(self.id, target)),
        }
    }

    /// Whether a move to `target` may come with a promotion.
    ///
    /// Promotion is available if this role has a promoted form and either
    /// the origin or the target lies in the controller's promotion zone.
    pub fn can_promote(&self, target: Square) -> bool {
        match self.placement.square() {
            None => false,
            Some(origin) => {
                self.role.promoted().is_some()
                    && (origin.in_promotion_zone(self.controller)
                        || target.in_promotion_zone(self.controller))
            }
        }
    }

    /// Every reachable square paired with the route leading up to it.
    pub(crate) fn routes(&self) -> Vec<(Square, ArrayVec<Square, 7>)> {
        let origin = match self.placement.square() {
            Some(sq) => sq,
            None => return Vec::new(),
        };

        let forward = self.controller.forward();
        let mut routes = Vec::with_capacity(32);

        for (df, dr) in self.role.steps(forward) {
            if let Some(sq) = origin.shift(df, dr) {
                routes.push((sq, ArrayVec::new()));
            }
        }

        for (df, dr) in self.role.rays(forward) {
            let mut route = ArrayVec::new();
            let mut here = origin;
            while let Some(next) = here.shift(df, dr) {
                if here != origin {
                    route.push(here);
                }

                if routes.iter().all(|&(sq, _)| sq != next) {
                    routes.push((next, route.clone()));
                }

                here = next;
            }
        }

        routes
    }

    /// This piece after moving to `target`, promoting if requested.
    pub(crate) fn moved_to(&self, target: Square, promote: bool) -> Piece {
        Piece {
            role: if promote {
                self.role.promoted().unwrap_or(self.role)
            } else {
                self.role
            },
            placement: Placement::On(target),
            ..*self
        }
    }

    /// This piece after being captured by `captor`.
    ///
    /// The piece reverts to its base role and lands in the captor's hand,
    /// but keeps its identity and original owner.
    pub(crate) fn captured_by(&self, captor: Color) -> Piece {
        Piece {
            role: self.role.demoted().unwrap_or(self.role),
            controller: captor,
            placement: Placement::Hand(captor),
            ..*self
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for ch in self.role.to_string().chars() {
            match self.controller {
                Color::Black => f.write_char(ch.to_ascii_uppercase())?,
                Color::White => f.write_char(ch)?,
            }
        }

        Ok(())
    }
}

/// The piece is in hand and has no square to move from.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display("piece `{_0}` is in hand and occupies no board square")]
pub struct OffBoard(#[error(not(source))] pub PieceId);

/// The reason why no route to a target square exists.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum NoRoute {
    #[display("{_0}")]
    OffBoard(OffBoard),
    #[display("piece `{_0}` cannot reach square `{_1}`")]
    #[from(ignore)]
    Unreachable(PieceId, Square),
}
