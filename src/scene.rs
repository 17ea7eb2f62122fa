use crate::{Color, File, Move, Outcome, Piece, PieceId, Placement, PossibleMove};
use crate::{Rank, Role, Square};
use derive_more::{Display, Error, From};
use std::fmt::{self, Formatter, Write};
use tracing::{debug, trace};

/// The [`Piece`] does not exist in a given [`Scene`].
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display("piece `{_0}` does not exist in this scene")]
pub struct PieceNotFound(#[error(not(source))] pub PieceId);

/// The [`Move`] is not playable in a given [`Scene`].
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display("move `{_0}` is illegal in this scene")]
pub struct IllegalMove(#[error(not(source))] pub Move);

/// The reason why a [`Move`] was rejected by [`Scene::take`].
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum MoveError {
    #[display("{_0}")]
    PieceNotFound(PieceNotFound),
    #[display("{_0}")]
    IllegalMove(IllegalMove),
}

/// An immutable snapshot of a shogi game.
///
/// Every piece ever in play is tracked by its [`PieceId`], whether currently
/// on the board or in a player's hand. Playing a [`Move`] never mutates a
/// scene, it derives the next one.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Scene {
    pieces: Box<[Piece]>,
    turn: Color,
}

impl Default for Scene {
    fn default() -> Self {
        Scene::initial()
    }
}

impl Scene {
    /// A scene with no pieces at all.
    pub fn empty() -> Self {
        Scene {
            pieces: Box::default(),
            turn: Color::Black,
        }
    }

    /// The standard starting position, black to move.
    pub fn initial() -> Self {
        const BACK: [Role; 9] = [
            Role::Lance,
            Role::Knight,
            Role::Silver,
            Role::Gold,
            Role::King,
            Role::Gold,
            Role::Silver,
            Role::Knight,
            Role::Lance,
        ];

        let mut pieces = Vec::with_capacity(40);
        for (side, back, second, front) in [
            (Color::Black, Rank::I, Rank::H, Rank::G),
            (Color::White, Rank::A, Rank::B, Rank::C),
        ] {
            for (file, &role) in File::iter().zip(&BACK) {
                pieces.push((role, side, Placement::On(Square::new(file, back))));
            }

            let (rook, bishop) = match side {
                Color::Black => (File::Two, File::Eight),
                Color::White => (File::Eight, File::Two),
            };

            pieces.push((Role::Rook, side, Placement::On(Square::new(rook, second))));
            pieces.push((Role::Bishop, side, Placement::On(Square::new(bishop, second))));

            for file in File::iter() {
                pieces.push((Role::Pawn, side, Placement::On(Square::new(file, front))));
            }
        }

        Scene::setup(pieces, Color::Black)
    }

    /// An arbitrary arrangement of pieces with `turn` to move.
    ///
    /// Identities are assigned in order of iteration and each piece starts
    /// out owned and controlled by the same side.
    pub fn setup<I>(pieces: I, turn: Color) -> Self
    where
        I: IntoIterator<Item = (Role, Color, Placement)>,
    {
        Scene {
            pieces: pieces
                .into_iter()
                .enumerate()
                .map(|(i, (role, side, placement))| {
                    Piece::new(PieceId::new(i), role, side, side, placement)
                })
                .collect(),
            turn,
        }
    }

    /// The side to move.
    #[inline(always)]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Every piece in play, indexed by [`PieceId`].
    #[inline(always)]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Looks a piece up by its identity.
    pub fn piece(&self, id: PieceId) -> Result<&Piece, PieceNotFound> {
        self.pieces.get(id.index()).ok_or(PieceNotFound(id))
    }

    /// The piece standing on `square`, if any.
    pub fn piece_on(&self, square: Square) -> Option<&Piece> {
        self.pieces
            .iter()
            .find(|p| p.placement() == Placement::On(square))
    }

    /// The pieces waiting in `side`'s hand.
    pub fn hand(&self, side: Color) -> impl Iterator<Item = &Piece> {
        self.pieces
            .iter()
            .filter(move |p| p.placement() == Placement::Hand(side))
    }

    /// The move offers currently available to one piece.
    ///
    /// A piece on the board may move along any unobstructed route to a
    /// square not occupied by a friendly piece, a piece in hand may be
    /// dropped on any vacant square. Offers are not filtered for leaving
    /// one's own king in check.
    pub fn possible_moves(&self, id: PieceId) -> Result<Vec<PossibleMove>, PieceNotFound> {
        Ok(self.offers(self.piece(id)?))
    }

    /// The pieces the side to move could play right now.
    pub fn movable_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces
            .iter()
            .filter(move |p| p.controller() == self.turn && !self.offers(p).is_empty())
    }

    /// Every move available to the side to move.
    ///
    /// Moves that admit promotion appear twice, once per promotion choice.
    pub fn all_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for piece in self.pieces.iter().filter(|p| p.controller() == self.turn) {
            for offer in self.offers(piece) {
                moves.push(Move {
                    piece: offer.piece,
                    target: offer.target,
                    promote: false,
                });

                if offer.can_promote {
                    moves.push(Move {
                        piece: offer.piece,
                        target: offer.target,
                        promote: true,
                    });
                }
            }
        }

        moves
    }

    /// Derives the scene that follows from playing `m`.
    pub fn take(&self, m: Move) -> Result<Scene, MoveError> {
        let offers = self.possible_moves(m.piece)?;
        match offers.into_iter().find(|o| o.target == m.target) {
            Some(o) if o.can_promote || !m.promote => Ok(self.conduct(m)),
            _ => Err(IllegalMove(m).into()),
        }
    }

    /// Whether the side to move attacks the waiting side's king.
    pub fn is_checking(&self) -> bool {
        let king = self
            .pieces
            .iter()
            .find(|p| p.role() == Role::King && p.controller() != self.turn);

        match king.and_then(|k| k.placement().square()) {
            None => false,
            Some(target) => self.all_moves().iter().any(|m| m.target == target),
        }
    }

    /// Whether the side to move is in check.
    pub fn is_checked(&self) -> bool {
        Scene {
            pieces: self.pieces.clone(),
            turn: !self.turn,
        }
        .is_checking()
    }

    /// Whether the side to move is checkmated.
    ///
    /// A checked player with no move at all is also checkmated.
    pub fn is_checkmated(&self) -> bool {
        self.is_checked()
            && self
                .all_moves()
                .into_iter()
                .all(|m| self.conduct(m).is_checking())
    }

    /// How the game ends in this scene, if it does.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.is_checkmated() {
            let winner = !self.turn;
            debug!(%winner, "checkmate");
            Some(Outcome::Checkmate(winner))
        } else {
            None
        }
    }

    fn offers(&self, piece: &Piece) -> Vec<PossibleMove> {
        match piece.placement() {
            Placement::On(_) => piece
                .routes()
                .into_iter()
                .filter(|&(target, ref route)| {
                    route.iter().all(|&sq| self.piece_on(sq).is_none())
                        && self
                            .piece_on(target)
                            .map_or(true, |p| p.controller() != piece.controller())
                })
                .map(|(target, _)| PossibleMove {
                    piece: piece.id(),
                    target,
                    can_promote: piece.can_promote(target),
                })
                .collect(),

            Placement::Hand(_) => Square::iter()
                .filter(|&sq| self.piece_on(sq).is_none())
                .map(|target| PossibleMove {
                    piece: piece.id(),
                    target,
                    can_promote: false,
                })
                .collect(),
        }
    }

    fn conduct(&self, m: Move) -> Scene {
        let mover = self.pieces[m.piece.index()];
        let captor = mover.controller();
        let prey = self.piece_on(m.target).map(|p| p.id());

        let mut pieces = self.pieces.clone();
        pieces[m.piece.index()] = mover.moved_to(m.target, m.promote);

        if let Some(id) = prey {
            pieces[id.index()] = pieces[id.index()].captured_by(captor);
        }

        trace!(played = %m, turn = %self.turn, "move conducted");

        Scene {
            pieces,
            turn: !self.turn,
        }
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, rank) in Rank::iter().enumerate() {
            if i > 0 {
                f.write_char('/')?;
            }

            let mut vacant = 0;
            for file in File::iter().rev() {
                match self.piece_on(Square::new(file, rank)) {
                    None => vacant += 1,
                    Some(p) => {
                        if vacant > 0 {
                            write!(f, "{vacant}")?;
                            vacant = 0;
                        }

                        write!(f, "{p}")?;
                    }
                }
            }

            if vacant > 0 {
                write!(f, "{vacant}")?;
            }
        }

        match self.turn {
            Color::Black => f.write_str(" b ")?,
            Color::White => f.write_str(" w ")?,
        }

        let mut any = false;
        for side in [Color::Black, Color::White] {
            for p in self.hand(side) {
                write!(f, "{p}")?;
                any = true;
            }
        }

        if !any {
            f.write_char('-')?;
        }

        Ok(())
    }
}

#[cfg(test)]
impl proptest::arbitrary::Arbitrary for Scene {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Scene>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use proptest::{prelude::*, sample::Selector};

        (0..24usize, any::<Selector>())
            .prop_map(|(moves, selector)| {
                let mut scene = Scene::default();
                for _ in 0..moves {
                    match selector.try_select(scene.all_moves()) {
                        Some(m) => scene = scene.conduct(m),
                        None => break,
                    }
                }

                scene
            })
            .boxed()
    }
}
