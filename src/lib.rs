//! A rules engine for [shogi].
//!
//! The game is modeled as a sequence of immutable [`Scene`]s. Each scene
//! records every piece in play, on the board or in hand, and derives the
//! next scene when a [`Move`] is taken.
//!
//! [shogi]: https://en.wikipedia.org/wiki/Shogi

mod color;
mod file;
mod moves;
mod outcome;
mod piece;
mod placement;
mod rank;
mod role;
mod scene;
mod square;

pub use crate::color::*;
pub use crate::file::*;
pub use crate::moves::*;
pub use crate::outcome::*;
pub use crate::piece::*;
pub use crate::placement::*;
pub use crate::rank::*;
pub use crate::role::*;
pub use crate::scene::*;
pub use crate::square::*;
