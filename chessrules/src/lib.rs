/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![doc = include_str!("../README.md")]

pub use chessrules_types::*;

/// Detecting which squares a side threatens.
mod attacks;
/// Errors returned when a selection or move is refused.
mod error;
/// High-level abstraction of the game of chess: turns, legal moves, check, and game over.
mod game;
/// Pruning pseudo-legal moves that would leave the mover's King in check.
mod legality;
/// Pseudo-legal move generation for every kind of piece, including castling.
mod movegen;
/// Enums and structs for modeling the movement of a piece on a chessboard.
mod moves;
/// Utility function for performance testing.
mod perft;
/// A chessboard: piece placements and each piece's moved-flag.
mod position;

pub use attacks::*;
pub use error::*;
pub use game::*;
pub use legality::*;
pub use movegen::*;
pub use moves::*;
pub use perft::*;
pub use position::*;

/// Re-exports all the things you'll need.
pub mod prelude {
    pub use crate::attacks::*;
    pub use crate::error::*;
    pub use crate::game::*;
    pub use crate::legality::*;
    pub use crate::movegen::*;
    pub use crate::moves::*;
    pub use crate::perft::*;
    pub use crate::position::*;
    pub use chessrules_types::*;
}
