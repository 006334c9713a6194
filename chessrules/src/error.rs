/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use thiserror::Error;

use super::{Color, GameStatus, Square, SquareError};

/// Why a selection or move submission was refused.
///
/// Every variant is recoverable: when one is returned, the [`Game`](crate::Game) is unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid square: {0}")]
    InvalidSquare(#[from] SquareError),

    #[error("no piece on {0}")]
    NoPieceAtSquare(Square),

    #[error("the piece on {square} belongs to {owner:?}, but it is {side_to_move:?}'s turn")]
    NotSideToMove {
        square: Square,
        owner: Color,
        side_to_move: Color,
    },

    #[error("{from}{to} is not a legal move")]
    IllegalMove { from: Square, to: Square },

    #[error("the game is over ({0:?})")]
    EngineTerminal(GameStatus),
}
