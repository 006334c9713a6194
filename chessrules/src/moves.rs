/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use super::{File, Square, MAX_NUM_MOVES};

/// An alias for an [`arrayvec::ArrayVec`] containing at most [`MAX_NUM_MOVES`] moves.
pub type MoveList = arrayvec::ArrayVec<Move, MAX_NUM_MOVES>;

/// The side of the board a King castles towards.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum CastleSide {
    /// Towards the `h` file. Also called "short" castling.
    Kingside,
    /// Towards the `a` file. Also called "long" castling.
    Queenside,
}

impl CastleSide {
    pub const ALL: [Self; 2] = [Self::Kingside, Self::Queenside];

    /// The file of the corner square that this side's Rook starts on.
    #[inline(always)]
    pub const fn rook_file(&self) -> File {
        match self {
            Self::Kingside => File::H,
            Self::Queenside => File::A,
        }
    }

    /// The direction, in files, that the King travels when castling to this side.
    #[inline(always)]
    pub const fn direction(&self) -> i8 {
        match self {
            Self::Kingside => 1,
            Self::Queenside => -1,
        }
    }

    /// Standard notation for this castle: `O-O` or `O-O-O`.
    #[inline(always)]
    pub const fn notation(&self) -> &'static str {
        match self {
            Self::Kingside => "O-O",
            Self::Queenside => "O-O-O",
        }
    }
}

/// Represents a move made on a chess board: a source and destination [`Square`],
/// plus the [`CastleSide`] if the move is a castle.
///
/// A castle is encoded as the King's move; the Rook's relocation is implied.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    castle: Option<CastleSide>,
}

impl Move {
    /// Creates a new, non-castling [`Move`].
    #[inline(always)]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            castle: None,
        }
    }

    /// Creates a new castling [`Move`], where `from` and `to` are the King's squares.
    ///
    /// # Example
    /// ```
    /// # use chessrules::*;
    /// let mv = Move::castle(Square::E1, Square::G1, CastleSide::Kingside);
    /// assert!(mv.is_castle());
    /// assert_eq!(mv.to_string(), "e1g1");
    /// ```
    #[inline(always)]
    pub const fn castle(from: Square, to: Square, side: CastleSide) -> Self {
        Self {
            from,
            to,
            castle: Some(side),
        }
    }

    #[inline(always)]
    pub const fn from(&self) -> Square {
        self.from
    }

    #[inline(always)]
    pub const fn to(&self) -> Square {
        self.to
    }

    /// Fetches the parts of this move, `(from, to)`.
    #[inline(always)]
    pub const fn parts(&self) -> (Square, Square) {
        (self.from, self.to)
    }

    #[inline(always)]
    pub const fn is_castle(&self) -> bool {
        self.castle.is_some()
    }

    #[inline(always)]
    pub const fn castle_side(&self) -> Option<CastleSide> {
        self.castle
    }

    /// Long algebraic notation for this move, like `e2e4`.
    pub fn to_uci(&self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.castle {
            Some(side) => write!(f, "{self} ({})", side.notation()),
            None => write!(f, "{self}"),
        }
    }
}
