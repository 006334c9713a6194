/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::{generate, is_attacked, Color, Move, MoveList, Position, Square};

/// Returns `true` if playing `mv` would not leave `color`'s King attacked.
///
/// The move is played on a scratch copy of `position`; the original is never touched.
/// A move that would leave `color` without a King at all is not legal.
#[inline(always)]
pub fn is_legal(mv: Move, color: Color, position: &Position) -> bool {
    let scratch = position.with_move_made(mv);

    let Some(king) = scratch.king(color) else {
        return false;
    };

    let legal = !is_attacked(king, color.opponent(), &scratch);
    if !legal {
        log::trace!("{mv:?} rejected: leaves the {color:?} King on {king} in check");
    }
    legal
}

/// Keeps only the moves from `candidates` that do not leave `color`'s King in check.
///
/// Order is preserved, and filtering an already-filtered list changes nothing.
pub fn filter(candidates: &MoveList, color: Color, position: &Position) -> MoveList {
    candidates
        .iter()
        .copied()
        .filter(|&mv| is_legal(mv, color, position))
        .collect()
}

/// All legal moves for the piece on `square`, or an empty list if the square is empty.
///
/// # Example
/// ```
/// # use chessrules::*;
/// let position = Position::default();
/// assert_eq!(legal_moves_for(Square::E2, &position).len(), 2);
/// assert!(legal_moves_for(Square::E4, &position).is_empty());
/// ```
pub fn legal_moves_for(square: Square, position: &Position) -> MoveList {
    let Some(piece) = position.piece_at(square) else {
        return MoveList::default();
    };

    filter(&generate(piece, square, position), piece.color(), position)
}

/// The union of the legal moves of every `color` piece, in board order from `a1`.
///
/// # Example
/// ```
/// # use chessrules::*;
/// let position = Position::default();
/// assert_eq!(all_legal_moves(Color::White, &position).len(), 20);
/// ```
pub fn all_legal_moves(color: Color, position: &Position) -> Vec<Move> {
    position
        .pieces(color)
        .flat_map(|(square, _)| legal_moves_for(square, position))
        .collect()
}
