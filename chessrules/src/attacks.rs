/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::{pattern_moves, Color, Position, Square};

/// Returns `true` if any piece of color `by` could capture on `square` right now.
///
/// Pawns attack only their two forward diagonals, whether or not something stands there.
/// Every other piece attacks exactly the squares its movement pattern reaches, blockers
/// included. Castling never counts as an attack.
///
/// # Example
/// ```
/// # use chessrules::*;
/// let position = Position::default();
/// assert!(is_attacked(Square::F3, Color::White, &position));
/// assert!(!is_attacked(Square::E4, Color::White, &position));
/// ```
pub fn is_attacked(square: Square, by: Color, position: &Position) -> bool {
    attackers_of(square, by, position).next().is_some()
}

/// Iterates over the squares of every `by` piece that attacks `square`.
pub fn attackers_of(
    square: Square,
    by: Color,
    position: &Position,
) -> impl Iterator<Item = Square> + '_ {
    position
        .pieces(by)
        .filter(move |&(from, piece)| {
            if piece.is_pawn() {
                pawn_attacks(from, by).any(|target| target == square)
            } else {
                pattern_moves(piece, from, position)
                    .iter()
                    .any(|mv| mv.to() == square)
            }
        })
        .map(|(from, _)| from)
}

/// The (up to two) squares a `color` Pawn on `square` attacks.
///
/// # Example
/// ```
/// # use chessrules::*;
/// let attacks = pawn_attacks(Square::A2, Color::White).collect::<Vec<_>>();
/// assert_eq!(attacks, vec![Square::B3]);
/// ```
#[inline(always)]
pub fn pawn_attacks(square: Square, color: Color) -> impl Iterator<Item = Square> {
    [-1, 1]
        .into_iter()
        .filter_map(move |df| square.offset(df, color.forward()))
}

/// Returns `true` if `color`'s King is attacked by the opponent.
///
/// A board without a `color` King is never in check.
pub fn is_in_check(color: Color, position: &Position) -> bool {
    position
        .king(color)
        .is_some_and(|king| is_attacked(king, color.opponent(), position))
}
