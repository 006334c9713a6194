/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::{
    is_attacked, CastleSide, Color, File, Move, MoveList, Piece, PieceKind, Position, Rank, Square,
};

/// Unit steps for pieces that move along ranks and files.
pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Unit steps for pieces that move along diagonals.
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

/// The eight `(file, rank)` jumps available to a Knight.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// The eight squares adjacent to a King.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Generates all pseudo-legal moves for `piece` standing on `square`, including castling.
///
/// "Pseudo-legal" means the moves follow the piece's movement pattern and respect occupancy,
/// but may leave the mover's own King attacked. See [`filter`](crate::filter) for that.
///
/// # Example
/// ```
/// # use chessrules::*;
/// let position = Position::default();
/// let knight = position.piece_at(Square::B1).unwrap();
/// let moves = generate(knight, Square::B1, &position);
/// assert_eq!(moves.len(), 2); // a3 and c3
/// ```
pub fn generate(piece: Piece, square: Square, position: &Position) -> MoveList {
    let mut moves = pattern_moves(piece, square, position);

    if piece.is_king() {
        generate_castling_moves(piece.color(), square, position, &mut moves);
    }

    moves
}

/// Generates the pseudo-legal moves that follow `piece`'s movement pattern, *without* castling.
///
/// Attack detection is built on this, since a castle can never capture anything.
pub fn pattern_moves(piece: Piece, square: Square, position: &Position) -> MoveList {
    let mut moves = MoveList::default();
    let color = piece.color();

    // Only Pawns have special movement; everything else either slides or jumps
    match piece.kind() {
        PieceKind::Pawn => generate_pawn_moves(piece, square, position, &mut moves),
        PieceKind::Knight => generate_jumps(color, square, &KNIGHT_OFFSETS, position, &mut moves),
        PieceKind::Bishop => {
            generate_slides(color, square, &DIAGONAL_DIRECTIONS, position, &mut moves)
        }
        PieceKind::Rook => {
            generate_slides(color, square, &ORTHOGONAL_DIRECTIONS, position, &mut moves)
        }
        PieceKind::Queen => {
            generate_slides(color, square, &ORTHOGONAL_DIRECTIONS, position, &mut moves);
            generate_slides(color, square, &DIAGONAL_DIRECTIONS, position, &mut moves);
        }
        PieceKind::King => generate_jumps(color, square, &KING_OFFSETS, position, &mut moves),
    }

    moves
}

/// Walks each direction one square at a time until the edge of the board or the first occupied square.
///
/// An enemy on the stopping square is included as a capture; a friendly piece is not.
fn generate_slides(
    color: Color,
    from: Square,
    directions: &[(i8, i8)],
    position: &Position,
    moves: &mut MoveList,
) {
    for &(df, dr) in directions {
        let mut current = from;

        while let Some(to) = current.offset(df, dr) {
            match position.color_at(to) {
                None => moves.push(Move::new(from, to)),
                Some(blocker) => {
                    if blocker != color {
                        moves.push(Move::new(from, to));
                    }
                    break;
                }
            }
            current = to;
        }
    }
}

/// Tries each offset independently, keeping those that land on the board and not on a friendly piece.
fn generate_jumps(
    color: Color,
    from: Square,
    offsets: &[(i8, i8)],
    position: &Position,
    moves: &mut MoveList,
) {
    for &(df, dr) in offsets {
        let Some(to) = from.offset(df, dr) else {
            continue;
        };

        if position.color_at(to) != Some(color) {
            moves.push(Move::new(from, to));
        }
    }
}

/// Pawn pushes and captures.
///
/// - One square forward, if empty.
/// - Two squares forward, if the Pawn has never moved and both squares are empty.
/// - One square diagonally forward, only onto an enemy piece.
///
/// Neither en passant nor promotion exist in this rule set.
fn generate_pawn_moves(pawn: Piece, from: Square, position: &Position, moves: &mut MoveList) {
    let color = pawn.color();

    if let Some(single) = from.forward_by(color, 1) {
        if !position.has(single) {
            moves.push(Move::new(from, single));

            if !pawn.has_moved() {
                if let Some(double) = from.forward_by(color, 2) {
                    if !position.has(double) {
                        moves.push(Move::new(from, double));
                    }
                }
            }
        }
    }

    for df in [-1, 1] {
        let Some(to) = from.offset(df, color.forward()) else {
            continue;
        };

        if position.color_at(to) == Some(color.opponent()) {
            moves.push(Move::new(from, to));
        }
    }
}

/// Appends every castle currently available to `color`'s King on `king_square`.
pub fn generate_castling_moves(
    color: Color,
    king_square: Square,
    position: &Position,
    moves: &mut MoveList,
) {
    for side in CastleSide::ALL {
        if let Some(mv) = castling_move(color, side, king_square, position) {
            moves.push(mv);
        }
    }
}

/// Checks whether `color` may castle towards `side`, returning the King's move if so.
///
/// The conditions are checked in order:
///  1. The King is unmoved (and on its home square).
///  2. An unmoved friendly Rook stands in the corner for `side`.
///  3. Every square strictly between them is empty.
///  4. The King's square, the square it crosses, and its destination are not attacked.
///
/// # Example
/// ```
/// # use chessrules::*;
/// let position = Position::from_fen(FEN_CASTLING).unwrap();
/// let mv = castling_move(Color::White, CastleSide::Kingside, Square::E1, &position).unwrap();
/// assert_eq!(mv.to(), Square::G1);
/// ```
pub fn castling_move(
    color: Color,
    side: CastleSide,
    king_square: Square,
    position: &Position,
) -> Option<Move> {
    let king_home = Square::E1.rank_relative_to(color);
    let rook_home = Square::new(side.rook_file(), Rank::first(color));

    let king_is_unmoved = king_square == king_home
        && position
            .piece_at(king_square)
            .is_some_and(|king| king.is_king() && king.color() == color && !king.has_moved());
    if !king_is_unmoved {
        return None;
    }

    let rook_is_unmoved = position
        .piece_at(rook_home)
        .is_some_and(|rook| rook.is_rook() && rook.color() == color && !rook.has_moved());
    if !rook_is_unmoved {
        log::trace!("{color:?} cannot castle {side:?}: no unmoved Rook on {rook_home}");
        return None;
    }

    if let Some(blocker) = squares_between(king_square, rook_home).find(|&sq| position.has(sq)) {
        log::trace!("{color:?} cannot castle {side:?}: {blocker} is occupied");
        return None;
    }

    // The King's home is on the e-file, so both of these are on the board
    let crossing = king_square.offset(side.direction(), 0)?;
    let destination = king_square.offset(2 * side.direction(), 0)?;

    let opponent = color.opponent();
    if let Some(attacked) = [king_square, crossing, destination]
        .into_iter()
        .find(|&sq| is_attacked(sq, opponent, position))
    {
        log::trace!("{color:?} cannot castle {side:?}: {attacked} is attacked by {opponent:?}");
        return None;
    }

    Some(Move::castle(king_square, destination, side))
}

/// Iterates over the squares strictly between two squares on the same rank.
fn squares_between(a: Square, b: Square) -> impl Iterator<Item = Square> {
    let rank = a.rank();
    let (low, high) = if a.file() < b.file() {
        (a.file(), b.file())
    } else {
        (b.file(), a.file())
    };

    (low.inner() + 1..high.inner())
        .filter_map(File::new)
        .map(move |file| Square::new(file, rank))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Checks if `moves` and `expected` contain all the same destinations, ignoring order
    fn lists_match(moves: &MoveList, expected: &[Square]) {
        let destinations = moves.iter().map(|mv| mv.to()).collect::<Vec<_>>();

        assert_eq!(
            destinations.len(),
            expected.len(),
            "\nMoves: {destinations:?}\nExpected: {expected:?}",
        );

        for to in &destinations {
            assert!(expected.contains(to), "{to} not found in {expected:?}");
        }
    }

    fn white(kind: PieceKind) -> Piece {
        Piece::new(Color::White, kind)
    }

    fn black(kind: PieceKind) -> Piece {
        Piece::new(Color::Black, kind)
    }

    #[test]
    fn test_rook_blockers() {
        // . . . . . . . .
        // . . . . . . . .
        // . . . p . . . .
        // . . . . . . . .
        // . . . R . . . .
        // . . . . . . . .
        // . . . P . . . .
        // . . . . . . . .
        let mut position = Position::new();
        position.place(white(PieceKind::Rook), Square::D4);
        position.place(black(PieceKind::Pawn), Square::D6);
        position.place(white(PieceKind::Pawn), Square::D2);

        let moves = pattern_moves(white(PieceKind::Rook), Square::D4, &position);

        lists_match(
            &moves,
            &[
                Square::D3,
                Square::D5,
                Square::D6,
                Square::A4,
                Square::B4,
                Square::C4,
                Square::E4,
                Square::F4,
                Square::G4,
                Square::H4,
            ],
        );
    }

    #[test]
    fn test_sliders_never_pass_the_first_occupied_square() {
        let mut position = Position::new();
        position.place(white(PieceKind::Queen), Square::D4);
        position.place(white(PieceKind::Knight), Square::F6);
        position.place(black(PieceKind::Bishop), Square::B2);
        position.place(black(PieceKind::Rook), Square::D7);
        position.place(white(PieceKind::Pawn), Square::G4);

        let moves = pattern_moves(white(PieceKind::Queen), Square::D4, &position);
        let tos = moves.iter().map(|mv| mv.to()).collect::<Vec<_>>();

        for (df, dr) in ORTHOGONAL_DIRECTIONS.into_iter().chain(DIAGONAL_DIRECTIONS) {
            let mut seen_blocker = false;
            let mut current = Square::D4;

            while let Some(next) = current.offset(df, dr) {
                if seen_blocker {
                    assert!(!tos.contains(&next), "{next} is past a blocker");
                }
                if position.has(next) {
                    seen_blocker = true;
                }
                current = next;
            }
        }

        // Enemies are captured, friends are not
        assert!(tos.contains(&Square::B2));
        assert!(tos.contains(&Square::D7));
        assert!(!tos.contains(&Square::F6));
        assert!(!tos.contains(&Square::G4));
    }

    #[test]
    fn test_knight_counts_on_empty_board() {
        let position = Position::new();
        let knight = white(PieceKind::Knight);

        for square in Square::iter() {
            let count = pattern_moves(knight, square, &position).len();
            let file = square.file().inner();
            let rank = square.rank().inner();

            if (2..=5).contains(&file) && (2..=5).contains(&rank) {
                assert_eq!(count, 8, "Knight on {square}");
            } else {
                assert!(count < 8, "Knight on {square}");
            }
        }

        for corner in [Square::A1, Square::H1, Square::A8, Square::H8] {
            assert_eq!(pattern_moves(knight, corner, &position).len(), 2);
        }
    }

    #[test]
    fn test_knight_ignores_blockers_but_not_friends() {
        let mut position = Position::default();
        position.place(black(PieceKind::Pawn), Square::A3);

        let knight = position.piece_at(Square::B1).unwrap();
        let moves = generate(knight, Square::B1, &position);

        // Jumps over the b2 pawn, captures on a3, and never lands on d2
        lists_match(&moves, &[Square::A3, Square::C3]);
    }

    #[test]
    fn test_pawn_pushes_and_captures() {
        let mut position = Position::new();
        position.place(white(PieceKind::Pawn), Square::E2);
        position.place(black(PieceKind::Knight), Square::D3);
        position.place(white(PieceKind::Knight), Square::F3);

        let moves = pattern_moves(white(PieceKind::Pawn), Square::E2, &position);
        lists_match(&moves, &[Square::E3, Square::E4, Square::D3]);

        // Black pawns go the other way
        let moves = pattern_moves(black(PieceKind::Pawn), Square::E7, &Position::new());
        lists_match(&moves, &[Square::E6, Square::E5]);
    }

    #[test]
    fn test_pawn_double_push_needs_unmoved_pawn_and_clear_path() {
        let position = Position::new();
        let moved = white(PieceKind::Pawn).moved();
        lists_match(&pattern_moves(moved, Square::E2, &position), &[Square::E3]);

        // Blocked directly in front: no pushes at all
        let mut blocked = Position::new();
        blocked.place(black(PieceKind::Pawn), Square::E3);
        lists_match(
            &pattern_moves(white(PieceKind::Pawn), Square::E2, &blocked),
            &[],
        );

        // Blocked two squares ahead: only the single push
        let mut blocked = Position::new();
        blocked.place(black(PieceKind::Pawn), Square::E4);
        lists_match(
            &pattern_moves(white(PieceKind::Pawn), Square::E2, &blocked),
            &[Square::E3],
        );
    }

    #[test]
    fn test_pawn_never_moves_diagonally_onto_empty_squares() {
        let position = Position::new();
        let moves = pattern_moves(white(PieceKind::Pawn).moved(), Square::D4, &position);
        lists_match(&moves, &[Square::D5]);
    }

    #[test]
    fn test_pawn_on_last_rank_has_no_moves() {
        let position = Position::new();
        let moves = pattern_moves(white(PieceKind::Pawn).moved(), Square::A8, &position);
        assert!(moves.is_empty());
    }

    #[test]
    fn test_king_adjacent_moves() {
        let position = Position::new();
        let moves = generate(white(PieceKind::King).moved(), Square::E4, &position);
        assert_eq!(moves.len(), 8);

        let moves = generate(white(PieceKind::King).moved(), Square::A1, &position);
        lists_match(&moves, &[Square::A2, Square::B1, Square::B2]);
    }

    #[test]
    fn test_castling_candidates_from_home_square() {
        let position = Position::from_fen(crate::FEN_CASTLING).unwrap();
        let king = position.piece_at(Square::E1).unwrap();
        let moves = generate(king, Square::E1, &position);

        let castles = moves
            .iter()
            .filter(|mv| mv.is_castle())
            .map(|mv| (mv.to(), mv.castle_side().unwrap()))
            .collect::<Vec<_>>();

        assert_eq!(
            castles,
            vec![
                (Square::G1, CastleSide::Kingside),
                (Square::C1, CastleSide::Queenside)
            ]
        );
    }

    #[test]
    fn test_castling_requires_unmoved_king_and_rook() {
        let mut position = Position::from_fen(crate::FEN_CASTLING).unwrap();
        let rook = position.take(Square::H1).unwrap();
        position.place(rook.moved(), Square::H1);

        assert!(castling_move(Color::White, CastleSide::Kingside, Square::E1, &position).is_none());
        assert!(castling_move(Color::White, CastleSide::Queenside, Square::E1, &position).is_some());

        let king = position.take(Square::E1).unwrap();
        position.place(king.moved(), Square::E1);
        assert!(castling_move(Color::White, CastleSide::Queenside, Square::E1, &position).is_none());
    }

    #[test]
    fn test_queenside_castle_needs_b_file_empty_too() {
        let mut position = Position::from_fen(crate::FEN_CASTLING).unwrap();
        position.place(white(PieceKind::Knight), Square::B1);

        assert!(castling_move(Color::White, CastleSide::Queenside, Square::E1, &position).is_none());
        assert!(castling_move(Color::White, CastleSide::Kingside, Square::E1, &position).is_some());
    }

    #[test]
    fn test_castling_checks_origin_crossing_and_destination() {
        // Rook on f8 attacks f1, the square the King would cross
        let position = Position::from_fen("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
        assert!(castling_move(Color::White, CastleSide::Kingside, Square::E1, &position).is_none());
        assert!(castling_move(Color::White, CastleSide::Queenside, Square::E1, &position).is_some());

        // Rook on c8 attacks c1, the Queenside destination
        let position = Position::from_fen("2r1k3/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
        assert!(castling_move(Color::White, CastleSide::Queenside, Square::E1, &position).is_none());
        assert!(castling_move(Color::White, CastleSide::Kingside, Square::E1, &position).is_some());

        // Rook on e8 gives check: no castling out of check
        let position = Position::from_fen("3kr3/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
        assert!(castling_move(Color::White, CastleSide::Kingside, Square::E1, &position).is_none());
        assert!(castling_move(Color::White, CastleSide::Queenside, Square::E1, &position).is_none());

        // b1 may be attacked; the King never touches it
        let position = Position::from_fen("1r2k3/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
        assert!(castling_move(Color::White, CastleSide::Queenside, Square::E1, &position).is_some());
    }

    #[test]
    fn test_black_castles_on_the_eighth_rank() {
        let position = Position::from_fen(crate::FEN_CASTLING).unwrap();
        let mv = castling_move(Color::Black, CastleSide::Queenside, Square::E8, &position).unwrap();
        assert_eq!(mv.parts(), (Square::E8, Square::C8));
    }
}
