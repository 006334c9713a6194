/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// FEN string for the standard starting position.
pub const FEN_STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Both Kings and all four Rooks on their home squares, with full castling rights.
pub const FEN_CASTLING: &str = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";

/// Maximum number of legal moves in any reachable chess position.
///
/// See <https://www.chessprogramming.org/Chess_Position#cite_note-4>.
pub const MAX_NUM_MOVES: usize = 218;
