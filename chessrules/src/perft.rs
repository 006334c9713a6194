/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::Game;

/// Counts the leaf positions reachable from `game` in exactly `depth` plies.
///
/// Useful for checking move generation against known values.
///
/// # Example
/// ```
/// # use chessrules::*;
/// assert_eq!(perft(&Game::default(), 2), 400);
/// ```
pub fn perft(game: &Game, depth: usize) -> u64 {
    // Bulk counting; the legal moves at this node are already known
    if depth == 0 {
        return 1;
    } else if depth == 1 {
        return game.legal_moves().len() as u64;
    }

    // Recursively accumulate the nodes from the remaining depths
    game.into_iter().fold(0, |nodes, mv| {
        nodes + perft(&game.with_move_made(mv), depth - 1)
    })
}

/// Like [`perft`], but prints the number of leaves reached after each root move before returning the total.
pub fn splitperft(game: &Game, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut total = 0;
    for mv in game {
        let nodes = perft(&game.with_move_made(mv), depth - 1);
        println!("{mv}: {nodes}");
        total += nodes;
    }

    total
}
