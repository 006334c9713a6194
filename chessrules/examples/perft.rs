/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::time::{Duration, Instant};

use clap::Parser;

use chessrules::{perft, splitperft, Game};

/// Count the positions reachable from a starting setup, to check the rules engine against known values.
#[derive(Debug, Parser)]
struct Cli {
    /// Number of plies to search.
    depth: usize,

    /// Starting position as FEN. Defaults to the standard setup.
    #[arg(short, long)]
    fen: Option<String>,

    /// Moves (like `e2e4`) submitted to the game before counting.
    #[arg(short, long, num_args = 1..)]
    moves: Vec<String>,

    /// Print the count below each root move.
    #[arg(short, long, default_value = "false")]
    split: bool,

    /// Count every depth from 1 up to `depth`, not just the last one.
    #[arg(short, long, default_value = "false")]
    all: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Cli::parse();

    let mut game = match &args.fen {
        Some(fen) => Game::from_fen(fen)?,
        None => Game::default(),
    };

    // Moves go through the same checks as any other submission
    for mv in &args.moves {
        game.submit_uci(mv)?;
    }

    let report = game.query_status();
    println!("{game}\n");
    println!("FEN: {}", game.to_fen());
    println!(
        "{:?} to move, {} with {} legal moves\n",
        report.side_to_move,
        report.status,
        game.legal_moves().len()
    );

    let first = if args.all { 1 } else { args.depth };
    let mut elapsed = Duration::ZERO;
    let mut total_nodes = 0;

    for depth in first..=args.depth {
        let now = Instant::now();
        let nodes = if args.split && depth == args.depth {
            splitperft(&game, depth)
        } else {
            perft(&game, depth)
        };
        let took = now.elapsed();

        println!("perft({depth}) = {nodes}\t({took:.1?})");
        elapsed += took;
        total_nodes += nodes;
    }

    let nps = total_nodes as f64 / elapsed.as_secs_f64().max(f64::EPSILON);
    println!("\n{total_nodes} nodes in {elapsed:.1?} ({:.2} M nodes/sec)", nps / 1e6);

    Ok(())
}
