/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::io::{self, Write};

use clap::Parser;
use colored::Colorize;

use chessrules::{squares_from_uci, CaptureListener, File, Game, GameError, Piece, Rank, Square};

/// Play a game of chess against yourself in the terminal.
///
/// Type a square (like `g1`) to see where its piece can go, or a move (like `g1f3`) to play it.
/// `fen` prints the current position and `quit` exits.
#[derive(Debug, Parser)]
struct Cli {
    /// The FEN string of the position to start from.
    #[arg(short, long)]
    fen: Option<String>,

    /// Draw pieces with Unicode chess symbols instead of letters.
    #[arg(short, long, default_value = "false")]
    unicode: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Cli::parse();

    let mut game = match &args.fen {
        Some(fen) => Game::from_fen(fen)?,
        None => Game::default(),
    };

    let mut highlighted = Vec::new();

    loop {
        print_board(&game, &highlighted, args.unicode);
        highlighted.clear();

        let report = game.query_status();
        if game.is_over() {
            match game.winner() {
                Some(winner) => println!("Checkmate. {winner:?} wins."),
                None => println!("Stalemate."),
            }
            return Ok(());
        }
        print!("{:?} to move ({}) > ", report.side_to_move, report.status);
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            return Ok(());
        }

        match input.trim() {
            "quit" | "exit" => return Ok(()),
            "fen" => println!("{}", game.to_fen()),
            square if square.len() == 2 => match Square::from_uci(square) {
                Ok(square) => match game.try_select_piece(square) {
                    Ok(destinations) => highlighted = destinations,
                    Err(err) => println!("{}", err.to_string().red()),
                },
                Err(err) => println!("{}", err.to_string().red()),
            },
            mv => {
                let submitted = squares_from_uci(mv)
                    .map_err(GameError::from)
                    .and_then(|(from, to)| game.submit_move_notify(from, to, &mut CaptureLog));

                match submitted {
                    Ok(outcome) if outcome.is_castle() => println!("{}", "Castled.".green()),
                    Ok(_) => {}
                    Err(err) => println!("{}", err.to_string().red()),
                }
            }
        }
    }
}

/// Announces captures the way a graphical board would remove the piece from view.
struct CaptureLog;

impl CaptureListener for CaptureLog {
    fn on_capture(&mut self, square: Square, piece: Piece) {
        println!("{}", format!("{piece:?} captured on {square}").yellow());
    }
}

fn print_board(game: &Game, highlighted: &[Square], unicode: bool) {
    println!();
    for rank in Rank::iter().rev() {
        print!("{rank} ");
        for file in File::iter() {
            let square = Square::new(file, rank);
            let cell = match game.piece_at(square) {
                Some(piece) if unicode => format!(" {} ", piece.glyph()),
                Some(piece) => format!(" {} ", piece.char()),
                None => String::from("   "),
            };

            let cell = if highlighted.contains(&square) {
                cell.on_yellow().black()
            } else if square.is_light() {
                cell.on_white().black()
            } else {
                cell.on_green().black()
            };
            print!("{cell}");
        }
        println!();
    }

    print!("  ");
    for file in File::iter() {
        print!(" {file} ");
    }
    println!();
}
