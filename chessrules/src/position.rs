/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, str::FromStr};

use anyhow::{anyhow, bail, Result};

use super::{CastleSide, Color, File, Move, Piece, PieceKind, Rank, Square, FEN_STARTPOS};

/// Represents all pieces and their locations on a chess board.
///
/// Each piece carries its own moved-flag, which is all the state castling and
/// Pawn double-pushes need. Has no notion of whose turn it is; see [`Game`](crate::Game).
///
/// Internally a mailbox: one optional [`Piece`] per [`Square`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    mailbox: [Option<Piece>; Square::COUNT],
}

impl Position {
    /// Creates a new, empty [`Position`].
    ///
    /// # Example
    /// ```
    /// # use chessrules::Position;
    /// let position = Position::new();
    /// assert_eq!(position.to_fen(), "8/8/8/8/8/8/8/8");
    /// ```
    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            mailbox: [None; Square::COUNT],
        }
    }

    /// Creates a new [`Position`] from a FEN string.
    ///
    /// Only the piece placements and the castling field are read. Moved-flags are
    /// derived from the setup: a piece counts as unmoved only on its starting square,
    /// and a King or Rook additionally needs the matching castling right.
    /// If the castling field is absent, full rights (`KQkq`) are assumed.
    ///
    /// # Example
    /// ```
    /// # use chessrules::*;
    /// let position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1").unwrap();
    /// assert!(!position.piece_at(Square::H1).unwrap().has_moved());
    /// assert!(position.piece_at(Square::A1).unwrap().has_moved());
    /// assert_eq!(position.castling_rights_uci(), "Kq");
    /// ```
    pub fn from_fen(fen: &str) -> Result<Self> {
        let mut split = fen.trim().split(' ');
        let placements = split.next().ok_or(anyhow!(
            "Invalid FEN string: FEN string must have piece placements."
        ))?;
        let castling = split.nth(1).unwrap_or("KQkq");

        let rows = placements.split('/').collect::<Vec<_>>();
        if rows.len() != Rank::COUNT {
            bail!(
                "Invalid FEN string: expected {} ranks in {placements:?}, found {}",
                Rank::COUNT,
                rows.len()
            );
        }

        let mut position = Self::new();

        // FEN lists ranks from 8 down to 1
        for (rank, row) in Rank::iter().rev().zip(rows) {
            let mut file = 0;

            for c in row.chars() {
                if let Some(empty) = c.to_digit(10) {
                    if !(1..=8).contains(&empty) {
                        bail!("Invalid FEN string: bad empty-square count {c:?} in {row:?}");
                    }
                    file += empty as u8;
                    if file as usize > File::COUNT {
                        bail!("Invalid FEN string: rank {row:?} has more than 8 files");
                    }
                    continue;
                }

                let Some(file_of_piece) = File::new(file) else {
                    bail!("Invalid FEN string: rank {row:?} has more than 8 files");
                };

                let square = Square::new(file_of_piece, rank);
                let piece = Piece::from_char(c)?;
                let unmoved = Self::is_unmoved_in_setup(piece, square, castling);
                position.place(piece.with_moved(!unmoved), square);

                file += 1;
            }

            if file as usize != File::COUNT {
                bail!("Invalid FEN string: rank {row:?} does not describe exactly 8 files");
            }
        }

        Ok(position)
    }

    /// Decides whether a piece read from a FEN should start with its moved-flag cleared.
    fn is_unmoved_in_setup(piece: Piece, square: Square, castling: &str) -> bool {
        let color = piece.color();
        let on_home = |home: Square| square == home.rank_relative_to(color);
        let (short, long) = match color {
            Color::White => ('K', 'Q'),
            Color::Black => ('k', 'q'),
        };

        match piece.kind() {
            PieceKind::Pawn => square.rank() == Rank::second(color),
            PieceKind::Knight => on_home(Square::B1) || on_home(Square::G1),
            PieceKind::Bishop => on_home(Square::C1) || on_home(Square::F1),
            PieceKind::Queen => on_home(Square::D1),
            PieceKind::Rook => {
                (on_home(Square::H1) && castling.contains(short))
                    || (on_home(Square::A1) && castling.contains(long))
            }
            PieceKind::King => on_home(Square::E1) && castling.contains([short, long]),
        }
    }

    /// Generates the piece-placement field of a FEN string from this [`Position`].
    ///
    /// Moved-flags are not representable in this field; see [`Position::castling_rights_uci`].
    pub fn to_fen(&self) -> String {
        let mut placements = String::with_capacity(64);

        for rank in Rank::iter().rev() {
            let mut empty = 0;

            for file in File::iter() {
                match self.piece_at(file * rank) {
                    Some(piece) => {
                        if empty > 0 {
                            placements.push_str(&empty.to_string());
                            empty = 0;
                        }
                        placements.push(piece.char());
                    }
                    None => empty += 1,
                }
            }

            if empty > 0 {
                placements.push_str(&empty.to_string());
            }

            if rank != Rank::ONE {
                placements.push('/');
            }
        }

        placements
    }

    /// Returns the castling field of a FEN string, derived from the moved-flags of the Kings and Rooks.
    ///
    /// This describes *rights* only. Whether a castle is currently possible also depends on
    /// blockers and attacked squares.
    pub fn castling_rights_uci(&self) -> String {
        let mut castling = String::with_capacity(4);

        for color in Color::iter() {
            for side in CastleSide::ALL {
                if self.has_castling_right(color, side) {
                    let c = match side {
                        CastleSide::Kingside => 'k',
                        CastleSide::Queenside => 'q',
                    };
                    castling.push(if color.is_white() {
                        c.to_ascii_uppercase()
                    } else {
                        c
                    });
                }
            }
        }

        // If no side can castle, use a hyphen
        if castling.is_empty() {
            castling = String::from("-");
        }
        castling
    }

    /// Returns `true` if `color`'s King and the Rook on `side`'s corner are both unmoved and in place.
    pub fn has_castling_right(&self, color: Color, side: CastleSide) -> bool {
        let king_home = Square::E1.rank_relative_to(color);
        let rook_home = Square::new(side.rook_file(), Rank::first(color));

        let unmoved = |square: Square, kind: PieceKind| {
            self.piece_at(square).is_some_and(|piece| {
                piece.kind() == kind && piece.color() == color && !piece.has_moved()
            })
        };

        unmoved(king_home, PieceKind::King) && unmoved(rook_home, PieceKind::Rook)
    }

    /// Fetches the [`Piece`] at `square`, if there is one.
    #[inline(always)]
    pub const fn piece_at(&self, square: Square) -> Option<Piece> {
        self.mailbox[square.index()]
    }

    /// Returns `true` if there is a piece at `square`.
    #[inline(always)]
    pub const fn has(&self, square: Square) -> bool {
        self.mailbox[square.index()].is_some()
    }

    /// Fetches the [`Color`] of the piece at `square`, if there is one.
    #[inline(always)]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.piece_at(square).map(|piece| piece.color())
    }

    /// Places `piece` on `square`, returning whatever was there before.
    ///
    /// # Example
    /// ```
    /// # use chessrules::*;
    /// let mut position = Position::new();
    /// let knight = Piece::new(Color::White, PieceKind::Knight);
    /// assert_eq!(position.place(knight, Square::C3), None);
    /// assert_eq!(position.piece_at(Square::C3), Some(knight));
    /// ```
    #[inline(always)]
    pub fn place(&mut self, piece: Piece, square: Square) -> Option<Piece> {
        self.mailbox[square.index()].replace(piece)
    }

    /// Removes and returns the piece at `square`, if there is one.
    #[inline(always)]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.mailbox[square.index()].take()
    }

    /// Removes any piece at `square`.
    #[inline(always)]
    pub fn clear(&mut self, square: Square) {
        self.mailbox[square.index()] = None;
    }

    /// Iterates over every occupied square and its piece, starting from `a1`.
    #[inline(always)]
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(|square| self.piece_at(square).map(|piece| (square, piece)))
    }

    /// Iterates over every square occupied by a `color` piece.
    #[inline(always)]
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.iter().filter(move |(_, piece)| piece.color() == color)
    }

    /// Number of pieces on the board.
    pub fn count(&self) -> usize {
        self.mailbox.iter().flatten().count()
    }

    /// Locates `color`'s King.
    ///
    /// If the board holds more than one, the first found from `a1` is returned.
    #[inline(always)]
    pub fn king(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, piece)| piece.is_king())
            .map(|(square, _)| square)
    }

    /// Number of `color` Kings on the board. A playable position has exactly one per color.
    pub fn king_count(&self, color: Color) -> usize {
        self.pieces(color)
            .filter(|(_, piece)| piece.is_king())
            .count()
    }

    /// Copies `self` and returns a [`Position`] after having applied the provided [`Move`].
    #[inline(always)]
    pub fn with_move_made(&self, mv: Move) -> Self {
        let mut copied = *self;
        copied.make_move(mv);
        copied
    }

    /// Applies the move, returning the captured piece, if any. No enforcement of legality.
    ///
    /// The moving piece is flagged as moved. A castle also relocates the Rook onto the
    /// square the King passed over and flags it, all in this one call.
    ///
    /// # Example
    /// ```
    /// # use chessrules::*;
    /// let mut position = Position::from_fen(FEN_CASTLING).unwrap();
    /// position.make_move(Move::castle(Square::E1, Square::C1, CastleSide::Queenside));
    ///
    /// assert!(position.piece_at(Square::C1).unwrap().is_king());
    /// assert!(position.piece_at(Square::D1).unwrap().has_moved());
    /// assert!(!position.has(Square::A1));
    /// ```
    pub fn make_move(&mut self, mv: Move) -> Option<Piece> {
        let (from, to) = mv.parts();

        // Remove the piece from its previous location, exiting early if there is no piece there
        let piece = self.take(from)?;

        let captured = self.take(to);

        if let Some(side) = mv.castle_side() {
            let rook_from = Square::new(side.rook_file(), from.rank());

            // The Rook lands on the square the King passed over
            let rook_to = from.offset(side.direction(), 0);

            if let (Some(rook), Some(rook_to)) = (self.take(rook_from), rook_to) {
                self.place(rook.moved(), rook_to);
            }
        }

        self.place(piece.moved(), to);

        captured
    }
}

impl FromStr for Position {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_fen(s)
    }
}

impl Default for Position {
    /// The standard starting position.
    #[inline(always)]
    fn default() -> Self {
        // Safe unwrap because the FEN for startpos is always valid
        Self::from_fen(FEN_STARTPOS).unwrap()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::iter().rev() {
            write!(f, "{rank}|")?;
            for file in File::iter() {
                let piece_char = self.piece_at(file * rank).map(|p| p.char()).unwrap_or('.');
                write!(f, " {piece_char}")?;
            }
            writeln!(f)?;
        }

        write!(f, " +")?;
        for _ in File::iter() {
            write!(f, "--")?;
        }
        write!(f, "\n   ")?;
        for file in File::iter() {
            write!(f, "{file} ")?;
        }

        Ok(())
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{self}")?;
        write!(
            f,
            "FEN: {}  Castling: {}",
            self.to_fen(),
            self.castling_rights_uci()
        )
    }
}
