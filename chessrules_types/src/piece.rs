/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, str::FromStr};

use anyhow::{bail, Result};

/// Represents the color of a player, piece, square, etc. within a chess board.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    /// Number of color variants.
    pub const COUNT: usize = 2;

    /// An array of both colors, starting with White.
    pub const ALL: [Self; Self::COUNT] = [Self::White, Self::Black];

    /// Iterates over both colors, starting with White.
    #[inline(always)]
    pub fn iter() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter()
    }

    /// Creates a new [`Color`] from a boolean, where `false` is White.
    #[inline(always)]
    pub const fn from_bool(is_black: bool) -> Self {
        if is_black {
            Self::Black
        } else {
            Self::White
        }
    }

    /// Returns this color's opponent.
    ///
    /// # Example
    /// ```
    /// # use chessrules_types::Color;
    /// assert_eq!(Color::White.opponent(), Color::Black);
    /// assert_eq!(Color::Black.opponent(), Color::White);
    /// ```
    #[inline(always)]
    pub const fn opponent(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// The direction (in ranks) that this color's Pawns advance: `+1` for White, `-1` for Black.
    #[inline(always)]
    pub const fn forward(&self) -> i8 {
        match self {
            Self::White => 1,
            Self::Black => -1,
        }
    }

    #[inline(always)]
    pub const fn is_white(&self) -> bool {
        matches!(self, Self::White)
    }

    #[inline(always)]
    pub const fn is_black(&self) -> bool {
        matches!(self, Self::Black)
    }

    #[inline(always)]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// The FEN character for this color.
    #[inline(always)]
    pub const fn char(&self) -> char {
        match self {
            Self::White => 'w',
            Self::Black => 'b',
        }
    }

    /// Human-readable name, like `White`.
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Black => "Black",
        }
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "w" | "W" | "white" | "White" => Ok(Self::White),
            "b" | "B" | "black" | "Black" => Ok(Self::Black),
            _ => bail!("Invalid str for Color: {s:?}"),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The six kinds of chess piece.
///
/// This set is closed. Every rule in the engine matches on it exhaustively.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Number of piece variants.
    pub const COUNT: usize = 6;

    pub const ALL: [Self; Self::COUNT] = [
        Self::Pawn,
        Self::Knight,
        Self::Bishop,
        Self::Rook,
        Self::Queen,
        Self::King,
    ];

    #[inline(always)]
    pub fn iter() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter()
    }

    #[inline(always)]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Parses a [`PieceKind`] from a character, ignoring case.
    ///
    /// # Example
    /// ```
    /// # use chessrules_types::PieceKind;
    /// assert_eq!(PieceKind::from_char('N').unwrap(), PieceKind::Knight);
    /// assert_eq!(PieceKind::from_char('q').unwrap(), PieceKind::Queen);
    /// assert!(PieceKind::from_char('x').is_err());
    /// ```
    pub fn from_char(kind: char) -> Result<Self> {
        match kind.to_ascii_lowercase() {
            'p' => Ok(Self::Pawn),
            'n' => Ok(Self::Knight),
            'b' => Ok(Self::Bishop),
            'r' => Ok(Self::Rook),
            'q' => Ok(Self::Queen),
            'k' => Ok(Self::King),
            _ => bail!("Invalid char for PieceKind: {kind:?}"),
        }
    }

    /// The lowercase FEN character for this kind.
    #[inline(always)]
    pub const fn char(&self) -> char {
        match self {
            Self::Pawn => 'p',
            Self::Knight => 'n',
            Self::Bishop => 'b',
            Self::Rook => 'r',
            Self::Queen => 'q',
            Self::King => 'k',
        }
    }

    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Pawn => "Pawn",
            Self::Knight => "Knight",
            Self::Bishop => "Bishop",
            Self::Rook => "Rook",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

/// A chess piece: a [`PieceKind`], a [`Color`], and whether it has moved yet this game.
///
/// The moved-flag is what castling and Pawn double-pushes are decided by.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    has_moved: bool,
}

impl Piece {
    /// Creates a new, unmoved [`Piece`].
    #[inline(always)]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
        }
    }

    #[inline(always)]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline(always)]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline(always)]
    pub const fn has_moved(&self) -> bool {
        self.has_moved
    }

    /// Returns a copy of this piece with its moved-flag set.
    ///
    /// # Example
    /// ```
    /// # use chessrules_types::*;
    /// let rook = Piece::new(Color::White, PieceKind::Rook);
    /// assert!(!rook.has_moved());
    /// assert!(rook.moved().has_moved());
    /// ```
    #[inline(always)]
    pub const fn moved(self) -> Self {
        self.with_moved(true)
    }

    /// Returns a copy of this piece with its moved-flag set to `has_moved`.
    #[inline(always)]
    pub const fn with_moved(mut self, has_moved: bool) -> Self {
        self.has_moved = has_moved;
        self
    }

    #[inline(always)]
    pub const fn is_pawn(&self) -> bool {
        matches!(self.kind, PieceKind::Pawn)
    }

    #[inline(always)]
    pub const fn is_rook(&self) -> bool {
        matches!(self.kind, PieceKind::Rook)
    }

    #[inline(always)]
    pub const fn is_king(&self) -> bool {
        matches!(self.kind, PieceKind::King)
    }

    /// Parses an unmoved [`Piece`] from a FEN character. Uppercase is White.
    ///
    /// # Example
    /// ```
    /// # use chessrules_types::*;
    /// assert_eq!(Piece::from_char('K').unwrap(), Piece::new(Color::White, PieceKind::King));
    /// assert_eq!(Piece::from_char('p').unwrap(), Piece::new(Color::Black, PieceKind::Pawn));
    /// ```
    pub fn from_char(piece: char) -> Result<Self> {
        let kind = PieceKind::from_char(piece)?;
        let color = Color::from_bool(piece.is_ascii_lowercase());
        Ok(Self::new(color, kind))
    }

    /// The FEN character for this piece. Uppercase is White.
    #[inline(always)]
    pub const fn char(&self) -> char {
        let c = self.kind.char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// The Unicode chess symbol for this piece.
    pub const fn glyph(&self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::King) => '♔',
            (Color::Black, PieceKind::Pawn) => '♟',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::King) => '♚',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}{}",
            self.color.name(),
            self.kind.name(),
            if self.has_moved { " (moved)" } else { "" }
        )
    }
}
