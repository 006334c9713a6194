/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, ops::Mul, str::FromStr};

use anyhow::{anyhow, bail, Result};

use super::Color;

/// Raised when raw coordinates do not name a square on an 8x8 board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("coordinates ({file}, {rank}) are outside the board; both must be in [0, 8)")]
pub struct SquareError {
    /// The file coordinate that was supplied.
    pub file: i32,
    /// The rank coordinate that was supplied.
    pub rank: i32,
}

/// A vertical column on the chessboard, `a` through `h`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct File(u8);

impl File {
    pub const A: Self = Self(0);
    pub const B: Self = Self(1);
    pub const C: Self = Self(2);
    pub const D: Self = Self(3);
    pub const E: Self = Self(4);
    pub const F: Self = Self(5);
    pub const G: Self = Self(6);
    pub const H: Self = Self(7);

    /// Number of files on the board.
    pub const COUNT: usize = 8;

    /// Creates a new [`File`] from a zero-based index, or `None` if `index` is off the board.
    #[inline(always)]
    pub const fn new(index: u8) -> Option<Self> {
        if index < Self::COUNT as u8 {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Iterates over all files, from `a` to `h`.
    #[inline(always)]
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
        (0..Self::COUNT as u8).map(Self)
    }

    /// Parses a [`File`] from a lowercase letter.
    ///
    /// # Example
    /// ```
    /// # use chessrules_types::File;
    /// assert_eq!(File::from_char('c').unwrap(), File::C);
    /// assert!(File::from_char('z').is_err());
    /// ```
    pub fn from_char(file: char) -> Result<Self> {
        match file {
            'a'..='h' => Ok(Self(file as u8 - b'a')),
            _ => bail!("Invalid char for File: {file:?}. Must be one of a..=h"),
        }
    }

    /// The letter used for this file in algebraic notation.
    #[inline(always)]
    pub const fn char(&self) -> char {
        (b'a' + self.0) as char
    }

    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    #[inline(always)]
    pub const fn inner(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

impl fmt::Debug for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "File({})", self.char())
    }
}

/// A horizontal row on the chessboard, `1` through `8`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Rank(u8);

impl Rank {
    pub const ONE: Self = Self(0);
    pub const TWO: Self = Self(1);
    pub const THREE: Self = Self(2);
    pub const FOUR: Self = Self(3);
    pub const FIVE: Self = Self(4);
    pub const SIX: Self = Self(5);
    pub const SEVEN: Self = Self(6);
    pub const EIGHT: Self = Self(7);

    /// Number of ranks on the board.
    pub const COUNT: usize = 8;

    /// Creates a new [`Rank`] from a zero-based index, or `None` if `index` is off the board.
    #[inline(always)]
    pub const fn new(index: u8) -> Option<Self> {
        if index < Self::COUNT as u8 {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Iterates over all ranks, from `1` to `8`.
    #[inline(always)]
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
        (0..Self::COUNT as u8).map(Self)
    }

    /// The back rank of `color`, where its King and Rooks start.
    #[inline(always)]
    pub const fn first(color: Color) -> Self {
        match color {
            Color::White => Self::ONE,
            Color::Black => Self::EIGHT,
        }
    }

    /// The rank on which `color`'s Pawns start.
    #[inline(always)]
    pub const fn second(color: Color) -> Self {
        match color {
            Color::White => Self::TWO,
            Color::Black => Self::SEVEN,
        }
    }

    /// Parses a [`Rank`] from a digit.
    pub fn from_char(rank: char) -> Result<Self> {
        match rank {
            '1'..='8' => Ok(Self(rank as u8 - b'1')),
            _ => bail!("Invalid char for Rank: {rank:?}. Must be one of 1..=8"),
        }
    }

    /// The digit used for this rank in algebraic notation.
    #[inline(always)]
    pub const fn char(&self) -> char {
        (b'1' + self.0) as char
    }

    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    #[inline(always)]
    pub const fn inner(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

impl fmt::Debug for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rank({})", self.char())
    }
}

/// One of the 64 squares on a chessboard.
///
/// Internally stored as `rank * 8 + file`, so `a1` is `0` and `h8` is `63`.
/// A [`Square`] can only be built from in-range coordinates, so every value of this type is on the board.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Square(u8);

macro_rules! square_consts {
    ($($name:ident = $file:ident $rank:ident),* $(,)?) => {
        $(pub const $name: Self = Self::new(File::$file, Rank::$rank);)*
    };
}

impl Square {
    square_consts! {
        A1 = A ONE, B1 = B ONE, C1 = C ONE, D1 = D ONE, E1 = E ONE, F1 = F ONE, G1 = G ONE, H1 = H ONE,
        A2 = A TWO, B2 = B TWO, C2 = C TWO, D2 = D TWO, E2 = E TWO, F2 = F TWO, G2 = G TWO, H2 = H TWO,
        A3 = A THREE, B3 = B THREE, C3 = C THREE, D3 = D THREE, E3 = E THREE, F3 = F THREE, G3 = G THREE, H3 = H THREE,
        A4 = A FOUR, B4 = B FOUR, C4 = C FOUR, D4 = D FOUR, E4 = E FOUR, F4 = F FOUR, G4 = G FOUR, H4 = H FOUR,
        A5 = A FIVE, B5 = B FIVE, C5 = C FIVE, D5 = D FIVE, E5 = E FIVE, F5 = F FIVE, G5 = G FIVE, H5 = H FIVE,
        A6 = A SIX, B6 = B SIX, C6 = C SIX, D6 = D SIX, E6 = E SIX, F6 = F SIX, G6 = G SIX, H6 = H SIX,
        A7 = A SEVEN, B7 = B SEVEN, C7 = C SEVEN, D7 = D SEVEN, E7 = E SEVEN, F7 = F SEVEN, G7 = G SEVEN, H7 = H SEVEN,
        A8 = A EIGHT, B8 = B EIGHT, C8 = C EIGHT, D8 = D EIGHT, E8 = E EIGHT, F8 = F EIGHT, G8 = G EIGHT, H8 = H EIGHT,
    }

    /// Number of squares on the board.
    pub const COUNT: usize = 64;

    /// Creates a new [`Square`] from a [`File`] and a [`Rank`].
    ///
    /// # Example
    /// ```
    /// # use chessrules_types::*;
    /// assert_eq!(Square::new(File::E, Rank::FOUR), Square::E4);
    /// ```
    #[inline(always)]
    pub const fn new(file: File, rank: Rank) -> Self {
        Self(rank.0 * File::COUNT as u8 + file.0)
    }

    /// Creates a new [`Square`] from raw zero-based coordinates.
    ///
    /// This is the boundary check for anything coming from outside the engine.
    ///
    /// # Example
    /// ```
    /// # use chessrules_types::*;
    /// assert_eq!(Square::from_coords(4, 0).unwrap(), Square::E1);
    /// assert!(Square::from_coords(8, 0).is_err());
    /// assert!(Square::from_coords(0, -1).is_err());
    /// ```
    pub fn from_coords(file: i32, rank: i32) -> std::result::Result<Self, SquareError> {
        let in_range = |c: i32| (0..8).contains(&c);

        if in_range(file) && in_range(rank) {
            Ok(Self((rank * 8 + file) as u8))
        } else {
            Err(SquareError { file, rank })
        }
    }

    /// Iterates over all 64 squares, starting at `a1` and moving along each rank.
    #[inline(always)]
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
        (0..Self::COUNT as u8).map(Self)
    }

    #[inline(always)]
    pub const fn file(&self) -> File {
        File(self.0 % File::COUNT as u8)
    }

    #[inline(always)]
    pub const fn rank(&self) -> Rank {
        Rank(self.0 / File::COUNT as u8)
    }

    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// Returns the square `file_delta` files and `rank_delta` ranks away, or `None` if that leaves the board.
    ///
    /// # Example
    /// ```
    /// # use chessrules_types::*;
    /// assert_eq!(Square::E4.offset(1, 2), Some(Square::F6));
    /// assert_eq!(Square::H8.offset(1, 0), None);
    /// ```
    #[inline(always)]
    pub const fn offset(&self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        let file = self.file().0 as i8 + file_delta;
        let rank = self.rank().0 as i8 + rank_delta;

        if file >= 0 && file < 8 && rank >= 0 && rank < 8 {
            Some(Self(rank as u8 * 8 + file as u8))
        } else {
            None
        }
    }

    /// Returns the square `n` ranks ahead of this one, from `color`'s point of view.
    #[inline(always)]
    pub const fn forward_by(&self, color: Color, n: i8) -> Option<Self> {
        self.offset(0, n * color.forward())
    }

    /// Mirrors this square's rank if `color` is Black.
    ///
    /// Useful for expressing squares like "the King's home square" once for both sides.
    ///
    /// # Example
    /// ```
    /// # use chessrules_types::*;
    /// assert_eq!(Square::E1.rank_relative_to(Color::Black), Square::E8);
    /// assert_eq!(Square::E1.rank_relative_to(Color::White), Square::E1);
    /// ```
    #[inline(always)]
    pub const fn rank_relative_to(&self, color: Color) -> Self {
        match color {
            Color::White => *self,
            Color::Black => Self::new(self.file(), Rank(7 - self.rank().0)),
        }
    }

    /// Returns `true` if this square is light-colored.
    #[inline(always)]
    pub const fn is_light(&self) -> bool {
        (self.file().0 + self.rank().0) % 2 == 1
    }

    /// Parses a [`Square`] from algebraic notation, like `e4`.
    ///
    /// # Example
    /// ```
    /// # use chessrules_types::*;
    /// assert_eq!(Square::from_uci("e4").unwrap(), Square::E4);
    /// assert!(Square::from_uci("i9").is_err());
    /// ```
    pub fn from_uci(square: &str) -> Result<Self> {
        let mut chars = square.chars();
        let file = chars
            .next()
            .ok_or(anyhow!("Invalid square {square:?}: missing file"))?;
        let rank = chars
            .next()
            .ok_or(anyhow!("Invalid square {square:?}: missing rank"))?;

        if chars.next().is_some() {
            bail!("Invalid square {square:?}: too many characters");
        }

        Ok(Self::new(File::from_char(file)?, Rank::from_char(rank)?))
    }

    /// Converts this square into algebraic notation, like `e4`.
    pub fn to_uci(&self) -> String {
        format!("{}{}", self.file(), self.rank())
    }
}

impl Mul<Rank> for File {
    type Output = Square;
    #[inline(always)]
    fn mul(self, rhs: Rank) -> Self::Output {
        Square::new(self, rhs)
    }
}

impl FromStr for Square {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_uci(s)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_coordinates() {
        for square in Square::iter() {
            let file = square.file().inner() as i32;
            let rank = square.rank().inner() as i32;
            assert_eq!(Square::from_coords(file, rank).unwrap(), square);
        }

        assert_eq!(Square::A1.index(), 0);
        assert_eq!(Square::H8.index(), 63);
        assert_eq!(File::E * Rank::ONE, Square::E1);
    }

    #[test]
    fn test_out_of_range_coordinates_are_rejected() {
        for (file, rank) in [(-1, 0), (0, -1), (8, 0), (0, 8), (100, 100)] {
            let err = Square::from_coords(file, rank).unwrap_err();
            assert_eq!(err, SquareError { file, rank });
        }
    }

    #[test]
    fn test_offsets_stay_on_board() {
        assert_eq!(Square::A1.offset(-1, 0), None);
        assert_eq!(Square::A1.offset(0, -1), None);
        assert_eq!(Square::A1.offset(7, 7), Some(Square::H8));
        assert_eq!(Square::E2.forward_by(Color::White, 2), Some(Square::E4));
        assert_eq!(Square::E7.forward_by(Color::Black, 2), Some(Square::E5));
        assert_eq!(Square::E8.forward_by(Color::White, 1), None);
    }

    #[test]
    fn test_uci_round_trip() {
        for square in Square::iter() {
            assert_eq!(square.to_uci().parse::<Square>().unwrap(), square);
        }
        assert!(Square::from_uci("e").is_err());
        assert!(Square::from_uci("e44").is_err());
    }
}
