/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, ops::Deref, str::FromStr};

use anyhow::{bail, Result};

use super::{
    all_legal_moves, is_attacked, is_in_check, Color, GameError, Move, Piece, Position, Square,
    SquareError, FEN_STARTPOS,
};

/// Where a game stands from the point of view of the side to move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum GameStatus {
    /// The side to move has legal moves and is not in check.
    #[default]
    InProgress,

    /// The side to move is in check, but can get out of it.
    Check,

    /// The side to move is in check and has no legal moves. Terminal.
    Checkmate,

    /// The side to move is not in check and has no legal moves. Terminal.
    Stalemate,
}

impl GameStatus {
    /// Derives a status from whether the side to move is in check and whether it has any legal moves.
    #[inline(always)]
    pub const fn derive(in_check: bool, has_legal_moves: bool) -> Self {
        match (in_check, has_legal_moves) {
            (true, false) => Self::Checkmate,
            (false, false) => Self::Stalemate,
            (true, true) => Self::Check,
            (false, true) => Self::InProgress,
        }
    }

    /// Returns `true` if no more moves can be played.
    #[inline(always)]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Checkmate | Self::Stalemate)
    }

    /// Returns `true` if the side to move is in check, mated or not.
    #[inline(always)]
    pub const fn is_check(&self) -> bool {
        matches!(self, Self::Check | Self::Checkmate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::InProgress => "in progress",
            Self::Check => "check",
            Self::Checkmate => "checkmate",
            Self::Stalemate => "stalemate",
        };
        write!(f, "{s}")
    }
}

/// A snapshot answer to "whose turn is it, and how is the game going?"
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct StatusReport {
    pub side_to_move: Color,
    pub status: GameStatus,
}

/// The result of a successfully applied move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct MoveOutcome {
    mv: Move,
    captured: Option<(Square, Piece)>,
    status: GameStatus,
}

impl MoveOutcome {
    /// Always `true`: a rejected submission never produces an outcome.
    #[inline(always)]
    pub const fn applied(&self) -> bool {
        true
    }

    /// The move that was played, including its castle side, if any.
    #[inline(always)]
    pub const fn mv(&self) -> Move {
        self.mv
    }

    /// The piece that was captured, if any.
    #[inline(always)]
    pub fn captured(&self) -> Option<Piece> {
        self.captured.map(|(_, piece)| piece)
    }

    /// The captured piece along with the square it was removed from.
    #[inline(always)]
    pub const fn capture(&self) -> Option<(Square, Piece)> {
        self.captured
    }

    #[inline(always)]
    pub const fn is_castle(&self) -> bool {
        self.mv.is_castle()
    }

    /// The status of the game after this move, from the new side to move's point of view.
    #[inline(always)]
    pub const fn status(&self) -> GameStatus {
        self.status
    }
}

/// Receives notice of every piece removed from the board by a capture.
///
/// This is how a presentation layer learns which piece to take off its own view.
pub trait CaptureListener {
    fn on_capture(&mut self, square: Square, piece: Piece);
}

impl CaptureListener for Vec<(Square, Piece)> {
    #[inline(always)]
    fn on_capture(&mut self, square: Square, piece: Piece) {
        self.push((square, piece));
    }
}

/// A game of chess: a [`Position`], the side to move, and everything derived from them.
///
/// The legal moves of the side to move are computed once whenever the position changes,
/// so selecting pieces and submitting moves never regenerates them.
///
/// Read-only access to the underlying [`Position`] is available through [`Deref`].
#[derive(Clone, PartialEq, Eq)]
pub struct Game {
    /// Piece placements, including every piece's moved-flag.
    position: Position,

    /// Whose turn it is.
    side_to_move: Color,

    /// Derived from `legal_moves` and whether the side to move is in check.
    status: GameStatus,

    /// Every legal move for the side to move.
    legal_moves: Vec<Move>,
}

impl Game {
    /// Creates a new [`Game`] from the provided [`Position`], with `side_to_move` to play.
    ///
    /// Fails if either side does not have exactly one King, or if the side *not* to move is in
    /// check, since its King could then be captured.
    ///
    /// # Example
    /// ```
    /// # use chessrules::*;
    /// let game = Game::new(Position::default(), Color::White).unwrap();
    /// assert_eq!(game.legal_moves().len(), 20);
    ///
    /// assert!(Game::new(Position::new(), Color::White).is_err());
    /// ```
    pub fn new(position: Position, side_to_move: Color) -> Result<Self> {
        for color in Color::iter() {
            let kings = position.king_count(color);
            if kings != 1 {
                bail!("Invalid setup: {color:?} must have exactly one King, found {kings}");
            }
        }

        let waiting = side_to_move.opponent();
        if is_in_check(waiting, &position) {
            bail!("Invalid setup: {waiting:?} is in check, but it is {side_to_move:?}'s turn");
        }

        let mut game = Self {
            position,
            side_to_move,
            status: GameStatus::default(),
            legal_moves: Vec::new(),
        };

        game.recompute();
        Ok(game)
    }

    /// Creates a new [`Game`] from the provided FEN string.
    ///
    /// The piece placements, side to move, and castling field are read. If the side to move is
    /// absent, White is to move.
    ///
    /// # Example
    /// ```
    /// # use chessrules::*;
    /// let game = Game::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    /// assert_eq!(game.status(), GameStatus::Stalemate);
    /// ```
    pub fn from_fen(fen: &str) -> Result<Self> {
        let position = Position::from_fen(fen)?;
        let side_to_move = match fen.split_whitespace().nth(1) {
            Some(side) => side.parse()?,
            None => Color::White,
        };

        Self::new(position, side_to_move)
    }

    /// Fetch the internal [`Position`] of this [`Game`].
    #[inline(always)]
    pub const fn position(&self) -> &Position {
        &self.position
    }

    #[inline(always)]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline(always)]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns `true` if the side to move is currently in check.
    #[inline(always)]
    pub const fn is_in_check(&self) -> bool {
        self.status.is_check()
    }

    /// Returns `true` if the game has ended in checkmate or stalemate.
    #[inline(always)]
    pub const fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// The side that delivered checkmate, if the game ended that way.
    #[inline(always)]
    pub const fn winner(&self) -> Option<Color> {
        match self.status {
            GameStatus::Checkmate => Some(self.side_to_move.opponent()),
            _ => None,
        }
    }

    /// All legal moves for the side to move.
    #[inline(always)]
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    /// The side to move and the game's status.
    #[inline(always)]
    pub const fn query_status(&self) -> StatusReport {
        StatusReport {
            side_to_move: self.side_to_move,
            status: self.status,
        }
    }

    /// The legal destinations for the piece on `square`.
    ///
    /// Empty if there is no piece there, it belongs to the side not to move, it has no
    /// legal moves, or the game is over. Use [`Game::try_select_piece`] to learn which.
    ///
    /// # Example
    /// ```
    /// # use chessrules::*;
    /// let game = Game::default();
    /// assert_eq!(game.select_piece(Square::G1), vec![Square::H3, Square::F3]);
    /// assert!(game.select_piece(Square::G8).is_empty());
    /// ```
    pub fn select_piece(&self, square: Square) -> Vec<Square> {
        self.try_select_piece(square).unwrap_or_default()
    }

    /// Like [`Game::select_piece`], but reports why a selection is refused.
    ///
    /// A piece that simply has no legal moves is not an error.
    pub fn try_select_piece(&self, square: Square) -> Result<Vec<Square>, GameError> {
        self.check_selectable(square)?;

        Ok(self
            .legal_moves
            .iter()
            .filter(|mv| mv.from() == square)
            .map(|mv| mv.to())
            .collect())
    }

    /// Submits the move `from -> to` for the side to move.
    ///
    /// On success, the move has been played and the outcome is returned. On failure,
    /// nothing about the game has changed.
    ///
    /// # Example
    /// ```
    /// # use chessrules::*;
    /// let mut game = Game::default();
    /// let outcome = game.submit_move(Square::E2, Square::E4).unwrap();
    /// assert!(outcome.applied());
    /// assert_eq!(game.side_to_move(), Color::Black);
    ///
    /// let err = game.submit_move(Square::E4, Square::E5).unwrap_err();
    /// assert!(matches!(err, GameError::NotSideToMove { .. }));
    /// ```
    pub fn submit_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, GameError> {
        let mv = self.find_move(from, to).inspect_err(|err| {
            log::debug!("{:?} submitted {from}{to}: rejected ({err})", self.side_to_move)
        })?;

        let mover = self.side_to_move;
        let captured = self.make_move(mv).map(|piece| (mv.to(), piece));

        log::debug!(
            "{mover:?} played {mv:?}{}; now {}",
            captured
                .map(|(_, piece)| format!(" capturing {piece:?}"))
                .unwrap_or_default(),
            self.status
        );

        Ok(MoveOutcome {
            mv,
            captured,
            status: self.status,
        })
    }

    /// Same as [`Game::submit_move`], additionally telling `listener` about any captured piece.
    pub fn submit_move_notify(
        &mut self,
        from: Square,
        to: Square,
        listener: &mut dyn CaptureListener,
    ) -> Result<MoveOutcome, GameError> {
        let outcome = self.submit_move(from, to)?;

        if let Some((square, piece)) = outcome.capture() {
            listener.on_capture(square, piece);
        }

        Ok(outcome)
    }

    /// Submits a move written as two squares in algebraic notation, like `e2e4`.
    ///
    /// See [`squares_from_uci`] for how the text is read.
    ///
    /// # Example
    /// ```
    /// # use chessrules::*;
    /// let mut game = Game::default();
    /// assert!(game.submit_uci("g1f3").is_ok());
    /// assert!(matches!(game.submit_uci("e9e5"), Err(GameError::InvalidSquare(_))));
    /// ```
    pub fn submit_uci(&mut self, uci: &str) -> Result<MoveOutcome, GameError> {
        let (from, to) = squares_from_uci(uci)?;
        self.submit_move(from, to)
    }

    /// Looks up the legal move `from -> to`, checking each reason it could be refused in turn.
    pub fn find_move(&self, from: Square, to: Square) -> Result<Move, GameError> {
        self.check_selectable(from)?;

        self.legal_moves
            .iter()
            .copied()
            .find(|mv| mv.parts() == (from, to))
            .ok_or(GameError::IllegalMove { from, to })
    }

    /// Refuses a square if the game is over, it is empty, or its piece is not the side to move's.
    fn check_selectable(&self, square: Square) -> Result<Piece, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::EngineTerminal(self.status));
        }

        let piece = self
            .position
            .piece_at(square)
            .ok_or(GameError::NoPieceAtSquare(square))?;

        if piece.color() != self.side_to_move {
            return Err(GameError::NotSideToMove {
                square,
                owner: piece.color(),
                side_to_move: self.side_to_move,
            });
        }

        Ok(piece)
    }

    /// Applies the provided [`Move`], returning the captured piece, if any. No enforcement of legality.
    ///
    /// The turn passes to the opponent and the legal moves and status are recomputed.
    #[inline(always)]
    pub fn make_move(&mut self, mv: Move) -> Option<Piece> {
        let captured = self.position.make_move(mv);
        self.side_to_move = self.side_to_move.opponent();
        self.recompute();
        captured
    }

    /// Copies `self` and returns a [`Game`] after having applied the provided [`Move`].
    #[inline(always)]
    pub fn with_move_made(&self, mv: Move) -> Self {
        let mut copied = self.clone();
        copied.make_move(mv);
        copied
    }

    /// Recomputes the side to move's legal moves and the game's status.
    fn recompute(&mut self) {
        let color = self.side_to_move;
        let king = self.king_square(color);

        self.legal_moves = all_legal_moves(color, &self.position);

        let in_check = is_attacked(king, color.opponent(), &self.position);
        self.status = GameStatus::derive(in_check, !self.legal_moves.is_empty());

        if self.status.is_terminal() {
            log::info!("Game over: {color:?} is in {}", self.status);
        }
    }

    /// Locates `color`'s King.
    ///
    /// # Panics
    /// If `color` does not have exactly one King. [`Game::new`] refuses such setups, and no
    /// legal move can remove a King, so this means the board has been corrupted.
    fn king_square(&self, color: Color) -> Square {
        let kings = self.position.king_count(color);
        match self.position.king(color) {
            Some(square) if kings == 1 => square,
            _ => {
                log::error!("{color:?} has {kings} Kings on the board:\n{}", self.position);
                panic!("{color:?} must have exactly one King, found {kings}");
            }
        }
    }

    /// Generates a FEN string for this game.
    ///
    /// En passant and the move clocks are not tracked, so those fields are always `- 0 1`.
    ///
    /// # Example
    /// ```
    /// # use chessrules::*;
    /// let game = Game::default();
    /// assert_eq!(game.to_fen(), FEN_STARTPOS);
    /// ```
    pub fn to_fen(&self) -> String {
        format!(
            "{} {} {} - 0 1",
            self.position.to_fen(),
            self.side_to_move,
            self.position.castling_rights_uci()
        )
    }
}

/// Reads the two squares out of text like `e2e4`, one character per coordinate.
///
/// Missing characters count as out-of-range coordinates, and anything past the fourth is ignored.
///
/// # Example
/// ```
/// # use chessrules::*;
/// assert_eq!(squares_from_uci("e2e4"), Ok((Square::E2, Square::E4)));
/// assert!(squares_from_uci("e2e9").is_err());
/// assert!(squares_from_uci("e2").is_err());
/// ```
pub fn squares_from_uci(uci: &str) -> Result<(Square, Square), SquareError> {
    let bytes = uci.trim().as_bytes();
    let coord = |i: usize, base: u8| bytes.get(i).map_or(-1, |&b| b as i32 - base as i32);

    let from = Square::from_coords(coord(0, b'a'), coord(1, b'1'))?;
    let to = Square::from_coords(coord(2, b'a'), coord(3, b'1'))?;

    Ok((from, to))
}

impl Deref for Game {
    type Target = Position;
    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        &self.position
    }
}

impl FromStr for Game {
    type Err = anyhow::Error;
    #[inline(always)]
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_fen(s)
    }
}

impl Default for Game {
    #[inline(always)]
    fn default() -> Self {
        // Safe unwrap because the FEN for startpos is always valid
        Self::from_fen(FEN_STARTPOS).unwrap()
    }
}

impl<'a> IntoIterator for &'a Game {
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Move>>;
    type Item = Move;

    /// Iterates over the legal moves for the side to move.
    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.legal_moves.iter().copied()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.position().fmt(f)
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{self}")?;
        writeln!(f, "FEN: {}", self.to_fen())?;
        write!(
            f,
            "{:?} to move, {} ({} legal moves)",
            self.side_to_move,
            self.status,
            self.legal_moves.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PieceKind, FEN_CASTLING};

    /// Fool's mate: 1. f3 e5 2. g4 Qh4#
    const FOOLS_MATE: [(Square, Square); 4] = [
        (Square::F2, Square::F3),
        (Square::E7, Square::E5),
        (Square::G2, Square::G4),
        (Square::D8, Square::H4),
    ];

    fn play(game: &mut Game, moves: &[(Square, Square)]) {
        for &(from, to) in moves {
            game.submit_move(from, to).unwrap();
        }
    }

    #[test]
    fn test_start_position_status() {
        let game = Game::default();
        assert_eq!(
            game.query_status(),
            StatusReport {
                side_to_move: Color::White,
                status: GameStatus::InProgress
            }
        );
        assert_eq!(game.legal_moves().len(), 20);
        assert!(game.select_piece(Square::E1).is_empty());
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_setups_without_one_king_each_are_rejected() {
        assert!(Game::from_fen("8/8/8/8/8/8/8/8 w - - 0 1").is_err());
        assert!(Game::from_fen("4k3/8/8/8/8/8/8/8 w - - 0 1").is_err());
        assert!(Game::from_fen("4k3/8/8/8/8/8/8/K3K3 w - - 0 1").is_err());
        assert!(Game::from_fen("4k3/8/8/8/8/8/8/4K3 x - - 0 1").is_err());
        assert!(Game::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").is_ok());
    }

    #[test]
    fn test_setup_with_capturable_king_is_rejected() {
        // Black is in check with White to move: e1xe8 would take the King
        assert!(Game::from_fen("4k3/8/8/8/8/8/8/4R1K1 w - - 0 1").is_err());

        // The same board is fine with Black to move
        let game = Game::from_fen("4k3/8/8/8/8/8/8/4R1K1 b - - 0 1").unwrap();
        assert_eq!(game.status(), GameStatus::Check);
        assert!(game
            .legal_moves()
            .iter()
            .all(|mv| !game.piece_at(mv.to()).is_some_and(|piece| piece.is_king())));
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::default();
        game.submit_move(Square::E2, Square::E4).unwrap();
        assert_eq!(game.side_to_move(), Color::Black);

        // White cannot move twice
        let before = game.clone();
        let err = game.submit_move(Square::D2, Square::D4).unwrap_err();
        assert!(matches!(err, GameError::NotSideToMove { .. }));
        assert_eq!(game, before);

        game.submit_move(Square::E7, Square::E5).unwrap();
        assert_eq!(game.side_to_move(), Color::White);
    }

    #[test]
    fn test_rejected_submissions_change_nothing() {
        let mut game = Game::default();
        game.submit_move(Square::E2, Square::E4).unwrap();
        let before = game.clone();

        let err = game.submit_move(Square::D4, Square::D5).unwrap_err();
        assert_eq!(err, GameError::NoPieceAtSquare(Square::D4));
        assert_eq!(game, before);

        let err = game.submit_move(Square::E4, Square::E5).unwrap_err();
        assert_eq!(
            err,
            GameError::NotSideToMove {
                square: Square::E4,
                owner: Color::White,
                side_to_move: Color::Black
            }
        );
        assert_eq!(game, before);

        let err = game.submit_move(Square::E7, Square::E4).unwrap_err();
        assert_eq!(
            err,
            GameError::IllegalMove {
                from: Square::E7,
                to: Square::E4
            }
        );
        assert_eq!(game, before);

        for bad in ["e9e5", "i7i5", "e7", "", "77e5"] {
            let err = game.submit_uci(bad).unwrap_err();
            assert!(matches!(err, GameError::InvalidSquare(_)), "{bad:?}");
            assert_eq!(game, before);
        }
    }

    #[test]
    fn test_try_select_piece_names_the_reason() {
        let game = Game::default();

        assert_eq!(
            game.try_select_piece(Square::E4),
            Err(GameError::NoPieceAtSquare(Square::E4))
        );
        assert!(matches!(
            game.try_select_piece(Square::E7),
            Err(GameError::NotSideToMove { .. })
        ));

        // A piece with no moves is a valid, empty selection
        assert_eq!(game.try_select_piece(Square::A1), Ok(Vec::new()));

        let mut destinations = game.try_select_piece(Square::E2).unwrap();
        destinations.sort();
        assert_eq!(destinations, vec![Square::E3, Square::E4]);
    }

    #[test]
    fn test_fools_mate() {
        let mut game = Game::default();
        play(&mut game, &FOOLS_MATE);

        assert_eq!(game.status(), GameStatus::Checkmate);
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.winner(), Some(Color::Black));
        assert!(game.legal_moves().is_empty());

        // Nothing can be played or selected once the game is over
        let before = game.clone();
        assert_eq!(
            game.submit_move(Square::E2, Square::E4),
            Err(GameError::EngineTerminal(GameStatus::Checkmate))
        );
        assert_eq!(
            game.try_select_piece(Square::E2),
            Err(GameError::EngineTerminal(GameStatus::Checkmate))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_constructed_checkmate() {
        // Back-rank mate: the Black King is boxed in by its own Pawns
        let game = Game::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();

        assert_eq!(game.status(), GameStatus::Checkmate);
        assert_eq!(game.winner(), Some(Color::White));

        for (square, _) in game.pieces(Color::Black) {
            assert!(game.select_piece(square).is_empty(), "{square}");
        }
    }

    #[test]
    fn test_constructed_stalemate() {
        let game = Game::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();

        assert_eq!(game.status(), GameStatus::Stalemate);
        assert!(!game.is_in_check());
        assert_eq!(game.winner(), None);
        assert!(matches!(
            game.try_select_piece(Square::H8),
            Err(GameError::EngineTerminal(GameStatus::Stalemate))
        ));
    }

    #[test]
    fn test_stalemate_reached_by_a_move() {
        let mut game = Game::from_fen("7k/8/6K1/5Q2/8/8/8/8 w - - 0 1").unwrap();
        let outcome = game.submit_move(Square::F5, Square::F7).unwrap();

        assert_eq!(outcome.status(), GameStatus::Stalemate);
        assert!(game.is_over());
    }

    #[test]
    fn test_check_is_not_terminal() {
        let mut game = Game::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
        let outcome = game.submit_move(Square::A1, Square::A8).unwrap();

        assert_eq!(outcome.status(), GameStatus::Check);
        assert!(game.is_in_check());
        assert!(!game.is_over());

        // Every Black reply must get the King out of check
        for mv in &game {
            let after = game.with_move_made(mv);
            assert!(!crate::is_in_check(Color::Black, after.position()));
        }
    }

    #[test]
    fn test_castling_through_the_game() {
        let mut game = Game::from_fen(FEN_CASTLING).unwrap();
        let outcome = game.submit_move(Square::E1, Square::G1).unwrap();

        assert!(outcome.is_castle());
        assert_eq!(outcome.captured(), None);
        assert!(game.piece_at(Square::G1).unwrap().is_king());

        let rook = game.piece_at(Square::F1).unwrap();
        assert!(rook.is_rook());
        assert!(rook.has_moved());
        assert!(!game.has(Square::H1));
        assert!(!crate::is_in_check(Color::White, game.position()));
        assert_eq!(game.to_fen(), "r3k2r/8/8/8/8/8/8/R4RK1 b kq - 0 1");

        let outcome = game.submit_uci("e8c8").unwrap();
        assert!(outcome.is_castle());
        assert!(game.piece_at(Square::D8).unwrap().is_rook());
    }

    #[test]
    fn test_capture_notifies_listener() {
        let mut game = Game::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1").unwrap();
        let mut captures: Vec<(Square, Piece)> = Vec::new();

        let outcome = game
            .submit_move_notify(Square::E4, Square::D5, &mut captures)
            .unwrap();

        assert_eq!(captures.len(), 1);
        let (square, piece) = captures[0];
        assert_eq!(square, Square::D5);
        assert_eq!((piece.color(), piece.kind()), (Color::Black, PieceKind::Pawn));
        assert_eq!(outcome.captured(), Some(piece));
        assert_eq!(game.count(), 3);

        // Quiet moves and rejected submissions say nothing
        game.submit_move_notify(Square::E8, Square::E7, &mut captures)
            .unwrap();
        assert!(game
            .submit_move_notify(Square::A1, Square::A2, &mut captures)
            .is_err());
        assert_eq!(captures.len(), 1);
    }

    #[test]
    fn test_fen_round_trip() {
        let fen = "r3k2r/8/8/8/8/8/8/R3K2R b Kq - 0 1";
        let game: Game = fen.parse().unwrap();
        assert_eq!(game.to_fen(), fen);
    }
}
