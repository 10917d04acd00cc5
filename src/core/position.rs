//! The rules boundary the search is built on.
//!
//! Search and evaluation only see the [`Position`] trait. [`GamePosition`]
//! implements it on top of the `chess` crate, keeping an undo stack so a
//! single instance can be perturbed in place and restored.

use std::str::FromStr;
use chess::{Board, BoardStatus, ChessMove, Color, MoveGen, Piece, Square, EMPTY};
use thiserror::Error;

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum PositionError {
    #[error("move {0} is not legal in this position")]
    IllegalMove(ChessMove),
    #[error("there is no move to undo")]
    NothingToUndo,
    #[error("invalid FEN: {0}")]
    InvalidFen(String),
}

/// What the rules boundary reports for an occupied square.
///
/// The piece type travels as its one letter lowercase tag (`p n b r q k`) so
/// that it is decoded, and validated, by whoever consumes it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Occupant {
    pub color: Color,
    pub symbol: char,
}

impl Occupant {
    pub fn new(color: Color, piece: Piece) -> Self {
        Self {
            color,
            symbol: piece_symbol(piece),
        }
    }

    /// `None` when the tag is not one of the six piece letters.
    pub fn piece(&self) -> Option<Piece> {
        piece_from_symbol(self.symbol)
    }
}

pub fn piece_symbol(piece: Piece) -> char {
    match piece {
        Piece::Pawn => 'p',
        Piece::Knight => 'n',
        Piece::Bishop => 'b',
        Piece::Rook => 'r',
        Piece::Queen => 'q',
        Piece::King => 'k',
    }
}

pub fn piece_from_symbol(symbol: char) -> Option<Piece> {
    match symbol {
        'p' => Some(Piece::Pawn),
        'n' => Some(Piece::Knight),
        'b' => Some(Piece::Bishop),
        'r' => Some(Piece::Rook),
        'q' => Some(Piece::Queen),
        'k' => Some(Piece::King),
        _ => None,
    }
}

/// A mutable chess position that can enumerate, apply and revert moves.
///
/// `apply` and `undo` calls must nest in strict LIFO order. A failed `apply`
/// must leave the position untouched.
pub trait Position {
    /// All legal moves for the side to move, in a stable order.
    fn legal_moves(&self) -> Vec<ChessMove>;

    fn apply(&mut self, chess_move: ChessMove) -> Result<(), PositionError>;

    /// Restores the state from before the last successful `apply`.
    fn undo(&mut self) -> Result<(), PositionError>;

    fn piece_at(&self, square: Square) -> Option<Occupant>;

    fn side_to_move(&self) -> Color;
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Snapshot {
    board: Board,
    halfmove_clock: u32,
    fullmove_number: u32,
}

/// A `chess::Board` with move counters and an undo stack.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GamePosition {
    board: Board,
    halfmove_clock: u32,
    fullmove_number: u32,
    history: Vec<Snapshot>,
}

impl Default for GamePosition {
    fn default() -> Self {
        Self::new(Board::default())
    }
}

impl GamePosition {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            halfmove_clock: 0,
            fullmove_number: 1,
            history: Vec::new(),
        }
    }

    /// Parses a full FEN, move counters included. Missing counters default to `0 1`.
    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        let board = Board::from_str(fen).map_err(|_| PositionError::InvalidFen(fen.to_string()))?;

        let mut counters = fen.split_whitespace().skip(4);
        let halfmove_clock = match counters.next() {
            Some(x) => x.parse::<u32>().map_err(|_| PositionError::InvalidFen(fen.to_string()))?,
            None => 0,
        };
        let fullmove_number = match counters.next() {
            Some(x) => x.parse::<u32>().map_err(|_| PositionError::InvalidFen(fen.to_string()))?,
            None => 1,
        };

        Ok(Self {
            board,
            halfmove_clock,
            fullmove_number,
            history: Vec::new(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> BoardStatus {
        self.board.status()
    }

    pub fn is_check(&self) -> bool {
        *self.board.checkers() != EMPTY
    }

    pub fn hash(&self) -> u64 {
        self.board.get_hash()
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Hashes of every position since the last irreversible move, current one last.
    pub fn history_hashes(&self) -> Vec<u64> {
        let reversible = self.halfmove_clock as usize;
        let start = self.history.len().saturating_sub(reversible);
        self.history[start..]
            .iter()
            .map(|x| x.board.get_hash())
            .chain(std::iter::once(self.board.get_hash()))
            .collect()
    }

    /// The legal move from `source` to `dest`, promoting to `promotion` when
    /// the move is a promotion.
    pub fn find_move(&self, source: Square, dest: Square, promotion: Piece) -> Option<ChessMove> {
        self.legal_moves()
            .into_iter()
            .filter(|x| x.get_source() == source && x.get_dest() == dest)
            .find(|x| match x.get_promotion() {
                None => true,
                Some(piece) => piece == promotion,
            })
    }

    /// FEN including the tracked move counters.
    pub fn fen(&self) -> String {
        let board_fen = self.board.to_string();
        let fields = board_fen.split_whitespace().take(4).collect::<Vec<_>>().join(" ");
        format!("{fields} {} {}", self.halfmove_clock, self.fullmove_number)
    }

    fn resets_halfmove_clock(&self, chess_move: ChessMove) -> bool {
        self.board.piece_on(chess_move.get_source()) == Some(Piece::Pawn)
            || self.board.piece_on(chess_move.get_dest()).is_some()
    }
}

impl Position for GamePosition {
    fn legal_moves(&self) -> Vec<ChessMove> {
        MoveGen::new_legal(&self.board).collect()
    }

    fn apply(&mut self, chess_move: ChessMove) -> Result<(), PositionError> {
        if !self.board.legal(chess_move) {
            return Err(PositionError::IllegalMove(chess_move));
        }

        let halfmove_clock = match self.resets_halfmove_clock(chess_move) {
            true => 0,
            false => self.halfmove_clock + 1,
        };
        let fullmove_number = match self.board.side_to_move() {
            Color::Black => self.fullmove_number + 1,
            Color::White => self.fullmove_number,
        };

        self.history.push(Snapshot {
            board: self.board,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        });
        self.board = self.board.make_move_new(chess_move);
        self.halfmove_clock = halfmove_clock;
        self.fullmove_number = fullmove_number;

        Ok(())
    }

    fn undo(&mut self) -> Result<(), PositionError> {
        let snapshot = self.history.pop().ok_or(PositionError::NothingToUndo)?;
        self.board = snapshot.board;
        self.halfmove_clock = snapshot.halfmove_clock;
        self.fullmove_number = snapshot.fullmove_number;

        Ok(())
    }

    fn piece_at(&self, square: Square) -> Option<Occupant> {
        let piece = self.board.piece_on(square)?;
        let color = self.board.color_on(square)?;
        Some(Occupant::new(color, piece))
    }

    fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use chess::{ChessMove, Color, Piece, Square};
    use super::{GamePosition, Occupant, Position, PositionError};

    #[test]
    fn check_startpos_moves() {
        let position = GamePosition::default();

        assert_eq!(position.legal_moves().len(), 20);
        assert_eq!(position.side_to_move(), Color::White);
    }

    #[test]
    fn check_apply_undo_restores() {
        let mut position = GamePosition::default();
        let original = position.clone();

        position.apply(ChessMove::from_str("e2e4").unwrap()).unwrap();
        assert_eq!(position.side_to_move(), Color::Black);
        assert_eq!(position.halfmove_clock(), 0);
        position.apply(ChessMove::from_str("g8f6").unwrap()).unwrap();
        assert_eq!(position.halfmove_clock(), 1);
        assert_eq!(position.fullmove_number(), 2);

        position.undo().unwrap();
        position.undo().unwrap();
        assert_eq!(position, original);
    }

    #[test]
    fn check_illegal_move_leaves_position() {
        let mut position = GamePosition::default();
        let original = position.clone();

        let result = position.apply(ChessMove::new(Square::E2, Square::E5, None));

        assert!(matches!(result, Err(PositionError::IllegalMove(_))));
        assert_eq!(position, original);
    }

    #[test]
    fn check_nothing_to_undo() {
        let mut position = GamePosition::default();

        assert_eq!(position.undo(), Err(PositionError::NothingToUndo));
    }

    #[test]
    fn check_fen_counters() {
        let fen = "r3k2r/8/8/8/8/8/8/4K2R w Kkq - 7 31";
        let position = GamePosition::from_fen(fen).unwrap();

        assert_eq!(position.halfmove_clock(), 7);
        assert_eq!(position.fullmove_number(), 31);
        assert_eq!(position.fen(), fen);
    }

    #[test]
    fn check_invalid_fen() {
        assert!(matches!(GamePosition::from_fen("not a fen"), Err(PositionError::InvalidFen(_))));
    }

    #[test]
    fn check_piece_at() {
        let position = GamePosition::default();

        assert_eq!(position.piece_at(Square::D8), Some(Occupant::new(Color::Black, Piece::Queen)));
        assert_eq!(position.piece_at(Square::E4), None);
        assert_eq!(position.piece_at(Square::G1).and_then(|x| x.piece()), Some(Piece::Knight));
    }

    #[test]
    fn check_find_move_promotion() {
        let position = GamePosition::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").unwrap();

        let found = position.find_move(Square::A7, Square::A8, Piece::Queen);
        assert_eq!(found, Some(ChessMove::new(Square::A7, Square::A8, Some(Piece::Queen))));

        let knight = position.find_move(Square::A7, Square::A8, Piece::Knight);
        assert_eq!(knight, Some(ChessMove::new(Square::A7, Square::A8, Some(Piece::Knight))));
    }
}
