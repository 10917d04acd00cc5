use std::fmt::{Display, Formatter};
use chess::{Board, BoardStatus, Piece};
use crate::core::position::GamePosition;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DrawReason {
    Stalemate,
    InsufficientMaterial,
    ThreefoldRepetition,
    FiftyMoveRule,
}

impl Display for DrawReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stalemate => write!(f, "stalemate"),
            Self::InsufficientMaterial => write!(f, "insufficient material"),
            Self::ThreefoldRepetition => write!(f, "threefold repetition"),
            Self::FiftyMoveRule => write!(f, "fifty-move rule"),
        }
    }
}

/// The first reason the game is drawn, if any.
pub fn detect_draw(position: &GamePosition) -> Option<DrawReason> {
    if position.status() == BoardStatus::Stalemate {
        return Some(DrawReason::Stalemate);
    }
    if position.halfmove_clock() >= 100 {
        return Some(DrawReason::FiftyMoveRule);
    }
    if insufficient_material(position.board()) {
        return Some(DrawReason::InsufficientMaterial);
    }
    if detect_draw_incremental(&position.history_hashes()) {
        return Some(DrawReason::ThreefoldRepetition);
    }

    None
}

/// Returns whether the last position has been seen twice before
pub fn detect_draw_incremental(visited_boards: &[u64]) -> bool {
    match visited_boards.last() {
        None => false,
        Some(board_hash) => {
            let total = visited_boards.iter()
                .filter(|x| **x == *board_hash)
                .count();

            total >= 3
        },
    }
}

/// Bare kings, a single minor piece, or only bishops all on one square color.
pub fn insufficient_material(board: &Board) -> bool {
    let heavy = board.pieces(Piece::Pawn).popcnt()
        + board.pieces(Piece::Rook).popcnt()
        + board.pieces(Piece::Queen).popcnt();
    if heavy > 0 {
        return false;
    }

    let knights = board.pieces(Piece::Knight).popcnt();
    let bishops = *board.pieces(Piece::Bishop);

    match (knights, bishops.popcnt()) {
        (0, 0) | (1, 0) | (0, 1) => true,
        (0, _) => {
            let mut shades = bishops.map(|x| (x.get_rank().to_index() + x.get_file().to_index()) % 2);
            match shades.next() {
                Some(first) => shades.all(|x| x == first),
                None => true,
            }
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use chess::{Board, ChessMove, Square};
    use crate::core::position::{GamePosition, Position};
    use super::{detect_draw, detect_draw_incremental, insufficient_material, DrawReason};

    #[test]
    fn check_repetition_count() {
        assert!(!detect_draw_incremental(&[]));
        assert!(!detect_draw_incremental(&[1, 2, 1]));
        assert!(detect_draw_incremental(&[1, 2, 1, 3, 1]));
    }

    #[test]
    fn check_insufficient_material() {
        let cases = [
            ("4k3/8/8/8/8/8/8/4K3 w - - 0 1", true),
            ("4k3/8/8/8/8/8/8/4KN2 w - - 0 1", true),
            ("4kb2/8/8/8/8/8/8/2B1K3 w - - 0 1", true), // both on dark squares
            ("4k1b1/8/8/8/8/8/8/2B1K3 w - - 0 1", false),
            ("4k3/8/8/8/8/8/8/3NKN2 w - - 0 1", false),
            ("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1", false),
        ];

        for (fen, expected) in cases {
            let board = Board::from_str(fen).unwrap();
            assert_eq!(insufficient_material(&board), expected, "{fen}");
        }
    }

    #[test]
    fn check_threefold_by_knight_shuffle() {
        let mut position = GamePosition::default();
        let shuffle = [
            (Square::G1, Square::F3),
            (Square::G8, Square::F6),
            (Square::F3, Square::G1),
            (Square::F6, Square::G8),
        ];

        for _ in 0..2 {
            assert_eq!(detect_draw(&position), None);
            for (source, dest) in shuffle {
                position.apply(ChessMove::new(source, dest, None)).unwrap();
            }
        }

        assert_eq!(detect_draw(&position), Some(DrawReason::ThreefoldRepetition));
    }

    #[test]
    fn check_fifty_move_rule() {
        let position = GamePosition::from_fen("4k3/8/8/8/8/8/4P3/R3K3 w - - 100 80").unwrap();

        assert_eq!(detect_draw(&position), Some(DrawReason::FiftyMoveRule));
    }

    #[test]
    fn check_stalemate() {
        let position = GamePosition::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();

        assert_eq!(detect_draw(&position), Some(DrawReason::Stalemate));
    }
}
