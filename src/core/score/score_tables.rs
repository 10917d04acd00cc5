//! Piece-square tables.
//!
//! Every table is laid out the way it reads on a diagram from White's side:
//! row 0 is the 8th rank, row 7 the 1st rank, and columns run from the a-file
//! to the h-file. Black uses the same table with its rows reversed, except
//! for the knight and queen tables which are applied unmirrored to both sides.

use chess::{Color, Piece, Square};
use super::{piece_value, Centipawns};

pub type PieceTable = [i32; 64];

#[rustfmt::skip]
pub const PAWN_TABLE: PieceTable = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
pub const KNIGHT_TABLE: PieceTable = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
pub const BISHOP_TABLE: PieceTable = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
pub const ROOK_TABLE: PieceTable = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  0,  0,  0,
];

#[rustfmt::skip]
pub const QUEEN_TABLE: PieceTable = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5,  5,  5,  5,  0,-10,
     -5,  0,  5,  5,  5,  5,  0, -5,
      0,  0,  5,  5,  5,  5,  0, -5,
    -10,  5,  5,  5,  5,  5,  0,-10,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
pub const KING_TABLE: PieceTable = [
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -10,-20,-20,-20,-20,-20,-20,-10,
     20, 20,  0,  0,  0,  0, 20, 20,
     20, 30, 10,  0,  0, 10, 30, 20,
];

pub const BLACK_PAWN_TABLE: PieceTable = mirror_ranks(&PAWN_TABLE);
pub const BLACK_BISHOP_TABLE: PieceTable = mirror_ranks(&BISHOP_TABLE);
pub const BLACK_ROOK_TABLE: PieceTable = mirror_ranks(&ROOK_TABLE);
pub const BLACK_KING_TABLE: PieceTable = mirror_ranks(&KING_TABLE);

/// Reverses the row order of a table, leaving each row intact.
pub const fn mirror_ranks(table: &PieceTable) -> PieceTable {
    let mut result = [0; 64];
    let mut row = 0;
    while row < 8 {
        let mut column = 0;
        while column < 8 {
            result[row * 8 + column] = table[(7 - row) * 8 + column];
            column += 1;
        }
        row += 1;
    }
    result
}

/// The table a piece of `color` is scored with.
#[inline]
pub fn piece_table(color: Color, piece: Piece) -> &'static PieceTable {
    match (piece, color) {
        (Piece::Pawn, Color::White) => &PAWN_TABLE,
        (Piece::Pawn, Color::Black) => &BLACK_PAWN_TABLE,
        (Piece::Knight, _) => &KNIGHT_TABLE,
        (Piece::Bishop, Color::White) => &BISHOP_TABLE,
        (Piece::Bishop, Color::Black) => &BLACK_BISHOP_TABLE,
        (Piece::Rook, Color::White) => &ROOK_TABLE,
        (Piece::Rook, Color::Black) => &BLACK_ROOK_TABLE,
        (Piece::Queen, _) => &QUEEN_TABLE,
        (Piece::King, Color::White) => &KING_TABLE,
        (Piece::King, Color::Black) => &BLACK_KING_TABLE,
    }
}

/// Index into a table: row 0 is the 8th rank.
#[inline]
pub fn table_index(square: Square) -> usize {
    (7 - square.get_rank().to_index()) * 8 + square.get_file().to_index()
}

/// Material value plus the positional bonus, always non-negative in practice,
/// regardless of color.
#[inline]
pub fn determine_piece_score(square: Square, color: Color, piece: Piece) -> Centipawns {
    piece_value(piece) + Centipawns::new(piece_table(color, piece)[table_index(square)])
}
