//! Standard algebraic notation, for move lists only. Search never looks at it.

use chess::{Board, BoardStatus, ChessMove, File, MoveGen, Piece, Square, EMPTY};

/// The piece taken by `chess_move`, en passant included.
pub fn captured_piece(board: &Board, chess_move: ChessMove) -> Option<Piece> {
    if let Some(piece) = board.piece_on(chess_move.get_dest()) {
        return Some(piece);
    }

    let source = chess_move.get_source();
    let dest = chess_move.get_dest();
    match board.piece_on(source) {
        Some(Piece::Pawn) if source.get_file() != dest.get_file() => Some(Piece::Pawn),
        _ => None,
    }
}

/// SAN for a legal move played from `board`, e.g. `Nbd7`, `exd6`, `e8=Q+`, `O-O#`.
pub fn to_san(board: &Board, chess_move: ChessMove) -> String {
    let source = chess_move.get_source();
    let dest = chess_move.get_dest();
    let piece = board.piece_on(source).unwrap_or(Piece::Pawn);

    let mut san = String::new();

    let file_distance = source.get_file().to_index() as i32 - dest.get_file().to_index() as i32;
    if piece == Piece::King && file_distance.abs() == 2 {
        san.push_str(match dest.get_file() {
            File::G => "O-O",
            _ => "O-O-O",
        });
    } else {
        let is_capture = captured_piece(board, chess_move).is_some();

        match piece {
            Piece::Pawn => {
                if is_capture {
                    san.push(file_char(source));
                }
            },
            _ => {
                san.push(piece_letter(piece));
                san.push_str(&disambiguation(board, chess_move, piece));
            },
        }

        if is_capture {
            san.push('x');
        }
        san.push_str(&dest.to_string());

        if let Some(promotion) = chess_move.get_promotion() {
            san.push('=');
            san.push(piece_letter(promotion));
        }
    }

    let next = board.make_move_new(chess_move);
    if next.status() == BoardStatus::Checkmate {
        san.push('#');
    } else if *next.checkers() != EMPTY {
        san.push('+');
    }

    san
}

fn disambiguation(board: &Board, chess_move: ChessMove, piece: Piece) -> String {
    let source = chess_move.get_source();
    let dest = chess_move.get_dest();

    let rivals = MoveGen::new_legal(board)
        .filter(|x| x.get_dest() == dest && x.get_source() != source)
        .filter(|x| board.piece_on(x.get_source()) == Some(piece))
        .map(|x| x.get_source())
        .collect::<Vec<_>>();

    if rivals.is_empty() {
        return String::new();
    }

    let shares_file = rivals.iter().any(|x| x.get_file() == source.get_file());
    let shares_rank = rivals.iter().any(|x| x.get_rank() == source.get_rank());

    match (shares_file, shares_rank) {
        (false, _) => file_char(source).to_string(),
        (true, false) => rank_char(source).to_string(),
        (true, true) => source.to_string(),
    }
}

pub fn piece_letter(piece: Piece) -> char {
    match piece {
        Piece::Pawn => 'P',
        Piece::Knight => 'N',
        Piece::Bishop => 'B',
        Piece::Rook => 'R',
        Piece::Queen => 'Q',
        Piece::King => 'K',
    }
}

fn file_char(square: Square) -> char {
    (b'a' + square.get_file().to_index() as u8) as char
}

fn rank_char(square: Square) -> char {
    (b'1' + square.get_rank().to_index() as u8) as char
}
