use chess::{Color, ALL_SQUARES};
use log::warn;
use crate::core::position::Position;
use crate::core::score::Centipawns;
use crate::core::score::score_tables::determine_piece_score;

/// Static evaluation: material plus piece-square bonuses, summed over the board.
///
/// Positive means White is ahead. Squares holding a piece with an unknown tag
/// count as empty.
pub fn evaluate<P: Position + ?Sized>(position: &P) -> Centipawns {
    let mut score = Centipawns::new(0);

    for square in ALL_SQUARES {
        let Some(occupant) = position.piece_at(square) else {
            continue;
        };

        let Some(piece) = occupant.piece() else {
            warn!("unknown piece tag {:?} on {}, scored as 0", occupant.symbol, square);
            continue;
        };

        let piece_score = determine_piece_score(square, occupant.color, piece);
        match occupant.color {
            Color::White => score += piece_score,
            Color::Black => score -= piece_score,
        }
    }

    score
}
