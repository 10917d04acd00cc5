use std::cmp::{max, min};
use log::error;
use crate::core::evaluation::evaluate;
use crate::core::position::Position;
use crate::core::score::Centipawns;
use crate::core::search::SearchError;

/// Fixed depth minimax with alpha-beta pruning.
///
/// Scores are White-positive: the maximizing side is White's point of view,
/// whichever color is actually to move. A node without legal moves is scored
/// statically, so checkmate and stalemate get no special score.
pub fn minimax<P: Position + ?Sized>(
    position: &mut P,
    depth: u32,
    alpha: Centipawns,
    beta: Centipawns,
    maximizing: bool,
) -> Result<Centipawns, SearchError> {
    let mut nodes_searched = 0;
    search_alpha_beta(position, depth, alpha, beta, maximizing, &mut nodes_searched)
}

pub(crate) fn search_alpha_beta<P: Position + ?Sized>(
    position: &mut P,
    depth: u32,
    mut alpha: Centipawns,
    mut beta: Centipawns,
    maximizing: bool,
    nodes_searched: &mut u64,
) -> Result<Centipawns, SearchError> {
    *nodes_searched += 1;

    if depth == 0 {
        return Ok(evaluate(position));
    }

    let moves = position.legal_moves();
    if moves.is_empty() {
        return Ok(evaluate(position));
    }

    if maximizing {
        let mut best_eval = Centipawns::NEG_INFINITY;

        for chess_move in moves {
            apply_checked(position, chess_move)?;
            let result = search_alpha_beta(position, depth - 1, alpha, beta, false, nodes_searched);
            undo_checked(position)?;
            let eval = result?;

            best_eval = max(best_eval, eval);
            alpha = max(alpha, best_eval);
            if alpha >= beta {
                break;
            }
        }

        Ok(best_eval)
    } else {
        let mut best_eval = Centipawns::INFINITY;

        for chess_move in moves {
            apply_checked(position, chess_move)?;
            let result = search_alpha_beta(position, depth - 1, alpha, beta, true, nodes_searched);
            undo_checked(position)?;
            let eval = result?;

            best_eval = min(best_eval, eval);
            beta = min(beta, best_eval);
            if beta <= alpha {
                break;
            }
        }

        Ok(best_eval)
    }
}

/// Applies a move the rules boundary itself reported as legal.
pub(crate) fn apply_checked<P: Position + ?Sized>(
    position: &mut P,
    chess_move: chess::ChessMove,
) -> Result<(), SearchError> {
    position.apply(chess_move).map_err(|err| {
        error!("legal move {chess_move} failed to apply: {err}");
        SearchError::ContractViolation(err)
    })
}

pub(crate) fn undo_checked<P: Position + ?Sized>(position: &mut P) -> Result<(), SearchError> {
    position.undo().map_err(|err| {
        error!("undo failed during search: {err}");
        SearchError::ContractViolation(err)
    })
}

#[cfg(test)]
mod tests {
    use crate::core::evaluation::evaluate;
    use crate::core::position::GamePosition;
    use crate::core::score::Centipawns;
    use super::minimax;

    #[test]
    fn check_depth_zero_is_static() {
        let mut position = GamePosition::from_fen(
            "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4"
        ).unwrap();
        let expected = evaluate(&position);

        for maximizing in [true, false] {
            let eval = minimax(
                &mut position,
                0,
                Centipawns::NEG_INFINITY,
                Centipawns::INFINITY,
                maximizing,
            ).unwrap();
            assert_eq!(eval, expected);
        }
    }

    #[test]
    fn check_checkmated_is_static() {
        // Back rank mate, black to move with no legal moves
        let mut position = GamePosition::from_fen("R5k1/5ppp/8/8/8/8/5PPP/6K1 b - - 1 1").unwrap();
        let expected = evaluate(&position);

        let eval = minimax(&mut position, 3, Centipawns::NEG_INFINITY, Centipawns::INFINITY, false).unwrap();
        assert_eq!(eval, expected);
    }

    #[test]
    fn check_stalemate_is_static() {
        let mut position = GamePosition::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        let expected = evaluate(&position);

        let eval = minimax(&mut position, 2, Centipawns::NEG_INFINITY, Centipawns::INFINITY, true).unwrap();
        assert_eq!(eval, expected);
    }

    #[test]
    fn check_hanging_queen_depth_two() {
        // White to move can take the undefended queen on d5
        let mut position = GamePosition::from_fen("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1").unwrap();

        let eval = minimax(&mut position, 2, Centipawns::NEG_INFINITY, Centipawns::INFINITY, true).unwrap();
        assert!(eval > Centipawns::new(0), "expected white to be winning, got {eval}");
    }
}
