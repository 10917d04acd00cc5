use chess::Color;
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::core::position::{Position, PositionError};
use crate::core::score::Centipawns;
use crate::core::search::alpha_beta::{apply_checked, search_alpha_beta, undo_checked};
use crate::core::search::search_result::{BestMove, SearchOutcome};

pub mod alpha_beta;
pub mod search_result;

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum SearchError {
    #[error("depth must be at least 1")]
    DepthTooLow,
    #[error("rules engine broke its contract during search: {0}")]
    ContractViolation(#[from] PositionError),
}

/// Whose interest the root move is chosen in.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RootPerspective {
    /// White maximizes and Black minimizes the White-positive score.
    #[default]
    SideToMove,
    /// Always keep the highest White-positive score, with the reply searched
    /// as the minimizing half. Plays badly for Black.
    White,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub root_perspective: RootPerspective,
}

/// Picks the best move for the side to move, looking `depth` plies ahead.
pub fn find_best_move<P: Position + ?Sized>(
    position: &mut P,
    depth: u32,
) -> Result<Option<SearchOutcome>, SearchError> {
    find_best_move_with(position, depth, &SearchConfig::default())
}

/// Like [`find_best_move`]. The position is back in its original state on return.
///
/// Every root move gets a fresh, full window. Ties keep the earliest move in
/// the rules engine's order.
pub fn find_best_move_with<P: Position + ?Sized>(
    position: &mut P,
    depth: u32,
    config: &SearchConfig,
) -> Result<Option<SearchOutcome>, SearchError> {
    if depth == 0 {
        return Err(SearchError::DepthTooLow);
    }

    // The root side maximizes unless it plays Black and picks for itself
    let root_maximizes = match (config.root_perspective, position.side_to_move()) {
        (RootPerspective::White, _) => true,
        (RootPerspective::SideToMove, Color::White) => true,
        (RootPerspective::SideToMove, Color::Black) => false,
    };

    let mut nodes_searched = 1u64;
    let mut best: Option<(BestMove, Centipawns)> = None;

    for chess_move in position.legal_moves() {
        apply_checked(position, chess_move)?;
        let result = search_alpha_beta(
            position,
            depth - 1,
            Centipawns::NEG_INFINITY,
            Centipawns::INFINITY,
            !root_maximizes,
            &mut nodes_searched,
        );
        undo_checked(position)?;
        let eval = result?;

        debug!("root move {chess_move} scored {eval}");

        let improves = match best {
            None => true,
            Some((_, best_eval)) if root_maximizes => eval > best_eval,
            Some((_, best_eval)) => eval < best_eval,
        };
        if improves {
            best = Some((BestMove::from(chess_move), eval));
        }
    }

    Ok(best.map(|(best_move, evaluation)| {
        debug!("best move {best_move} ({evaluation}) at depth {depth}, {nodes_searched} nodes");
        SearchOutcome::new(best_move, evaluation, nodes_searched)
    }))
}
