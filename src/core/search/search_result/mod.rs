use std::fmt::{Display, Formatter};
use chess::{ChessMove, Square};
use crate::core::score::Centipawns;

/// The squares of the chosen move. The promotion piece is left to the caller.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct BestMove {
    pub source: Square,
    pub dest: Square,
}

impl From<ChessMove> for BestMove {
    fn from(chess_move: ChessMove) -> Self {
        Self {
            source: chess_move.get_source(),
            dest: chess_move.get_dest(),
        }
    }
}

impl Display for BestMove {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.source, self.dest)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SearchOutcome {
    best_move: BestMove,
    evaluation: Centipawns, // White-positive
    nodes_searched: u64,
}

impl SearchOutcome {
    pub fn new(best_move: BestMove, evaluation: Centipawns, nodes_searched: u64) -> Self {
        Self {
            best_move,
            evaluation,
            nodes_searched,
        }
    }

    pub fn best_move(&self) -> BestMove {
        self.best_move
    }

    pub fn evaluation(&self) -> Centipawns {
        self.evaluation
    }

    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }
}
