//! Turn bookkeeping around the engine: who moves, how promotions resolve,
//! when the game is over, and the record of what was played.

use std::fmt::{Display, Formatter};
use std::time::{Duration, Instant};
use chess::{BoardStatus, ChessMove, Color, Piece, Square};
use log::info;
use thiserror::Error;
use crate::config::{Difficulty, EngineConfig, GameMode, PromotionPiece};
use crate::core::notation::{captured_piece, to_san};
use crate::core::position::{GamePosition, Position, PositionError};
use crate::core::search::{find_best_move_with, SearchConfig, SearchError};
use crate::game::clock::Clock;
use crate::game::draw_detection::{detect_draw, DrawReason};

pub mod clock;
pub mod draw_detection;
pub mod render;

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum GameError {
    #[error("the game is over: {0}")]
    GameOver(GameStatus),
    #[error("it is the engine's turn to move")]
    NotYourTurn,
    #[error("no legal move from {from} to {to}")]
    IllegalMove { from: Square, to: Square },
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error(transparent)]
    Position(#[from] PositionError),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GameStatus {
    ToMove(Color),
    Check(Color),
    Checkmate { winner: Color },
    Draw(DrawReason),
    OutOfTime { winner: Color },
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        matches!(self, Self::Checkmate { .. } | Self::Draw(_) | Self::OutOfTime { .. })
    }
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}

impl Display for GameStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ToMove(color) => write!(f, "{} to move", color_name(*color)),
            Self::Check(color) => write!(f, "{} is in check", color_name(*color)),
            Self::Checkmate { winner } => write!(f, "Checkmate! {} wins!", color_name(*winner)),
            Self::Draw(reason) => write!(f, "Draw! ({reason})"),
            Self::OutOfTime { winner } => write!(f, "Time! {} wins!", color_name(*winner)),
        }
    }
}

/// One played move, as shown in the move list.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MoveRecord {
    pub chess_move: ChessMove,
    pub color: Color,
    pub san: String,
    pub captured: Option<Piece>,
}

pub struct Game {
    position: GamePosition,
    mode: GameMode,
    difficulty: Difficulty,
    promotion: PromotionPiece,
    search_config: SearchConfig,
    time_limit_minutes: u64,
    clock: Clock,
    history: Vec<MoveRecord>,
}

impl Game {
    pub fn new(config: &EngineConfig) -> Self {
        Self::from_position(GamePosition::default(), config)
    }

    pub fn from_position(position: GamePosition, config: &EngineConfig) -> Self {
        Self {
            position,
            mode: config.mode,
            difficulty: config.difficulty,
            promotion: config.promotion,
            search_config: config.search_config(),
            time_limit_minutes: config.time_limit_minutes,
            clock: Clock::from_minutes(config.time_limit_minutes),
            history: Vec::new(),
        }
    }

    pub fn position(&self) -> &GamePosition {
        &self.position
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn current_player(&self) -> Color {
        self.position.side_to_move()
    }

    pub fn status(&self) -> GameStatus {
        if let Some(loser) = self.clock.flagged() {
            return GameStatus::OutOfTime { winner: !loser };
        }

        let side = self.current_player();
        if self.position.status() == BoardStatus::Checkmate {
            return GameStatus::Checkmate { winner: !side };
        }
        if let Some(reason) = detect_draw(&self.position) {
            return GameStatus::Draw(reason);
        }

        match self.position.is_check() {
            true => GameStatus::Check(side),
            false => GameStatus::ToMove(side),
        }
    }

    pub fn is_ai_turn(&self) -> bool {
        self.mode.ai_color() == Some(self.current_player())
    }

    /// Destinations of the current player's piece on `square`; empty for anything else.
    pub fn targets_from(&self, square: Square) -> Vec<Square> {
        match self.position.piece_at(square) {
            Some(occupant) if occupant.color == self.current_player() => {
                let mut targets = self.position.legal_moves()
                    .into_iter()
                    .filter(|x| x.get_source() == square)
                    .map(|x| x.get_dest())
                    .collect::<Vec<_>>();
                targets.dedup();
                targets
            },
            _ => Vec::new(),
        }
    }

    /// Plays a human move. Promotions use the configured piece.
    pub fn play(&mut self, source: Square, dest: Square) -> Result<&MoveRecord, GameError> {
        self.ensure_ongoing()?;
        if self.is_ai_turn() {
            return Err(GameError::NotYourTurn);
        }

        self.play_unchecked(source, dest)
    }

    /// Lets the engine pick and play a move for the side to move, charging
    /// the search time to its clock.
    ///
    /// `Ok(None)` when there is nothing to play.
    pub fn play_engine_move(&mut self) -> Result<Option<&MoveRecord>, GameError> {
        self.ensure_ongoing()?;

        let depth = self.difficulty.depth();
        let started = Instant::now();
        let found = find_best_move_with(&mut self.position, depth, &self.search_config)?;
        self.tick(started.elapsed());

        let Some(outcome) = found else {
            return Ok(None);
        };
        self.ensure_ongoing()?;

        info!(
            "engine plays {} (eval {}, {} nodes, depth {depth})",
            outcome.best_move(),
            outcome.evaluation(),
            outcome.nodes_searched(),
        );

        let best_move = outcome.best_move();
        self.play_unchecked(best_move.source, best_move.dest).map(Some)
    }

    /// Charges `elapsed` to the side to move. Clocks stop once the game is over.
    pub fn tick(&mut self, elapsed: Duration) {
        if self.status().is_over() {
            return;
        }
        let side = self.current_player();
        self.clock.tick(side, elapsed);
    }

    pub fn reset(&mut self) {
        self.position = GamePosition::default();
        self.history.clear();
        self.clock = Clock::from_minutes(self.time_limit_minutes);
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.reset();
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn set_time_limit(&mut self, minutes: u64) {
        self.time_limit_minutes = minutes;
        self.clock = Clock::from_minutes(minutes);
    }

    fn ensure_ongoing(&self) -> Result<(), GameError> {
        let status = self.status();
        match status.is_over() {
            true => Err(GameError::GameOver(status)),
            false => Ok(()),
        }
    }

    fn play_unchecked(&mut self, source: Square, dest: Square) -> Result<&MoveRecord, GameError> {
        let chess_move = self.position
            .find_move(source, dest, self.promotion.into())
            .ok_or(GameError::IllegalMove { from: source, to: dest })?;

        let board = *self.position.board();
        let record = MoveRecord {
            chess_move,
            color: board.side_to_move(),
            san: to_san(&board, chess_move),
            captured: captured_piece(&board, chess_move),
        };

        self.position.apply(chess_move)?;
        self.history.push(record);

        Ok(&self.history[self.history.len() - 1])
    }
}
