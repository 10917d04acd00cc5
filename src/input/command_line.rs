//! Parsing for the command line at startup

use std::path::PathBuf;
use clap::{Parser, Subcommand};
use crate::config::{ConfigError, Difficulty, EngineConfig, GameMode, PromotionPiece, Side};
use crate::core::search::RootPerspective;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON file with engine settings. Flags below override it.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// How deep the engine searches.
    #[arg(short, long, value_enum)]
    pub difficulty: Option<Difficulty>,

    /// The piece pawns promote to.
    #[arg(short, long, value_enum)]
    pub promotion: Option<PromotionPiece>,

    /// Whose interest the engine's root move serves.
    #[arg(long, value_enum)]
    pub root_perspective: Option<RootPerspective>,

    #[command(subcommand)]
    pub command: Option<Mode>,
}

#[derive(Subcommand, Debug, Clone, Eq, PartialEq)]
pub enum Mode {
    /// Play a game in the terminal.
    Play {
        /// Let the engine play this side. Without it, two players share the terminal.
        #[arg(long, value_enum)]
        ai: Option<Side>,

        /// Minutes on each clock.
        #[arg(short, long)]
        time_limit: Option<u64>,
    },
    /// Talk UCI on stdin and stdout.
    Uci,
    /// Print the engine's move for one position.
    BestMove {
        /// Position to search, the starting position if left out.
        #[arg(short, long)]
        fen: Option<String>,

        /// Plies to search, the difficulty's depth if left out.
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        depth: Option<u32>,
    },
}

impl Cli {
    /// The config file, if any, with command line overrides applied.
    pub fn engine_config(&self) -> Result<EngineConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::from_file(path)?,
            None => EngineConfig::default(),
        };

        if let Some(difficulty) = self.difficulty {
            config.difficulty = difficulty;
        }
        if let Some(promotion) = self.promotion {
            config.promotion = promotion;
        }
        if let Some(root_perspective) = self.root_perspective {
            config.root_perspective = root_perspective;
        }
        if let Some(Mode::Play { ai, time_limit }) = &self.command {
            if let Some(ai_side) = ai {
                config.mode = GameMode::PlayerVsAi { ai_side: *ai_side };
            }
            if let Some(minutes) = time_limit {
                config.time_limit_minutes = *minutes;
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use crate::config::{Difficulty, GameMode, PromotionPiece, Side};
    use super::{Cli, Mode};

    #[test]
    fn check_play_overrides() {
        let cli = Cli::parse_from(["pst-minimax", "-d", "hard", "play", "--ai", "black", "-t", "5"]);
        let config = cli.engine_config().unwrap();

        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.mode, GameMode::PlayerVsAi { ai_side: Side::Black });
        assert_eq!(config.time_limit_minutes, 5);
        assert_eq!(config.promotion, PromotionPiece::Queen);
    }

    #[test]
    fn check_best_move_args() {
        let cli = Cli::parse_from(["pst-minimax", "best-move", "--depth", "2"]);

        assert_eq!(cli.command, Some(Mode::BestMove { fen: None, depth: Some(2) }));
        assert!(Cli::try_parse_from(["pst-minimax", "best-move", "--depth", "0"]).is_err());
    }
}
