//! Engine and game settings, loadable from a JSON file and overridable from the command line.

use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};
use chess::{Color, Piece};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::core::search::{RootPerspective, SearchConfig};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Search depth presets.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn depth(&self) -> u32 {
        match self {
            Self::Easy => 1,
            Self::Medium => 3,
            Self::Hard => 5,
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Easy => write!(f, "easy ({} ply)", self.depth()),
            Self::Medium => write!(f, "medium ({} ply)", self.depth()),
            Self::Hard => write!(f, "hard ({} ply)", self.depth()),
        }
    }
}

/// The piece every promotion turns into.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PromotionPiece {
    #[default]
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl From<PromotionPiece> for Piece {
    fn from(promotion: PromotionPiece) -> Self {
        match promotion {
            PromotionPiece::Queen => Piece::Queen,
            PromotionPiece::Rook => Piece::Rook,
            PromotionPiece::Bishop => Piece::Bishop,
            PromotionPiece::Knight => Piece::Knight,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "kind")]
pub enum GameMode {
    PlayerVsPlayer,
    PlayerVsAi { ai_side: Side },
}

impl GameMode {
    pub fn ai_color(&self) -> Option<Color> {
        match self {
            Self::PlayerVsPlayer => None,
            Self::PlayerVsAi { ai_side } => Some((*ai_side).into()),
        }
    }

    /// Switches between the two modes; the AI takes Black when enabled.
    pub fn toggled(&self) -> Self {
        match self {
            Self::PlayerVsPlayer => Self::PlayerVsAi { ai_side: Side::Black },
            Self::PlayerVsAi { .. } => Self::PlayerVsPlayer,
        }
    }
}

impl Default for GameMode {
    fn default() -> Self {
        Self::PlayerVsPlayer
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EngineConfig {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub promotion: PromotionPiece,
    pub root_perspective: RootPerspective,
    pub time_limit_minutes: u64,
    /// Pause before the AI starts thinking, so the previous move is shown first.
    pub think_delay_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            difficulty: Difficulty::default(),
            promotion: PromotionPiece::default(),
            root_perspective: RootPerspective::default(),
            time_limit_minutes: 10,
            think_delay_ms: 250,
        }
    }
}

impl EngineConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            root_perspective: self.root_perspective,
        }
    }
}
