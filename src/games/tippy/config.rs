//! Game configuration for Tippy.

use super::state::GameState;
use super::types::{Board, MIN_BOARD_SIZE, Player, check_size};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings needed to start a game.
///
/// Loaded from TOML:
///
/// ```toml
/// board_size = 4
/// first_player = "p2"
/// ```
///
/// An optional `board` (a list of row strings such as `"X_O_"`) resumes a
/// game from a given position; its size must match `board_size`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TippyConfig {
    /// Side length of the board.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Player who moves first.
    #[serde(default = "default_first_player")]
    first_player: Player,

    /// Starting position, empty board when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    board: Option<Board>,
}

fn default_board_size() -> usize {
    MIN_BOARD_SIZE
}

fn default_first_player() -> Player {
    Player::P1
}

impl TippyConfig {
    /// Creates a configuration for a fresh game.
    #[instrument]
    pub fn new(board_size: usize, first_player: Player) -> Self {
        Self {
            board_size,
            first_player,
            board: None,
        }
    }

    /// Sets the starting position.
    #[instrument(skip(self, board))]
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        debug!(board_size = config.board_size, first_player = %config.first_player, "Config parsed");
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!(board_size = config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Checks the board size and any starting position.
    #[instrument(skip(self), fields(board_size = self.board_size))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_size(self.board_size)?;
        if let Some(board) = &self.board
            && board.size() != self.board_size
        {
            return Err(ConfigError::new(format!(
                "Starting board is {}x{} but board_size is {}",
                board.size(),
                board.size(),
                self.board_size
            )));
        }
        Ok(())
    }

    /// Starts a game from this configuration.
    #[instrument(skip(self), fields(board_size = self.board_size, first_player = %self.first_player))]
    pub fn start(&self) -> Result<GameState, ConfigError> {
        self.validate()?;
        match &self.board {
            Some(board) => Ok(GameState::from_board(self.first_player, board.clone())),
            None => GameState::new(self.board_size, self.first_player),
        }
    }
}

impl Default for TippyConfig {
    fn default() -> Self {
        Self::new(default_board_size(), default_first_player())
    }
}

/// Invalid board or game configuration.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
