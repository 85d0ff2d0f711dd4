//! Crate-level error type.

use crate::games::tippy::{ConfigError, MoveError, ParseMoveError};
use derive_more::{Display, Error, From};

/// Any failure the Tippy engine reports.
#[derive(Debug, Clone, Display, Error, From)]
pub enum TippyError {
    /// Board or game configuration was rejected.
    #[display("{}", _0)]
    Config(ConfigError),
    /// A move was illegal in the state it was applied to.
    #[display("{}", _0)]
    Move(MoveError),
    /// Move text could not be parsed.
    #[display("{}", _0)]
    Parse(ParseMoveError),
}
