use std::str::{FromStr, SplitWhitespace};

use thiserror::Error;

pub const DEFAULT_DEPTH: u8 = 4;
pub const MAX_DEPTH: u8 = 8;
pub const MAX_PERFT_DEPTH: usize = 6;

/// Tunable engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Plies searched when the engine picks a move.
    pub depth: u8,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
        }
    }
}

impl EngineOptions {
    /// Applies one option change, rejecting values out of range.
    pub fn apply(&mut self, option: EngineOption) -> Result<(), OptionError> {
        match option {
            EngineOption::Depth(depth) => self.depth = Self::check_depth(depth)?,
        }

        Ok(())
    }

    pub fn check_depth(depth: u8) -> Result<u8, OptionError> {
        if (1..=MAX_DEPTH).contains(&depth) {
            Ok(depth)
        } else {
            Err(OptionError::DepthOutOfRange(depth))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineOption {
    /// Search depth in plies.
    Depth(u8),
}

impl EngineOption {
    /// Parses the value part of a "setoption" command into a specific type.
    fn parse_value<T: FromStr>(option_name: &str, tokens: SplitWhitespace) -> Result<T, OptionError> {
        let value_str = tokens.collect::<Vec<&str>>().join(" ");

        if value_str.is_empty() {
            return Err(OptionError::MissingValue(option_name.to_string()));
        }

        value_str
            .parse::<T>()
            .map_err(|_| OptionError::InvalidValue {
                name: option_name.to_string(),
                value: value_str,
            })
    }
}

impl TryFrom<(String, SplitWhitespace<'_>)> for EngineOption {
    type Error = OptionError;

    fn try_from((option_name, tokens): (String, SplitWhitespace)) -> Result<Self, OptionError> {
        let option = match option_name.to_ascii_lowercase().as_str() {
            "depth" => Self::Depth(Self::parse_value(&option_name, tokens)?),
            _ => return Err(OptionError::UnknownOption(option_name)),
        };

        Ok(option)
    }
}

impl std::fmt::Display for EngineOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineOption::Depth(depth) => write!(f, "Depth = {depth}"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    #[error("Unknown option name: '{0}'")]
    UnknownOption(String),
    #[error("Missing value for option '{0}'")]
    MissingValue(String),
    #[error("Invalid value '{value}' for option '{name}'")]
    InvalidValue { name: String, value: String },
    #[error("Depth {0} out of range, expected 1-{MAX_DEPTH}")]
    DepthOutOfRange(u8),
}
