mod command;
mod engine;
mod interface;
mod options;

pub use command::{Command, CommandError};
pub use engine::{Engine, EngineError};
pub use interface::Interface;
pub use options::{
    DEFAULT_DEPTH, EngineOption, EngineOptions, MAX_DEPTH, MAX_PERFT_DEPTH, OptionError,
};
