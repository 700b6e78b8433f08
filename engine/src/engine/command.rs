use std::str::{FromStr, SplitWhitespace};

use chess::{BoardState, BoardStateError, Colour, ParseSquareError, Square};
use thiserror::Error;

use super::options::{EngineOption, MAX_DEPTH, MAX_PERFT_DEPTH, OptionError};

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Replace the board, optionally with the side to move.
    State {
        state: BoardState,
        side: Option<Colour>,
    },
    StartPos,
    Moves,
    Targets(Square),
    Play { from: Square, to: Square },
    /// Search without playing, optionally overriding the configured depth.
    Go(Option<u8>),
    Ai,
    Eval,
    Perft(usize),
    Print,
    SetOption(EngineOption),
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();

        match tokens.next() {
            Some("state") => Self::parse_state(tokens),
            Some("startpos") => Ok(Self::StartPos),
            Some("moves") => Ok(Self::Moves),
            Some("targets") => Self::parse_targets(tokens),
            Some("play") => Self::parse_play(tokens),
            Some("go") => Self::parse_go(tokens),
            Some("ai") => Ok(Self::Ai),
            Some("eval") => Ok(Self::Eval),
            Some("perft") => Self::parse_perft(tokens),
            Some("print") | Some("d") => Ok(Self::Print),
            Some("setoption") => Self::parse_option(tokens),
            Some("quit") => Ok(Self::Quit),
            Some(other) => Err(CommandError::Unknown(other.to_string())),
            None => Err(CommandError::Empty),
        }
    }
}

impl Command {
    fn parse_state(mut tokens: SplitWhitespace) -> Result<Self, CommandError> {
        let state = tokens
            .next()
            .ok_or(CommandError::MissingArgument("state"))?
            .parse::<BoardState>()?;

        let side = tokens.next().map(parse_side).transpose()?;

        Ok(Self::State { state, side })
    }

    fn parse_targets(mut tokens: SplitWhitespace) -> Result<Self, CommandError> {
        let square = tokens
            .next()
            .ok_or(CommandError::MissingArgument("targets"))?
            .parse::<Square>()?;

        Ok(Self::Targets(square))
    }

    /// Accepts "e2e4" or "e2 e4".
    fn parse_play(tokens: SplitWhitespace) -> Result<Self, CommandError> {
        let move_str = tokens.collect::<String>();

        if move_str.is_empty() {
            return Err(CommandError::MissingArgument("play"));
        }

        if move_str.len() != 4 || !move_str.is_ascii() {
            return Err(CommandError::InvalidMove(move_str));
        }

        let from = move_str[..2].parse::<Square>()?;
        let to = move_str[2..].parse::<Square>()?;

        Ok(Self::Play { from, to })
    }

    fn parse_go(mut tokens: SplitWhitespace) -> Result<Self, CommandError> {
        match tokens.next() {
            None => Ok(Self::Go(None)),
            Some("depth") => {
                let depth = tokens
                    .next()
                    .ok_or(CommandError::MissingArgument("go depth"))?;
                let depth = depth
                    .parse::<u8>()
                    .map_err(|_| CommandError::InvalidDepth(depth.to_string()))?;

                if depth > MAX_DEPTH {
                    return Err(CommandError::InvalidDepth(depth.to_string()));
                }

                Ok(Self::Go(Some(depth)))
            }
            Some(other) => Err(CommandError::Unknown(format!("go {other}"))),
        }
    }

    fn parse_perft(mut tokens: SplitWhitespace) -> Result<Self, CommandError> {
        let depth = tokens
            .next()
            .ok_or(CommandError::MissingArgument("perft"))?;

        match depth.parse::<usize>() {
            Ok(n) if (1..=MAX_PERFT_DEPTH).contains(&n) => Ok(Self::Perft(n)),
            _ => Err(CommandError::InvalidDepth(depth.to_string())),
        }
    }

    fn parse_option(mut tokens: SplitWhitespace) -> Result<Self, CommandError> {
        if tokens.next() != Some("name") {
            return Err(CommandError::MissingArgument("setoption name"));
        }

        let mut name_parts = Vec::new();
        for token in tokens.by_ref() {
            if token == "value" {
                break;
            }
            name_parts.push(token);
        }

        let option_name = name_parts.join(" ");
        if option_name.is_empty() {
            return Err(CommandError::MissingArgument("setoption name"));
        }

        let option = EngineOption::try_from((option_name, tokens))?;

        Ok(Self::SetOption(option))
    }
}

fn parse_side(token: &str) -> Result<Colour, CommandError> {
    match token.to_ascii_lowercase().as_str() {
        "w" | "white" => Ok(Colour::White),
        "b" | "black" => Ok(Colour::Black),
        _ => Err(CommandError::InvalidSide(token.to_string())),
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command: '{0}'")]
    Unknown(String),
    #[error("Missing argument for '{0}'")]
    MissingArgument(&'static str),
    #[error("Invalid side: '{0}', expected 'w' or 'b'")]
    InvalidSide(String),
    #[error("Invalid move: '{0}', expected e.g. 'e2e4'")]
    InvalidMove(String),
    #[error("Invalid depth: '{0}'")]
    InvalidDepth(String),
    #[error(transparent)]
    BoardState(#[from] BoardStateError),
    #[error(transparent)]
    Square(#[from] ParseSquareError),
    #[error(transparent)]
    Option(#[from] OptionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<Command, CommandError> {
        s.parse()
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(parse("startpos"), Ok(Command::StartPos));
        assert_eq!(parse("moves"), Ok(Command::Moves));
        assert_eq!(parse("ai"), Ok(Command::Ai));
        assert_eq!(parse("eval"), Ok(Command::Eval));
        assert_eq!(parse("print"), Ok(Command::Print));
        assert_eq!(parse("  quit  "), Ok(Command::Quit));
    }

    #[test]
    fn test_state_command() {
        let start = BoardState::START;

        assert_eq!(
            parse(&format!("state {start}")),
            Ok(Command::State {
                state: BoardState::start(),
                side: None
            })
        );
        assert_eq!(
            parse(&format!("state {start} b")),
            Ok(Command::State {
                state: BoardState::start(),
                side: Some(Colour::Black)
            })
        );
        assert_eq!(
            parse(&format!("state {start} x")),
            Err(CommandError::InvalidSide("x".to_string()))
        );
        assert_eq!(
            parse("state 0000"),
            Err(CommandError::BoardState(BoardStateError::InvalidLength(4)))
        );
        assert_eq!(parse("state"), Err(CommandError::MissingArgument("state")));
    }

    #[test]
    fn test_play_command() {
        let expected = Command::Play {
            from: Square::E2,
            to: Square::E4,
        };

        assert_eq!(parse("play e2e4"), Ok(expected));
        assert_eq!(parse("play e2 e4").ok(), Some(Command::Play {
            from: Square::E2,
            to: Square::E4
        }));
        assert_eq!(parse("play e2e"), Err(CommandError::InvalidMove("e2e".to_string())));
        assert_eq!(
            parse("play i2e4"),
            Err(CommandError::Square(ParseSquareError::InvalidFileChar('i')))
        );
        assert_eq!(parse("play"), Err(CommandError::MissingArgument("play")));
    }

    #[test]
    fn test_go_command() {
        assert_eq!(parse("go"), Ok(Command::Go(None)));
        assert_eq!(parse("go depth 3"), Ok(Command::Go(Some(3))));
        assert_eq!(parse("go depth 0"), Ok(Command::Go(Some(0))));
        assert_eq!(parse("go depth 99"), Err(CommandError::InvalidDepth("99".to_string())));
        assert_eq!(parse("go depth"), Err(CommandError::MissingArgument("go depth")));
    }

    #[test]
    fn test_targets_and_perft() {
        assert_eq!(parse("targets g1"), Ok(Command::Targets(Square::G1)));
        assert_eq!(parse("perft 3"), Ok(Command::Perft(3)));
        assert_eq!(parse("perft x"), Err(CommandError::InvalidDepth("x".to_string())));
        assert_eq!(parse("perft 0"), Err(CommandError::InvalidDepth("0".to_string())));
        assert_eq!(parse("perft 12"), Err(CommandError::InvalidDepth("12".to_string())));
        assert_eq!(
            parse(&format!("perft {MAX_PERFT_DEPTH}")),
            Ok(Command::Perft(MAX_PERFT_DEPTH))
        );
    }

    #[test]
    fn test_setoption_command() {
        assert_eq!(
            parse("setoption name Depth value 5"),
            Ok(Command::SetOption(EngineOption::Depth(5)))
        );
        assert_eq!(
            parse("setoption name Threads value 2"),
            Err(CommandError::Option(OptionError::UnknownOption("Threads".to_string())))
        );
        assert_eq!(
            parse("setoption Depth 5"),
            Err(CommandError::MissingArgument("setoption name"))
        );
    }

    #[test]
    fn test_unknown_and_empty() {
        assert_eq!(parse(""), Err(CommandError::Empty));
        assert_eq!(parse("uci"), Err(CommandError::Unknown("uci".to_string())));
    }
}
