use std::io::{self, BufRead, Write};

use chess::{Colour, Move};

use super::command::Command;
use super::engine::{Engine, EngineError};
use crate::search::SearchResult;

/// # Interface
///
/// Line-oriented front end over an [`Engine`]. Each input line is one
/// [`Command`]; replies go to the output, diagnostics go to the log.
///
/// When an AI side is set, the engine answers on its own whenever a command
/// leaves that side to move.
pub struct Interface {
    engine: Engine,
    ai_side: Option<Colour>,
}

impl Interface {
    pub fn new(engine: Engine, ai_side: Option<Colour>) -> Self {
        Self { engine, ai_side }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Reads commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> io::Result<()> {
        // The AI may be the side to move before any command arrives
        self.reply_if_ai(output)?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            if !self.handle_line(&line, output)? {
                break;
            }
        }

        output.flush()
    }

    /// Runs one command line. Returns `false` once the session should end.
    pub fn handle_line<W: Write>(&mut self, line: &str, output: &mut W) -> io::Result<bool> {
        match line.parse::<Command>() {
            Ok(Command::Quit) => return Ok(false),
            Ok(command) => {
                tracing::debug!(?command, "command received");
                self.handle_command(command, output)?;
            }
            Err(e) => Self::report(output, &e)?,
        }

        output.flush()?;
        Ok(true)
    }

    fn handle_command<W: Write>(&mut self, command: Command, output: &mut W) -> io::Result<()> {
        match command {
            Command::State { state, side } => {
                self.engine.set_state(state, side.unwrap_or(Colour::White));
                self.print_turn(output)?;
                self.reply_if_ai(output)?;
            }
            Command::StartPos => {
                self.engine.reset();
                self.print_turn(output)?;
                self.reply_if_ai(output)?;
            }
            Command::Moves => self.print_moves(output)?,
            Command::Targets(square) => {
                let targets = self.engine.targets(square);
                let squares: Vec<String> = targets.iter().map(|sq| sq.to_string()).collect();
                writeln!(output, "targets {square}: {}", squares.join(" "))?;
            }
            Command::Play { from, to } => match self.engine.play(from, to) {
                Ok((move_, _)) => {
                    writeln!(output, "played {move_}")?;
                    self.print_turn(output)?;
                    self.reply_if_ai(output)?;
                }
                Err(e) => Self::report(output, &e)?,
            },
            Command::Go(depth) => {
                let result = match depth {
                    Some(depth) => self.engine.think_depth(depth as usize),
                    None => self.engine.think(),
                };
                Self::print_result(output, &result)?;
            }
            Command::Ai => self.ai_move(output)?,
            Command::Eval => writeln!(output, "eval {}", self.engine.eval())?,
            Command::Perft(depth) => {
                let divide = self.engine.perft(depth);
                for (move_, nodes) in &divide {
                    writeln!(output, "{move_}: {nodes}")?;
                }
                let total: u64 = divide.iter().map(|(_, nodes)| nodes).sum();
                writeln!(output, "nodes {total}")?;
            }
            Command::Print => {
                writeln!(output, "{}", self.engine.state())?;
                writeln!(output, "Side: {}", self.engine.side())?;
            }
            Command::SetOption(option) => match self.engine.set_option(option) {
                Ok(()) => writeln!(output, "option {option}")?,
                Err(e) => Self::report(output, &e)?,
            },
            Command::Quit => {}
        }

        Ok(())
    }

    fn ai_move<W: Write>(&mut self, output: &mut W) -> io::Result<()> {
        match self.engine.ai_move() {
            Ok((move_, result)) => {
                Self::print_ai_move(output, move_, &result)?;
                self.print_turn(output)
            }
            Err(e) => Self::report(output, &e),
        }
    }

    /// Plays one AI move if the AI is the side to move.
    fn reply_if_ai<W: Write>(&mut self, output: &mut W) -> io::Result<()> {
        if self.ai_side != Some(self.engine.side()) {
            return Ok(());
        }

        match self.engine.ai_move() {
            Ok((move_, result)) => {
                Self::print_ai_move(output, move_, &result)?;
                self.print_turn(output)
            }
            Err(EngineError::NoMoves(side)) => writeln!(output, "{side} has no moves"),
            Err(e) => Self::report(output, &e),
        }
    }

    fn print_turn<W: Write>(&self, output: &mut W) -> io::Result<()> {
        writeln!(
            output,
            "{} to move, {} moves",
            self.engine.side(),
            self.engine.moves().len()
        )
    }

    fn print_moves<W: Write>(&self, output: &mut W) -> io::Result<()> {
        let moves: Vec<String> = self.engine.moves().iter().map(Move::to_string).collect();
        writeln!(output, "moves {}", moves.join(" "))
    }

    fn print_ai_move<W: Write>(output: &mut W, move_: Move, result: &SearchResult) -> io::Result<()> {
        writeln!(
            output,
            "ai plays {move_} score {} nodes {} depth {}",
            result.score, result.nodes, result.depth
        )
    }

    fn print_result<W: Write>(output: &mut W, result: &SearchResult) -> io::Result<()> {
        let best = result
            .best_move
            .map_or_else(|| "none".to_string(), |move_| move_.to_string());

        writeln!(
            output,
            "bestmove {best} score {} nodes {} depth {}",
            result.score, result.nodes, result.depth
        )
    }

    fn report<W: Write>(output: &mut W, error: &dyn std::error::Error) -> io::Result<()> {
        tracing::warn!(%error, "command rejected");
        writeln!(output, "error: {error}")
    }
}
