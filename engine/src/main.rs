use std::io;

use chess::Colour;
use clap::{Parser, ValueEnum};
use engine::{DEFAULT_DEPTH, Engine, EngineOptions, Interface};
use tracing_subscriber::EnvFilter;

/// Bitboard chess engine speaking a line-oriented text protocol on stdin/stdout.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Search depth in plies (1-8)
    #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
    depth: u8,

    /// Log filter, overrides RUST_LOG (e.g. "info", "engine=debug")
    #[arg(long)]
    log_level: Option<String>,

    /// Side the engine plays automatically
    #[arg(short, long, value_enum)]
    side: Option<Side>,

    /// Initial 64 character board state, White to move
    #[arg(long)]
    state: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Side {
    White,
    Black,
}

impl From<Side> for Colour {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Colour::White,
            Side::Black => Colour::Black,
        }
    }
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.log_level.as_deref());

    let options = EngineOptions {
        depth: EngineOptions::check_depth(args.depth)?,
    };

    let mut engine = Engine::new(options);
    if let Some(state) = &args.state {
        engine.load(state, None)?;
    }

    let mut interface = Interface::new(engine, args.side.map(Colour::from));

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    interface.run(stdin, &mut stdout)?;

    Ok(())
}
