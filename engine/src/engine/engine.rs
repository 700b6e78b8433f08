use std::sync::Arc;

use chess::{
    AttackTables, Bitboard, BoardState, BoardStateError, Colour, Move, MoveList, Piece, Square,
    generate_moves, utils::perft_divide,
};
use thiserror::Error;

use super::options::{EngineOption, EngineOptions, OptionError};
use crate::eval::{Eval, evaluate};
use crate::search::{SearchResult, choose_move};

/// # Engine
///
/// One game session: the board, the side to move and the moves that side has.
///
/// The move list is regenerated every time the board or the side changes, so
/// it always belongs to the current position. A move submitted from outside is
/// checked against it before anything is played.
pub struct Engine {
    tables: Arc<AttackTables>,
    state: BoardState,
    side: Colour,
    moves: MoveList,
    options: EngineOptions,
}

impl Engine {
    /// Builds fresh attack tables and starts from the standard position.
    pub fn new(options: EngineOptions) -> Self {
        Self::with_tables(Arc::new(AttackTables::new()), options)
    }

    /// Starts from the standard position reusing already built tables.
    pub fn with_tables(tables: Arc<AttackTables>, options: EngineOptions) -> Self {
        let state = BoardState::start();
        let moves = generate_moves(&tables, &state, Colour::White);

        Self {
            tables,
            state,
            side: Colour::White,
            moves,
            options,
        }
    }

    pub fn tables(&self) -> &Arc<AttackTables> {
        &self.tables
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn side(&self) -> Colour {
        self.side
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// Pseudo-legal moves for the side to move.
    pub fn moves(&self) -> &MoveList {
        &self.moves
    }

    /// Destinations open to whatever stands on `square` for the side to move.
    pub fn targets(&self, square: Square) -> Bitboard {
        self.moves.targets_from(square)
    }

    /******************************************\
    |==========================================|
    |                Position                  |
    |==========================================|
    \******************************************/

    pub fn set_state(&mut self, state: BoardState, side: Colour) {
        self.state = state;
        self.side = side;
        self.refresh();

        tracing::info!(
            state = %self.state.to_state_string(),
            %side,
            moves = self.moves.len(),
            "board set"
        );
    }

    /// Parses a 64 character board state; `side` defaults to White.
    pub fn load(&mut self, state: &str, side: Option<Colour>) -> Result<(), EngineError> {
        let state = state.parse::<BoardState>()?;
        self.set_state(state, side.unwrap_or(Colour::White));

        Ok(())
    }

    /// Back to the standard position with White to move.
    pub fn reset(&mut self) {
        self.set_state(BoardState::start(), Colour::White);
    }

    /// Plays the move `from`-`to` for the side to move, then hands the turn over.
    ///
    /// Returns the move as played and whatever it captured.
    pub fn play(&mut self, from: Square, to: Square) -> Result<(Move, Option<Piece>), EngineError> {
        let move_ = self
            .moves
            .find(from, to)
            .ok_or(EngineError::IllegalMove { from, to })?;

        let captured = self.state.make(move_);
        self.side = !self.side;
        self.refresh();

        tracing::info!(
            %move_,
            captured = ?captured,
            side = %self.side,
            moves = self.moves.len(),
            "move played"
        );

        Ok((move_, captured))
    }

    fn refresh(&mut self) {
        self.moves = generate_moves(&self.tables, &self.state, self.side);
    }

    /******************************************\
    |==========================================|
    |                 Search                   |
    |==========================================|
    \******************************************/

    /// Searches at the configured depth without touching the board.
    pub fn think(&self) -> SearchResult {
        self.think_depth(self.options.depth as usize)
    }

    pub fn think_depth(&self, depth: usize) -> SearchResult {
        choose_move(&self.tables, &self.state, self.side, depth)
    }

    /// Searches, then plays the chosen move.
    pub fn ai_move(&mut self) -> Result<(Move, SearchResult), EngineError> {
        let result = self.think();
        let move_ = result.best_move.ok_or(EngineError::NoMoves(self.side))?;

        self.play(move_.from(), move_.to())?;

        Ok((move_, result))
    }

    /// Material balance, White positive.
    pub fn eval(&self) -> Eval {
        evaluate(&self.state)
    }

    /// Leaf counts per root move for the side to move.
    pub fn perft(&self, depth: usize) -> Vec<(Move, u64)> {
        let mut scratch = self.state.clone();
        perft_divide(&self.tables, &mut scratch, self.side, depth)
    }

    /// Applies an option change. Out of range values leave the options as they were.
    pub fn set_option(&mut self, option: EngineOption) -> Result<(), EngineError> {
        self.options.apply(option)?;
        tracing::info!(%option, "option set");

        Ok(())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Illegal move: {from}{to}")]
    IllegalMove { from: Square, to: Square },
    #[error("No moves available for {0}")]
    NoMoves(Colour),
    #[error(transparent)]
    BoardState(#[from] BoardStateError),
    #[error(transparent)]
    Option(#[from] OptionError),
}
