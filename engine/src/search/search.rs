use std::time::Instant;

use chess::{AttackTables, BoardState, Colour, Move, generate_moves};

use crate::eval::{Eval, evaluate_for};

/******************************************\
|==========================================|
|              Search Result               |
|==========================================|
\******************************************/

/// Outcome of a fixed-depth search from the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// First move reaching the best score, `None` at depth 0 or with no moves.
    pub best_move: Option<Move>,
    /// Score from the point of view of the side that was to move at the root.
    pub score: Eval,
    /// Nodes visited, root included.
    pub nodes: u64,
    pub depth: usize,
}

/******************************************\
|==========================================|
|                 Searcher                 |
|==========================================|
\******************************************/

/// Negamax with alpha-beta pruning over pseudo-legal moves.
///
/// The board being searched is passed in by `&mut` and played on with
/// make/unmake, so it holds exactly the current line at every node and is
/// restored when the search returns.
pub struct Searcher<'a> {
    tables: &'a AttackTables,
    nodes: u64,
}

impl<'a> Searcher<'a> {
    pub fn new(tables: &'a AttackTables) -> Self {
        Self { tables, nodes: 0 }
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Searches every root move `depth` plies deep and keeps the first one with
    /// the highest score.
    ///
    /// The root raises alpha as it goes, so later moves are searched with a
    /// narrower window. A later move can only replace the best one by scoring
    /// strictly higher.
    pub fn search(&mut self, board: &mut BoardState, side: Colour, depth: usize) -> SearchResult {
        self.nodes = 1;

        let static_result = |nodes| SearchResult {
            best_move: None,
            score: evaluate_for(board, side),
            nodes,
            depth,
        };

        if depth == 0 {
            return static_result(self.nodes);
        }

        let move_list = generate_moves(self.tables, board, side);
        if move_list.is_empty() {
            return static_result(self.nodes);
        }

        let mut alpha = -Eval::INFINITY;
        let beta = Eval::INFINITY;
        let mut best_move = None;
        let mut best_value = -Eval::INFINITY;

        for &move_ in move_list.iter() {
            let captured = board.make(move_);
            let value = -self.negamax(board, !side, -beta, -alpha, depth - 1);
            board.unmake(move_, captured);

            if value > best_value {
                best_value = value;
                best_move = Some(move_);
            }

            if value > alpha {
                alpha = value;
            }
        }

        SearchResult {
            best_move,
            score: best_value,
            nodes: self.nodes,
            depth,
        }
    }

    /// Score of `board` for `side`, at most `depth` plies deep.
    ///
    /// Fail-soft: a result at or below `alpha` is an upper bound, one at or above
    /// `beta` a lower bound, anything in between is exact. Leaves and positions
    /// without moves score as plain material for the side to move.
    fn negamax(
        &mut self,
        board: &mut BoardState,
        side: Colour,
        mut alpha: Eval,
        beta: Eval,
        depth: usize,
    ) -> Eval {
        self.nodes += 1;

        if depth == 0 {
            return evaluate_for(board, side);
        }

        let move_list = generate_moves(self.tables, board, side);
        if move_list.is_empty() {
            return evaluate_for(board, side);
        }

        let mut best_value = -Eval::INFINITY;

        for &move_ in move_list.iter() {
            let captured = board.make(move_);
            let value = -self.negamax(board, !side, -beta, -alpha, depth - 1);
            board.unmake(move_, captured);

            if value > best_value {
                best_value = value;
            }

            if value > alpha {
                alpha = value;
            }

            // Beta cutoff
            if alpha >= beta {
                break;
            }
        }

        best_value
    }
}

/// Picks the move for `side` in `state` with a `depth` ply search.
///
/// Searches a private copy of `state`, so the caller's board is never touched.
pub fn choose_move(
    tables: &AttackTables,
    state: &BoardState,
    side: Colour,
    depth: usize,
) -> SearchResult {
    let start = Instant::now();
    let mut board = state.clone();

    let result = Searcher::new(tables).search(&mut board, side, depth);

    tracing::debug!(
        %side,
        depth,
        score = result.score.0,
        nodes = result.nodes,
        best_move = %result.best_move.map_or_else(|| "none".to_string(), |mv| mv.to_string()),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "search finished"
    );

    result
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
