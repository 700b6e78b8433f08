use std::time::Instant;

use crate::board::{AttackTables, BoardState, generate_moves};
use crate::core::{Colour, Move};

/// Counts the leaves of the pseudo-legal move tree `depth` plies deep.
///
/// The state is played on in place with make/unmake and comes back unchanged.
pub fn perft(tables: &AttackTables, state: &mut BoardState, side: Colour, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let move_list = generate_moves(tables, state, side);

    if depth == 1 {
        return move_list.len() as u64;
    }

    let mut nodes = 0;

    for &move_ in move_list.iter() {
        let captured = state.make(move_);
        nodes += perft(tables, state, !side, depth - 1);
        state.unmake(move_, captured);
    }

    nodes
}

/// Per root move leaf counts, in generation order. Empty at depth 0, where the
/// only leaf is the root itself.
pub fn perft_divide(
    tables: &AttackTables,
    state: &mut BoardState,
    side: Colour,
    depth: usize,
) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    let start = Instant::now();

    let divide: Vec<(Move, u64)> = generate_moves(tables, state, side)
        .iter()
        .map(|&move_| {
            let captured = state.make(move_);
            let nodes = perft(tables, state, !side, depth - 1);
            state.unmake(move_, captured);
            (move_, nodes)
        })
        .collect();

    let total: u64 = divide.iter().map(|(_, nodes)| nodes).sum();
    tracing::debug!(
        depth,
        nodes = total,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "perft finished"
    );

    divide
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::movegen::TEST_TABLES;

    #[test]
    fn test_perft_start_position() {
        let mut state = BoardState::start();

        assert_eq!(perft(&TEST_TABLES, &mut state, Colour::White, 0), 1);
        assert_eq!(perft(&TEST_TABLES, &mut state, Colour::White, 1), 20);
        assert_eq!(perft(&TEST_TABLES, &mut state, Colour::White, 2), 400);
        assert_eq!(perft(&TEST_TABLES, &mut state, Colour::White, 3), 8902);
        assert_eq!(state, BoardState::start());
    }

    #[test]
    fn test_perft_black_first() {
        let mut state = BoardState::start();
        assert_eq!(perft(&TEST_TABLES, &mut state, Colour::Black, 2), 400);
    }

    #[test]
    fn test_divide_sums_to_perft() {
        let mut state = BoardState::start();
        let divide = perft_divide(&TEST_TABLES, &mut state, Colour::White, 3);

        assert_eq!(divide.len(), 20);
        assert_eq!(divide.iter().map(|(_, n)| n).sum::<u64>(), 8902);
        assert_eq!(state, BoardState::start());
    }

    #[test]
    fn test_divide_at_depth_zero_is_empty() {
        let mut state = BoardState::start();

        assert!(perft_divide(&TEST_TABLES, &mut state, Colour::White, 0).is_empty());
        assert_eq!(perft(&TEST_TABLES, &mut state, Colour::White, 0), 1);
    }

    #[test]
    fn test_divide_at_depth_one_counts_each_move_once() {
        let mut state = BoardState::start();
        let divide = perft_divide(&TEST_TABLES, &mut state, Colour::White, 1);

        assert_eq!(divide.len(), 20);
        assert!(divide.iter().all(|&(_, nodes)| nodes == 1));
    }
}
