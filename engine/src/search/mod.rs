mod search;

pub use search::{SearchResult, Searcher, choose_move};
