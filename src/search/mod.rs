//! Search module for the computer opponent
//!
//! Contains:
//! - Spiral candidate generation around the last move
//! - Depth- and width-limited minimax with alpha-beta pruning
//! - Cooperative cancellation

pub mod alphabeta;
pub mod cancel;
pub mod candidates;

pub use alphabeta::{SearchResult, SearchStats, Searcher};
pub use cancel::{CancelToken, Cancelled};
pub use candidates::Candidates;
