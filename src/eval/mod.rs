//! Position evaluation
//!
//! - [`patterns`]: fixed pattern tables
//! - [`heuristic`]: scoring of a single line
//! - [`cache`]: per-line score cache updated incrementally after each move

pub mod cache;
pub mod heuristic;
pub mod patterns;

pub use cache::ScoreCache;
pub use heuristic::evaluate_line;
pub use patterns::PatternScore;
