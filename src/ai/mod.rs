//! Move selection: the `Agent` trait, the minimax search engine with its
//! heuristic evaluator and difficulty tiers, and a random baseline.

mod agent;
mod difficulty;
pub mod heuristic;
pub mod minimax;
mod random;

pub use agent::Agent;
pub use difficulty::{Difficulty, DifficultyProfile};
pub use heuristic::{Heuristic, WindowHeuristic};
pub use minimax::{Decision, DecisionKind, MinimaxAgent, WIN_SCORE};
pub use random::RandomAgent;
