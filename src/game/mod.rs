//! Core Connect Four game logic: board representation, player types, and the
//! turn-tracking game state used by the driver.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, GameOutcome, MoveError, Window, COLS, CONNECT, ROWS};
pub use player::Player;
pub use state::{GameState, StateError};
