//! # Connect Four
//!
//! Connect Four against a minimax AI with four difficulty tiers, playable in
//! a full-screen terminal UI or a plain text prompt.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, turn-tracking state
//! - [`ai`] — Agent trait, minimax search, heuristic evaluator, difficulty tiers
//! - [`driver`] — Turn loop connecting a front-end, the board, and the AI
//! - [`ui`] — Front-end capability trait, text UI, terminal UI
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod driver;
pub mod error;
pub mod game;
pub mod ui;
