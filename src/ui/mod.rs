//! Front-ends: the `GameUi` capability the driver talks to, a line-oriented
//! text interface, and a full-screen terminal interface.

pub mod board_widget;
mod cli;
mod game_view;
mod terminal;

use std::io;

use crate::ai::Difficulty;
use crate::game::{GameOutcome, GameState, Player};

pub use cli::CliUi;
pub use terminal::TerminalUi;

/// Everything the driver needs from a front-end. The board and the engine
/// never depend on this.
pub trait GameUi {
    /// Show the current position.
    fn render(&mut self, state: &GameState) -> io::Result<()>;

    /// Ask the human for a legal column. `None` means the human quit.
    fn get_human_move(&mut self, state: &GameState) -> io::Result<Option<usize>>;

    /// Called before the AI starts searching.
    fn show_thinking(&mut self, _state: &GameState) -> io::Result<()> {
        Ok(())
    }

    /// Announce the result of a finished game.
    fn display_winner(
        &mut self,
        state: &GameState,
        outcome: GameOutcome,
        human: Player,
    ) -> io::Result<()>;

    /// Let the human pick a tier, `default` preselected. `None` means quit.
    fn show_difficulty_selection(&mut self, default: Difficulty) -> io::Result<Option<Difficulty>>;

    /// Ask whether to play again.
    fn handle_game_end(&mut self) -> io::Result<bool>;
}

/// Result line shown to the human at the end of a game.
pub fn outcome_message(outcome: GameOutcome, human: Player) -> &'static str {
    match outcome {
        GameOutcome::Winner(p) if p == human => "You win! Congratulations!",
        GameOutcome::Winner(_) => "AI wins! Better luck next time!",
        GameOutcome::Draw => "It's a draw!",
    }
}
