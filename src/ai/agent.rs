use crate::game::Board;

/// Anything that can pick a column for the side to move.
pub trait Agent {
    /// Select a column given the current board, or `None` if no column is
    /// playable.
    fn select_action(&mut self, board: &Board) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
