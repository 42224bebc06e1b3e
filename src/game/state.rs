use super::{Board, GameOutcome, MoveError, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("column is full")]
    ColumnFull,
    #[error("column is out of range")]
    InvalidColumn,
    #[error("game is already over")]
    GameOver,
}

impl From<MoveError> for StateError {
    fn from(err: MoveError) -> Self {
        match err {
            MoveError::ColumnFull => StateError::ColumnFull,
            MoveError::InvalidColumn => StateError::InvalidColumn,
        }
    }
}

/// A board together with whose turn it is and how the game ended, if it has.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    first_player: Player,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Start a game on an empty board of the given size
    pub fn new(rows: usize, cols: usize, first_player: Player) -> Self {
        GameState {
            board: Board::new(rows, cols),
            first_player,
            current_player: first_player,
            outcome: None,
        }
    }

    /// Create initial game state: standard board, Red starts
    pub fn initial() -> Self {
        Self::new(super::ROWS, super::COLS, Player::Red)
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_moves()
    }

    /// Play a move for the current player, returns the row where it landed.
    /// The outcome is re-checked after every move.
    pub fn play(&mut self, column: usize) -> Result<usize, StateError> {
        if self.is_terminal() {
            return Err(StateError::GameOver);
        }

        let row = self.board.drop_piece(column, self.current_player)?;
        self.outcome = self.board.winner();
        if self.outcome.is_none() {
            self.current_player = self.current_player.other();
        }

        Ok(row)
    }

    /// Clear the board for a rematch
    pub fn reset(&mut self) {
        self.board.reset();
        self.current_player = self.first_player;
        self.outcome = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::Red);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_actions().len(), 7);
    }

    #[test]
    fn test_play() {
        let mut state = GameState::initial();
        let row = state.play(3).unwrap();

        assert_eq!(row, 5);
        assert_eq!(state.current_player(), Player::Yellow);
        assert_eq!(state.board().get(5, 3), Cell::Red);
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut state = GameState::new(4, 4, Player::Yellow);
        assert_eq!(state.play(9), Err(StateError::InvalidColumn));
        assert_eq!(state.current_player(), Player::Yellow);

        for _ in 0..4 {
            state.play(0).unwrap();
        }
        assert_eq!(state.play(0), Err(StateError::ColumnFull));
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::initial();

        // Red wins with horizontal line
        for col in 0..4 {
            state.play(col).unwrap(); // Red
            if col < 3 {
                state.play(col).unwrap(); // Yellow (different row)
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Red)));
        // The winner stays the current player
        assert_eq!(state.current_player(), Player::Red);
        assert!(state.legal_actions().is_empty());
        assert_eq!(state.play(6), Err(StateError::GameOver));
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut state = GameState::initial();
        let order = [0, 1, 0, 1, 2, 3, 2, 3, 4, 5, 4, 5, 6, 0, 6, 0];
        for &col in &order {
            state.play(col).unwrap();
        }
        assert!(!state.is_terminal());

        state.reset();
        assert_eq!(state, GameState::initial());
    }
}
