use crate::game::{Board, Cell, Player, CONNECT};

/// Trait for evaluating a board position from a player's perspective.
///
/// `scale` dampens the positional terms; weaker difficulty tiers pass a
/// smaller value so they judge positions less sharply.
pub trait Heuristic {
    fn evaluate(&self, board: &Board, player: Player, scale: f64) -> f64;
}

/// Default heuristic: center-column control plus every 4-cell window scored
/// by how close each side is to completing it.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowHeuristic;

impl WindowHeuristic {
    /// Score one window for `player`. Own and opponent terms are independent,
    /// so a window holding pieces of both sides scores nothing.
    pub fn evaluate_window(window: [Cell; CONNECT], player: Player, scale: f64) -> f64 {
        let own_cell = player.to_cell();
        let opp_cell = player.other().to_cell();
        let own = window.iter().filter(|&&c| c == own_cell).count();
        let opp = window.iter().filter(|&&c| c == opp_cell).count();
        let empty = CONNECT - own - opp;

        let mut score = 0.0;
        match (own, empty) {
            (4, _) => score += 100.0,
            (3, 1) => score += 5.0 * scale,
            (2, 2) => score += 2.0 * scale,
            _ => {}
        }
        match (opp, empty) {
            (3, 1) => score -= 8.0 * scale,
            (2, 2) => score -= 2.0 * scale,
            _ => {}
        }
        score
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player, scale: f64) -> f64 {
        let own_cell = player.to_cell();
        let center = board.center_column();

        let center_count = (0..board.rows())
            .filter(|&row| board.get(row, center) == own_cell)
            .count();
        let mut score = center_count as f64 * 3.0 * scale;

        for window in board.windows() {
            score += Self::evaluate_window(board.window_cells(&window), player, scale);
        }

        score
    }
}
