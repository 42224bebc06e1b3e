use std::cell::Cell;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::game::{Board, GameOutcome, Player};

use super::agent::Agent;
use super::difficulty::{Difficulty, DifficultyProfile};
use super::heuristic::{Heuristic, WindowHeuristic};

/// Score of a decided game, from the winner's side.
pub const WIN_SCORE: f64 = 10_000.0;

/// Boards with at most this many pieces count as the opening.
const OPENING_PIECES: usize = 3;
/// Chance that Easy skips the search entirely.
const EASY_RANDOM_MOVE: f64 = 0.4;
/// Chance that Easy passes up an immediate win.
const EASY_SPARE_WIN: f64 = 0.7;

/// How a column was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionKind {
    /// Easy tier played at random without searching.
    RandomEasy,
    /// Random move during the opening.
    RandomOpening,
    /// Best-scoring column of the search.
    Searched,
    /// Easy tier declined a winning move and played another column.
    Spared,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub column: usize,
    pub kind: DecisionKind,
}

/// Minimax agent with alpha-beta pruning and difficulty-dependent noise.
///
/// The random source is injected so games can be replayed from a seed.
pub struct MinimaxAgent<R = StdRng> {
    player: Player,
    difficulty: Difficulty,
    heuristic: Box<dyn Heuristic>,
    rng: R,
    nodes: Cell<u64>,
}

impl MinimaxAgent<StdRng> {
    pub fn new(player: Player, difficulty: Difficulty) -> Self {
        Self::with_rng(player, difficulty, StdRng::from_os_rng())
    }

    pub fn seeded(player: Player, difficulty: Difficulty, seed: u64) -> Self {
        Self::with_rng(player, difficulty, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MinimaxAgent<R> {
    pub fn with_rng(player: Player, difficulty: Difficulty, rng: R) -> Self {
        MinimaxAgent {
            player,
            difficulty,
            heuristic: Box::new(WindowHeuristic),
            rng,
            nodes: Cell::new(0),
        }
    }

    /// Replace the static evaluator.
    pub fn with_heuristic(mut self, heuristic: Box<dyn Heuristic>) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn opponent(&self) -> Player {
        self.player.other()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn profile(&self) -> DifficultyProfile {
        self.difficulty.profile()
    }

    /// Select a tier by name. Unrecognised names select Medium.
    pub fn set_difficulty(&mut self, name: &str) -> Difficulty {
        self.set_level(Difficulty::from_name(name));
        self.difficulty
    }

    pub fn set_level(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Nodes visited by the most recent search.
    pub fn nodes_searched(&self) -> u64 {
        self.nodes.get()
    }

    /// Column to play, or `None` if the board has no legal move.
    pub fn choose_move(&mut self, board: &Board) -> Option<usize> {
        self.decide(board).map(|decision| decision.column)
    }

    /// Like [`MinimaxAgent::choose_move`], but also reports which rule
    /// produced the column.
    pub fn decide(&mut self, board: &Board) -> Option<Decision> {
        let legal = board.legal_moves();
        if legal.is_empty() {
            return None;
        }
        self.nodes.set(0);

        let decision = self.pick(board, &legal);
        debug!(
            player = self.player.name(),
            difficulty = %self.difficulty,
            column = decision.column,
            kind = ?decision.kind,
            nodes = self.nodes.get(),
            "chose move"
        );
        Some(decision)
    }

    fn pick(&mut self, board: &Board, legal: &[usize]) -> Decision {
        let profile = self.profile();

        if self.difficulty == Difficulty::Easy && self.rng.random_bool(EASY_RANDOM_MOVE) {
            return Decision {
                column: self.random_move(legal),
                kind: DecisionKind::RandomEasy,
            };
        }

        if board.piece_count() <= OPENING_PIECES && self.rng.random_bool(profile.early_random) {
            return Decision {
                column: self.random_move(legal),
                kind: DecisionKind::RandomOpening,
            };
        }

        let column = self.search_root(board, legal, profile);

        if self.difficulty == Difficulty::Easy && self.wins_immediately(board, column) {
            let others: Vec<usize> = legal.iter().copied().filter(|&c| c != column).collect();
            if !others.is_empty() && self.rng.random_bool(EASY_SPARE_WIN) {
                return Decision {
                    column: self.random_move(&others),
                    kind: DecisionKind::Spared,
                };
            }
        }

        Decision {
            column,
            kind: DecisionKind::Searched,
        }
    }

    /// Score every legal column and keep the strictly best one; earlier
    /// columns win ties.
    fn search_root(&mut self, board: &Board, legal: &[usize], profile: DifficultyProfile) -> usize {
        let mut best_col = self.random_move(legal);
        let mut best_score = f64::NEG_INFINITY;

        for &col in legal {
            let mut child = board.clone();
            child.apply_move(col, self.player);

            let mut score = self.minimax(
                &child,
                profile.depth.saturating_sub(1),
                false,
                f64::NEG_INFINITY,
                f64::INFINITY,
            );
            if profile.jitter > 0.0 {
                score += self.rng.random_range(-profile.jitter..=profile.jitter);
            }
            trace!(column = col, score, "root move scored");

            if score > best_score {
                best_score = score;
                best_col = col;
            }
        }

        best_col
    }

    fn wins_immediately(&self, board: &Board, column: usize) -> bool {
        let mut after = board.clone();
        after.apply_move(column, self.player) && after.has_won(self.player)
    }

    fn random_move(&mut self, moves: &[usize]) -> usize {
        moves[self.rng.random_range(0..moves.len())]
    }

    /// Minimax with alpha-beta pruning. Decided positions are scored before
    /// the depth cutoff is considered.
    pub fn minimax(
        &self,
        board: &Board,
        depth: usize,
        maximizing: bool,
        mut alpha: f64,
        mut beta: f64,
    ) -> f64 {
        self.nodes.set(self.nodes.get() + 1);

        if let Some(outcome) = board.winner() {
            return match outcome {
                GameOutcome::Winner(p) if p == self.player => WIN_SCORE,
                GameOutcome::Winner(_) => -WIN_SCORE,
                GameOutcome::Draw => 0.0,
            };
        }

        if depth == 0 {
            return self.evaluate(board);
        }

        if maximizing {
            let mut value = f64::NEG_INFINITY;
            for col in board.legal_moves() {
                let mut child = board.clone();
                child.apply_move(col, self.player);
                value = value.max(self.minimax(&child, depth - 1, false, alpha, beta));
                alpha = alpha.max(value);
                if alpha >= beta {
                    break;
                }
            }
            value
        } else {
            let mut value = f64::INFINITY;
            for col in board.legal_moves() {
                let mut child = board.clone();
                child.apply_move(col, self.opponent());
                value = value.min(self.minimax(&child, depth - 1, true, alpha, beta));
                beta = beta.min(value);
                if alpha >= beta {
                    break;
                }
            }
            value
        }
    }

    /// Static evaluation from this agent's point of view.
    pub fn evaluate(&self, board: &Board) -> f64 {
        self.heuristic
            .evaluate(board, self.player, self.profile().eval_scale)
    }
}

impl<R: Rng> Agent for MinimaxAgent<R> {
    fn select_action(&mut self, board: &Board) -> Option<usize> {
        self.choose_move(board)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
