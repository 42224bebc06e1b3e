//! Turn loop connecting a front-end, the board, and the AI.

use std::io;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::ai::{Agent, Difficulty, MinimaxAgent};
use crate::config::AppConfig;
use crate::game::{GameOutcome, GameState, Player, StateError};
use crate::ui::GameUi;

/// Play human-versus-AI games through `ui` until the human quits or declines
/// a rematch. With a `preset` difficulty the selection menu is skipped.
pub fn run(ui: &mut dyn GameUi, config: &AppConfig, preset: Option<Difficulty>) -> io::Result<()> {
    config
        .validate()
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    let human = config.game.human;
    let mut default_difficulty = config.ai.difficulty();
    let mut ai = match config.ai.seed {
        Some(seed) => MinimaxAgent::seeded(human.other(), default_difficulty, seed),
        None => MinimaxAgent::new(human.other(), default_difficulty),
    };
    let mut state = GameState::new(config.board.rows, config.board.cols, config.game.first);

    loop {
        let difficulty = match preset {
            Some(difficulty) => difficulty,
            None => match ui.show_difficulty_selection(default_difficulty)? {
                Some(difficulty) => difficulty,
                None => return Ok(()),
            },
        };
        ai.set_level(difficulty);
        default_difficulty = difficulty;

        state.reset();
        let Some(outcome) = play_game(ui, &mut state, &mut ai, human)? else {
            return Ok(());
        };
        ui.display_winner(&state, outcome, human)?;
        if !ui.handle_game_end()? {
            return Ok(());
        }
    }
}

/// Play one game from the current state. Returns `None` if the human quit.
pub fn play_game<R: Rng>(
    ui: &mut dyn GameUi,
    state: &mut GameState,
    ai: &mut MinimaxAgent<R>,
    human: Player,
) -> io::Result<Option<GameOutcome>> {
    info!(
        human = human.name(),
        ai = ai.player().name(),
        difficulty = %ai.difficulty(),
        first = state.current_player().name(),
        "game started"
    );
    ui.render(state)?;

    loop {
        if let Some(outcome) = state.outcome() {
            info!(?outcome, moves = state.board().piece_count(), "game over");
            return Ok(Some(outcome));
        }

        let player = state.current_player();
        let column = if player == human {
            match ui.get_human_move(state)? {
                Some(column) => column,
                None => {
                    info!("human quit");
                    return Ok(None);
                }
            }
        } else {
            ui.show_thinking(state)?;
            match ai.choose_move(state.board()) {
                Some(column) => column,
                // No legal move means the board is full and the outcome is set
                None => return Ok(state.outcome()),
            }
        };

        match state.play(column) {
            Ok(row) => {
                debug!(player = player.name(), row, column, "move played");
                ui.render(state)?;
            }
            Err(err) => warn!(player = player.name(), column, %err, "move rejected"),
        }
    }
}

/// Play one game between two agents from the current state.
pub fn play_agents(
    state: &mut GameState,
    red: &mut dyn Agent,
    yellow: &mut dyn Agent,
) -> Result<GameOutcome, StateError> {
    loop {
        if let Some(outcome) = state.outcome() {
            return Ok(outcome);
        }
        let agent: &mut dyn Agent = match state.current_player() {
            Player::Red => &mut *red,
            Player::Yellow => &mut *yellow,
        };
        let column = agent.select_action(state.board()).ok_or(StateError::GameOver)?;
        state.play(column)?;
    }
}
