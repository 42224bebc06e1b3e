use std::io::{self, Stdout};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::ai::Difficulty;
use crate::game::{GameOutcome, GameState, Player};

use super::game_view::{self, GameView};
use super::{outcome_message, GameUi};

/// Full-screen front-end. The terminal is restored when the value is dropped.
pub struct TerminalUi {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    selected_column: usize,
    message: Option<String>,
    difficulty: Option<Difficulty>,
}

impl TerminalUi {
    /// Switch the terminal to raw mode on the alternate screen.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err);
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(TerminalUi {
            terminal,
            selected_column: 0,
            message: None,
            difficulty: None,
        })
    }

    fn draw(&mut self, state: &GameState, show_selection: bool) -> io::Result<()> {
        let view = GameView {
            state,
            selected_column: show_selection.then_some(self.selected_column),
            message: self.message.as_deref(),
            difficulty: self.difficulty,
        };
        self.terminal.draw(|f| game_view::render(f, &view))?;
        Ok(())
    }

    /// Block until a key is pressed.
    fn next_key(&mut self) -> io::Result<KeyEvent> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(key);
                }
            }
        }
    }
}

impl Drop for TerminalUi {
    fn drop(&mut self) {
        // Restore terminal, even on error
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

impl GameUi for TerminalUi {
    fn render(&mut self, state: &GameState) -> io::Result<()> {
        self.draw(state, false)
    }

    fn get_human_move(&mut self, state: &GameState) -> io::Result<Option<usize>> {
        let board = state.board();
        let cols = board.cols();
        self.selected_column = self.selected_column.min(cols - 1);
        if state.board().piece_count() == 0 {
            self.selected_column = board.center_column();
        }

        loop {
            self.draw(state, true)?;
            let key = self.next_key()?;
            // Clear message on any key press
            self.message = None;

            let target = match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(None),
                KeyCode::Left => {
                    self.selected_column = self.selected_column.saturating_sub(1);
                    continue;
                }
                KeyCode::Right => {
                    if self.selected_column + 1 < cols {
                        self.selected_column += 1;
                    }
                    continue;
                }
                KeyCode::Enter | KeyCode::Char(' ') => self.selected_column,
                KeyCode::Char(c) => match c.to_digit(10) {
                    Some(n) if n >= 1 && (n as usize) <= cols => {
                        self.selected_column = n as usize - 1;
                        self.selected_column
                    }
                    _ => continue,
                },
                _ => continue,
            };

            if board.is_legal(target) {
                return Ok(Some(target));
            }
            self.message = Some("Column is full!".to_string());
        }
    }

    fn show_thinking(&mut self, state: &GameState) -> io::Result<()> {
        self.message = Some("AI is thinking...".to_string());
        self.draw(state, false)?;
        self.message = None;
        Ok(())
    }

    fn display_winner(
        &mut self,
        state: &GameState,
        outcome: GameOutcome,
        human: Player,
    ) -> io::Result<()> {
        self.message = Some(format!(
            "{}  Play again? (r / q)",
            outcome_message(outcome, human)
        ));
        self.draw(state, false)
    }

    fn show_difficulty_selection(&mut self, default: Difficulty) -> io::Result<Option<Difficulty>> {
        let mut cursor = Difficulty::ALL
            .iter()
            .position(|&d| d == default)
            .unwrap_or_default();

        loop {
            self.terminal
                .draw(|f| game_view::render_difficulty_menu(f, cursor, None))?;

            match self.next_key()?.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(None),
                KeyCode::Up => cursor = cursor.saturating_sub(1),
                KeyCode::Down => cursor = (cursor + 1).min(Difficulty::ALL.len() - 1),
                KeyCode::Enter | KeyCode::Char(' ') => break,
                KeyCode::Char(c) => {
                    if let Some(i) = c.to_digit(10).and_then(|n| (n as usize).checked_sub(1)) {
                        if i < Difficulty::ALL.len() {
                            cursor = i;
                            break;
                        }
                    }
                }
                _ => {}
            }
        }

        let difficulty = Difficulty::ALL[cursor];
        self.difficulty = Some(difficulty);
        self.message = Some(format!("Playing against {difficulty} AI. Good luck!"));
        Ok(Some(difficulty))
    }

    fn handle_game_end(&mut self) -> io::Result<bool> {
        loop {
            match self.next_key()?.code {
                KeyCode::Char('r') | KeyCode::Char('y') | KeyCode::Enter => {
                    self.message = None;
                    return Ok(true);
                }
                KeyCode::Char('q') | KeyCode::Char('n') | KeyCode::Esc => return Ok(false),
                _ => {}
            }
        }
    }
}
