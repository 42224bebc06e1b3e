use std::io::{self, BufRead, Write};

use crate::ai::Difficulty;
use crate::game::{GameOutcome, GameState, Player};

use super::{outcome_message, GameUi};

/// Plain text front-end reading answers line by line.
pub struct CliUi<R, W> {
    input: R,
    output: W,
}

impl CliUi<io::StdinLock<'static>, io::Stdout> {
    /// Text UI on the process's stdin and stdout.
    pub fn stdio() -> Self {
        CliUi::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliUi<R, W> {
    pub fn new(input: R, output: W) -> Self {
        CliUi { input, output }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Print a prompt and read one trimmed line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

fn is_quit(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("q") || answer.eq_ignore_ascii_case("quit")
}

impl<R: BufRead, W: Write> GameUi for CliUi<R, W> {
    fn render(&mut self, state: &GameState) -> io::Result<()> {
        writeln!(self.output, "\nConnect Four\n")?;
        write!(self.output, "{}", state.board())?;
        writeln!(self.output)
    }

    fn get_human_move(&mut self, state: &GameState) -> io::Result<Option<usize>> {
        let cols = state.board().cols();
        loop {
            let Some(answer) = self.prompt(&format!("Your move (1-{cols}, q to quit): "))? else {
                return Ok(None);
            };
            if is_quit(&answer) {
                return Ok(None);
            }
            match answer.parse::<usize>() {
                Ok(n) if n >= 1 && state.board().is_legal(n - 1) => return Ok(Some(n - 1)),
                Ok(_) => writeln!(
                    self.output,
                    "Invalid move. Column must be between 1-{cols} and not full."
                )?,
                Err(_) => writeln!(self.output, "Please enter a number between 1 and {cols}.")?,
            }
        }
    }

    fn show_thinking(&mut self, _state: &GameState) -> io::Result<()> {
        writeln!(self.output, "AI is thinking...")
    }

    fn display_winner(
        &mut self,
        _state: &GameState,
        outcome: GameOutcome,
        human: Player,
    ) -> io::Result<()> {
        let rule = "=".repeat(30);
        writeln!(self.output, "\n{rule}")?;
        writeln!(self.output, "{}", outcome_message(outcome, human))?;
        writeln!(self.output, "{rule}\n")
    }

    fn show_difficulty_selection(&mut self, default: Difficulty) -> io::Result<Option<Difficulty>> {
        writeln!(self.output, "\nSelect AI difficulty:")?;
        for (i, difficulty) in Difficulty::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {difficulty}", i + 1)?;
        }

        loop {
            let Some(answer) =
                self.prompt(&format!("Enter your choice (1-4, Enter for {default}): "))?
            else {
                return Ok(None);
            };
            if answer.is_empty() {
                return Ok(Some(default));
            }
            if is_quit(&answer) {
                return Ok(None);
            }
            let choice = match answer.parse::<usize>() {
                Ok(n) => n.checked_sub(1).and_then(|i| Difficulty::ALL.get(i).copied()),
                Err(_) => Difficulty::parse(&answer),
            };
            match choice {
                Some(difficulty) => return Ok(Some(difficulty)),
                None => writeln!(self.output, "Please enter a number between 1 and 4.")?,
            }
        }
    }

    fn handle_game_end(&mut self) -> io::Result<bool> {
        let answer = self.prompt("Play again? (y/n): ")?;
        Ok(answer.is_some_and(|a| a.to_ascii_lowercase().starts_with('y')))
    }
}
