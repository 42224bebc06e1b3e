use crate::ai::Difficulty;
use crate::game::{GameState, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::board_lines;

/// What the game screen shows besides the board itself.
pub struct GameView<'a> {
    pub state: &'a GameState,
    pub selected_column: Option<usize>,
    pub message: Option<&'a str>,
    pub difficulty: Option<Difficulty>,
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    }
}

fn screen_layout(area: Rect, body_height: u16, controls_height: u16) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Header
            Constraint::Min(body_height),        // Board or menu
            Constraint::Length(3),               // Message
            Constraint::Length(controls_height), // Controls
        ])
        .split(area)
}

pub fn render(frame: &mut Frame, view: &GameView) {
    let board_height = view.state.board().rows() as u16 + 4;
    let chunks = screen_layout(frame.area(), board_height, 3);

    render_header(frame, view, chunks[0]);
    let board = Paragraph::new(board_lines(view.state.board(), view.selected_column))
        .alignment(Alignment::Center);
    frame.render_widget(board, chunks[1]);
    render_message(frame, view.message, chunks[2]);
    render_controls(
        frame,
        "\u{2190}/\u{2192}: Move  |  Enter: Drop  |  1-9: Column  |  Q: Quit",
        chunks[3],
    );
}

pub fn render_difficulty_menu(frame: &mut Frame, cursor: usize, message: Option<&str>) {
    let chunks = screen_layout(frame.area(), Difficulty::ALL.len() as u16 + 2, 3);

    let header = Paragraph::new("Select AI difficulty")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));
    frame.render_widget(header, chunks[0]);

    let items: Vec<Line> = Difficulty::ALL
        .iter()
        .enumerate()
        .map(|(i, difficulty)| {
            let label = format!("{}. {difficulty}", i + 1);
            if i == cursor {
                Line::from(Span::styled(
                    format!("> {label} <"),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(label)
            }
        })
        .collect();
    let menu = Paragraph::new(items)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(menu, chunks[1]);

    render_message(frame, message, chunks[2]);
    render_controls(frame, "\u{2191}/\u{2193}: Choose  |  Enter: Start  |  Q: Quit", chunks[3]);
}

fn render_header(frame: &mut Frame, view: &GameView, area: Rect) {
    let current_player = view.state.current_player();
    let mode = view
        .difficulty
        .map(|d| format!("AI: {d}"))
        .unwrap_or_default();

    let status = if view.state.is_terminal() {
        format!("Game Over  |  {mode}")
    } else {
        format!("Current Player: {}  |  {mode}", current_player.name())
    };

    let header = Paragraph::new(status)
        .style(
            Style::default()
                .fg(player_color(current_player))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, help: &str, area: Rect) {
    let controls = Paragraph::new(Line::from(help.to_string()))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn game_screen_shows_player_and_difficulty() {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        let mut state = GameState::initial();
        state.play(3).unwrap();
        let view = GameView {
            state: &state,
            selected_column: Some(3),
            message: Some("Column is full!"),
            difficulty: Some(Difficulty::Hard),
        };
        terminal.draw(|f| render(f, &view)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Current Player: Yellow"));
        assert!(text.contains("AI: Hard"));
        assert!(text.contains("Column is full!"));
    }

    #[test]
    fn menu_highlights_cursor() {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|f| render_difficulty_menu(f, 3, None))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("> 4. Expert <"));
        assert!(text.contains("1. Easy"));
    }
}
