use crate::game::{Board, Cell};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

fn cell_span(cell: Cell) -> Span<'static> {
    let (symbol, color) = match cell {
        Cell::Empty => (" . ", Color::DarkGray),
        Cell::Red => (" \u{25cf} ", Color::Red),
        Cell::Yellow => (" \u{25cf} ", Color::Yellow),
    };
    Span::styled(symbol, Style::default().fg(color))
}

/// Lines of a framed board with column numbers on top and, when a column is
/// selected, an indicator underneath.
pub fn board_lines(board: &Board, selected_column: Option<usize>) -> Vec<Line<'static>> {
    let cols = board.cols();
    let mut lines = Vec::with_capacity(board.rows() + 4);

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..cols {
        let label = format!("{:^3}", col + 1);
        if Some(col) == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let rule = "\u{2550}".repeat(cols * 3 + 1);
    lines.push(Line::from(format!("  \u{2554}{rule}\u{2557}")));

    for row in 0..board.rows() {
        let mut row_spans = vec![Span::raw("  \u{2551}")];
        row_spans.extend((0..cols).map(|col| cell_span(board.get(row, col))));
        row_spans.push(Span::raw(" \u{2551}"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  \u{255a}{rule}\u{255d}")));

    if let Some(selected) = selected_column {
        let mut indicator_line = vec![Span::raw("   ")];
        for col in 0..cols {
            if col == selected {
                indicator_line.push(Span::styled(" \u{25b2} ", Style::default().fg(Color::Cyan)));
            } else {
                indicator_line.push(Span::raw("   "));
            }
        }
        indicator_line.push(Span::raw("  "));
        lines.push(Line::from(indicator_line));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn board_lines_frame_every_row() {
        let board = Board::standard();
        let lines = board_lines(&board, None);
        // numbers, top border, 6 rows, bottom border
        assert_eq!(lines.len(), 9);
        let width = text(&lines[1]).chars().count();
        for line in &lines[1..] {
            assert_eq!(text(line).chars().count(), width);
        }
    }

    #[test]
    fn board_lines_show_pieces_and_selection() {
        let mut board = Board::new(4, 5);
        board.apply_move(1, Player::Red);
        let lines = board_lines(&board, Some(1));
        assert_eq!(lines.len(), 4 + 4);
        assert!(text(&lines[5]).contains('\u{25cf}'));
        let expected = format!("{}\u{25b2}{}", " ".repeat(7), " ".repeat(12));
        assert_eq!(text(&lines[7]), expected);
    }
}
