use crate::game::{Board, Cell, GameEngine, GameStatus, PieceColor, PlayerId};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render(
    frame: &mut Frame,
    game: &GameEngine,
    selected_column: usize,
    message: Option<&str>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                             // Header
            Constraint::Min(board_height(game.board().rows())), // Board
            Constraint::Length(3),                             // Message
            Constraint::Length(3),                             // Controls
        ])
        .split(frame.area());

    render_header(frame, game, chunks[0]);
    render_board(frame, game, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

/// Lines needed for `rows` board rows plus selector and borders, clamped to
/// what a terminal layout can express.
fn board_height(rows: usize) -> u16 {
    u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(4)
}

/// Terminal color for a palette entry
pub fn to_color(color: PieceColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::Rgb(r, g, b)
}

fn player_color(game: &GameEngine, id: PlayerId) -> Color {
    to_color(game.player(id).color)
}

fn render_header(frame: &mut Frame, game: &GameEngine, area: Rect) {
    let (status, color) = match game.status() {
        GameStatus::InProgress => {
            let id = game.current_player();
            (
                format!("Current Player: {}", game.player(id).name),
                player_color(game, id),
            )
        }
        GameStatus::Won(id) => (
            format!("Game Over  |  {} won!", game.player(id).name),
            player_color(game, id),
        ),
        GameStatus::Tied => ("Game Over  |  Tie!".to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

/// Lines for the board with the column selector above and below.
pub fn board_lines(game: &GameEngine, selected_column: usize) -> Vec<Line<'static>> {
    let board: &Board = game.board();
    let columns = board.columns();
    let open_columns = board.legal_columns();
    let mut lines = Vec::new();

    // Column numbers with selection indicator; hidden once the game is over
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..columns {
        let label = format!("{:^3}", col + 1);
        if col == selected_column && !game.is_game_over() {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else if !open_columns.contains(&col) {
            col_line.push(Span::styled(label, Style::default().fg(Color::DarkGray)));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let rule = "═".repeat(columns * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..board.rows() {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..columns {
            let span = match board.get(row, col) {
                Cell::Empty => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
                Cell::Occupied(id) => {
                    let mut style = Style::default().fg(player_color(game, id));
                    if game.last_move() == Some((row, col)) {
                        style = style.add_modifier(Modifier::BOLD);
                    }
                    Span::styled(" ● ", style)
                }
            };
            row_spans.push(span);
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    if !game.is_game_over() {
        let mut indicator_line = vec![Span::raw("   ")];
        for col in 0..columns {
            if col == selected_column {
                indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
            } else {
                indicator_line.push(Span::raw("   "));
            }
        }
        indicator_line.push(Span::raw("  "));
        lines.push(Line::from(indicator_line));
    }

    lines
}

fn render_board(frame: &mut Frame, game: &GameEngine, selected_column: usize, area: Rect) {
    let board_widget =
        Paragraph::new(board_lines(game, selected_column)).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("←/→: Move  |  Enter or 1-9: Drop  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
