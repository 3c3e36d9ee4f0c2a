use super::board_widget::{board_lines, player_color, tint_color};
use crate::scene::{BoardTint, Scene};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, scene: &Scene, message: &Option<String>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, scene, chunks[0]);
    render_board(frame, scene, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, scene, chunks[3]);
}

fn status_line(scene: &Scene) -> (String, Style) {
    let status = match scene.tint {
        BoardTint::Neutral => {
            let style = Style::default().fg(player_color(scene.on_deck));
            return (format!("Current Player: {}", scene.on_deck.name()), style);
        }
        BoardTint::YellowWon => "Yellow wins!",
        BoardTint::RedWon => "Red wins!",
        BoardTint::Draw => "Draw",
    };
    (status.to_string(), Style::default().fg(tint_color(scene.tint)))
}

fn render_header(frame: &mut Frame, scene: &Scene, area: Rect) {
    let (status, style) = status_line(scene);

    let header = Paragraph::new(status)
        .style(style.add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, scene: &Scene, area: Rect) {
    let board_widget = Paragraph::new(board_lines(scene)).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, scene: &Scene, area: Rect) {
    let line = Line::from(vec![
        Span::raw("1-7: Drop  |  0/R: Restart  |  Q: Quit  |  On deck: "),
        Span::styled(
            "\u{25cf}",
            Style::default()
                .fg(player_color(scene.on_deck))
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
