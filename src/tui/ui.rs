//! Stateless UI rendering for Bulls & Cows.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

use crate::games::bulls_cows::{Difficulty, GuessOutcome, Phase};
use crate::machine::Snapshot;

const RULE_HINT: &str =
    "Bulls = right digit, right place. Cows = right digit, wrong place. (4 unique digits)";

/// Renders the whole screen from a snapshot.
pub fn draw(frame: &mut Frame, snapshot: &Snapshot, difficulty: Difficulty, modal_open: bool) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(4), // Status
            Constraint::Length(3), // Guess input
            Constraint::Length(2), // Hint / error
            Constraint::Min(3),    // History
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Bulls & Cows")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    draw_status(frame, chunks[1], snapshot, difficulty);
    draw_input(frame, chunks[2], snapshot);
    draw_feedback(frame, chunks[3], snapshot);
    draw_history(frame, chunks[4], snapshot);

    let help = Paragraph::new(help_text(snapshot))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[5]);

    if modal_open {
        draw_modal(frame, area, snapshot);
    }
}

fn draw_status(frame: &mut Frame, area: Rect, snapshot: &Snapshot, difficulty: Difficulty) {
    let mut lines = vec![Line::from(vec![
        Span::styled("Status: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(status_text(snapshot)),
        Span::raw("    "),
        Span::styled("Round: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(round_text(snapshot)),
        Span::raw("    "),
        Span::styled("Difficulty: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(difficulty.to_string()),
    ])];

    if let Some(session) = snapshot.session() {
        lines.push(Line::from(Span::styled(
            format!("gameId: {}", session.id()),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let block = Block::default().borders(Borders::ALL).title(if *snapshot.busy() {
        "Game (waiting for server…)"
    } else {
        "Game"
    });
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_input(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let enabled = *snapshot.phase() == Phase::Playing && !*snapshot.busy();
    let (text, style) = if snapshot.input().is_empty() {
        (
            "Enter 4 digits (e.g. 1234)".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (snapshot.input().clone(), Style::default().add_modifier(Modifier::BOLD))
    };

    let border = if enabled {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title = if snapshot.can_submit() {
        "Guess (Enter to submit)"
    } else {
        "Guess"
    };

    let paragraph = Paragraph::new(Span::styled(text, style))
        .block(Block::default().borders(Borders::ALL).border_style(border).title(title));
    frame.render_widget(paragraph, area);
}

fn draw_feedback(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let hint_color = if snapshot.input_is_suspect() {
        Color::Red
    } else {
        Color::DarkGray
    };
    let mut lines = vec![Line::from(Span::styled(
        RULE_HINT,
        Style::default().fg(hint_color),
    ))];
    if let Some(error) = snapshot.error() {
        lines.push(Line::from(vec![
            Span::styled(
                "Error: ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw(error.clone()),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_history(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let block = Block::default().borders(Borders::ALL).title("History");

    if snapshot.history().is_empty() {
        let hint = if *snapshot.phase() == Phase::Idle {
            "Press n to start."
        } else {
            "No guesses yet."
        };
        let paragraph = Paragraph::new(hint)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = snapshot
        .history()
        .iter()
        .map(|outcome| ListItem::new(history_line(outcome)))
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}

fn draw_modal(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let popup = center_rect(area, 40, 7);
    let (headline, color) = match snapshot.phase() {
        Phase::Won => ("You won!", Color::Green),
        _ => ("You lost!", Color::Red),
    };

    let mut lines = vec![Line::from(Span::styled(
        headline,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];
    match snapshot.revealed_answer() {
        Some(answer) => lines.push(Line::from(format!("Answer: {}", answer))),
        None => lines.push(Line::from("The server did not reveal the answer.")),
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Game Over"));
    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}

/// Status line, with the answer appended after a loss when it is known.
pub fn status_text(snapshot: &Snapshot) -> String {
    let phase = *snapshot.phase();
    match snapshot.revealed_answer() {
        Some(answer) if phase == Phase::Lost => {
            format!("{} Answer: {}", phase.status_label(), answer)
        }
        _ => phase.status_label().to_string(),
    }
}

/// `round/max_rounds`, clamped; a dash before the first game.
pub fn round_text(snapshot: &Snapshot) -> String {
    match snapshot.display_round() {
        Some((round, max_rounds)) => format!("{}/{}", round, max_rounds),
        None => "-".to_string(),
    }
}

/// One history row.
pub fn history_line(outcome: &GuessOutcome) -> String {
    format!(
        "{}   Bulls: {} | Cows: {}   (round {}/{})",
        outcome.guess(),
        outcome.bulls(),
        outcome.cows(),
        outcome.round(),
        outcome.max_rounds()
    )
}

fn help_text(snapshot: &Snapshot) -> String {
    let start = snapshot.phase().start_label();
    if *snapshot.phase() == Phase::Playing {
        format!("Enter: Guess | Ctrl+N: {} | Esc: Quit", start)
    } else {
        format!("n: {} | ←→: Difficulty | q/Esc: Quit", start)
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
