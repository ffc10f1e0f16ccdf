use dungeon_escape_core::Outcome;
use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Screen};

const COMPASS: [&str; 7] = [
    "        (North)          ",
    "           w             ",
    "           |             ",
    "(West) a --+-- d (East)  ",
    "           |             ",
    "           s             ",
    "        (South)          ",
];

/// Renders the user interface.
pub fn render(frame: &mut Frame, app: &App) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Area for the current screen
            Constraint::Length(2), // Area for status/help
        ])
        .split(frame.area());

    let body = Paragraph::new(screen_lines(app)).block(
        Block::default()
            .title("Dungeon Adventure")
            .borders(Borders::ALL),
    );
    frame.render_widget(body, main_layout[0]);

    let help_text = Paragraph::new(help_line(app.screen))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(help_text, main_layout[1]);
}

fn help_line(screen: Screen) -> &'static str {
    match screen {
        Screen::Playing => "Move with w/a/s/d. Press 'Esc' to quit.",
        Screen::Finished => "Press any key to exit.",
        Screen::Splash | Screen::Rejected { .. } => "Press any key to continue.",
    }
}

fn screen_lines(app: &App) -> Vec<Line<'_>> {
    match app.screen {
        Screen::Splash => splash_lines(),
        Screen::Playing => game_state_lines(app),
        Screen::Rejected { locked: true } => vec![
            Line::from("The door is locked."),
            Line::from("Perhaps if you had a key???"),
        ],
        Screen::Rejected { locked: false } => vec![Line::from("You cannot go that way.")],
        Screen::Finished => game_done_lines(app),
    }
}

fn splash_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from("DUNGEON ADVENTURE".bold()),
        Line::default(),
        Line::from("INSTRUCTIONS:"),
        Line::default(),
        Line::from("Find the key and get out of the dungeon!"),
        Line::default(),
    ];
    lines.extend(COMPASS.iter().map(|row| Line::from(*row)));
    lines
}

fn game_state_lines(app: &App) -> Vec<Line<'_>> {
    let room = app.game.current_room();
    let player = app.game.player();

    let mut lines: Vec<Line> = room
        .message
        .lines()
        .enumerate()
        .map(|(i, text)| {
            let label = if i == 0 { "View:   " } else { "        " };
            Line::from(vec![Span::raw(label), Span::raw(text)])
        })
        .collect();
    if room.has_key {
        lines.push(Line::from(Span::styled(
            "  There is a key on the floor. You pick it up.",
            Style::default().fg(Color::Yellow),
        )));
    }
    lines.push(Line::from(format!("Health: {}", player.health)));
    let mut equip = vec![Span::raw("Equip:  ")];
    if player.has_key {
        equip.push(Span::styled(
            "1 jailer's key",
            Style::default().fg(Color::Yellow),
        ));
    }
    lines.push(Line::from(equip));
    lines.push(Line::default());
    lines.push(Line::from("Select action: "));
    lines
}

fn game_done_lines(app: &App) -> Vec<Line<'_>> {
    match app.game.outcome() {
        Some(Outcome::Escaped) => app
            .game
            .current_room()
            .message
            .lines()
            .map(|text| Line::from(text.green().bold()))
            .collect(),
        _ => vec![Line::from("YOU DIED...RIP.".red().bold())],
    }
}
