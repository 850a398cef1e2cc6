use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

mod analog_clock;
mod bottom_bar;
mod next_prayer;
mod prayer_table;
mod top_bar;
pub(super) mod utils;
pub(super) mod widgets;

/// Emerald accent used for Iqamah times, the active row and progress.
const ACCENT: Color = Color::Green;
const MUTED: Color = Color::DarkGray;

pub fn render(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Mosque name and dates
            Constraint::Min(0),    // Panels
            Constraint::Length(2), // Ticker
        ])
        .split(frame.area());

    top_bar::render_top_bar(frame, root[0], app);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Percentage(36),
            Constraint::Percentage(32),
            Constraint::Percentage(32),
        ])
        .split(root[1]);

    prayer_table::render_prayer_table(frame, panels[0], app);
    analog_clock::render_clock_panel(frame, panels[1], app);
    next_prayer::render_next_prayer(frame, panels[2], app);

    bottom_bar::render_bottom_bar(frame, root[2], app);
}

fn panel_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(MUTED))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(Color::White),
        ))
}
