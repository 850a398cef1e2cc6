use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Helper function to create a centered rectangle
pub fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((r.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((r.height.saturating_sub(height)) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((r.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((r.width.saturating_sub(width)) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Canvas x/y half-extents that keep circles round in `area`.
///
/// Terminal cells are about twice as tall as they are wide, so the x range
/// is widened by `width / (2 * height)`.
pub fn round_bounds(area: Rect, half_height: f64) -> (f64, f64) {
    let height = f64::from(area.height.max(1));
    let width = f64::from(area.width.max(1));
    (half_height * width / (2.0 * height), half_height)
}

/// Canvas x coordinate that centers `text` around x = 0.
pub fn centered_text_x(text: &str, area: Rect, half_width: f64) -> f64 {
    let cell_width = 2.0 * half_width / f64::from(area.width.max(1));
    -(text.chars().count() as f64) * cell_width / 2.0
}
