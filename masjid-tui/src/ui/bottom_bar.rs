use super::*;

const SEPARATOR: &str = "   •   ";

/// `width` characters of `text` starting `offset` characters in, wrapping
/// around so the ticker scrolls continuously.
fn marquee_window(text: &str, offset: usize, width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    let start = offset % chars.len();
    (0..width).map(|i| chars[(start + i) % chars.len()]).collect()
}

fn ticker_text(app: &App) -> String {
    let mut text = app.config.ticker.message.clone();
    text.push_str(SEPARATOR);
    if let Some((label, countdown)) = app.ticker_countdown() {
        text.push_str(&format!("{} - {}", label, countdown));
        text.push_str(SEPARATOR);
    }
    text
}

pub fn render_bottom_bar(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(MUTED));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible = marquee_window(&ticker_text(app), app.marquee_offset, inner.width as usize);
    frame.render_widget(
        Paragraph::new(Span::styled(visible, Style::default().fg(Color::White))),
        inner,
    );
}
