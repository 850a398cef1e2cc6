use super::*;

pub fn render_top_bar(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(MUTED))
        .padding(Padding::new(2, 2, 1, 0));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let gregorian = app.gregorian_date();
    let hijri = app.hijri_date().map(|date| date.to_string());
    let dates_width = hijri
        .as_deref()
        .map_or(0, |hijri| hijri.chars().count())
        .max(gregorian.chars().count()) as u16;

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(dates_width)])
        .split(inner);

    let mosque = &app.config.mosque;
    let name = Paragraph::new(vec![
        Line::from(Span::styled(
            mosque.name.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            mosque.address.as_str(),
            Style::default().fg(Color::Gray),
        )),
    ]);
    frame.render_widget(name, cols[0]);

    let mut date_lines = vec![Line::from(Span::styled(
        gregorian,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))];
    if let Some(hijri) = hijri {
        date_lines.push(Line::from(Span::styled(hijri, Style::default().fg(ACCENT))));
    }
    let dates = Paragraph::new(date_lines).alignment(Alignment::Right);
    frame.render_widget(dates, cols[1]);
}
