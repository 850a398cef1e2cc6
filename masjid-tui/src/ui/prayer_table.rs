use super::*;
use masjid_schedule::{format_24h, PrayerDefinition, PrayerName};
use ratatui::widgets::{Cell, Row, Table};

pub fn render_prayer_table(frame: &mut Frame, area: Rect, app: &App) {
    let block = panel_block("Prayer Times").padding(Padding::new(1, 1, 1, 0));

    if app.prayers().is_empty() {
        let empty = Paragraph::new("No prayers configured")
            .alignment(Alignment::Center)
            .style(Style::default().fg(MUTED))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from(""),
        Cell::from(""),
        Cell::from("Prayer"),
        Cell::from(Line::from("Adhan").alignment(Alignment::Right)),
        Cell::from(Line::from("Iqamah").alignment(Alignment::Right)),
    ])
    .style(
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    )
    .bottom_margin(1);

    let rows: Vec<Row> = app
        .prayers()
        .iter()
        .enumerate()
        .map(|(index, prayer)| prayer_row(prayer, app.active_row == Some(index)))
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(8),
            Constraint::Length(6),
            Constraint::Length(6),
        ],
    )
    .header(header)
    .column_spacing(2)
    .block(block);

    frame.render_widget(table, area);
}

/// Sky glyph for each prayer, from dawn to night.
fn prayer_icon(name: PrayerName) -> &'static str {
    match name {
        PrayerName::Shubuh => "☼",
        PrayerName::Luhar => "☀",
        PrayerName::Asr => "◐",
        PrayerName::Maghrib => "◒",
        PrayerName::Isha => "☾",
    }
}

fn prayer_row(prayer: &PrayerDefinition, is_active: bool) -> Row<'static> {
    let (marker, text_style) = if is_active {
        (
            "▌",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (" ", Style::default().fg(Color::Gray))
    };

    let row = Row::new(vec![
        Cell::from(Span::styled(marker, Style::default().fg(ACCENT))),
        Cell::from(Span::styled(
            prayer_icon(prayer.name),
            Style::default().fg(Color::Yellow),
        )),
        Cell::from(Span::styled(prayer.name.to_string(), text_style)),
        Cell::from(
            Line::from(Span::styled(format_24h(prayer.adhan), text_style))
                .alignment(Alignment::Right),
        ),
        Cell::from(
            Line::from(Span::styled(
                format_24h(prayer.iqamah),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Right),
        ),
    ])
    .bottom_margin(1);

    if is_active {
        row.style(Style::default().bg(Color::Rgb(6, 46, 36)))
    } else {
        row
    }
}
