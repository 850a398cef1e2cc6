use super::utils::centered_rect;
use super::widgets::ring_points;
use super::*;
use masjid_schedule::{format_12h, Countdown, EventKind, ScheduleEvent};
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Points};

const PENDING_LABEL: &str = "Calculating next prayer...";
const RING_STEPS: usize = 240;
const RING_RADII: [f64; 2] = [0.94, 1.0];

pub fn render_next_prayer(frame: &mut Frame, area: Rect, app: &mut App) {
    let block = panel_block("Next Prayer");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (upcoming, countdown) = match (app.evaluation.upcoming, app.evaluation.countdown()) {
        (Some(upcoming), Some(countdown)) => (upcoming, countdown),
        _ => {
            render_pending(frame, inner, app);
            return;
        }
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // "Adhan In" / "Iqamah In"
            Constraint::Length(1), // Prayer name
            Constraint::Min(0),    // Ring
            Constraint::Length(1), // Event time
            Constraint::Length(1), // Paired iqamah
        ])
        .split(inner);

    let subtitle = match upcoming.kind {
        EventKind::Adhan => "Adhan In",
        EventKind::Iqamah => "Iqamah In",
    };
    frame.render_widget(
        Paragraph::new(Span::styled(subtitle, Style::default().fg(Color::Gray)))
            .alignment(Alignment::Center),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            upcoming.prayer.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        chunks[1],
    );

    if chunks[2].height >= 6 && chunks[2].width >= 12 {
        render_ring(frame, chunks[2], app.evaluation.progress, countdown);
    } else {
        render_gauge(frame, chunks[2], app.evaluation.progress, countdown);
    }

    frame.render_widget(
        Paragraph::new(event_line(&upcoming)).alignment(Alignment::Center),
        chunks[3],
    );
    if let Some(iqamah) = app.evaluation.paired_iqamah(app.prayers()) {
        frame.render_widget(
            Paragraph::new(time_line("Iqamah at", &format_12h(iqamah.time())))
                .alignment(Alignment::Center),
            chunks[4],
        );
    }
}

fn event_line(event: &ScheduleEvent) -> Line<'static> {
    let label = match event.kind {
        EventKind::Adhan => "Adhan at",
        EventKind::Iqamah => "Iqamah at",
    };
    time_line(label, &format_12h(event.instant.time()))
}

fn time_line(label: &str, time: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{} ", label), Style::default().fg(Color::Gray)),
        Span::styled(
            time.to_string(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
    ])
}

fn render_ring(frame: &mut Frame, area: Rect, progress: f64, countdown: Countdown) {
    let (x_half, y_half) = utils::round_bounds(area, 1.15);
    let track: Vec<(f64, f64)> = RING_RADII
        .iter()
        .flat_map(|radius| ring_points(1.0, *radius, RING_STEPS))
        .collect();
    let filled: Vec<(f64, f64)> = RING_RADII
        .iter()
        .flat_map(|radius| ring_points(progress, *radius, RING_STEPS))
        .collect();

    let hours_minutes = countdown.hours_minutes();
    let seconds = format!(":{:02}", countdown.seconds);
    let hm_x = utils::centered_text_x(&hours_minutes, area, x_half);
    let seconds_x = utils::centered_text_x(&seconds, area, x_half);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-x_half, x_half])
        .y_bounds([-y_half, y_half])
        .paint(move |ctx| {
            ctx.draw(&Points {
                coords: &track,
                color: MUTED,
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &filled,
                color: ACCENT,
            });
            ctx.print(
                hm_x,
                0.15,
                Span::styled(
                    hours_minutes.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            );
            ctx.print(
                seconds_x,
                -0.2,
                Span::styled(seconds.clone(), Style::default().fg(Color::Gray)),
            );
        });

    frame.render_widget(canvas, area);
}

fn render_gauge(frame: &mut Frame, area: Rect, progress: f64, countdown: Countdown) {
    if area.height == 0 {
        return;
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            countdown.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        rows[0],
    );

    let ratio = if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let gauge = ratatui::widgets::LineGauge::default()
        .ratio(ratio)
        .label("")
        .filled_symbol(ratatui::symbols::line::THICK_HORIZONTAL)
        .unfilled_symbol("╌")
        .filled_style(Style::default().fg(ACCENT))
        .unfilled_style(Style::default().fg(MUTED));
    frame.render_widget(gauge, rows[1]);
}

fn render_pending(frame: &mut Frame, area: Rect, app: &mut App) {
    let width = PENDING_LABEL.chars().count() as u16 + 2;
    let throbber = throbber_widgets_tui::Throbber::default()
        .label(PENDING_LABEL)
        .style(Style::default().fg(Color::Gray))
        .throbber_style(Style::default().fg(ACCENT))
        .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
        .use_type(throbber_widgets_tui::WhichUse::Spin);
    frame.render_stateful_widget(
        throbber,
        centered_rect(width.min(area.width), 1, area),
        &mut app.throbber_state,
    );
}
