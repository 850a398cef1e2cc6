use super::*;
use super::widgets::{large_time_lines, large_time_width, DIGIT_ROWS};
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Circle, Context, Line as CanvasLine};
use time::Time;

const FACE_RADIUS: f64 = 1.0;
const HOUR_HAND: f64 = 0.5;
const MINUTE_HAND: f64 = 0.72;
const SECOND_HAND: f64 = 0.85;
const SECOND_TAIL: f64 = 0.18;
const NUMERAL_RADIUS: f64 = 0.74;

/// Hand rotations in degrees, clockwise from twelve o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

impl HandAngles {
    /// With `smooth`, the second hand sweeps using the sub-second fraction.
    pub fn at(time: Time, smooth: bool) -> Self {
        let mut seconds = f64::from(time.second());
        if smooth {
            seconds += f64::from(time.nanosecond()) / 1_000_000_000.0;
        }
        let minutes = f64::from(time.minute());
        let hours = f64::from(time.hour() % 12);

        Self {
            hour: hours * 30.0 + minutes / 60.0 * 30.0,
            minute: minutes / 60.0 * 360.0 + seconds / 60.0 * 6.0,
            second: seconds / 60.0 * 360.0,
        }
    }
}

/// Canvas point `radius` away from the center along a clock angle.
fn polar(angle_deg: f64, radius: f64) -> (f64, f64) {
    let angle = angle_deg.to_radians();
    (radius * angle.sin(), radius * angle.cos())
}

fn hand(ctx: &mut Context, angle_deg: f64, from: f64, to: f64, color: Color) {
    let (x1, y1) = polar(angle_deg, from);
    let (x2, y2) = polar(angle_deg, to);
    ctx.draw(&CanvasLine {
        x1,
        y1,
        x2,
        y2,
        color,
    });
}

pub fn render_clock_panel(frame: &mut Frame, area: Rect, app: &App) {
    let block = panel_block("Clock");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let digital = format!("{:02}:{:02}", app.now.hour(), app.now.minute());
    let show_digital =
        inner.height >= 14 && usize::from(inner.width) >= large_time_width(&digital);

    let (face_area, digital_area) = if show_digital {
        let split = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(DIGIT_ROWS as u16 + 1),
            ])
            .split(inner);
        (split[0], Some(split[1]))
    } else {
        (inner, None)
    };

    render_face(frame, face_area, app);

    if let Some(digital_area) = digital_area {
        let lines = large_time_lines(
            &digital,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            digital_area,
        );
    }
}

fn render_face(frame: &mut Frame, area: Rect, app: &App) {
    if area.width < 4 || area.height < 2 {
        return;
    }

    let angles = HandAngles::at(app.now.time(), app.config.display.smooth_seconds);
    let (x_half, y_half) = utils::round_bounds(area, FACE_RADIUS * 1.1);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-x_half, x_half])
        .y_bounds([-y_half, y_half])
        .paint(move |ctx| {
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: FACE_RADIUS,
                color: Color::Gray,
            });
            for numeral in 1..=12u8 {
                let angle = f64::from(numeral) * 30.0;
                hand(ctx, angle, FACE_RADIUS * 0.92, FACE_RADIUS, Color::White);
                let label = numeral.to_string();
                let (x, y) = polar(angle, NUMERAL_RADIUS);
                let x = x + utils::centered_text_x(&label, area, x_half);
                ctx.print(x, y, Span::styled(label, Style::default().fg(Color::Gray)));
            }

            ctx.layer();
            hand(ctx, angles.hour, 0.0, HOUR_HAND, Color::White);
            hand(ctx, angles.minute, 0.0, MINUTE_HAND, Color::LightBlue);
            hand(ctx, angles.second + 180.0, 0.0, SECOND_TAIL, Color::Red);
            hand(ctx, angles.second, 0.0, SECOND_HAND, Color::Red);
        });

    frame.render_widget(canvas, area);
}
