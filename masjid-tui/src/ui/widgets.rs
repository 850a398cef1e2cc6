use ratatui::{
    style::Style,
    text::{Line, Span},
};

/// Rows of the block-digit font.
pub const DIGIT_ROWS: usize = 5;

#[rustfmt::skip]
const DIGITS: [[&str; DIGIT_ROWS]; 10] = [
    ["█████", "██ ██", "██ ██", "██ ██", "█████"],
    ["   ██", "   ██", "   ██", "   ██", "   ██"],
    ["█████", "   ██", "█████", "██   ", "█████"],
    ["█████", "   ██", "█████", "   ██", "█████"],
    ["██ ██", "██ ██", "█████", "   ██", "   ██"],
    ["█████", "██   ", "█████", "   ██", "█████"],
    ["█████", "██   ", "█████", "██ ██", "█████"],
    ["█████", "   ██", "   ██", "   ██", "   ██"],
    ["█████", "██ ██", "█████", "██ ██", "█████"],
    ["█████", "██ ██", "█████", "   ██", "█████"],
];

#[rustfmt::skip]
const COLON: [&str; DIGIT_ROWS] = ["   ", " ██", "   ", " ██", "   "];

/// Render a time string such as `"13:08"` as large block digits. Characters
/// other than digits and `:` are skipped.
pub fn large_time_lines(text: &str, style: Style) -> Vec<Line<'static>> {
    let mut rows = vec![String::new(); DIGIT_ROWS];

    for ch in text.chars() {
        let glyph = match ch {
            ':' => &COLON,
            _ => match ch.to_digit(10) {
                Some(digit) => &DIGITS[digit as usize],
                None => continue,
            },
        };
        for (row, part) in rows.iter_mut().zip(glyph.iter()) {
            row.push_str(part);
            row.push_str(if ch == ':' { "  " } else { " " });
        }
    }

    rows.into_iter()
        .map(|row| Line::from(Span::styled(row, style)))
        .collect()
}

/// Display width of [`large_time_lines`] output for `text`.
pub fn large_time_width(text: &str) -> usize {
    text.chars()
        .map(|ch| match ch {
            ':' => 5,
            c if c.is_ascii_digit() => 6,
            _ => 0,
        })
        .sum()
}

/// Points along a circle of `radius`, clockwise from twelve o'clock,
/// covering `progress` of the full turn.
pub fn ring_points(progress: f64, radius: f64, steps: usize) -> Vec<(f64, f64)> {
    let progress = if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let count = (progress * steps as f64).round() as usize;
    (0..count)
        .map(|step| {
            let angle = (step as f64 / steps as f64 * 360.0).to_radians();
            (radius * angle.sin(), radius * angle.cos())
        })
        .collect()
}
