use std::fmt;

use time::{Duration, Time};

/// Time left until an event, truncated to whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Countdown {
    pub hours: i64,
    pub minutes: u8,
    pub seconds: u8,
}

impl Countdown {
    /// Negative durations saturate to zero.
    pub fn from_duration(remaining: Duration) -> Self {
        let millis = remaining.whole_milliseconds().max(0);
        Self {
            hours: (millis / 3_600_000) as i64,
            minutes: ((millis / 60_000) % 60) as u8,
            seconds: ((millis / 1_000) % 60) as u8,
        }
    }

    pub fn hours_minutes(&self) -> String {
        format!("{:02}:{:02}", self.hours, self.minutes)
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// `"13:08"`
pub fn format_24h(time: Time) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// `"01:08 PM"`
pub fn format_12h(time: Time) -> String {
    let (hour, meridiem) = match time.hour() {
        0 => (12, "AM"),
        h @ 1..=11 => (h, "AM"),
        12 => (12, "PM"),
        h => (h - 12, "PM"),
    };
    format!("{:02}:{:02} {}", hour, time.minute(), meridiem)
}
