use crate::config::DashboardConfig;
use masjid_schedule::calendar::{format_gregorian, to_hijri, HijriDate};
use masjid_schedule::{
    active_index, evaluate, next_occurrence, Countdown, EvaluationResult, PrayerDefinition,
};
use time::PrimitiveDateTime;

pub struct App {
    pub running: bool,
    pub config: DashboardConfig,
    /// Wall clock at the last frame, drives the analog clock and ticker.
    pub now: PrimitiveDateTime,

    // Engine results, refreshed on their own ticks
    pub evaluation: EvaluationResult,
    pub active_row: Option<usize>,

    pub marquee_offset: usize,
    pub throbber_state: throbber_widgets_tui::ThrobberState,
}

impl App {
    pub fn new(config: DashboardConfig, now: PrimitiveDateTime) -> Self {
        let mut app = Self {
            running: true,
            config,
            now,
            evaluation: EvaluationResult::default(),
            active_row: None,
            marquee_offset: 0,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
        };
        app.refresh_countdown(now);
        app.refresh_highlight(now);
        app
    }

    pub fn prayers(&self) -> &[PrayerDefinition] {
        &self.config.prayers
    }

    /// Re-evaluate the next event, countdown and progress (every second).
    pub fn refresh_countdown(&mut self, now: PrimitiveDateTime) {
        let previous = self.evaluation.upcoming;
        self.now = now;
        self.evaluation = evaluate(&self.config.prayers, now);

        if self.evaluation.upcoming != previous {
            match self.evaluation.upcoming {
                Some(event) => tracing::info!(
                    prayer = %event.prayer,
                    kind = %event.kind,
                    at = %event.instant,
                    "next event changed"
                ),
                None => tracing::warn!("no upcoming event"),
            }
        }
    }

    /// Re-resolve the highlighted prayer row (every minute).
    pub fn refresh_highlight(&mut self, now: PrimitiveDateTime) {
        let row = active_index(&self.config.prayers, now);
        if row != self.active_row {
            tracing::debug!(?row, "active row changed");
        }
        self.active_row = row;
    }

    /// Advance animation state for one frame.
    pub fn advance_frame(&mut self, now: PrimitiveDateTime) {
        self.now = now;
        self.marquee_offset = self.marquee_offset.wrapping_add(1);
        if self.evaluation.is_pending() {
            self.throbber_state.calc_next();
        }
    }

    /// Label and time left for the ticker's secondary countdown.
    pub fn ticker_countdown(&self) -> Option<(&str, Countdown)> {
        let countdown = self.config.ticker.countdown.as_ref()?;
        let target = next_occurrence(countdown.time, self.now);
        Some((
            countdown.label.as_str(),
            Countdown::from_duration(target - self.now),
        ))
    }

    pub fn gregorian_date(&self) -> String {
        format_gregorian(self.now.date())
    }

    /// `None` when the shifted date falls outside the Hijri tables.
    pub fn hijri_date(&self) -> Option<HijriDate> {
        let offset = i64::from(self.config.display.hijri_offset_days);
        to_hijri(self.now.date(), offset).ok()
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}
