use strum::Display;
use time::{Date, Duration, PrimitiveDateTime, Time};

use crate::{Countdown, PrayerDefinition, PrayerName};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum EventKind {
    Adhan,
    Iqamah,
}

/// A single Adhan or Iqamah at a concrete local date-time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleEvent {
    pub prayer: PrayerName,
    pub kind: EventKind,
    pub instant: PrimitiveDateTime,
}

impl ScheduleEvent {
    fn adhan(definition: &PrayerDefinition, date: Date) -> Self {
        Self {
            prayer: definition.name,
            kind: EventKind::Adhan,
            instant: definition.adhan_on(date),
        }
    }

    fn iqamah(definition: &PrayerDefinition, date: Date) -> Self {
        Self {
            prayer: definition.name,
            kind: EventKind::Iqamah,
            instant: definition.iqamah_on(date),
        }
    }
}

/// Every event of one day, plus the next day's first Adhan so that an
/// upcoming event exists after the last Iqamah.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    events: Vec<ScheduleEvent>,
}

impl Timeline {
    pub fn build(definitions: &[PrayerDefinition], date: Date) -> Self {
        let first = first_prayer_index(definitions);
        let tomorrow = date.next_day();

        let mut events = Vec::with_capacity(definitions.len() * 2 + 1);
        for (index, definition) in definitions.iter().enumerate() {
            events.push(ScheduleEvent::adhan(definition, date));
            events.push(ScheduleEvent::iqamah(definition, date));
            if Some(index) == first {
                if let Some(tomorrow) = tomorrow {
                    events.push(ScheduleEvent::adhan(definition, tomorrow));
                }
            }
        }

        // Stable, so equal instants keep definition order.
        events.sort_by_key(|event| event.instant);

        Self { events }
    }

    pub fn events(&self) -> &[ScheduleEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// First event strictly after `now`.
    pub fn upcoming_after(&self, now: PrimitiveDateTime) -> Option<&ScheduleEvent> {
        self.events.iter().find(|event| event.instant > now)
    }

    /// Last event at or before `now`.
    pub fn active_at(&self, now: PrimitiveDateTime) -> Option<&ScheduleEvent> {
        self.events.iter().rev().find(|event| event.instant <= now)
    }
}

/// The prayer that opens the day: Shubuh, or the earliest Adhan when no
/// Shubuh is configured.
fn first_prayer_index(definitions: &[PrayerDefinition]) -> Option<usize> {
    definitions
        .iter()
        .position(|definition| definition.name == PrayerName::Shubuh)
        .or_else(|| {
            definitions
                .iter()
                .enumerate()
                .min_by_key(|(_, definition)| definition.adhan)
                .map(|(index, _)| index)
        })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationResult {
    pub active: Option<ScheduleEvent>,
    pub upcoming: Option<ScheduleEvent>,
    /// Fraction of the active-to-upcoming interval already elapsed, in `[0, 1]`.
    pub progress: f64,
    pub remaining: Option<Duration>,
}

impl Default for EvaluationResult {
    fn default() -> Self {
        Self {
            active: None,
            upcoming: None,
            progress: 0.0,
            remaining: None,
        }
    }
}

impl EvaluationResult {
    /// No upcoming event could be resolved yet.
    pub fn is_pending(&self) -> bool {
        self.upcoming.is_none()
    }

    pub fn countdown(&self) -> Option<Countdown> {
        self.remaining.map(Countdown::from_duration)
    }

    /// When the upcoming event is an Adhan, the Iqamah that follows it.
    pub fn paired_iqamah(&self, definitions: &[PrayerDefinition]) -> Option<PrimitiveDateTime> {
        let upcoming = self.upcoming?;
        if upcoming.kind != EventKind::Adhan {
            return None;
        }
        definitions
            .iter()
            .find(|definition| definition.name == upcoming.prayer)
            .map(|definition| definition.iqamah_on(upcoming.instant.date()))
    }
}

/// Resolves the active and upcoming events at `now`, with the countdown and
/// progress between them.
pub fn evaluate(definitions: &[PrayerDefinition], now: PrimitiveDateTime) -> EvaluationResult {
    let timeline = Timeline::build(definitions, now.date());
    let active = timeline.active_at(now).copied();
    let upcoming = timeline.upcoming_after(now).copied();

    let progress = match (active, upcoming) {
        (Some(active), Some(upcoming)) => progress_between(active.instant, upcoming.instant, now),
        _ => 0.0,
    };

    EvaluationResult {
        active,
        upcoming,
        progress,
        remaining: upcoming.map(|event| event.instant - now),
    }
}

fn progress_between(
    start: PrimitiveDateTime,
    end: PrimitiveDateTime,
    now: PrimitiveDateTime,
) -> f64 {
    let span = end - start;
    if span <= Duration::ZERO {
        tracing::trace!(%start, %end, "degenerate interval, progress reset");
        return 0.0;
    }

    let ratio = (now - start).as_seconds_f64() / span.as_seconds_f64();
    if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Next instant strictly after `now` at which the wall clock reads `at`.
pub fn next_occurrence(at: Time, now: PrimitiveDateTime) -> PrimitiveDateTime {
    let today = PrimitiveDateTime::new(now.date(), at);
    if today > now {
        return today;
    }
    match now.date().next_day() {
        Some(tomorrow) => PrimitiveDateTime::new(tomorrow, at),
        None => today,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_schedule;
    use time::macros::{date, datetime, time};

    fn shubuh_only() -> Vec<PrayerDefinition> {
        vec![PrayerDefinition::parse(PrayerName::Shubuh, "04:50", "05:00").unwrap()]
    }

    #[test]
    fn timeline_contains_wraparound_adhan() {
        let timeline = Timeline::build(&default_schedule(), date!(2026 - 10 - 16));
        let events = timeline.events();

        assert_eq!(events.len(), 11);
        assert!(events.windows(2).all(|w| w[0].instant < w[1].instant));

        let last = events.last().unwrap();
        assert_eq!(last.prayer, PrayerName::Shubuh);
        assert_eq!(last.kind, EventKind::Adhan);
        assert_eq!(last.instant, datetime!(2026-10-17 4:50));

        let wraparounds = events
            .iter()
            .filter(|e| e.instant.date() == date!(2026 - 10 - 17))
            .count();
        assert_eq!(wraparounds, 1);
    }

    #[test]
    fn timeline_is_empty_without_definitions() {
        let timeline = Timeline::build(&[], date!(2026 - 10 - 16));
        assert!(timeline.is_empty());
    }

    #[test]
    fn wraparound_uses_earliest_adhan_without_shubuh() {
        let definitions = vec![
            PrayerDefinition::parse(PrayerName::Isha, "21:05", "21:15").unwrap(),
            PrayerDefinition::parse(PrayerName::Luhar, "13:08", "13:20").unwrap(),
        ];
        let timeline = Timeline::build(&definitions, date!(2026 - 10 - 16));
        let last = timeline.events().last().unwrap();
        assert_eq!(last.prayer, PrayerName::Luhar);
        assert_eq!(last.instant, datetime!(2026-10-17 13:08));
    }

    #[test]
    fn halfway_between_adhan_and_iqamah() {
        let result = evaluate(&shubuh_only(), datetime!(2026-10-16 4:55));

        let active = result.active.unwrap();
        assert_eq!(active.prayer, PrayerName::Shubuh);
        assert_eq!(active.kind, EventKind::Adhan);
        assert_eq!(active.instant, datetime!(2026-10-16 4:50));

        let upcoming = result.upcoming.unwrap();
        assert_eq!(upcoming.kind, EventKind::Iqamah);
        assert_eq!(upcoming.instant, datetime!(2026-10-16 5:00));

        assert_eq!(result.progress, 0.5);
        assert_eq!(result.remaining, Some(Duration::minutes(5)));
    }

    #[test]
    fn after_last_iqamah_wraps_to_tomorrow() {
        let result = evaluate(&default_schedule(), datetime!(2026-10-16 23:00));

        let active = result.active.unwrap();
        assert_eq!(active.prayer, PrayerName::Isha);
        assert_eq!(active.kind, EventKind::Iqamah);
        assert_eq!(active.instant, datetime!(2026-10-16 21:15));

        let upcoming = result.upcoming.unwrap();
        assert_eq!(upcoming.prayer, PrayerName::Shubuh);
        assert_eq!(upcoming.kind, EventKind::Adhan);
        assert_eq!(upcoming.instant, datetime!(2026-10-17 4:50));

        assert_eq!(result.remaining, Some(Duration::minutes(5 * 60 + 50)));
        assert!(result.progress > 0.0 && result.progress < 1.0);
    }

    #[test]
    fn before_first_event_has_no_active() {
        let result = evaluate(&default_schedule(), datetime!(2026-10-16 3:00));

        assert_eq!(result.active, None);
        let upcoming = result.upcoming.unwrap();
        assert_eq!(upcoming.prayer, PrayerName::Shubuh);
        assert_eq!(upcoming.instant, datetime!(2026-10-16 4:50));
        assert_eq!(result.progress, 0.0);
        assert_eq!(result.remaining, Some(Duration::minutes(110)));
    }

    #[test]
    fn event_instant_is_active_not_upcoming() {
        let result = evaluate(&default_schedule(), datetime!(2026-10-16 13:08));

        let active = result.active.unwrap();
        assert_eq!(active.prayer, PrayerName::Luhar);
        assert_eq!(active.kind, EventKind::Adhan);
        assert_eq!(result.upcoming.unwrap().kind, EventKind::Iqamah);
        assert_eq!(result.progress, 0.0);
    }

    #[test]
    fn empty_definitions_are_pending() {
        let result = evaluate(&[], datetime!(2026-10-16 12:00));
        assert_eq!(result, EvaluationResult::default());
        assert!(result.is_pending());
        assert_eq!(result.countdown(), None);
    }

    #[test]
    fn progress_is_monotonic_and_bounded() {
        let definitions = default_schedule();
        let mut now = datetime!(2026-10-16 13:20);
        let end = datetime!(2026-10-16 16:35);
        let mut previous = -1.0;

        while now < end {
            let result = evaluate(&definitions, now);
            assert_eq!(result.active.unwrap().instant, datetime!(2026-10-16 13:20));
            assert_eq!(result.upcoming.unwrap().instant, end);
            assert!((0.0..=1.0).contains(&result.progress));
            assert!(result.progress > previous);
            previous = result.progress;
            now += Duration::seconds(97);
        }
        assert!(previous > 0.99);
    }

    #[test]
    fn progress_stays_bounded_across_the_day() {
        let definitions = default_schedule();
        let mut now = datetime!(2026-10-16 0:00);
        while now < datetime!(2026-10-17 0:00) {
            let result = evaluate(&definitions, now);
            assert!((0.0..=1.0).contains(&result.progress), "{now}");
            assert!(result.remaining.unwrap() > Duration::ZERO, "{now}");
            now += Duration::minutes(7);
        }
    }

    #[test]
    fn remaining_decreases_by_elapsed_time() {
        let definitions = default_schedule();
        let first = evaluate(&definitions, datetime!(2026-10-16 14:00:00));
        let second = evaluate(&definitions, datetime!(2026-10-16 14:00:42));
        assert_eq!(
            first.remaining.unwrap() - second.remaining.unwrap(),
            Duration::seconds(42)
        );
    }

    #[test]
    fn evaluate_is_idempotent() {
        let definitions = default_schedule();
        let now = datetime!(2026-10-16 19:43:12);
        assert_eq!(evaluate(&definitions, now), evaluate(&definitions, now));
    }

    #[test]
    fn degenerate_interval_yields_zero_progress() {
        let at = datetime!(2026-10-16 12:00);
        assert_eq!(progress_between(at, at, at), 0.0);
        assert_eq!(
            progress_between(at, at - Duration::minutes(1), at),
            0.0
        );
    }

    #[test]
    fn identical_adhan_and_iqamah_do_not_break_progress() {
        let definitions = vec![PrayerDefinition::parse(PrayerName::Luhar, "13:00", "13:00").unwrap()];
        let result = evaluate(&definitions, datetime!(2026-10-16 13:00));
        assert_eq!(result.active.unwrap().kind, EventKind::Iqamah);
        assert_eq!(result.upcoming.unwrap().instant, datetime!(2026-10-17 13:00));
        assert_eq!(result.progress, 0.0);
    }

    #[test]
    fn paired_iqamah_follows_upcoming_adhan() {
        let definitions = default_schedule();

        let before_asr = evaluate(&definitions, datetime!(2026-10-16 16:00));
        assert_eq!(
            before_asr.paired_iqamah(&definitions),
            Some(datetime!(2026-10-16 16:45))
        );

        let overnight = evaluate(&definitions, datetime!(2026-10-16 23:30));
        assert_eq!(
            overnight.paired_iqamah(&definitions),
            Some(datetime!(2026-10-17 5:00))
        );

        let before_iqamah = evaluate(&definitions, datetime!(2026-10-16 16:40));
        assert_eq!(before_iqamah.paired_iqamah(&definitions), None);
    }

    #[test]
    fn next_occurrence_rolls_over_once_passed() {
        let at = time!(11:43);
        assert_eq!(
            next_occurrence(at, datetime!(2026-10-16 9:00)),
            datetime!(2026-10-16 11:43)
        );
        assert_eq!(
            next_occurrence(at, datetime!(2026-10-16 11:43)),
            datetime!(2026-10-17 11:43)
        );
        assert_eq!(
            next_occurrence(at, datetime!(2026-10-16 18:00)),
            datetime!(2026-10-17 11:43)
        );
    }
}
