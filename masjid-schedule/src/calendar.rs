//! Date labels for the dashboard header.

use std::fmt;

use thiserror::Error;
use time::{Date, Duration};

pub const HIJRI_MONTHS: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi al-Awwal",
    "Rabi al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

/// `"Friday, October 16th, 2026"`
pub fn format_gregorian(date: Date) -> String {
    format!(
        "{}, {} {}{}, {}",
        date.weekday(),
        date.month(),
        date.day(),
        ordinal_suffix(date.day()),
        date.year()
    )
}

fn ordinal_suffix(day: u8) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Gregorian years covered by the Umm al-Qura tables.
pub const HIJRI_MIN_YEAR: i32 = 1938;
pub const HIJRI_MAX_YEAR: i32 = 2076;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("{0} is outside the supported Hijri range (1938-2076)")]
    OutOfRange(Date),
    #[error("hijri conversion failed: {0}")]
    Conversion(String),
}

/// A date in the Umm al-Qura calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HijriDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl HijriDate {
    pub fn from_gregorian(date: Date) -> Result<Self, CalendarError> {
        if !(HIJRI_MIN_YEAR..=HIJRI_MAX_YEAR).contains(&date.year()) {
            return Err(CalendarError::OutOfRange(date));
        }

        let converted = hijri_date::HijriDate::from_gr(
            date.year() as usize,
            usize::from(u8::from(date.month())),
            usize::from(date.day()),
        )
        .map_err(CalendarError::Conversion)?;

        let narrow = |value: usize| CalendarError::Conversion(format!("{value} out of range"));
        Ok(Self {
            year: u16::try_from(converted.year()).map_err(|_| narrow(converted.year()))?,
            month: u8::try_from(converted.month()).map_err(|_| narrow(converted.month()))?,
            day: u8::try_from(converted.day()).map_err(|_| narrow(converted.day()))?,
        })
    }

    pub fn month_name(&self) -> &'static str {
        HIJRI_MONTHS[usize::from(self.month.clamp(1, 12)) - 1]
    }
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month_name(), self.year)
    }
}

/// Hijri date of `date` shifted by `adjustment_days`, to follow local moon
/// sighting (positive moves the Hijri date ahead).
pub fn to_hijri(date: Date, adjustment_days: i64) -> Result<HijriDate, CalendarError> {
    let shifted = adjustment_days
        .checked_mul(86_400)
        .and_then(|seconds| date.checked_add(Duration::seconds(seconds)))
        .ok_or(CalendarError::OutOfRange(date))?;
    HijriDate::from_gregorian(shifted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn gregorian_long_form() {
        assert_eq!(
            format_gregorian(date!(2026 - 10 - 16)),
            "Friday, October 16th, 2026"
        );
        assert_eq!(
            format_gregorian(date!(2025 - 03 - 01)),
            "Saturday, March 1st, 2025"
        );
    }

    #[test]
    fn ordinal_suffixes() {
        let cases = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (21, "st"),
            (22, "nd"),
            (23, "rd"),
            (30, "th"),
            (31, "st"),
        ];
        for (day, suffix) in cases {
            assert_eq!(ordinal_suffix(day), suffix, "{day}");
        }
    }

    fn hijri(year: u16, month: u8, day: u8) -> HijriDate {
        HijriDate { year, month, day }
    }

    #[test]
    fn ramadan_and_eid() {
        assert_eq!(
            HijriDate::from_gregorian(date!(2024 - 03 - 10)),
            Ok(hijri(1445, 8, 29))
        );
        assert_eq!(
            HijriDate::from_gregorian(date!(2024 - 03 - 11)),
            Ok(hijri(1445, 9, 1))
        );
        assert_eq!(
            HijriDate::from_gregorian(date!(2025 - 03 - 29)),
            Ok(hijri(1446, 9, 29))
        );
        assert_eq!(
            HijriDate::from_gregorian(date!(2025 - 03 - 30)),
            Ok(hijri(1446, 10, 1))
        );
        assert_eq!(
            HijriDate::from_gregorian(date!(2026 - 03 - 19)),
            Ok(hijri(1447, 9, 30))
        );
    }

    #[test]
    fn year_boundary() {
        assert_eq!(
            HijriDate::from_gregorian(date!(2024 - 07 - 06)),
            Ok(hijri(1445, 12, 30))
        );
        assert_eq!(
            HijriDate::from_gregorian(date!(2024 - 07 - 07)),
            Ok(hijri(1446, 1, 1))
        );
    }

    #[test]
    fn displays_with_month_name() {
        assert_eq!(
            HijriDate::from_gregorian(date!(2026 - 10 - 16))
                .unwrap()
                .to_string(),
            "5 Jumada al-Awwal 1448"
        );
        assert_eq!(hijri(1446, 10, 1).to_string(), "1 Shawwal 1446");
    }

    #[test]
    fn dates_outside_the_tables_are_errors() {
        assert_eq!(
            HijriDate::from_gregorian(date!(1937 - 12 - 31)),
            Err(CalendarError::OutOfRange(date!(1937 - 12 - 31)))
        );
        assert!(HijriDate::from_gregorian(date!(2077 - 01 - 01)).is_err());
        assert_eq!(
            HijriDate::from_gregorian(date!(2076 - 12 - 30)),
            Ok(hijri(1500, 2, 4))
        );
    }

    #[test]
    fn adjustment_shifts_the_gregorian_date() {
        assert_eq!(to_hijri(date!(2025 - 03 - 29), 1), Ok(hijri(1446, 10, 1)));
        assert_eq!(to_hijri(date!(2025 - 03 - 30), -1), Ok(hijri(1446, 9, 29)));
        assert_eq!(to_hijri(date!(2025 - 03 - 30), 0), Ok(hijri(1446, 10, 1)));
    }

    #[test]
    fn huge_adjustment_is_an_error() {
        let today = date!(2026 - 10 - 16);
        assert_eq!(
            to_hijri(today, i64::MAX),
            Err(CalendarError::OutOfRange(today))
        );
        assert!(to_hijri(today, i64::MIN).is_err());
        assert!(to_hijri(today, 400_000).is_err());
    }
}
