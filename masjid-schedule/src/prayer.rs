use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use thiserror::Error;
use time::error::{Parse, ParseFromDescription::InvalidComponent};
use time::macros::{format_description, time};
use time::{Date, PrimitiveDateTime, Time};

/// The five daily prayers, in the order they occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum PrayerName {
    Shubuh,
    Luhar,
    Asr,
    Maghrib,
    Isha,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("time is empty")]
    Empty,
    #[error("'{0}' is not a valid time: expected HH:MM or H:MM AM/PM")]
    Malformed(String),
    #[error("'{0}' is not a valid time: hour out of range")]
    HourOutOfRange(String),
    #[error("'{0}' is not a valid time: minute out of range")]
    MinuteOutOfRange(String),
    #[error("'{0}' is not a known prayer (expected one of {})", known_prayers())]
    UnknownPrayer(String),
    #[error("{0} is defined more than once")]
    DuplicatePrayer(PrayerName),
    #[error("{prayer} iqamah at {} is before its adhan at {}", hh_mm(.iqamah), hh_mm(.adhan))]
    IqamahBeforeAdhan {
        prayer: PrayerName,
        adhan: Time,
        iqamah: Time,
    },
}

fn hh_mm(time: &Time) -> String {
    crate::format_24h(*time)
}

fn known_prayers() -> String {
    PrayerName::iter()
        .map(|name| name.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parses a wall-clock time in either 24-hour (`"13:08"`) or 12-hour
/// (`"1:08 PM"`) form. The meridiem is case-insensitive and may follow the
/// minutes directly.
pub fn parse_wall_time(input: &str) -> Result<Time, ConfigError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Empty);
    }

    let split = trimmed.len().saturating_sub(2);
    let meridiem = trimmed
        .get(split..)
        .filter(|suffix| suffix.eq_ignore_ascii_case("am") || suffix.eq_ignore_ascii_case("pm"));

    let (clock, parsed) = match meridiem {
        Some(meridiem) => {
            let clock = trimmed[..split].trim_end();
            let compact = format!("{clock}{meridiem}");
            let parsed = Time::parse(
                &compact,
                format_description!("[hour repr:12 padding:none]:[minute][period case_sensitive:false]"),
            );
            (clock, parsed)
        }
        None => (
            trimmed,
            Time::parse(trimmed, format_description!("[hour padding:none]:[minute]")),
        ),
    };

    parsed.map_err(|err| classify_parse_error(input, clock, err))
}

/// Out-of-range errors are only reported when the offending field is
/// well-formed digits; anything else is malformed.
fn classify_parse_error(input: &str, clock: &str, err: Parse) -> ConfigError {
    let (hour, minute) = clock.split_once(':').unwrap_or((clock, ""));
    let digits = |field: &str, max_len: usize| {
        !field.is_empty() && field.len() <= max_len && field.bytes().all(|b| b.is_ascii_digit())
    };

    match err {
        Parse::ParseFromDescription(InvalidComponent("hour")) if digits(hour, 2) => {
            ConfigError::HourOutOfRange(input.to_string())
        }
        Parse::ParseFromDescription(InvalidComponent("minute"))
            if digits(minute, 2) && minute.len() == 2 =>
        {
            ConfigError::MinuteOutOfRange(input.to_string())
        }
        _ => ConfigError::Malformed(input.to_string()),
    }
}

/// Serde adapter for wall-clock times written as strings in config files.
pub fn deserialize_wall_time<'de, D>(deserializer: D) -> Result<Time, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_wall_time(&raw).map_err(serde::de::Error::custom)
}

/// Serde adapter for a prayer list; each prayer may appear only once.
pub fn deserialize_schedule<'de, D>(deserializer: D) -> Result<Vec<PrayerDefinition>, D::Error>
where
    D: Deserializer<'de>,
{
    let definitions = Vec::<PrayerDefinition>::deserialize(deserializer)?;
    check_unique(&definitions).map_err(serde::de::Error::custom)?;
    Ok(definitions)
}

pub fn check_unique(definitions: &[PrayerDefinition]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for definition in definitions {
        if !seen.insert(definition.name) {
            return Err(ConfigError::DuplicatePrayer(definition.name));
        }
    }
    Ok(())
}

/// One prayer with its Adhan and Iqamah wall-clock times.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawPrayerDefinition")]
pub struct PrayerDefinition {
    pub name: PrayerName,
    pub adhan: Time,
    pub iqamah: Time,
}

/// A prayer definition as written in configuration, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPrayerDefinition {
    pub name: String,
    pub adhan: String,
    pub iqamah: String,
}

impl PrayerDefinition {
    pub fn new(name: PrayerName, adhan: Time, iqamah: Time) -> Result<Self, ConfigError> {
        if iqamah < adhan {
            return Err(ConfigError::IqamahBeforeAdhan {
                prayer: name,
                adhan,
                iqamah,
            });
        }
        Ok(Self {
            name,
            adhan,
            iqamah,
        })
    }

    pub fn parse(name: PrayerName, adhan: &str, iqamah: &str) -> Result<Self, ConfigError> {
        Self::new(name, parse_wall_time(adhan)?, parse_wall_time(iqamah)?)
    }

    pub fn adhan_on(&self, date: Date) -> PrimitiveDateTime {
        PrimitiveDateTime::new(date, self.adhan)
    }

    pub fn iqamah_on(&self, date: Date) -> PrimitiveDateTime {
        PrimitiveDateTime::new(date, self.iqamah)
    }
}

impl TryFrom<RawPrayerDefinition> for PrayerDefinition {
    type Error = ConfigError;

    fn try_from(raw: RawPrayerDefinition) -> Result<Self, Self::Error> {
        let name = PrayerName::from_str(raw.name.trim())
            .map_err(|_| ConfigError::UnknownPrayer(raw.name.clone()))?;
        Self::parse(name, &raw.adhan, &raw.iqamah)
    }
}

/// Schedule used when no configuration file is present.
pub fn default_schedule() -> Vec<PrayerDefinition> {
    vec![
        PrayerDefinition {
            name: PrayerName::Shubuh,
            adhan: time!(4:50),
            iqamah: time!(5:00),
        },
        PrayerDefinition {
            name: PrayerName::Luhar,
            adhan: time!(13:08),
            iqamah: time!(13:20),
        },
        PrayerDefinition {
            name: PrayerName::Asr,
            adhan: time!(16:35),
            iqamah: time!(16:45),
        },
        PrayerDefinition {
            name: PrayerName::Maghrib,
            adhan: time!(19:41),
            iqamah: time!(19:45),
        },
        PrayerDefinition {
            name: PrayerName::Isha,
            adhan: time!(21:05),
            iqamah: time!(21:15),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_24_hour_times() {
        assert_eq!(parse_wall_time("04:50"), Ok(time!(4:50)));
        assert_eq!(parse_wall_time("4:50"), Ok(time!(4:50)));
        assert_eq!(parse_wall_time(" 21:15 "), Ok(time!(21:15)));
        assert_eq!(parse_wall_time("00:00"), Ok(time!(0:00)));
    }

    #[test]
    fn parses_12_hour_times() {
        assert_eq!(parse_wall_time("2:30 PM"), Ok(time!(14:30)));
        assert_eq!(parse_wall_time("12:00 AM"), Ok(time!(0:00)));
        assert_eq!(parse_wall_time("12:00 PM"), Ok(time!(12:00)));
        assert_eq!(parse_wall_time("11:59 am"), Ok(time!(11:59)));
        assert_eq!(parse_wall_time("7:05pm"), Ok(time!(19:05)));
        assert_eq!(parse_wall_time("12:30 am"), Ok(time!(0:30)));
        assert_eq!(parse_wall_time("09:15   AM"), Ok(time!(9:15)));
    }

    #[test]
    fn empty_time_is_rejected() {
        assert_eq!(parse_wall_time(""), Err(ConfigError::Empty));
        assert_eq!(parse_wall_time("   "), Err(ConfigError::Empty));
    }

    #[test]
    fn malformed_times_are_rejected() {
        for input in [
            "0450", "ab:cd", "4:5", "+4:50", "4:50:00", ":50", "PM", "4:50 XM", "4:5 PM",
        ] {
            assert_eq!(
                parse_wall_time(input),
                Err(ConfigError::Malformed(input.to_string())),
                "{input}"
            );
        }
    }

    #[test]
    fn out_of_range_times_are_rejected() {
        assert_eq!(
            parse_wall_time("24:00"),
            Err(ConfigError::HourOutOfRange("24:00".to_string()))
        );
        assert_eq!(
            parse_wall_time("13:00 PM"),
            Err(ConfigError::HourOutOfRange("13:00 PM".to_string()))
        );
        assert_eq!(
            parse_wall_time("0:30 AM"),
            Err(ConfigError::HourOutOfRange("0:30 AM".to_string()))
        );
        assert_eq!(
            parse_wall_time("12:60"),
            Err(ConfigError::MinuteOutOfRange("12:60".to_string()))
        );
        assert_eq!(
            parse_wall_time("11:75 PM"),
            Err(ConfigError::MinuteOutOfRange("11:75 PM".to_string()))
        );
    }

    #[test]
    fn iqamah_before_adhan_is_rejected() {
        let err = PrayerDefinition::parse(PrayerName::Asr, "16:35", "16:30").unwrap_err();
        assert_eq!(
            err,
            ConfigError::IqamahBeforeAdhan {
                prayer: PrayerName::Asr,
                adhan: time!(16:35),
                iqamah: time!(16:30),
            }
        );
    }

    #[test]
    fn raw_definition_converts_with_case_insensitive_name() {
        let raw = RawPrayerDefinition {
            name: "maghrib".to_string(),
            adhan: "7:41 PM".to_string(),
            iqamah: "19:45".to_string(),
        };
        let definition = PrayerDefinition::try_from(raw).unwrap();
        assert_eq!(definition.name, PrayerName::Maghrib);
        assert_eq!(definition.adhan, time!(19:41));
        assert_eq!(definition.iqamah, time!(19:45));
    }

    #[test]
    fn unknown_prayer_name_is_rejected() {
        let raw = RawPrayerDefinition {
            name: "Tahajjud".to_string(),
            adhan: "03:00".to_string(),
            iqamah: "03:10".to_string(),
        };
        assert_eq!(
            PrayerDefinition::try_from(raw),
            Err(ConfigError::UnknownPrayer("Tahajjud".to_string()))
        );
    }

    #[test]
    fn unknown_prayer_lists_known_names() {
        let err = ConfigError::UnknownPrayer("Duha".to_string());
        assert_eq!(
            err.to_string(),
            "'Duha' is not a known prayer (expected one of Shubuh, Luhar, Asr, Maghrib, Isha)"
        );
    }

    #[test]
    fn repeated_prayer_is_rejected() {
        let mut schedule = default_schedule();
        assert_eq!(check_unique(&schedule), Ok(()));

        schedule.push(PrayerDefinition::parse(PrayerName::Luhar, "13:30", "13:40").unwrap());
        assert_eq!(
            check_unique(&schedule),
            Err(ConfigError::DuplicatePrayer(PrayerName::Luhar))
        );
    }

    #[test]
    fn default_schedule_is_ordered() {
        let schedule = default_schedule();
        assert_eq!(schedule.len(), 5);
        assert!(schedule.windows(2).all(|w| w[0].iqamah < w[1].adhan));
        assert!(schedule.iter().all(|p| p.adhan <= p.iqamah));
    }
}
