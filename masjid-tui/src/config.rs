use anyhow::{Context, Result};
use masjid_schedule::{
    default_schedule, deserialize_schedule, deserialize_wall_time, PrayerDefinition,
};
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};
use time::{macros::time, Time};

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub mosque: MosqueInfo,
    /// Prayers in display order. Times accept "HH:MM" or "H:MM AM/PM".
    #[serde(default = "default_schedule", deserialize_with = "deserialize_schedule")]
    pub prayers: Vec<PrayerDefinition>,
    #[serde(default)]
    pub ticker: TickerConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MosqueInfo {
    pub name: String,
    #[serde(default)]
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TickerConfig {
    #[serde(default = "default_message")]
    pub message: String,
    /// Secondary countdown shown after the message, e.g. Jumu'ah. Only the
    /// built-in ticker has one; a configured `[ticker]` must set it.
    #[serde(default)]
    pub countdown: Option<TickerCountdown>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TickerCountdown {
    pub label: String,
    #[serde(deserialize_with = "deserialize_wall_time")]
    pub time: Time,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Days added before converting to the Hijri calendar, within
    /// `MAX_HIJRI_OFFSET_DAYS` either way.
    #[serde(default, deserialize_with = "deserialize_hijri_offset")]
    pub hijri_offset_days: i8,
    /// Sweep the second hand using sub-second time.
    #[serde(default = "default_true")]
    pub smooth_seconds: bool,
}

fn default_message() -> String {
    "Change this on the Masjid Dashboard • Please follow health protocols • Keep the mosque clean"
        .to_string()
}

fn default_ticker_countdown() -> Option<TickerCountdown> {
    Some(TickerCountdown {
        label: "Jumu'ah".to_string(),
        time: time!(11:43),
    })
}

fn default_true() -> bool {
    true
}

const MAX_HIJRI_OFFSET_DAYS: i8 = 3;

fn deserialize_hijri_offset<'de, D>(deserializer: D) -> Result<i8, D::Error>
where
    D: Deserializer<'de>,
{
    let offset = i64::deserialize(deserializer)?;
    match i8::try_from(offset) {
        Ok(offset) if (-MAX_HIJRI_OFFSET_DAYS..=MAX_HIJRI_OFFSET_DAYS).contains(&offset) => {
            Ok(offset)
        }
        _ => Err(serde::de::Error::custom(format!(
            "hijri_offset_days must be between -{MAX_HIJRI_OFFSET_DAYS} and {MAX_HIJRI_OFFSET_DAYS}, got {offset}"
        ))),
    }
}

impl Default for MosqueInfo {
    fn default() -> Self {
        Self {
            name: "Masjidhul Haadhi".to_string(),
            address: "Alhilal South Road, Sainthamaruthu -15 | info@masjidhulhaadhi.com | +94 7573 40 891"
                .to_string(),
        }
    }
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            message: default_message(),
            countdown: default_ticker_countdown(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            hijri_offset_days: 0,
            smooth_seconds: true,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            mosque: MosqueInfo::default(),
            prayers: default_schedule(),
            ticker: TickerConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl DashboardConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("masjid-tui")
            .join("config.toml"))
    }

    pub fn log_path() -> Result<PathBuf> {
        Ok(dirs::data_local_dir()
            .context("Cannot determine local data directory")?
            .join("masjid-tui")
            .join("masjid-tui.log"))
    }

    /// Load config from `path`, or from the default location when `None`.
    /// A missing default file yields the built-in schedule; a missing
    /// explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let path = Self::config_path()?;
                if !path.exists() {
                    tracing::info!(path = %path.display(), "no config file, using defaults");
                    return Ok(Self::default());
                }
                path
            }
        };

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config = Self::parse(&raw)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            prayers = config.prayers.len(),
            "loaded config"
        );
        if config.prayers.is_empty() {
            tracing::warn!("config defines no prayers; countdown will stay pending");
        }
        Ok(config)
    }

    pub fn parse(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}
