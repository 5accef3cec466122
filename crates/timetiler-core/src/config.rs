//! TOML-based view configuration.
//!
//! Stores the display knobs shared by the view adapters:
//! - Slot geometry (step, timeslots per gutter group, displayed day span)
//! - Week shape (week start, working days)
//! - All-day row level limit
//! - Default day layout algorithm
//!
//! Configuration is stored at `~/.config/timetiler/config.toml`.

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::layout::DayLayoutAlgorithm;

/// Slot geometry for time-grid columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotConfig {
    /// Minutes per slot.
    #[serde(default = "default_step")]
    pub step: u32,
    /// Slots per gutter group.
    #[serde(default = "default_timeslots")]
    pub timeslots: u32,
    /// First displayed time of day, HH:mm.
    #[serde(default = "default_day_start")]
    pub day_start: String,
    /// Last displayed time of day, HH:mm (inclusive).
    #[serde(default = "default_day_end")]
    pub day_end: String,
}

/// View configuration.
///
/// Serialized to/from TOML at `~/.config/timetiler/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    #[serde(default)]
    pub slots: SlotConfig,
    /// First day of the week, 0=Sunday .. 6=Saturday.
    #[serde(default)]
    pub week_start: u8,
    /// Working days for the work-week view, 0=Sunday .. 6=Saturday.
    /// Must be contiguous.
    #[serde(default = "default_work_week_days")]
    pub work_week_days: Vec<u8>,
    /// Maximum levels in the all-day row; overflow becomes "+N more".
    #[serde(default)]
    pub max_all_day_levels: Option<usize>,
    /// Show timed multi-day appointments inside the columns instead of the
    /// all-day row.
    #[serde(default)]
    pub show_multi_day_times: bool,
    /// Packing strategy for day columns.
    #[serde(default)]
    pub day_layout_algorithm: DayLayoutAlgorithm,
    /// Days shown by the agenda view.
    #[serde(default = "default_agenda_length")]
    pub agenda_length: u32,
}

// Default functions
fn default_step() -> u32 {
    30
}
fn default_timeslots() -> u32 {
    2
}
fn default_day_start() -> String {
    "00:00".to_string()
}
fn default_day_end() -> String {
    "23:59".to_string()
}
fn default_work_week_days() -> Vec<u8> {
    vec![1, 2, 3, 4, 5]
}
fn default_agenda_length() -> u32 {
    30
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            step: default_step(),
            timeslots: default_timeslots(),
            day_start: default_day_start(),
            day_end: default_day_end(),
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            slots: SlotConfig::default(),
            week_start: 0,
            work_week_days: default_work_week_days(),
            max_all_day_levels: None,
            show_multi_day_times: false,
            day_layout_algorithm: DayLayoutAlgorithm::default(),
            agenda_length: default_agenda_length(),
        }
    }
}

fn parse_time(value: &str, key: &str) -> Result<NaiveTime, ConfigError> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|e| ConfigError::InvalidValue {
        key: key.to_string(),
        message: format!("'{value}' is not a HH:mm time: {e}"),
    })
}

impl ViewConfig {
    /// Path of the config file.
    pub fn path() -> Result<PathBuf> {
        let base_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("timetiler");
        std::fs::create_dir_all(&base_dir)?;
        Ok(base_dir.join("config.toml"))
    }

    /// Load from disk or return default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    /// Load from an explicit path, falling back to defaults when the file
    /// does not exist yet.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                Ok(cfg)
            }
            Err(_) => Ok(Self::default()),
        }
    }

    /// Load from disk, returning default on error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        self.save_to(&path)
    }

    /// Persist to an explicit path.
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// The displayed span of one day column.
    ///
    /// # Errors
    ///
    /// Returns an error if `day_start`/`day_end` cannot be parsed or are
    /// reversed.
    pub fn day_bounds(&self, date: NaiveDate) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
        let start = parse_time(&self.slots.day_start, "slots.day_start")?;
        let end = parse_time(&self.slots.day_end, "slots.day_end")?;
        if end <= start {
            return Err(ConfigError::InvalidValue {
                key: "slots.day_end".to_string(),
                message: format!(
                    "day_end ({}) must be after day_start ({})",
                    self.slots.day_end, self.slots.day_start
                ),
            }
            .into());
        }
        Ok((
            date.and_time(start).and_utc(),
            date.and_time(end).and_utc(),
        ))
    }

    /// Start-difference threshold below which appointments count as
    /// concurrent in the day-column layout.
    pub fn minimum_start_difference(&self) -> i64 {
        let product = i64::from(self.slots.step) * i64::from(self.slots.timeslots);
        (product + 1) / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = ViewConfig::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: ViewConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.slots.step, 30);
        assert_eq!(parsed.work_week_days, vec![1, 2, 3, 4, 5]);
        assert_eq!(parsed.day_layout_algorithm, DayLayoutAlgorithm::Overlap);
    }

    #[test]
    fn unknown_fields_fall_back_to_defaults() {
        let parsed: ViewConfig = toml::from_str("week_start = 1").unwrap();
        assert_eq!(parsed.week_start, 1);
        assert_eq!(parsed.slots.timeslots, 2);
        assert!(!parsed.show_multi_day_times);
    }

    #[test]
    fn day_bounds_parse_the_configured_times() {
        let mut cfg = ViewConfig::default();
        cfg.slots.day_start = "08:00".to_string();
        cfg.slots.day_end = "18:00".to_string();

        let date = NaiveDate::from_ymd_opt(2017, 1, 8).unwrap();
        let (min, max) = cfg.day_bounds(date).unwrap();
        assert_eq!(min.time(), NaiveTime::from_hms_opt(8, 0, 0).unwrap());
        assert_eq!(max.time(), NaiveTime::from_hms_opt(18, 0, 0).unwrap());
    }

    #[test]
    fn day_bounds_reject_garbage() {
        let mut cfg = ViewConfig::default();
        cfg.slots.day_start = "late".to_string();
        let date = NaiveDate::from_ymd_opt(2017, 1, 8).unwrap();
        assert!(cfg.day_bounds(date).is_err());
    }

    #[test]
    fn minimum_start_difference_rounds_up() {
        let cfg = ViewConfig::default();
        // 30 * 2 / 2 = 30
        assert_eq!(cfg.minimum_start_difference(), 30);

        let mut odd = ViewConfig::default();
        odd.slots.step = 15;
        odd.slots.timeslots = 3;
        // ceil(45 / 2) = 23
        assert_eq!(odd.minimum_start_difference(), 23);
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut cfg = ViewConfig::default();
        cfg.week_start = 1;
        cfg.max_all_day_levels = Some(3);
        cfg.save_to(&path).unwrap();

        let loaded = ViewConfig::load_from(&path).unwrap();
        assert_eq!(loaded.week_start, 1);
        assert_eq!(loaded.max_all_day_levels, Some(3));
    }
}
