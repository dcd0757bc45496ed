use crate::utils::error::{HoursError, Result};
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};
use serde::Deserialize;
use std::fmt;

/// A wall-clock instant in the business's own time zone.
///
/// Only constructible through [`LocalDateTime::new`] (or the parser), so the
/// calendar date is always real and the weekday always agrees with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocalDateTime {
    inner: NaiveDateTime,
}

impl LocalDateTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            HoursError::ValidationError {
                message: format!("{:04}-{:02}-{:02} is not a calendar date", year, month, day),
            }
        })?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
            HoursError::ValidationError {
                message: format!("{:02}:{:02} is not a time of day", hour, minute),
            }
        })?;
        Ok(Self {
            inner: date.and_time(time),
        })
    }

    pub fn year(&self) -> i32 {
        self.inner.year()
    }

    pub fn month(&self) -> u32 {
        self.inner.month()
    }

    pub fn day(&self) -> u32 {
        self.inner.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.inner.weekday()
    }

    /// 0 = Sunday .. 6 = Saturday.
    pub fn weekday_index(&self) -> u32 {
        self.inner.weekday().num_days_from_sunday()
    }

    pub fn hour(&self) -> u32 {
        self.inner.hour()
    }

    pub fn minute(&self) -> u32 {
        self.inner.minute()
    }

    pub fn date(&self) -> NaiveDate {
        self.inner.date()
    }

    pub fn fractional_hour(&self) -> f64 {
        f64::from(self.hour()) + f64::from(self.minute()) / 60.0
    }
}

impl fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner.format("%d/%m/%Y %H:%M"))
    }
}

/// Opening hours applied to a set of weekdays. `close_hour` is exclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleWindow {
    weekdays: Vec<Weekday>,
    open_hour: f64,
    close_hour: f64,
}

impl ScheduleWindow {
    pub fn new(weekdays: &[Weekday], open_hour: f64, close_hour: f64) -> Result<Self> {
        if !(0.0..24.0).contains(&open_hour) || !(0.0..24.0).contains(&close_hour) {
            return Err(HoursError::ValidationError {
                message: format!(
                    "window hours must lie in [0, 24), got {}..{}",
                    open_hour, close_hour
                ),
            });
        }
        if open_hour >= close_hour {
            return Err(HoursError::ValidationError {
                message: format!(
                    "window opens at {} but closes at {}",
                    open_hour, close_hour
                ),
            });
        }
        Ok(Self {
            weekdays: weekdays.to_vec(),
            open_hour,
            close_hour,
        })
    }

    /// For compile-time constant windows already known to satisfy the invariant.
    pub(crate) fn fixed(weekdays: &[Weekday], open_hour: f64, close_hour: f64) -> Self {
        debug_assert!(0.0 <= open_hour && open_hour < close_hour && close_hour < 24.0);
        Self {
            weekdays: weekdays.to_vec(),
            open_hour,
            close_hour,
        }
    }

    pub fn applies_to(&self, weekday: Weekday) -> bool {
        self.weekdays.contains(&weekday)
    }

    pub fn contains(&self, fractional_hour: f64) -> bool {
        fractional_hour >= self.open_hour && fractional_hour < self.close_hour
    }

    pub fn open_hour(&self) -> f64 {
        self.open_hour
    }

    pub fn close_hour(&self) -> f64 {
        self.close_hour
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Verdict {
    Open,
    ClosedWeekend,
    ClosedHoliday(String),
    ClosedOutsideHours,
}

impl Verdict {
    pub fn is_open(&self) -> bool {
        matches!(self, Verdict::Open)
    }

    /// Renders as `[<input>] <verdict>`.
    pub fn labelled(&self, input: &str) -> String {
        format!("[{}] {}", input, self)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Open => write!(f, "Open"),
            Verdict::ClosedWeekend => write!(f, "Closed (weekend)"),
            Verdict::ClosedHoliday(name) => write!(f, "Closed (holiday: {})", name),
            Verdict::ClosedOutsideHours => write!(f, "Closed (outside hours)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HolidayRecord {
    pub date: NaiveDate,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

impl HolidayRecord {
    pub fn new(date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
            kind: None,
        }
    }
}
