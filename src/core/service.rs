use crate::core::parser::parse_timestamp;
use crate::core::schedule::WeeklySchedule;
use crate::core::HolidayOracle;
use crate::domain::model::{HolidayRecord, Verdict};
use crate::utils::error::{HoursError, Result};
use chrono::NaiveDate;
use std::time::Duration;

pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Runs parse, then the optional holiday check, then the weekly schedule.
pub struct HoursService<O: HolidayOracle> {
    oracle: O,
    schedule: WeeklySchedule,
    lookup_timeout: Duration,
}

impl<O: HolidayOracle> HoursService<O> {
    pub fn new(oracle: O) -> Self {
        Self {
            oracle,
            schedule: WeeklySchedule::standard(),
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }

    pub fn with_schedule(mut self, schedule: WeeklySchedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = timeout;
        self
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Schedule-only check; never touches the oracle.
    pub fn evaluate(&self, timestamp: &str) -> Result<Verdict> {
        let dt = parse_timestamp(timestamp)?;
        Ok(self.schedule.evaluate(&dt))
    }

    pub async fn evaluate_full(&self, timestamp: &str, holiday_aware: bool) -> Result<Verdict> {
        // Parse
        let dt = parse_timestamp(timestamp)?;
        tracing::debug!(
            "Parsed '{}' as {} ({:?}, weekday {})",
            timestamp,
            dt,
            dt.weekday(),
            dt.weekday_index()
        );

        // Holiday check
        if holiday_aware {
            if let Some(holiday) = self.holiday_for(dt.date()).await {
                tracing::info!("{} is a public holiday: {}", dt.date(), holiday.name);
                return Ok(Verdict::ClosedHoliday(holiday.name));
            }
        }

        // Schedule check
        let verdict = self.schedule.evaluate(&dt);
        tracing::debug!("Schedule verdict for {}: {}", dt, verdict);
        Ok(verdict)
    }

    pub async fn evaluate_labelled(&self, timestamp: &str, holiday_aware: bool) -> Result<String> {
        let verdict = self.evaluate_full(timestamp, holiday_aware).await?;
        Ok(verdict.labelled(timestamp))
    }

    /// Single attempt. A failed or slow lookup counts as "not a holiday" so
    /// the schedule check stays available when the holiday source is down.
    async fn holiday_for(&self, date: NaiveDate) -> Option<HolidayRecord> {
        let outcome = match tokio::time::timeout(self.lookup_timeout, self.oracle.lookup(date)).await
        {
            Ok(result) => result,
            Err(_) => Err(HoursError::LookupTimeout {
                timeout_ms: self.lookup_timeout.as_millis(),
            }),
        };

        match outcome {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(
                    "Holiday lookup for {} failed, using regular schedule: {}",
                    date,
                    e
                );
                None
            }
        }
    }
}
