use crate::core::{HolidayOracle, HolidayRecord};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

/// Fixed in-memory holiday list. Used offline and as a test double.
#[derive(Debug, Clone, Default)]
pub struct StaticHolidays {
    by_date: HashMap<NaiveDate, HolidayRecord>,
}

impl StaticHolidays {
    pub fn new(records: impl IntoIterator<Item = HolidayRecord>) -> Self {
        Self {
            by_date: records.into_iter().map(|r| (r.date, r)).collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }

    /// Records for `year`, ordered by date.
    pub fn for_year(&self, year: i32) -> Vec<HolidayRecord> {
        let mut records: Vec<HolidayRecord> = self
            .by_date
            .values()
            .filter(|r| r.date.year() == year)
            .cloned()
            .collect();
        records.sort_by_key(|r| r.date);
        records
    }
}

#[async_trait]
impl HolidayOracle for StaticHolidays {
    async fn lookup(&self, date: NaiveDate) -> Result<Option<HolidayRecord>> {
        Ok(self.by_date.get(&date).cloned())
    }
}
