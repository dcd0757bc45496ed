use crate::domain::model::HolidayRecord;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::time::Duration;

/// Public-holiday source consulted before the weekly schedule.
///
/// `Ok(None)` means the date is a regular day. Any `Err` is a failed lookup;
/// callers decide what a failure means for them.
#[async_trait]
pub trait HolidayOracle: Send + Sync {
    async fn lookup(&self, date: NaiveDate) -> Result<Option<HolidayRecord>>;
}

#[async_trait]
impl<T: HolidayOracle + ?Sized> HolidayOracle for std::sync::Arc<T> {
    async fn lookup(&self, date: NaiveDate) -> Result<Option<HolidayRecord>> {
        (**self).lookup(date).await
    }
}

pub trait ConfigProvider: Send + Sync {
    fn holiday_endpoint(&self) -> &str;
    fn lookup_timeout(&self) -> Duration;
    fn holiday_aware(&self) -> bool;
}
