pub mod parser;
pub mod schedule;
pub mod service;

pub use crate::domain::model::{HolidayRecord, LocalDateTime, ScheduleWindow, Verdict};
pub use crate::domain::ports::{ConfigProvider, HolidayOracle};
pub use crate::utils::error::Result;
