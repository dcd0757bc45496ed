pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{BrasilApiHolidays, StaticHolidays};
pub use crate::core::{
    parser::parse_timestamp, schedule::WeeklySchedule, service::HoursService, HolidayOracle,
    HolidayRecord, LocalDateTime, ScheduleWindow, Verdict,
};
pub use utils::error::{HoursError, Result};
