// Adapters layer: concrete holiday sources behind the HolidayOracle port.

pub mod http;
pub mod memory;

pub use http::BrasilApiHolidays;
pub use memory::StaticHolidays;
