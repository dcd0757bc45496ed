use crate::domain::model::LocalDateTime;
use crate::utils::error::{HoursError, Result};
use regex::{Captures, Regex};
use std::sync::LazyLock;

// D/M/YYYY H:mm, day/month/hour optionally zero-padded.
static SLASH_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4}) (\d{1,2}):(\d{2})$").expect("valid slash pattern")
});

// YYYY-MM-DD HH:mm, with a space or `T` between date and time.
static ISO_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})-(\d{2})[ T](\d{2}):(\d{2})$").expect("valid iso pattern")
});

/// Parses a timestamp already expressed in the business's local time.
pub fn parse_timestamp(input: &str) -> Result<LocalDateTime> {
    let trimmed = input.trim();

    let (year, month, day, hour, minute) = if let Some(caps) = SLASH_FORMAT.captures(trimmed) {
        (
            field(input, &caps, 3)?,
            field(input, &caps, 2)?,
            field(input, &caps, 1)?,
            field(input, &caps, 4)?,
            field(input, &caps, 5)?,
        )
    } else if let Some(caps) = ISO_FORMAT.captures(trimmed) {
        (
            field(input, &caps, 1)?,
            field(input, &caps, 2)?,
            field(input, &caps, 3)?,
            field(input, &caps, 4)?,
            field(input, &caps, 5)?,
        )
    } else {
        return Err(HoursError::invalid_timestamp(
            input,
            "expected DD/MM/YYYY HH:mm or YYYY-MM-DD HH:mm",
        ));
    };

    let year = i32::try_from(year)
        .map_err(|_| HoursError::invalid_timestamp(input, "year out of range"))?;

    LocalDateTime::new(year, month, day, hour, minute).map_err(|e| match e {
        HoursError::ValidationError { message } => HoursError::invalid_timestamp(input, message),
        other => other,
    })
}

fn field(input: &str, caps: &Captures<'_>, index: usize) -> Result<u32> {
    caps.get(index)
        .ok_or_else(|| HoursError::invalid_timestamp(input, "missing component"))?
        .as_str()
        .parse()
        .map_err(|_| HoursError::invalid_timestamp(input, "component is not a number"))
}
