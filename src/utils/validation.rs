use crate::utils::error::{HoursError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Checks a holiday API base URL. The year is appended as a path segment,
/// so the base must be plain http(s) with no query or fragment.
pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(HoursError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => {
            if !matches!(url.scheme(), "http" | "https") {
                return Err(HoursError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: url_str.to_string(),
                    reason: format!("holiday API must be http or https, not {}", url.scheme()),
                });
            }
            if url.query().is_some() || url.fragment().is_some() {
                return Err(HoursError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: url_str.to_string(),
                    reason: "holiday API base cannot carry a query or fragment; the year is appended to its path".to_string(),
                });
            }
            Ok(())
        }
        Err(e) => Err(HoursError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(HoursError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("{} must be between {} and {}", field_name, min, max),
        });
    }
    Ok(())
}
