use crate::adapters::http::DEFAULT_HOLIDAY_ENDPOINT;
use crate::core::{ConfigProvider, HolidayRecord};
use crate::core::service::DEFAULT_LOOKUP_TIMEOUT;
use crate::utils::error::{HoursError, Result};
use crate::utils::validation::{validate_range, validate_url, Validate};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"));

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub holidays: HolidaySettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HolidaySettings {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default)]
    pub enabled: bool,
    /// Extra dates served by the offline oracle.
    #[serde(default)]
    pub local: Vec<HolidayRecord>,
}

impl Default for HolidaySettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout_seconds(),
            enabled: false,
            local: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingSettings {
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub json: bool,
}

fn default_endpoint() -> String {
    DEFAULT_HOLIDAY_ENDPOINT.to_string()
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_LOOKUP_TIMEOUT.as_secs()
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        toml::from_str(&processed).map_err(|e| HoursError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unknown names are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl ConfigProvider for TomlConfig {
    fn holiday_endpoint(&self) -> &str {
        &self.holidays.endpoint
    }

    fn lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.holidays.timeout_seconds)
    }

    fn holiday_aware(&self) -> bool {
        self.holidays.enabled
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("holidays.endpoint", &self.holidays.endpoint)?;
        validate_range("holidays.timeout_seconds", self.holidays.timeout_seconds, 1, 60)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.holiday_endpoint(), DEFAULT_HOLIDAY_ENDPOINT);
        assert_eq!(config.lookup_timeout(), Duration::from_secs(5));
        assert!(!config.holiday_aware());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[holidays]
endpoint = "http://localhost:9000/feriados/v1"
timeout_seconds = 3
enabled = true

[[holidays.local]]
date = "2025-11-20"
name = "Consciência Negra"

[logging]
verbose = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.holiday_endpoint(), "http://localhost:9000/feriados/v1");
        assert_eq!(config.lookup_timeout(), Duration::from_secs(3));
        assert!(config.holiday_aware());
        assert!(config.logging.verbose);
        assert!(!config.logging.json);
        assert_eq!(
            config.holidays.local,
            vec![HolidayRecord::new(
                NaiveDate::from_ymd_opt(2025, 11, 20).unwrap(),
                "Consciência Negra"
            )]
        );
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("BUSINESS_HOURS_TEST_ENDPOINT", "https://holidays.test/v1");

        let config = TomlConfig::from_toml_str(
            r#"
[holidays]
endpoint = "${BUSINESS_HOURS_TEST_ENDPOINT}"
"#,
        )
        .unwrap();
        assert_eq!(config.holidays.endpoint, "https://holidays.test/v1");

        std::env::remove_var("BUSINESS_HOURS_TEST_ENDPOINT");
    }

    #[test]
    fn test_config_validation() {
        let bad_url = TomlConfig::from_toml_str("[holidays]\nendpoint = \"not-a-url\"\n").unwrap();
        assert!(bad_url.validate().is_err());

        let bad_timeout = TomlConfig::from_toml_str("[holidays]\ntimeout_seconds = 0\n").unwrap();
        assert!(matches!(
            bad_timeout.validate(),
            Err(HoursError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[holidays\nenabled = true").unwrap_err();
        assert!(matches!(err, HoursError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[holidays]\nenabled = true\ntimeout_seconds = 10\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert!(config.holiday_aware());
        assert_eq!(config.lookup_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TomlConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, HoursError::IoError(_)));
    }
}
