use crate::adapters::http::DEFAULT_HOLIDAY_ENDPOINT;
use crate::config::toml_config::TomlConfig;
use crate::core::service::DEFAULT_LOOKUP_TIMEOUT;
use crate::core::{ConfigProvider, HolidayRecord};
use crate::utils::error::{HoursError, Result};
use crate::utils::validation::{validate_range, validate_url, Validate};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "business-hours")]
#[command(about = "Check whether the business is open at a given date and time")]
pub struct CliConfig {
    /// Timestamps as DD/MM/YYYY HH:mm or YYYY-MM-DD HH:mm. Runs the demo set when empty.
    pub timestamps: Vec<String>,

    #[arg(long, help = "Treat public holidays as closed")]
    pub holidays: bool,

    #[arg(long, help = "Base URL of the yearly holiday API")]
    pub holiday_api: Option<String>,

    #[arg(long, help = "Holiday lookup timeout in seconds")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Load settings from a TOML file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Use only locally configured holidays")]
    pub offline: bool,

    #[arg(long, value_name = "YYYY", help = "List the holidays of a year and exit")]
    pub list_year: Option<i32>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[arg(skip)]
    pub local_holidays: Vec<HolidayRecord>,
}

impl CliConfig {
    /// Fills settings not given on the command line from `file`.
    pub fn merge_file(&mut self, file: TomlConfig) {
        if self.holiday_api.is_none() {
            self.holiday_api = Some(file.holidays.endpoint);
        }
        if self.timeout_seconds.is_none() {
            self.timeout_seconds = Some(file.holidays.timeout_seconds);
        }
        self.holidays |= file.holidays.enabled;
        self.verbose |= file.logging.verbose;
        self.log_json |= file.logging.json;
        self.local_holidays.extend(file.holidays.local);
    }

    /// Loads and merges `--config` when one was given.
    pub fn load_config_file(&mut self) -> Result<()> {
        if let Some(path) = self.config.clone() {
            let file = TomlConfig::from_file(&path).map_err(|e| match e {
                HoursError::IoError(io) => HoursError::ConfigError {
                    message: format!("cannot read {}: {}", path.display(), io),
                },
                other => other,
            })?;
            file.validate()?;
            tracing::debug!("Loaded settings from {}", path.display());
            self.merge_file(file);
        }
        Ok(())
    }

    fn timeout_secs(&self) -> u64 {
        self.timeout_seconds
            .unwrap_or_else(|| DEFAULT_LOOKUP_TIMEOUT.as_secs())
    }
}

impl ConfigProvider for CliConfig {
    fn holiday_endpoint(&self) -> &str {
        self.holiday_api.as_deref().unwrap_or(DEFAULT_HOLIDAY_ENDPOINT)
    }

    fn lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs())
    }

    fn holiday_aware(&self) -> bool {
        self.holidays
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("holiday_api", self.holiday_endpoint())?;
        validate_range("timeout_seconds", self.timeout_secs(), 1, 60)?;
        if let Some(year) = self.list_year {
            validate_range("list_year", year, 1900, 2199)?;
        }
        Ok(())
    }
}
