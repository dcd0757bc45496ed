use crate::core::{ConfigProvider, HolidayOracle, HolidayRecord};
use crate::utils::error::{HoursError, Result};
use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use reqwest::Client;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

pub const DEFAULT_HOLIDAY_ENDPOINT: &str = "https://brasilapi.com.br/api/feriados/v1";

/// Holiday oracle backed by a `GET {base}/{year}` JSON endpoint
/// (BrasilAPI's `feriados/v1` shape). Each year is fetched at most once
/// per successful response.
pub struct BrasilApiHolidays {
    client: Client,
    base_url: String,
    cache: RwLock<HashMap<i32, Arc<Vec<HolidayRecord>>>>,
}

impl BrasilApiHolidays {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("business-hours/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            cache: RwLock::new(HashMap::new()),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.holiday_endpoint(), config.lookup_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn holidays_for_year(&self, year: i32) -> Result<Arc<Vec<HolidayRecord>>> {
        if let Some(cached) = self.cache.read().await.get(&year) {
            tracing::debug!("Holiday cache hit for {}", year);
            return Ok(Arc::clone(cached));
        }

        let url = format!("{}/{}", self.base_url, year);
        tracing::debug!("Making holiday API request to: {}", url);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        tracing::debug!("Holiday API response status: {}", status);
        if !status.is_success() {
            return Err(HoursError::HolidayApiStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let holidays: Vec<HolidayRecord> = serde_json::from_str(&body)?;
        tracing::debug!("Loaded {} holidays for {}", holidays.len(), year);

        let holidays = Arc::new(holidays);
        self.cache.write().await.insert(year, Arc::clone(&holidays));
        Ok(holidays)
    }
}

#[async_trait]
impl HolidayOracle for BrasilApiHolidays {
    async fn lookup(&self, date: NaiveDate) -> Result<Option<HolidayRecord>> {
        let holidays = self.holidays_for_year(date.year()).await?;
        Ok(holidays.iter().find(|h| h.date == date).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn holidays_2025() -> serde_json::Value {
        serde_json::json!([
            {"date": "2025-01-01", "name": "Confraternização mundial", "type": "national"},
            {"date": "2025-04-21", "name": "Tiradentes", "type": "national"},
            {"date": "2025-12-25", "name": "Natal", "type": "national"}
        ])
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_lookup_finds_holiday() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/feriados/v1/2025");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(holidays_2025());
        });

        let oracle =
            BrasilApiHolidays::new(server.url("/feriados/v1"), Duration::from_secs(5)).unwrap();
        let found = oracle.lookup(date(2025, 12, 25)).await.unwrap();

        api_mock.assert();
        let found = found.unwrap();
        assert_eq!(found.name, "Natal");
        assert_eq!(found.kind.as_deref(), Some("national"));
    }

    #[tokio::test]
    async fn test_lookup_regular_day_is_none() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/2025");
            then.status(200).json_body(holidays_2025());
        });

        let oracle = BrasilApiHolidays::new(server.base_url(), Duration::from_secs(5)).unwrap();
        assert_eq!(oracle.lookup(date(2025, 6, 5)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_one_request_per_year() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/2025");
            then.status(200).json_body(holidays_2025());
        });

        let oracle = BrasilApiHolidays::new(server.base_url(), Duration::from_secs(5)).unwrap();
        oracle.lookup(date(2025, 12, 25)).await.unwrap();
        oracle.lookup(date(2025, 12, 26)).await.unwrap();
        oracle.lookup(date(2025, 1, 1)).await.unwrap();

        api_mock.assert_hits(1);
    }

    #[tokio::test]
    async fn test_trailing_slash_in_base_url() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/api/2026");
            then.status(200).json_body(serde_json::json!([]));
        });

        let oracle =
            BrasilApiHolidays::new(server.url("/api/"), Duration::from_secs(5)).unwrap();
        assert_eq!(oracle.base_url(), server.url("/api"));
        assert_eq!(oracle.lookup(date(2026, 1, 2)).await.unwrap(), None);
        api_mock.assert();
    }

    #[tokio::test]
    async fn test_error_status_is_not_cached() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/2025");
            then.status(500);
        });

        let oracle = BrasilApiHolidays::new(server.base_url(), Duration::from_secs(5)).unwrap();

        let err = oracle.lookup(date(2025, 12, 25)).await.unwrap_err();
        assert!(matches!(err, HoursError::HolidayApiStatus { status: 500, .. }));
        assert!(oracle.lookup(date(2025, 12, 25)).await.is_err());

        api_mock.assert_hits(2);
    }

    #[tokio::test]
    async fn test_malformed_body_is_serialization_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/2025");
            then.status(200).body("<html>maintenance</html>");
        });

        let oracle = BrasilApiHolidays::new(server.base_url(), Duration::from_secs(5)).unwrap();
        let err = oracle.lookup(date(2025, 12, 25)).await.unwrap_err();
        assert!(matches!(err, HoursError::SerializationError(_)));
        assert!(err.is_lookup_failure());
    }

    #[tokio::test]
    async fn test_slow_endpoint_times_out() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/2025");
            then.status(200)
                .delay(Duration::from_secs(2))
                .json_body(holidays_2025());
        });

        let oracle =
            BrasilApiHolidays::new(server.base_url(), Duration::from_millis(200)).unwrap();
        let err = oracle.lookup(date(2025, 12, 25)).await.unwrap_err();
        match err {
            HoursError::HolidayApiError(e) => assert!(e.is_timeout()),
            other => panic!("expected a timeout, got {:?}", other),
        }
    }
}
