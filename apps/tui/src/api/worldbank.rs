use chrono::{DateTime, Local};
use serde_json::Value;
use tracing::{info, warn};

use super::records::{parse_indicator_response, IndicatorRecord, PageMeta};
use super::ApiError;
use crate::domain::Indicator;
use crate::series::{build_series, Observation};

pub const DEFAULT_BASE_URL: &str = "https://api.worldbank.org";

/// Success payload of an indicator screen.
#[derive(Debug, Clone)]
pub struct IndicatorDataset {
    pub indicator: Indicator,
    pub meta: PageMeta,
    pub records: Vec<IndicatorRecord>,
    pub series: Vec<Observation>,
    pub fetched_at: DateTime<Local>,
}

#[derive(Debug, Clone)]
pub struct WorldBankClient {
    http: reqwest::Client,
    base_url: String,
}

impl WorldBankClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn request(&self, indicator: Indicator) -> reqwest::RequestBuilder {
        let url = format!(
            "{}/v2/country/WLD/indicator/{}",
            self.base_url,
            indicator.code()
        );
        let per_page = indicator.per_page().to_string();

        let mut query = vec![("format", "json"), ("per_page", per_page.as_str())];
        if let Some(range) = indicator.date_range() {
            query.push(("date", range));
        }

        self.http.get(url).query(&query)
    }

    /// Fetches, parses and windows one indicator.
    pub async fn fetch(
        &self,
        indicator: Indicator,
        window: usize,
    ) -> Result<IndicatorDataset, ApiError> {
        info!(indicator = indicator.code(), "fetching indicator");

        let response = self.request(indicator).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(indicator = indicator.code(), %status, "indicator request failed");
            return Err(ApiError::from_status(status));
        }

        let body: Value = response.json().await?;
        let (meta, records) = parse_indicator_response(&body)?;
        let series = build_series(&records, window)?;

        info!(
            indicator = indicator.code(),
            records = records.len(),
            points = series.len(),
            "indicator loaded"
        );

        Ok(IndicatorDataset {
            indicator,
            meta,
            records,
            series,
            fetched_at: Local::now(),
        })
    }
}
