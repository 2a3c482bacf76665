use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

use super::ApiError;

/// An `{id, value}` pair as the World Bank API nests them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Reference {
    pub id: String,
    #[serde(rename = "value")]
    pub label: String,
}

/// One (indicator, country, year) observation.
///
/// `indicator` and `country` are the only required fields; everything else
/// falls back to an empty value so a single odd field never costs the record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IndicatorRecord {
    pub indicator: Reference,
    pub country: Reference,
    #[serde(rename = "countryiso3code", default, deserialize_with = "lenient_string")]
    pub iso3_code: String,
    #[serde(rename = "date", default, deserialize_with = "lenient_string")]
    pub period: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub value: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub unit: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub obs_status: String,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub decimal: u32,
}

impl IndicatorRecord {
    pub fn year(&self) -> Option<i32> {
        self.period.trim().parse().ok()
    }
}

/// Paging header from the first element of the response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PageMeta {
    #[serde(default, deserialize_with = "lenient_count")]
    pub page: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub pages: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub per_page: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub total: Option<u32>,
    #[serde(rename = "lastupdated", default)]
    pub last_updated: Option<String>,
}

pub fn parse_indicator_body(body: &str) -> Result<(PageMeta, Vec<IndicatorRecord>), ApiError> {
    let value: Value = serde_json::from_str(body)?;
    parse_indicator_response(&value)
}

/// Splits a `[metadata, records]` payload into typed records.
///
/// Only the outer shape is fatal. Record entries that fail to deserialize
/// are dropped one by one.
pub fn parse_indicator_response(
    body: &Value,
) -> Result<(PageMeta, Vec<IndicatorRecord>), ApiError> {
    let Some([meta, records, ..]) = body.as_array().map(Vec::as_slice) else {
        return Err(ApiError::malformed("expected a [metadata, records] array"));
    };
    let Some(records) = records.as_array() else {
        return Err(ApiError::malformed("record list is not an array"));
    };

    let meta = PageMeta::deserialize(meta).unwrap_or_default();

    let parsed: Vec<IndicatorRecord> = records
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match IndicatorRecord::deserialize(item) {
            Ok(record) => Some(record),
            Err(e) => {
                debug!(index, error = %e, "dropping malformed record");
                None
            }
        })
        .collect();

    debug!(
        kept = parsed.len(),
        dropped = records.len() - parsed.len(),
        "parsed indicator records"
    );

    Ok((meta, parsed))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_f64())
}

fn lenient_decimal<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0))
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}
