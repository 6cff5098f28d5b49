use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde::Deserialize;

use crate::models::PricePoint;

use super::error::EntsoeError;
use super::validation::fill_period;

#[derive(Debug, Deserialize)]
#[serde(rename = "Publication_MarketDocument")]
pub struct PublicationMarketDocument {
    #[serde(rename = "mRID", default)]
    #[allow(dead_code)]
    pub m_rid: String,
    #[serde(rename = "TimeSeries", default)]
    pub time_series: Vec<TimeSeries>,
}

#[derive(Debug, Deserialize)]
pub struct TimeSeries {
    #[serde(rename = "currency_Unit.name", default)]
    pub currency_unit_name: String,
    #[serde(rename = "curveType", default)]
    #[allow(dead_code)]
    pub curve_type: String,
    #[serde(rename = "Period", default)]
    pub periods: Vec<Period>,
}

#[derive(Debug, Deserialize)]
pub struct Period {
    #[serde(rename = "timeInterval")]
    pub time_interval: TimeInterval,
    pub resolution: String,
    #[serde(rename = "Point", default)]
    pub points: Vec<Point>,
}

#[derive(Debug, Deserialize)]
pub struct TimeInterval {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Deserialize)]
pub struct Point {
    pub position: u32,
    #[serde(rename = "price.amount")]
    pub price_amount: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename = "Acknowledgement_MarketDocument")]
pub struct AcknowledgementMarketDocument {
    #[serde(rename = "Reason", default)]
    pub reasons: Vec<Reason>,
}

#[derive(Debug, Deserialize)]
pub struct Reason {
    pub code: String,
    #[serde(default)]
    pub text: String,
}

pub fn parse_resolution(resolution: &str) -> Result<Duration, EntsoeError> {
    let parsed = iso8601_duration::Duration::parse(resolution)
        .map_err(|e| EntsoeError::InvalidResolution(format!("{}: {:?}", resolution, e)))?;

    let minutes = parsed.minute as i64 + (parsed.hour as i64 * 60) + (parsed.day as i64 * 1440);

    if minutes == 0 {
        return Err(EntsoeError::InvalidResolution(format!(
            "Resolution must have non-zero duration: {}",
            resolution
        )));
    }

    Ok(Duration::minutes(minutes))
}

/// ENTSO-E writes interval bounds as `2024-01-31T23:00Z`; full RFC3339 is
/// accepted as well.
pub fn parse_timestamp(timestamp_str: &str) -> Result<DateTime<Utc>, EntsoeError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp_str) {
        return Ok(dt.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(timestamp_str, "%Y-%m-%dT%H:%MZ")
        .map(|naive| naive.and_utc())
        .map_err(|e| EntsoeError::TimestampParseError(format!("{}: {}", timestamp_str, e)))
}

impl PublicationMarketDocument {
    /// Expand every period into price points, in document order.
    pub fn extract_prices(&self) -> Result<Vec<PricePoint>, EntsoeError> {
        let mut prices = Vec::new();

        for time_series in &self.time_series {
            if !time_series.currency_unit_name.is_empty() && time_series.currency_unit_name != "EUR" {
                return Err(EntsoeError::InvalidResponse(format!(
                    "Unexpected currency {}",
                    time_series.currency_unit_name
                )));
            }

            for period in &time_series.periods {
                prices.extend(fill_period(period)?);
            }
        }

        Ok(prices)
    }
}
