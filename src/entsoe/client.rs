use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use tracing::{debug, error, info, warn};

use crate::config::EntsoeConfig;
use crate::metrics;
use crate::models::PricePoint;
use crate::zones;

use super::error::EntsoeError;
use super::source::DayAheadPriceSource;
use super::validation::normalize_series;
use super::xml::{AcknowledgementMarketDocument, PublicationMarketDocument};

/// ENTSO-E reason code for "no matching data".
const NO_DATA_REASON: &str = "999";

/// Metric label for EIC codes the registry does not know.
const UNREGISTERED_ZONE_LABEL: &str = "unregistered";

pub struct EntsoeClient {
    client: Client,
    base_url: String,
    security_token: String,
}

impl EntsoeClient {
    pub fn new(config: &EntsoeConfig) -> Result<Self, EntsoeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            security_token: config.security_token.clone(),
        })
    }

    fn query_params<'a>(
        &'a self,
        eic_code: &'a str,
        period_start: &'a str,
        period_end: &'a str,
    ) -> [(&'static str, &'a str); 6] {
        [
            ("securityToken", self.security_token.as_str()),
            ("documentType", "A44"),
            ("in_Domain", eic_code),
            ("out_Domain", eic_code),
            ("periodStart", period_start),
            ("periodEnd", period_end),
        ]
    }

    fn format_period(dt: &DateTime<Utc>) -> String {
        dt.format("%Y%m%d%H%M").to_string()
    }

    /// Caller-supplied codes are forwarded upstream, so only registry codes
    /// become label values.
    fn metric_zone_label(eic_code: &str) -> &'static str {
        zones::canonical_provider_id(eic_code).unwrap_or(UNREGISTERED_ZONE_LABEL)
    }

    #[tracing::instrument(skip(self), fields(eic_code = %eic_code, start = %start, end = %end))]
    pub async fn fetch_day_ahead_prices(
        &self,
        eic_code: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<PricePoint>, EntsoeError> {
        let start_time = Instant::now();
        let label = Self::metric_zone_label(eic_code);
        metrics::record_fetch_attempt(label, "started");

        let result = self.request_prices(eic_code, start, end).await;

        metrics::record_fetch_duration(label, start_time.elapsed());
        match &result {
            Ok(prices) => {
                metrics::record_fetch_attempt(label, "success");
                info!(count = prices.len(), "Successfully fetched prices");
            }
            Err(e) => {
                metrics::record_fetch_error(label, e.error_type());
            }
        }

        result
    }

    async fn request_prices(
        &self,
        eic_code: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<PricePoint>, EntsoeError> {
        let period_start = Self::format_period(&start);
        let period_end = Self::format_period(&end);
        debug!(
            base_url = %self.base_url,
            period_start = %period_start,
            period_end = %period_end,
            "Fetching day-ahead prices"
        );

        // The URL carries the security token; keep it out of error text.
        let response = self
            .client
            .get(&self.base_url)
            .query(&self.query_params(eic_code, &period_start, &period_end))
            .send()
            .await
            .map_err(|e| EntsoeError::HttpError(e.without_url()))?;
        let status = response.status();

        match status.as_u16() {
            200 => {
                let body = response
                    .text()
                    .await
                    .map_err(|e| EntsoeError::HttpError(e.without_url()))?;
                let prices = Self::parse_response(&body)?;
                let prices = normalize_series(prices, start, end);
                if prices.is_empty() {
                    warn!("Publication document contained no prices inside the requested window");
                    return Err(EntsoeError::NoData);
                }
                Ok(prices)
            }
            401 => {
                error!("ENTSOE API rejected the security token");
                Err(EntsoeError::Unauthorized)
            }
            429 => {
                warn!("Rate limited by ENTSOE API");
                Err(EntsoeError::RateLimited)
            }
            500..=599 => {
                let body = response.text().await.unwrap_or_default();
                error!(status = %status, body = %body, "ENTSOE API server error");
                Err(EntsoeError::TemporaryUnavailable(format!(
                    "HTTP {}: {}",
                    status, body
                )))
            }
            _ => {
                // ENTSO-E reports bad requests (and "no data") as acknowledgements.
                let body = response.text().await.unwrap_or_default();
                if let Some(err) = Self::parse_acknowledgement(&body) {
                    return Err(err);
                }
                error!(status = %status, body = %body, "ENTSOE API request failed");
                Err(EntsoeError::InvalidResponse(format!(
                    "Unexpected HTTP status {}: {}",
                    status, body
                )))
            }
        }
    }

    fn parse_acknowledgement(body: &str) -> Option<EntsoeError> {
        if !body.contains("Acknowledgement_MarketDocument") {
            return None;
        }

        let ack = quick_xml::de::from_str::<AcknowledgementMarketDocument>(body).ok()?;
        if ack.reasons.iter().any(|r| r.code == NO_DATA_REASON) {
            warn!("No data available for requested period");
            return Some(EntsoeError::NoData);
        }

        let reasons = ack
            .reasons
            .iter()
            .map(|r| format!("{} {}", r.code, r.text))
            .collect::<Vec<_>>()
            .join("; ");
        Some(EntsoeError::InvalidResponse(format!(
            "ENTSOE returned acknowledgement: {}",
            reasons
        )))
    }

    fn parse_response(body: &str) -> Result<Vec<PricePoint>, EntsoeError> {
        if let Some(err) = Self::parse_acknowledgement(body) {
            return Err(err);
        }

        let doc = quick_xml::de::from_str::<PublicationMarketDocument>(body).map_err(|e| {
            EntsoeError::XmlParseError(format!(
                "{}. Body starts with: {}",
                e,
                body.chars().take(200).collect::<String>()
            ))
        })?;

        doc.extract_prices()
    }
}

#[async_trait]
impl DayAheadPriceSource for EntsoeClient {
    async fn day_ahead_prices(
        &self,
        eic_code: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<PricePoint>, EntsoeError> {
        self.fetch_day_ahead_prices(eic_code, start, end).await
    }
}
