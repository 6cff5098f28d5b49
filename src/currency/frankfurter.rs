use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::CurrencyConfig;

use super::error::CurrencyError;
use super::ExchangeRateSource;

#[derive(Debug, Deserialize)]
struct RatesResponse {
    #[serde(default)]
    rates: HashMap<String, f64>,
}

/// Client for the Frankfurter (ECB reference rate) API.
pub struct FrankfurterClient {
    client: Client,
    base_url: String,
    target_currency: String,
}

impl FrankfurterClient {
    pub fn new(config: &CurrencyConfig) -> Result<Self, CurrencyError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            target_currency: config.target_currency.to_ascii_uppercase(),
        })
    }

    pub fn target_currency(&self) -> &str {
        &self.target_currency
    }

    fn rate_url(&self, date: NaiveDate) -> String {
        format!("{}/{}", self.base_url, date.format("%Y-%m-%d"))
    }

    fn extract_rate(&self, response: RatesResponse) -> Result<f64, CurrencyError> {
        let rate = response
            .rates
            .get(&self.target_currency)
            .copied()
            .ok_or_else(|| CurrencyError::MissingRate(self.target_currency.clone()))?;

        if !(rate.is_finite() && rate > 0.0) {
            return Err(CurrencyError::InvalidRate {
                currency: self.target_currency.clone(),
                rate,
            });
        }

        Ok(rate)
    }
}

#[async_trait]
impl ExchangeRateSource for FrankfurterClient {
    #[tracing::instrument(skip(self), fields(currency = %self.target_currency))]
    async fn eur_rate(&self, date: NaiveDate) -> Result<f64, CurrencyError> {
        if self.target_currency == "EUR" {
            return Ok(1.0);
        }

        let response = self
            .client
            .get(self.rate_url(date))
            .query(&[("from", "EUR"), ("to", self.target_currency.as_str())])
            .send()
            .await
            .map_err(|e| CurrencyError::HttpError(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CurrencyError::UnexpectedStatus(status.as_u16()));
        }

        let body: RatesResponse = response
            .json()
            .await
            .map_err(|e| CurrencyError::HttpError(e.without_url()))?;
        let rate = self.extract_rate(body)?;
        debug!(rate = rate, "Fetched exchange rate");
        Ok(rate)
    }
}
