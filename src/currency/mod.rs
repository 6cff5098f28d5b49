//! EUR to local currency exchange rates.

mod error;
mod frankfurter;

use async_trait::async_trait;
use chrono::NaiveDate;

pub use error::CurrencyError;
pub use frankfurter::FrankfurterClient;

#[async_trait]
pub trait ExchangeRateSource: Send + Sync {
    /// Units of the configured local currency per 1 EUR on `date`.
    async fn eur_rate(&self, date: NaiveDate) -> Result<f64, CurrencyError>;
}
