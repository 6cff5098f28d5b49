use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::models::PricePoint;

use super::error::EntsoeError;

/// Source of day-ahead prices for one bidding zone.
#[async_trait]
pub trait DayAheadPriceSource: Send + Sync {
    /// Prices for `eic_code` over `[start, end)`, ascending by timestamp.
    async fn day_ahead_prices(
        &self,
        eic_code: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<PricePoint>, EntsoeError>;
}
