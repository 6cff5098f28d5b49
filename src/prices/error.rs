use thiserror::Error;

use crate::entsoe::EntsoeError;

#[derive(Debug, Error)]
pub enum PriceRequestError {
    #[error("Both start and end dates are required")]
    MissingDates,

    #[error("Invalid date {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    #[error("End date {end} is before start date {start}")]
    InvalidRange { start: String, end: String },

    #[error("Unknown country code: {0}")]
    UnknownCountry(String),

    #[error("Unknown bidding zone: {0}")]
    UnknownZone(String),

    #[error("{0}")]
    Upstream(#[from] EntsoeError),
}

impl PriceRequestError {
    /// Errors caused by the caller's input rather than by the upstream service.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Upstream(_))
    }
}
