use thiserror::Error;

#[derive(Debug, Error)]
pub enum CurrencyError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Currency service returned HTTP {0}")]
    UnexpectedStatus(u16),

    #[error("Rate for {0} missing from response")]
    MissingRate(String),

    #[error("Invalid rate {rate} for {currency}")]
    InvalidRate { currency: String, rate: f64 },
}
