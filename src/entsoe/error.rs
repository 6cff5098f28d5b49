use thiserror::Error;

#[derive(Debug, Error)]
pub enum EntsoeError {
    #[error("No data available for the requested period (code 999)")]
    NoData,

    #[error("Rate limited by ENTSOE API (HTTP 429)")]
    RateLimited,

    #[error("ENTSOE API rejected the security token (HTTP 401)")]
    Unauthorized,

    #[error("ENTSOE API temporarily unavailable: {0}")]
    TemporaryUnavailable(String),

    #[error("Failed to parse XML response: {0}")]
    XmlParseError(String),

    #[error("Invalid response structure: {0}")]
    InvalidResponse(String),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid resolution format: {0}")]
    InvalidResolution(String),

    #[error("Failed to parse timestamp: {0}")]
    TimestampParseError(String),

    #[error("First position of period starting {0} is missing")]
    MissingFirstPosition(String),
}

impl EntsoeError {
    /// Metric label for this error.
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::NoData => "no_data",
            Self::RateLimited => "rate_limited",
            Self::Unauthorized => "unauthorized",
            Self::TemporaryUnavailable(_) => "temporary",
            Self::XmlParseError(_) => "parse_error",
            Self::InvalidResponse(_) => "invalid_response",
            Self::HttpError(_) => "http_error",
            Self::InvalidResolution(_) => "invalid_resolution",
            Self::TimestampParseError(_) => "timestamp_parse_error",
            Self::MissingFirstPosition(_) => "missing_first_position",
        }
    }
}
