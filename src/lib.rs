pub mod api;
pub mod config;
pub mod currency;
pub mod entsoe;
pub mod metrics;
pub mod models;
pub mod prices;
pub mod zones;

pub use api::{create_router, AppError, AppState, CorrelationId};
pub use crate::config::AppConfig;
pub use currency::{CurrencyError, ExchangeRateSource, FrankfurterClient};
pub use entsoe::{DayAheadPriceSource, EntsoeClient, EntsoeError};
pub use crate::metrics::init_metrics;
pub use prices::{PriceRequest, PriceRequestError, PriceService, PriceSettings};
