mod client;
mod error;
mod source;
mod validation;
mod xml;

pub use client::EntsoeClient;
pub use error::EntsoeError;
pub use source::DayAheadPriceSource;
