mod error;
mod service;

pub use error::PriceRequestError;
pub use service::{
    DateRange, PriceRequest, PriceService, PriceSettings, ResolutionSource, ResolvedZone,
};
