pub mod bidding_zone;
pub mod price;

pub use bidding_zone::{CountryZone, SubZone};
pub use price::{PricePoint, PriceRecord};
