//! Static registry of ENTSO-E bidding zones.
//!
//! Maps ISO 3166-1 country codes and sub-zone codes (`DE_50HZ`, `NO_2`, ...)
//! to the EIC codes the ENTSO-E Transparency Platform expects.

mod data;
mod registry;

pub use registry::{
    all_country_codes, all_provider_ids, canonical_provider_id, country_info,
    export, find_country, find_sub_zone, resolve_provider_id, reverse_resolve,
    reverse_resolve_country, sub_zones, CountryExport, CountryInfo, RegistryExport,
    SubZoneExport,
};
