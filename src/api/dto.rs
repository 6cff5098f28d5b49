use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{CountryZone, SubZone};
use crate::zones::CountryInfo;

#[derive(Debug, Serialize)]
pub struct SubZoneEntry {
    pub name: String,
    pub code: String,
    pub provider_zone_id: String,
}

impl From<&SubZone> for SubZoneEntry {
    fn from(z: &SubZone) -> Self {
        Self {
            name: z.description.to_string(),
            code: z.zone_code.to_string(),
            provider_zone_id: z.provider_zone_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CountryZonesResponse {
    pub country: String,
    pub country_name: String,
    pub zones: Vec<SubZoneEntry>,
}

impl CountryZonesResponse {
    pub fn new(country: &CountryZone, sub_zones: &[&SubZone]) -> Self {
        Self {
            country: country.country_code_3.to_string(),
            country_name: country.display_name.to_string(),
            zones: sub_zones.iter().map(|z| SubZoneEntry::from(*z)).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CountrySummary {
    pub country_code: String,
    pub country_name: String,
    pub provider_zone_id: String,
    pub multi_zone: bool,
}

#[derive(Debug, Serialize)]
pub struct CountriesResponse {
    pub countries: Vec<CountrySummary>,
}

#[derive(Debug, Serialize)]
pub struct CountryDetailResponse {
    pub country_code_2: Option<String>,
    pub country_code_3: String,
    pub country_name: String,
    pub provider_zone_id: String,
    pub timezone: String,
    pub zones: Vec<SubZoneEntry>,
}

impl From<CountryInfo> for CountryDetailResponse {
    fn from(info: CountryInfo) -> Self {
        Self {
            country_code_2: info.zone.country_code_2.map(String::from),
            country_code_3: info.zone.country_code_3.to_string(),
            country_name: info.zone.display_name.to_string(),
            provider_zone_id: info.zone.provider_zone_id.to_string(),
            timezone: info.zone.timezone.to_string(),
            zones: info.sub_zones.iter().map(SubZoneEntry::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}
