use serde::Serialize;

/// A country's main bidding zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountryZone {
    pub country_code_2: Option<&'static str>,
    pub country_code_3: &'static str,
    pub provider_zone_id: &'static str,
    pub display_name: &'static str,
    pub timezone: &'static str,
}

/// One price area of a country split into several bidding zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubZone {
    /// ISO2 code of the owning country.
    pub country_code: &'static str,
    pub zone_code: &'static str,
    pub provider_zone_id: &'static str,
    pub description: &'static str,
    pub timezone: &'static str,
}

impl CountryZone {
    /// Get timezone as chrono_tz::Tz
    pub fn tz(&self) -> Result<chrono_tz::Tz, String> {
        parse_timezone(self.timezone)
    }
}

impl SubZone {
    pub fn tz(&self) -> Result<chrono_tz::Tz, String> {
        parse_timezone(self.timezone)
    }
}

fn parse_timezone(name: &str) -> Result<chrono_tz::Tz, String> {
    name.parse::<chrono_tz::Tz>()
        .map_err(|e| format!("Invalid timezone {}: {}", name, e))
}
