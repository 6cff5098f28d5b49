use std::collections::{BTreeMap, BTreeSet, HashMap};

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::models::{CountryZone, SubZone};

use super::data::{COUNTRY_ZONES, SUB_ZONES};

// ─────────────────────────────────────────────────────────────────────────────
// Lookup indexes, built once from the literal tables
// ─────────────────────────────────────────────────────────────────────────────

/// ISO2 and ISO3 (uppercase) -> country.
static COUNTRY_INDEX: Lazy<HashMap<&'static str, &'static CountryZone>> = Lazy::new(|| {
    let mut index = HashMap::with_capacity(COUNTRY_ZONES.len() * 2);
    for zone in COUNTRY_ZONES {
        index.insert(zone.country_code_3, zone);
        if let Some(iso2) = zone.country_code_2 {
            index.insert(iso2, zone);
        }
    }
    index
});

/// Sub-zone code (uppercase) -> sub-zone.
static SUB_ZONE_INDEX: Lazy<HashMap<&'static str, &'static SubZone>> =
    Lazy::new(|| SUB_ZONES.iter().map(|z| (z.zone_code, z)).collect());

/// Owning ISO2 code -> sub-zones in table order.
static SUB_ZONES_BY_COUNTRY: Lazy<HashMap<&'static str, Vec<&'static SubZone>>> =
    Lazy::new(|| {
        let mut index: HashMap<&'static str, Vec<&'static SubZone>> = HashMap::new();
        for zone in SUB_ZONES {
            index.entry(zone.country_code).or_default().push(zone);
        }
        index
    });

#[derive(Debug, Clone, Copy)]
struct ProviderEntry {
    canonical: &'static str,
    country: &'static CountryZone,
}

/// Uppercased EIC code -> owning country. Countries are indexed before
/// sub-zones so a main zone always wins.
static PROVIDER_INDEX: Lazy<HashMap<String, ProviderEntry>> = Lazy::new(|| {
    let mut index = HashMap::with_capacity(COUNTRY_ZONES.len() + SUB_ZONES.len());

    for zone in COUNTRY_ZONES {
        let previous = index.insert(
            zone.provider_zone_id.to_ascii_uppercase(),
            ProviderEntry {
                canonical: zone.provider_zone_id,
                country: zone,
            },
        );
        debug_assert!(previous.is_none(), "duplicate EIC {}", zone.provider_zone_id);
    }

    for zone in SUB_ZONES {
        let Some(country) = country_by_code(zone.country_code) else {
            debug_assert!(false, "sub-zone {} has unknown country", zone.zone_code);
            continue;
        };
        let key = zone.provider_zone_id.to_ascii_uppercase();
        debug_assert!(!index.contains_key(&key), "duplicate EIC {}", zone.provider_zone_id);
        index.entry(key).or_insert(ProviderEntry {
            canonical: zone.provider_zone_id,
            country,
        });
    }

    index
});

fn country_by_code(code: &str) -> Option<&'static CountryZone> {
    COUNTRY_INDEX.get(code.to_ascii_uppercase().as_str()).copied()
}

// ─────────────────────────────────────────────────────────────────────────────
// Lookups
// ─────────────────────────────────────────────────────────────────────────────

/// Resolve an ISO2/ISO3 country code or a sub-zone code to its EIC code.
///
/// Country codes are checked first, then sub-zone codes across all
/// countries. Matching is case-insensitive.
pub fn resolve_provider_id(code: &str) -> Option<&'static str> {
    let code = code.trim().to_ascii_uppercase();
    if let Some(country) = COUNTRY_INDEX.get(code.as_str()) {
        return Some(country.provider_zone_id);
    }
    find_sub_zone(&code).map(|zone| zone.provider_zone_id)
}

pub fn find_country(code: &str) -> Option<&'static CountryZone> {
    country_by_code(code.trim())
}

pub fn find_sub_zone(zone_code: &str) -> Option<&'static SubZone> {
    SUB_ZONE_INDEX
        .get(zone_code.trim().to_ascii_uppercase().as_str())
        .copied()
}

/// Country record together with its sub-zones.
#[derive(Debug, Clone, Serialize)]
pub struct CountryInfo {
    #[serde(flatten)]
    pub zone: CountryZone,
    pub sub_zones: Vec<SubZone>,
}

pub fn country_info(code: &str) -> Option<CountryInfo> {
    let zone = find_country(code)?;
    Some(CountryInfo {
        zone: *zone,
        sub_zones: sub_zones_of(zone).into_iter().copied().collect(),
    })
}

/// Partitions of a multi-zone country. Empty for single-zone countries and
/// unknown codes.
pub fn sub_zones(code: &str) -> Vec<&'static SubZone> {
    find_country(code).map(sub_zones_of).unwrap_or_default()
}

fn sub_zones_of(zone: &CountryZone) -> Vec<&'static SubZone> {
    zone.country_code_2
        .and_then(|iso2| SUB_ZONES_BY_COUNTRY.get(iso2))
        .cloned()
        .unwrap_or_default()
}

/// Country owning an EIC code, whether it is the main zone or a sub-zone.
pub fn reverse_resolve_country(provider_zone_id: &str) -> Option<&'static CountryZone> {
    PROVIDER_INDEX
        .get(&provider_zone_id.trim().to_ascii_uppercase())
        .map(|entry| entry.country)
}

/// ISO3 code of the country owning an EIC code.
pub fn reverse_resolve(provider_zone_id: &str) -> Option<&'static str> {
    reverse_resolve_country(provider_zone_id).map(|zone| zone.country_code_3)
}

/// Registry spelling of a known EIC code.
pub fn canonical_provider_id(provider_zone_id: &str) -> Option<&'static str> {
    PROVIDER_INDEX
        .get(&provider_zone_id.trim().to_ascii_uppercase())
        .map(|entry| entry.canonical)
}

pub fn all_country_codes() -> Vec<&'static str> {
    COUNTRY_ZONES
        .iter()
        .map(|z| z.country_code_3)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn all_provider_ids() -> Vec<&'static str> {
    COUNTRY_ZONES
        .iter()
        .map(|z| z.provider_zone_id)
        .chain(SUB_ZONES.iter().map(|z| z.provider_zone_id))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Export
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct RegistryExport {
    pub countries: BTreeMap<&'static str, CountryExport>,
}

#[derive(Debug, Serialize)]
pub struct CountryExport {
    pub country_code_2: Option<&'static str>,
    pub provider_zone_id: &'static str,
    pub display_name: &'static str,
    pub timezone: &'static str,
    pub sub_zones: BTreeMap<&'static str, SubZoneExport>,
}

#[derive(Debug, Serialize)]
pub struct SubZoneExport {
    pub provider_zone_id: &'static str,
    pub description: &'static str,
    pub timezone: &'static str,
}

/// Whole registry as a nested document, keyed by ISO3 and sub-zone code.
pub fn export() -> RegistryExport {
    let countries = COUNTRY_ZONES
        .iter()
        .map(|zone| {
            let sub_zones = sub_zones_of(zone)
                .into_iter()
                .map(|sub| {
                    (
                        sub.zone_code,
                        SubZoneExport {
                            provider_zone_id: sub.provider_zone_id,
                            description: sub.description,
                            timezone: sub.timezone,
                        },
                    )
                })
                .collect();

            (
                zone.country_code_3,
                CountryExport {
                    country_code_2: zone.country_code_2,
                    provider_zone_id: zone.provider_zone_id,
                    display_name: zone.display_name,
                    timezone: zone.timezone,
                    sub_zones,
                },
            )
        })
        .collect();

    RegistryExport { countries }
}
