use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Extension, Json,
};
use chrono::Utc;

use crate::models::PriceRecord;
use crate::prices::PriceRequest;
use crate::zones::{self, RegistryExport};

use super::dto::{
    CountriesResponse, CountryDetailResponse, CountrySummary, CountryZonesResponse,
    HealthResponse,
};
use super::error::{AppError, AppErrorWithContext};
use super::middleware::CorrelationId;
use super::routes::AppState;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now(),
    })
}

pub async fn get_prices(
    State(state): State<AppState>,
    query: Result<Query<PriceRequest>, QueryRejection>,
    Extension(correlation_id): Extension<CorrelationId>,
) -> Result<Json<Vec<PriceRecord>>, AppErrorWithContext> {
    let Query(request) = query.map_err(|rejection| {
        AppError::BadRequest(rejection.body_text())
            .with_correlation_id(Some(correlation_id.0.clone()))
    })?;

    let records = state
        .prices
        .get_prices(&request)
        .await
        .map_err(|e| AppError::from(e).with_correlation_id(Some(correlation_id.0.clone())))?;

    Ok(Json(records))
}

/// Partitions of a multi-zone country. Single-zone and unknown countries
/// both answer 404.
pub async fn get_country_zones(
    Path(country_code): Path<String>,
    Extension(correlation_id): Extension<CorrelationId>,
) -> Result<Json<CountryZonesResponse>, AppErrorWithContext> {
    let cid = Some(correlation_id.0);

    let country = zones::find_country(&country_code).ok_or_else(|| {
        AppError::NotFound(format!("Country not found: {}", country_code))
            .with_correlation_id(cid.clone())
    })?;

    let sub_zones = zones::sub_zones(country.country_code_3);
    if sub_zones.is_empty() {
        return Err(AppError::NotFound(format!(
            "{} has a single bidding zone",
            country.display_name
        ))
        .with_correlation_id(cid));
    }

    Ok(Json(CountryZonesResponse::new(country, &sub_zones)))
}

pub async fn list_countries() -> Json<CountriesResponse> {
    let countries = zones::all_country_codes()
        .into_iter()
        .filter_map(zones::find_country)
        .map(|zone| CountrySummary {
            country_code: zone.country_code_3.to_string(),
            country_name: zone.display_name.to_string(),
            provider_zone_id: zone.provider_zone_id.to_string(),
            multi_zone: !zones::sub_zones(zone.country_code_3).is_empty(),
        })
        .collect();

    Json(CountriesResponse { countries })
}

pub async fn get_country(
    Path(country_code): Path<String>,
    Extension(correlation_id): Extension<CorrelationId>,
) -> Result<Json<CountryDetailResponse>, AppErrorWithContext> {
    zones::country_info(&country_code)
        .map(|info| Json(CountryDetailResponse::from(info)))
        .ok_or_else(|| {
            AppError::NotFound(format!("Country not found: {}", country_code))
                .with_correlation_id(Some(correlation_id.0))
        })
}

pub async fn export_registry() -> Json<RegistryExport> {
    Json(zones::export())
}
