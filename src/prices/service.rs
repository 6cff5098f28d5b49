use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Deserialize;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::currency::ExchangeRateSource;
use crate::entsoe::DayAheadPriceSource;
use crate::metrics;
use crate::models::PriceRecord;
use crate::zones;

use super::error::PriceRequestError;

/// Inbound request parameters, all optional on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PriceRequest {
    pub start: Option<String>,
    pub end: Option<String>,
    pub country: Option<String>,
    pub zone: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    /// `zone` matched a registry code or EIC.
    Zone,
    /// `zone` is unknown to the registry and forwarded verbatim.
    PassThrough,
    Country,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedZone {
    pub provider_zone_id: String,
    pub source: ResolutionSource,
}

/// Half-open UTC window `[start, end)` covering whole local days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PriceSettings {
    pub default_zone: String,
    pub reference_timezone: Tz,
    pub strict_zones: bool,
    pub fallback_rate: f64,
}

impl PriceSettings {
    pub fn from_config(config: &AppConfig) -> Result<Self, String> {
        Ok(Self {
            default_zone: config.resolver.default_zone.clone(),
            reference_timezone: config.resolver.get_timezone()?,
            strict_zones: config.resolver.strict_zones,
            fallback_rate: config.currency.fallback_rate,
        })
    }
}

pub struct PriceService {
    prices: Arc<dyn DayAheadPriceSource>,
    rates: Arc<dyn ExchangeRateSource>,
    settings: PriceSettings,
}

impl PriceService {
    pub fn new(
        prices: Arc<dyn DayAheadPriceSource>,
        rates: Arc<dyn ExchangeRateSource>,
        settings: PriceSettings,
    ) -> Self {
        Self {
            prices,
            rates,
            settings,
        }
    }

    /// Pick the EIC code for a request: explicit zone, then country, then
    /// the configured default.
    pub fn resolve_zone(&self, request: &PriceRequest) -> Result<ResolvedZone, PriceRequestError> {
        if let Some(zone) = non_empty(&request.zone) {
            let known = zones::resolve_provider_id(zone).or_else(|| zones::canonical_provider_id(zone));
            return match known {
                Some(eic) => Ok(ResolvedZone {
                    provider_zone_id: eic.to_string(),
                    source: ResolutionSource::Zone,
                }),
                None if self.settings.strict_zones => {
                    Err(PriceRequestError::UnknownZone(zone.to_string()))
                }
                None => {
                    warn!(zone = %zone, "Zone not in registry, forwarding verbatim");
                    Ok(ResolvedZone {
                        provider_zone_id: zone.to_string(),
                        source: ResolutionSource::PassThrough,
                    })
                }
            };
        }

        if let Some(country) = non_empty(&request.country) {
            return zones::resolve_provider_id(country)
                .map(|eic| ResolvedZone {
                    provider_zone_id: eic.to_string(),
                    source: ResolutionSource::Country,
                })
                .ok_or_else(|| PriceRequestError::UnknownCountry(country.to_string()));
        }

        Ok(ResolvedZone {
            provider_zone_id: self.settings.default_zone.clone(),
            source: ResolutionSource::Default,
        })
    }

    /// The caller's end date is inclusive, so the window closes at the
    /// following local midnight.
    pub fn parse_range(&self, request: &PriceRequest) -> Result<DateRange, PriceRequestError> {
        let (Some(start_raw), Some(end_raw)) = (non_empty(&request.start), non_empty(&request.end))
        else {
            return Err(PriceRequestError::MissingDates);
        };

        let tz = &self.settings.reference_timezone;
        let start_date = parse_date(start_raw, tz)?;
        let end_date = parse_date(end_raw, tz)?;

        if end_date < start_date {
            return Err(PriceRequestError::InvalidRange {
                start: start_raw.to_string(),
                end: end_raw.to_string(),
            });
        }

        let after_end = end_date + Duration::days(1);

        Ok(DateRange {
            start_date,
            end_date,
            start: local_midnight(start_date, tz)?,
            end: local_midnight(after_end, tz)?,
        })
    }

    #[tracing::instrument(skip(self), fields(country = ?request.country, zone = ?request.zone))]
    pub async fn get_prices(
        &self,
        request: &PriceRequest,
    ) -> Result<Vec<PriceRecord>, PriceRequestError> {
        let started = Instant::now();

        let range = self.parse_range(request)?;
        let resolved = self.resolve_zone(request)?;
        info!(
            eic_code = %resolved.provider_zone_id,
            source = ?resolved.source,
            start = %range.start,
            end = %range.end,
            "Resolved price request"
        );

        let points = self
            .prices
            .day_ahead_prices(&resolved.provider_zone_id, range.start, range.end)
            .await?;

        let rate = self.exchange_rate(range.start_date).await;

        let tz = &self.settings.reference_timezone;
        let records: Vec<PriceRecord> = points
            .iter()
            .map(|point| PriceRecord::from_point(point, rate, tz))
            .collect();

        info!(
            count = records.len(),
            rate = rate,
            duration_ms = started.elapsed().as_millis(),
            "Completed price request"
        );

        Ok(records)
    }

    /// One rate for the whole range, taken on the start date. Never fails.
    pub async fn exchange_rate(&self, date: NaiveDate) -> f64 {
        match self.rates.eur_rate(date).await {
            Ok(rate) => rate,
            Err(e) => {
                warn!(
                    error = %e,
                    date = %date,
                    fallback_rate = self.settings.fallback_rate,
                    "Exchange rate lookup failed, using fallback rate"
                );
                metrics::record_currency_fallback();
                self.settings.fallback_rate
            }
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_date(raw: &str, tz: &Tz) -> Result<NaiveDate, PriceRequestError> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(tz).date_naive())
        .map_err(|_| PriceRequestError::InvalidDate(raw.to_string()))
}

fn local_midnight(date: NaiveDate, tz: &Tz) -> Result<DateTime<Utc>, PriceRequestError> {
    tz.from_local_datetime(&date.and_time(NaiveTime::MIN))
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| PriceRequestError::InvalidDate(date.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::currency::CurrencyError;
    use crate::entsoe::EntsoeError;
    use crate::models::PricePoint;

    type Call = (String, DateTime<Utc>, DateTime<Utc>);

    /// Returns one price per hour of the requested window: 100, 101, ...
    #[derive(Default)]
    struct HourlySource {
        calls: Mutex<Vec<Call>>,
    }

    #[async_trait]
    impl DayAheadPriceSource for HourlySource {
        async fn day_ahead_prices(
            &self,
            eic_code: &str,
            start: DateTime<Utc>,
            end: DateTime<Utc>,
        ) -> Result<Vec<PricePoint>, EntsoeError> {
            self.calls
                .lock()
                .unwrap()
                .push((eic_code.to_string(), start, end));

            let hours = (end - start).num_hours();
            Ok((0..hours)
                .map(|h| PricePoint::new(start + Duration::hours(h), 100.0 + h as f64, "PT60M"))
                .collect())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl DayAheadPriceSource for FailingSource {
        async fn day_ahead_prices(
            &self,
            _eic_code: &str,
            _start: DateTime<Utc>,
            _end: DateTime<Utc>,
        ) -> Result<Vec<PricePoint>, EntsoeError> {
            Err(EntsoeError::Unauthorized)
        }
    }

    struct FixedRate(f64);

    #[async_trait]
    impl ExchangeRateSource for FixedRate {
        async fn eur_rate(&self, _date: NaiveDate) -> Result<f64, CurrencyError> {
            Ok(self.0)
        }
    }

    struct BrokenRates;

    #[async_trait]
    impl ExchangeRateSource for BrokenRates {
        async fn eur_rate(&self, _date: NaiveDate) -> Result<f64, CurrencyError> {
            Err(CurrencyError::UnexpectedStatus(503))
        }
    }

    fn settings() -> PriceSettings {
        PriceSettings {
            default_zone: "10YHU-MAVIR----U".to_string(),
            reference_timezone: chrono_tz::Europe::Budapest,
            strict_zones: false,
            fallback_rate: 410.0,
        }
    }

    fn service_with(
        source: Arc<dyn DayAheadPriceSource>,
        rates: Arc<dyn ExchangeRateSource>,
    ) -> PriceService {
        PriceService::new(source, rates, settings())
    }

    fn request(start: &str, end: &str, country: Option<&str>, zone: Option<&str>) -> PriceRequest {
        PriceRequest {
            start: Some(start.to_string()),
            end: Some(end.to_string()),
            country: country.map(String::from),
            zone: zone.map(String::from),
        }
    }

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[tokio::test]
    async fn test_hungary_single_day() {
        let source = Arc::new(HourlySource::default());
        let service = service_with(source.clone(), Arc::new(FixedRate(400.0)));

        let records = service
            .get_prices(&request("2024-02-01", "2024-02-01", Some("HUN"), None))
            .await
            .unwrap();

        let calls = source.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "10YHU-MAVIR----U");
        assert_eq!(calls[0].1, utc("2024-01-31T23:00:00Z"));
        assert_eq!(calls[0].2, utc("2024-02-01T23:00:00Z"));

        assert_eq!(records.len(), 24);
        assert_eq!(records[0].time.to_rfc3339(), "2024-02-01T00:00:00+01:00");
        assert_eq!(records[23].time.to_rfc3339(), "2024-02-01T23:00:00+01:00");
        for record in &records {
            assert_eq!(record.local_per_unit, record.eur_mwh * 400.0 / 1000.0);
        }
        assert_eq!(records[0].local_per_unit, 40.0);
    }

    #[tokio::test]
    async fn test_zone_takes_precedence_over_country() {
        let source = Arc::new(HourlySource::default());
        let service = service_with(source.clone(), Arc::new(FixedRate(1.0)));

        service
            .get_prices(&request("2024-02-01", "2024-02-01", Some("HUN"), Some("DE_50HZ")))
            .await
            .unwrap();

        assert_eq!(source.calls.lock().unwrap()[0].0, "10YDE-VE-------2");
    }

    #[tokio::test]
    async fn test_unknown_country_skips_upstream() {
        let source = Arc::new(HourlySource::default());
        let service = service_with(source.clone(), Arc::new(FixedRate(1.0)));

        let err = service
            .get_prices(&request("2024-02-01", "2024-02-01", Some("ZZZ"), None))
            .await
            .unwrap_err();

        assert!(matches!(err, PriceRequestError::UnknownCountry(ref c) if c == "ZZZ"));
        assert!(err.is_client_error());
        assert!(source.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_currency_failure_uses_fallback_rate() {
        let service = service_with(Arc::new(HourlySource::default()), Arc::new(BrokenRates));

        let records = service
            .get_prices(&request("2024-02-01", "2024-02-01", Some("HU"), None))
            .await
            .unwrap();

        assert_eq!(records.len(), 24);
        assert_eq!(records[0].eur_mwh, 100.0);
        assert_eq!(records[0].local_per_unit, 41.0);
    }

    #[tokio::test]
    async fn test_upstream_failure_is_server_error() {
        let service = service_with(Arc::new(FailingSource), Arc::new(FixedRate(1.0)));

        let err = service
            .get_prices(&request("2024-02-01", "2024-02-01", None, None))
            .await
            .unwrap_err();

        assert!(matches!(err, PriceRequestError::Upstream(EntsoeError::Unauthorized)));
        assert!(!err.is_client_error());
    }

    #[tokio::test]
    async fn test_missing_dates() {
        let source = Arc::new(HourlySource::default());
        let service = service_with(source.clone(), Arc::new(FixedRate(1.0)));

        let mut req = request("2024-02-01", "2024-02-01", None, None);
        req.end = None;
        let err = service.get_prices(&req).await.unwrap_err();
        assert!(matches!(err, PriceRequestError::MissingDates));

        req.end = Some("   ".to_string());
        let err = service.get_prices(&req).await.unwrap_err();
        assert!(matches!(err, PriceRequestError::MissingDates));

        assert!(source.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_resolve_default_zone() {
        let service = service_with(Arc::new(FailingSource), Arc::new(FixedRate(1.0)));
        let resolved = service.resolve_zone(&PriceRequest::default()).unwrap();
        assert_eq!(resolved.provider_zone_id, "10YHU-MAVIR----U");
        assert_eq!(resolved.source, ResolutionSource::Default);
    }

    #[test]
    fn test_resolve_country_lowercase_iso2() {
        let service = service_with(Arc::new(FailingSource), Arc::new(FixedRate(1.0)));
        let req = PriceRequest {
            country: Some("at".to_string()),
            ..Default::default()
        };
        let resolved = service.resolve_zone(&req).unwrap();
        assert_eq!(resolved.provider_zone_id, "10YAT-APG------L");
        assert_eq!(resolved.source, ResolutionSource::Country);
    }

    #[test]
    fn test_resolve_known_eic_as_zone() {
        let service = service_with(Arc::new(FailingSource), Arc::new(FixedRate(1.0)));
        let req = PriceRequest {
            zone: Some("10yno-2--------t".to_string()),
            ..Default::default()
        };
        let resolved = service.resolve_zone(&req).unwrap();
        assert_eq!(resolved.provider_zone_id, "10YNO-2--------T");
        assert_eq!(resolved.source, ResolutionSource::Zone);
    }

    #[test]
    fn test_unknown_zone_passes_through_when_permissive() {
        let service = service_with(Arc::new(FailingSource), Arc::new(FixedRate(1.0)));
        let req = PriceRequest {
            zone: Some("10Y1001A1001A82H".to_string()),
            ..Default::default()
        };
        let resolved = service.resolve_zone(&req).unwrap();
        assert_eq!(resolved.provider_zone_id, "10Y1001A1001A82H");
        assert_eq!(resolved.source, ResolutionSource::PassThrough);
    }

    #[test]
    fn test_unknown_zone_rejected_when_strict() {
        let mut strict = settings();
        strict.strict_zones = true;
        let service = PriceService::new(Arc::new(FailingSource), Arc::new(FixedRate(1.0)), strict);
        let req = PriceRequest {
            zone: Some("10Y1001A1001A82H".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            service.resolve_zone(&req),
            Err(PriceRequestError::UnknownZone(_))
        ));
    }

    #[test]
    fn test_parse_range_multi_day_and_dst() {
        let service = service_with(Arc::new(FailingSource), Arc::new(FixedRate(1.0)));
        let range = service
            .parse_range(&request("2024-03-30", "2024-03-31", None, None))
            .unwrap();

        assert_eq!(range.start, utc("2024-03-29T23:00:00Z"));
        // Summer time starts on the 31st, so the window ends at 22:00 UTC.
        assert_eq!(range.end, utc("2024-03-31T22:00:00Z"));
        assert_eq!(range.start_date, NaiveDate::from_ymd_opt(2024, 3, 30).unwrap());
    }

    #[test]
    fn test_parse_range_accepts_rfc3339() {
        let service = service_with(Arc::new(FailingSource), Arc::new(FixedRate(1.0)));
        let range = service
            .parse_range(&request("2024-02-01T10:00:00+01:00", "2024-02-01", None, None))
            .unwrap();
        assert_eq!(range.start, utc("2024-01-31T23:00:00Z"));
    }

    #[test]
    fn test_parse_range_rejects_bad_input() {
        let service = service_with(Arc::new(FailingSource), Arc::new(FixedRate(1.0)));

        assert!(matches!(
            service.parse_range(&request("01/02/2024", "2024-02-01", None, None)),
            Err(PriceRequestError::InvalidDate(_))
        ));
        assert!(matches!(
            service.parse_range(&request("2024-02-02", "2024-02-01", None, None)),
            Err(PriceRequestError::InvalidRange { .. })
        ));
    }
}
