use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde_json::Value;
use tower::ServiceExt;

use dayahead_price_api::{
    config::EntsoeConfig, create_router, metrics, models::PricePoint, CurrencyError,
    DayAheadPriceSource, EntsoeClient, EntsoeError, ExchangeRateSource, PriceService,
    PriceSettings,
};

#[derive(Default)]
struct StubPrices {
    calls: Mutex<Vec<String>>,
    fail: bool,
}

#[async_trait]
impl DayAheadPriceSource for StubPrices {
    async fn day_ahead_prices(
        &self,
        eic_code: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<PricePoint>, EntsoeError> {
        self.calls.lock().unwrap().push(eic_code.to_string());
        if self.fail {
            return Err(EntsoeError::TemporaryUnavailable("HTTP 503: maintenance".to_string()));
        }
        let hours = (end - start).num_hours();
        Ok((0..hours)
            .map(|h| PricePoint::new(start + Duration::hours(h), 50.0 + h as f64, "PT60M"))
            .collect())
    }
}

struct StubRates(Option<f64>);

#[async_trait]
impl ExchangeRateSource for StubRates {
    async fn eur_rate(&self, _date: NaiveDate) -> Result<f64, CurrencyError> {
        self.0.ok_or(CurrencyError::UnexpectedStatus(500))
    }
}

fn app(prices: Arc<StubPrices>, rate: Option<f64>) -> Router {
    let settings = PriceSettings {
        default_zone: "10YHU-MAVIR----U".to_string(),
        reference_timezone: chrono_tz::Europe::Budapest,
        strict_zones: false,
        fallback_rate: 410.0,
    };
    let service = Arc::new(PriceService::new(prices, Arc::new(StubRates(rate)), settings));
    create_router(service, metrics::detached_handle().unwrap())
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn prices_for_country_are_converted() {
    let prices = Arc::new(StubPrices::default());
    let (status, body) = get(
        app(prices.clone(), Some(400.0)),
        "/api/prices?country=HUN&start=2024-02-01&end=2024-02-01",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 24);
    assert_eq!(records[0]["time"], "2024-02-01T00:00:00+01:00");
    assert_eq!(records[0]["EUR_MWh"], 50.0);
    assert_eq!(records[0]["local_per_unit"], 20.0);
    assert_eq!(prices.calls.lock().unwrap().as_slice(), ["10YHU-MAVIR----U"]);
}

#[tokio::test]
async fn zone_parameter_bypasses_country() {
    let prices = Arc::new(StubPrices::default());
    let (status, _) = get(
        app(prices.clone(), Some(1.0)),
        "/api/prices?zone=DE_50HZ&country=HUN&start=2024-02-01&end=2024-02-02",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(prices.calls.lock().unwrap().as_slice(), ["10YDE-VE-------2"]);
}

#[tokio::test]
async fn missing_dates_is_bad_request() {
    let prices = Arc::new(StubPrices::default());
    let (status, body) = get(app(prices.clone(), Some(1.0)), "/api/prices?start=2024-02-01").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(body["error"].as_str().unwrap().contains("required"));
    assert!(body["correlation_id"].is_string());
    assert!(prices.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn malformed_query_is_json_bad_request() {
    let prices = Arc::new(StubPrices::default());
    let (status, body) = get(
        app(prices.clone(), Some(1.0)),
        "/api/prices?start=2024-02-01&start=2024-02-02&end=2024-02-02",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(body["error"].as_str().unwrap().contains("start"));
    assert!(body["correlation_id"].is_string());
    assert!(prices.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn upstream_connection_error_does_not_expose_token() {
    let entsoe = EntsoeClient::new(&EntsoeConfig {
        security_token: "TOPSECRET-TOKEN".to_string(),
        base_url: "http://127.0.0.1:1/api".to_string(),
        timeout_seconds: 5,
    })
    .unwrap();
    let settings = PriceSettings {
        default_zone: "10YHU-MAVIR----U".to_string(),
        reference_timezone: chrono_tz::Europe::Budapest,
        strict_zones: false,
        fallback_rate: 410.0,
    };
    let service = PriceService::new(Arc::new(entsoe), Arc::new(StubRates(Some(1.0))), settings);
    let app = create_router(Arc::new(service), metrics::detached_handle().unwrap());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/prices?country=HUN&start=2024-02-01&end=2024-02-01")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(!body.contains("TOPSECRET-TOKEN"), "{}", body);
    assert!(!body.contains("securityToken"), "{}", body);
}

#[tokio::test]
async fn unknown_country_is_bad_request_without_upstream_call() {
    let prices = Arc::new(StubPrices::default());
    let (status, body) = get(
        app(prices.clone(), Some(1.0)),
        "/api/prices?country=ZZZ&start=2024-02-01&end=2024-02-01",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("ZZZ"));
    assert!(prices.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn currency_failure_falls_back() {
    let prices = Arc::new(StubPrices::default());
    let (status, body) = get(
        app(prices, None),
        "/api/prices?start=2024-02-01&end=2024-02-01",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 24);
    assert_eq!(records[0]["local_per_unit"], 20.5);
}

#[tokio::test]
async fn upstream_failure_is_server_error() {
    let prices = Arc::new(StubPrices {
        fail: true,
        ..Default::default()
    });
    let (status, body) = get(
        app(prices, Some(1.0)),
        "/api/prices?country=AT&start=2024-02-01&end=2024-02-01",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "INTERNAL_ERROR");
    assert!(body["error"].as_str().unwrap().contains("maintenance"));
}

#[tokio::test]
async fn zones_for_multi_zone_country() {
    let (status, body) = get(app(Arc::default(), Some(1.0)), "/api/zones/deu").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["country"], "DEU");
    let zones = body["zones"].as_array().unwrap();
    assert_eq!(zones.len(), 4);
    assert_eq!(zones[0]["name"], "50Hertz");
    assert_eq!(zones[0]["code"], "DE_50HZ");
}

#[tokio::test]
async fn zones_for_single_zone_or_unknown_country_is_not_found() {
    let (status, body) = get(app(Arc::default(), Some(1.0)), "/api/zones/AUT").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");

    let (status, _) = get(app(Arc::default(), Some(1.0)), "/api/zones/ZZZ").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn country_detail_and_registry_export() {
    let (status, body) = get(app(Arc::default(), Some(1.0)), "/api/countries/se").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["country_code_3"], "SWE");
    assert_eq!(body["zones"].as_array().unwrap().len(), 4);

    let (status, body) = get(app(Arc::default(), Some(1.0)), "/api/countries").await;
    assert_eq!(status, StatusCode::OK);
    let countries = body["countries"].as_array().unwrap();
    assert_eq!(countries[0]["country_code"], "ALB");
    assert!(countries.iter().any(|c| c["country_code"] == "ITA" && c["multi_zone"] == true));

    let (status, body) = get(app(Arc::default(), Some(1.0)), "/api/registry").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["countries"]["ISL"]["provider_zone_id"], "IS");
}

#[tokio::test]
async fn correlation_id_is_echoed() {
    let response = app(Arc::default(), Some(1.0))
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("X-Correlation-Id", "req-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["X-Correlation-Id"], "req-42");
}
