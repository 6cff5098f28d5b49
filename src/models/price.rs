use chrono::{DateTime, FixedOffset, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// One upstream day-ahead price, in EUR/MWh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub eur_per_mwh: f64,
    pub resolution: String,
}

impl PricePoint {
    pub fn new(timestamp: DateTime<Utc>, eur_per_mwh: f64, resolution: impl Into<String>) -> Self {
        Self {
            timestamp,
            eur_per_mwh,
            resolution: resolution.into(),
        }
    }
}

/// Output record: the EUR/MWh price and its local-currency per-kWh value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRecord {
    pub time: DateTime<FixedOffset>,
    #[serde(rename = "EUR_MWh")]
    pub eur_mwh: f64,
    pub local_per_unit: f64,
}

impl PriceRecord {
    /// Convert a point with a EUR->local rate (MWh to kWh divides by 1000).
    pub fn from_point(point: &PricePoint, rate: f64, timezone: &Tz) -> Self {
        Self {
            time: point.timestamp.with_timezone(timezone).fixed_offset(),
            eur_mwh: point.eur_per_mwh,
            local_per_unit: point.eur_per_mwh * rate / 1000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_from_point_converts_to_local_per_kwh() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 31, 23, 0, 0).unwrap();
        let point = PricePoint::new(ts, 100.0, "PT60M");

        let record = PriceRecord::from_point(&point, 400.0, &chrono_tz::Europe::Budapest);

        assert_eq!(record.eur_mwh, 100.0);
        assert_eq!(record.local_per_unit, 40.0);
        assert_eq!(record.time.to_rfc3339(), "2024-02-01T00:00:00+01:00");
    }

    #[test]
    fn test_record_serializes_wire_field_names() {
        let ts = Utc.with_ymd_and_hms(2024, 7, 1, 10, 0, 0).unwrap();
        let point = PricePoint::new(ts, -5.0, "PT60M");
        let record = PriceRecord::from_point(&point, 2.0, &chrono_tz::Europe::Budapest);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["time"], "2024-07-01T12:00:00+02:00");
        assert_eq!(json["EUR_MWh"], -5.0);
        assert_eq!(json["local_per_unit"], -0.01);
    }
}
