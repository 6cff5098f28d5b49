use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tracing::warn;

use crate::metrics;
use crate::models::PricePoint;

use super::error::EntsoeError;
use super::xml::{parse_resolution, parse_timestamp, Period};

/// Calculate expected number of periods for an interval and resolution
pub fn expected_period_count(start: DateTime<Utc>, end: DateTime<Utc>, resolution: Duration) -> usize {
    let interval_duration = end - start;
    if interval_duration <= Duration::zero() {
        return 0;
    }
    (interval_duration.num_seconds() / resolution.num_seconds()) as usize
}

/// Expand a period into one point per position of its interval.
///
/// Positions omitted by the publication (curve type A03 drops repeats) are
/// forward-filled with the previous value. The first position must exist.
pub fn fill_period(period: &Period) -> Result<Vec<PricePoint>, EntsoeError> {
    let start_time = parse_timestamp(&period.time_interval.start)?;
    let end_time = parse_timestamp(&period.time_interval.end)?;
    let resolution = parse_resolution(&period.resolution)?;

    let expected_count = expected_period_count(start_time, end_time, resolution);
    if expected_count == 0 {
        return Ok(Vec::new());
    }

    let point_map: HashMap<u32, f64> = period
        .points
        .iter()
        .map(|p| (p.position, p.price_amount))
        .collect();

    let mut prices = Vec::with_capacity(expected_count);
    let mut previous_price: Option<f64> = None;
    let mut gaps_filled: u64 = 0;

    for position in 1..=(expected_count as u32) {
        let price_amount = match (point_map.get(&position), previous_price) {
            (Some(&amount), _) => amount,
            (None, Some(prev)) => {
                gaps_filled += 1;
                prev
            }
            (None, None) => {
                return Err(EntsoeError::MissingFirstPosition(
                    period.time_interval.start.clone(),
                ))
            }
        };
        previous_price = Some(price_amount);

        let timestamp = start_time + resolution * (position - 1) as i32;
        prices.push(PricePoint::new(timestamp, price_amount, period.resolution.as_str()));
    }

    if gaps_filled > 0 {
        warn!(
            period_start = %period.time_interval.start,
            resolution = %period.resolution,
            gaps_filled = gaps_filled,
            "Forward-filled missing positions"
        );
        metrics::record_gaps_filled(gaps_filled);
    }

    Ok(prices)
}

/// Sort by timestamp, keep the first point for duplicated timestamps and
/// drop everything outside `[start, end)`.
pub fn normalize_series(
    mut prices: Vec<PricePoint>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Vec<PricePoint> {
    prices.sort_by_key(|p| p.timestamp);
    prices.dedup_by_key(|p| p.timestamp);
    prices.retain(|p| p.timestamp >= start && p.timestamp < end);
    prices
}
