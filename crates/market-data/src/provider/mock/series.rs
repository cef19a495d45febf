//! Random-walk bar generation.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::models::{round2, Bar, Range};

/// Level every generated series starts from.
pub const BASE_PRICE: f64 = 4600.0;

/// Close moves at most this far from the open in either direction.
pub const MAX_DRIFT: f64 = 4.0;

/// Highs and lows extend at most this far past the open/close pair.
pub const MAX_WICK: f64 = 3.0;

/// Prices never walk below this floor.
const MIN_PRICE: f64 = 1.0;

const MIN_VOLUME: u64 = 1_000_000;
const MAX_VOLUME: u64 = 3_000_000;

/// Length of the daily history table.
pub const HISTORY_DAYS: i64 = 160;

/// Generate `points` bars starting at `start`, `step` apart.
///
/// Each open equals the previous (rounded) close. Highs and lows are built
/// outward from the rounded open/close pair, so every bar satisfies
/// `low <= min(open, close) <= max(open, close) <= high`.
pub fn random_walk<R: Rng + ?Sized>(
    rng: &mut R,
    start: DateTime<Utc>,
    points: usize,
    step: Duration,
    base: f64,
) -> Vec<Bar> {
    let mut bars = Vec::with_capacity(points);
    let mut last = round2(base);
    let start_ms = start.timestamp_millis();
    let step_ms = step.num_milliseconds();

    for i in 0..points {
        let open = last;
        let drift = rng.gen_range(-MAX_DRIFT..=MAX_DRIFT);
        let close = round2((open + drift).max(MIN_PRICE));
        let high = round2(open.max(close) + rng.gen_range(0.0..=MAX_WICK));
        let low = round2(open.min(close) - rng.gen_range(0.0..=MAX_WICK));
        let volume = rng.gen_range(MIN_VOLUME..=MAX_VOLUME);

        bars.push(Bar {
            timestamp: start_ms + i as i64 * step_ms,
            open,
            high,
            low,
            close,
            volume: Some(volume),
        });
        last = close;
    }

    bars
}

/// Series for a named range ending at `now`.
///
/// A window shorter than one step still yields one bar, started a full step
/// before `now`.
pub fn range_series<R: Rng + ?Sized>(rng: &mut R, range: Range, now: DateTime<Utc>) -> Vec<Bar> {
    let points = range.bar_count(now);
    let step = range.step();
    let start = range
        .window_start(now)
        .min(now - step * i32::try_from(points).unwrap_or(i32::MAX));
    random_walk(rng, start, points, step, BASE_PRICE)
}

/// Fixed daily history ending at `now`.
pub fn history_series<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Vec<Bar> {
    random_walk(
        rng,
        now - Duration::days(HISTORY_DAYS),
        HISTORY_DAYS as usize,
        Duration::days(1),
        BASE_PRICE,
    )
}
