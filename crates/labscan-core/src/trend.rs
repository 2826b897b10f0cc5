//! Synthetic historical series for illustrating trends in the UI.
//!
//! The values are random jitter around a per-parameter baseline and carry no
//! clinical meaning.

use crate::model::TrendPoint;
use crate::registry::Registry;
use chrono::{Months, NaiveDate};
use rand::Rng;

/// Baseline used for parameters the registry has no baseline for.
pub const DEFAULT_BASELINE: f64 = 50.0;

/// One point per month, ending at the current month.
pub const TREND_POINTS: u32 = 6;

/// Maximum relative deviation from the baseline.
const JITTER: f64 = 0.2;

/// Generate a trend series ending today.
pub fn synthesize_trend(registry: &Registry, parameter: &str) -> Vec<TrendPoint> {
    let today = chrono::Local::now().date_naive();
    synthesize_trend_with(registry, parameter, today, &mut rand::thread_rng())
}

/// Generate a trend series ending at `today` using the given random source.
///
/// Dates step back one calendar month at a time, clamping the day to the
/// length of shorter months. Values are rounded to two decimal places.
pub fn synthesize_trend_with<R: Rng + ?Sized>(
    registry: &Registry,
    parameter: &str,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<TrendPoint> {
    let baseline = registry
        .baseline_for(parameter)
        .unwrap_or(DEFAULT_BASELINE);

    (0..TREND_POINTS)
        .rev()
        .map(|months_back| {
            let date = today
                .checked_sub_months(Months::new(months_back))
                .unwrap_or(today);
            let variation = 1.0 + (rng.gen::<f64>() - 0.5) * 2.0 * JITTER;
            TrendPoint {
                date,
                value: round2(baseline * variation),
            }
        })
        .collect()
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
