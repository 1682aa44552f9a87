use chrono::Duration;
use endet_model::WeightEntry;

/// Default lookback window for the weight-loss trend, in days.
pub const DEFAULT_LOOKBACK_DAYS: i64 = 180;

/// Computed weight-loss trend. `pct` is positive for loss and rounded to
/// two decimal places.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightLoss {
    pub pct: f64,
    pub start_kg: f64,
    pub end_kg: f64,
}

/// Percentage weight change between the earliest and latest entries inside
/// the lookback window. The window is anchored at the globally latest
/// measurement (`cutoff = latest date - lookback_days`), so with irregular
/// entries the compared points can be much closer together than the
/// lookback suggests. Domain owners flagged this anchoring as possibly a
/// simplification; the behavior is preserved as specified.
///
/// Returns `None` when fewer than two entries fall inside the window or
/// when the starting weight is not positive.
pub fn weight_loss_percent(entries: &[WeightEntry], lookback_days: i64) -> Option<WeightLoss> {
    if entries.is_empty() {
        return None;
    }

    let mut sorted: Vec<&WeightEntry> = entries.iter().collect();
    // Stable sort keeps same-date duplicates in input order.
    sorted.sort_by_key(|w| w.date);

    let latest = sorted.last()?.date;
    let cutoff = latest - Duration::days(lookback_days);
    let window: Vec<&WeightEntry> = sorted.into_iter().filter(|w| w.date >= cutoff).collect();

    if window.len() < 2 {
        log::debug!("weight trend unavailable: {} entries in window", window.len());
        return None;
    }

    let start = window.first()?.kg;
    let end = window.last()?.kg;
    if start <= 0.0 {
        return None;
    }

    let pct = (start - end) / start * 100.0;
    Some(WeightLoss {
        pct: (pct * 100.0).round() / 100.0,
        start_kg: start,
        end_kg: end,
    })
}
