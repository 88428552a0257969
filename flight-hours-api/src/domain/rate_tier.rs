use serde::{Deserialize, Serialize};

/// A pay block: hours in `[start, end)` paid at `rate` per hour.
///
/// Only the width of the bracket matters to the pay calculation. Tiers are
/// consumed in the order they are supplied, so callers are expected to keep
/// them in ascending `start` order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateTier {
    pub start: f64,
    pub end: f64,
    pub rate: f64,
}

impl RateTier {
    pub fn new(start: f64, end: f64, rate: f64) -> Self {
        Self { start, end, rate }
    }

    /// Number of hours this tier can absorb. Degenerate tiers have no capacity.
    pub fn capacity(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }

    /// A tier with a non-numeric bound or rate cannot contribute pay.
    /// Infinite bounds are allowed so the top tier can be open-ended.
    pub fn is_well_formed(&self) -> bool {
        !(self.start.is_nan() || self.end.is_nan() || self.rate.is_nan())
    }
}
