//! Optimiser tuning knobs.
//!
//! The route builder and the metrics calculator read every constant they use
//! from [`OptimizerConfig`]; nothing is hard-coded at the call sites.

use crate::{CoreError, CoreResult};

/// Stops with `priority >= 3` are served before any lower-priority stop.
pub const DEFAULT_HIGH_PRIORITY_THRESHOLD: i32 = 3;

/// Each priority point discounts a candidate's travel time by 10 %.
pub const DEFAULT_PRIORITY_DISCOUNT: f64 = 0.1;

/// Fuel consumption used to convert saved kilometres into saved litres.
pub const DEFAULT_FUEL_LITRES_PER_KM: f64 = 0.1;

/// Tuning parameters for route building and savings accounting.
///
/// Typically left at [`Default`]; applications may load it from JSON (with the
/// `serde` feature) and pass it to the optimiser.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OptimizerConfig {
    /// Minimum priority for a stop to count as high priority.  While any
    /// high-priority stop is unvisited, only those stops are candidates.
    pub high_priority_threshold: i32,

    /// Linear discount per priority point applied to a candidate's travel
    /// time during selection: `adjusted = t - t * priority * discount`.
    pub priority_discount: f64,

    /// Litres of fuel per kilometre, used for `fuel_saved`.
    pub fuel_litres_per_km: f64,
}

impl OptimizerConfig {
    /// Reject factors that would make scores or savings meaningless.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.priority_discount.is_finite() || self.priority_discount < 0.0 {
            return Err(CoreError::Config(format!(
                "priority_discount must be a finite non-negative number, got {}",
                self.priority_discount
            )));
        }
        if !self.fuel_litres_per_km.is_finite() || self.fuel_litres_per_km < 0.0 {
            return Err(CoreError::Config(format!(
                "fuel_litres_per_km must be a finite non-negative number, got {}",
                self.fuel_litres_per_km
            )));
        }
        Ok(())
    }

    /// `true` if a stop with `priority` belongs to the high-priority tier.
    #[inline]
    pub fn is_high_priority(&self, priority: i32) -> bool {
        priority >= self.high_priority_threshold
    }

    /// Travel time discounted by the stop's priority.  Used only to rank
    /// candidates, never added to totals.
    #[inline]
    pub fn adjusted_time(&self, travel_min: f64, priority: i32) -> f64 {
        travel_min - travel_min * (priority as f64 * self.priority_discount)
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            high_priority_threshold: DEFAULT_HIGH_PRIORITY_THRESHOLD,
            priority_discount:       DEFAULT_PRIORITY_DISCOUNT,
            fuel_litres_per_km:      DEFAULT_FUEL_LITRES_PER_KM,
        }
    }
}
