//! Public configuration types for the recommendation engine.
#![forbid(unsafe_code)]

use meetup_core::ScoreBreakdown;

/// Relative weighting of the three scoring factors.
///
/// The defaults reproduce the published ranking: time 0.4, location 0.3,
/// amenities 0.3. The reserved popularity factor carries no weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorWeights {
    /// Multiplier applied to the time factor.
    pub time: f64,
    /// Multiplier applied to the location factor.
    pub location: f64,
    /// Multiplier applied to the amenities factor.
    pub amenities: f64,
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            time: 0.4_f64,
            location: 0.3_f64,
            amenities: 0.3_f64,
        }
    }
}

impl FactorWeights {
    /// Report whether the weights are usable for scoring.
    ///
    /// Weights must be finite, non-negative, and sum to a positive total.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.has_finite_values() && self.has_non_negative_values() && self.has_non_zero_total()
    }

    const fn has_finite_values(self) -> bool {
        self.time.is_finite() && self.location.is_finite() && self.amenities.is_finite()
    }

    const fn has_non_negative_values(self) -> bool {
        self.time >= 0.0_f64 && self.location >= 0.0_f64 && self.amenities >= 0.0_f64
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "validation sums weights to ensure a non-zero total"
    )]
    const fn has_non_zero_total(self) -> bool {
        (self.time + self.location + self.amenities) != 0.0_f64
    }

    /// Combine a factor breakdown into a weighted total.
    ///
    /// The reserved popularity factor never contributes.
    #[expect(
        clippy::float_arithmetic,
        reason = "the total is a weighted sum of factor scores"
    )]
    pub(crate) fn combine(self, breakdown: &ScoreBreakdown) -> f64 {
        breakdown.time * self.time
            + breakdown.location * self.location
            + breakdown.amenities * self.amenities
    }
}
