use crate::error::StoppingError;
use serde::{Deserialize, Serialize};

/// Beta distribution over "probability this specification compiles to a
/// correct implementation".
///
/// The Beta is the conjugate prior for pass/fail observations, so updating
/// on a new run is a unit increment:
///
/// ```text
/// mean     = alpha / (alpha + beta)
/// variance = alpha * beta / ((alpha + beta)^2 * (alpha + beta + 1))
/// ```
///
/// Both parameters are at least 1 at construction (uninformative or seeded
/// prior); as `alpha + beta` grows the variance shrinks, which is what the
/// confidence tiers use as a precision proxy.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BetaPrior {
    alpha: f64,
    beta: f64,
}

impl BetaPrior {
    /// Construct a prior; both parameters must be finite and >= 1.
    pub fn new(alpha: f64, beta: f64) -> Result<Self, StoppingError> {
        if !alpha.is_finite() || !beta.is_finite() || alpha < 1.0 || beta < 1.0 {
            return Err(StoppingError::InvalidPrior { alpha, beta });
        }
        Ok(Self { alpha, beta })
    }

    /// Uniform prior Beta(1, 1): every correctness probability equally likely.
    pub fn uniform() -> Self {
        Self {
            alpha: 1.0,
            beta: 1.0,
        }
    }

    /// Weakly informative prior centred on `mean` with pseudo-sample
    /// `strength`, floored so both parameters stay >= 1.
    ///
    /// This is the shape an external pre-verification pass produces: an
    /// estimated success probability plus how much it should count for.
    pub fn seeded(mean: f64, strength: f64) -> Self {
        let mean = mean.clamp(0.01, 0.99);
        let strength = strength.max(2.0);
        Self {
            alpha: (mean * strength).max(1.0),
            beta: ((1.0 - mean) * strength).max(1.0),
        }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Record one observation: success adds to alpha, failure to beta.
    pub fn observe(&mut self, success: bool) {
        if success {
            self.alpha += 1.0;
        } else {
            self.beta += 1.0;
        }
    }

    pub fn mean(&self) -> f64 {
        self.alpha / (self.alpha + self.beta)
    }

    pub fn variance(&self) -> f64 {
        let n = self.alpha + self.beta;
        (self.alpha * self.beta) / (n * n * (n + 1.0))
    }

    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Total pseudo-sample count, used as a crude precision proxy.
    pub fn pseudo_samples(&self) -> f64 {
        self.alpha + self.beta
    }

    /// 95% credible interval via the normal approximation, clamped to [0, 1].
    pub fn credible_interval_95(&self) -> (f64, f64) {
        let half_width = 1.96 * self.std_dev();
        let mean = self.mean();
        ((mean - half_width).max(0.0), (mean + half_width).min(1.0))
    }
}

impl Default for BetaPrior {
    fn default() -> Self {
        Self::uniform()
    }
}
