use crate::bet::{Bet, Resolution};
use crate::error::EconomyError;
use serde::{Deserialize, Serialize};

/// Tunable shape of the accountability update.
///
/// The failure penalty is `stake * confidence^exponent`: convex in
/// confidence, so an overconfident failure costs disproportionately more
/// than a hedged one. The success reward is the same form scaled down by
/// `reward_ratio` — calibrated confidence is rewarded, but never as much as
/// overconfidence is punished.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PenaltyCurve {
    /// Convexity of the penalty in confidence. Must be >= 1.
    pub exponent: f64,
    /// Success reward as a fraction of the symmetric penalty, in (0, 1].
    pub reward_ratio: f64,
}

impl PenaltyCurve {
    pub fn new(exponent: f64, reward_ratio: f64) -> Result<Self, EconomyError> {
        if !exponent.is_finite() || exponent < 1.0 {
            return Err(EconomyError::InvalidCurve(format!(
                "exponent {} must be >= 1",
                exponent
            )));
        }
        if !reward_ratio.is_finite() || reward_ratio <= 0.0 || reward_ratio > 1.0 {
            return Err(EconomyError::InvalidCurve(format!(
                "reward_ratio {} must be in (0, 1]",
                reward_ratio
            )));
        }
        Ok(Self {
            exponent,
            reward_ratio,
        })
    }

    /// Penalty for a failed bet: monotone in both confidence and stake.
    pub fn failure_penalty(&self, confidence: f64, stake: f64) -> f64 {
        stake * confidence.powf(self.exponent)
    }

    /// Reward for a successful bet: strictly smaller than the failure
    /// penalty at equal confidence and stake.
    pub fn success_reward(&self, confidence: f64, stake: f64) -> f64 {
        self.reward_ratio * self.failure_penalty(confidence, stake)
    }
}

impl Default for PenaltyCurve {
    fn default() -> Self {
        Self {
            exponent: 2.0,
            reward_ratio: 0.5,
        }
    }
}

/// Outcome of applying one resolved bet to the ledger.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CredibilityUpdate {
    pub penalty_applied: f64,
    pub reward_applied: f64,
    pub score_after: f64,
}

/// Running calibration score of the compiler, in [0, 1].
///
/// Single logical owner: all updates are serialized by the
/// [`Economy`](crate::Economy) facade.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CredibilityLedger {
    score: f64,
    curve: PenaltyCurve,
    resolved_count: u64,
}

impl CredibilityLedger {
    /// Start at the neutral midpoint with the default curve.
    pub fn new() -> Self {
        Self::with_curve(PenaltyCurve::default())
    }

    pub fn with_curve(curve: PenaltyCurve) -> Self {
        Self {
            score: 0.5,
            curve,
            resolved_count: 0,
        }
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn curve(&self) -> &PenaltyCurve {
        &self.curve
    }

    pub fn resolved_count(&self) -> u64 {
        self.resolved_count
    }

    /// Fold one resolved bet into the score.
    ///
    /// Requires a resolved bet; the ledger is unchanged on error.
    pub fn record_outcome(&mut self, bet: &Bet) -> Result<CredibilityUpdate, EconomyError> {
        let success = match bet.resolution {
            Resolution::Unresolved => return Err(EconomyError::UnresolvedBet(bet.id.clone())),
            Resolution::Success => true,
            Resolution::Failure => false,
        };

        let (penalty, reward) = if success {
            (0.0, self.curve.success_reward(bet.confidence, bet.stake))
        } else {
            (self.curve.failure_penalty(bet.confidence, bet.stake), 0.0)
        };

        self.score = (self.score - penalty + reward).clamp(0.0, 1.0);
        self.resolved_count += 1;

        Ok(CredibilityUpdate {
            penalty_applied: penalty,
            reward_applied: reward,
            score_after: self.score,
        })
    }
}

impl Default for CredibilityLedger {
    fn default() -> Self {
        Self::new()
    }
}
