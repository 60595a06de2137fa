use ashc_evidence::Evidence;
use ashc_stopping::{ConfidenceTier, StoppingDecision};
use serde::{Deserialize, Serialize};

/// Result of a fixed-N compilation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AshcOutput {
    /// The collected evidence, in variation-index order.
    pub evidence: Evidence,
    /// Human-auditable agreement: `max(successes, failures) / total`.
    pub agreement_score: f64,
}

/// Result of an adaptive compilation.
///
/// There is deliberately no way to construct this with a confidence the
/// evidence does not justify: the posterior mean and tier are derived from
/// the same stopping state that produced the decision.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AdaptiveEvidence {
    /// The collected (and sealed) evidence.
    pub evidence: Evidence,
    /// Terminal decision that ended sampling.
    pub decision: StoppingDecision,
    /// Qualitative difficulty bucket at stop time.
    pub tier: ConfidenceTier,
    /// Posterior mean at stop time — the confidence a bet would claim.
    pub posterior_mean: f64,
    /// False when the cap ended sampling before the n_diff rule converged.
    pub converged: bool,
}
