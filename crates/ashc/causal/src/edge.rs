use ashc_types::Nudge;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One historical observation linking a nudge to its effect on evidence
/// outcomes.
///
/// Carries a snapshot of the nudge (nudges are immutable values) so the
/// edge stays matchable even after the originating session is gone. Merged
/// near-duplicates accumulate in `observations`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CausalEdge {
    /// The nudge that was applied.
    pub nudge: Nudge,
    /// Observed outcome delta: pass-rate after minus pass-rate before.
    pub delta: f64,
    /// Confidence weight in [0, 1], derived from the sample sizes behind
    /// the before/after evidence.
    pub weight: f64,
    /// How many observations this edge aggregates (1 unless merged).
    pub observations: u32,
    pub observed_at: DateTime<Utc>,
}

impl CausalEdge {
    pub fn new(nudge: Nudge, delta: f64, weight: f64) -> Self {
        Self {
            nudge,
            delta,
            weight: weight.clamp(0.0, 1.0),
            observations: 1,
            observed_at: Utc::now(),
        }
    }

    /// Fold another observation of (near-)the-same nudge into this edge.
    /// Deltas average weighted by observation count; the edge never
    /// forgets how much evidence stands behind it.
    pub fn absorb(&mut self, delta: f64, weight: f64) {
        let n = self.observations as f64;
        self.delta = (self.delta * n + delta) / (n + 1.0);
        self.weight = ((self.weight * n + weight.clamp(0.0, 1.0)) / (n + 1.0)).clamp(0.0, 1.0);
        self.observations += 1;
        self.observed_at = Utc::now();
    }
}
