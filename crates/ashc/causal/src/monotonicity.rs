use crate::graph::CausalGraph;
use ashc_types::NudgeId;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One audited violation of causal monotonicity.
///
/// Violations are surfaced for human review — they may indicate genuine
/// non-monotonic interaction effects — and are never auto-corrected.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MonotonicityViolation {
    /// The nudge whose change tags strictly contain the subset's.
    pub superset: NudgeId,
    pub subset: NudgeId,
    pub superset_mean: f64,
    pub subset_mean: f64,
}

impl CausalGraph {
    /// Check the causal monotonicity law over all recorded nudges: where
    /// nudge A's change tags strictly contain nudge B's, the predicted
    /// outcome of A should not fall below B's beyond A's own confidence
    /// interval.
    ///
    /// Violations are logged and returned; the graph is never modified.
    pub fn audit_monotonicity(&self) -> Vec<MonotonicityViolation> {
        let edges = self.edges();
        let mut violations = Vec::new();

        for superset_edge in &edges {
            for subset_edge in &edges {
                if superset_edge.nudge.id == subset_edge.nudge.id {
                    continue;
                }
                if !superset_edge
                    .nudge
                    .is_strict_tag_superset_of(&subset_edge.nudge)
                {
                    continue;
                }
                let superset_prediction = self.predict(&superset_edge.nudge);
                let subset_prediction = self.predict(&subset_edge.nudge);

                // Tolerated while the subset's mean stays inside the
                // superset's interval.
                if subset_prediction.mean_delta > superset_prediction.interval.1 {
                    warn!(
                        superset = %superset_edge.nudge.id,
                        subset = %subset_edge.nudge.id,
                        superset_mean = superset_prediction.mean_delta,
                        subset_mean = subset_prediction.mean_delta,
                        "causal monotonicity violation"
                    );
                    violations.push(MonotonicityViolation {
                        superset: superset_edge.nudge.id.clone(),
                        subset: subset_edge.nudge.id.clone(),
                        superset_mean: superset_prediction.mean_delta,
                        subset_mean: subset_prediction.mean_delta,
                    });
                }
            }
        }
        violations
    }
}
