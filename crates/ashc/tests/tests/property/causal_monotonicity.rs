//! Property tests: causal monotonicity is a soft law — on synthetic graphs
//! where a tag-superset nudge genuinely dominates, the audit stays quiet;
//! where the superset is dominated beyond its own interval, the audit
//! flags it (and only flags, never corrects).

use ashc_causal::{CausalGraph, GraphConfig};
use ashc_types::Nudge;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

fn subset_nudge() -> Nudge {
    Nudge::new("base-errors", "add error handling").with_tag("errors")
}

fn superset_nudge() -> Nudge {
    Nudge::new("errors-and-retry", "add error handling and retries")
        .with_tags(["errors", "retry"])
}

/// A graph with repeated observations of both nudges at the given deltas.
fn graph_with(subset_delta: f64, superset_delta: f64, observations: usize) -> CausalGraph {
    let graph = CausalGraph::with_config(GraphConfig::default());
    for _ in 0..observations {
        graph.learn_delta(&subset_nudge(), subset_delta, 1.0);
        graph.learn_delta(&superset_nudge(), superset_delta, 1.0);
    }
    graph
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// When the superset's effect dominates the subset's, the audit never
    /// reports a violation.
    #[test]
    fn dominating_superset_is_never_flagged(
        subset_delta in -0.5f64..0.5,
        margin in 0.0f64..0.4,
        observations in 1usize..30,
    ) {
        let graph = graph_with(subset_delta, subset_delta + margin, observations);
        prop_assert!(graph.audit_monotonicity().is_empty());
    }

    /// A heavily dominated superset is flagged once the gap exceeds the
    /// superset's own confidence interval.
    #[test]
    fn strongly_dominated_superset_is_flagged(observations in 25usize..60) {
        let graph = graph_with(0.9, -0.9, observations);
        let violations = graph.audit_monotonicity();
        prop_assert_eq!(violations.len(), 1);
        prop_assert!(violations[0].superset_mean < violations[0].subset_mean);
    }

    /// The audit never mutates the graph: edge count and deltas survive.
    #[test]
    fn audit_is_read_only(
        subset_delta in -1.0f64..1.0,
        superset_delta in -1.0f64..1.0,
        observations in 1usize..20,
    ) {
        let graph = graph_with(subset_delta, superset_delta, observations);
        let before: Vec<f64> = graph.edges().iter().map(|e| e.delta).collect();
        let _ = graph.audit_monotonicity();
        let after: Vec<f64> = graph.edges().iter().map(|e| e.delta).collect();
        prop_assert_eq!(before, after);
    }

    /// Predictions over a single edge are similarity-discounted and carry
    /// an interval at least as wide as the discount they applied.
    #[test]
    fn single_edge_prediction_is_honest(delta in -1.0f64..1.0) {
        let graph = CausalGraph::new();
        let known = subset_nudge();
        graph.learn_delta(&known, delta, 1.0);

        let prediction = graph.predict(&known);
        // Self-similarity is 1.0: the mean is the raw delta.
        prop_assert!((prediction.mean_delta - delta).abs() < 1e-9);
        // One observation: the interval must not collapse.
        prop_assert!(prediction.interval_width() > 0.2);
    }
}
