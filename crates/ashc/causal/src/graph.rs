use crate::edge::CausalEdge;
use crate::error::CausalError;
use crate::prediction::{Neighbor, PredictedOutcome};
use crate::similarity::{nudge_similarity, SimilarityConfig};
use ashc_evidence::Evidence;
use ashc_types::Nudge;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::RwLock;
use tracing::debug;

/// Optional recency weighting applied at prediction time.
///
/// Edges never expire or get deleted; an enabled half-life only discounts
/// older observations when predicting.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct RecencyPolicy {
    /// Half-life in hours; `None` disables recency weighting.
    pub half_life_hours: Option<f64>,
}

impl RecencyPolicy {
    pub fn disabled() -> Self {
        Self {
            half_life_hours: None,
        }
    }

    pub fn half_life_hours(hours: f64) -> Self {
        Self {
            half_life_hours: Some(hours),
        }
    }

    fn weight(&self, age_hours: f64) -> f64 {
        match self.half_life_hours {
            None => 1.0,
            Some(half_life) => 0.5f64.powf(age_hours.max(0.0) / half_life),
        }
    }
}

/// Causal graph tuning.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Neighbours consulted per prediction.
    pub k_neighbors: usize,
    /// Minimum similarity for a neighbour to contribute to a prediction.
    pub include_threshold: f64,
    /// Similarity at which a new observation merges into an existing edge
    /// instead of adding one (graph compression).
    pub merge_threshold: f64,
    pub similarity: SimilarityConfig,
    pub recency: RecencyPolicy,
}

impl GraphConfig {
    pub fn validated(self) -> Result<Self, CausalError> {
        if self.k_neighbors == 0 {
            return Err(CausalError::InvalidConfig("k_neighbors must be >= 1".into()));
        }
        for (name, value) in [
            ("include_threshold", self.include_threshold),
            ("merge_threshold", self.merge_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(CausalError::InvalidConfig(format!(
                    "{} {} outside [0, 1]",
                    name, value
                )));
            }
        }
        if self.include_threshold > self.merge_threshold {
            return Err(CausalError::InvalidConfig(
                "include_threshold exceeds merge_threshold".into(),
            ));
        }
        if let Some(hours) = self.recency.half_life_hours {
            if hours <= 0.0 || !hours.is_finite() {
                return Err(CausalError::InvalidConfig(format!(
                    "half_life_hours {} must be positive",
                    hours
                )));
            }
        }
        Ok(self)
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            k_neighbors: 5,
            include_threshold: 0.25,
            merge_threshold: 0.92,
            similarity: SimilarityConfig::default(),
            recency: RecencyPolicy::disabled(),
        }
    }
}

/// Append-only store of (nudge, outcome delta) observations with
/// k-nearest-neighbour prediction.
///
/// Writes take the write lock for the duration of one edge insert/merge;
/// predictions hold the read lock for their whole computation, so a reader
/// never sees a half-written edge.
pub struct CausalGraph {
    edges: RwLock<Vec<CausalEdge>>,
    config: GraphConfig,
}

impl CausalGraph {
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            edges: RwLock::new(Vec::new()),
            config,
        }
    }

    pub fn len(&self) -> usize {
        self.read_edges().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of all edges (for audit and export).
    pub fn edges(&self) -> Vec<CausalEdge> {
        self.read_edges().clone()
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Pass rate of an evidence set — the outcome measure deltas are taken
    /// over. Agreement alone is direction-less; a nudge that flips the
    /// consensus from failing to passing must score positive.
    fn pass_rate(evidence: &Evidence) -> f64 {
        if evidence.is_empty() {
            return 0.0;
        }
        evidence.successes() as f64 / evidence.len() as f64
    }

    /// Record the observed effect of applying `nudge`: the outcome delta
    /// between the evidence collected without it and with it.
    ///
    /// Near-duplicate observations (similarity >= `merge_threshold` to an
    /// existing edge) are folded into that edge instead of growing the
    /// graph.
    pub fn learn(&self, nudge: &Nudge, before: &Evidence, after: &Evidence) -> CausalEdge {
        let delta = Self::pass_rate(after) - Self::pass_rate(before);
        // Confidence in the delta grows with the thinner of the two sides.
        let support = before.len().min(after.len()) as f64;
        let weight = support / (support + 2.0);
        self.learn_delta(nudge, delta, weight)
    }

    /// Low-level edge recording for callers that already computed a delta.
    pub fn learn_delta(&self, nudge: &Nudge, delta: f64, weight: f64) -> CausalEdge {
        let mut edges = self.write_edges();
        let best = edges
            .iter_mut()
            .map(|edge| {
                let similarity = nudge_similarity(nudge, &edge.nudge, &self.config.similarity);
                (similarity, edge)
            })
            .max_by(|(a, _), (b, _)| a.total_cmp(b));

        if let Some((similarity, edge)) = best {
            if similarity >= self.config.merge_threshold {
                edge.absorb(delta, weight);
                debug!(
                    nudge = %nudge.id,
                    merged_into = %edge.nudge.id,
                    similarity,
                    observations = edge.observations,
                    "near-duplicate edge merged"
                );
                return edge.clone();
            }
        }

        let edge = CausalEdge::new(nudge.clone(), delta, weight);
        debug!(nudge = %nudge.id, delta, weight, "causal edge recorded");
        edges.push(edge.clone());
        edge
    }

    /// Predict the effect of a nudge from its k most similar neighbours.
    ///
    /// The mean is the similarity-discounted weighted average of neighbour
    /// deltas; the interval widens as similarity drops or the backing
    /// sample count shrinks. An empty neighbourhood yields the uninformed
    /// prediction, never an error.
    pub fn predict(&self, nudge: &Nudge) -> PredictedOutcome {
        let edges = self.read_edges();
        let now = Utc::now();

        let mut scored: Vec<(f64, &CausalEdge)> = edges
            .iter()
            .map(|edge| {
                (
                    nudge_similarity(nudge, &edge.nudge, &self.config.similarity),
                    edge,
                )
            })
            .filter(|(similarity, _)| *similarity >= self.config.include_threshold)
            .collect();
        scored.sort_by(|(a, _), (b, _)| b.total_cmp(a));
        scored.truncate(self.config.k_neighbors);

        if scored.is_empty() {
            return PredictedOutcome::uninformed();
        }

        let mut total_weight = 0.0;
        let mut mean = 0.0;
        let mut sim_sum = 0.0;
        let mut sample_count: u32 = 0;
        for (similarity, edge) in &scored {
            let age_hours = (now - edge.observed_at).num_seconds() as f64 / 3600.0;
            let w = similarity * edge.weight * self.config.recency.weight(age_hours);
            total_weight += w;
            mean += w * similarity * edge.delta;
            sim_sum += w * similarity;
            sample_count += edge.observations;
        }
        if total_weight <= 1e-9 {
            return PredictedOutcome::uninformed();
        }
        mean /= total_weight;
        let avg_similarity = sim_sum / total_weight;

        let mut spread = 0.0;
        for (similarity, edge) in &scored {
            let age_hours = (now - edge.observed_at).num_seconds() as f64 / 3600.0;
            let w = similarity * edge.weight * self.config.recency.weight(age_hours);
            let discounted = similarity * edge.delta;
            spread += w * (discounted - mean) * (discounted - mean);
        }
        spread = (spread / total_weight).sqrt();

        let n = sample_count as f64;
        let half_width =
            1.96 * spread / n.sqrt() + 0.5 * (1.0 - avg_similarity) + 0.5 / (1.0 + n);
        let interval = (
            (mean - half_width).max(-1.0),
            (mean + half_width).min(1.0),
        );

        let neighbors = scored
            .iter()
            .map(|(similarity, edge)| Neighbor {
                nudge: edge.nudge.id.clone(),
                similarity: *similarity,
                delta: edge.delta,
                observations: edge.observations,
            })
            .collect();

        PredictedOutcome {
            mean_delta: mean,
            interval,
            neighbors,
            sample_count,
        }
    }

    fn read_edges(&self) -> std::sync::RwLockReadGuard<'_, Vec<CausalEdge>> {
        // A panicked writer cannot leave a half-written Vec entry behind
        // (push/absorb complete or unwind before publishing), so recover.
        self.edges.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_edges(&self) -> std::sync::RwLockWriteGuard<'_, Vec<CausalEdge>> {
        self.edges.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for CausalGraph {
    fn default() -> Self {
        Self::new()
    }
}
