use ashc_types::NudgeId;
use serde::{Deserialize, Serialize};

/// One historical neighbour that contributed to a prediction.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Neighbor {
    pub nudge: NudgeId,
    pub similarity: f64,
    pub delta: f64,
    pub observations: u32,
}

/// Predicted effect of applying a nudge, with explicit uncertainty.
///
/// The interval widens as neighbour similarity decreases or sample count
/// shrinks; an empty graph predicts zero effect with the maximal interval
/// rather than erroring.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PredictedOutcome {
    /// Similarity-discounted weighted mean of neighbour deltas.
    pub mean_delta: f64,
    /// Confidence interval (low, high) around the mean, clamped to [-1, 1].
    pub interval: (f64, f64),
    /// Neighbours used, most similar first.
    pub neighbors: Vec<Neighbor>,
    /// Total observations behind the neighbours.
    pub sample_count: u32,
}

impl PredictedOutcome {
    /// The no-data prediction: zero effect, maximal uncertainty.
    pub fn uninformed() -> Self {
        Self {
            mean_delta: 0.0,
            interval: (-1.0, 1.0),
            neighbors: Vec::new(),
            sample_count: 0,
        }
    }

    pub fn interval_width(&self) -> f64 {
        self.interval.1 - self.interval.0
    }
}
