use ashc_types::Nudge;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Weights for combining the two similarity signals.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SimilarityConfig {
    /// Weight of description-text similarity.
    pub text_weight: f64,
    /// Weight of change-tag (structural) similarity.
    pub structural_weight: f64,
}

impl SimilarityConfig {
    pub fn combine(&self, text: f64, structural: f64) -> f64 {
        let total = self.text_weight + self.structural_weight;
        if total <= 0.0 {
            return 0.0;
        }
        (self.text_weight * text + self.structural_weight * structural) / total
    }
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            text_weight: 0.6,
            structural_weight: 0.4,
        }
    }
}

fn tokenize(text: &str) -> BTreeSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}

fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let intersection = a.intersection(b).count() as f64;
    let union = a.union(b).count() as f64;
    intersection / union
}

/// Token-set Jaccard similarity of the two description texts.
pub fn text_similarity(a: &str, b: &str) -> f64 {
    jaccard(&tokenize(a), &tokenize(b))
}

/// Jaccard similarity of the two change-tag sets.
pub fn structural_similarity(a: &Nudge, b: &Nudge) -> f64 {
    jaccard(&a.change_tags, &b.change_tags)
}

/// Combined nudge similarity in [0, 1].
pub fn nudge_similarity(a: &Nudge, b: &Nudge, config: &SimilarityConfig) -> f64 {
    config.combine(
        text_similarity(&a.description, &b.description),
        structural_similarity(a, b),
    )
}

/// Gatekeeping predicate used both for graph compression (merging
/// near-duplicate edges) and prediction (including/excluding neighbours).
pub fn is_similar_nudge(a: &Nudge, b: &Nudge, threshold: f64) -> bool {
    nudge_similarity(a, b, &SimilarityConfig::default()) >= threshold
}
