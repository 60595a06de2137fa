#![deny(unsafe_code)]
//! # ashc-causal
//!
//! The causal graph learner: every resolved compilation under a nudge
//! becomes a [`CausalEdge`] linking that nudge to the outcome delta it
//! produced; the graph predicts the effect of a new nudge from its most
//! similar historical neighbours.
//!
//! The graph grows monotonically — edges are merged when near-duplicate,
//! never deleted; recency, if enabled, is a prediction-time weighting
//! policy.
//!
//! ## Key Types
//!
//! - [`CausalEdge`] — one historical (nudge, outcome delta) observation
//! - [`CausalGraph`] — append-only edge store with k-NN prediction
//! - [`PredictedOutcome`] — mean delta with an explicit confidence interval
//! - [`is_similar_nudge`] — gatekeeping predicate for merging and prediction
//! - [`MonotonicityViolation`] — logged (never auto-corrected) audit finding

pub mod edge;
pub mod error;
pub mod graph;
pub mod monotonicity;
pub mod prediction;
pub mod similarity;

pub use edge::CausalEdge;
pub use error::CausalError;
pub use graph::{CausalGraph, GraphConfig, RecencyPolicy};
pub use monotonicity::MonotonicityViolation;
pub use prediction::{Neighbor, PredictedOutcome};
pub use similarity::{is_similar_nudge, nudge_similarity, SimilarityConfig};
