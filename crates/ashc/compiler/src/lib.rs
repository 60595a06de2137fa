#![deny(unsafe_code)]
//! # ashc-compiler
//!
//! Orchestration of evidence collection: candidate generation and
//! verification pipelines, bounded concurrency, per-call deadlines, and
//! cooperative cancellation.
//!
//! Two modes:
//!
//! - [`EvidenceCompiler`] — fixed-N: all variations are decided up front and
//!   run with bounded parallelism; runs land in variation-index order so the
//!   evidence is deterministic and replayable.
//! - [`AdaptiveCompiler`] — one candidate at a time, consulting the
//!   [`ashc_stopping`] engine after every run; a terminal decision seals the
//!   evidence and cancels anything still in flight.
//!
//! A collaborator timeout or crash becomes a **failed run**, never a dropped
//! sample — "we don't know" counts against the hypothesis.

pub mod adaptive;
pub mod config;
pub mod error;
pub mod fixed;
pub mod output;
mod pipeline;

pub use adaptive::AdaptiveCompiler;
pub use config::CompilerConfig;
pub use error::CompileError;
pub use fixed::EvidenceCompiler;
pub use output::{AdaptiveEvidence, AshcOutput};
