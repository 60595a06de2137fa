#![deny(unsafe_code)]
//! # ashc-evidence
//!
//! Verified-sample records for the ASHC engine: every generated candidate is
//! verified once and becomes an immutable [`Run`]; runs accumulate, in
//! insertion order, into the [`Evidence`] for one specification.
//!
//! The generation and verification mechanisms are collaborators, reached
//! through the [`Generator`] and [`Verifier`] traits. Simulated
//! implementations are provided for tests and demos.
//!
//! ## Key Types
//!
//! - [`Run`] — one generated-and-verified candidate outcome
//! - [`Evidence`] — append-only, sealable run aggregate with agreement score
//! - [`VerificationReport`] — per-facet pass/fail (tests, types, lint)
//! - [`Generator`] / [`SimulatedGenerator`] — candidate generation seam
//! - [`Verifier`] / [`SimulatedVerifier`] — candidate verification seam

pub mod error;
pub mod evidence;
pub mod generator;
pub mod report;
pub mod run;
pub mod verifier;

pub use error::EvidenceError;
pub use evidence::Evidence;
pub use generator::{Candidate, Generator, SimulatedGenerator};
pub use report::VerificationReport;
pub use run::Run;
pub use verifier::{SimulatedVerifier, Verifier};
