#![deny(unsafe_code)]
//! # ashc-economy
//!
//! The economic accountability layer: the compiler stakes an internal
//! accountability unit on its own confidence and pays when it is wrong.
//!
//! Settlement is deliberately one-directional — the implicit adversarial
//! counterparty wins the stake on every failed bet and forfeits nothing on
//! a successful one. High-confidence failures cost the most.
//!
//! ## Key Types
//!
//! - [`Bet`] — a staked, confidence-labelled prediction; resolves exactly once
//! - [`CredibilityLedger`] — running calibration score with an asymmetric,
//!   tunable [`PenaltyCurve`]
//! - [`AdversarialAccountability`] / [`Settlement`] — one-way stake settlement
//! - [`PrincipleRegistry`] / [`InMemoryPrincipleRegistry`] — per-principle scores
//! - [`propagate_penalty`] — causal penalty propagation to cited principles
//! - [`Economy`] — single-writer facade serializing all ledger updates

pub mod attribution;
pub mod bet;
pub mod credibility;
pub mod economy;
pub mod error;
pub mod principles;
pub mod settlement;

pub use attribution::{propagate_penalty, PrinciplePenalty};
pub use bet::{Bet, BetId, Citation, Resolution};
pub use credibility::{CredibilityLedger, CredibilityUpdate, PenaltyCurve};
pub use economy::{Economy, ResolutionOutcome};
pub use error::EconomyError;
pub use principles::{InMemoryPrincipleRegistry, PrincipleRegistry};
pub use settlement::{AdversarialAccountability, Settlement};
