#![deny(unsafe_code)]
//! # ashc-session
//!
//! One compiling session: an adaptive compiler, an economy, and a causal
//! graph wired together for the full evidence → bet → settlement →
//! attribution → learning cycle.
//!
//! All three subsystems are constructed explicitly per session and torn
//! down (or exported) by the caller — there are no global instances.
//!
//! ## Key Types
//!
//! - [`AshcSession`] — owns the subsystems, drives the cycle
//! - [`CycleReport`] — adaptive evidence plus the bet staked on it
//! - [`NudgeTrial`] — baseline-vs-nudged comparison fed into the graph

pub mod error;
pub mod session;

pub use error::SessionError;
pub use session::{AshcSession, CycleReport, NudgeTrial, SessionConfig};
