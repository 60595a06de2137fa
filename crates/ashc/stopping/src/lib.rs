#![deny(unsafe_code)]
//! # ashc-stopping
//!
//! The Bayesian adaptive stopping engine: a Beta-Binomial posterior over
//! "probability of correct" plus the sequential n_diff rule that decides,
//! after every new sample, whether enough evidence has been collected.
//!
//! ## Key Types
//!
//! - [`BetaPrior`] — conjugate Beta distribution over correctness probability
//! - [`StoppingState`] / [`StoppingDecision`] — sequential decision state
//! - [`StoppingConfig`] — n_diff margin, sample floor, sample cap
//! - [`ConfidenceTier`] — qualitative bucket derived from the posterior
//! - [`PriorSeeder`] / [`SimulatedPriorSeeder`] — optional pre-verification seam
//! - [`expected_samples_for_n_diff`] — cap sizing before compilation starts

pub mod error;
pub mod planning;
pub mod prior;
pub mod seeder;
pub mod state;
pub mod tier;

pub use error::StoppingError;
pub use planning::{
    expected_samples_for_n_diff, reliability_boost_from_voting, simulate_expected_samples,
};
pub use prior::BetaPrior;
pub use seeder::{PriorSeeder, SimulatedPriorSeeder};
pub use state::{StoppingConfig, StoppingDecision, StoppingState};
pub use tier::ConfidenceTier;
