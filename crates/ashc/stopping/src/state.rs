use crate::error::StoppingError;
use crate::prior::BetaPrior;
use serde::{Deserialize, Serialize};

/// Configuration of the sequential stopping rule.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct StoppingConfig {
    /// Margin by which one outcome must lead the other before stopping.
    pub n_diff: u32,
    /// Minimum samples before any verdict stop (guards against a lucky
    /// first sample when n_diff is small).
    pub min_samples: u32,
    /// Hard sample cap; reaching it stops with an unconverged verdict.
    pub max_samples: u32,
}

impl StoppingConfig {
    pub fn new(n_diff: u32, min_samples: u32, max_samples: u32) -> Result<Self, StoppingError> {
        if n_diff == 0 {
            return Err(StoppingError::InvalidConfig("n_diff must be >= 1".into()));
        }
        if max_samples == 0 {
            return Err(StoppingError::InvalidConfig(
                "max_samples must be >= 1".into(),
            ));
        }
        if min_samples > max_samples {
            return Err(StoppingError::InvalidConfig(format!(
                "min_samples ({}) exceeds max_samples ({})",
                min_samples, max_samples
            )));
        }
        Ok(Self {
            n_diff,
            min_samples,
            max_samples,
        })
    }
}

impl Default for StoppingConfig {
    fn default() -> Self {
        Self {
            n_diff: 4,
            min_samples: 3,
            max_samples: 20,
        }
    }
}

/// Terminal or non-terminal verdict after a sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoppingDecision {
    /// Not enough evidence yet; request another sample.
    Continue,
    /// Success outcome leads by at least n_diff.
    StopSuccess,
    /// Failure outcome leads by at least n_diff.
    StopFailure,
    /// Sample cap reached without convergence; posterior mean is the
    /// confidence, flagged as capped rather than converged.
    StopCapReached,
}

impl StoppingDecision {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Continue)
    }

    /// Whether the sequential test actually converged (cap stops did not).
    pub fn converged(&self) -> bool {
        matches!(self, Self::StopSuccess | Self::StopFailure)
    }
}

impl std::fmt::Display for StoppingDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Continue => write!(f, "continue"),
            Self::StopSuccess => write!(f, "stop (success)"),
            Self::StopFailure => write!(f, "stop (failure)"),
            Self::StopCapReached => write!(f, "stop (cap reached, not converged)"),
        }
    }
}

/// Sequential stopping state: posterior plus outcome counts.
///
/// The decision is a pure function of this state — no hidden randomness, so
/// an identical outcome sequence always stops at the same sample index with
/// the same verdict.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoppingState {
    prior: BetaPrior,
    config: StoppingConfig,
    successes: u32,
    failures: u32,
}

impl StoppingState {
    pub fn new(config: StoppingConfig) -> Self {
        Self::with_prior(BetaPrior::uniform(), config)
    }

    /// Start from a seeded prior (e.g. from an external pre-verification
    /// pass). The seed shifts the posterior, not the observed counts: the
    /// n_diff rule runs on actual samples only.
    pub fn with_prior(prior: BetaPrior, config: StoppingConfig) -> Self {
        Self {
            prior,
            config,
            successes: 0,
            failures: 0,
        }
    }

    pub fn config(&self) -> &StoppingConfig {
        &self.config
    }

    pub fn posterior(&self) -> &BetaPrior {
        &self.prior
    }

    pub fn successes(&self) -> u32 {
        self.successes
    }

    pub fn failures(&self) -> u32 {
        self.failures
    }

    pub fn samples(&self) -> u32 {
        self.successes + self.failures
    }

    /// Current lead of the majority outcome.
    pub fn lead(&self) -> u32 {
        self.successes.abs_diff(self.failures)
    }

    /// Consume the latest run outcome and decide whether to continue.
    pub fn next_decision(&mut self, latest_passed: bool) -> StoppingDecision {
        self.prior.observe(latest_passed);
        if latest_passed {
            self.successes += 1;
        } else {
            self.failures += 1;
        }
        self.decision()
    }

    /// Decision for the current state, without consuming an outcome.
    pub fn decision(&self) -> StoppingDecision {
        if self.samples() == 0 {
            return StoppingDecision::Continue;
        }
        if self.lead() >= self.config.n_diff && self.samples() >= self.config.min_samples {
            return if self.successes > self.failures {
                StoppingDecision::StopSuccess
            } else {
                StoppingDecision::StopFailure
            };
        }
        if self.samples() >= self.config.max_samples {
            return StoppingDecision::StopCapReached;
        }
        StoppingDecision::Continue
    }
}
