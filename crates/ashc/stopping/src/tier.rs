use crate::prior::BetaPrior;
use serde::{Deserialize, Serialize};

/// Qualitative difficulty bucket derived from the posterior.
///
/// Purely classificatory — deriving a tier never mutates state. The
/// `alpha + beta` pseudo-sample count acts as a crude precision proxy so a
/// high mean on thin evidence does not classify as trivial.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceTier {
    /// Posterior mean > 0.95 with enough pseudo-samples to trust it.
    TriviallyEasy,
    /// Posterior mean below a coin flip.
    LikelyFails,
    /// Everything in between, or a confident mean on thin evidence.
    Uncertain,
}

impl ConfidenceTier {
    pub fn classify(posterior: &BetaPrior) -> Self {
        let mean = posterior.mean();
        if mean > 0.95 && posterior.pseudo_samples() > 8.0 {
            Self::TriviallyEasy
        } else if mean < 0.5 {
            Self::LikelyFails
        } else {
            Self::Uncertain
        }
    }
}

impl std::fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TriviallyEasy => write!(f, "trivially easy"),
            Self::LikelyFails => write!(f, "likely fails"),
            Self::Uncertain => write!(f, "uncertain"),
        }
    }
}
