use crate::error::EconomyError;
use ashc_types::SpecFingerprint;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique bet identifier.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BetId(Uuid);

impl BetId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BetId({})", self.0)
    }
}

impl fmt::Display for BetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resolution state of a bet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    Unresolved,
    Success,
    Failure,
}

/// One principle cited as supporting evidence for a bet, with its stated
/// contribution weight. Weights across a bet's citations must sum to <= 1.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    pub principle: String,
    pub weight: f64,
}

impl Citation {
    pub fn new(principle: impl Into<String>, weight: f64) -> Self {
        Self {
            principle: principle.into(),
            weight,
        }
    }

    /// Unweighted citation list: penalty splits equally.
    pub fn split_equally<I, S>(principles: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = principles.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Vec::new();
        }
        let weight = 1.0 / names.len() as f64;
        names
            .into_iter()
            .map(|principle| Self { principle, weight })
            .collect()
    }
}

/// A staked, confidence-labelled prediction that a specification's accepted
/// candidate is correct.
///
/// A bet resolves exactly once; after resolution it is immutable, including
/// its settlement amount.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Bet {
    pub id: BetId,
    /// Specification the prediction is about.
    pub spec: SpecFingerprint,
    /// Claimed probability of correctness, in [0, 1].
    pub confidence: f64,
    /// Accountability units at risk. Non-negative; by convention
    /// proportional to confidence — skin in the game.
    pub stake: f64,
    /// Principles cited as supporting the decision.
    pub citations: Vec<Citation>,
    pub created_at: DateTime<Utc>,
    pub resolution: Resolution,
    /// Stake actually forfeited, set exactly once at settlement.
    pub settlement: Option<f64>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl Bet {
    /// Validate and create an unresolved bet.
    pub fn create(
        spec: SpecFingerprint,
        confidence: f64,
        stake: f64,
        citations: Vec<Citation>,
    ) -> Result<Self, EconomyError> {
        if !(0.0..=1.0).contains(&confidence) || !confidence.is_finite() {
            return Err(EconomyError::InvalidConfidence(confidence));
        }
        if stake < 0.0 || !stake.is_finite() {
            return Err(EconomyError::InvalidStake(stake));
        }
        let weight_sum: f64 = citations.iter().map(|c| c.weight).sum();
        if citations.iter().any(|c| c.weight < 0.0 || !c.weight.is_finite()) {
            return Err(EconomyError::InvalidCitations(
                "citation weights must be non-negative and finite".into(),
            ));
        }
        if weight_sum > 1.0 + 1e-9 {
            return Err(EconomyError::InvalidCitations(format!(
                "citation weights sum to {} (> 1)",
                weight_sum
            )));
        }
        Ok(Self {
            id: BetId::new(),
            spec,
            confidence,
            stake,
            citations,
            created_at: Utc::now(),
            resolution: Resolution::Unresolved,
            settlement: None,
            resolved_at: None,
        })
    }

    pub fn is_resolved(&self) -> bool {
        self.resolution != Resolution::Unresolved
    }

    /// One-way resolution transition. Fails, without touching the bet, if
    /// already resolved.
    pub fn resolve(&mut self, success: bool) -> Result<(), EconomyError> {
        if self.is_resolved() {
            return Err(EconomyError::AlreadyResolved(self.id.clone()));
        }
        self.resolution = if success {
            Resolution::Success
        } else {
            Resolution::Failure
        };
        self.resolved_at = Some(Utc::now());
        Ok(())
    }

    pub(crate) fn record_settlement(&mut self, amount: f64) {
        self.settlement = Some(amount);
    }
}
