use crate::attribution::{propagate_penalty, PrinciplePenalty};
use crate::bet::{Bet, BetId, Citation, Resolution};
use crate::credibility::{CredibilityLedger, PenaltyCurve};
use crate::error::EconomyError;
use crate::principles::{InMemoryPrincipleRegistry, PrincipleRegistry};
use crate::settlement::{AdversarialAccountability, Settlement};
use ashc_types::SpecFingerprint;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::info;

struct EconomyInner {
    bets: HashMap<BetId, Bet>,
    credibility: CredibilityLedger,
    registry: Box<dyn PrincipleRegistry>,
}

/// Settlement plus the causal attribution it triggered.
#[derive(Clone, Debug)]
pub struct ResolutionOutcome {
    pub settlement: Settlement,
    pub principle_penalties: Vec<PrinciplePenalty>,
}

/// Single-writer facade over the betting ledger.
///
/// All state lives behind one mutex, so concurrent bet resolutions
/// serialize and every resolution is atomic: validation happens before any
/// write, and a failed operation leaves bets, credibility, and the
/// principle registry untouched.
///
/// Lifecycle: one `Economy` per compiling session, constructed explicitly
/// and torn down (or exported) by the caller — no global instance.
pub struct Economy {
    inner: Mutex<EconomyInner>,
}

impl Economy {
    pub fn new() -> Self {
        Self::with_parts(
            CredibilityLedger::new(),
            Box::new(InMemoryPrincipleRegistry::new()),
        )
    }

    pub fn with_curve(curve: PenaltyCurve) -> Self {
        Self::with_parts(
            CredibilityLedger::with_curve(curve),
            Box::new(InMemoryPrincipleRegistry::new()),
        )
    }

    pub fn with_parts(
        credibility: CredibilityLedger,
        registry: Box<dyn PrincipleRegistry>,
    ) -> Self {
        Self {
            inner: Mutex::new(EconomyInner {
                bets: HashMap::new(),
                credibility,
                registry,
            }),
        }
    }

    /// Stake sizing convention: willingness to stake grows with confidence.
    pub fn proportional_stake(confidence: f64, max_stake: f64) -> f64 {
        (confidence * max_stake).max(0.0)
    }

    /// Place a staked prediction. Returns a snapshot of the recorded bet.
    pub async fn place_bet(
        &self,
        spec: SpecFingerprint,
        confidence: f64,
        stake: f64,
        citations: Vec<Citation>,
    ) -> Result<Bet, EconomyError> {
        let bet = Bet::create(spec, confidence, stake, citations)?;
        let mut inner = self.inner.lock().await;
        inner.bets.insert(bet.id.clone(), bet.clone());
        info!(bet = %bet.id, confidence, stake, "bet placed");
        Ok(bet)
    }

    /// Resolve a bet and settle it: one-way transition, serialized with all
    /// other resolutions. On failure outcomes the settlement's credibility
    /// penalty propagates to the cited principles.
    pub async fn resolve(
        &self,
        bet_id: &BetId,
        success: bool,
    ) -> Result<ResolutionOutcome, EconomyError> {
        let mut inner = self.inner.lock().await;
        let inner = &mut *inner;

        let bet = inner
            .bets
            .get_mut(bet_id)
            .ok_or_else(|| EconomyError::UnknownBet(bet_id.clone()))?;
        bet.resolve(success)?;

        let settlement = AdversarialAccountability::settle(bet, &mut inner.credibility)?;
        bet.record_settlement(settlement.stake_forfeited);

        let principle_penalties = if settlement.resolution == Resolution::Failure {
            propagate_penalty(
                bet,
                settlement.credibility.penalty_applied,
                inner.registry.as_mut(),
            )
        } else {
            Vec::new()
        };

        info!(
            bet = %bet_id,
            success,
            stake_forfeited = settlement.stake_forfeited,
            credibility = settlement.credibility.score_after,
            "bet resolved"
        );
        Ok(ResolutionOutcome {
            settlement,
            principle_penalties,
        })
    }

    /// Snapshot of a bet by id.
    pub async fn bet(&self, bet_id: &BetId) -> Option<Bet> {
        self.inner.lock().await.bets.get(bet_id).cloned()
    }

    /// Current compiler credibility.
    pub async fn credibility(&self) -> f64 {
        self.inner.lock().await.credibility.score()
    }

    /// Current credibility of a cited principle, if known.
    pub async fn principle_credibility(&self, name: &str) -> Option<f64> {
        self.inner.lock().await.registry.credibility_of(name)
    }
}

impl Default for Economy {
    fn default() -> Self {
        Self::new()
    }
}
