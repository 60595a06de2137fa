use crate::bet::{Bet, BetId, Resolution};
use crate::credibility::{CredibilityLedger, CredibilityUpdate};
use crate::error::EconomyError;
use serde::{Deserialize, Serialize};

/// Outcome of settling one resolved bet against the implicit counterparty.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Settlement {
    pub bet_id: BetId,
    pub resolution: Resolution,
    /// Stake the compiler forfeited — the counterparty's winnings.
    pub stake_forfeited: f64,
    /// Credibility movement this settlement caused.
    pub credibility: CredibilityUpdate,
}

/// The implicit adversarial counterparty.
///
/// It wins the stake whenever a bet fails and neither pays nor forfeits
/// anything when a bet succeeds: the compiler can only lose stake. The
/// asymmetry keeps the incentive pressure one-directional — reckless
/// confidence is discouraged without recklessness ever being rewarded.
pub struct AdversarialAccountability;

impl AdversarialAccountability {
    /// Settle a resolved bet, folding its outcome into the credibility
    /// ledger. Fails on an unresolved bet, leaving the ledger unchanged.
    pub fn settle(
        bet: &Bet,
        credibility: &mut CredibilityLedger,
    ) -> Result<Settlement, EconomyError> {
        if bet.resolution == Resolution::Unresolved {
            return Err(EconomyError::UnresolvedBet(bet.id.clone()));
        }
        let stake_forfeited = match bet.resolution {
            Resolution::Failure => bet.stake,
            _ => 0.0,
        };
        let credibility = credibility.record_outcome(bet)?;
        Ok(Settlement {
            bet_id: bet.id.clone(),
            resolution: bet.resolution,
            stake_forfeited,
            credibility,
        })
    }
}
