use crate::bet::BetId;

/// Errors from the economic ledger.
///
/// Ledger invariant violations are fatal to the operation that raised them
/// and always leave the ledger unchanged — validation happens before any
/// write.
#[derive(Debug, thiserror::Error)]
pub enum EconomyError {
    #[error("confidence {0} outside [0, 1]")]
    InvalidConfidence(f64),
    #[error("stake {0} must be non-negative and finite")]
    InvalidStake(f64),
    #[error("invalid citations: {0}")]
    InvalidCitations(String),
    #[error("invalid penalty curve: {0}")]
    InvalidCurve(String),
    #[error("bet {0} already resolved")]
    AlreadyResolved(BetId),
    #[error("bet {0} is not resolved yet")]
    UnresolvedBet(BetId),
    #[error("unknown bet {0}")]
    UnknownBet(BetId),
}
