use crate::bet::Bet;
use crate::principles::PrincipleRegistry;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One principle's share of a propagated penalty.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PrinciplePenalty {
    pub principle: String,
    pub amount: f64,
    /// Credibility after the decrement, if the registry reports it.
    pub credibility_after: Option<f64>,
}

/// Propagate a failed bet's penalty to the principles it cited.
///
/// Each cited principle is decremented proportionally to its stated
/// contribution weight. Zero-weight citation lists (nothing claimed a
/// share) split the penalty equally.
pub fn propagate_penalty(
    bet: &Bet,
    base_penalty: f64,
    registry: &mut dyn PrincipleRegistry,
) -> Vec<PrinciplePenalty> {
    if bet.citations.is_empty() || base_penalty <= 0.0 {
        return Vec::new();
    }

    let weight_sum: f64 = bet.citations.iter().map(|c| c.weight).sum();
    let equal_share = 1.0 / bet.citations.len() as f64;

    bet.citations
        .iter()
        .map(|citation| {
            let weight = if weight_sum > 0.0 {
                citation.weight
            } else {
                equal_share
            };
            let amount = base_penalty * weight;
            registry.apply_penalty(&citation.principle, amount);
            let credibility_after = registry.credibility_of(&citation.principle);
            debug!(
                principle = %citation.principle,
                amount,
                ?credibility_after,
                "causal penalty propagated"
            );
            PrinciplePenalty {
                principle: citation.principle.clone(),
                amount,
                credibility_after,
            }
        })
        .collect()
}
