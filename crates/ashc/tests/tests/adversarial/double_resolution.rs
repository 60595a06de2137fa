//! Adversarial test: a bet resolves exactly once, no matter how the second
//! resolution is attempted.

use ashc_economy::{Bet, Economy, Resolution};
use ashc_types::SpecFingerprint;
use std::sync::Arc;

fn spec() -> SpecFingerprint {
    SpecFingerprint::of_spec("double-resolution")
}

#[tokio::test]
async fn flipping_the_verdict_is_rejected() {
    let economy = Economy::new();
    let bet = economy.place_bet(spec(), 0.9, 0.5, Vec::new()).await.unwrap();
    economy.resolve(&bet.id, true).await.unwrap();

    // Attacker tries to flip success into failure.
    assert!(economy.resolve(&bet.id, false).await.is_err());

    let stored = economy.bet(&bet.id).await.unwrap();
    assert_eq!(stored.resolution, Resolution::Success);
    assert_eq!(stored.settlement, Some(0.0));
}

#[tokio::test]
async fn repeating_the_same_verdict_is_also_rejected() {
    let economy = Economy::new();
    let bet = economy.place_bet(spec(), 0.9, 0.5, Vec::new()).await.unwrap();
    economy.resolve(&bet.id, false).await.unwrap();
    let credibility = economy.credibility().await;

    // Replaying the identical failure must not double-charge.
    assert!(economy.resolve(&bet.id, false).await.is_err());
    assert_eq!(economy.credibility().await, credibility);
}

#[tokio::test]
async fn concurrent_double_resolution_lands_exactly_once() {
    for _ in 0..20 {
        let economy = Arc::new(Economy::new());
        let bet = economy.place_bet(spec(), 0.9, 0.5, Vec::new()).await.unwrap();

        let a = {
            let economy = Arc::clone(&economy);
            let id = bet.id.clone();
            tokio::spawn(async move { economy.resolve(&id, true).await })
        };
        let b = {
            let economy = Arc::clone(&economy);
            let id = bet.id.clone();
            tokio::spawn(async move { economy.resolve(&id, false).await })
        };

        let results = [a.await.unwrap().is_ok(), b.await.unwrap().is_ok()];
        assert_eq!(
            results.iter().filter(|ok| **ok).count(),
            1,
            "exactly one resolution must win"
        );

        let stored = economy.bet(&bet.id).await.unwrap();
        assert_ne!(stored.resolution, Resolution::Unresolved);
        assert!(stored.settlement.is_some());
    }
}

#[tokio::test]
async fn direct_bet_double_resolve_preserves_first_outcome() {
    let mut bet = Bet::create(spec(), 0.8, 0.1, Vec::new()).unwrap();
    bet.resolve(false).unwrap();
    let resolved_at = bet.resolved_at;

    assert!(bet.resolve(true).is_err());
    assert_eq!(bet.resolution, Resolution::Failure);
    assert_eq!(bet.resolved_at, resolved_at);
}
