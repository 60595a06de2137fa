//! Adversarial test: the ledger rejects malformed bets outright — no code
//! path reports confidence the samples cannot justify, and no rejected bet
//! leaves a trace.

use ashc_economy::{Citation, Economy, EconomyError};
use ashc_types::SpecFingerprint;

fn spec() -> SpecFingerprint {
    SpecFingerprint::of_spec("forged")
}

#[tokio::test]
async fn confidence_above_one_rejected() {
    let economy = Economy::new();
    let err = economy
        .place_bet(spec(), 1.7, 0.1, Vec::new())
        .await
        .unwrap_err();
    assert!(matches!(err, EconomyError::InvalidConfidence(_)));
    assert_eq!(economy.credibility().await, 0.5);
}

#[tokio::test]
async fn nan_confidence_rejected() {
    let economy = Economy::new();
    assert!(economy
        .place_bet(spec(), f64::NAN, 0.1, Vec::new())
        .await
        .is_err());
}

#[tokio::test]
async fn negative_stake_rejected() {
    let economy = Economy::new();
    let err = economy
        .place_bet(spec(), 0.5, -0.01, Vec::new())
        .await
        .unwrap_err();
    assert!(matches!(err, EconomyError::InvalidStake(_)));
}

#[tokio::test]
async fn infinite_stake_rejected() {
    let economy = Economy::new();
    assert!(economy
        .place_bet(spec(), 0.5, f64::INFINITY, Vec::new())
        .await
        .is_err());
}

#[tokio::test]
async fn overweight_citations_rejected() {
    let economy = Economy::new();
    let citations = vec![
        Citation::new("a", 0.8),
        Citation::new("b", 0.5),
    ];
    let err = economy
        .place_bet(spec(), 0.5, 0.1, citations)
        .await
        .unwrap_err();
    assert!(matches!(err, EconomyError::InvalidCitations(_)));
    // The cited principles were never touched.
    assert_eq!(economy.principle_credibility("a").await, None);
}

#[tokio::test]
async fn zero_stake_zero_confidence_is_legal() {
    // Degenerate but honest: claiming nothing and risking nothing.
    let economy = Economy::new();
    let bet = economy
        .place_bet(spec(), 0.0, 0.0, Vec::new())
        .await
        .unwrap();
    let outcome = economy.resolve(&bet.id, false).await.unwrap();
    assert_eq!(outcome.settlement.stake_forfeited, 0.0);
    // A zero-confidence failure carries no penalty.
    assert_eq!(economy.credibility().await, 0.5);
}
