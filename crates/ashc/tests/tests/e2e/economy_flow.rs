//! End-to-end test: the accountability economy over many resolved bets.
//!
//! Verifies the one-directional counterparty and the calibration pressure:
//! overconfident failure is the most expensive way to be wrong.

use ashc_economy::{Citation, Economy, PenaltyCurve};
use ashc_types::SpecFingerprint;
use std::sync::Arc;

fn spec(tag: &str) -> SpecFingerprint {
    SpecFingerprint::of_spec(tag)
}

#[tokio::test]
async fn compiler_never_gains_stake() {
    let economy = Economy::new();
    let mut total_forfeited = 0.0;
    for i in 0..10 {
        let bet = economy
            .place_bet(spec(&format!("s{}", i)), 0.8, 0.1, Vec::new())
            .await
            .unwrap();
        let outcome = economy.resolve(&bet.id, i % 2 == 0).await.unwrap();
        // Successful bets forfeit nothing; failed ones forfeit the stake.
        assert!(outcome.settlement.stake_forfeited >= 0.0);
        total_forfeited += outcome.settlement.stake_forfeited;
    }
    // 5 failures at stake 0.1 each; nothing ever flows back.
    assert!((total_forfeited - 0.5).abs() < 1e-9);
}

#[tokio::test]
async fn overconfident_failures_sink_credibility_fastest() {
    let hedged = Economy::new();
    let reckless = Economy::new();

    for i in 0..5 {
        let b = hedged
            .place_bet(spec(&format!("h{}", i)), 0.55, 0.1, Vec::new())
            .await
            .unwrap();
        hedged.resolve(&b.id, false).await.unwrap();

        let b = reckless
            .place_bet(spec(&format!("r{}", i)), 0.99, 0.1, Vec::new())
            .await
            .unwrap();
        reckless.resolve(&b.id, false).await.unwrap();
    }

    assert!(reckless.credibility().await < hedged.credibility().await);
}

#[tokio::test]
async fn calibrated_success_recovers_slowly() {
    let economy = Economy::new();

    // One overconfident failure...
    let bad = economy
        .place_bet(spec("bad"), 0.95, 0.2, Vec::new())
        .await
        .unwrap();
    economy.resolve(&bad.id, false).await.unwrap();
    let after_failure = economy.credibility().await;

    // ...takes more than one equally-confident success to undo.
    let good = economy
        .place_bet(spec("good"), 0.95, 0.2, Vec::new())
        .await
        .unwrap();
    economy.resolve(&good.id, true).await.unwrap();
    let after_recovery = economy.credibility().await;

    assert!(after_recovery > after_failure);
    assert!(after_recovery < 0.5, "one success must not fully undo a failure");
}

#[tokio::test]
async fn tunable_curve_changes_penalty_shape() {
    let quadratic = Economy::with_curve(PenaltyCurve::default());
    let quartic = Economy::with_curve(PenaltyCurve::new(4.0, 0.5).unwrap());

    for (economy, tag) in [(&quadratic, "q2"), (&quartic, "q4")] {
        let bet = economy
            .place_bet(spec(tag), 0.6, 0.5, Vec::new())
            .await
            .unwrap();
        economy.resolve(&bet.id, false).await.unwrap();
    }

    // The sharper exponent is gentler at mid confidence.
    assert!(quartic.credibility().await > quadratic.credibility().await);
}

#[tokio::test]
async fn repeated_citation_failures_erode_a_principle() {
    let economy = Economy::new();
    for i in 0..8 {
        let bet = economy
            .place_bet(
                spec(&format!("c{}", i)),
                0.9,
                0.5,
                Citation::split_equally(["always-inline"]),
            )
            .await
            .unwrap();
        economy.resolve(&bet.id, false).await.unwrap();
    }
    let credibility = economy.principle_credibility("always-inline").await.unwrap();
    assert!(
        credibility < 0.1,
        "a principle cited by eight straight failures should be nearly dead, got {}",
        credibility
    );
}

#[tokio::test]
async fn interleaved_settlements_stay_consistent() {
    let economy = Arc::new(Economy::new());
    let mut handles = Vec::new();
    for i in 0..32 {
        let economy = Arc::clone(&economy);
        handles.push(tokio::spawn(async move {
            let bet = economy
                .place_bet(spec(&format!("p{}", i)), 0.7, 0.01, Vec::new())
                .await
                .unwrap();
            economy.resolve(&bet.id, i % 4 == 0).await.unwrap()
        }));
    }
    let mut failures = 0;
    for handle in handles {
        let outcome = handle.await.unwrap();
        if outcome.settlement.stake_forfeited > 0.0 {
            failures += 1;
        }
    }
    assert_eq!(failures, 24);
}
