//! End-to-end test: specification in, settled bet and learned causal edge out.
//!
//! Exercises the whole engine over simulated collaborators: fixed-N and
//! adaptive evidence collection, betting, settlement, penalty propagation,
//! and causal learning.

use ashc_compiler::EvidenceCompiler;
use ashc_economy::{Citation, Resolution};
use ashc_evidence::{SimulatedGenerator, SimulatedVerifier};
use ashc_session::{AshcSession, SessionConfig};
use ashc_stopping::{StoppingConfig, StoppingDecision};
use ashc_types::Nudge;
use std::sync::Arc;

const SPEC: &str = "fn dedupe(xs: Vec<u32>) -> Vec<u32> -- preserve first occurrence order";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn scripted_session(verdicts: impl IntoIterator<Item = bool>, stopping: StoppingConfig) -> AshcSession {
    AshcSession::new(
        Arc::new(SimulatedGenerator::new()),
        Arc::new(SimulatedVerifier::passing().with_verdicts(verdicts)),
    )
    .with_config(SessionConfig {
        stopping,
        ..SessionConfig::default()
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fixed_n_compilation_records_every_sample() {
    let compiler = EvidenceCompiler::new(
        Arc::new(SimulatedGenerator::new()),
        Arc::new(SimulatedVerifier::passing().with_verdicts([
            true, true, true, false, true, true, true, true,
        ])),
    );
    let out = compiler.compile(SPEC, 8).await.unwrap();
    assert_eq!(out.evidence.len(), 8);
    assert_eq!(out.evidence.successes() + out.evidence.failures(), 8);
    // Agreement = majority fraction, auditable from the raw runs.
    let majority = out.evidence.successes().max(out.evidence.failures());
    assert!((out.agreement_score - majority as f64 / 8.0).abs() < 1e-12);
}

#[tokio::test]
async fn adaptive_stop_matches_expected_sample_index() {
    // 7-pass/1-fail script with n_diff=4: lead hits 4 at the 6th sample.
    let session = scripted_session(
        [true, true, true, false, true, true, true, true],
        StoppingConfig::new(4, 3, 20).unwrap(),
    );
    let report = session.run_cycle(SPEC, None, Vec::new()).await.unwrap();
    assert_eq!(report.adaptive.decision, StoppingDecision::StopSuccess);
    assert_eq!(report.adaptive.evidence.len(), 6);
    assert!(report.adaptive.evidence.is_sealed());
    assert!(report.adaptive.converged);
}

#[tokio::test]
async fn full_cycle_failure_settles_and_attributes() {
    let session = scripted_session(
        std::iter::repeat(true).take(10),
        StoppingConfig::default(),
    );
    let citations = vec![
        Citation::new("prefer-pure-functions", 0.7),
        Citation::new("exhaustive-matching", 0.3),
    ];
    let report = session.run_cycle(SPEC, None, citations).await.unwrap();
    assert!(report.bet.confidence > 0.5);

    let credibility_before = session.credibility().await;
    let outcome = session.resolve(&report.bet.id, false).await.unwrap();

    // Stake forfeited to the counterparty, credibility dropped.
    assert_eq!(outcome.settlement.stake_forfeited, report.bet.stake);
    assert!(session.credibility().await < credibility_before);

    // Penalty propagated proportionally to the citation weights.
    assert_eq!(outcome.principle_penalties.len(), 2);
    let heavy = &outcome.principle_penalties[0];
    let light = &outcome.principle_penalties[1];
    assert!(heavy.amount > light.amount);
    assert!(
        session
            .economy()
            .principle_credibility("prefer-pure-functions")
            .await
            .unwrap()
            < session
                .economy()
                .principle_credibility("exhaustive-matching")
                .await
                .unwrap()
    );

    // The bet is now immutable.
    let stored = session.economy().bet(&report.bet.id).await.unwrap();
    assert_eq!(stored.resolution, Resolution::Failure);
    assert_eq!(stored.settlement, Some(report.bet.stake));
}

#[tokio::test]
async fn nudge_trial_feeds_prediction() {
    // Baseline: 3 straight failures. Nudged: 3 straight passes.
    let session = scripted_session(
        [false, false, false, true, true, true],
        StoppingConfig::new(3, 3, 10).unwrap(),
    );
    let nudge = Nudge::new("explicit-errors", "add explicit error handling").with_tag("errors");
    let trial = session.trial_nudge(SPEC, nudge).await.unwrap();
    assert!(trial.edge.delta > 0.9);

    // A reworded variant of the same strategy predicts a positive effect
    // with honest uncertainty.
    let query = Nudge::new("explicit-errors-v2", "add explicit error handling paths")
        .with_tag("errors");
    let prediction = session.predict_nudge(&query);
    assert!(prediction.mean_delta > 0.5);
    assert!(prediction.interval.0 < prediction.mean_delta);
    assert!(prediction.interval.1 > prediction.mean_delta);
    assert_eq!(prediction.sample_count, 1);
}

#[tokio::test]
async fn unknown_nudge_predicts_wide_and_low() {
    let session = scripted_session([true], StoppingConfig::default());
    let prediction = session.predict_nudge(
        &Nudge::new("novel", "completely novel strategy").with_tag("novel"),
    );
    assert_eq!(prediction.mean_delta, 0.0);
    assert_eq!(prediction.interval, (-1.0, 1.0));
    assert_eq!(prediction.sample_count, 0);
}

#[tokio::test]
async fn capped_compilation_reports_unconverged() {
    let session = scripted_session(
        [true, false, true, false, true, false],
        StoppingConfig::new(4, 3, 6).unwrap(),
    );
    let report = session.run_cycle(SPEC, None, Vec::new()).await.unwrap();
    assert_eq!(report.adaptive.decision, StoppingDecision::StopCapReached);
    assert!(!report.adaptive.converged);
    // Confidence is still reported -- the posterior mean -- but the caller
    // sees the explicit unconverged flag.
    assert!(report.adaptive.posterior_mean > 0.0);
}
