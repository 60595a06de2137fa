#![deny(unsafe_code)]
//! ASHC demo binary.
//!
//! Runs a self-contained walkthrough of the evidence engine:
//! 1. Fixed-N evidence compilation with a flaky verifier
//! 2. Adaptive compilation with the n_diff stopping rule
//! 3. Betting, settlement, and causal penalty propagation
//! 4. Causal graph learning and nudge-effect prediction
//!
//! No external services required -- all collaborators are simulated.

use ashc_causal::PredictedOutcome;
use ashc_compiler::{AdaptiveCompiler, EvidenceCompiler};
use ashc_economy::Citation;
use ashc_evidence::{SimulatedGenerator, SimulatedVerifier};
use ashc_session::{AshcSession, SessionConfig};
use ashc_stopping::{expected_samples_for_n_diff, StoppingConfig};
use ashc_types::Nudge;
use std::sync::Arc;

const BANNER: &str = r#"
 ╔═══════════════════════════════════════════════════════════════╗
 ║       ASHC  --  Adaptive Statistical Hypothesis Compiler      ║
 ║                                                               ║
 ║   Correctness as a statistical hypothesis: sample, verify,    ║
 ║   stop adaptively, and stake credibility on the verdict.      ║
 ╚═══════════════════════════════════════════════════════════════╝
"#;

fn section(title: &str) {
    let width: usize = 60;
    let pad = width.saturating_sub(title.len() + 4);
    let left = pad / 2;
    let right = pad - left;
    println!();
    println!(" ┌{}┐", "─".repeat(width));
    println!(" │{}  {}  {}│", " ".repeat(left), title, " ".repeat(right));
    println!(" └{}┘", "─".repeat(width));
}

fn ok(msg: &str) {
    println!("   [OK]  {}", msg);
}

fn info(msg: &str) {
    println!("   [--]  {}", msg);
}

const SPEC: &str = "fn median(values: &mut [i64]) -> Option<i64> -- \
    return the median element; None on empty input";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    println!("{}", BANNER);

    section("Fixed-N Evidence Compilation");
    let compiler = EvidenceCompiler::new(
        Arc::new(SimulatedGenerator::new()),
        Arc::new(SimulatedVerifier::passing().with_verdicts([
            true, true, true, false, true, true, true, true,
        ])),
    );
    let output = compiler.compile(SPEC, 8).await.expect("fixed-N compile");
    ok(&format!(
        "8 variations compiled: {} passed, {} failed",
        output.evidence.successes(),
        output.evidence.failures()
    ));
    info(&format!("agreement score: {:.2}", output.agreement_score));

    section("Adaptive Stopping");
    let stopping = StoppingConfig::default();
    info(&format!(
        "expected samples at p=0.8, n_diff={}: {:.1}",
        stopping.n_diff,
        expected_samples_for_n_diff(stopping.n_diff, 0.8)
    ));
    let adaptive = AdaptiveCompiler::new(
        Arc::new(SimulatedGenerator::new()),
        Arc::new(SimulatedVerifier::passing().with_verdicts([
            true, true, true, false, true, true, true, true,
        ])),
    );
    let result = adaptive.compile(SPEC, stopping).await.expect("adaptive compile");
    ok(&format!(
        "stopped after {} samples: {} (tier: {})",
        result.evidence.len(),
        result.decision,
        result.tier
    ));
    info(&format!(
        "posterior mean {:.3}, converged: {}",
        result.posterior_mean, result.converged
    ));

    section("Economy: Skin in the Game");
    let session = AshcSession::new(
        Arc::new(SimulatedGenerator::new()),
        Arc::new(SimulatedVerifier::passing()),
    )
    .with_config(SessionConfig::default());

    let citations = Citation::split_equally(["prefer-pure-functions", "exhaustive-matching"]);
    let cycle = session
        .run_cycle(SPEC, None, citations)
        .await
        .expect("cycle");
    ok(&format!(
        "bet staked: confidence {:.3}, stake {:.3}",
        cycle.bet.confidence, cycle.bet.stake
    ));

    info("ground truth arrives: the accepted candidate was wrong");
    let outcome = session
        .resolve(&cycle.bet.id, false)
        .await
        .expect("resolve");
    ok(&format!(
        "stake forfeited: {:.3}, credibility now {:.3}",
        outcome.settlement.stake_forfeited,
        session.credibility().await
    ));
    for penalty in &outcome.principle_penalties {
        info(&format!(
            "principle '{}' penalized by {:.4}",
            penalty.principle, penalty.amount
        ));
    }

    section("Causal Graph: Learning From Nudges");
    let trial_session = AshcSession::new(
        Arc::new(SimulatedGenerator::new()),
        Arc::new(SimulatedVerifier::passing().with_verdicts([
            false, false, false, // baseline stops failure
            true, true, true, // nudged stops success
        ])),
    )
    .with_config(SessionConfig {
        stopping: StoppingConfig::new(3, 3, 10).expect("stopping config"),
        ..SessionConfig::default()
    });

    let nudge = Nudge::new("explicit-errors", "add explicit error handling").with_tag("errors");
    let trial = trial_session
        .trial_nudge(SPEC, nudge)
        .await
        .expect("nudge trial");
    ok(&format!(
        "edge learned: delta {:+.2} (baseline {} -> nudged {})",
        trial.edge.delta, trial.baseline.decision, trial.nudged.decision
    ));

    let query = Nudge::new("explicit-errors-v2", "add explicit error handling paths")
        .with_tag("errors");
    let prediction: PredictedOutcome = trial_session.predict_nudge(&query);
    ok(&format!(
        "prediction for similar nudge: {:+.3} in [{:+.2}, {:+.2}] ({} samples)",
        prediction.mean_delta, prediction.interval.0, prediction.interval.1,
        prediction.sample_count
    ));

    let violations = trial_session.audit_monotonicity();
    info(&format!(
        "monotonicity audit: {} violation(s)",
        violations.len()
    ));

    println!();
    ok("demo complete");
}
