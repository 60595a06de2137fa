//! Property tests: the stopping decision is a pure function of the outcome
//! sequence — same samples, same stop index, same verdict, every time.

use ashc_stopping::{StoppingConfig, StoppingDecision, StoppingState};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

fn arb_outcomes() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 1..60)
}

fn arb_config() -> impl Strategy<Value = StoppingConfig> {
    (1u32..6, 1u32..5, 5u32..40).prop_map(|(n_diff, min_samples, max_samples)| {
        StoppingConfig::new(n_diff, min_samples.min(max_samples), max_samples).unwrap()
    })
}

/// Drive the stopping engine over an outcome sequence; returns the stop
/// index (in samples consumed) and the terminal decision, padding the
/// sequence cyclically if the cap is not hit within it.
fn drive(config: StoppingConfig, outcomes: &[bool]) -> (u32, StoppingDecision) {
    let mut state = StoppingState::new(config);
    let mut consumed = 0;
    loop {
        let outcome = outcomes[(consumed as usize) % outcomes.len()];
        let decision = state.next_decision(outcome);
        consumed += 1;
        if decision.is_terminal() {
            return (consumed, decision);
        }
    }
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Identical outcome sequences always stop at the same index with the
    /// same decision.
    #[test]
    fn replay_is_identical(config in arb_config(), outcomes in arb_outcomes()) {
        let first = drive(config, &outcomes);
        let second = drive(config, &outcomes);
        prop_assert_eq!(first, second);
    }

    /// The engine always terminates at or before the sample cap.
    #[test]
    fn cap_bounds_sample_count(config in arb_config(), outcomes in arb_outcomes()) {
        let (consumed, _) = drive(config, &outcomes);
        prop_assert!(consumed <= config.max_samples);
    }

    /// A converged stop implies the lead actually reached the margin and
    /// the floor was respected; a cap stop implies it never did.
    #[test]
    fn stop_reasons_are_truthful(config in arb_config(), outcomes in arb_outcomes()) {
        let mut state = StoppingState::new(config);
        let mut consumed = 0u32;
        let decision = loop {
            let outcome = outcomes[(consumed as usize) % outcomes.len()];
            let decision = state.next_decision(outcome);
            consumed += 1;
            if decision.is_terminal() {
                break decision;
            }
        };
        match decision {
            StoppingDecision::StopSuccess | StoppingDecision::StopFailure => {
                prop_assert!(state.lead() >= config.n_diff);
                prop_assert!(consumed >= config.min_samples);
                if decision == StoppingDecision::StopSuccess {
                    prop_assert!(state.successes() > state.failures());
                } else {
                    prop_assert!(state.failures() > state.successes());
                }
            }
            StoppingDecision::StopCapReached => {
                prop_assert_eq!(consumed, config.max_samples);
            }
            StoppingDecision::Continue => prop_assert!(false, "loop exited on Continue"),
        }
    }

    /// The posterior mean always equals the conjugate-update closed form.
    #[test]
    fn posterior_matches_closed_form(outcomes in arb_outcomes()) {
        // Margin and cap far beyond the sequence length: nothing stops early.
        let config = StoppingConfig::new(1_000, 1, 1_000).unwrap();
        let mut state = StoppingState::new(config);
        let mut successes = 0u32;
        for outcome in &outcomes {
            state.next_decision(*outcome);
            if *outcome {
                successes += 1;
            }
        }
        let expected = (1.0 + successes as f64) / (2.0 + outcomes.len() as f64);
        prop_assert!((state.posterior().mean() - expected).abs() < 1e-9);
    }
}
