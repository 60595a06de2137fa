//! Adversarial test: sealed evidence and spec identity cannot be subverted
//! by late or foreign runs.

use ashc_evidence::{Evidence, EvidenceError, Run, VerificationReport};
use ashc_types::SpecFingerprint;

fn passing_run(spec: &SpecFingerprint, variation: u32) -> Run {
    Run::verified(
        spec.clone(),
        variation,
        None,
        SpecFingerprint::of_content(&variation.to_le_bytes()),
        VerificationReport::passing(),
        1,
    )
}

#[test]
fn late_run_cannot_pad_the_success_count() {
    let spec = SpecFingerprint::of_spec("sealed");
    let mut evidence = Evidence::new(spec.clone());
    evidence.append(passing_run(&spec, 0)).unwrap();
    evidence.seal();

    let successes_before = evidence.successes();
    for variation in 1..10 {
        assert!(evidence.append(passing_run(&spec, variation)).is_err());
    }
    assert_eq!(evidence.successes(), successes_before);
    assert_eq!(evidence.len(), 1);
}

#[test]
fn runs_for_another_spec_are_rejected() {
    let spec = SpecFingerprint::of_spec("mine");
    let foreign = SpecFingerprint::of_spec("theirs");
    let mut evidence = Evidence::new(spec);

    let err = evidence.append(passing_run(&foreign, 0)).unwrap_err();
    assert!(matches!(err, EvidenceError::SpecMismatch { .. }));
    assert!(evidence.is_empty());
}

#[test]
fn agreement_score_cannot_be_inflated_by_refused_appends() {
    let spec = SpecFingerprint::of_spec("agreement");
    let mut evidence = Evidence::new(spec.clone());
    // 2 pass, 2 fail: agreement 0.5.
    for (i, pass) in [true, true, false, false].iter().enumerate() {
        let run = if *pass {
            passing_run(&spec, i as u32)
        } else {
            Run::collaborator_failure(spec.clone(), i as u32, None, "fail", 1)
        };
        evidence.append(run).unwrap();
    }
    evidence.seal();
    let score = evidence.agreement_score();

    let _ = evidence.append(passing_run(&spec, 99));
    assert_eq!(evidence.agreement_score(), score);
}
