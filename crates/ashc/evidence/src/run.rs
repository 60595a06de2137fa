use crate::report::VerificationReport;
use ashc_types::{NudgeId, SpecFingerprint};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One verified candidate: a single sample of the correctness hypothesis.
///
/// Immutable once created. Owned by the [`Evidence`](crate::Evidence) that
/// collected it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Run {
    /// Specification this candidate was generated for.
    pub spec: SpecFingerprint,
    /// Variation index within the compilation (0-based).
    pub variation: u32,
    /// Nudge applied during generation, if any.
    pub nudge: Option<NudgeId>,
    /// Fingerprint of the generated candidate content.
    pub content: SpecFingerprint,
    /// Per-facet verification outcome.
    pub report: VerificationReport,
    /// Overall verdict, derived from the report at construction.
    pub passed: bool,
    /// Wall-clock duration of generate + verify, in milliseconds.
    pub duration_ms: u64,
    /// When the run was recorded.
    pub recorded_at: DateTime<Utc>,
}

impl Run {
    /// Record a verified candidate.
    pub fn verified(
        spec: SpecFingerprint,
        variation: u32,
        nudge: Option<NudgeId>,
        content: SpecFingerprint,
        report: VerificationReport,
        duration_ms: u64,
    ) -> Self {
        let passed = report.overall_pass();
        Self {
            spec,
            variation,
            nudge,
            content,
            report,
            passed,
            duration_ms,
            recorded_at: Utc::now(),
        }
    }

    /// Record a collaborator failure (timeout, crash) as a failed run.
    ///
    /// The content fingerprint is the zero sentinel: there is no candidate
    /// to point at, but the sample still counts against the hypothesis.
    pub fn collaborator_failure(
        spec: SpecFingerprint,
        variation: u32,
        nudge: Option<NudgeId>,
        reason: impl Into<String>,
        duration_ms: u64,
    ) -> Self {
        Self::verified(
            spec,
            variation,
            nudge,
            SpecFingerprint::zero(),
            VerificationReport::failed(reason),
            duration_ms,
        )
    }
}
