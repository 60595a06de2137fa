use crate::error::EvidenceError;
use crate::generator::Candidate;
use crate::report::VerificationReport;
use ashc_types::CancelToken;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Trait for verification collaborators (test runner + type checker + lint).
///
/// `verify` must be idempotent and side-effect-free on the candidate.
#[async_trait]
pub trait Verifier: Send + Sync {
    async fn verify(
        &self,
        candidate: &Candidate,
        cancel: &CancelToken,
    ) -> Result<VerificationReport, EvidenceError>;
}

/// Simulated verifier — scripted verdict sequence, configurable latency,
/// optional crash calls.
pub struct SimulatedVerifier {
    script: Vec<VerificationReport>,
    crashing_calls: Vec<usize>,
    latency: Duration,
    calls: AtomicUsize,
}

impl SimulatedVerifier {
    /// Every call reports all facets passing.
    pub fn passing() -> Self {
        Self {
            script: Vec::new(),
            crashing_calls: Vec::new(),
            latency: Duration::from_millis(0),
            calls: AtomicUsize::new(0),
        }
    }

    /// Scripted overall verdicts, one per call, in order. Calls past the end
    /// of the script repeat the final entry.
    pub fn with_verdicts(mut self, verdicts: impl IntoIterator<Item = bool>) -> Self {
        self.script = verdicts
            .into_iter()
            .map(|pass| {
                if pass {
                    VerificationReport::passing()
                } else {
                    VerificationReport::failed("scripted failure")
                }
            })
            .collect();
        self
    }

    /// Scripted full reports, for facet-level control.
    pub fn with_reports(mut self, reports: Vec<VerificationReport>) -> Self {
        self.script = reports;
        self
    }

    /// Calls (0-based) that crash instead of reporting.
    pub fn with_crashing_calls(mut self, calls: impl IntoIterator<Item = usize>) -> Self {
        self.crashing_calls = calls.into_iter().collect();
        self
    }

    /// Simulated verification latency per call.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn calls_made(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Verifier for SimulatedVerifier {
    async fn verify(
        &self,
        _candidate: &Candidate,
        cancel: &CancelToken,
    ) -> Result<VerificationReport, EvidenceError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if cancel.is_cancelled() {
            return Err(EvidenceError::Cancelled);
        }
        if self.crashing_calls.contains(&call) {
            return Err(EvidenceError::Verification(format!(
                "simulated verifier crash on call {}",
                call
            )));
        }

        Ok(match self.script.as_slice() {
            [] => VerificationReport::passing(),
            reports => reports[call.min(reports.len() - 1)].clone(),
        })
    }
}
