use crate::error::EvidenceError;
use ashc_types::{CallLimits, CancelToken, Nudge, SpecFingerprint};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// One generated candidate implementation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Candidate {
    /// Generated content (code, diff).
    pub content: String,
    /// Fingerprint of the content.
    pub fingerprint: SpecFingerprint,
    /// Tokens spent by the generation collaborator.
    pub tokens_used: u64,
}

impl Candidate {
    pub fn new(content: impl Into<String>, tokens_used: u64) -> Self {
        let content = content.into();
        let fingerprint = SpecFingerprint::of_content(content.as_bytes());
        Self {
            content,
            fingerprint,
            tokens_used,
        }
    }
}

/// Trait for candidate-generation collaborators (LLM-backed or simulated).
///
/// Implementations must honor the cancellation token and the token budget;
/// the compiler additionally wraps every call in a wall-clock deadline.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Generate one candidate for the specification, optionally perturbed
    /// by a nudge.
    async fn generate(
        &self,
        spec_text: &str,
        nudge: Option<&Nudge>,
        limits: &CallLimits,
        cancel: &CancelToken,
    ) -> Result<Candidate, EvidenceError>;
}

/// Simulated generator for tests and demos — deterministic content, scripted
/// failures, configurable latency.
pub struct SimulatedGenerator {
    latency: Duration,
    tokens_per_call: u64,
    failing_calls: Vec<usize>,
    calls: AtomicUsize,
}

impl SimulatedGenerator {
    pub fn new() -> Self {
        Self {
            latency: Duration::from_millis(0),
            tokens_per_call: 256,
            failing_calls: Vec::new(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Simulated generation latency per call.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_tokens_per_call(mut self, tokens: u64) -> Self {
        self.tokens_per_call = tokens;
        self
    }

    /// Calls (0-based) that fail with a backend error.
    pub fn with_failing_calls(mut self, calls: impl IntoIterator<Item = usize>) -> Self {
        self.failing_calls = calls.into_iter().collect();
        self
    }

    pub fn calls_made(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for SimulatedGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Generator for SimulatedGenerator {
    async fn generate(
        &self,
        spec_text: &str,
        nudge: Option<&Nudge>,
        limits: &CallLimits,
        cancel: &CancelToken,
    ) -> Result<Candidate, EvidenceError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if cancel.is_cancelled() {
            return Err(EvidenceError::Cancelled);
        }
        if self.failing_calls.contains(&call) {
            return Err(EvidenceError::Generation(format!(
                "simulated backend error on call {}",
                call
            )));
        }
        if self.tokens_per_call > limits.token_budget {
            return Err(EvidenceError::BudgetExhausted {
                used: self.tokens_per_call,
                budget: limits.token_budget,
            });
        }

        let nudge_name = nudge.map(|n| n.name.as_str()).unwrap_or("none");
        Ok(Candidate::new(
            format!(
                "// candidate {} for spec {}\n// nudge: {}\nfn solve() {{}}\n",
                call,
                SpecFingerprint::of_spec(spec_text),
                nudge_name
            ),
            self.tokens_per_call,
        ))
    }
}
