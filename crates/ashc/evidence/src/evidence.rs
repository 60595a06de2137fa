use crate::error::EvidenceError;
use crate::run::Run;
use ashc_types::SpecFingerprint;
use serde::{Deserialize, Serialize};

/// Accumulated verified samples for one specification.
///
/// Runs are appended in the order the sequential test consumes them;
/// existing runs are never edited or removed. Once a terminal stopping
/// decision is reached the evidence is sealed, and any pipeline that
/// finishes late is refused — that refusal is what makes the
/// cancellation/completion race safe.
///
/// Evidence lives only as long as the compiling session; persistence is a
/// caller concern.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Evidence {
    /// Specification these samples were collected for.
    pub spec: SpecFingerprint,
    /// Verified samples, in insertion order.
    runs: Vec<Run>,
    successes: usize,
    failures: usize,
    sealed: bool,
}

impl Evidence {
    pub fn new(spec: SpecFingerprint) -> Self {
        Self {
            spec,
            runs: Vec::new(),
            successes: 0,
            failures: 0,
            sealed: false,
        }
    }

    /// Append a run. Fails if the evidence is sealed or the run belongs to
    /// a different specification; the evidence is unchanged on failure.
    pub fn append(&mut self, run: Run) -> Result<(), EvidenceError> {
        if self.sealed {
            return Err(EvidenceError::Sealed(self.spec.clone()));
        }
        if run.spec != self.spec {
            return Err(EvidenceError::SpecMismatch {
                run_spec: run.spec.clone(),
                evidence_spec: self.spec.clone(),
            });
        }
        if run.passed {
            self.successes += 1;
        } else {
            self.failures += 1;
        }
        self.runs.push(run);
        Ok(())
    }

    /// Seal against further appends. Idempotent.
    pub fn seal(&mut self) {
        self.sealed = true;
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn successes(&self) -> usize {
        self.successes
    }

    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Fraction of runs agreeing with the majority outcome:
    /// `max(successes, failures) / total`. Zero when no runs exist.
    pub fn agreement_score(&self) -> f64 {
        if self.runs.is_empty() {
            return 0.0;
        }
        self.successes.max(self.failures) as f64 / self.runs.len() as f64
    }

    /// Majority verdict, `None` on a tie or with no runs.
    pub fn majority_passed(&self) -> Option<bool> {
        match self.successes.cmp(&self.failures) {
            std::cmp::Ordering::Greater => Some(true),
            std::cmp::Ordering::Less => Some(false),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Current lead of the majority outcome: `|successes - failures|`.
    pub fn lead(&self) -> usize {
        self.successes.abs_diff(self.failures)
    }
}
