use serde::{Deserialize, Serialize};

/// Result of verifying one candidate across all verification facets.
///
/// Produced by a [`Verifier`](crate::Verifier); the verifier must be
/// idempotent and side-effect-free on the candidate.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerificationReport {
    /// Whether the test suite passed.
    pub tests_passed: bool,
    /// Whether the type checker passed.
    pub types_passed: bool,
    /// Whether the lint checker passed.
    pub lint_passed: bool,
    /// Human-readable detail (failure output, tool diagnostics).
    pub details: String,
}

impl VerificationReport {
    /// All facets pass.
    pub fn passing() -> Self {
        Self {
            tests_passed: true,
            types_passed: true,
            lint_passed: true,
            details: String::new(),
        }
    }

    /// Every facet fails with the given reason.
    ///
    /// Used when the collaborator itself failed (timeout, crash): "we don't
    /// know" is recorded as failure, never omitted.
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            tests_passed: false,
            types_passed: false,
            lint_passed: false,
            details: reason.into(),
        }
    }

    pub fn with_tests(mut self, passed: bool) -> Self {
        self.tests_passed = passed;
        self
    }

    pub fn with_types(mut self, passed: bool) -> Self {
        self.types_passed = passed;
        self
    }

    pub fn with_lint(mut self, passed: bool) -> Self {
        self.lint_passed = passed;
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = details.into();
        self
    }

    /// Overall verdict: every facet must pass.
    pub fn overall_pass(&self) -> bool {
        self.tests_passed && self.types_passed && self.lint_passed
    }
}
