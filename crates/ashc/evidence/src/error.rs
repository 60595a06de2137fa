use ashc_types::SpecFingerprint;

/// Errors from the evidence system and its collaborator seams.
#[derive(Debug, thiserror::Error)]
pub enum EvidenceError {
    #[error("evidence for {0} is sealed; no further runs may be appended")]
    Sealed(SpecFingerprint),
    #[error("run belongs to spec {run_spec}, evidence tracks {evidence_spec}")]
    SpecMismatch {
        run_spec: SpecFingerprint,
        evidence_spec: SpecFingerprint,
    },
    #[error("generation failed: {0}")]
    Generation(String),
    #[error("generation token budget exhausted ({used}/{budget})")]
    BudgetExhausted { used: u64, budget: u64 },
    #[error("verification failed: {0}")]
    Verification(String),
    #[error("collaborator call cancelled")]
    Cancelled,
}
