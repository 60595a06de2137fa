use ashc_evidence::EvidenceError;
use ashc_stopping::StoppingError;

/// Errors from compilation orchestration.
///
/// Collaborator failures are NOT represented here — they are recorded as
/// failed runs inside the evidence. These variants cover configuration and
/// internal bookkeeping faults only.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("invalid compiler config: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Evidence(#[from] EvidenceError),
    #[error(transparent)]
    Stopping(#[from] StoppingError),
    #[error("pipeline worker failed: {0}")]
    Worker(String),
}
