use ashc_compiler::CompileError;
use ashc_economy::EconomyError;

/// Errors from session orchestration.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session emergency-stopped")]
    Stopped,
    #[error(transparent)]
    Compile(#[from] CompileError),
    #[error(transparent)]
    Economy(#[from] EconomyError),
}
