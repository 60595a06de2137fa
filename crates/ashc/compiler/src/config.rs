use crate::error::CompileError;
use ashc_types::CallLimits;
use serde::{Deserialize, Serialize};

/// Orchestration settings shared by both compilation modes.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CompilerConfig {
    /// Maximum generation+verification pipelines in flight at once
    /// (fixed-N mode; the adaptive loop is inherently sequential).
    pub parallelism: usize,
    /// Per-call resource limits forwarded to collaborators.
    pub limits: CallLimits,
}

impl CompilerConfig {
    pub fn new(parallelism: usize, limits: CallLimits) -> Result<Self, CompileError> {
        if parallelism == 0 {
            return Err(CompileError::InvalidConfig(
                "parallelism must be >= 1".into(),
            ));
        }
        Ok(Self {
            parallelism,
            limits,
        })
    }
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            parallelism: 4,
            limits: CallLimits::default(),
        }
    }
}
