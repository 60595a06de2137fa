use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Resource limits for one collaborator call.
///
/// A deadline overrun is reported by the compiler as a failed run, not as a
/// system fault; the token budget is forwarded to the generation
/// collaborator, which is responsible for honoring it.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CallLimits {
    /// Maximum tokens the generation collaborator may spend.
    pub token_budget: u64,
    /// Wall-clock deadline for a single generation call, in milliseconds.
    pub generate_deadline_ms: u64,
    /// Wall-clock deadline for a single verification call, in milliseconds.
    pub verify_deadline_ms: u64,
}

impl CallLimits {
    pub fn generate_deadline(&self) -> Duration {
        Duration::from_millis(self.generate_deadline_ms)
    }

    pub fn verify_deadline(&self) -> Duration {
        Duration::from_millis(self.verify_deadline_ms)
    }
}

impl Default for CallLimits {
    fn default() -> Self {
        Self {
            token_budget: 8_192,
            generate_deadline_ms: 30_000,
            verify_deadline_ms: 60_000,
        }
    }
}
