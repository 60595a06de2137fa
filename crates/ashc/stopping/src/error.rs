/// Errors from the stopping engine.
#[derive(Debug, thiserror::Error)]
pub enum StoppingError {
    #[error("invalid prior Beta({alpha}, {beta}): both parameters must be >= 1 and finite")]
    InvalidPrior { alpha: f64, beta: f64 },
    #[error("invalid stopping config: {0}")]
    InvalidConfig(String),
    #[error("prior seeding failed: {0}")]
    Seeding(String),
}
