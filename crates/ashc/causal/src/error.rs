/// Errors from the causal graph.
///
/// Insufficient data is NOT an error: predictions over thin graphs return a
/// wide interval instead. Only configuration problems surface here.
#[derive(Debug, thiserror::Error)]
pub enum CausalError {
    #[error("invalid graph config: {0}")]
    InvalidConfig(String),
}
