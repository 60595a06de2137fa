#[path = "property/stopping_determinism.rs"]
mod stopping_determinism;

#[path = "property/penalty_monotonicity.rs"]
mod penalty_monotonicity;

#[path = "property/cancellation_safety.rs"]
mod cancellation_safety;

#[path = "property/causal_monotonicity.rs"]
mod causal_monotonicity;
