#[path = "adversarial/double_resolution.rs"]
mod double_resolution;

#[path = "adversarial/sealed_evidence.rs"]
mod sealed_evidence;

#[path = "adversarial/forged_confidence.rs"]
mod forged_confidence;
