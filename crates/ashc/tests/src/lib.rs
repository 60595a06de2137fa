#![deny(unsafe_code)]
//! Cross-crate test suites for ASHC.
//!
//! The real content lives in `tests/`:
//! - `e2e_tests` — full pipeline and economy flows over simulated collaborators
//! - `property_tests` — proptest suites for the engine's stated laws
//! - `adversarial_tests` — ledger and evidence invariants under misuse
