use serde::{Deserialize, Serialize};
use std::fmt;

/// Content-addressed specification fingerprint (BLAKE3, 32 bytes).
///
/// Every piece of evidence, every bet, and every causal edge refers back to
/// the specification it was collected for through this fingerprint, so two
/// sessions compiling the same specification text agree on identity without
/// sharing state.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SpecFingerprint(pub [u8; 32]);

impl SpecFingerprint {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Fingerprint the canonical text of a specification.
    pub fn of_spec(spec_text: &str) -> Self {
        Self(*blake3::hash(spec_text.as_bytes()).as_bytes())
    }

    /// Fingerprint arbitrary candidate content (generated code, diffs).
    pub fn of_content(data: &[u8]) -> Self {
        Self(*blake3::hash(data).as_bytes())
    }

    /// Zero fingerprint — used as sentinel for "no content".
    pub fn zero() -> Self {
        Self([0u8; 32])
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Hex-encode for display and serialization.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02x}", b)).collect()
    }

    /// Parse from hex string.
    pub fn from_hex(hex: &str) -> Result<Self, FingerprintError> {
        if hex.len() != 64 {
            return Err(FingerprintError::InvalidLength(hex.len()));
        }
        let mut bytes = [0u8; 32];
        for i in 0..32 {
            bytes[i] = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
                .map_err(|_| FingerprintError::InvalidHex)?;
        }
        Ok(Self(bytes))
    }
}

impl fmt::Debug for SpecFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SpecFingerprint({})", &self.to_hex()[..12])
    }
}

impl fmt::Display for SpecFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.to_hex()[..12])
    }
}

impl Serialize for SpecFingerprint {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for SpecFingerprint {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        SpecFingerprint::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FingerprintError {
    #[error("invalid hex length: {0} (expected 64)")]
    InvalidLength(usize),
    #[error("invalid hex character")]
    InvalidHex,
}
