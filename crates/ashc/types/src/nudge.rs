use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Stable identifier for a nudge: BLAKE3 of `name@version`.
///
/// Runs and causal edges reference nudges by id; the nudge itself is
/// immutable, so a new version of the same strategy gets a new id.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NudgeId(String);

impl NudgeId {
    pub fn derive(name: &str, version: u32) -> Self {
        let digest = blake3::hash(format!("{}@{}", name, version).as_bytes());
        Self(digest.to_hex().as_str()[..16].to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for NudgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NudgeId({})", self.0)
    }
}

impl fmt::Display for NudgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, versioned perturbation to the generation strategy.
///
/// The description text feeds similarity matching in the causal graph; the
/// change tags give a coarse structural signature (e.g. "error-handling",
/// "retry", "types") used for tag-overlap similarity and superset checks.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Nudge {
    /// Stable id derived from name + version.
    pub id: NudgeId,
    /// Human-readable strategy name.
    pub name: String,
    /// Version of this strategy; bumping it yields a new identity.
    pub version: u32,
    /// Free-text description used for similarity matching.
    pub description: String,
    /// Structural signature of the change this nudge applies.
    pub change_tags: BTreeSet<String>,
}

impl Nudge {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: NudgeId::derive(&name, 1),
            name,
            version: 1,
            description: description.into(),
            change_tags: BTreeSet::new(),
        }
    }

    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self.id = NudgeId::derive(&self.name, version);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.change_tags.insert(tag.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.change_tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// True when this nudge's change tags strictly contain `other`'s.
    ///
    /// Used by the causal monotonicity audit: a strict superset of changes
    /// is expected to predict at least as large an outcome delta.
    pub fn is_strict_tag_superset_of(&self, other: &Nudge) -> bool {
        self.change_tags.len() > other.change_tags.len()
            && other.change_tags.is_subset(&self.change_tags)
    }
}
