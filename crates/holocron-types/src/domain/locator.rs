use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, path-shaped resource locator as handed out by the catalog API
/// (e.g. `https://swapi.dev/api/people/4/`).
///
/// The last non-empty path segment is the resource id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locator(String);

impl Locator {
    pub fn new(locator: impl Into<String>) -> Self {
        Self(locator.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short id used for navigation and detail lookup
    pub fn id(&self) -> &str {
        extract_id(&self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Locator {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Locator {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for Locator {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Extract the id segment from a locator.
///
/// Trailing slashes are ignored, so `.../people/4/` and `.../people/4` both
/// yield `"4"`. A locator without any `/` is returned as-is.
pub fn extract_id(locator: &str) -> &str {
    let trimmed = locator.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}
