use crate::{Movie, Person, Species};
use serde::{Deserialize, Serialize};

/// Text the transport boundary puts in its single placeholder record
pub const FALLBACK_TEXT: &str = "Not The Data You Were Looking For..";

/// One page of a catalog list endpoint.
///
/// `count` is the total across all pages as reported by the server;
/// `next`/`previous` are absolute URLs of the neighbouring pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResponse<T> {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T: Placeholder> PageResponse<T> {
    /// Well-formed stand-in for a failed request: a single placeholder
    /// record, no neighbours, and a zero count.
    pub fn fallback() -> Self {
        Self {
            count: 0,
            next: None,
            previous: None,
            results: vec![T::placeholder(FALLBACK_TEXT)],
        }
    }
}

impl<T> PageResponse<T> {
    /// A zero count marks a page that carries no catalog records, whether
    /// it is genuinely empty or a transport substitute.
    pub fn is_empty_marker(&self) -> bool {
        self.count == 0
    }
}

/// Records that can stand in for a missing response
pub trait Placeholder {
    fn placeholder(text: &str) -> Self;
}

impl Placeholder for Person {
    fn placeholder(text: &str) -> Self {
        Person {
            name: text.to_string(),
            ..Default::default()
        }
    }
}

impl Placeholder for Species {
    fn placeholder(text: &str) -> Self {
        Species {
            name: text.to_string(),
            ..Default::default()
        }
    }
}

impl Placeholder for Movie {
    fn placeholder(text: &str) -> Self {
        Movie {
            title: text.to_string(),
            ..Default::default()
        }
    }
}
