use super::lookup::{Movie, Species};
use super::person::Person;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Complete catalog load: every person plus the lookup collections.
///
/// Delivered to the engine in one piece; there is no incremental form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub people: Vec<Person>,
    #[serde(default)]
    pub species: Vec<Species>,
    #[serde(default)]
    pub movies: Vec<Movie>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetched_at: Option<DateTime<Utc>>,
}

impl CatalogSnapshot {
    pub fn new(people: Vec<Person>, species: Vec<Species>, movies: Vec<Movie>) -> Self {
        Self {
            people,
            species,
            movies,
            fetched_at: None,
        }
    }

    pub fn fetched_at(mut self, at: DateTime<Utc>) -> Self {
        self.fetched_at = Some(at);
        self
    }
}
