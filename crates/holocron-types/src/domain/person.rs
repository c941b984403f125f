use super::birth_year::convert_birth_year;
use super::locator::Locator;
use serde::{Deserialize, Serialize};

/// A character record as served by the catalog's `people` endpoint.
///
/// Every field falls back to its default so that partial records, such as
/// the transport placeholder, still deserialize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    pub name: String,
    pub height: String,
    pub mass: String,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    /// Catalog notation, e.g. `19BBY`, `8ABY` or `unknown`
    pub birth_year: String,
    pub gender: String,
    pub homeworld: Locator,
    pub films: Vec<Locator>,
    pub species: Vec<Locator>,
    pub vehicles: Vec<Locator>,
    pub starships: Vec<Locator>,
    pub url: Locator,
}

impl Person {
    pub fn id(&self) -> &str {
        self.url.id()
    }

    /// Signed birth year, or `None` when the catalog value does not parse
    pub fn birth_year_value(&self) -> Option<i32> {
        convert_birth_year(&self.birth_year)
    }

    pub fn has_species(&self, species: &Locator) -> bool {
        self.species.contains(species)
    }

    pub fn appears_in(&self, film: &Locator) -> bool {
        self.films.contains(film)
    }
}
