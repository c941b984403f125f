use holocron_types::{CatalogSnapshot, Locator, Lookup, Movie, Person, Species};

/// Authoritative, fully loaded catalog.
///
/// Starts empty; populated once from a complete snapshot. Every read before
/// that returns an empty result rather than failing.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    snapshot: Option<CatalogSnapshot>,
}

impl EntityStore {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
        }
    }

    pub fn load(&mut self, snapshot: CatalogSnapshot) {
        self.snapshot = Some(snapshot);
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn snapshot(&self) -> Option<&CatalogSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn people(&self) -> &[Person] {
        self.snapshot.as_ref().map(|s| s.people.as_slice()).unwrap_or(&[])
    }

    pub fn species(&self) -> &[Species] {
        self.snapshot.as_ref().map(|s| s.species.as_slice()).unwrap_or(&[])
    }

    pub fn movies(&self) -> &[Movie] {
        self.snapshot.as_ref().map(|s| s.movies.as_slice()).unwrap_or(&[])
    }

    pub fn person_by_id(&self, id: &str) -> Option<&Person> {
        let id = id.trim();
        self.people().iter().find(|p| !id.is_empty() && p.id() == id)
    }

    pub fn species_by_locator(&self, locator: &Locator) -> Option<&Species> {
        self.species().iter().find(|s| &s.url == locator)
    }

    pub fn movie_by_locator(&self, locator: &Locator) -> Option<&Movie> {
        self.movies().iter().find(|m| &m.url == locator)
    }

    /// Case-insensitive substring search over species names.
    /// An empty query returns every species.
    pub fn search_species(&self, query: &str) -> Vec<&Species> {
        let needle = query.trim().to_lowercase();
        self.species()
            .iter()
            .filter(|s| needle.is_empty() || s.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Resolve a species from a full locator, a bare id, or its exact name
    pub fn resolve_species(&self, query: &str) -> Option<&Species> {
        resolve(self.species(), query)
    }

    /// Resolve a movie from a full locator, a bare id, or its exact title
    pub fn resolve_movie(&self, query: &str) -> Option<&Movie> {
        resolve(self.movies(), query)
    }
}

fn resolve<'a, T: Lookup>(items: &'a [T], query: &str) -> Option<&'a T> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    let lowered = query.to_lowercase();

    items
        .iter()
        .find(|item| item.locator().as_str() == query)
        .or_else(|| items.iter().find(|item| item.locator().id() == query))
        .or_else(|| {
            items
                .iter()
                .find(|item| item.display_name().to_lowercase() == lowered)
        })
}
