use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SpeciesEntry {
    pub id: String,
    pub name: String,
    pub classification: String,
    pub language: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SpeciesListViewModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub species: Vec<SpeciesEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MovieEntry {
    pub id: String,
    pub episode: u32,
    pub title: String,
    pub director: String,
    pub release_date: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MovieListViewModel {
    pub movies: Vec<MovieEntry>,
}
