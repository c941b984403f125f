use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PersonRow {
    /// 1-based position in the filtered list
    pub ordinal: usize,
    pub id: String,
    pub name: String,
    pub birth_year: String,
    pub species: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActiveFilter {
    pub dimension: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PeopleListViewModel {
    pub people: Vec<PersonRow>,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    /// Size of the filtered list, not of the page
    pub count: usize,
    pub filters: Vec<ActiveFilter>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PersonDetailViewModel {
    pub id: String,
    pub name: String,
    pub birth_year: String,
    pub gender: String,
    pub height: String,
    pub mass: String,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub species: Vec<String>,
    pub films: Vec<String>,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectionViewModel {
    pub ordinal: usize,
    pub id: String,
    pub name: String,
    pub route: String,
}
