use crate::presentation::view_models::{
    MovieEntry, MovieListViewModel, SpeciesEntry, SpeciesListViewModel,
};
use holocron_types::{Movie, Species};

pub fn present_species_list(search: Option<String>, species: &[&Species]) -> SpeciesListViewModel {
    SpeciesListViewModel {
        search,
        species: species
            .iter()
            .map(|s| SpeciesEntry {
                id: s.url.id().to_string(),
                name: s.name.clone(),
                classification: s.classification.clone(),
                language: s.language.clone(),
            })
            .collect(),
    }
}

/// Movies in episode order
pub fn present_movie_list(movies: &[Movie]) -> MovieListViewModel {
    let mut entries: Vec<MovieEntry> = movies
        .iter()
        .map(|m| MovieEntry {
            id: m.url.id().to_string(),
            episode: m.episode_id,
            title: m.title.clone(),
            director: m.director.clone(),
            release_date: m.release_date.clone(),
        })
        .collect();
    entries.sort_by_key(|m| m.episode);

    MovieListViewModel { movies: entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holocron_testing::fixtures::sample_snapshot;

    #[test]
    fn test_movies_sorted_by_episode() {
        let vm = present_movie_list(&sample_snapshot().movies);

        let titles: Vec<&str> = vm.movies.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "The Phantom Menace",
                "A New Hope",
                "The Empire Strikes Back",
                "Return of the Jedi"
            ]
        );
        assert_eq!(vm.movies[0].id, "4");
    }
}
