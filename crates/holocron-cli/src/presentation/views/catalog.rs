use std::fmt;

use crate::presentation::formatters::truncate;
use crate::presentation::view_models::{MovieListViewModel, SpeciesListViewModel};

pub struct SpeciesListView<'a> {
    data: &'a SpeciesListViewModel,
}

impl<'a> SpeciesListView<'a> {
    pub fn new(data: &'a SpeciesListViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for SpeciesListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.species.is_empty() {
            match &self.data.search {
                Some(query) => writeln!(f, "No species matching '{}'.", query)?,
                None => writeln!(f, "No species in the catalog.")?,
            }
            return Ok(());
        }

        writeln!(f, "{:<6} {:<24} {:<16} LANGUAGE", "ID", "NAME", "CLASS")?;
        writeln!(f, "{}", "-".repeat(64))?;
        for species in &self.data.species {
            writeln!(
                f,
                "{:<6} {:<24} {:<16} {}",
                species.id,
                truncate(&species.name, 24),
                truncate(&species.classification, 16),
                species.language
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for SpeciesListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", SpeciesListView::new(self))
    }
}

pub struct MovieListView<'a> {
    data: &'a MovieListViewModel,
}

impl<'a> MovieListView<'a> {
    pub fn new(data: &'a MovieListViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for MovieListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.movies.is_empty() {
            return writeln!(f, "No movies in the catalog.");
        }

        for movie in &self.data.movies {
            writeln!(
                f,
                "Episode {:<3} {:<28} (id {}, {})",
                movie.episode, movie.title, movie.id, movie.release_date
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for MovieListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", MovieListView::new(self))
    }
}
