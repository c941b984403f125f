use holocron_types::{BirthYear, Locator};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One independently settable filtering axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterDimension {
    Species,
    Movie,
    BornFrom,
    BornTo,
}

impl FilterDimension {
    pub const ALL: [FilterDimension; 4] = [
        FilterDimension::Species,
        FilterDimension::Movie,
        FilterDimension::BornFrom,
        FilterDimension::BornTo,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FilterDimension::Species => "species",
            FilterDimension::Movie => "movie",
            FilterDimension::BornFrom => "born_from",
            FilterDimension::BornTo => "born_to",
        }
    }
}

impl fmt::Display for FilterDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FilterDimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "species" => Ok(FilterDimension::Species),
            "movie" | "movies" | "film" => Ok(FilterDimension::Movie),
            "born_from" | "from" => Ok(FilterDimension::BornFrom),
            "born_to" | "to" => Ok(FilterDimension::BornTo),
            other => Err(format!("unknown filter dimension: {}", other)),
        }
    }
}

/// A single filter-change event. `None` clears the dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChange {
    Species(Option<Locator>),
    Movie(Option<Locator>),
    BornFrom(Option<i32>),
    BornTo(Option<i32>),
}

impl FilterChange {
    pub fn dimension(&self) -> FilterDimension {
        match self {
            FilterChange::Species(_) => FilterDimension::Species,
            FilterChange::Movie(_) => FilterDimension::Movie,
            FilterChange::BornFrom(_) => FilterDimension::BornFrom,
            FilterChange::BornTo(_) => FilterDimension::BornTo,
        }
    }

    /// Change that unsets `dimension`
    pub fn clear(dimension: FilterDimension) -> Self {
        match dimension {
            FilterDimension::Species => FilterChange::Species(None),
            FilterDimension::Movie => FilterChange::Movie(None),
            FilterDimension::BornFrom => FilterChange::BornFrom(None),
            FilterDimension::BornTo => FilterChange::BornTo(None),
        }
    }
}

/// Current value of every filter dimension.
///
/// Unset is always `None`. Empty locators are normalized to `None` on the
/// way in, so "no constraint" has exactly one representation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<Locator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie: Option<Locator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub born_from: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub born_to: Option<i32>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set exactly one dimension, leaving the others untouched
    pub fn set(&mut self, change: FilterChange) {
        match change {
            FilterChange::Species(value) => self.species = normalize(value),
            FilterChange::Movie(value) => self.movie = normalize(value),
            FilterChange::BornFrom(value) => self.born_from = value,
            FilterChange::BornTo(value) => self.born_to = value,
        }
    }

    pub fn reset_all(&mut self) {
        *self = Self::default();
    }

    pub fn is_active(&self, dimension: FilterDimension) -> bool {
        match dimension {
            FilterDimension::Species => self.species.is_some(),
            FilterDimension::Movie => self.movie.is_some(),
            FilterDimension::BornFrom => self.born_from.is_some(),
            FilterDimension::BornTo => self.born_to.is_some(),
        }
    }

    pub fn has_year_bound(&self) -> bool {
        self.born_from.is_some() || self.born_to.is_some()
    }

    pub fn active_count(&self) -> usize {
        FilterDimension::ALL
            .iter()
            .filter(|d| self.is_active(**d))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Active dimensions with a display value, in canonical dimension order
    pub fn iter_active(&self) -> Vec<(FilterDimension, String)> {
        let mut active = Vec::new();
        if let Some(species) = &self.species {
            active.push((FilterDimension::Species, species.to_string()));
        }
        if let Some(movie) = &self.movie {
            active.push((FilterDimension::Movie, movie.to_string()));
        }
        if let Some(from) = self.born_from {
            active.push((FilterDimension::BornFrom, BirthYear::new(from).to_string()));
        }
        if let Some(to) = self.born_to {
            active.push((FilterDimension::BornTo, BirthYear::new(to).to_string()));
        }
        active
    }
}

fn normalize(value: Option<Locator>) -> Option<Locator> {
    value.filter(|locator| !locator.is_empty())
}
