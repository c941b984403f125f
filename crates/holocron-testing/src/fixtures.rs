//! Fixtures for catalog records.
//!
//! Provides:
//! - `locator`: catalog-shaped locators for any resource kind
//! - `PersonBuilder`: fluent construction of person records
//! - `sample_snapshot`: a small, fixed catalog used across the test suites

use holocron_types::{CatalogSnapshot, Locator, Movie, Person, Species};

/// Base URL used by every fixture locator.
pub const BASE_URL: &str = "https://swapi.dev/api";

/// Build a locator such as `https://swapi.dev/api/people/4/`.
pub fn locator(kind: &str, id: u32) -> Locator {
    Locator::new(format!("{}/{}/{}/", BASE_URL, kind, id))
}

/// Fluent builder for person records.
///
/// # Example
/// ```
/// use holocron_testing::fixtures::PersonBuilder;
///
/// let luke = PersonBuilder::new(1, "Luke Skywalker").born("19BBY").species(1).build();
/// assert_eq!(luke.id(), "1");
/// ```
pub struct PersonBuilder {
    person: Person,
}

impl PersonBuilder {
    pub fn new(id: u32, name: &str) -> Self {
        Self {
            person: Person {
                name: name.to_string(),
                birth_year: "unknown".to_string(),
                url: locator("people", id),
                ..Default::default()
            },
        }
    }

    pub fn born(mut self, birth_year: &str) -> Self {
        self.person.birth_year = birth_year.to_string();
        self
    }

    pub fn species(mut self, species_id: u32) -> Self {
        self.person.species.push(locator("species", species_id));
        self
    }

    pub fn film(mut self, film_id: u32) -> Self {
        self.person.films.push(locator("films", film_id));
        self
    }

    pub fn films(mut self, film_ids: &[u32]) -> Self {
        for id in film_ids {
            self.person.films.push(locator("films", *id));
        }
        self
    }

    pub fn build(self) -> Person {
        self.person
    }
}

pub fn species(id: u32, name: &str) -> Species {
    Species {
        name: name.to_string(),
        url: locator("species", id),
        ..Default::default()
    }
}

pub fn movie(id: u32, episode_id: u32, title: &str) -> Movie {
    Movie {
        title: title.to_string(),
        episode_id,
        url: locator("films", id),
        ..Default::default()
    }
}

/// Twelve characters, four species, four films.
///
/// Humans (species 1): Luke, Vader, Leia, Obi-Wan, Han, Boba Fett.
/// Droids (species 2): C-3PO, R2-D2, R5-D4, BB8. R5-D4 and BB8 have an
/// unknown birth year. Film 4 features C-3PO, R2-D2, Obi-Wan and Yoda.
pub fn sample_snapshot() -> CatalogSnapshot {
    let people = vec![
        PersonBuilder::new(1, "Luke Skywalker").born("19BBY").species(1).films(&[1, 2, 3]).build(),
        PersonBuilder::new(2, "C-3PO").born("112BBY").species(2).films(&[1, 2, 3, 4]).build(),
        PersonBuilder::new(3, "R2-D2").born("33BBY").species(2).films(&[1, 2, 3, 4]).build(),
        PersonBuilder::new(4, "Darth Vader").born("41.9BBY").species(1).films(&[1, 2, 3]).build(),
        PersonBuilder::new(5, "Leia Organa").born("19BBY").species(1).films(&[1, 2, 3]).build(),
        PersonBuilder::new(8, "R5-D4").born("unknown").species(2).film(1).build(),
        PersonBuilder::new(10, "Obi-Wan Kenobi").born("57BBY").species(1).films(&[1, 2, 3, 4]).build(),
        PersonBuilder::new(13, "Chewbacca").born("200BBY").species(3).films(&[1, 2, 3]).build(),
        PersonBuilder::new(14, "Han Solo").born("29BBY").species(1).films(&[1, 2, 3]).build(),
        PersonBuilder::new(20, "Yoda").born("896BBY").species(6).films(&[2, 3, 4]).build(),
        PersonBuilder::new(22, "Boba Fett").born("31.5BBY").species(1).films(&[2, 3]).build(),
        PersonBuilder::new(87, "BB8").born("unknown").species(2).build(),
    ];

    let species = vec![
        species(1, "Human"),
        species(2, "Droid"),
        species(3, "Wookie"),
        species(6, "Yoda's species"),
    ];

    let movies = vec![
        movie(1, 4, "A New Hope"),
        movie(2, 5, "The Empire Strikes Back"),
        movie(3, 6, "Return of the Jedi"),
        movie(4, 1, "The Phantom Menace"),
    ];

    CatalogSnapshot::new(people, species, movies)
}
