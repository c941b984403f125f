use crate::filter::FilterState;
use holocron_types::Person;

/// Whether `person` satisfies every active dimension of `filters`.
///
/// A person whose birth year cannot be parsed fails any active year bound.
pub fn matches(person: &Person, filters: &FilterState) -> bool {
    if let Some(species) = &filters.species
        && !person.has_species(species)
    {
        return false;
    }

    if let Some(movie) = &filters.movie
        && !person.appears_in(movie)
    {
        return false;
    }

    if filters.has_year_bound() {
        let Some(year) = person.birth_year_value() else {
            return false;
        };
        if let Some(from) = filters.born_from
            && year < from
        {
            return false;
        }
        if let Some(to) = filters.born_to
            && year > to
        {
            return false;
        }
    }

    true
}

/// Filter the full collection, keeping the relative order of survivors.
pub fn apply(people: &[Person], filters: &FilterState) -> Vec<Person> {
    people
        .iter()
        .filter(|person| matches(person, filters))
        .cloned()
        .collect()
}
