use crate::presentation::view_models::{
    ActiveFilter, Guidance, PeopleListViewModel, PersonDetailViewModel, PersonRow,
    SelectionViewModel,
};
use holocron_engine::{
    EntityStore, FilterDimension, FilterState, FilteredView, NavigationTarget, PageWindow,
    resolve_ordinal,
};
use holocron_types::{BirthYear, Locator, Person};

pub fn present_people_page(
    store: &EntityStore,
    filters: &FilterState,
    window: &PageWindow,
    view: &FilteredView,
) -> PeopleListViewModel {
    let people = window
        .slice(view.people())
        .iter()
        .enumerate()
        .map(|(index, person)| PersonRow {
            ordinal: resolve_ordinal(window.page(), window.page_size(), index),
            id: person.id().to_string(),
            name: person.name.clone(),
            birth_year: person.birth_year.clone(),
            species: species_names(store, &person.species),
        })
        .collect();

    PeopleListViewModel {
        people,
        page: window.page(),
        page_size: window.page_size(),
        total_pages: view.total_pages(),
        count: view.count(),
        filters: present_filters(store, filters),
    }
}

fn present_filters(store: &EntityStore, filters: &FilterState) -> Vec<ActiveFilter> {
    let mut active = Vec::new();
    if let Some(species) = &filters.species {
        let name = store
            .species_by_locator(species)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| species.to_string());
        active.push(filter(FilterDimension::Species, name));
    }
    if let Some(movie) = &filters.movie {
        let title = store
            .movie_by_locator(movie)
            .map(|m| m.title.clone())
            .unwrap_or_else(|| movie.to_string());
        active.push(filter(FilterDimension::Movie, title));
    }
    if let Some(from) = filters.born_from {
        active.push(filter(FilterDimension::BornFrom, BirthYear::new(from).to_string()));
    }
    if let Some(to) = filters.born_to {
        active.push(filter(FilterDimension::BornTo, BirthYear::new(to).to_string()));
    }
    active
}

fn filter(dimension: FilterDimension, value: String) -> ActiveFilter {
    ActiveFilter {
        dimension: dimension.as_str().to_string(),
        value,
    }
}

fn species_names(store: &EntityStore, locators: &[Locator]) -> Vec<String> {
    locators
        .iter()
        .map(|locator| {
            store
                .species_by_locator(locator)
                .map(|s| s.name.clone())
                .unwrap_or_else(|| locator.id().to_string())
        })
        .collect()
}

/// Paging tips for the one-shot `people list` command
pub fn people_page_guidance(vm: &PeopleListViewModel) -> Vec<Guidance> {
    let mut tips = Vec::new();

    if vm.page < vm.total_pages {
        tips.push(
            Guidance::new("Next page")
                .with_command(format!("holocron people list --page {}", vm.page + 1)),
        );
    }

    if vm.count == 0 && !vm.filters.is_empty() {
        tips.push(Guidance::new("No one matches every filter; try dropping one"));
    } else if vm.people.is_empty() && vm.count > 0 {
        tips.push(
            Guidance::new("Page is past the end of the list")
                .with_command("holocron people list --page 1"),
        );
    }

    tips
}

pub fn present_person_detail(store: &EntityStore, person: &Person) -> PersonDetailViewModel {
    let films = person
        .films
        .iter()
        .map(|locator| {
            store
                .movie_by_locator(locator)
                .map(|m| m.title.clone())
                .unwrap_or_else(|| locator.id().to_string())
        })
        .collect();

    PersonDetailViewModel {
        id: person.id().to_string(),
        name: person.name.clone(),
        birth_year: person.birth_year.clone(),
        gender: person.gender.clone(),
        height: person.height.clone(),
        mass: person.mass.clone(),
        hair_color: person.hair_color.clone(),
        skin_color: person.skin_color.clone(),
        eye_color: person.eye_color.clone(),
        species: species_names(store, &person.species),
        films,
        url: person.url.to_string(),
    }
}

pub fn present_selection(target: &NavigationTarget, person: Option<&Person>) -> SelectionViewModel {
    SelectionViewModel {
        ordinal: target.ordinal,
        id: target.id.clone(),
        name: person.map(|p| p.name.clone()).unwrap_or_default(),
        route: target.route(),
    }
}
