use std::fmt;

use crate::presentation::formatters::{list_or_dash, truncate};
use crate::presentation::view_models::{
    PeopleListViewModel, PersonDetailViewModel, SelectionViewModel,
};

// --------------------------------------------------------
// People List View
// --------------------------------------------------------

pub struct PeopleListView<'a> {
    data: &'a PeopleListViewModel,
}

impl<'a> PeopleListView<'a> {
    pub fn new(data: &'a PeopleListViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for PeopleListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.data.filters.is_empty() {
            let summary: Vec<String> = self
                .data
                .filters
                .iter()
                .map(|filter| format!("{}={}", filter.dimension, filter.value))
                .collect();
            writeln!(f, "Filters: {}", summary.join("  "))?;
        }

        writeln!(
            f,
            "Page {}/{} ({} matching)",
            self.data.page,
            self.data.total_pages.max(1),
            self.data.count
        )?;

        if self.data.people.is_empty() {
            writeln!(f, "No characters on this page.")?;
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "{:>4}  {:<6} {:<24} {:<10} SPECIES", "#", "ID", "NAME", "BORN")?;
        writeln!(f, "{}", "-".repeat(64))?;
        for row in &self.data.people {
            writeln!(
                f,
                "{:>4}  {:<6} {:<24} {:<10} {}",
                row.ordinal,
                row.id,
                truncate(&row.name, 24),
                row.birth_year,
                list_or_dash(&row.species)
            )?;
        }

        Ok(())
    }
}

impl fmt::Display for PeopleListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", PeopleListView::new(self))
    }
}

// --------------------------------------------------------
// Person Detail View
// --------------------------------------------------------

pub struct PersonDetailView<'a> {
    data: &'a PersonDetailViewModel,
}

impl<'a> PersonDetailView<'a> {
    pub fn new(data: &'a PersonDetailViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for PersonDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = self.data;
        writeln!(f, "{} (#{})", d.name, d.id)?;
        writeln!(f, "  Born:     {}", d.birth_year)?;
        writeln!(f, "  Gender:   {}", d.gender)?;
        writeln!(f, "  Height:   {}", d.height)?;
        writeln!(f, "  Mass:     {}", d.mass)?;
        writeln!(f, "  Hair:     {}", d.hair_color)?;
        writeln!(f, "  Skin:     {}", d.skin_color)?;
        writeln!(f, "  Eyes:     {}", d.eye_color)?;
        writeln!(f, "  Species:  {}", list_or_dash(&d.species))?;
        writeln!(f, "  Films:    {}", list_or_dash(&d.films))?;
        Ok(())
    }
}

impl fmt::Display for PersonDetailViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", PersonDetailView::new(self))
    }
}

// --------------------------------------------------------
// Selection View
// --------------------------------------------------------

pub struct SelectionView<'a> {
    data: &'a SelectionViewModel,
}

impl<'a> SelectionView<'a> {
    pub fn new(data: &'a SelectionViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for SelectionView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Selected #{} {} (id {})",
            self.data.ordinal, self.data.name, self.data.id
        )?;
        writeln!(f, "Route: {}", self.data.route)
    }
}

impl fmt::Display for SelectionViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", SelectionView::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{ActiveFilter, PersonRow};

    #[test]
    fn test_people_list_layout() {
        let vm = PeopleListViewModel {
            people: vec![PersonRow {
                ordinal: 11,
                id: "22".to_string(),
                name: "Boba Fett".to_string(),
                birth_year: "31.5BBY".to_string(),
                species: vec!["Human".to_string()],
            }],
            page: 2,
            page_size: 10,
            total_pages: 2,
            count: 11,
            filters: vec![ActiveFilter {
                dimension: "species".to_string(),
                value: "Human".to_string(),
            }],
        };

        insta::assert_snapshot!(vm.to_string(), @r"
        Filters: species=Human
        Page 2/2 (11 matching)

           #  ID     NAME                     BORN       SPECIES
        ----------------------------------------------------------------
          11  22     Boba Fett                31.5BBY    Human
        ");
    }

    #[test]
    fn test_empty_page_message() {
        let vm = PeopleListViewModel {
            people: vec![],
            page: 1,
            page_size: 10,
            total_pages: 0,
            count: 0,
            filters: vec![],
        };

        assert_eq!(vm.to_string(), "Page 1/1 (0 matching)\nNo characters on this page.\n");
    }
}
