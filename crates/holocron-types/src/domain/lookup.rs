use super::locator::Locator;
use serde::{Deserialize, Serialize};

/// Lookup collections referenced by person records and used to resolve
/// filter values.
pub trait Lookup {
    fn locator(&self) -> &Locator;
    fn display_name(&self) -> &str;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Species {
    pub name: String,
    pub classification: String,
    pub designation: String,
    pub language: String,
    pub url: Locator,
}

impl Lookup for Species {
    fn locator(&self) -> &Locator {
        &self.url
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

/// A film record. The catalog calls these `films`; the title is the display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Movie {
    pub title: String,
    pub episode_id: u32,
    pub director: String,
    pub release_date: String,
    pub url: Locator,
}

impl Lookup for Movie {
    fn locator(&self) -> &Locator {
        &self.url
    }

    fn display_name(&self) -> &str {
        &self.title
    }
}
