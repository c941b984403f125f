use std::fmt;

use crate::presentation::view_models::{GuidanceViewModel, InitViewModel, SyncViewModel};

pub struct InitView<'a> {
    data: &'a InitViewModel,
}

impl<'a> InitView<'a> {
    pub fn new(data: &'a InitViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for InitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Config:    {}", self.data.config_path)?;
        writeln!(f, "Base URL:  {}", self.data.base_url)?;
        writeln!(f, "Page size: {}", self.data.page_size)?;
        writeln!(f, "Timeout:   {}s", self.data.timeout_secs)
    }
}

impl fmt::Display for InitViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", InitView::new(self))
    }
}

pub struct SyncView<'a> {
    data: &'a SyncViewModel,
}

impl<'a> SyncView<'a> {
    pub fn new(data: &'a SyncViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for SyncView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Cache:   {}", self.data.cache_path)?;
        writeln!(f, "People:  {}", self.data.people)?;
        writeln!(f, "Species: {}", self.data.species)?;
        writeln!(f, "Movies:  {}", self.data.movies)?;
        if let Some(at) = &self.data.fetched_at {
            writeln!(f, "Fetched: {}", at)?;
        }
        Ok(())
    }
}

impl fmt::Display for SyncViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", SyncView::new(self))
    }
}

pub struct GuidanceView<'a> {
    data: &'a GuidanceViewModel,
}

impl<'a> GuidanceView<'a> {
    pub fn new(data: &'a GuidanceViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for GuidanceView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mark = |present: bool| if present { "present" } else { "missing" };
        writeln!(f, "Data directory: {}", self.data.data_dir)?;
        writeln!(f, "  config.toml   {}", mark(self.data.config_exists))?;
        writeln!(f, "  catalog.json  {}", mark(self.data.cache_exists))
    }
}

impl fmt::Display for GuidanceViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", GuidanceView::new(self))
    }
}
