use crate::presentation::view_models::{GuidanceViewModel, InitViewModel, SyncViewModel};
use holocron_runtime::Config;
use holocron_types::CatalogSnapshot;
use std::path::Path;

pub fn present_init(config_path: &Path, config: &Config) -> InitViewModel {
    InitViewModel {
        config_path: config_path.display().to_string(),
        base_url: config.base_url.clone(),
        page_size: config.page_size,
        timeout_secs: config.timeout_secs,
    }
}

pub fn present_sync(cache_path: &Path, snapshot: &CatalogSnapshot) -> SyncViewModel {
    SyncViewModel {
        cache_path: cache_path.display().to_string(),
        people: snapshot.people.len(),
        species: snapshot.species.len(),
        movies: snapshot.movies.len(),
        fetched_at: snapshot.fetched_at.map(|at| at.to_rfc3339()),
    }
}

pub fn present_guidance(data_dir: &Path, config_exists: bool, cache_exists: bool) -> GuidanceViewModel {
    GuidanceViewModel {
        data_dir: data_dir.display().to_string(),
        config_exists,
        cache_exists,
    }
}
