use crate::client::Resource;
use crate::{CatalogCache, CatalogClient, Config, Error, Result};
use holocron_types::CatalogSnapshot;

/// Where a command gets its catalog from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    /// Use the cache, fetching and caching only when it is missing
    CacheFirst,
    /// Always fetch and overwrite the cache
    Refresh,
    /// Never touch the network
    Offline,
}

/// Where the returned snapshot came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Read from the cache without fetching
    Cache,
    /// Fetched completely and written to the cache
    Fetched,
    /// Fetch fell back on some endpoints; the previous cache was kept
    Stale { failed: Vec<Resource> },
    /// Fetch fell back and there was no cache to keep; nothing was written
    Partial { failed: Vec<Resource> },
}

#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub snapshot: CatalogSnapshot,
    pub source: CatalogSource,
}

/// Produce a catalog snapshot according to `mode`.
///
/// Fetching itself never fails: unreachable endpoints yield empty
/// collections. Such a fetch is never written over the cache. Errors come
/// from the cache file or from building the client.
pub async fn load_catalog(
    config: &Config,
    cache: &CatalogCache,
    mode: LoadMode,
) -> Result<LoadedCatalog> {
    let cached = cache.load()?;

    if mode != LoadMode::Refresh
        && let Some(snapshot) = cached
    {
        return Ok(LoadedCatalog {
            snapshot,
            source: CatalogSource::Cache,
        });
    }

    if mode == LoadMode::Offline {
        return Err(Error::CacheMissing(cache.path().to_path_buf()));
    }

    tracing::info!(base_url = %config.base_url, "fetching catalog");
    let client = CatalogClient::new(config)?;
    let fetch = client.fetch_catalog().await;

    if fetch.is_complete() {
        cache.save(&fetch.snapshot)?;
        return Ok(LoadedCatalog {
            snapshot: fetch.snapshot,
            source: CatalogSource::Fetched,
        });
    }

    let failed = fetch.failed;
    match cached {
        Some(snapshot) => {
            tracing::warn!(?failed, "fetch incomplete; keeping the cached catalog");
            Ok(LoadedCatalog {
                snapshot,
                source: CatalogSource::Stale { failed },
            })
        }
        None => {
            tracing::warn!(?failed, "fetch incomplete; catalog not cached");
            Ok(LoadedCatalog {
                snapshot: fetch.snapshot,
                source: CatalogSource::Partial { failed },
            })
        }
    }
}
