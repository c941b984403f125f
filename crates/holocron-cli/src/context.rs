use crate::args::OutputFormat;
use crate::presentation::ConsoleRenderer;
use anyhow::{Context, Result};
use holocron_runtime::{CatalogCache, Config, LoadMode, LoadedCatalog, load_catalog};
use holocron_types::CatalogSnapshot;
use std::cell::OnceCell;
use std::path::{Path, PathBuf};

/// Everything a handler needs: where data lives, how to print, and lazy
/// access to the configuration
pub struct ExecutionContext {
    data_dir: PathBuf,
    format: OutputFormat,
    offline: bool,
    config: OnceCell<Config>,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf, format: OutputFormat, offline: bool) -> Self {
        Self {
            data_dir,
            format,
            offline,
            config: OnceCell::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        Config::path_in(&self.data_dir)
    }

    pub fn cache(&self) -> CatalogCache {
        CatalogCache::in_dir(&self.data_dir)
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn is_offline(&self) -> bool {
        self.offline
    }

    pub fn renderer(&self) -> ConsoleRenderer {
        ConsoleRenderer::new(self.format == OutputFormat::Json)
    }

    pub fn config(&self) -> Result<&Config> {
        if let Some(config) = self.config.get() {
            return Ok(config);
        }
        let loaded = Config::load_from(&self.config_path())
            .with_context(|| format!("Failed to read {}", self.config_path().display()))?;
        Ok(self.config.get_or_init(|| loaded))
    }

    /// Catalog from the cache, fetching it first unless running offline
    pub fn catalog(&self) -> Result<CatalogSnapshot> {
        let mode = if self.offline {
            LoadMode::Offline
        } else {
            LoadMode::CacheFirst
        };
        Ok(self.load(mode)?.snapshot)
    }

    /// Fetch the catalog regardless of the cache; only a complete fetch
    /// replaces it
    pub fn refresh_catalog(&self) -> Result<LoadedCatalog> {
        if self.offline {
            anyhow::bail!("Cannot refresh the catalog with --offline");
        }
        self.load(LoadMode::Refresh)
    }

    fn load(&self, mode: LoadMode) -> Result<LoadedCatalog> {
        let config = self.config()?;
        let cache = self.cache();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to start async runtime")?;

        Ok(runtime.block_on(load_catalog(config, &cache, mode))?)
    }
}
