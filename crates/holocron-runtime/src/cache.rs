use crate::Result;
use holocron_types::CatalogSnapshot;
use std::path::{Path, PathBuf};

/// JSON file holding the last fetched catalog
#[derive(Debug, Clone)]
pub struct CatalogCache {
    path: PathBuf,
}

impl CatalogCache {
    pub const FILE_NAME: &'static str = "catalog.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(Self::FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the cached snapshot, `None` when nothing was cached yet
    pub fn load(&self) -> Result<Option<CatalogSnapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)?;
        let snapshot: CatalogSnapshot = serde_json::from_str(&content)?;
        tracing::debug!(path = %self.path.display(), people = snapshot.people.len(), "cache loaded");
        Ok(Some(snapshot))
    }

    pub fn save(&self, snapshot: &CatalogSnapshot) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(snapshot)?;
        std::fs::write(&self.path, content)?;
        tracing::debug!(path = %self.path.display(), "cache written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holocron_testing::fixtures::sample_snapshot;
    use tempfile::TempDir;

    #[test]
    fn test_missing_cache_loads_none() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let cache = CatalogCache::in_dir(temp_dir.path());

        assert!(!cache.exists());
        assert!(cache.load()?.is_none());
        Ok(())
    }

    #[test]
    fn test_save_creates_parent_and_reloads() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let cache = CatalogCache::in_dir(&temp_dir.path().join("nested").join("dir"));
        let snapshot = sample_snapshot();

        cache.save(&snapshot)?;

        assert_eq!(cache.load()?, Some(snapshot));
        Ok(())
    }

    #[test]
    fn test_corrupt_cache_is_json_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let cache = CatalogCache::in_dir(temp_dir.path());
        std::fs::write(cache.path(), "{ not json")?;

        assert!(matches!(cache.load(), Err(crate::Error::Json(_))));
        Ok(())
    }
}
