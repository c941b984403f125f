use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where catalog data lives, first match wins: `explicit`, then
/// [`Config::ENV_VAR`], then the platform data dir, then `$HOME/.holocron`.
/// Both user-supplied forms accept a leading `~/`.
pub fn resolve_data_dir(explicit: Option<&str>) -> Result<PathBuf> {
    explicit
        .map(str::to_owned)
        .or_else(|| std::env::var(Config::ENV_VAR).ok())
        .map(|raw| expand_tilde(&raw))
        .or_else(|| dirs::data_dir().map(|dir| dir.join(Config::APP_DIR)))
        .or_else(|| home_dir().map(|home| home.join(format!(".{}", Config::APP_DIR))))
        .ok_or_else(|| Error::Config("no data directory: set HOME or pass --data-dir".to_string()))
}

/// `~/rest` becomes `$HOME/rest`; anything else is taken literally
pub fn expand_tilde(raw: &str) -> PathBuf {
    match (raw.strip_prefix("~/"), home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(raw),
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the catalog API, without trailing slash
    pub base_url: String,
    /// Characters per page in the browse list
    pub page_size: usize,
    /// Per-request timeout
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    pub const FILE_NAME: &'static str = "config.toml";
    /// Environment override for the data directory
    pub const ENV_VAR: &'static str = "HOLOCRON_PATH";
    /// Directory name under the platform data dir
    pub const APP_DIR: &'static str = "holocron";

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config.normalized())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join(Self::FILE_NAME)
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self.normalized()
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self.normalized()
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        self.base_url = if trimmed.is_empty() {
            DEFAULT_BASE_URL.to_string()
        } else {
            trimmed.to_string()
        };
        self.page_size = self.page_size.max(1);
        self
    }
}
