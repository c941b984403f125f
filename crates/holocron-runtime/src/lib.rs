pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod loader;

pub use cache::CatalogCache;
pub use client::{CatalogClient, CatalogFetch, Resource};
pub use config::{Config, resolve_data_dir};
pub use error::{Error, Result};
pub use loader::{CatalogSource, LoadMode, LoadedCatalog, load_catalog};
