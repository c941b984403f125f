use crate::{Config, Result};
use holocron_types::{CatalogSnapshot, Movie, PageResponse, Person, Placeholder, Species};
use serde::de::DeserializeOwned;
use std::time::Duration;

// Upper bound on pages walked per endpoint; the catalog has fewer than ten
const MAX_PAGES: usize = 200;

/// Catalog list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    People,
    Species,
    Films,
}

impl Resource {
    pub fn path(self) -> &'static str {
        match self {
            Resource::People => "people",
            Resource::Species => "species",
            Resource::Films => "films",
        }
    }
}

/// HTTP boundary to the catalog API.
///
/// Never surfaces transport failures: any request, status or decoding error
/// is logged and replaced by [`PageResponse::fallback`].
#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn resource_url(&self, resource: Resource) -> String {
        format!("{}/{}/", self.base_url, resource.path())
    }

    /// Fetch one page, substituting the fallback page on any failure
    pub async fn fetch_page<T>(&self, url: &str) -> PageResponse<T>
    where
        T: DeserializeOwned + Placeholder,
    {
        match self.try_fetch_page(url).await {
            Ok(page) => page,
            Err(message) => {
                tracing::error!(url, "{}; substituting empty page", message);
                PageResponse::fallback()
            }
        }
    }

    async fn try_fetch_page<T>(&self, url: &str) -> std::result::Result<PageResponse<T>, String>
    where
        T: DeserializeOwned,
    {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| format!("request failed: {}", e))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(format!("backend returned {}, body was: {}", status, body));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| format!("reading body failed: {}", e))?;
        serde_json::from_str(&body).map_err(|e| format!("undecodable body: {}", e))
    }

    /// Walk every page of `resource` via `next` links.
    ///
    /// A page with a zero count carries no records and ends the walk, so the
    /// fallback placeholder never reaches the caller.
    pub async fn fetch_all<T>(&self, resource: Resource) -> Vec<T>
    where
        T: DeserializeOwned + Placeholder,
    {
        self.walk(resource).await.0
    }

    // Second value is false when any page had to be substituted
    async fn walk<T>(&self, resource: Resource) -> (Vec<T>, bool)
    where
        T: DeserializeOwned + Placeholder,
    {
        let mut items = Vec::new();
        let mut url = self.resource_url(resource);
        let mut complete = true;

        for _ in 0..MAX_PAGES {
            let page: PageResponse<T> = match self.try_fetch_page(&url).await {
                Ok(page) => page,
                Err(message) => {
                    tracing::error!(url, "{}; substituting empty page", message);
                    complete = false;
                    PageResponse::fallback()
                }
            };
            if page.is_empty_marker() {
                break;
            }
            items.extend(page.results);

            match page.next {
                Some(next) if next != url => url = next,
                _ => break,
            }
        }

        tracing::debug!(resource = resource.path(), count = items.len(), complete, "endpoint walked");
        (items, complete)
    }

    /// Fetch people, species and films concurrently into one snapshot
    pub async fn fetch_catalog(&self) -> CatalogFetch {
        let (people, species, movies) = tokio::join!(
            self.walk::<Person>(Resource::People),
            self.walk::<Species>(Resource::Species),
            self.walk::<Movie>(Resource::Films),
        );

        let failed = [
            (Resource::People, people.1),
            (Resource::Species, species.1),
            (Resource::Films, movies.1),
        ]
        .into_iter()
        .filter(|(_, complete)| !complete)
        .map(|(resource, _)| resource)
        .collect();

        tracing::info!(
            people = people.0.len(),
            species = species.0.len(),
            movies = movies.0.len(),
            "catalog fetched"
        );
        CatalogFetch {
            snapshot: CatalogSnapshot::new(people.0, species.0, movies.0)
                .fetched_at(chrono::Utc::now()),
            failed,
        }
    }
}

/// Result of one catalog fetch, with the endpoints that fell back
#[derive(Debug, Clone)]
pub struct CatalogFetch {
    pub snapshot: CatalogSnapshot,
    pub failed: Vec<Resource>,
}

impl CatalogFetch {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}
