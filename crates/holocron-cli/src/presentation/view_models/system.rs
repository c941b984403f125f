use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct InitViewModel {
    pub config_path: String,
    pub base_url: String,
    pub page_size: usize,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SyncViewModel {
    pub cache_path: String,
    pub people: usize,
    pub species: usize,
    pub movies: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetched_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GuidanceViewModel {
    pub data_dir: String,
    pub config_exists: bool,
    pub cache_exists: bool,
}
