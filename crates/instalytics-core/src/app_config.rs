use std::path::PathBuf;

/// Application configuration for the analytics pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding scraped content metadata (`*.json` files).
    pub metadata_dir: PathBuf,
}
