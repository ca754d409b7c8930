//! Core data model and loading for the Instagram content analytics
//! pipeline: typed content records as emitted by the scraper actors,
//! a lenient directory loader, and environment-based configuration.

pub mod app_config;
pub mod config;
pub mod content;
pub mod loader;

pub use app_config::AppConfig;
pub use content::{Comment, ContentItem};
pub use loader::load_content_dir;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read metadata directory {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
