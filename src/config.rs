//! Configuration management for the citation network builder
//!
//! Supports loading configuration from:
//! - Environment variables (prefixed with APP__)
//! - Configuration files (config/default.toml)
//! - Default values

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Publications input file
    #[serde(default)]
    pub publications: PublicationsConfig,

    /// Network output file
    #[serde(default)]
    pub output: OutputConfig,

    /// Remote lookup configuration (Crossref + OpenCitations)
    #[serde(default)]
    pub lookup: LookupConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PublicationsConfig {
    /// Path to the publications JSON file listing own DOIs
    #[serde(default = "default_publications_path")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Path the node/link network JSON is written to
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LookupConfig {
    /// Crossref works API base URL
    #[serde(default = "default_crossref_base_url")]
    pub crossref_base_url: String,

    /// OpenCitations COCI API base URL
    #[serde(default = "default_opencitations_base_url")]
    pub opencitations_base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Fixed delay after every request in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Maximum distinct citing DOIs enriched with metadata per run
    #[serde(default = "default_enrichment_cap")]
    pub enrichment_cap: usize,
}

// Default value functions
fn default_publications_path() -> PathBuf {
    PathBuf::from("public/data/publications.json")
}
fn default_output_path() -> PathBuf {
    PathBuf::from("public/data/network.json")
}
fn default_crossref_base_url() -> String {
    "https://api.crossref.org/works".to_string()
}
fn default_opencitations_base_url() -> String {
    "https://opencitations.net/index/coci/api/v1".to_string()
}
fn default_timeout_secs() -> u64 {
    15
}
fn default_delay_ms() -> u64 {
    200
}
fn default_enrichment_cap() -> usize {
    60
}

impl AppConfig {
    /// Load configuration from environment and files
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            // Load base config file
            .add_source(File::with_name("config/default").required(false))
            // Load from environment variables with APP__ prefix
            // e.g., APP__LOOKUP__ENRICHMENT_CAP=100
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl LookupConfig {
    /// Get the per-request timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get the post-request delay as Duration
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            publications: PublicationsConfig::default(),
            output: OutputConfig::default(),
            lookup: LookupConfig::default(),
        }
    }
}

impl Default for PublicationsConfig {
    fn default() -> Self {
        Self {
            path: default_publications_path(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            crossref_base_url: default_crossref_base_url(),
            opencitations_base_url: default_opencitations_base_url(),
            timeout_secs: default_timeout_secs(),
            delay_ms: default_delay_ms(),
            enrichment_cap: default_enrichment_cap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.lookup.enrichment_cap, 60);
        assert_eq!(config.lookup.timeout_secs, 15);
        assert_eq!(config.lookup.delay_ms, 200);
        assert_eq!(
            config.lookup.crossref_base_url,
            "https://api.crossref.org/works"
        );
        assert_eq!(
            config.publications.path,
            PathBuf::from("public/data/publications.json")
        );
        assert_eq!(config.output.path, PathBuf::from("public/data/network.json"));
    }

    #[test]
    fn test_durations() {
        let config = AppConfig::default();
        assert_eq!(config.lookup.request_timeout(), Duration::from_secs(15));
        assert_eq!(config.lookup.request_delay(), Duration::from_millis(200));
    }
}
