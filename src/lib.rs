//! Citegraph
//!
//! Builds a citation network for the lab's own publications:
//! - Reads DOIs from the publications JSON file
//! - Uses Crossref to get title/year and references cited by each article
//! - Uses the OpenCitations COCI index to get articles that cite each DOI
//! - Writes a `network.json` with nodes and links for the visualization

pub mod clients;
pub mod config;
pub mod errors;
pub mod network;
pub mod output;
pub mod publications;

// Re-export commonly used types
pub use config::AppConfig;
pub use errors::{AppError, Result};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
