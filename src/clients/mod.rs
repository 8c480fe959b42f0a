//! Remote lookup clients for citation data.
//!
//! The graph builder talks to the outside world through the
//! [`CitationLookup`] trait so tests can inject a mock instead of
//! hitting Crossref or OpenCitations.

use async_trait::async_trait;

mod remote;

pub use remote::RemoteCitationClient;

/// Minimal metadata for one work, as returned by the forward lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkMetadata {
    /// First listed title, falling back to the DOI itself
    pub title: String,

    /// Publication year from the first issued date-parts tuple, if any
    pub year: Option<i32>,

    /// DOIs of the works this one references
    pub references: Vec<String>,
}

/// Lookup interface over the external citation services.
///
/// Both operations are best-effort: any transport error, non-success
/// status, or malformed payload is reported as "no data" rather than an
/// error, and the caller proceeds with whatever it got.
#[async_trait]
pub trait CitationLookup: Send + Sync {
    /// Forward lookup: title, year and referenced DOIs for one DOI.
    async fn work_metadata(&self, doi: &str) -> Option<WorkMetadata>;

    /// Backward lookup: DOIs of works citing the given DOI.
    async fn citing_dois(&self, doi: &str) -> Vec<String>;
}
