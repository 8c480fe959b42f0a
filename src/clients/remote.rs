//! HTTP client over the Crossref works API and the OpenCitations COCI index.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use super::{CitationLookup, WorkMetadata};
use crate::config::LookupConfig;
use crate::errors::Result;

/// Crossref response envelope. Every field is optional so a sparse or
/// partly malformed message still yields whatever it does carry.
#[derive(Debug, Default, Deserialize)]
struct CrossrefEnvelope {
    message: Option<CrossrefWork>,
}

#[derive(Debug, Default, Deserialize)]
struct CrossrefWork {
    #[serde(default)]
    title: Vec<String>,

    #[serde(default)]
    issued: Option<CrossrefIssued>,

    #[serde(default)]
    reference: Vec<CrossrefReference>,
}

#[derive(Debug, Default, Deserialize)]
struct CrossrefIssued {
    // Crossref emits nulls inside date-parts for partial dates
    #[serde(default, rename = "date-parts")]
    date_parts: Vec<Vec<Option<i32>>>,
}

#[derive(Debug, Default, Deserialize)]
struct CrossrefReference {
    #[serde(default, rename = "DOI")]
    doi: Option<String>,
}

/// One row of the COCI citations response
#[derive(Debug, Default, Deserialize)]
struct CociCitation {
    #[serde(default)]
    citing: Option<String>,
}

/// Extract title/year/references from a raw Crossref response body.
fn parse_crossref(body: Value, doi: &str) -> Option<WorkMetadata> {
    let envelope: CrossrefEnvelope = serde_json::from_value(body).ok()?;
    let message = envelope.message?;

    let title = message
        .title
        .into_iter()
        .next()
        .unwrap_or_else(|| doi.to_string());

    let year = message
        .issued
        .and_then(|issued| issued.date_parts.into_iter().next())
        .and_then(|parts| parts.into_iter().next())
        .flatten();

    let references = message
        .reference
        .into_iter()
        .filter_map(|r| r.doi)
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
        .collect();

    Some(WorkMetadata {
        title,
        year,
        references,
    })
}

/// Extract citing DOIs from a raw COCI response body. Anything that is
/// not a JSON array yields an empty list.
fn parse_citing(body: Value) -> Vec<String> {
    let rows: Vec<CociCitation> = match serde_json::from_value(body) {
        Ok(rows) => rows,
        Err(_) => return Vec::new(),
    };

    rows.into_iter()
        .filter_map(|row| row.citing)
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
        .collect()
}

/// Citation lookup over the real Crossref and OpenCitations endpoints.
pub struct RemoteCitationClient {
    client: reqwest::Client,
    crossref_base_url: String,
    opencitations_base_url: String,
    delay: Duration,
}

impl RemoteCitationClient {
    pub fn new(config: &LookupConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            crossref_base_url: config.crossref_base_url.clone(),
            opencitations_base_url: config.opencitations_base_url.clone(),
            delay: config.request_delay(),
        })
    }

    /// GET a JSON body, swallowing every failure mode into `None`.
    ///
    /// The politeness delay runs after every request, successful or not,
    /// to rate-limit against the remote services.
    async fn get_json(&self, url: &str) -> Option<Value> {
        let response = self.client.get(url).send().await;
        tokio::time::sleep(self.delay).await;

        let response = match response {
            Ok(response) => response,
            Err(e) => {
                debug!(url, error = %e, "request failed");
                return None;
            }
        };

        if !response.status().is_success() {
            debug!(url, status = %response.status(), "non-success status");
            return None;
        }

        response.json().await.ok()
    }
}

#[async_trait]
impl CitationLookup for RemoteCitationClient {
    async fn work_metadata(&self, doi: &str) -> Option<WorkMetadata> {
        let url = format!("{}/{}", self.crossref_base_url, urlencoding::encode(doi));
        let body = self.get_json(&url).await?;
        parse_crossref(body, doi)
    }

    async fn citing_dois(&self, doi: &str) -> Vec<String> {
        let url = format!(
            "{}/citations/{}",
            self.opencitations_base_url,
            urlencoding::encode(doi)
        );
        match self.get_json(&url).await {
            Some(body) => parse_citing(body),
            None => Vec::new(),
        }
    }
}
