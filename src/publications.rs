//! Loads the lab's own DOIs from the publications JSON file.

use serde::{Deserialize, Deserializer};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::errors::{AppError, Result};

/// Top-level shape of the publications file
#[derive(Debug, Deserialize)]
pub struct PublicationsFile {
    #[serde(default)]
    pub publications: Vec<PublicationRecord>,
}

/// One publication entry; everything except the DOI is ignored here
#[derive(Debug, Deserialize)]
pub struct PublicationRecord {
    #[serde(default, deserialize_with = "doi_string")]
    pub doi: Option<String>,
}

/// A `doi` field holding anything but a string counts as absent, so one
/// malformed entry never aborts the run.
fn doi_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}

/// Load the distinct, lexicographically sorted own DOIs.
///
/// Entries without a DOI (or with a blank one) are skipped. A missing
/// input file is fatal and aborts the run before any network activity.
pub fn load_own_dois(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(AppError::PublicationsNotFound {
            path: path.display().to_string(),
        });
    }

    let raw = fs::read_to_string(path)?;
    let file: PublicationsFile = serde_json::from_str(&raw)?;

    let dois: BTreeSet<String> = file
        .publications
        .iter()
        .filter_map(|p| p.doi.as_deref())
        .map(str::trim)
        .filter(|doi| !doi.is_empty())
        .map(str::to_string)
        .collect();

    Ok(dois.into_iter().collect())
}
