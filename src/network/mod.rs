//! Node/link model of the publication citation network.
//!
//! Field names and type tags match what the visualization front end
//! consumes (`nodes` / `links`, camelCase type strings).

use serde::{Deserialize, Serialize};

mod builder;

pub use builder::NetworkBuilder;

/// How a work entered the network.
///
/// The classification is fixed at first insertion: an own publication
/// stays `own` even when it later shows up as a reference or a citing
/// work of another own publication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeType {
    /// Listed in the publications input file
    Own,
    /// Referenced by an own publication
    Reference,
    /// Cites an own publication
    CitedBy,
}

/// Directed citation relation carried by a link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Relation {
    /// `source` references `target`
    Reference,
    /// `source` (the citing work) cites `target` (an own publication)
    CitedBy,
}

/// One scholarly work, keyed by DOI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,

    /// Title when metadata lookup succeeded, else the DOI itself
    pub label: String,

    #[serde(rename = "type")]
    pub node_type: NodeType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

/// One directed citation link between two DOIs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub source: String,
    pub target: String,
    pub relation: Relation,
}

/// The full network as serialized for the front end
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitationNetwork {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
}
