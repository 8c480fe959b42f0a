//! Builds the citation network for a list of own DOIs.
//!
//! All run state (node map, link list, enrichment bookkeeping) is owned
//! by one builder instance, so consecutive builds never leak state into
//! each other.

use indexmap::IndexMap;
use std::collections::HashSet;
use tracing::info;

use super::{CitationNetwork, Link, Node, NodeType, Relation};
use crate::clients::{CitationLookup, WorkMetadata};

pub struct NetworkBuilder<'a> {
    lookup: &'a dyn CitationLookup,

    /// Whole-run cap on distinct citing DOIs enriched with metadata
    enrichment_cap: usize,

    /// Nodes keyed by DOI, in insertion order
    nodes: IndexMap<String, Node>,

    /// Append-only; repeated discoveries of the same relation each add an entry
    links: Vec<Link>,

    /// Citing DOIs whose enrichment lookup already returned data
    enriched: HashSet<String>,
}

impl<'a> NetworkBuilder<'a> {
    pub fn new(lookup: &'a dyn CitationLookup, enrichment_cap: usize) -> Self {
        Self {
            lookup,
            enrichment_cap,
            nodes: IndexMap::new(),
            links: Vec::new(),
            enriched: HashSet::new(),
        }
    }

    /// Run the full build over the own DOIs, in order.
    ///
    /// Lookup failures never abort the build; they only leave the graph
    /// thinner for that DOI.
    pub async fn build(mut self, own_dois: &[String]) -> CitationNetwork {
        for doi in own_dois {
            self.insert_if_absent(doi, NodeType::Own);
        }

        let total = own_dois.len();
        for (idx, doi) in own_dois.iter().enumerate() {
            info!("[{}/{}] Processing DOI: {}", idx + 1, total, doi);
            self.process_own_doi(doi).await;
        }

        info!("Total nodes: {}", self.nodes.len());
        info!("Total links: {}", self.links.len());

        CitationNetwork {
            nodes: self.nodes.into_values().collect(),
            links: self.links,
        }
    }

    async fn process_own_doi(&mut self, doi: &str) {
        if let Some(meta) = self.lookup.work_metadata(doi).await {
            let references = meta.references.clone();
            self.apply_metadata(doi, meta);

            // References: own -> reference
            for ref_doi in &references {
                self.insert_if_absent(ref_doi, NodeType::Reference);
                self.links.push(Link {
                    source: doi.to_string(),
                    target: ref_doi.clone(),
                    relation: Relation::Reference,
                });
            }
        }

        // Cited-by: citing -> own
        let citing_dois = self.lookup.citing_dois(doi).await;
        for citing in &citing_dois {
            self.insert_if_absent(citing, NodeType::CitedBy);
            self.links.push(Link {
                source: citing.clone(),
                target: doi.to_string(),
                relation: Relation::CitedBy,
            });

            self.maybe_enrich(citing).await;
        }
    }

    /// Enrich a citing node with title/year, bounded by the whole-run cap.
    ///
    /// A DOI counts toward the cap only once its lookup returned data, so
    /// a failed attempt can be retried when the DOI recurs.
    async fn maybe_enrich(&mut self, citing: &str) {
        if self.enriched.len() >= self.enrichment_cap || self.enriched.contains(citing) {
            return;
        }
        if let Some(meta) = self.lookup.work_metadata(citing).await {
            self.apply_metadata(citing, meta);
            self.enriched.insert(citing.to_string());
        }
    }

    /// First classification wins; an existing node's type is never changed.
    fn insert_if_absent(&mut self, doi: &str, node_type: NodeType) {
        if !self.nodes.contains_key(doi) {
            self.nodes.insert(
                doi.to_string(),
                Node {
                    id: doi.to_string(),
                    label: doi.to_string(),
                    node_type,
                    year: None,
                },
            );
        }
    }

    /// Overwrite label and (when present) year in place, keeping the type.
    fn apply_metadata(&mut self, doi: &str, meta: WorkMetadata) {
        if let Some(node) = self.nodes.get_mut(doi) {
            node.label = meta.title;
            if meta.year.is_some() {
                node.year = meta.year;
            }
        }
    }
}
