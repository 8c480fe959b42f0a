//! Writes the finished network to disk for the visualization front end.

use std::fs;
use std::path::Path;

use crate::errors::Result;
use crate::network::CitationNetwork;

/// Serialize the network as indented JSON, creating parent directories
/// as needed. Any previous output is overwritten.
pub fn write_network(network: &CitationNetwork, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(network)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{Link, Node, NodeType, Relation};

    fn sample_network() -> CitationNetwork {
        CitationNetwork {
            nodes: vec![
                Node {
                    id: "10.1/a".to_string(),
                    label: "Paper A".to_string(),
                    node_type: NodeType::Own,
                    year: Some(2020),
                },
                Node {
                    id: "10.1/x".to_string(),
                    label: "10.1/x".to_string(),
                    node_type: NodeType::Reference,
                    year: None,
                },
            ],
            links: vec![Link {
                source: "10.1/a".to_string(),
                target: "10.1/x".to_string(),
                relation: Relation::Reference,
            }],
        }
    }

    #[test]
    fn test_round_trip_preserves_counts() {
        let dir = std::env::temp_dir().join(format!("citegraph-out-{}", std::process::id()));
        let path = dir.join("nested").join("network.json");

        let network = sample_network();
        write_network(&network, &path).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let parsed: CitationNetwork = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.nodes.len(), network.nodes.len());
        assert_eq!(parsed.links.len(), network.links.len());
        assert_eq!(parsed.nodes[0], network.nodes[0]);

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_overwrites_previous_output() {
        let dir = std::env::temp_dir().join(format!("citegraph-ow-{}", std::process::id()));
        let path = dir.join("network.json");

        write_network(&sample_network(), &path).unwrap();
        let empty = CitationNetwork {
            nodes: vec![],
            links: vec![],
        };
        write_network(&empty, &path).unwrap();

        let parsed: CitationNetwork =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(parsed.nodes.is_empty());
        assert!(parsed.links.is_empty());

        fs::remove_dir_all(dir).ok();
    }
}
