//! Citation network builder entry point
//!
//! 1. Loads own DOIs from the publications file (missing file is fatal)
//! 2. Builds the node/link network via Crossref + OpenCitations
//! 3. Writes network.json for the visualization front end

use anyhow::Result;
use citegraph::clients::RemoteCitationClient;
use citegraph::network::NetworkBuilder;
use citegraph::{output, publications, AppConfig, VERSION};
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    info!("Starting citegraph v{}", VERSION);

    // Load configuration
    let config = AppConfig::load().map_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
        e
    })?;

    let own_dois = publications::load_own_dois(&config.publications.path)?;
    info!("Loaded {} own DOIs from {}", own_dois.len(), config.publications.path.display());

    let client = RemoteCitationClient::new(&config.lookup)?;
    let network = NetworkBuilder::new(&client, config.lookup.enrichment_cap)
        .build(&own_dois)
        .await;

    output::write_network(&network, &config.output.path)?;
    info!("Wrote network to {}", config.output.path.display());

    Ok(())
}
