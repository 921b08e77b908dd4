//! Graphlink binary.
//!
//! Checks a Graph API credential: prints the user it belongs to and, when a
//! catalog id is given as the first argument, whether that catalog is
//! reachable.

use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use graphlink_application::GraphApiClient;
use graphlink_domain::ApiCredential;
use graphlink_infrastructure::{ReqwestTransport, load_config};

const DEFAULT_CONFIG_PATH: &str = "graphlink.toml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_path = std::env::var_os("GRAPHLINK_CONFIG")
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let config = load_config(Some(&config_path))?;
    let settings = config.graph_settings();

    tracing::info!(
        version = %settings.api_version,
        base_url = %settings.base_url,
        "Starting Graphlink v{}",
        env!("CARGO_PKG_VERSION")
    );

    let transport = Arc::new(ReqwestTransport::new(config.timeout())?);
    let credential = ApiCredential::new(config.access_token)?;
    let client = GraphApiClient::new(transport, credential, settings)?;

    let user = client.get_user().await?;
    tracing::info!(user_id = %user.id, "Credential is valid");

    if let Some(catalog_id) = std::env::args().nth(1) {
        if client.is_product_catalog_valid(&catalog_id).await? {
            let catalog = client.get_catalog(&catalog_id).await?;
            tracing::info!(catalog_id = %catalog.id, name = %catalog.name, "Catalog is reachable");
        } else {
            tracing::warn!(%catalog_id, "Catalog is not reachable with this credential");
        }
    }

    Ok(())
}
