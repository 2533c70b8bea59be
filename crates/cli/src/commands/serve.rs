use std::{net::IpAddr, path::PathBuf, sync::Arc};

use clap::Args;
use mockbase::{Document, DocumentStore as _, FileStore, Records};
use tracing::{error, info};

use crate::config::{load_config_or_default, Config};

/// Arguments for serve command.
#[derive(Args, Clone, Default)]
pub struct ServeArgs {
    /// TOML configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Port to listen on (default: 8000)
    #[arg(short, long)]
    pub port:   Option<u16>,
    /// JSON file to serve (default: ./data.json)
    #[arg(short, long)]
    pub file:   Option<PathBuf>,
    /// Address to bind (default: 0.0.0.0)
    #[arg(long)]
    pub host:   Option<IpAddr>,
}

impl ServeArgs {
    /// Applies the command-line overrides on top of `config`.
    fn apply_to(&self, mut config: Config) -> Config {
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(file) = &self.file {
            config.storage.file.clone_from(file);
        }
        config
    }
}

/// Serve a backing file over HTTP until Ctrl-C.
///
/// The file is loaded once up front; a file that is missing or is not a JSON
/// object stops the command before anything is bound.
///
/// # Arguments
/// * `args` - The parsed command-line arguments for serve.
///
/// # Returns
/// Returns `Ok(())` after a graceful shutdown, or a `MockbaseError` on failure.
pub async fn run(args: ServeArgs) -> mockbase::Result<()> {
    let config = args.apply_to(load_config_or_default(args.config.as_deref()).await?);
    let file = &config.storage.file;

    let store = FileStore::new(file);
    let document = store.load().await.map_err(|e| {
        error!("Cannot serve {}: {}", file.display(), e);
        e
    })?;
    info!(
        "Serving {} with collections [{}]",
        file.display(),
        collection_list(&document)
    );

    mockbase_server::start_server(config.server.socket_addr(), Arc::new(Records::new(store))).await
}

/// Comma-separated names of the document's top-level members.
fn collection_list(document: &Document) -> String { document.collection_names().collect::<Vec<_>>().join(", ") }
