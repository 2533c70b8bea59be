use std::path::PathBuf;

use clap::Args;
use mockbase::constants::DEFAULT_DATA_FILE;
use serde_json::Value;
use tracing::{error, info};

use super::{open_records, print_json};

/// Arguments for list command.
#[derive(Args, Clone, Default)]
pub struct ListArgs {
    /// Backing file
    #[arg(short, long, default_value = DEFAULT_DATA_FILE)]
    pub file:       PathBuf,
    /// Collection name
    #[arg(short, long)]
    pub collection: String,
}

/// Print every record of a collection as a JSON array.
///
/// # Arguments
/// * `args` - The parsed command-line arguments for list.
///
/// # Returns
/// Returns `Ok(())` on success, or a `MockbaseError` on failure.
pub async fn run(args: ListArgs) -> mockbase::Result<()> {
    let collection = &args.collection;
    info!(
        "Listing collection '{}' in {}",
        collection,
        args.file.display()
    );

    let records = open_records(&args.file)
        .list(collection)
        .await
        .map_err(|e| {
            error!("Failed to list collection '{}': {}", collection, e);
            e
        })?;
    info!("Collection '{}' holds {} records", collection, records.len());

    print_json(&Value::Array(records.into_iter().map(Value::from).collect()))
}
