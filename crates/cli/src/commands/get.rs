use std::path::PathBuf;

use clap::Args;
use mockbase::constants::DEFAULT_DATA_FILE;
use tracing::{error, info};

use super::{open_records, print_json};

/// Arguments for get command.
#[derive(Args, Clone, Default)]
pub struct GetArgs {
    /// Backing file
    #[arg(short, long, default_value = DEFAULT_DATA_FILE)]
    pub file:       PathBuf,
    /// Collection name
    #[arg(short, long)]
    pub collection: String,
    /// Record id
    #[arg(short, long)]
    pub id:         String,
}

/// Retrieve a record from a collection.
///
/// The record is printed to stdout as pretty JSON.
///
/// # Arguments
/// * `args` - The parsed command-line arguments for get.
///
/// # Returns
/// Returns `Ok(())` on success, or a `MockbaseError` on failure; a record that
/// does not exist is an error.
pub async fn run(args: GetArgs) -> mockbase::Result<()> {
    let collection = &args.collection;
    let id = &args.id;
    info!(
        "Getting record '{}' from collection '{}' in {}",
        id,
        collection,
        args.file.display()
    );

    match open_records(&args.file).find(collection, id).await {
        Ok(record) => {
            info!("Record '{}' retrieved successfully", id);
            print_json(&record.into_value())
        },
        Err(e) => {
            error!(
                "Failed to get record '{}' from collection '{}': {}",
                id, collection, e
            );
            Err(e)
        },
    }
}
