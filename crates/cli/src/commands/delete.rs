use std::path::PathBuf;

use clap::Args;
use mockbase::constants::DEFAULT_DATA_FILE;
use tracing::{error, info};

use super::{open_records, print_json};

/// Arguments for delete command.
#[derive(Args, Clone, Default)]
pub struct DeleteArgs {
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

/// Delete a record from a collection and print the removed record.
///
/// # Arguments
/// * `args` - The parsed command-line arguments for delete.
///
/// # Returns
/// Returns `Ok(())` on success, or a `MockbaseError` on failure.
pub async fn run(args: DeleteArgs) -> mockbase::Result<()> {
    let collection = &args.collection;
    let id = &args.id;
    info!(
        "Deleting record '{}' from collection '{}' in {}",
        id,
        collection,
        args.file.display()
    );

    let removed = open_records(&args.file)
        .delete(collection, id)
        .await
        .map_err(|e| {
            error!(
                "Failed to delete record '{}' from collection '{}': {}",
                id, collection, e
            );
            e
        })?;
    info!("Record '{}' deleted successfully", id);

    print_json(&removed.into_value())
}
