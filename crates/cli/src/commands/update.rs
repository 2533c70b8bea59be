use std::path::PathBuf;

use clap::Args;
use mockbase::constants::DEFAULT_DATA_FILE;
use tracing::{error, info};

use super::{open_records, print_json};

/// Arguments for update command.
#[derive(Args, Clone, Default)]
pub struct UpdateArgs {
    /// Backing file
    #[arg(short, long, default_value = DEFAULT_DATA_FILE)]
    pub file:       PathBuf,
    /// Collection name
    #[arg(short, long)]
    pub collection: String,
    /// Record id
    #[arg(short, long)]
    pub id:         String,
    /// New record content as a JSON object
    #[arg(short, long, value_name = "JSON")]
    pub data:       String,
}

/// Replace a record with new content.
///
/// The entire record is replaced; it keeps its id and its position.
///
/// # Arguments
/// * `args` - The parsed command-line arguments for update.
///
/// # Returns
/// Returns `Ok(())` on success, or a `MockbaseError` on failure.
pub async fn run(args: UpdateArgs) -> mockbase::Result<()> {
    let collection = &args.collection;
    let id = &args.id;
    info!(
        "Updating record '{}' in collection '{}' in {}",
        id,
        collection,
        args.file.display()
    );

    let record = open_records(&args.file)
        .replace(collection, id, args.data.as_bytes())
        .await
        .map_err(|e| {
            error!(
                "Failed to update record '{}' in collection '{}': {}",
                id, collection, e
            );
            e
        })?;
    info!("Record '{}' updated successfully", id);

    print_json(&record.into_value())
}

#[cfg(test)]
mod tests {
    use mockbase::MockbaseError;
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    /// Test replacing an existing record.
    #[tokio::test]
    async fn test_update_success() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("data.json");
        tokio::fs::write(&file, r#"{"notes":[{"id":1,"title":"a","done":false}]}"#)
            .await
            .unwrap();

        let args = UpdateArgs {
            file:       file.clone(),
            collection: "notes".to_owned(),
            id:         "1".to_owned(),
            data:       r#"{"title":"b"}"#.to_owned(),
        };
        run(args).await.unwrap();

        let record = open_records(&file).find("notes", "1").await.unwrap();
        assert_eq!(record.into_value(), json!({"id": 1, "title": "b"}));
    }

    /// Test updating a record that does not exist.
    #[tokio::test]
    async fn test_update_nonexistent() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("data.json");
        tokio::fs::write(&file, r#"{"notes":[]}"#).await.unwrap();

        let args = UpdateArgs {
            file:       file.clone(),
            collection: "notes".to_owned(),
            id:         "1".to_owned(),
            data:       r#"{"title":"b"}"#.to_owned(),
        };
        let result = run(args).await;
        assert!(matches!(result, Err(MockbaseError::RecordNotFound { .. })));
        assert_eq!(
            tokio::fs::read_to_string(&file).await.unwrap(),
            r#"{"notes":[]}"#
        );
    }
}
