use std::path::PathBuf;

use clap::Args;
use mockbase::constants::DEFAULT_DATA_FILE;
use tracing::{error, info};

use super::{open_records, print_json};

/// Arguments for insert command.
#[derive(Args, Clone, Default)]
pub struct InsertArgs {
    /// Backing file
    #[arg(short, long, default_value = DEFAULT_DATA_FILE)]
    pub file:       PathBuf,
    /// Collection name; created if absent
    #[arg(short, long)]
    pub collection: String,
    /// Record as a JSON object
    #[arg(short, long, value_name = "JSON")]
    pub data:       String,
}

/// Insert a record into a collection.
///
/// The record receives the next free id, replacing any `id` in the data, and is
/// printed as stored.
///
/// # Arguments
/// * `args` - The parsed command-line arguments for insert.
///
/// # Returns
/// Returns `Ok(())` on success, or a `MockbaseError` on failure.
pub async fn run(args: InsertArgs) -> mockbase::Result<()> {
    let collection = &args.collection;
    info!(
        "Inserting record into collection '{}' in {}",
        collection,
        args.file.display()
    );

    let record = open_records(&args.file)
        .insert(collection, args.data.as_bytes())
        .await
        .map_err(|e| {
            error!("Failed to insert into collection '{}': {}", collection, e);
            e
        })?;
    info!("Record {} inserted successfully", record.id()?);

    print_json(&record.into_value())
}

#[cfg(test)]
mod tests {
    use mockbase::MockbaseError;
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    /// Test inserting into a new collection.
    #[tokio::test]
    async fn test_insert_success() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("data.json");
        tokio::fs::write(&file, r#"{"notes":[{"id":4,"title":"a"}]}"#)
            .await
            .unwrap();

        let args = InsertArgs {
            file:       file.clone(),
            collection: "notes".to_owned(),
            data:       r#"{"id":1,"title":"b"}"#.to_owned(),
        };
        run(args).await.unwrap();

        let record = open_records(&file).find("notes", "5").await.unwrap();
        assert_eq!(record.into_value(), json!({"id": 5, "title": "b"}));
    }

    /// Test inserting data that is not a JSON object.
    #[tokio::test]
    async fn test_insert_invalid_data() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("data.json");
        tokio::fs::write(&file, "{}").await.unwrap();

        let args = InsertArgs {
            file:       file.clone(),
            collection: "notes".to_owned(),
            data:       "not json".to_owned(),
        };
        let result = run(args).await;
        assert!(matches!(result, Err(MockbaseError::InvalidBody { .. })));
        assert_eq!(tokio::fs::read_to_string(&file).await.unwrap(), "{}");
    }
}
