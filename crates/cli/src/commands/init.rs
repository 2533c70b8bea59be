use std::path::PathBuf;

use clap::Args;
use mockbase::{constants::DEFAULT_DATA_FILE, Document, FileStore};
use tracing::{error, info};

/// Arguments for init command.
#[derive(Args, Clone, Default)]
pub struct InitArgs {
    /// Path of the file to create
    #[arg(short, long, default_value = DEFAULT_DATA_FILE)]
    pub file:        PathBuf,
    /// Name of an empty collection to create (repeatable)
    #[arg(short, long = "collection", value_name = "NAME")]
    pub collections: Vec<String>,
}

/// Create a new backing file.
///
/// The file holds one empty collection per `--collection` flag, or `{}` when
/// none is given. An existing file is never overwritten.
///
/// # Arguments
/// * `args` - The parsed command-line arguments for init.
///
/// # Returns
/// Returns `Ok(())` on success, or a `MockbaseError` on failure.
pub async fn run(args: InitArgs) -> mockbase::Result<()> {
    let file = &args.file;
    info!("Initializing backing file {}", file.display());

    let document = Document::with_collections(args.collections.iter().cloned());
    match FileStore::create(file, &document).await {
        Ok(_) => {
            info!(
                "Backing file {} created with {} collections",
                file.display(),
                document.len()
            );
            Ok(())
        },
        Err(e) => {
            error!("Failed to initialize {}: {}", file.display(), e);
            Err(e)
        },
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    /// Test creating a file with named collections.
    #[tokio::test]
    async fn test_init_with_collections() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("data.json");

        let args = InitArgs {
            file:        file.clone(),
            collections: vec!["users".to_owned(), "posts".to_owned()],
        };
        run(args).await.unwrap();

        let content = tokio::fs::read_to_string(&file).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value, json!({"users": [], "posts": []}));
    }

    /// Test creating an empty document.
    #[tokio::test]
    async fn test_init_empty() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("data.json");

        let args = InitArgs {
            file:        file.clone(),
            collections: Vec::new(),
        };
        run(args).await.unwrap();

        assert_eq!(tokio::fs::read_to_string(&file).await.unwrap(), "{}");
    }

    /// Test that an existing file is left alone.
    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("data.json");
        tokio::fs::write(&file, r#"{"keep":[]}"#).await.unwrap();

        let args = InitArgs {
            file:        file.clone(),
            collections: vec!["users".to_owned()],
        };
        let result = run(args).await;
        assert!(result.is_err(), "Init should not overwrite an existing file");
        assert_eq!(
            tokio::fs::read_to_string(&file).await.unwrap(),
            r#"{"keep":[]}"#
        );
    }

    /// Test init in a directory that does not exist.
    #[tokio::test]
    async fn test_init_missing_parent() {
        let temp_dir = TempDir::new().unwrap();
        let args = InitArgs {
            file:        temp_dir.path().join("missing").join("data.json"),
            collections: Vec::new(),
        };
        assert!(run(args).await.is_err());
    }
}
