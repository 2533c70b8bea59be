use clap::{Parser, Subcommand};
use mockbase::{FileStore, Records};
use serde_json::Value;
use tracing::error;

/// Command handlers for the Mockbase CLI.
///
/// Each submodule implements one subcommand. Apart from `serve` and `init`,
/// they run a single record operation against the backing file, the same one
/// the matching HTTP route runs, and print the result.
/// Delete command module.
mod delete;
/// Get command module.
mod get;
/// Init command module.
mod init;
/// Insert command module.
mod insert;
/// List command module.
mod list;
/// Serve command module.
mod serve;
/// Update command module.
mod update;

/// The main CLI structure for Mockbase.
///
/// Defines the top-level command-line interface using clap. Global flags apply
/// to every subcommand.
#[derive(Parser)]
#[command(name = "mockbase")]
#[command(about = "A REST mock server backed by a single JSON file")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    /// The subcommand to execute.
    pub command: Commands,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase verbosity (can be used multiple times: -v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Enumeration of all available CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Serve the backing file as a REST API.
    ///
    /// The file must exist and hold a JSON object; it is reloaded on every
    /// request, so external edits are picked up immediately.
    Serve(serve::ServeArgs),
    /// Create a new backing file.
    ///
    /// Refuses to overwrite an existing file.
    Init(init::InitArgs),
    /// Print every record of a collection.
    List(list::ListArgs),
    /// Print a single record.
    Get(get::GetArgs),
    /// Insert a record; the next free id is assigned.
    Insert(insert::InsertArgs),
    /// Replace a record with new content, keeping its id.
    Update(update::UpdateArgs),
    /// Delete a record and print what was removed.
    Delete(delete::DeleteArgs),
}

/// Execute the specified CLI command.
///
/// Dispatches to the handler of each subcommand.
///
/// # Arguments
/// * `command` - The parsed subcommand.
///
/// # Returns
/// Returns `Ok(())` on success, or a `MockbaseError` on failure.
pub async fn run_command(command: Commands) -> mockbase::Result<()> {
    match command {
        Commands::Serve(args) => serve::run(args).await,
        Commands::Init(args) => init::run(args).await,
        Commands::List(args) => list::run(args).await,
        Commands::Get(args) => get::run(args).await,
        Commands::Insert(args) => insert::run(args).await,
        Commands::Update(args) => update::run(args).await,
        Commands::Delete(args) => delete::run(args).await,
    }
}

/// Record operations over the backing file at `path`.
fn open_records(path: &std::path::Path) -> Records<FileStore> { Records::new(FileStore::new(path)) }

/// Pretty-prints `value` to stdout.
fn print_json(value: &Value) -> mockbase::Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| {
        error!("Failed to serialize output to JSON: {}", e);
        e
    })?;
    #[allow(clippy::print_stdout, reason = "CLI output")]
    {
        println!("{}", json);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use mockbase::MockbaseError;
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    /// Test CLI command parsing.
    #[test]
    fn test_cli_parsing() {
        let cli_parsed = Cli::try_parse_from(["mockbase", "serve", "-p", "3000", "-f", "db.json"]).unwrap();
        match cli_parsed.command {
            Commands::Serve(args) => {
                assert_eq!(args.port, Some(3000));
                assert_eq!(args.file, Some(PathBuf::from("db.json")));
                assert_eq!(args.host, None);
                assert_eq!(args.config, None);
            },
            _ => panic!("Expected Serve command"),
        }

        let cli_parsed = Cli::try_parse_from([
            "mockbase",
            "insert",
            "--file",
            "/tmp/data.json",
            "--collection",
            "notes",
            "--data",
            r#"{"title":"a"}"#,
        ])
        .unwrap();
        match cli_parsed.command {
            Commands::Insert(args) => {
                assert_eq!(args.file, PathBuf::from("/tmp/data.json"));
                assert_eq!(args.collection, "notes");
                assert_eq!(args.data, r#"{"title":"a"}"#);
            },
            _ => panic!("Expected Insert command"),
        }

        let cli_parsed = Cli::try_parse_from(["mockbase", "get", "-c", "notes", "-i", "2"]).unwrap();
        match cli_parsed.command {
            Commands::Get(args) => {
                assert_eq!(args.file, PathBuf::from("./data.json"));
                assert_eq!(args.collection, "notes");
                assert_eq!(args.id, "2");
            },
            _ => panic!("Expected Get command"),
        }
    }

    /// Test the repeated collection flag of init.
    #[test]
    fn test_init_collections_parsing() {
        let cli_parsed = Cli::try_parse_from(["mockbase", "init", "-c", "users", "-c", "posts"]).unwrap();
        match cli_parsed.command {
            Commands::Init(args) => assert_eq!(args.collections, ["users", "posts"]),
            _ => panic!("Expected Init command"),
        }
    }

    /// Test CLI with verbose flag.
    #[test]
    fn test_cli_verbose_parsing() {
        let cli_parsed = Cli::try_parse_from(["mockbase", "-v", "list", "-c", "notes"]).unwrap();
        assert_eq!(cli_parsed.verbose, 1);

        let cli_parsed = Cli::try_parse_from(["mockbase", "list", "-vv", "-c", "notes"]).unwrap();
        assert_eq!(cli_parsed.verbose, 2);
    }

    /// Test CLI with JSON flag.
    #[test]
    fn test_cli_json_parsing() {
        let cli_parsed = Cli::try_parse_from(["mockbase", "--json", "serve"]).unwrap();
        assert!(cli_parsed.json);
    }

    /// Test the version flag.
    #[test]
    fn test_version_flag() {
        let err = Cli::try_parse_from(["mockbase", "-V"]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    /// Test invalid command.
    #[test]
    fn test_invalid_command() {
        let result = Cli::try_parse_from(["mockbase", "invalid-command"]);
        assert!(result.is_err(), "Invalid command should be rejected");
    }

    /// Test missing required arguments.
    #[test]
    fn test_missing_required_args() {
        let result = Cli::try_parse_from(["mockbase", "get", "-c", "notes"]);
        assert!(result.is_err(), "Get should require an id");

        let result = Cli::try_parse_from(["mockbase", "insert", "-c", "notes"]);
        assert!(result.is_err(), "Insert should require data");

        let result = Cli::try_parse_from(["mockbase", "serve", "-p", "not-a-port"]);
        assert!(result.is_err(), "Serve should reject a non-numeric port");
    }

    /// Test a full record lifecycle through run_command.
    #[tokio::test]
    async fn test_run_command_lifecycle() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("data.json");

        run_command(Commands::Init(init::InitArgs {
            file:        file.clone(),
            collections: vec!["notes".to_owned()],
        }))
        .await
        .unwrap();

        run_command(Commands::Insert(insert::InsertArgs {
            file:       file.clone(),
            collection: "notes".to_owned(),
            data:       r#"{"title":"a"}"#.to_owned(),
        }))
        .await
        .unwrap();

        run_command(Commands::Update(update::UpdateArgs {
            file:       file.clone(),
            collection: "notes".to_owned(),
            id:         "1".to_owned(),
            data:       r#"{"title":"b"}"#.to_owned(),
        }))
        .await
        .unwrap();

        run_command(Commands::List(list::ListArgs {
            file:       file.clone(),
            collection: "notes".to_owned(),
        }))
        .await
        .unwrap();

        let document = open_records(&file).document().await.unwrap();
        assert_eq!(
            document.to_value(),
            json!({"notes": [{"id": 1, "title": "b"}]})
        );

        run_command(Commands::Delete(delete::DeleteArgs {
            file:       file.clone(),
            collection: "notes".to_owned(),
            id:         "1".to_owned(),
        }))
        .await
        .unwrap();

        let result = run_command(Commands::Get(get::GetArgs {
            file,
            collection: "notes".to_owned(),
            id: "1".to_owned(),
        }))
        .await;
        assert!(matches!(result, Err(MockbaseError::RecordNotFound { .. })));
    }

    /// Test print_json with a nested value.
    #[test]
    fn test_print_json() {
        assert!(print_json(&json!({"notes": [{"id": 1}]})).is_ok());
    }
}
