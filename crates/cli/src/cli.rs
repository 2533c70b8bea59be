use clap::Parser;

use crate::{
    commands::{run_command, Cli},
    logging::init_tracing,
};

/// Run the Mockbase CLI application.
///
/// Parses command-line arguments, initializes tracing, and executes the
/// requested command.
///
/// # Returns
/// Returns `Ok(())` on successful execution, or a `MockbaseError` on failure.
pub async fn run() -> mockbase::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.json, cli.verbose);

    run_command(cli.command).await
}
