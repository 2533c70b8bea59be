use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Targets whose events pass the filter. `mockbase` also covers this binary,
/// which shares the library's crate name.
const TRACED_CRATES: [&str; 3] = ["mockbase", "mockbase_server", "tower_http"];

/// Initialize tracing with the specified verbosity level and output format.
///
/// Only events from the Mockbase crates and the HTTP trace layer are shown, at
/// INFO level or higher by default.
///
/// # Arguments
/// * `json` - If true, output logs in JSON format; otherwise, use human-readable format.
/// * `verbose` - Verbosity level: 0 for INFO, 1 for DEBUG, 2+ for TRACE.
pub fn init_tracing(json: bool, verbose: u8) {
    let filter = EnvFilter::new(filter_directives(verbose));

    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(fmt::layer().json().flatten_event(true))
            .init();
    }
    else {
        registry.with(fmt::layer()).init();
    }
}

/// Builds the `EnvFilter` directives for a verbosity level.
fn filter_directives(verbose: u8) -> String {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    TRACED_CRATES
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect::<Vec<_>>()
        .join(",")
}
