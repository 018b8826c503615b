use tracing::Level;

const DEFAULT_LOG_LEVEL: Level = Level::INFO;

/// Installs the global `tracing` subscriber, writing to stderr so command
/// output on stdout stays machine-readable.
///
/// `--verbose` wins over the `LOG_LEVEL` environment variable.
pub(crate) fn init(verbose: bool) {
    let env_val = std::env::var("LOG_LEVEL").ok();
    let (log_level, warning) =
        if verbose {
            (Level::DEBUG, None)
        } else {
            level_from_env(env_val.as_deref())
        };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}

/// Maps a `LOG_LEVEL` value onto a level, plus a warning to emit once
/// logging is up if the value wasn't recognized.
fn level_from_env(env_val: Option<&str>) -> (Level, Option<String>) {
    let Some(env_val) = env_val.map(str::trim) else {
        return (DEFAULT_LOG_LEVEL, None);
    };
    let level = match env_val.to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" | "verbose" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => return (
            DEFAULT_LOG_LEVEL,
            Some(format!("Invalid `LOG_LEVEL` environment variable value: `{env_val}`")),
        ),
    };
    (level, None)
}
