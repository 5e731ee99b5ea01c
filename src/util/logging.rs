//! Structured logging setup for packplan
//!
//! Logging goes through the `tracing` ecosystem and is always written to stderr, so the
//! plan printed on stdout stays machine-readable.
//!
//! # Example
//!
//! ```no_run
//! use packplan::util::logging::{init_logging, LoggingConfig};
//! use packplan::PackplanConfig;
//!
//! // PACKPLAN_LOG_LEVEL and PACKPLAN_LOG_JSON, overridden by -v
//! let config = PackplanConfig::default();
//! init_logging(LoggingConfig::from_config(&config).with_overrides(None, true, false));
//!
//! tracing::info!(root = "app/javascript/packs", "Discovering entries");
//! ```

use crate::config::PackplanConfig;
use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Targets that are only interesting when explicitly requested through `RUST_LOG`
const QUIET_TARGETS: [&str; 2] = ["ignore=warn", "globset=warn"];

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum level for packplan's own events
    pub level: Level,

    /// One JSON object per event instead of the pretty console format
    pub use_json: bool,

    pub include_target: bool,

    /// File and line of the emitting call site
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_json: false,
            include_target: true,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    /// Level and output format from the loaded configuration
    pub fn from_config(config: &PackplanConfig) -> Self {
        Self {
            level: parse_level(&config.log_level),
            use_json: config.log_json,
            ..Default::default()
        }
    }

    /// Applies the command-line flags. An explicit level wins over `-v`, which wins
    /// over `-q`.
    pub fn with_overrides(mut self, log_level: Option<&str>, verbose: bool, quiet: bool) -> Self {
        if let Some(level) = log_level {
            self.level = parse_level(level);
        } else if verbose {
            self.level = Level::DEBUG;
        } else if quiet {
            self.level = Level::ERROR;
        }
        self
    }
}

/// Parses a log level, case-insensitively. Unknown values fall back to INFO.
///
/// ```
/// use packplan::util::logging::parse_level;
/// use tracing::Level;
///
/// assert_eq!(parse_level("debug"), Level::DEBUG);
/// assert_eq!(parse_level("WARN"), Level::WARN);
/// assert_eq!(parse_level("verbose"), Level::INFO);
/// ```
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}

fn build_filter(level: Level) -> EnvFilter {
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("packplan={}", level).parse() {
        filter = filter.add_directive(directive);
    }

    if env::var("RUST_LOG").is_err() {
        for quiet in QUIET_TARGETS {
            if let Ok(directive) = quiet.parse() {
                filter = filter.add_directive(directive);
            }
        }
    }

    filter
}

/// Installs the global subscriber. Only the first call has any effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        // Exactly one of the two layers is present
        let json = config.use_json.then(|| {
            fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_target(config.include_target)
                .with_file(config.include_location)
                .with_line_number(config.include_location)
        });
        let pretty = (!config.use_json).then(|| {
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(config.include_target)
                .with_file(config.include_location)
                .with_line_number(config.include_location)
        });

        tracing_subscriber::registry()
            .with(build_filter(config.level))
            .with(json)
            .with(pretty)
            .init();
    });
}
