//! Configuration management for packplan
//!
//! Settings are loaded from environment variables with sensible defaults. All paths are
//! interpreted relative to the project root handed to the planner.
//!
//! # Environment Variables
//!
//! - `PACKPLAN_ENV`, then `NODE_ENV`: build environment - default: "development".
//!   Any value other than "production" folds to development.
//! - `PACKPLAN_SOURCE_ROOT`: front-end source directory - default: "app/javascript"
//! - `PACKPLAN_ENTRY_DIR`: entry directory below the source root - default: "packs"
//! - `PACKPLAN_OUTPUT_PATH`: emitted bundle directory - default: "public/packs"
//! - `PACKPLAN_PUBLIC_PATH`: URL prefix of emitted bundles - default: "/packs/"
//! - `PACKPLAN_CACHE_DIR`: transpiler cache directory - default: "tmp/cache/packplan"
//! - `PACKPLAN_HOT_RELOAD`: hot style reloading in development (true|false) - default: "false"
//! - `PACKPLAN_LOG_LEVEL`: logging level - default: "info"
//! - `PACKPLAN_LOG_JSON`: JSON log lines on stderr (true|false) - default: "false"
//!
//! # Example
//!
//! ```no_run
//! use packplan::PackplanConfig;
//!
//! let config = PackplanConfig::default();
//! config.validate().expect("Invalid configuration");
//! println!("{}", config);
//! ```

use crate::entries::{DiscoveryConfig, DEFAULT_ENTRY_EXTENSIONS};
use crate::environment::Environment;
use crate::pipeline::{OutputNaming, PipelineAssembler};
use std::collections::BTreeMap;
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_SOURCE_ROOT: &str = "app/javascript";
const DEFAULT_ENTRY_DIR: &str = "packs";
const DEFAULT_OUTPUT_PATH: &str = "public/packs";
const DEFAULT_PUBLIC_PATH: &str = "/packs/";
const DEFAULT_CACHE_DIR: &str = "tmp/cache/packplan";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    /// Failed to parse configuration value
    #[error("Failed to parse {field}: {error}")]
    ParseError { field: String, error: String },
}

#[derive(Debug, Clone)]
pub struct PackplanConfig {
    pub environment: Environment,

    pub source_root: PathBuf,

    /// Entry directory, relative to `source_root`
    pub entry_dir: PathBuf,

    /// Recognized entry extensions, without the leading dot
    pub extensions: Vec<String>,

    pub output_path: PathBuf,

    pub public_path: String,

    pub cache_dir: PathBuf,

    pub hot_reload: bool,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,

    pub log_json: bool,
}

impl Default for PackplanConfig {
    /// Loads from `PACKPLAN_*` environment variables, falling back to defaults
    fn default() -> Self {
        let path_var = |key: &str, default: &str| {
            env::var(key)
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(default))
        };

        let flag_var = |key: &str| {
            env::var(key)
                .ok()
                .and_then(|v| v.parse::<bool>().ok())
                .unwrap_or(false)
        };

        let public_path =
            env::var("PACKPLAN_PUBLIC_PATH").unwrap_or_else(|_| DEFAULT_PUBLIC_PATH.to_string());

        let log_level = env::var("PACKPLAN_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        Self {
            environment: Environment::from_env(),
            source_root: path_var("PACKPLAN_SOURCE_ROOT", DEFAULT_SOURCE_ROOT),
            entry_dir: path_var("PACKPLAN_ENTRY_DIR", DEFAULT_ENTRY_DIR),
            extensions: DEFAULT_ENTRY_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
            output_path: path_var("PACKPLAN_OUTPUT_PATH", DEFAULT_OUTPUT_PATH),
            public_path,
            cache_dir: path_var("PACKPLAN_CACHE_DIR", DEFAULT_CACHE_DIR),
            hot_reload: flag_var("PACKPLAN_HOT_RELOAD"),
            log_level,
            log_json: flag_var("PACKPLAN_LOG_JSON"),
        }
    }
}

impl PackplanConfig {
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any validation fails
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source_root.as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Source root must not be empty".to_string(),
            ));
        }

        if self.entry_dir.is_absolute() {
            return Err(ConfigError::ValidationFailed(format!(
                "Entry directory must be relative to the source root, got {}",
                self.entry_dir.display()
            )));
        }

        if self.extensions.is_empty() {
            return Err(ConfigError::ValidationFailed(
                "At least one entry extension is required".to_string(),
            ));
        }
        if let Some(bad) = self
            .extensions
            .iter()
            .find(|e| e.is_empty() || e.starts_with('.'))
        {
            return Err(ConfigError::ParseError {
                field: "extensions".to_string(),
                error: format!("'{}' must be a bare extension such as 'js'", bad),
            });
        }

        if !self.public_path.ends_with('/') {
            return Err(ConfigError::ValidationFailed(format!(
                "Public path must end with '/', got '{}'",
                self.public_path
            )));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }

    pub fn source_root(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.source_root)
    }

    pub fn entry_root(&self, project_root: &Path) -> PathBuf {
        self.source_root(project_root).join(&self.entry_dir)
    }

    pub fn discovery(&self) -> DiscoveryConfig {
        DiscoveryConfig::with_extensions(self.extensions.iter().cloned())
    }

    pub fn assembler(&self, project_root: &Path) -> PipelineAssembler {
        PipelineAssembler::new(self.source_root(project_root))
            .with_cache_dir(&self.cache_dir)
            .with_output(OutputNaming::new(
                project_root.join(&self.output_path),
                self.public_path.clone(),
            ))
            .with_hot_reload(self.hot_reload)
    }

    /// Flattened settings, keyed by field name
    pub fn to_display_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();

        map.insert("environment".to_string(), self.environment.to_string());
        map.insert(
            "source_root".to_string(),
            self.source_root.display().to_string(),
        );
        map.insert("entry_dir".to_string(), self.entry_dir.display().to_string());
        map.insert("extensions".to_string(), self.extensions.join(","));
        map.insert(
            "output_path".to_string(),
            self.output_path.display().to_string(),
        );
        map.insert("public_path".to_string(), self.public_path.clone());
        map.insert("cache_dir".to_string(), self.cache_dir.display().to_string());
        map.insert("hot_reload".to_string(), self.hot_reload.to_string());
        map.insert("log_level".to_string(), self.log_level.clone());
        map.insert("log_json".to_string(), self.log_json.to_string());

        map
    }
}

impl fmt::Display for PackplanConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Packplan Configuration:")?;
        writeln!(f, "  Environment: {}", self.environment)?;
        writeln!(f, "  Source Root: {}", self.source_root.display())?;
        writeln!(f, "  Entry Dir: {}", self.entry_dir.display())?;
        writeln!(f, "  Extensions: {}", self.extensions.join(", "))?;
        writeln!(f, "  Output Path: {}", self.output_path.display())?;
        writeln!(f, "  Public Path: {}", self.public_path)?;
        writeln!(f, "  Cache Dir: {}", self.cache_dir.display())?;
        writeln!(f, "  Hot Reload: {}", self.hot_reload)?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        writeln!(f, "  Log JSON: {}", self.log_json)?;
        Ok(())
    }
}
