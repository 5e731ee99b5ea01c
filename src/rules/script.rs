//! Script, static asset and component rules
//!
//! These rules are handed through to the external transpiler and file emitter; the planner
//! only decides which files they cover and with which options.

use super::pattern::{Condition, MatchPredicate, Pattern};
use crate::environment::Environment;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const APP_SCRIPT_PATTERN: &str = r"\.(js|jsx|mjs|ts|tsx)(\.erb)?$";
pub const DEPENDENCY_SCRIPT_PATTERN: &str = r"\.(js|mjs)$";
pub const ASSET_PATTERN: &str = r"(?i)\.(jpg|jpeg|png|gif|tiff|ico|svg|eot|otf|ttf|woff|woff2)$";

const NODE_MODULES_PATTERN: &str = "node_modules";
const TRANSPILER_RUNTIME_PATTERN: &str = r"@babel(?:/|\\{1,2})runtime";
const TRANSPILER_CACHE_SUBDIR: &str = "babel-loader-node-modules";

/// Fingerprinted file name for copied static assets
pub const ASSET_LOADER: &str = "file-loader";
pub const ASSET_NAME_TEMPLATE: &str = "[path][name]-[hash].[ext]";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranspileOptions {
    pub cache_directory: PathBuf,
    pub cache_compression: bool,
    pub compact: bool,
    /// `None` leaves the transpiler default in place
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_maps: Option<bool>,
    /// Whether project-level transpiler config files are honoured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_project_config: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptRule {
    pub predicate: MatchPredicate,
    pub loader: String,
    pub options: TranspileOptions,
}

impl ScriptRule {
    /// Application sources under `source_root`, never anything from `node_modules`
    pub fn application(source_root: &Path, cache_dir: &Path, environment: Environment) -> Self {
        let production = environment.is_production();
        Self {
            predicate: MatchPredicate::new(Pattern::fixed(APP_SCRIPT_PATTERN))
                .including(Condition::Directory(source_root.to_path_buf()))
                .excluding(Condition::Regex(Pattern::fixed(NODE_MODULES_PATTERN))),
            loader: "babel-loader".to_string(),
            options: TranspileOptions {
                cache_directory: cache_dir.join(TRANSPILER_CACHE_SUBDIR),
                cache_compression: production,
                compact: production,
                source_maps: None,
                use_project_config: None,
            },
        }
    }

    /// Third-party modules, compiled with preset defaults only
    pub fn dependencies(cache_dir: &Path, environment: Environment) -> Self {
        Self {
            predicate: MatchPredicate::new(Pattern::fixed(DEPENDENCY_SCRIPT_PATTERN))
                .excluding(Condition::Regex(Pattern::fixed(TRANSPILER_RUNTIME_PATTERN))),
            loader: "babel-loader".to_string(),
            options: TranspileOptions {
                cache_directory: cache_dir.join(TRANSPILER_CACHE_SUBDIR),
                cache_compression: environment.is_production(),
                compact: false,
                source_maps: Some(false),
                use_project_config: Some(false),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetRule {
    pub predicate: MatchPredicate,
    pub loader: String,
    pub name_template: String,
    /// Base directory the `[path]` placeholder is relative to
    pub context: PathBuf,
}

impl AssetRule {
    pub fn new(source_root: &Path) -> Self {
        Self {
            predicate: MatchPredicate::new(Pattern::fixed(ASSET_PATTERN)),
            loader: ASSET_LOADER.to_string(),
            name_template: ASSET_NAME_TEMPLATE.to_string(),
            context: source_root.to_path_buf(),
        }
    }
}

/// A rule owned by an external component compiler (single-file components and similar)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentRule {
    pub name: String,
    pub predicate: MatchPredicate,
    pub loader: String,
}

impl ComponentRule {
    pub fn new(name: impl Into<String>, test: Pattern, loader: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            predicate: MatchPredicate::new(test),
            loader: loader.into(),
        }
    }

    pub fn vue() -> Self {
        Self::new("vue", Pattern::fixed(r"\.vue$"), "vue-loader")
    }
}
