//! The assembled bundling plan

use super::naming::OutputNaming;
use crate::entries::EntryMap;
use crate::environment::Environment;
use crate::rules::{Rule, StyleRule};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// Extensions the external resolver tries, in order, for extension-less imports
pub const RESOLVE_EXTENSIONS: [&str; 14] = [
    ".vue",
    ".mjs",
    ".js",
    ".sass",
    ".scss",
    ".css",
    ".module.sass",
    ".module.scss",
    ".module.css",
    ".png",
    ".svg",
    ".gif",
    ".jpeg",
    ".jpg",
];

pub const DEVTOOL: &str = "cheap-module-source-map";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveOptions {
    pub extensions: Vec<String>,
    /// Module lookup roots, searched in order
    pub modules: Vec<PathBuf>,
}

impl ResolveOptions {
    pub fn new(source_root: &Path) -> Self {
        Self {
            extensions: RESOLVE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            modules: vec![source_root.to_path_buf(), PathBuf::from("node_modules")],
        }
    }
}

/// Options passed through to the external manifest writer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestOptions {
    pub integrity: bool,
    pub entrypoints: bool,
    pub write_to_disk: bool,
    pub public_path: bool,
}

impl Default for ManifestOptions {
    fn default() -> Self {
        Self {
            integrity: false,
            entrypoints: true,
            write_to_disk: true,
            public_path: true,
        }
    }
}

/// Everything the external compiler needs for one build invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelinePlan {
    pub environment: Environment,
    pub devtool: String,
    pub entry: EntryMap,
    pub rules: Vec<Rule>,
    pub output: OutputNaming,
    pub resolve: ResolveOptions,
    pub manifest: ManifestOptions,
}

impl PipelinePlan {
    /// First rule, top-down, whose predicate accepts `path`
    pub fn rule_for(&self, path: &Path) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.matches(path))
    }

    pub fn style_rules(&self) -> impl Iterator<Item = &StyleRule> {
        self.rules.iter().filter_map(Rule::as_style)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// SHA-256 of the compact JSON form; equal plans always share a fingerprint
    pub fn fingerprint(&self) -> serde_json::Result<String> {
        let canonical = serde_json::to_vec(self)?;
        Ok(hex::encode(Sha256::digest(&canonical)))
    }
}
