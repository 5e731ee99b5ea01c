//! packplan - deterministic planning layer for front-end asset bundling
//!
//! Given a project with a directory of front-end entry points, packplan discovers every
//! compilable entry file, derives a stable bundle name for each one and assembles the
//! ordered set of processing rules (script transpilation, stylesheet handling with
//! optional module scoping, static asset fingerprinting) for either a development or a
//! production build. The resulting [`PipelinePlan`] is handed to an external compiler;
//! packplan itself never compiles anything.
//!
//! # Core Concepts
//!
//! - **Bundle name**: the entry path relative to the entry root, extension stripped,
//!   with `/` separators (`packs/admin/dashboard.ts` becomes `admin/dashboard`)
//! - **Entry map**: bundle name to source path; two sources sharing a name is an error
//! - **Style rule**: loader chain for a class of stylesheets, headed by file extraction
//!   in production and inline injection in development
//! - **Environment**: resolved once and passed explicitly to every component
//!
//! # Example Usage
//!
//! ```no_run
//! use packplan::{Environment, PackplanConfig, PlanOrchestrator};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = PackplanConfig::default().with_environment(Environment::Production);
//! let plan = PlanOrchestrator::new(None).plan(Path::new("."), &config)?;
//!
//! for (name, source) in &plan.entry {
//!     println!("{} <- {}", name, source.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod entries;
pub mod environment;
pub mod error;
pub mod pipeline;
pub mod progress;
pub mod rules;
pub mod util;

pub use config::{ConfigError, PackplanConfig};
pub use entries::{discover, normalize, BundleName, EntryDiscoverer, EntryMap};
pub use environment::Environment;
pub use error::{PlanError, PlanResult};
pub use pipeline::{PipelineAssembler, PipelinePlan, PlanOrchestrator};
pub use rules::{make_style_rule, OutputMode, Rule, StyleRule};
pub use util::{init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name_is_packplan() {
        assert_eq!(NAME, "packplan");
    }
}
