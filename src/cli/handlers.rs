//! Command handlers. Each returns the process exit code.

use super::commands::{EntriesArgs, MatchArgs, PlanArgs};
use super::output::{OutputFormatter, RouteReport};
use crate::config::{ConfigError, PackplanConfig};
use crate::entries::{EntryDiscoverer, EntryMap};
use crate::environment::Environment;
use crate::error::PlanError;
use crate::pipeline::{PipelinePlan, PlanOrchestrator};
use crate::progress::{LoggingHandler, ProgressHandler};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, error};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_PLAN_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

pub fn handle_plan(args: &PlanArgs, quiet: bool) -> i32 {
    let project_root = project_root(args.project_path.as_deref());

    let result = load_config(args.env)
        .and_then(|config| build_plan(&project_root, &config, quiet))
        .and_then(|plan| OutputFormatter::new(args.format.into()).format_plan(&plan))
        .and_then(|rendered| emit(&rendered, args.output.as_deref()));

    finish(result)
}

pub fn handle_entries(args: &EntriesArgs) -> i32 {
    let project_root = project_root(args.project_path.as_deref());

    let result = load_config(None)
        .and_then(|config| collect_entries(&project_root, &config))
        .and_then(|entries| OutputFormatter::new(args.format.into()).format_entries(&entries))
        .and_then(|rendered| emit(&rendered, None));

    finish(result)
}

pub fn handle_match(args: &MatchArgs, quiet: bool) -> i32 {
    let project_root = project_root(args.project_path.as_deref());

    let result = load_config(args.env)
        .and_then(|config| build_plan(&project_root, &config, quiet))
        .and_then(|plan| {
            let file = match_target(&project_root, &args.file);
            let report = RouteReport::new(&plan, &file);
            debug!(file = %file.display(), matched = report.rule.is_some(), "Routed file");
            OutputFormatter::new(args.format.into()).format_match(&report)
        })
        .and_then(|rendered| emit(&rendered, None));

    finish(result)
}

/// Maps an error chain to an exit code. Configuration problems anywhere in the chain
/// take precedence over plan failures.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if cause.downcast_ref::<ConfigError>().is_some() {
            return EXIT_CONFIG_ERROR;
        }
        if let Some(PlanError::Configuration { .. }) = cause.downcast_ref::<PlanError>() {
            return EXIT_CONFIG_ERROR;
        }
    }
    EXIT_PLAN_ERROR
}

fn finish(result: Result<()>) -> i32 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            let kind = err
                .chain()
                .find_map(|cause| cause.downcast_ref::<PlanError>())
                .map(PlanError::kind)
                .unwrap_or("internal");
            error!(kind, "{:#}", err);
            eprintln!("Error: {:#}", err);
            exit_code_for(&err)
        }
    }
}

fn project_root(path: Option<&Path>) -> PathBuf {
    path.map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn load_config(env_override: Option<Environment>) -> Result<PackplanConfig> {
    let mut config = PackplanConfig::default();
    if let Some(environment) = env_override {
        config = config.with_environment(environment);
    }
    config.validate()?;
    debug!(settings = ?config.to_display_map(), "Configuration loaded");
    Ok(config)
}

fn build_plan(project_root: &Path, config: &PackplanConfig, quiet: bool) -> Result<PipelinePlan> {
    let handler: Option<Arc<dyn ProgressHandler>> = if quiet {
        None
    } else {
        Some(Arc::new(LoggingHandler))
    };
    PlanOrchestrator::new(handler).plan(project_root, config)
}

fn collect_entries(project_root: &Path, config: &PackplanConfig) -> Result<EntryMap> {
    let entry_root = config.entry_root(project_root);
    let discoverer = EntryDiscoverer::new(&entry_root)?.with_config(config.discovery());
    let discovered = discoverer.discover()?;
    Ok(EntryMap::build(discoverer.root(), discovered)?)
}

/// Resolves a match target so it lines up with the canonical directories in the plan's
/// rule conditions. Relative targets are taken from the project root. A target that does
/// not exist yet keeps its file name under its canonical parent.
fn match_target(project_root: &Path, file: &Path) -> PathBuf {
    let joined = if file.is_absolute() {
        file.to_path_buf()
    } else {
        project_root.join(file)
    };

    if let Ok(canonical) = joined.canonicalize() {
        return canonical;
    }

    match (joined.parent(), joined.file_name()) {
        (Some(parent), Some(name)) => parent
            .canonicalize()
            .map(|dir| dir.join(name))
            .unwrap_or(joined),
        _ => joined,
    }
}

fn emit(rendered: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            debug!(path = %path.display(), "Output written");
        }
        None => print!("{}", rendered),
    }
    Ok(())
}
