//! Mutable state threaded through the planning phases

use super::assembler::PipelineAssembler;
use super::plan::PipelinePlan;
use crate::config::PackplanConfig;
use crate::entries::{DiscoveryConfig, EntryMap};
use crate::environment::Environment;
use crate::error::{PlanError, PlanResult};
use crate::progress::ProgressEvent;
use std::path::{Path, PathBuf};

/// Owns everything one plan construction needs; dropped once the plan is handed off
pub struct PlanContext {
    pub project_root: PathBuf,

    /// Directory scanned for entries. Replaced by its canonical form during discovery.
    pub entry_root: PathBuf,

    pub environment: Environment,

    pub discovery: DiscoveryConfig,

    pub assembler: PipelineAssembler,

    pub discovered: Vec<PathBuf>,

    pub entry_map: Option<EntryMap>,

    pub plan: Option<PipelinePlan>,

    /// Events raised by phases, drained by the orchestrator after each phase
    pub events: Vec<ProgressEvent>,
}

impl PlanContext {
    pub fn new(
        project_root: PathBuf,
        entry_root: PathBuf,
        environment: Environment,
        discovery: DiscoveryConfig,
        assembler: PipelineAssembler,
    ) -> Self {
        Self {
            project_root,
            entry_root,
            environment,
            discovery,
            assembler,
            discovered: Vec::new(),
            entry_map: None,
            plan: None,
            events: Vec::new(),
        }
    }

    /// Resolves every configured path against the canonical project root
    pub fn from_config(project_root: &Path, config: &PackplanConfig) -> PlanResult<Self> {
        let project_root = project_root
            .canonicalize()
            .map_err(|err| PlanError::file_system(project_root, err))?;

        let entry_root = config.entry_root(&project_root);
        let assembler = config.assembler(&project_root);

        Ok(Self::new(
            project_root,
            entry_root,
            config.environment,
            config.discovery(),
            assembler,
        ))
    }

    pub fn emit(&mut self, event: ProgressEvent) {
        self.events.push(event);
    }
}
