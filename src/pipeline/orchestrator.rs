use super::context::PlanContext;
use super::phase_trait::PlanPhase;
use super::phases::{AssemblePhase, DiscoverPhase, EntryMapPhase};
use super::plan::PipelinePlan;
use crate::config::PackplanConfig;
use crate::progress::{ProgressEvent, ProgressHandler};
use anyhow::{anyhow, Context, Result};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Runs discovery, entry mapping and assembly in sequence
pub struct PlanOrchestrator {
    progress_handler: Option<Arc<dyn ProgressHandler>>,
}

impl PlanOrchestrator {
    pub fn new(progress_handler: Option<Arc<dyn ProgressHandler>>) -> Self {
        Self { progress_handler }
    }

    /// Builds a plan for the project at `project_root`
    pub fn plan(&self, project_root: &Path, config: &PackplanConfig) -> Result<PipelinePlan> {
        let mut context = PlanContext::from_config(project_root, config)
            .with_context(|| format!("Failed to open project {}", project_root.display()))?;
        self.execute(&mut context)
    }

    pub fn execute(&self, context: &mut PlanContext) -> Result<PipelinePlan> {
        let start = Instant::now();
        info!(
            project = %context.project_root.display(),
            environment = %context.environment,
            "Starting plan construction"
        );

        self.notify(&ProgressEvent::Started {
            project_root: context.project_root.display().to_string(),
        });

        let phases: Vec<Box<dyn PlanPhase>> = vec![
            Box::new(DiscoverPhase),
            Box::new(EntryMapPhase),
            Box::new(AssemblePhase),
        ];

        for phase in phases {
            let phase_name = phase.name();
            self.notify(&ProgressEvent::PhaseStarted {
                phase: phase_name.to_string(),
            });

            let phase_start = Instant::now();
            let outcome = phase.execute(context);
            self.drain_events(context);

            if let Err(err) = outcome {
                self.notify(&ProgressEvent::Failed {
                    phase: phase_name.to_string(),
                    error: err.to_string(),
                });
                return Err(err).with_context(|| format!("Phase {} failed", phase_name));
            }

            self.notify(&ProgressEvent::PhaseComplete {
                phase: phase_name.to_string(),
                duration: phase_start.elapsed(),
            });
            debug!("Phase {} complete", phase_name);
        }

        let plan = context
            .plan
            .take()
            .ok_or_else(|| anyhow!("Assemble phase finished without producing a plan"))?;

        self.notify(&ProgressEvent::Completed {
            entries: plan.entry.len(),
            rules: plan.rules.len(),
            total_time: start.elapsed(),
        });

        Ok(plan)
    }

    fn drain_events(&self, context: &mut PlanContext) {
        for event in context.events.drain(..) {
            self.notify(&event);
        }
    }

    fn notify(&self, event: &ProgressEvent) {
        if let Some(handler) = &self.progress_handler {
            handler.on_progress(event);
        }
    }
}
