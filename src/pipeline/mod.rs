pub mod assembler;
pub mod context;
pub mod naming;
pub mod orchestrator;
pub mod phase_trait;
pub mod phases;
pub mod plan;

pub use assembler::PipelineAssembler;
pub use context::PlanContext;
pub use naming::OutputNaming;
pub use orchestrator::PlanOrchestrator;
pub use phase_trait::PlanPhase;
pub use plan::{ManifestOptions, PipelinePlan, ResolveOptions};
