use crate::error::{PlanError, PlanResult};
use crate::pipeline::context::PlanContext;
use crate::pipeline::phase_trait::PlanPhase;

pub struct AssemblePhase;

impl PlanPhase for AssemblePhase {
    fn name(&self) -> &'static str {
        "assemble"
    }

    fn execute(&self, context: &mut PlanContext) -> PlanResult<()> {
        let entry_map = context
            .entry_map
            .take()
            .ok_or_else(|| PlanError::configuration("entry map has not been built"))?;

        let plan = context
            .assembler
            .assemble(entry_map, context.environment)?;
        context.plan = Some(plan);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entries::{DiscoveryConfig, EntryMap};
    use crate::environment::Environment;
    use crate::pipeline::PipelineAssembler;
    use std::path::PathBuf;

    fn context() -> PlanContext {
        PlanContext::new(
            PathBuf::from("/project"),
            PathBuf::from("/project/app/javascript/packs"),
            Environment::Production,
            DiscoveryConfig::default(),
            PipelineAssembler::new("/project/app/javascript"),
        )
    }

    #[test]
    fn test_requires_entry_map() {
        let mut context = context();
        let err = AssemblePhase.execute(&mut context).unwrap_err();
        assert!(matches!(err, PlanError::Configuration { .. }));
    }

    #[test]
    fn test_assembles_plan() {
        let mut context = context();
        let root = context.entry_root.clone();
        context.entry_map = Some(EntryMap::build(&root, [root.join("application.js")]).unwrap());

        AssemblePhase.execute(&mut context).unwrap();

        let plan = context.plan.unwrap();
        assert_eq!(plan.environment, Environment::Production);
        assert_eq!(plan.entry.len(), 1);
    }

    #[test]
    fn test_empty_entry_map_is_configuration_error() {
        let mut context = context();
        context.entry_map = Some(EntryMap::default());
        let err = AssemblePhase.execute(&mut context).unwrap_err();
        assert!(matches!(err, PlanError::Configuration { .. }));
    }
}
