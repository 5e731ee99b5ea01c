use crate::entries::EntryMap;
use crate::error::PlanResult;
use crate::pipeline::context::PlanContext;
use crate::pipeline::phase_trait::PlanPhase;
use crate::progress::ProgressEvent;

pub struct EntryMapPhase;

impl PlanPhase for EntryMapPhase {
    fn name(&self) -> &'static str {
        "entries"
    }

    fn execute(&self, context: &mut PlanContext) -> PlanResult<()> {
        let entry_map = EntryMap::build(&context.entry_root, &context.discovered)?;
        let entries = entry_map.len();
        context.entry_map = Some(entry_map);
        context.emit(ProgressEvent::EntryMapBuilt { entries });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entries::DiscoveryConfig;
    use crate::environment::Environment;
    use crate::error::PlanError;
    use crate::pipeline::PipelineAssembler;
    use std::path::PathBuf;

    fn context(files: &[&str]) -> PlanContext {
        let root = PathBuf::from("/project/app/javascript/packs");
        let mut context = PlanContext::new(
            PathBuf::from("/project"),
            root.clone(),
            Environment::Development,
            DiscoveryConfig::default(),
            PipelineAssembler::default(),
        );
        context.discovered = files.iter().map(|f| root.join(f)).collect();
        context
    }

    #[test]
    fn test_builds_entry_map() {
        let mut context = context(&["application.js", "admin/dashboard.ts"]);
        EntryMapPhase.execute(&mut context).unwrap();

        let map = context.entry_map.unwrap();
        assert_eq!(map.len(), 2);
        assert!(map.get("admin/dashboard").is_some());
    }

    #[test]
    fn test_collision_stops_phase() {
        let mut context = context(&["a.js", "a.ts"]);
        let err = EntryMapPhase.execute(&mut context).unwrap_err();
        assert!(matches!(err, PlanError::Collision { .. }));
        assert!(context.entry_map.is_none());
    }
}
