use crate::entries::EntryDiscoverer;
use crate::error::PlanResult;
use crate::pipeline::context::PlanContext;
use crate::pipeline::phase_trait::PlanPhase;
use crate::progress::ProgressEvent;
use std::time::Instant;

pub struct DiscoverPhase;

impl PlanPhase for DiscoverPhase {
    fn name(&self) -> &'static str {
        "discover"
    }

    fn execute(&self, context: &mut PlanContext) -> PlanResult<()> {
        let start = Instant::now();

        let discoverer =
            EntryDiscoverer::new(&context.entry_root)?.with_config(context.discovery.clone());
        context.discovered = discoverer.discover()?;
        context.entry_root = discoverer.root().to_path_buf();

        let count = context.discovered.len();
        context.emit(ProgressEvent::EntriesDiscovered {
            count,
            scan_time: start.elapsed(),
        });

        Ok(())
    }
}
