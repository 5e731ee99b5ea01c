use super::context::PlanContext;
use crate::error::PlanResult;

/// One step of plan construction
pub trait PlanPhase: Send + Sync {
    fn name(&self) -> &'static str;

    fn execute(&self, context: &mut PlanContext) -> PlanResult<()>;
}
