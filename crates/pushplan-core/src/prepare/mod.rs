//! Push-plan preparation pipeline.
//!
//! Steps run once per push plan, in order, and may fail fast. Resource
//! digesting is delegated to a [`ResourceGatherer`] supplied by the caller.
use std::{fmt, sync::Arc};

use pushplan_model::{FlagOverrides, PushPlan};
use tracing::{debug, instrument, trace};

use crate::error::CoreResult;

mod resources;
pub use resources::ResourceGatherer;

mod steps;
pub use steps::{
    SetDefaultBitsPath, SetupAllResources, SetupDeploymentInformation, SetupDropletPath,
    SetupNoStart, SetupNoWait, SetupTaskApp,
};

/// One step of the push-plan preparation pipeline.
pub trait PreparePushPlan: Send + Sync {
    /// Stable step name, used to inspect sequence composition.
    fn name(&self) -> &'static str;

    fn prepare(&self, plan: PushPlan, overrides: &FlagOverrides) -> CoreResult<PushPlan>;
}

/// Ordered list of preparation steps.
#[derive(Clone, Default)]
pub struct PushPlanSequence {
    steps: Vec<Arc<dyn PreparePushPlan>>,
}

impl PushPlanSequence {
    #[inline]
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Reference preparation order.
    pub fn standard(gatherer: Arc<dyn ResourceGatherer>) -> Self {
        Self::new()
            .with_step(SetDefaultBitsPath::default())
            .with_step(SetupDropletPath)
            .with_step(SetupAllResources::new(gatherer))
            .with_step(SetupDeploymentInformation)
            .with_step(SetupNoStart)
            .with_step(SetupNoWait)
            .with_step(SetupTaskApp)
    }

    #[inline]
    pub fn push(&mut self, step: Arc<dyn PreparePushPlan>) {
        self.steps.push(step);
    }

    #[inline]
    pub fn with_step<S: PreparePushPlan + 'static>(mut self, step: S) -> Self {
        self.steps.push(Arc::new(step));
        self
    }

    /// Step names in execution order.
    pub fn names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[instrument(level = "debug", skip_all, fields(app = %plan.app_name))]
    pub fn run(&self, plan: PushPlan, overrides: &FlagOverrides) -> CoreResult<PushPlan> {
        let mut current = plan;
        for step in &self.steps {
            trace!(step = step.name(), "running push plan step");
            current = step
                .prepare(current, overrides)
                .inspect_err(|e| debug!(step = step.name(), error = %e, "push plan step failed"))?;
        }
        Ok(current)
    }
}

impl fmt::Debug for PushPlanSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
