use pushplan_model::{DeploymentStrategy, FlagOverrides, Manifest};
use tracing::trace;

use crate::{error::CoreResult, transform::TransformManifest};

/// Deployment-strategy precondition of a [`StrategyGate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyCondition {
    /// Run only when a deployment strategy (rolling, canary, ...) is requested.
    Active,
    /// Run only for a plain push without a deployment strategy.
    Inactive,
}

impl StrategyCondition {
    #[inline]
    pub fn admits(&self, strategy: DeploymentStrategy) -> bool {
        match self {
            StrategyCondition::Active => strategy.is_active(),
            StrategyCondition::Inactive => !strategy.is_active(),
        }
    }
}

/// Wraps a transform step and short-circuits to a no-op when the requested
/// deployment strategy does not satisfy the condition.
///
/// When the condition holds the inner step runs unchanged, including its
/// single-application validation.
pub struct StrategyGate<H> {
    name: &'static str,
    condition: StrategyCondition,
    inner: H,
}

impl<H: TransformManifest> StrategyGate<H> {
    pub const fn new(name: &'static str, condition: StrategyCondition, inner: H) -> Self {
        Self {
            name,
            condition,
            inner,
        }
    }

    /// Gate that only lets `inner` run during a rolling or canary deployment.
    pub const fn for_deployment(name: &'static str, inner: H) -> Self {
        Self::new(name, StrategyCondition::Active, inner)
    }

    /// Gate that only lets `inner` run for a push without a deployment.
    pub const fn without_deployment(name: &'static str, inner: H) -> Self {
        Self::new(name, StrategyCondition::Inactive, inner)
    }
}

impl<H: TransformManifest> TransformManifest for StrategyGate<H> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn transform(&self, manifest: &Manifest, overrides: &FlagOverrides) -> CoreResult<Manifest> {
        if !self.condition.admits(overrides.strategy) {
            trace!(
                step = self.name,
                strategy = %overrides.strategy,
                "strategy gate closed, skipping"
            );
            return Ok(manifest.clone());
        }
        self.inner.transform(manifest, overrides)
    }
}
