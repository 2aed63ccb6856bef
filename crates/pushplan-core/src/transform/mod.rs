//! Manifest override pipeline.
//!
//! Each [`TransformManifest`] step owns one overridable field family and maps
//! `(manifest, overrides)` to a new manifest. A [`ManifestTransformSequence`]
//! threads the manifest through its steps in registration order and stops at
//! the first error.
use std::{fmt, sync::Arc};

use pushplan_model::{FlagOverrides, Manifest};
use tracing::{debug, instrument, trace};

use crate::error::CoreResult;

mod field;
pub use field::{FieldAccessor, FieldOverride, OverrideValue};

mod gate;
pub use gate::{StrategyCondition, StrategyGate};

mod handlers;
pub use handlers::*;

/// One step of the manifest override pipeline.
///
/// Implementations must not mutate shared state: the result depends only on
/// the manifest and the overrides passed in.
pub trait TransformManifest: Send + Sync {
    /// Stable step name, used to inspect sequence composition.
    fn name(&self) -> &'static str;

    /// Returns the transformed manifest, leaving `manifest` untouched.
    fn transform(&self, manifest: &Manifest, overrides: &FlagOverrides) -> CoreResult<Manifest>;
}

/// Ordered list of manifest transform steps.
#[derive(Clone, Default)]
pub struct ManifestTransformSequence {
    steps: Vec<Arc<dyn TransformManifest>>,
}

impl ManifestTransformSequence {
    /// Create an empty sequence.
    #[inline]
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step; steps run in the order they are pushed.
    #[inline]
    pub fn push(&mut self, step: Arc<dyn TransformManifest>) {
        self.steps.push(step);
    }

    /// Builder-style [`push`](Self::push).
    #[inline]
    pub fn with_step<S: TransformManifest + 'static>(mut self, step: S) -> Self {
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

    /// Run every step left to right.
    ///
    /// The first failing step aborts the run and its error is returned as is.
    #[instrument(level = "debug", skip_all, fields(steps = self.steps.len(), strategy = %overrides.strategy))]
    pub fn run(&self, manifest: &Manifest, overrides: &FlagOverrides) -> CoreResult<Manifest> {
        let mut current = manifest.clone();
        for step in &self.steps {
            trace!(step = step.name(), "running manifest transform");
            current = step
                .transform(&current, overrides)
                .inspect_err(|e| debug!(step = step.name(), error = %e, "manifest transform failed"))?;
        }
        Ok(current)
    }
}

impl fmt::Debug for ManifestTransformSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
