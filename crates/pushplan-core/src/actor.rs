//! Entry point bundling the preparation and override sequences of a push.
use std::sync::Arc;

use pushplan_model::{FlagOverrides, Manifest, PushPlan};
use tracing::{debug, instrument};

use crate::{
    error::CoreResult,
    prepare::{PushPlanSequence, ResourceGatherer},
    transform::{
        ManifestTransformSequence, transform_manifest_sequence,
        transform_manifest_sequence_for_deployment,
    },
};

/// Owns the three ordered sequences used while pushing an application.
///
/// The sequences are plain values: callers may inspect them with `names()`
/// or replace them through the `with_*` builders.
#[derive(Debug)]
pub struct PushActor {
    prepare_push_plan_sequence: PushPlanSequence,
    transform_manifest_sequence: ManifestTransformSequence,
    transform_manifest_sequence_for_deployment: ManifestTransformSequence,
}

impl PushActor {
    /// Actor with the reference sequences.
    pub fn new(gatherer: Arc<dyn ResourceGatherer>) -> Self {
        Self {
            prepare_push_plan_sequence: PushPlanSequence::standard(gatherer),
            transform_manifest_sequence: transform_manifest_sequence(),
            transform_manifest_sequence_for_deployment: transform_manifest_sequence_for_deployment(),
        }
    }

    pub fn with_prepare_push_plan_sequence(mut self, seq: PushPlanSequence) -> Self {
        self.prepare_push_plan_sequence = seq;
        self
    }

    pub fn with_transform_manifest_sequence(mut self, seq: ManifestTransformSequence) -> Self {
        self.transform_manifest_sequence = seq;
        self
    }

    pub fn with_transform_manifest_sequence_for_deployment(
        mut self,
        seq: ManifestTransformSequence,
    ) -> Self {
        self.transform_manifest_sequence_for_deployment = seq;
        self
    }

    pub fn prepare_push_plan_sequence(&self) -> &PushPlanSequence {
        &self.prepare_push_plan_sequence
    }

    pub fn transform_manifest_sequence(&self) -> &ManifestTransformSequence {
        &self.transform_manifest_sequence
    }

    pub fn transform_manifest_sequence_for_deployment(&self) -> &ManifestTransformSequence {
        &self.transform_manifest_sequence_for_deployment
    }

    /// Run the preparation sequence over `plan`.
    pub fn prepare_push_plan(
        &self,
        plan: PushPlan,
        overrides: &FlagOverrides,
    ) -> CoreResult<PushPlan> {
        self.prepare_push_plan_sequence.run(plan, overrides)
    }

    /// Apply command-line overrides to the manifest of a push.
    #[instrument(level = "debug", skip_all, fields(apps = manifest.applications.len()))]
    pub fn handle_flag_overrides(
        &self,
        manifest: &Manifest,
        overrides: &FlagOverrides,
    ) -> CoreResult<Manifest> {
        let out = self.transform_manifest_sequence.run(manifest, overrides)?;
        debug!(changed = out != *manifest, "flag overrides resolved");
        Ok(out)
    }

    /// Apply the scale overrides that belong to a rolling or canary deployment.
    ///
    /// Without an active strategy every step is a no-op.
    #[instrument(level = "debug", skip_all, fields(apps = manifest.applications.len()))]
    pub fn handle_deployment_flag_overrides(
        &self,
        manifest: &Manifest,
        overrides: &FlagOverrides,
    ) -> CoreResult<Manifest> {
        let out = self
            .transform_manifest_sequence_for_deployment
            .run(manifest, overrides)?;
        debug!(changed = out != *manifest, "deployment flag overrides resolved");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::error::CoreError;
    use pushplan_model::{Application, DeploymentStrategy, Process, Resource};

    struct NoResources;

    impl ResourceGatherer for NoResources {
        fn gather_directory_resources(&self, _path: &Path) -> CoreResult<Vec<Resource>> {
            Ok(Vec::new())
        }

        fn gather_archive_resources(&self, _path: &Path) -> CoreResult<Vec<Resource>> {
            Err(CoreError::Resources("archives unsupported".into()))
        }
    }

    fn actor() -> PushActor {
        PushActor::new(Arc::new(NoResources))
    }

    fn web_app() -> Manifest {
        Manifest::new(vec![Application {
            name: "dora".into(),
            processes: vec![Process::of_type("web"), Process::of_type("worker")],
            ..Default::default()
        }])
    }

    #[test]
    fn exposes_reference_sequences() {
        let a = actor();
        assert_eq!(a.prepare_push_plan_sequence().len(), 7);
        assert_eq!(a.transform_manifest_sequence().len(), 8);
        assert_eq!(
            a.transform_manifest_sequence_for_deployment().names(),
            vec![
                "handle_instances_override_for_deployment",
                "handle_memory_override_for_deployment",
                "handle_disk_override_for_deployment",
                "handle_log_rate_limit_override_for_deployment",
            ]
        );
    }

    #[test]
    fn plain_push_applies_scale_overrides() {
        let o = FlagOverrides {
            instances: Some(2),
            log_rate_limit: Some("64K".into()),
            ..Default::default()
        };

        let out = actor().handle_flag_overrides(&web_app(), &o).unwrap();
        let web = &out.applications[0].processes[0];
        assert_eq!(web.instances, Some(2));
        assert_eq!(web.log_rate_limit.as_deref(), Some("64K"));
        assert_eq!(out.applications[0].processes[1], Process::of_type("worker"));

        let deploy = actor()
            .handle_deployment_flag_overrides(&web_app(), &o)
            .unwrap();
        assert_eq!(deploy, web_app());
    }

    #[test]
    fn rolling_push_defers_scale_overrides_to_deployment() {
        let o = FlagOverrides {
            memory: Some("1G".into()),
            ..Default::default()
        }
        .with_strategy(DeploymentStrategy::Rolling);

        let plain = actor().handle_flag_overrides(&web_app(), &o).unwrap();
        assert_eq!(plain, web_app());

        let deploy = actor()
            .handle_deployment_flag_overrides(&web_app(), &o)
            .unwrap();
        assert_eq!(
            deploy.applications[0].processes[0].memory.as_deref(),
            Some("1G")
        );
    }

    #[test]
    fn prepare_surfaces_collaborator_errors() {
        let a = actor().with_prepare_push_plan_sequence(
            PushPlanSequence::new()
                .with_step(crate::prepare::SetDefaultBitsPath::with_working_dir(
                    Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml"),
                ))
                .with_step(crate::prepare::SetupAllResources::new(Arc::new(NoResources))),
        );

        let res = a.prepare_push_plan(PushPlan::new("dora"), &FlagOverrides::default());
        assert!(matches!(res, Err(CoreError::Resources(_))));
    }

    #[test]
    fn replaced_sequences_are_used() {
        let a = actor().with_transform_manifest_sequence(ManifestTransformSequence::new());
        let o = FlagOverrides {
            instances: Some(9),
            ..Default::default()
        };

        let out = a.handle_flag_overrides(&web_app(), &o).unwrap();
        assert_eq!(out, web_app());
    }
}
