use std::{fs, path::PathBuf, sync::Arc};

use pushplan_model::{DeploymentStrategy, FlagOverrides, PushPlan};
use tracing::debug;

use crate::{
    error::{CoreError, CoreResult},
    prepare::{PreparePushPlan, ResourceGatherer},
};

/// Defaults the bits path to the working directory when the plan has no
/// other source (bits, droplet or docker image).
#[derive(Clone, Debug, Default)]
pub struct SetDefaultBitsPath {
    /// Directory used instead of the process working directory.
    working_dir: Option<PathBuf>,
}

impl SetDefaultBitsPath {
    pub fn with_working_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: Some(dir.into()),
        }
    }

    fn working_dir(&self) -> CoreResult<PathBuf> {
        match &self.working_dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().map_err(CoreError::WorkingDirectory),
        }
    }
}

impl PreparePushPlan for SetDefaultBitsPath {
    fn name(&self) -> &'static str {
        "set_default_bits_path_for_push_plan"
    }

    fn prepare(&self, mut plan: PushPlan, overrides: &FlagOverrides) -> CoreResult<PushPlan> {
        let has_source = plan.bits_path.is_some()
            || plan.droplet_path.is_some()
            || overrides.droplet_path.is_some()
            || plan.is_docker();

        if !has_source {
            let dir = self.working_dir()?;
            debug!(bits_path = %dir.display(), "defaulting bits path");
            plan.bits_path = Some(dir);
        }
        Ok(plan)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SetupDropletPath;

impl PreparePushPlan for SetupDropletPath {
    fn name(&self) -> &'static str {
        "setup_droplet_path_for_push_plan"
    }

    fn prepare(&self, mut plan: PushPlan, overrides: &FlagOverrides) -> CoreResult<PushPlan> {
        if let Some(path) = &overrides.droplet_path {
            plan.droplet_path = Some(path.clone());
        }
        Ok(plan)
    }
}

/// Gathers the resources of the bits path, unless the app is pushed from a
/// droplet or a docker image.
pub struct SetupAllResources {
    gatherer: Arc<dyn ResourceGatherer>,
}

impl SetupAllResources {
    pub fn new(gatherer: Arc<dyn ResourceGatherer>) -> Self {
        Self { gatherer }
    }
}

impl PreparePushPlan for SetupAllResources {
    fn name(&self) -> &'static str {
        "setup_all_resources_for_push_plan"
    }

    fn prepare(&self, mut plan: PushPlan, _overrides: &FlagOverrides) -> CoreResult<PushPlan> {
        if plan.droplet_path.is_some() || plan.is_docker() {
            return Ok(plan);
        }
        let Some(bits_path) = plan.bits_path.clone() else {
            return Err(CoreError::BitsPathNotSet);
        };

        let meta = fs::metadata(&bits_path).map_err(|source| CoreError::BitsPath {
            path: bits_path.clone(),
            source,
        })?;

        let archive = !meta.is_dir();
        let resources = if archive {
            self.gatherer.gather_archive_resources(&bits_path)?
        } else {
            self.gatherer.gather_directory_resources(&bits_path)?
        };

        debug!(
            bits_path = %bits_path.display(),
            archive,
            resources = resources.len(),
            "gathered app resources"
        );
        plan.all_resources = resources;
        plan.archive = archive;
        Ok(plan)
    }
}

/// Copies the deployment strategy and its tuning knobs into the plan.
///
/// `max_in_flight` only applies to an active strategy and `instance_steps`
/// only to canary deployments.
#[derive(Clone, Copy, Debug, Default)]
pub struct SetupDeploymentInformation;

impl PreparePushPlan for SetupDeploymentInformation {
    fn name(&self) -> &'static str {
        "setup_deployment_information_for_push_plan"
    }

    fn prepare(&self, mut plan: PushPlan, overrides: &FlagOverrides) -> CoreResult<PushPlan> {
        plan.strategy = overrides.strategy;

        if overrides.strategy.is_active() {
            if let Some(max) = overrides.max_in_flight {
                plan.max_in_flight = Some(max);
            }
        }
        if overrides.strategy == DeploymentStrategy::Canary && !overrides.instance_steps.is_empty()
        {
            plan.instance_steps = overrides.instance_steps.clone();
        }
        Ok(plan)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SetupNoStart;

impl PreparePushPlan for SetupNoStart {
    fn name(&self) -> &'static str {
        "setup_no_start_for_push_plan"
    }

    fn prepare(&self, mut plan: PushPlan, overrides: &FlagOverrides) -> CoreResult<PushPlan> {
        plan.no_start = overrides.no_start;
        Ok(plan)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SetupNoWait;

impl PreparePushPlan for SetupNoWait {
    fn name(&self) -> &'static str {
        "setup_no_wait_for_push_plan"
    }

    fn prepare(&self, mut plan: PushPlan, overrides: &FlagOverrides) -> CoreResult<PushPlan> {
        plan.no_wait = overrides.no_wait;
        Ok(plan)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SetupTaskApp;

impl PreparePushPlan for SetupTaskApp {
    fn name(&self) -> &'static str {
        "setup_task_app_for_push_plan"
    }

    fn prepare(&self, mut plan: PushPlan, overrides: &FlagOverrides) -> CoreResult<PushPlan> {
        if overrides.task {
            plan.task_type_application = true;
        }
        Ok(plan)
    }
}
