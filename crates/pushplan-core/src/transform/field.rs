use std::fmt;

use pushplan_model::{Application, FlagOverrides, HealthCheckType, Manifest, Process};
use tracing::{debug, trace};

use crate::{
    error::{CoreError, CoreResult},
    transform::TransformManifest,
};

/// Value type that can be carried by a command-line override.
pub trait OverrideValue: Clone + fmt::Debug + Send + Sync + 'static {
    /// Returns `true` if the value means "no override requested".
    fn is_unset(&self) -> bool {
        false
    }
}

impl OverrideValue for String {
    fn is_unset(&self) -> bool {
        self.trim().is_empty()
    }
}

impl OverrideValue for u32 {}
impl OverrideValue for u64 {}
impl OverrideValue for HealthCheckType {}

/// Getter/setter set for one overridable field family.
///
/// The same field exists at the application level (default for all processes)
/// and on each process; the accessor exposes both slots plus the override value.
pub struct FieldAccessor<T> {
    /// Command-line flag reported in errors.
    pub flag: &'static str,
    pub requested: fn(&FlagOverrides) -> Option<&T>,
    pub application: fn(&mut Application) -> &mut Option<T>,
    pub process: fn(&mut Process) -> &mut Option<T>,
}

impl<T> Clone for FieldAccessor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FieldAccessor<T> {}

impl FieldAccessor<u32> {
    pub const INSTANCES: Self = Self {
        flag: "-i",
        requested: |o| o.instances.as_ref(),
        application: |a| &mut a.instances,
        process: |p| &mut p.instances,
    };
}

impl FieldAccessor<String> {
    pub const MEMORY: Self = Self {
        flag: "-m",
        requested: |o| o.memory.as_ref(),
        application: |a| &mut a.memory,
        process: |p| &mut p.memory,
    };

    pub const DISK: Self = Self {
        flag: "-k",
        requested: |o| o.disk.as_ref(),
        application: |a| &mut a.disk_quota,
        process: |p| &mut p.disk_quota,
    };

    pub const LOG_RATE_LIMIT: Self = Self {
        flag: "-l",
        requested: |o| o.log_rate_limit.as_ref(),
        application: |a| &mut a.log_rate_limit,
        process: |p| &mut p.log_rate_limit,
    };

    pub const START_COMMAND: Self = Self {
        flag: "-c",
        requested: |o| o.start_command.as_ref(),
        application: |a| &mut a.command,
        process: |p| &mut p.command,
    };

    pub const HEALTH_CHECK_ENDPOINT: Self = Self {
        flag: "--endpoint",
        requested: |o| o.health_check_endpoint.as_ref(),
        application: |a| &mut a.health_check_http_endpoint,
        process: |p| &mut p.health_check_http_endpoint,
    };
}

impl FieldAccessor<HealthCheckType> {
    pub const HEALTH_CHECK_TYPE: Self = Self {
        flag: "-u",
        requested: |o| o.health_check_type.as_ref(),
        application: |a| &mut a.health_check_type,
        process: |p| &mut p.health_check_type,
    };
}

impl FieldAccessor<u64> {
    pub const HEALTH_CHECK_TIMEOUT: Self = Self {
        flag: "-t",
        requested: |o| o.health_check_timeout.as_ref(),
        application: |a| &mut a.health_check_timeout,
        process: |p| &mut p.health_check_timeout,
    };
}

/// Applies one command-line override to a single-application manifest.
///
/// Rules:
/// - no override requested: manifest is returned unchanged;
/// - more than one application: [`CoreError::AmbiguousApplicationTarget`];
/// - zero applications: unchanged;
/// - the `web` process gets the value if it exists, otherwise the application
///   level does, so every process without its own value inherits it.
///
/// The override replaces any value already declared in the manifest.
pub struct FieldOverride<T> {
    name: &'static str,
    accessor: FieldAccessor<T>,
}

impl<T: OverrideValue> FieldOverride<T> {
    pub const fn new(name: &'static str, accessor: FieldAccessor<T>) -> Self {
        Self { name, accessor }
    }

    fn requested<'a>(&self, overrides: &'a FlagOverrides) -> Option<&'a T> {
        (self.accessor.requested)(overrides).filter(|v| !v.is_unset())
    }
}

impl<T: OverrideValue> TransformManifest for FieldOverride<T> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn transform(&self, manifest: &Manifest, overrides: &FlagOverrides) -> CoreResult<Manifest> {
        let Some(value) = self.requested(overrides) else {
            trace!(step = self.name, "no override requested");
            return Ok(manifest.clone());
        };

        if manifest.has_multiple_applications() {
            return Err(CoreError::AmbiguousApplicationTarget {
                flag: self.accessor.flag,
            });
        }

        if manifest.applications.is_empty() {
            trace!(step = self.name, "manifest has no applications");
            return Ok(manifest.clone());
        }

        let mut out = manifest.clone();
        if let Some(app) = out.applications.first_mut() {
            match app.web_process_mut() {
                Some(web) => {
                    *(self.accessor.process)(web) = Some(value.clone());
                    debug!(step = self.name, value = ?value, "override applied to web process");
                }
                None => {
                    *(self.accessor.application)(app) = Some(value.clone());
                    debug!(step = self.name, value = ?value, "override applied to application");
                }
            }
        }
        Ok(out)
    }
}
