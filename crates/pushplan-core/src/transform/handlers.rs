//! Built-in override handlers and the reference sequences composed from them.
//!
//! The scale fields (instances, memory, disk, log rate limit) come in two
//! flavours: the plain handler is active for a push without a deployment
//! strategy, the `*_for_deployment` handler only during a rolling or canary
//! deployment. Start command and health check handlers are not gated.
use pushplan_model::HealthCheckType;

use crate::transform::{FieldAccessor, FieldOverride, ManifestTransformSequence, StrategyGate};

pub type GatedOverride<T> = StrategyGate<FieldOverride<T>>;

pub fn instances_override() -> GatedOverride<u32> {
    StrategyGate::without_deployment(
        "handle_instances_override",
        FieldOverride::new("instances", FieldAccessor::INSTANCES),
    )
}

pub fn instances_override_for_deployment() -> GatedOverride<u32> {
    StrategyGate::for_deployment(
        "handle_instances_override_for_deployment",
        FieldOverride::new("instances", FieldAccessor::INSTANCES),
    )
}

pub fn memory_override() -> GatedOverride<String> {
    StrategyGate::without_deployment(
        "handle_memory_override",
        FieldOverride::new("memory", FieldAccessor::MEMORY),
    )
}

pub fn memory_override_for_deployment() -> GatedOverride<String> {
    StrategyGate::for_deployment(
        "handle_memory_override_for_deployment",
        FieldOverride::new("memory", FieldAccessor::MEMORY),
    )
}

pub fn disk_override() -> GatedOverride<String> {
    StrategyGate::without_deployment(
        "handle_disk_override",
        FieldOverride::new("disk", FieldAccessor::DISK),
    )
}

pub fn disk_override_for_deployment() -> GatedOverride<String> {
    StrategyGate::for_deployment(
        "handle_disk_override_for_deployment",
        FieldOverride::new("disk", FieldAccessor::DISK),
    )
}

pub fn log_rate_limit_override() -> GatedOverride<String> {
    StrategyGate::without_deployment(
        "handle_log_rate_limit_override",
        FieldOverride::new("log_rate_limit", FieldAccessor::LOG_RATE_LIMIT),
    )
}

pub fn log_rate_limit_override_for_deployment() -> GatedOverride<String> {
    StrategyGate::for_deployment(
        "handle_log_rate_limit_override_for_deployment",
        FieldOverride::new("log_rate_limit", FieldAccessor::LOG_RATE_LIMIT),
    )
}

pub fn start_command_override() -> FieldOverride<String> {
    FieldOverride::new("handle_start_command_override", FieldAccessor::START_COMMAND)
}

pub fn health_check_type_override() -> FieldOverride<HealthCheckType> {
    FieldOverride::new(
        "handle_health_check_type_override",
        FieldAccessor::HEALTH_CHECK_TYPE,
    )
}

pub fn health_check_endpoint_override() -> FieldOverride<String> {
    FieldOverride::new(
        "handle_health_check_endpoint_override",
        FieldAccessor::HEALTH_CHECK_ENDPOINT,
    )
}

pub fn health_check_timeout_override() -> FieldOverride<u64> {
    FieldOverride::new(
        "handle_health_check_timeout_override",
        FieldAccessor::HEALTH_CHECK_TIMEOUT,
    )
}

/// Override sequence applied to the manifest of every push.
pub fn transform_manifest_sequence() -> ManifestTransformSequence {
    ManifestTransformSequence::new()
        .with_step(instances_override())
        .with_step(memory_override())
        .with_step(disk_override())
        .with_step(log_rate_limit_override())
        .with_step(start_command_override())
        .with_step(health_check_type_override())
        .with_step(health_check_endpoint_override())
        .with_step(health_check_timeout_override())
}

/// Override sequence producing the scale values submitted with a deployment.
pub fn transform_manifest_sequence_for_deployment() -> ManifestTransformSequence {
    ManifestTransformSequence::new()
        .with_step(instances_override_for_deployment())
        .with_step(memory_override_for_deployment())
        .with_step(disk_override_for_deployment())
        .with_step(log_rate_limit_override_for_deployment())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::CoreError, transform::TransformManifest};
    use pushplan_model::{Application, DeploymentStrategy, FlagOverrides, Manifest, Process};

    fn single_app(processes: Vec<Process>) -> Manifest {
        Manifest::new(vec![Application {
            processes,
            ..Default::default()
        }])
    }

    fn with_log_rate_limit(process_type: &str, value: &str) -> Process {
        Process {
            log_rate_limit: Some(value.into()),
            ..Process::of_type(process_type)
        }
    }

    fn log_rate_limit(value: &str) -> FlagOverrides {
        FlagOverrides {
            log_rate_limit: Some(value.into()),
            ..Default::default()
        }
    }

    mod log_rate_limit_plain {
        use super::*;

        #[test]
        fn unset_flag_does_not_change_manifest() {
            let m = single_app(vec![
                Process::of_type("web"),
                with_log_rate_limit("worker", "1B"),
            ]);

            let out = log_rate_limit_override()
                .transform(&m, &FlagOverrides::default())
                .unwrap();
            assert_eq!(out, m);
        }

        #[test]
        fn sets_web_process_value() {
            let m = single_app(vec![Process::of_type("web")]);

            let out = log_rate_limit_override()
                .transform(&m, &log_rate_limit("64K"))
                .unwrap();
            assert_eq!(out, single_app(vec![with_log_rate_limit("web", "64K")]));
        }

        #[test]
        fn active_strategy_leaves_manifest_alone() {
            let m = single_app(vec![Process::of_type("web")]);
            let o = log_rate_limit("64K").with_strategy(DeploymentStrategy::Rolling);

            let out = log_rate_limit_override().transform(&m, &o).unwrap();
            assert_eq!(out, m);
        }

        #[test]
        fn non_web_only_sets_application_value() {
            let m = single_app(vec![Process::of_type("worker")]);

            let out = log_rate_limit_override()
                .transform(&m, &log_rate_limit("32B"))
                .unwrap();

            let expected = Manifest::new(vec![Application {
                log_rate_limit: Some("32B".into()),
                processes: vec![Process::of_type("worker")],
                ..Default::default()
            }]);
            assert_eq!(out, expected);
        }

        #[test]
        fn web_among_others_keeps_application_value() {
            let m = Manifest::new(vec![Application {
                log_rate_limit: Some("1GB".into()),
                processes: vec![Process::of_type("worker"), Process::of_type("web")],
                ..Default::default()
            }]);

            let out = log_rate_limit_override()
                .transform(&m, &log_rate_limit("4MB"))
                .unwrap();

            let expected = Manifest::new(vec![Application {
                log_rate_limit: Some("1GB".into()),
                processes: vec![
                    Process::of_type("worker"),
                    with_log_rate_limit("web", "4MB"),
                ],
                ..Default::default()
            }]);
            assert_eq!(out, expected);
        }

        #[test]
        fn multiple_apps_is_an_error() {
            let m = Manifest::new(vec![Application::default(), Application::default()]);

            let err = log_rate_limit_override()
                .transform(&m, &log_rate_limit("64M"))
                .unwrap_err();
            assert!(matches!(
                err,
                CoreError::AmbiguousApplicationTarget { flag: "-l" }
            ));
        }
    }

    mod log_rate_limit_deployment {
        use super::*;

        #[test]
        fn unset_flag_does_not_change_manifest() {
            let m = single_app(vec![
                Process::of_type("web"),
                with_log_rate_limit("worker", "1B"),
            ]);
            let o = FlagOverrides::default().with_strategy(DeploymentStrategy::Rolling);

            let out = log_rate_limit_override_for_deployment()
                .transform(&m, &o)
                .unwrap();
            assert_eq!(out, m);
        }

        #[test]
        fn sets_web_process_value_with_canary() {
            let m = single_app(vec![Process::of_type("web")]);
            let o = log_rate_limit("64K").with_strategy(DeploymentStrategy::Canary);

            let out = log_rate_limit_override_for_deployment()
                .transform(&m, &o)
                .unwrap();
            assert_eq!(out, single_app(vec![with_log_rate_limit("web", "64K")]));
        }

        #[test]
        fn missing_strategy_leaves_manifest_alone() {
            let m = single_app(vec![Process::of_type("web")]);

            let out = log_rate_limit_override_for_deployment()
                .transform(&m, &log_rate_limit("64K"))
                .unwrap();
            assert_eq!(out, m);
        }

        #[test]
        fn non_web_only_sets_application_value() {
            let m = single_app(vec![Process::of_type("worker")]);
            let o = log_rate_limit("32B").with_strategy(DeploymentStrategy::Rolling);

            let out = log_rate_limit_override_for_deployment()
                .transform(&m, &o)
                .unwrap();
            assert_eq!(out.applications[0].log_rate_limit.as_deref(), Some("32B"));
            assert_eq!(out.applications[0].processes, vec![Process::of_type("worker")]);
        }

        #[test]
        fn multiple_apps_is_an_error() {
            let m = Manifest::new(vec![Application::default(), Application::default()]);
            let o = log_rate_limit("64M").with_strategy(DeploymentStrategy::Rolling);

            let res = log_rate_limit_override_for_deployment().transform(&m, &o);
            assert!(matches!(
                res,
                Err(CoreError::AmbiguousApplicationTarget { .. })
            ));
        }

        #[test]
        fn multiple_apps_without_strategy_is_not_an_error() {
            let m = Manifest::new(vec![Application::default(), Application::default()]);

            let out = log_rate_limit_override_for_deployment()
                .transform(&m, &log_rate_limit("64M"))
                .unwrap();
            assert_eq!(out, m);
        }
    }

    #[test]
    fn scale_handlers_target_their_own_field() {
        let m = single_app(vec![Process::of_type("web")]);
        let o = FlagOverrides {
            instances: Some(3),
            memory: Some("1G".into()),
            disk: Some("2G".into()),
            ..Default::default()
        };

        let out = instances_override().transform(&m, &o).unwrap();
        assert_eq!(out.applications[0].processes[0].instances, Some(3));
        assert_eq!(out.applications[0].processes[0].memory, None);

        let out = memory_override().transform(&m, &o).unwrap();
        assert_eq!(out.applications[0].processes[0].memory.as_deref(), Some("1G"));
        assert_eq!(out.applications[0].processes[0].instances, None);

        let out = disk_override().transform(&m, &o).unwrap();
        assert_eq!(
            out.applications[0].processes[0].disk_quota.as_deref(),
            Some("2G")
        );
    }

    #[test]
    fn health_check_handlers_apply_regardless_of_strategy() {
        let m = single_app(vec![Process::of_type("worker")]);
        let o = FlagOverrides {
            start_command: Some("bin/run".into()),
            health_check_type: Some(HealthCheckType::Http),
            health_check_endpoint: Some("/healthz".into()),
            health_check_timeout: Some(30),
            ..Default::default()
        }
        .with_strategy(DeploymentStrategy::Rolling);

        let out = transform_manifest_sequence().run(&m, &o).unwrap();
        let app = &out.applications[0];

        assert_eq!(app.command.as_deref(), Some("bin/run"));
        assert_eq!(app.health_check_type, Some(HealthCheckType::Http));
        assert_eq!(app.health_check_http_endpoint.as_deref(), Some("/healthz"));
        assert_eq!(app.health_check_timeout, Some(30));
        assert_eq!(app.processes, vec![Process::of_type("worker")]);
    }

    #[test]
    fn plain_sequence_order() {
        assert_eq!(
            transform_manifest_sequence().names(),
            vec![
                "handle_instances_override",
                "handle_memory_override",
                "handle_disk_override",
                "handle_log_rate_limit_override",
                "handle_start_command_override",
                "handle_health_check_type_override",
                "handle_health_check_endpoint_override",
                "handle_health_check_timeout_override",
            ]
        );
    }

    #[test]
    fn deployment_sequence_order() {
        assert_eq!(
            transform_manifest_sequence_for_deployment().names(),
            vec![
                "handle_instances_override_for_deployment",
                "handle_memory_override_for_deployment",
                "handle_disk_override_for_deployment",
                "handle_log_rate_limit_override_for_deployment",
            ]
        );
    }

    #[test]
    fn deployment_sequence_applies_all_scale_fields() {
        let m = single_app(vec![Process::of_type("web")]);
        let o = FlagOverrides {
            instances: Some(4),
            memory: Some("512M".into()),
            disk: Some("1G".into()),
            log_rate_limit: Some("16K".into()),
            ..Default::default()
        }
        .with_strategy(DeploymentStrategy::Rolling);

        let plain = transform_manifest_sequence().run(&m, &o).unwrap();
        assert_eq!(plain, m);

        let out = transform_manifest_sequence_for_deployment()
            .run(&m, &o)
            .unwrap();
        let web = &out.applications[0].processes[0];
        assert_eq!(web.instances, Some(4));
        assert_eq!(web.memory.as_deref(), Some("512M"));
        assert_eq!(web.disk_quota.as_deref(), Some("1G"));
        assert_eq!(web.log_rate_limit.as_deref(), Some("16K"));
    }

    #[test]
    fn sequence_stops_on_first_ambiguous_target() {
        let m = Manifest::new(vec![Application::new("a"), Application::new("b")]);
        let o = FlagOverrides {
            memory: Some("1G".into()),
            disk: Some("2G".into()),
            ..Default::default()
        };

        let err = transform_manifest_sequence().run(&m, &o).unwrap_err();
        assert!(matches!(
            err,
            CoreError::AmbiguousApplicationTarget { flag: "-m" }
        ));
    }
}
