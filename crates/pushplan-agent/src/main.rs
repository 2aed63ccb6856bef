use std::sync::Arc;

use tracing::{info, warn};

use pushplan_core::{CoreError, PushActor};
use pushplan_observe::init_logger;

mod gatherer;
mod request;

use gatherer::ListingGatherer;
use request::{PushOutcome, PushRequest};

fn main() -> anyhow::Result<()> {
    // 1) request + logger
    let req = PushRequest::load()?;
    init_logger(&req.logger)?;
    info!(app = %req.plan.app_name, strategy = %req.overrides.strategy, "push request loaded");

    // 2) actor with the reference sequences
    let actor = PushActor::new(Arc::new(ListingGatherer));

    // 3) push plan
    let plan = actor.prepare_push_plan(req.plan, &req.overrides)?;
    info!(resources = plan.all_resources.len(), "push plan prepared");

    // 4) manifest overrides
    let manifest = actor
        .handle_flag_overrides(&req.manifest, &req.overrides)
        .inspect_err(|e| {
            if matches!(e, CoreError::AmbiguousApplicationTarget { .. }) {
                warn!("specify a single application to use command-line overrides");
            }
        })?;

    let deployment_manifest = if req.overrides.strategy.is_active() {
        Some(actor.handle_deployment_flag_overrides(&manifest, &req.overrides)?)
    } else {
        None
    };

    // 5) result
    let outcome = PushOutcome {
        plan,
        manifest,
        deployment_manifest,
    };
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
