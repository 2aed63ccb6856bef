use std::{env, fs, path::PathBuf};

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};

use pushplan_model::{FlagOverrides, Manifest, PushPlan};
use pushplan_observe::LoggerConfig;

/// Environment variable consulted when no request path is given.
pub const REQUEST_ENV: &str = "PUSHPLAN_REQUEST";

/// Everything the agent needs for one push, read from a JSON document.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PushRequest {
    pub logger: LoggerConfig,
    pub manifest: Manifest,
    pub overrides: FlagOverrides,
    pub plan: PushPlan,
}

impl PushRequest {
    /// Parse a request; the plan's app name and docker image default to the
    /// first manifest application when not given explicitly.
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let mut req: PushRequest = serde_json::from_str(raw).context("invalid push request")?;
        if let Some(app) = req.manifest.applications.first() {
            if req.plan.app_name.is_empty() {
                req.plan.app_name = app.name.clone();
            }
            if req.plan.docker_image.is_none() {
                req.plan.docker_image = app.docker_image().map(str::to_owned);
            }
        }
        Ok(req)
    }

    /// Load from the first CLI argument, falling back to [`REQUEST_ENV`].
    pub fn load() -> anyhow::Result<Self> {
        let path = match env::args_os().nth(1) {
            Some(p) => PathBuf::from(p),
            None => match env::var_os(REQUEST_ENV) {
                Some(p) => PathBuf::from(p),
                None => bail!("usage: pushplan-agent <request.json> (or set {REQUEST_ENV})"),
            },
        };
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("cannot read push request {}", path.display()))?;
        Self::from_json(&raw)
    }
}

/// What the agent prints on stdout.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PushOutcome {
    pub plan: PushPlan,
    pub manifest: Manifest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_manifest: Option<Manifest>,
}
