//! The `check` use case: resolve a view's condition and decide one request.

use anyhow::Context;
use conditions_domain::{Target, decide};
use conditions_settings::{Overrides, ResolvedConfig};
use conditions_types::{Decision, Level, RequestSnapshot};
use tracing::info;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// View whose condition is evaluated.
    pub view: &'a str,
    /// The request being authorized.
    pub request: RequestSnapshot,
    /// Which permission check to run.
    pub level: Level,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub decision: Decision,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Parse and resolve a config; an empty text yields the defaults.
pub fn load_config(config_text: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let cfg = if config_text.trim().is_empty() {
        conditions_settings::ConditionsConfigV1::default()
    } else {
        conditions_settings::parse_config_toml(config_text).context("parse config")?
    };

    conditions_settings::resolve_config(cfg, overrides).context("resolve config")
}

/// Parse a request snapshot from JSON, normalizing the method to upper case.
pub fn parse_request_json(text: &str) -> anyhow::Result<RequestSnapshot> {
    let mut request: RequestSnapshot =
        serde_json::from_str(text).context("parse request snapshot")?;
    request.method = request.method.trim().to_ascii_uppercase();
    Ok(request)
}

/// Run the check use case: parse config, look up the view, evaluate its condition.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let resolved = load_config(input.config_text, input.overrides)?;

    if !resolved.has_view(input.view) {
        let known: Vec<&str> = resolved.views.keys().map(String::as_str).collect();
        anyhow::bail!(
            "unknown view `{}` (configured views: {})",
            input.view,
            if known.is_empty() {
                "none".to_string()
            } else {
                known.join(", ")
            }
        );
    }

    let mut request = input.request;
    if request.parent_lookup_kwarg.is_none() {
        request.parent_lookup_kwarg = resolved.parent_lookup_kwarg.clone();
    }

    // The snapshot carries no domain object; object-level leaves only see the request.
    let target = match input.level {
        Level::Collective => Target::Collective,
        Level::Object => Target::Object(&()),
    };

    let decision = decide(resolved.condition_for(input.view), &request, target);
    info!(
        view = input.view,
        level = decision.level.as_str(),
        outcome = decision.outcome.as_str(),
        permitted = decision.permitted,
        "checked request"
    );

    Ok(CheckOutput {
        decision,
        resolved_config: resolved,
    })
}

/// Process exit code for a decision: 0 when permitted, 2 otherwise.
pub fn decision_exit_code(decision: &Decision) -> i32 {
    if decision.permitted { 0 } else { 2 }
}
