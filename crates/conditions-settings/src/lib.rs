//! Config parsing and condition expression resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{ConditionExpr, ConditionsConfigV1, Operation, SCHEMA_CONFIG_V1, ViewConfig};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `conditions.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<ConditionsConfigV1> {
    let cfg: ConditionsConfigV1 = toml::from_str(input)?;
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
    }
    Ok(cfg)
}

/// Resolve every view's condition expression into a policy descriptor.
pub fn resolve_config(
    cfg: ConditionsConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

/// JSON schema of the config file.
pub fn config_schema() -> schemars::Schema {
    schemars::schema_for!(ConditionsConfigV1)
}
