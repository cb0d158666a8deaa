//! Render decisions for terminal and machine consumers.

use conditions_types::Decision;

/// One-line human summary of a decision.
pub fn format_decision(view: &str, decision: &Decision) -> String {
    let verdict = if decision.permitted {
        "permitted"
    } else {
        "denied"
    };
    format!(
        "{verdict}: view `{view}` ({level} check)\n  condition: {condition}\n  outcome:   {outcome}\n",
        level = decision.level.as_str(),
        condition = decision.condition,
        outcome = decision.outcome,
    )
}

/// Pretty JSON receipt, newline terminated.
pub fn serialize_decision(decision: &Decision) -> anyhow::Result<String> {
    let mut out = serde_json::to_string_pretty(decision)?;
    out.push('\n');
    Ok(out)
}
