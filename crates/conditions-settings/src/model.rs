use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SCHEMA_CONFIG_V1: &str = "conditions.config.v1";

/// `conditions.toml` schema v1.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ConditionsConfigV1 {
    /// Optional schema string for tooling (`conditions.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Route parameter holding the parent user id for `nested_resource_owner`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_lookup_kwarg: Option<String>,

    /// Reusable named condition definitions.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub conditions: BTreeMap<String, ConditionExpr>,

    /// Map of view name -> config.
    #[serde(default)]
    pub views: BTreeMap<String, ViewConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ViewConfig {
    /// Condition guarding the view. Absent means permit everything.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<ConditionExpr>,
}

/// A condition expression: a name, or an operation over sub-expressions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ConditionExpr {
    /// Builtin condition ID or a key of `[conditions]`.
    Name(String),
    Operation(Operation),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Left-folded conjunction of one or more operands.
    And(Vec<ConditionExpr>),
    /// Left-folded disjunction of one or more operands.
    Or(Vec<ConditionExpr>),
    Not(Box<ConditionExpr>),
    /// Exact request method match.
    Method(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_expressions() {
        let cfg: ConditionsConfigV1 = toml::from_str(
            r#"
[views.articles]
condition = { and = ["authenticated", { or = ["read", { not = "staff" }] }] }
"#,
        )
        .unwrap();

        let expected = ConditionExpr::Operation(Operation::And(vec![
            ConditionExpr::Name("authenticated".to_string()),
            ConditionExpr::Operation(Operation::Or(vec![
                ConditionExpr::Name("read".to_string()),
                ConditionExpr::Operation(Operation::Not(Box::new(ConditionExpr::Name(
                    "staff".to_string(),
                )))),
            ])),
        ]));
        assert_eq!(cfg.views["articles"].condition, Some(expected));
    }

    #[test]
    fn view_without_condition_parses() {
        let cfg: ConditionsConfigV1 = toml::from_str("[views.health]\n").unwrap();
        assert_eq!(cfg.views["health"], ViewConfig::default());
    }

    #[test]
    fn method_operation_parses() {
        let cfg: ConditionsConfigV1 =
            toml::from_str("[views.uploads]\ncondition = { method = \"PUT\" }\n").unwrap();
        assert_eq!(
            cfg.views["uploads"].condition,
            Some(ConditionExpr::Operation(Operation::Method("PUT".to_string())))
        );
    }
}
