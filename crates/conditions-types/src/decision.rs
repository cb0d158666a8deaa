use crate::TriState;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Stable schema identifier for decision receipts.
pub const SCHEMA_DECISION_V1: &str = "conditions.decision.v1";

/// Which of the two permission checks produced a decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Not tied to a specific object (list, create).
    Collective,
    /// About one target object (retrieve, update, destroy).
    Object,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Collective => "collective",
            Level::Object => "object",
        }
    }
}

/// Receipt for one permission check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Decision {
    pub schema: String,
    /// Diagnostic label of the evaluated condition.
    pub condition: String,
    pub level: Level,
    /// Raw tree outcome before narrowing.
    pub outcome: TriState,
    /// `true` only when `outcome` is `permit`.
    pub permitted: bool,
}

impl Decision {
    pub fn new(condition: impl Into<String>, level: Level, outcome: TriState) -> Self {
        Self {
            schema: SCHEMA_DECISION_V1.to_string(),
            condition: condition.into(),
            level,
            outcome,
            permitted: outcome.is_permit(),
        }
    }
}
