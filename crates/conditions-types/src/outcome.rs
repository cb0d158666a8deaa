use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of evaluating one condition against one request.
///
/// `Abstain` is an explicit "no opinion" vote. It is only ever narrowed to a
/// denial at the outermost permission boundary, never inside a condition tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TriState {
    Permit,
    Deny,
    Abstain,
}

impl TriState {
    pub const ALL: [TriState; 3] = [TriState::Permit, TriState::Deny, TriState::Abstain];

    pub fn is_permit(self) -> bool {
        self == TriState::Permit
    }

    pub fn is_deny(self) -> bool {
        self == TriState::Deny
    }

    pub fn is_abstain(self) -> bool {
        self == TriState::Abstain
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TriState::Permit => "permit",
            TriState::Deny => "deny",
            TriState::Abstain => "abstain",
        }
    }
}

impl From<bool> for TriState {
    fn from(value: bool) -> Self {
        if value {
            TriState::Permit
        } else {
            TriState::Deny
        }
    }
}

impl fmt::Display for TriState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
