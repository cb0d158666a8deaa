//! Shared test utilities for the conditions workspace.
//!
//! Request fixtures are plain [`RequestSnapshot`] values so every crate can
//! use them without depending on the domain engine.

use conditions_types::{Caller, RequestSnapshot, ids};

/// Configuration exercising names, nesting, shared definitions and defaults.
pub const SAMPLE_CONFIG: &str = r#"
schema = "conditions.config.v1"

[conditions]
owner_or_staff = { or = ["nested_resource_owner", "staff"] }

[views.articles]
condition = { or = ["read", "staff"] }

[views.user-addresses]
condition = { and = ["authenticated", "owner_or_staff"] }

[views.documents]
condition = { and = ["authenticated", "object"] }

[views.uploads]
condition = { method = "PUT" }

[views.health]
"#;

/// Anonymous request to a collection endpoint.
pub fn list_request(method: &str) -> RequestSnapshot {
    RequestSnapshot::new(method)
}

/// Anonymous request to a single resource identified by `pk`.
pub fn detail_request(method: &str, pk: &str) -> RequestSnapshot {
    RequestSnapshot::new(method).with_path_param(ids::DEFAULT_LOOKUP_KWARG, pk)
}

/// Anonymous request to a resource nested under the user `parent`.
pub fn nested_request(method: &str, parent: &str) -> RequestSnapshot {
    RequestSnapshot::new(method).with_path_param(ids::DEFAULT_PARENT_LOOKUP_KWARG, parent)
}

pub fn member(id: i64) -> Caller {
    Caller::authenticated(id)
}

pub fn staff(id: i64) -> Caller {
    Caller::authenticated(id).with_staff()
}

/// Pretty JSON for writing a snapshot to a fixture file.
pub fn snapshot_json(snapshot: &RequestSnapshot) -> String {
    serde_json::to_string_pretty(snapshot).expect("serialize request snapshot")
}
