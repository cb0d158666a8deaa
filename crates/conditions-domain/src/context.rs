//! What a condition may ask about the request being authorized.
//!
//! Hosts adapt their request/view objects to [`RequestContext`]. The engine
//! never inspects a context itself; it only hands it to leaf conditions.

use conditions_types::{RequestSnapshot, ids};

pub trait RequestContext {
    /// HTTP method, upper case.
    fn method(&self) -> &str;

    fn is_authenticated(&self) -> bool;

    fn is_staff(&self) -> bool;

    fn is_superuser(&self) -> bool;

    /// Value of a captured URL route parameter.
    fn path_parameter(&self, name: &str) -> Option<&str>;

    /// Numeric id of the caller, when known.
    fn caller_id(&self) -> Option<i64>;

    /// Whether the URL targets a collection rather than a single resource.
    fn is_collection_endpoint(&self) -> bool;

    /// Route parameter holding the parent user id of a nested resource.
    fn parent_lookup_kwarg(&self) -> &str {
        ids::DEFAULT_PARENT_LOOKUP_KWARG
    }
}

impl RequestContext for RequestSnapshot {
    fn method(&self) -> &str {
        &self.method
    }

    fn is_authenticated(&self) -> bool {
        self.user.authenticated
    }

    fn is_staff(&self) -> bool {
        self.user.staff
    }

    fn is_superuser(&self) -> bool {
        self.user.superuser
    }

    fn path_parameter(&self, name: &str) -> Option<&str> {
        self.path_param(name)
    }

    fn caller_id(&self) -> Option<i64> {
        self.user.id
    }

    fn is_collection_endpoint(&self) -> bool {
        RequestSnapshot::is_collection_endpoint(self)
    }

    fn parent_lookup_kwarg(&self) -> &str {
        self.parent_lookup_kwarg
            .as_deref()
            .unwrap_or(ids::DEFAULT_PARENT_LOOKUP_KWARG)
    }
}
