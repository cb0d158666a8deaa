//! Stable identifiers for builtin conditions.
//!
//! These are the names accepted in `conditions.toml` and by `conditions explain`.

// Constant votes
pub const COND_TRUE: &str = "true";
pub const COND_FALSE: &str = "false";
pub const COND_OBJECT: &str = "object";

// Caller identity
pub const COND_READ: &str = "read";
pub const COND_AUTHENTICATED: &str = "authenticated";
pub const COND_STAFF: &str = "staff";
pub const COND_SUPERUSER: &str = "superuser";
pub const COND_NESTED_RESOURCE_OWNER: &str = "nested_resource_owner";

// Request method. `method` needs a verb and is rejected when used bare.
pub const COND_METHOD: &str = "method";
pub const COND_GET: &str = "get";
pub const COND_POST: &str = "post";
pub const COND_PUT: &str = "put";
pub const COND_PATCH: &str = "patch";
pub const COND_DELETE: &str = "delete";

// Request shape
pub const COND_MANY: &str = "many";
pub const COND_LIST: &str = "list";
pub const COND_CREATE: &str = "create";
pub const COND_RETRIEVE: &str = "retrieve";
pub const COND_UPDATE: &str = "update";
pub const COND_DESTROY: &str = "destroy";

/// Methods treated as read-only by the `read` condition.
pub const SAFE_METHODS: &[&str] = &["GET", "HEAD", "OPTIONS"];

/// URL parameter holding the parent user id for nested resources.
pub const DEFAULT_PARENT_LOOKUP_KWARG: &str = "parent_lookup_user";

/// URL parameter identifying a single resource on detail endpoints.
pub const DEFAULT_LOOKUP_KWARG: &str = "pk";
