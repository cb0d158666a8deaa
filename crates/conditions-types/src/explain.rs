//! Explain registry for builtin conditions.
//!
//! Maps condition IDs to human-readable explanations and a configuration example.

use crate::ids;

/// Explanation entry for a builtin condition.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Display name, as used in composite labels.
    pub title: &'static str,
    /// When the condition permits and when it denies.
    pub description: &'static str,
    /// `conditions.toml` snippet using the condition.
    pub example: &'static str,
}

/// Look up an explanation by condition ID.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    let exp = match identifier {
        ids::COND_TRUE => Explanation {
            title: "AlwaysPermit",
            description: "\
Permits every request at both levels. This is also what a view without a
configured condition falls back to.",
            example: r#"[views.health]
condition = "true""#,
        },
        ids::COND_FALSE => Explanation {
            title: "AlwaysDeny",
            description: "Denies every request at both levels.",
            example: r#"[views.legacy]
condition = "false""#,
        },
        ids::COND_OBJECT => Explanation {
            title: "ObjectOnly",
            description: "\
Denies the collective-level check and permits the object-level check. Combine
it to defer a decision to object-level permissions.",
            example: r#"[views.documents]
condition = { and = ["authenticated", "object"] }"#,
        },
        ids::COND_READ => Explanation {
            title: "ReadOnly",
            description: "Permits safe methods: GET, HEAD and OPTIONS.",
            example: r#"[views.articles]
condition = { or = ["read", "staff"] }"#,
        },
        ids::COND_AUTHENTICATED => Explanation {
            title: "Authenticated",
            description: "Permits when the caller is authenticated.",
            example: r#"[views.profile]
condition = "authenticated""#,
        },
        ids::COND_STAFF => Explanation {
            title: "Staff",
            description: "Permits when the caller carries the staff role.",
            example: r#"[views.reports]
condition = "staff""#,
        },
        ids::COND_SUPERUSER => Explanation {
            title: "Superuser",
            description: "Permits when the caller carries the superuser role.",
            example: r#"[views.settings]
condition = "superuser""#,
        },
        ids::COND_NESTED_RESOURCE_OWNER => Explanation {
            title: "NestedResourceOwner",
            description: "\
Permits when the caller is authenticated and the parent lookup URL parameter
(`parent_lookup_user` unless configured otherwise) holds the caller's numeric
id. A missing or non-numeric parameter denies.",
            example: r#"parent_lookup_kwarg = "parent_lookup_user"

[views.user-addresses]
condition = { or = ["nested_resource_owner", "staff"] }"#,
        },
        ids::COND_METHOD => Explanation {
            title: "MethodEquals",
            description: "\
Permits when the request method equals the configured verb. The verb is
upper-cased when the condition is built, so `put` and `PUT` are the same. It
is mandatory: using `method` without one is a configuration error.",
            example: r#"[views.uploads]
condition = { method = "PUT" }"#,
        },
        ids::COND_GET => method_shortcut("MethodEquals(GET)", r#"condition = "get""#),
        ids::COND_POST => method_shortcut("MethodEquals(POST)", r#"condition = "post""#),
        ids::COND_PUT => method_shortcut("MethodEquals(PUT)", r#"condition = "put""#),
        ids::COND_PATCH => method_shortcut("MethodEquals(PATCH)", r#"condition = "patch""#),
        ids::COND_DELETE => method_shortcut("MethodEquals(DELETE)", r#"condition = "delete""#),
        ids::COND_MANY => Explanation {
            title: "IsCollectionRequest",
            description: "\
Permits when the URL targets a collection endpoint rather than a single
resource, i.e. the detail lookup parameter is absent from the route.",
            example: r#"[views.articles]
condition = { and = ["many", "read"] }"#,
        },
        ids::COND_LIST => Explanation {
            title: "IsListRequest",
            description: "Permits GET requests to a collection endpoint.",
            example: r#"[views.articles]
condition = { or = ["list", "staff"] }"#,
        },
        ids::COND_CREATE => Explanation {
            title: "IsCreateRequest",
            description: "Permits POST requests to a collection endpoint.",
            example: r#"[views.comments]
condition = { and = ["create", "authenticated"] }"#,
        },
        ids::COND_RETRIEVE => Explanation {
            title: "IsRetrieveRequest",
            description: "Permits GET requests to a single resource.",
            example: r#"[views.articles]
condition = { or = ["retrieve", "staff"] }"#,
        },
        ids::COND_UPDATE => Explanation {
            title: "IsUpdateRequest",
            description: "Permits PUT and PATCH requests to a single resource.",
            example: r#"[views.articles]
condition = { and = ["update", "staff"] }"#,
        },
        ids::COND_DESTROY => Explanation {
            title: "IsDestroyRequest",
            description: "Permits DELETE requests to a single resource.",
            example: r#"[views.articles]
condition = { and = ["destroy", "superuser"] }"#,
        },
        _ => return None,
    };
    Some(exp)
}

fn method_shortcut(title: &'static str, example: &'static str) -> Explanation {
    Explanation {
        title,
        description: "Shortcut for `method` preconfigured with this verb.",
        example,
    }
}

/// List all builtin condition IDs.
pub fn all_condition_ids() -> &'static [&'static str] {
    &[
        ids::COND_TRUE,
        ids::COND_FALSE,
        ids::COND_OBJECT,
        ids::COND_READ,
        ids::COND_AUTHENTICATED,
        ids::COND_STAFF,
        ids::COND_SUPERUSER,
        ids::COND_NESTED_RESOURCE_OWNER,
        ids::COND_METHOD,
        ids::COND_GET,
        ids::COND_POST,
        ids::COND_PUT,
        ids::COND_PATCH,
        ids::COND_DELETE,
        ids::COND_MANY,
        ids::COND_LIST,
        ids::COND_CREATE,
        ids::COND_RETRIEVE,
        ids::COND_UPDATE,
        ids::COND_DESTROY,
    ]
}
