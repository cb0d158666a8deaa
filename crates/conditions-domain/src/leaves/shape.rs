//! Request-shape leaves: method plus collection/detail endpoint.

use crate::context::RequestContext;

pub(crate) fn is_list(ctx: &dyn RequestContext) -> bool {
    ctx.method() == "GET" && ctx.is_collection_endpoint()
}

pub(crate) fn is_create(ctx: &dyn RequestContext) -> bool {
    ctx.method() == "POST" && ctx.is_collection_endpoint()
}

pub(crate) fn is_retrieve(ctx: &dyn RequestContext) -> bool {
    ctx.method() == "GET" && !ctx.is_collection_endpoint()
}

pub(crate) fn is_update(ctx: &dyn RequestContext) -> bool {
    matches!(ctx.method(), "PUT" | "PATCH") && !ctx.is_collection_endpoint()
}

pub(crate) fn is_destroy(ctx: &dyn RequestContext) -> bool {
    ctx.method() == "DELETE" && !ctx.is_collection_endpoint()
}
