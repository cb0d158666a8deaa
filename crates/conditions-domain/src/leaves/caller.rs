use crate::context::RequestContext;

/// The URL's parent lookup parameter names the authenticated caller.
///
/// A missing parameter, a non-numeric value, or an unknown caller id all deny.
pub(crate) fn owns_nested_resource(ctx: &dyn RequestContext) -> bool {
    if !ctx.is_authenticated() {
        return false;
    }

    let kwarg = ctx.parent_lookup_kwarg();
    let Some(raw) = ctx.path_parameter(kwarg) else {
        return false;
    };

    let Ok(lookup) = raw.trim().parse::<i64>() else {
        tracing::debug!(kwarg, value = raw, "non-numeric parent lookup parameter");
        return false;
    };

    ctx.caller_id() == Some(lookup)
}
