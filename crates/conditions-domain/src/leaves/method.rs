use crate::context::RequestContext;
use crate::error::ConfigurationError;
use conditions_types::ids::SAFE_METHODS;
use std::borrow::Cow;

/// Request method a `MethodEquals` leaf compares against.
///
/// The configured verb is upper-cased once at construction; comparison
/// against the method the context reports is exact.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Method(Cow<'static, str>);

impl Method {
    pub const GET: Method = Method(Cow::Borrowed("GET"));
    pub const POST: Method = Method(Cow::Borrowed("POST"));
    pub const PUT: Method = Method(Cow::Borrowed("PUT"));
    pub const PATCH: Method = Method(Cow::Borrowed("PATCH"));
    pub const DELETE: Method = Method(Cow::Borrowed("DELETE"));

    pub fn new(method: Option<&str>) -> Result<Self, ConfigurationError> {
        match method.map(str::trim) {
            Some(m) if !m.is_empty() => Ok(Method(Cow::Owned(m.to_ascii_uppercase()))),
            _ => Err(ConfigurationError::MissingRequestMethod),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn matches(&self, ctx: &dyn RequestContext) -> bool {
        ctx.method() == self.as_str()
    }
}

pub(crate) fn is_safe(ctx: &dyn RequestContext) -> bool {
    SAFE_METHODS.contains(&ctx.method())
}
