//! Builtin leaf conditions.
//!
//! Every leaf votes `Permit` or `Deny`, never `Abstain`, and reads the same
//! answer at both levels except [`Leaf::ObjectOnly`].

use crate::context::RequestContext;
use crate::error::ConfigurationError;
use conditions_types::{Level, TriState, ids};
use std::borrow::Cow;

mod caller;
mod method;
mod shape;

pub use method::Method;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Leaf {
    AlwaysPermit,
    AlwaysDeny,
    ObjectOnly,
    ReadOnly,
    Authenticated,
    Staff,
    Superuser,
    NestedResourceOwner,
    MethodEquals(Method),
    IsCollectionRequest,
    IsListRequest,
    IsCreateRequest,
    IsRetrieveRequest,
    IsUpdateRequest,
    IsDestroyRequest,
}

impl Leaf {
    /// `MethodEquals` for a configured verb; `None` or blank is rejected.
    pub fn method_equals(method: Option<&str>) -> Result<Self, ConfigurationError> {
        Method::new(method).map(Leaf::MethodEquals)
    }

    /// Resolve a builtin condition ID.
    ///
    /// The bare `method` ID is a configuration error since it carries no verb.
    pub fn from_id(id: &str) -> Result<Self, ConfigurationError> {
        let leaf = match id {
            ids::COND_TRUE => Leaf::AlwaysPermit,
            ids::COND_FALSE => Leaf::AlwaysDeny,
            ids::COND_OBJECT => Leaf::ObjectOnly,
            ids::COND_READ => Leaf::ReadOnly,
            ids::COND_AUTHENTICATED => Leaf::Authenticated,
            ids::COND_STAFF => Leaf::Staff,
            ids::COND_SUPERUSER => Leaf::Superuser,
            ids::COND_NESTED_RESOURCE_OWNER => Leaf::NestedResourceOwner,
            ids::COND_METHOD => return Leaf::method_equals(None),
            ids::COND_GET => Leaf::MethodEquals(Method::GET),
            ids::COND_POST => Leaf::MethodEquals(Method::POST),
            ids::COND_PUT => Leaf::MethodEquals(Method::PUT),
            ids::COND_PATCH => Leaf::MethodEquals(Method::PATCH),
            ids::COND_DELETE => Leaf::MethodEquals(Method::DELETE),
            ids::COND_MANY => Leaf::IsCollectionRequest,
            ids::COND_LIST => Leaf::IsListRequest,
            ids::COND_CREATE => Leaf::IsCreateRequest,
            ids::COND_RETRIEVE => Leaf::IsRetrieveRequest,
            ids::COND_UPDATE => Leaf::IsUpdateRequest,
            ids::COND_DESTROY => Leaf::IsDestroyRequest,
            other => {
                return Err(ConfigurationError::UnknownCondition {
                    name: other.to_string(),
                });
            }
        };
        Ok(leaf)
    }

    /// Display name used in composite labels.
    pub fn name(&self) -> Cow<'static, str> {
        let name = match self {
            Leaf::AlwaysPermit => "AlwaysPermit",
            Leaf::AlwaysDeny => "AlwaysDeny",
            Leaf::ObjectOnly => "ObjectOnly",
            Leaf::ReadOnly => "ReadOnly",
            Leaf::Authenticated => "Authenticated",
            Leaf::Staff => "Staff",
            Leaf::Superuser => "Superuser",
            Leaf::NestedResourceOwner => "NestedResourceOwner",
            Leaf::MethodEquals(method) => {
                return Cow::Owned(format!("MethodEquals({})", method.as_str()));
            }
            Leaf::IsCollectionRequest => "IsCollectionRequest",
            Leaf::IsListRequest => "IsListRequest",
            Leaf::IsCreateRequest => "IsCreateRequest",
            Leaf::IsRetrieveRequest => "IsRetrieveRequest",
            Leaf::IsUpdateRequest => "IsUpdateRequest",
            Leaf::IsDestroyRequest => "IsDestroyRequest",
        };
        Cow::Borrowed(name)
    }

    pub fn evaluate(&self, ctx: &dyn RequestContext, level: Level) -> TriState {
        let permitted = match self {
            Leaf::AlwaysPermit => true,
            Leaf::AlwaysDeny => false,
            Leaf::ObjectOnly => level == Level::Object,
            Leaf::ReadOnly => method::is_safe(ctx),
            Leaf::Authenticated => ctx.is_authenticated(),
            Leaf::Staff => ctx.is_staff(),
            Leaf::Superuser => ctx.is_superuser(),
            Leaf::NestedResourceOwner => caller::owns_nested_resource(ctx),
            Leaf::MethodEquals(method) => method.matches(ctx),
            Leaf::IsCollectionRequest => ctx.is_collection_endpoint(),
            Leaf::IsListRequest => shape::is_list(ctx),
            Leaf::IsCreateRequest => shape::is_create(ctx),
            Leaf::IsRetrieveRequest => shape::is_retrieve(ctx),
            Leaf::IsUpdateRequest => shape::is_update(ctx),
            Leaf::IsDestroyRequest => shape::is_destroy(ctx),
        };
        TriState::from(permitted)
    }
}
