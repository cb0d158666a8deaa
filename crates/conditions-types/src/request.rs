use crate::ids;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Plain description of an incoming request and the view handling it.
///
/// Hosts that do not want to implement the context trait themselves can fill
/// this in from their framework objects. The CLI reads it from JSON.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RequestSnapshot {
    /// HTTP method, upper case (`GET`, `POST`, ...).
    pub method: String,

    #[serde(default)]
    pub user: Caller,

    /// Parameters captured from the URL route.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub path_params: BTreeMap<String, String>,

    /// Route parameter identifying a single resource. Defaults to `pk`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lookup_kwarg: Option<String>,

    /// Route parameter carrying the parent user id of a nested resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_lookup_kwarg: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Caller {
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub staff: bool,
    #[serde(default)]
    pub superuser: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl Caller {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(id: i64) -> Self {
        Self {
            authenticated: true,
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn with_staff(mut self) -> Self {
        self.staff = true;
        self
    }

    pub fn with_superuser(mut self) -> Self {
        self.superuser = true;
        self
    }
}

impl RequestSnapshot {
    pub fn new<S: AsRef<str>>(method: S) -> Self {
        Self {
            method: method.as_ref().to_ascii_uppercase(),
            ..Self::default()
        }
    }

    pub fn with_user(mut self, user: Caller) -> Self {
        self.user = user;
        self
    }

    pub fn with_path_param(mut self, name: &str, value: &str) -> Self {
        self.path_params.insert(name.to_string(), value.to_string());
        self
    }

    pub fn path_param(&self, name: &str) -> Option<&str> {
        self.path_params.get(name).map(String::as_str)
    }

    pub fn lookup_kwarg(&self) -> &str {
        self.lookup_kwarg
            .as_deref()
            .unwrap_or(ids::DEFAULT_LOOKUP_KWARG)
    }

    /// Educated guess: a URL targets a collection unless it carries the
    /// detail lookup parameter.
    pub fn is_collection_endpoint(&self) -> bool {
        let kwarg = self.lookup_kwarg();
        kwarg.is_empty() || !self.path_params.contains_key(kwarg)
    }
}
