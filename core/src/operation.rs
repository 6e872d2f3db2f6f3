//! Operation descriptors and path templates.
//!
//! An `Operation` is the static description of one call: a name for logs,
//! the method, an already-substituted path, and the query parameters. Query
//! values equal to `""` mean "not set" and are dropped when the URL is built,
//! so services can pass their full parameter list unconditionally.

use std::collections::BTreeMap;

use crate::http::HttpMethod;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub name: String,
    pub method: HttpMethod,
    pub path: String,
    pub query_params: BTreeMap<String, String>,
}

impl Operation {
    pub fn new(name: impl Into<String>, method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            method,
            path: path.into(),
            query_params: BTreeMap::new(),
        }
    }

    /// Add a query parameter. Empty values are kept here and skipped later.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.insert(name.into(), value.into());
        self
    }

    /// Parameters that will actually reach the query string.
    pub fn effective_query(&self) -> impl Iterator<Item = (&str, &str)> {
        self.query_params
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A resource path with `{name}` placeholders.
///
/// `param` inserts the value literally, exactly like a string replace: a value
/// containing `/` adds path segments. `param_encoded` percent-encodes the value
/// as a single segment instead. Placeholders that are never bound are left in
/// the output untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    rendered: String,
}

impl PathTemplate {
    pub fn new(template: &str) -> Self {
        Self {
            rendered: template.to_string(),
        }
    }

    pub fn param(mut self, name: &str, value: impl AsRef<str>) -> Self {
        let token = format!("{{{name}}}");
        self.rendered = self.rendered.replace(&token, value.as_ref());
        self
    }

    pub fn param_encoded(self, name: &str, value: impl AsRef<str>) -> Self {
        let encoded = urlencoding::encode(value.as_ref());
        self.param(name, encoded)
    }

    pub fn render(self) -> String {
        self.rendered
    }
}
