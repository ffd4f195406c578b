//! Request descriptors.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// One API call: method, path segments, query string and optional JSON body.
///
/// Built once per invocation and never mutated after construction; the
/// `with_*` methods consume and return the descriptor. Segments are kept
/// unescaped and only percent-encoded when the client joins them onto the
/// base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    method: Method,
    segments: Vec<String>,
    query: Vec<(String, String)>,
    body: Option<Value>,
}

impl Request {
    /// Creates a request for a fixed route such as `/core/flavors`.
    ///
    /// The route is split on `/`; caller-supplied identifiers belong in
    /// [`Self::with_segment`], never in `route`.
    #[must_use]
    pub fn new(method: Method, route: &str) -> Self {
        Self {
            method,
            segments: route
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
            query: Vec::new(),
            body: None,
        }
    }

    /// `GET` request.
    #[must_use]
    pub fn get(route: &str) -> Self {
        Self::new(Method::GET, route)
    }

    /// `POST` request.
    #[must_use]
    pub fn post(route: &str) -> Self {
        Self::new(Method::POST, route)
    }

    /// `PUT` request.
    #[must_use]
    pub fn put(route: &str) -> Self {
        Self::new(Method::PUT, route)
    }

    /// `DELETE` request.
    #[must_use]
    pub fn delete(route: &str) -> Self {
        Self::new(Method::DELETE, route)
    }

    /// Appends one path segment, typically a resource identifier.
    ///
    /// The value always stays a single segment: `/` and other reserved
    /// characters are escaped on the wire.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] for an empty value, `.` or `..`,
    /// which would otherwise collapse into a different path.
    pub fn with_segment(mut self, segment: impl Into<String>) -> Result<Self> {
        let segment = segment.into();
        if matches!(segment.as_str(), "" | "." | "..") {
            return Err(Error::InvalidIdentifier(segment));
        }
        self.segments.push(segment);
        Ok(self)
    }

    /// Appends a query parameter.
    #[must_use]
    pub fn with_query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Appends a query parameter when `value` is present.
    #[must_use]
    pub fn with_optional_query<V: ToString>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with_query(name, value),
            None => self,
        }
    }

    /// Sets the JSON body from any serializable payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if the payload cannot be
    /// represented as JSON.
    pub fn with_json<T: Serialize>(mut self, payload: &T) -> Result<Self> {
        self.body = Some(serde_json::to_value(payload)?);
        Ok(self)
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// Unescaped path segments relative to the API base URL.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Path relative to the base URL, for logs. Segments are not escaped.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    /// Query parameters, in insertion order.
    #[must_use]
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// JSON body, if any.
    #[must_use]
    pub const fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }
}
