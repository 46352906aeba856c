use crate::wire::WireNode;
use derive_more::Display;
use thiserror::Error as ThisError;

///
/// TransportError
///
/// Failure reported by a transport. A non-success HTTP status carries
/// its code.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("transport failed{}: {message}", .status.map(|s| format!(" with status {s}")).unwrap_or_default())]
pub struct TransportError {
    pub status: Option<u16>,
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }
}

///
/// Method
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Method {
    #[display("GET")]
    Get,

    #[display("POST")]
    Post,

    #[display("PUT")]
    Put,

    #[display("DELETE")]
    Delete,
}

///
/// Request
///
/// One HTTP request, described independently of any HTTP library.
/// `path` already carries the API prefix; `body` is the enveloped payload.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<WireNode>,
}

impl Request {
    #[must_use]
    pub const fn new(method: Method, path: String) -> Self {
        Self {
            method,
            path,
            query: Vec::new(),
            body: None,
        }
    }

    #[must_use]
    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: WireNode) -> Self {
        self.body = Some(body);
        self
    }

    /// `key=value` pairs joined with `&`, unencoded.
    #[must_use]
    pub fn query_string(&self) -> String {
        self.query
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Path plus query string.
    #[must_use]
    pub fn target(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query_string())
        }
    }
}

///
/// Transport
///
/// Sends a request and returns the raw response body.
/// Implementations own connections and authentication. A non-success
/// status must come back as an error.
///

pub trait Transport {
    fn send(&self, request: &Request) -> Result<Vec<u8>, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &Request) -> Result<Vec<u8>, TransportError> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, request: &Request) -> Result<Vec<u8>, TransportError> {
        (**self).send(request)
    }
}

///
/// TESTS
///
