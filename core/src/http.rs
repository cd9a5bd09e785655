//! HTTP transport described as plain data.
//!
//! # Design
//! The core never touches the network. It hands the host an `HttpRequest`
//! value, the host executes the round-trip with whatever client it likes,
//! and feeds the resulting `HttpResponse` back in. This keeps every
//! operation deterministic: tests fabricate responses directly instead of
//! standing up a server.
//!
//! Owned `String` fields throughout; requests and responses are values,
//! not borrows into some connection object.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// One request the host should execute against the network.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn get(path: String) -> Self {
        Self {
            method: HttpMethod::Get,
            path,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn delete(path: String) -> Self {
        Self {
            method: HttpMethod::Delete,
            path,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn post_json(path: String, body: String) -> Self {
        Self {
            method: HttpMethod::Post,
            path,
            headers: json_headers(),
            body: Some(body),
        }
    }

    pub fn put_json(path: String, body: String) -> Self {
        Self {
            method: HttpMethod::Put,
            path,
            headers: json_headers(),
            body: Some(body),
        }
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

/// What came back from the network, reduced to the parts the client
/// interprets: the status code and the body text.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// The API contract promises "some 2xx" rather than exact codes, so
    /// success is the whole range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
