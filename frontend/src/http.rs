//! Outbound HTTP behind a small trait so services can run against fakes in tests.

use crate::config;
use crate::error::TransportError;
use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post, url)
    }

    pub fn put(url: impl Into<String>) -> Self {
        Self::new(Method::Put, url)
    }

    fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn bearer(self, token: &str) -> Self {
        self.header("Authorization", &format!("Bearer {}", token))
    }

    /// Serializes `body` and sets the JSON content type.
    pub fn json<T: serde::Serialize + ?Sized>(mut self, body: &T) -> Result<Self, TransportError> {
        let encoded =
            serde_json::to_string(body).map_err(|e| TransportError::Decode(e.to_string()))?;
        self.body = Some(encoded);
        Ok(self.header("Content-Type", "application/json"))
    }

    #[cfg(test)]
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, TransportError> {
        serde_json::from_str(&self.body).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

/// Single-shot request/response exchange. Implementations never retry.
#[allow(async_fn_in_trait)]
pub trait HttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: HttpClient> HttpClient for Rc<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request).await
    }
}

/// Browser `fetch` through gloo-net, raced against a fixed timeout.
#[derive(Debug, Clone, Copy)]
pub struct FetchClient {
    timeout_ms: u32,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self {
            timeout_ms: config::REQUEST_TIMEOUT_MS,
        }
    }
}

impl FetchClient {
    async fn dispatch(request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))?;
        Ok(HttpResponse::new(status, body))
    }
}

impl HttpClient for FetchClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let exchange = Box::pin(Self::dispatch(request));
        let deadline = TimeoutFuture::new(self.timeout_ms);
        match select(exchange, deadline).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(TransportError::Timeout(self.timeout_ms)),
        }
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Replays canned results in order and records every request it sees.
    #[derive(Default)]
    pub struct ScriptedClient {
        replies: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
        pub requests: RefCell<Vec<HttpRequest>>,
    }

    impl ScriptedClient {
        pub fn new() -> Rc<Self> {
            Rc::new(Self::default())
        }

        pub fn reply(&self, status: u16, body: &str) {
            self.replies
                .borrow_mut()
                .push_back(Ok(HttpResponse::new(status, body)));
        }

        pub fn fail(&self, error: TransportError) {
            self.replies.borrow_mut().push_back(Err(error));
        }

        pub fn calls(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    impl HttpClient for ScriptedClient {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.requests.borrow_mut().push(request);
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(TransportError::Network("no scripted reply".to_string())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_sets_body_and_content_type() {
        let request = HttpRequest::post("https://relay.test")
            .json(&serde_json::json!({ "name": "홍길동" }))
            .unwrap()
            .bearer("abc");
        assert_eq!(request.body.as_deref(), Some(r#"{"name":"홍길동"}"#));
        assert_eq!(request.header_value("content-type"), Some("application/json"));
        assert_eq!(request.header_value("Authorization"), Some("Bearer abc"));
    }

    #[test]
    fn test_ok_covers_2xx_only() {
        assert!(HttpResponse::new(201, "").ok());
        assert!(!HttpResponse::new(304, "").ok());
        assert!(!HttpResponse::new(409, "").ok());
    }
}
