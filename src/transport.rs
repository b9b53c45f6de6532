//! Transport seam over the HTTP exchange.
//!
//! The client only ever needs one request/response pair per operation:
//! status plus body. Keeping that behind a trait lets tests drive the whole
//! protocol with an in-memory backend instead of a socket.

use async_trait::async_trait;

/// Outcome of one HTTP exchange that reached the server.
#[derive(Debug, Clone)]
pub struct Exchange {
    /// Whether the status was in the success range.
    pub ok: bool,
    /// Status text as reported by the transport, e.g. `404 Not Found`.
    pub status: String,
    pub body: String,
}

/// One-shot request/response transport.
///
/// `Err` carries a connection-level failure description (the request never
/// produced a status); a non-success status is an `Ok` exchange with
/// `ok == false`. No retries, no timeouts at this layer.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<Exchange, String>;
    async fn post(&self, url: &str, body: Option<String>) -> Result<Exchange, String>;
}

/// Production transport backed by reqwest.
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

async fn into_exchange(response: reqwest::Response) -> Exchange {
    let status = response.status();
    Exchange {
        ok: status.is_success(),
        status: status.to_string(),
        body: response.text().await.unwrap_or_default(),
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Exchange, String> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        Ok(into_exchange(response).await)
    }

    async fn post(&self, url: &str, body: Option<String>) -> Result<Exchange, String> {
        let mut request = self.http.post(url);
        if let Some(body) = body {
            request = request
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body);
        }
        let response = request.send().await.map_err(|e| e.to_string())?;
        Ok(into_exchange(response).await)
    }
}

pub use self::mock::MockTransport;

/// In-memory transport for tests.
pub mod mock {
    use std::sync::{Arc, Mutex};

    use super::{Exchange, Transport};
    use async_trait::async_trait;

    /// A request the mock has seen, in arrival order.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RecordedRequest {
        pub method: &'static str,
        pub url: String,
        pub body: Option<String>,
    }

    /// Maps URL fragments to canned responses and records every request.
    ///
    /// Routes match by substring so tests can key on the path without
    /// spelling out the base URL.
    #[derive(Default)]
    pub struct MockTransport {
        routes: Vec<(String, Exchange)>,
        requests: Arc<Mutex<Vec<RecordedRequest>>>,
        unreachable: bool,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        /// A transport whose every request fails at the connection level.
        pub fn unreachable() -> Self {
            Self {
                unreachable: true,
                ..Self::default()
            }
        }

        /// Respond to URLs containing `path` with a 200 and `body`.
        pub fn route(mut self, path: &str, body: &str) -> Self {
            self.routes.push((
                path.to_string(),
                Exchange {
                    ok: true,
                    status: "200 OK".to_string(),
                    body: body.to_string(),
                },
            ));
            self
        }

        /// Respond to URLs containing `path` with a non-success status.
        pub fn route_failure(mut self, path: &str, status: &str) -> Self {
            self.routes.push((
                path.to_string(),
                Exchange {
                    ok: false,
                    status: status.to_string(),
                    body: String::new(),
                },
            ));
            self
        }

        /// Handle to the request log, valid after the transport moves into
        /// a client.
        pub fn log(&self) -> Arc<Mutex<Vec<RecordedRequest>>> {
            Arc::clone(&self.requests)
        }

        fn respond(
            &self,
            method: &'static str,
            url: &str,
            body: Option<String>,
        ) -> Result<Exchange, String> {
            self.requests
                .lock()
                .expect("request log poisoned")
                .push(RecordedRequest {
                    method,
                    url: url.to_string(),
                    body,
                });
            if self.unreachable {
                return Err("connection refused".to_string());
            }
            for (path, exchange) in &self.routes {
                if url.contains(path.as_str()) {
                    return Ok(exchange.clone());
                }
            }
            Ok(Exchange {
                ok: false,
                status: "404 Not Found".to_string(),
                body: String::new(),
            })
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn get(&self, url: &str) -> Result<Exchange, String> {
            self.respond("GET", url, None)
        }

        async fn post(&self, url: &str, body: Option<String>) -> Result<Exchange, String> {
            self.respond("POST", url, body)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn routes_match_by_substring_and_record_requests() {
            let transport = MockTransport::new().route("/init/", r#"{"hello": 1}"#);
            let log = transport.log();

            let exchange = transport
                .get("http://127.0.0.1:8000/init/somewhere")
                .await
                .unwrap();
            assert!(exchange.ok);
            assert_eq!(exchange.body, r#"{"hello": 1}"#);

            let miss = transport.get("http://127.0.0.1:8000/other").await.unwrap();
            assert!(!miss.ok);
            assert_eq!(miss.status, "404 Not Found");

            let requests = log.lock().unwrap();
            assert_eq!(requests.len(), 2);
            assert_eq!(requests[0].method, "GET");
        }

        #[tokio::test]
        async fn unreachable_fails_at_connection_level() {
            let transport = MockTransport::unreachable();
            let err = transport.get("http://nowhere/init/x").await.unwrap_err();
            assert!(err.contains("connection refused"));
        }
    }
}
