//! Shared harness for wire-level tests.
//!
//! Spins up a purpose-built axum router on an ephemeral port, records every
//! request the SDK issues (method, path, decoded query params), and points a
//! `BitbucketClient` at it.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use axum::Router;
use bitbucket::BitbucketClient;
use tokio::net::TcpListener;

/// One request observed by the stub server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub params: Vec<(String, String)>,
}

impl RecordedRequest {
    /// Look up a decoded query parameter by name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

pub type RequestLog = Arc<Mutex<Vec<RecordedRequest>>>;

pub fn request_log() -> RequestLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// Snapshot the recorded requests.
pub fn recorded(log: &RequestLog) -> Vec<RecordedRequest> {
    log.lock().unwrap().clone()
}

/// Middleware recording every request before handing it to the router.
pub async fn record_requests(
    State(log): State<RequestLog>,
    request: Request,
    next: Next,
) -> Response {
    let params = parse_query(request.uri().query().unwrap_or(""));
    log.lock().unwrap().push(RecordedRequest {
        method: request.method().to_string(),
        path: request.uri().path().to_string(),
        params,
    });
    next.run(request).await
}

fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(key), decode(value))
        })
        .collect()
}

fn decode(raw: &str) -> String {
    urlencoding::decode(raw).map_or_else(|_| raw.to_string(), |s| s.into_owned())
}

/// Attach the request log and serve the router on an ephemeral port.
pub async fn spawn(router: Router, log: &RequestLog) -> SocketAddr {
    let app = router.layer(axum::middleware::from_fn_with_state(
        Arc::clone(log),
        record_requests,
    ));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Build a client pointed at the stub server.
pub fn client(addr: SocketAddr) -> BitbucketClient {
    BitbucketClient::new("erin", "app-password", Some(&format!("http://{addr}")), None)
        .expect("client creation should succeed")
}
