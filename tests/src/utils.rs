//! In-process stand-in for the SharePoint list API.
//!
//! Answers every request with a configurable status/body and records what
//! it received, so tests can assert on the exact wire request.

use anyhow::Result;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use std::sync::{Arc, Mutex};
use tms_lists::{Config, ListClient};

/// A request as the mock API saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Percent-decoded query pairs in wire order.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        url::form_urlencoded::parse(self.query.as_deref().unwrap_or_default().as_bytes())
            .into_owned()
            .collect()
    }

    pub fn json_body(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

#[derive(Clone)]
struct Reply {
    status: StatusCode,
    body: String,
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<Recorded>>>,
    reply: Arc<Mutex<Reply>>,
}

pub struct MockListApi {
    pub root: String,
    state: MockState,
}

impl MockListApi {
    /// Serve on an ephemeral loopback port. Replies `204 No Content` until
    /// told otherwise.
    pub async fn start() -> Result<Self> {
        let state = MockState {
            requests: Arc::new(Mutex::new(Vec::new())),
            reply: Arc::new(Mutex::new(Reply {
                status: StatusCode::NO_CONTENT,
                body: String::new(),
            })),
        };
        let app = Router::new().fallback(record).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            root: format!("http://{addr}/_api/"),
            state,
        })
    }

    pub fn respond_with(&self, status: u16, body: impl Into<String>) {
        let mut reply = self.state.reply.lock().unwrap();
        reply.status = StatusCode::from_u16(status).unwrap();
        reply.body = body.into();
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    /// The single request received so far.
    pub fn only_request(&self) -> Recorded {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }

    pub fn config(&self) -> Config {
        Config {
            api_url: self.root.clone(),
            ..Config::default()
        }
    }

    pub fn client(&self) -> ListClient {
        ListClient::new(&self.config()).unwrap()
    }
}

async fn record(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    state.requests.lock().unwrap().push(Recorded {
        method,
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers,
        body,
    });
    let reply = state.reply.lock().unwrap().clone();
    (
        reply.status,
        [(axum::http::header::CONTENT_TYPE, "application/json")],
        reply.body,
    )
        .into_response()
}
