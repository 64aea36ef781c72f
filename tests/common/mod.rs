//! In-process harness: builds the gateway router and small axum servers
//! standing in for the search service and the model API.

#![allow(dead_code)]

use axum::{
    Json, Router,
    body::Body,
    extract::{Path, State},
    http::{HeaderMap, Request, StatusCode},
    routing::post,
};
use bookgate::{AppState, Config, routes};
use serde_json::{Value, json};
use std::{
    net::SocketAddr,
    path::PathBuf,
    sync::{Arc, Mutex},
};
use tower::ServiceExt;

/// Collects the JSON bodies a stub server received.
#[derive(Clone, Default)]
pub struct Recorder {
    requests: Arc<Mutex<Vec<Value>>>,
}

impl Recorder {
    pub fn push(&self, body: Value) {
        self.requests.lock().unwrap().push(body);
    }

    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

pub async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// A base URL nothing listens on.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Search service answering every request with `payload`.
pub async fn search_stub(payload: Value) -> (String, Recorder) {
    let recorder = Recorder::default();
    let app = Router::new()
        .route(
            "/search",
            post(
                move |State(rec): State<Recorder>, Json(body): Json<Value>| {
                    let payload = payload.clone();
                    async move {
                        rec.push(body);
                        Json(payload)
                    }
                },
            ),
        )
        .with_state(recorder.clone());
    (format!("http://{}", spawn(app).await), recorder)
}

/// Search service that always fails with `status`.
pub async fn failing_search_stub(status: StatusCode) -> String {
    let app = Router::new().route("/search", post(move || async move { status }));
    format!("http://{}", spawn(app).await)
}

/// Search service that answers 200 with a non-JSON body.
pub async fn garbage_search_stub() -> String {
    let app = Router::new().route("/search", post(|| async { "<html>maintenance</html>" }));
    format!("http://{}", spawn(app).await)
}

pub const MODEL_REPLY: &str = "추천드릴 만한 책이 있어요.";

/// Gemini stand-in. Records `{call, api_key, prompt}` per request and
/// answers with [`MODEL_REPLY`], or with `fail_with` when set.
pub async fn model_stub(fail_with: Option<StatusCode>) -> (String, Recorder) {
    let recorder = Recorder::default();
    let app = Router::new()
        .route(
            "/models/:call",
            post(
                move |State(rec): State<Recorder>,
                      Path(call): Path<String>,
                      headers: HeaderMap,
                      Json(body): Json<Value>| async move {
                    let api_key = headers
                        .get("x-goog-api-key")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string();
                    rec.push(json!({
                        "call": call,
                        "api_key": api_key,
                        "prompt": body["contents"][0]["parts"][0]["text"],
                    }));
                    match fail_with {
                        Some(status) => Err(status),
                        None => Ok(Json(json!({
                            "candidates": [{
                                "content": { "role": "model", "parts": [{ "text": MODEL_REPLY }] }
                            }]
                        }))),
                    }
                },
            ),
        )
        .with_state(recorder.clone());
    (format!("http://{}", spawn(app).await), recorder)
}

pub fn config(asset_root: PathBuf, book_search_url: String) -> Config {
    Config {
        book_search_url,
        search_timeout_secs: 5,
        chat_timeout_secs: 5,
        asset_root,
        ..Config::default()
    }
}

pub fn gateway(config: Config) -> Router {
    routes::router(AppState::new(config).unwrap())
}

pub struct Reply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn content_type(&self) -> &str {
        self.headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }
}

pub async fn send(app: Router, request: Request<Body>) -> Reply {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();
    Reply {
        status,
        headers,
        body,
    }
}

pub async fn get(app: Router, uri: &str) -> Reply {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: Router, uri: &str, body: &Value) -> Reply {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();
    send(app, request).await
}

/// POST with no `Content-Type` header at all.
pub async fn post_untyped(app: Router, uri: &str, body: &Value) -> Reply {
    let request = Request::post(uri)
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();
    send(app, request).await
}

pub fn search_body(query: &str, top_k: u32) -> Value {
    json!({
        "npz": "books_emb.npz",
        "meta": "books_meta.csv",
        "query": query,
        "top_k": top_k,
        "source_csv": "book.csv",
        "randomize": true
    })
}
