//! Mock search endpoint for client integration tests.
//!
//! Serves a fixed corpus of 25 results over axum on an ephemeral port and
//! records every `(q, page)` it receives.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::{Arc, Mutex};

pub const CORPUS_SIZE: u64 = 25;

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    q: String,
    page: Option<u32>,
}

pub type Hits = Arc<Mutex<Vec<(String, u32)>>>;

async fn search(State(hits): State<Hits>, Query(params): Query<SearchParams>) -> impl IntoResponse {
    let page = params.page.unwrap_or(1);
    hits.lock().unwrap().push((params.q.clone(), page));

    if params.q.trim().is_empty() || params.q == "nothing" {
        return Json(json!({ "results": [], "total_results": 0, "page": page }));
    }

    let start = u64::from(page.saturating_sub(1)) * 10;
    let end = (start + 10).min(CORPUS_SIZE);
    let results: Vec<_> = (start..end)
        .map(|i| {
            json!({
                "title": format!("{} #{i}", params.q),
                "url": format!("https://example.com/{i}"),
                "snippet": format!("about <mark>{}</mark> number {i}", params.q),
            })
        })
        .collect();
    Json(json!({ "results": results, "total_results": CORPUS_SIZE, "page": page }))
}

async fn broken() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "<html>Internal Server Error</html>")
}

async fn wrong_shape() -> impl IntoResponse {
    Json(json!({ "hits": [], "count": 0 }))
}

pub struct MockEndpoint {
    pub base: String,
    pub hits: Hits,
}

impl MockEndpoint {
    /// Start the mock on `127.0.0.1:0`. Routes: `/search`, `/broken`, `/wrong-shape`.
    pub async fn start() -> Self {
        let hits: Hits = Arc::default();
        let app = Router::new()
            .route("/search", get(search))
            .route("/broken", get(broken))
            .route("/wrong-shape", get(wrong_shape))
            .with_state(Arc::clone(&hits));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind mock endpoint");
        let addr = listener.local_addr().expect("mock endpoint address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock endpoint crashed");
        });

        MockEndpoint {
            base: format!("http://{addr}"),
            hits,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    pub fn hits(&self) -> Vec<(String, u32)> {
        self.hits.lock().unwrap().clone()
    }
}

/// An address nothing is listening on.
pub async fn closed_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("address");
    drop(listener);
    format!("http://{addr}/search")
}
