use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use icarus_client::http_optimizer::{HttpOptimizer, HttpOptimizerParams};
use serde_json::Value;

pub const OPTIMIZE_PATH: &str = "/api/optimize";

struct CannedResponse {
    status: StatusCode,
    body: String,
    received: Arc<Mutex<Vec<Value>>>,
}

/// In-process stand-in for the optimization service. Answers every
/// `POST /api/optimize` with the same response and records the request bodies.
pub struct FakeService {
    pub url: String,
    pub received: Arc<Mutex<Vec<Value>>>,
}

impl FakeService {
    pub fn optimizer(&self) -> HttpOptimizer {
        HttpOptimizer::new(HttpOptimizerParams {
            endpoint: self.url.clone(),
        })
    }

    pub fn received(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }
}

async fn optimize_handler(
    State(canned): State<Arc<CannedResponse>>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    canned.received.lock().unwrap().push(body);

    (
        canned.status,
        [(header::CONTENT_TYPE, "application/json")],
        canned.body.clone(),
    )
}

pub async fn spawn_service(status: StatusCode, body: impl Into<String>) -> FakeService {
    let received = Arc::new(Mutex::new(Vec::new()));
    let canned = Arc::new(CannedResponse {
        status,
        body: body.into(),
        received: Arc::clone(&received),
    });

    let app = Router::new()
        .route(OPTIMIZE_PATH, post(optimize_handler))
        .with_state(canned);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeService {
        url: format!("http://{}{}", addr, OPTIMIZE_PATH),
        received,
    }
}

/// An address nothing listens on.
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{}{}", addr, OPTIMIZE_PATH)
}
