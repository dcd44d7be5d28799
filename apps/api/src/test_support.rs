//! In-process HTTP stub used to exercise the outbound API clients.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Query, State},
    http::{Method, StatusCode, Uri},
    Json, Router,
};
use serde_json::Value;

/// One request as seen by the stub.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: HashMap<String, String>,
    /// JSON body, or `Value::Null` when the body is empty or not JSON.
    pub body: Value,
}

struct Stub {
    status: StatusCode,
    reply: Value,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Answers every request with a fixed status and JSON body and records it.
pub struct StubServer {
    pub base_url: String,
    stub: Arc<Stub>,
}

impl StubServer {
    pub async fn start(status: StatusCode, reply: Value) -> Self {
        let stub = Arc::new(Stub {
            status,
            reply,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new().fallback(record).with_state(stub.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            stub,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.stub.requests.lock().unwrap().clone()
    }
}

async fn record(
    State(stub): State<Arc<Stub>>,
    method: Method,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
    body: String,
) -> (StatusCode, Json<Value>) {
    stub.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query,
        body: serde_json::from_str(&body).unwrap_or(Value::Null),
    });
    (stub.status, Json(stub.reply.clone()))
}
