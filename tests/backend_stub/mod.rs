#![allow(dead_code)]

use std::collections::HashMap;
use std::io::Read as _;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use serde_json::{Value, json};

/// What `POST /api/content` answers.
#[derive(Debug, Clone)]
pub enum CreateBehavior {
    Assign(String),
    Reject { status: u16, detail: Option<String> },
}

impl Default for CreateBehavior {
    fn default() -> Self {
        Self::Assign("abc123".to_owned())
    }
}

/// In-memory backend data. Records are JSON so tests can send partial shapes.
#[derive(Debug, Default)]
pub struct StubState {
    pub records: Vec<Value>,
    pub queries: HashMap<String, Vec<Value>>,
    pub analytics: Value,
    pub create: CreateBehavior,
    pub fail_exports: bool,
    pub requests: Vec<String>,
}

impl StubState {
    pub fn with_records(records: Vec<Value>) -> Self {
        Self {
            records,
            analytics: json!({ "total_content": 0 }),
            ..Self::default()
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|r| r.get("id").and_then(Value::as_str) == Some(id))
    }
}

pub struct BackendStub {
    pub origin: String,
    state: Arc<Mutex<StubState>>,
    shutdown_tx: Option<mpsc::Sender<()>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl BackendStub {
    pub fn spawn(state: StubState) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("start backend stub server");
        let origin = format!("http://{}", server.server_addr());
        let state = Arc::new(Mutex::new(state));

        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();
        let shared = Arc::clone(&state);

        let handle = thread::spawn(move || {
            loop {
                if shutdown_rx.try_recv().is_ok() {
                    break;
                }

                let mut request = match server.recv_timeout(Duration::from_millis(50)) {
                    Ok(Some(req)) => req,
                    Ok(None) => continue,
                    Err(_) => break,
                };

                let method = request.method().to_string();
                let path = request.url().to_string();
                let mut body = String::new();
                let _ = request.as_reader().read_to_string(&mut body);

                let (status, content_type, payload) = {
                    let mut state = shared.lock().expect("lock stub state");
                    state.requests.push(format!("{method} {path}"));
                    respond(&mut state, &method, &path, &body)
                };

                let header =
                    tiny_http::Header::from_bytes(&b"Content-Type"[..], content_type.as_bytes())
                        .expect("build header");
                let response = tiny_http::Response::from_string(payload)
                    .with_status_code(status)
                    .with_header(header);
                let _ = request.respond(response);
            }
        });

        Self {
            origin,
            state,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        }
    }

    /// `"METHOD /path"` for every request received so far.
    pub fn requests(&self) -> Vec<String> {
        self.state.lock().expect("lock stub state").requests.clone()
    }

    pub fn count(&self, request_line: &str) -> usize {
        self.requests().iter().filter(|r| *r == request_line).count()
    }

    pub fn record_ids(&self) -> Vec<String> {
        self.state
            .lock()
            .expect("lock stub state")
            .records
            .iter()
            .filter_map(|r| r.get("id").and_then(Value::as_str).map(str::to_owned))
            .collect()
    }
}

impl Drop for BackendStub {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

const JSON: &str = "application/json";

fn not_found() -> (u16, &'static str, String) {
    (404, JSON, json!({ "detail": "Content not found" }).to_string())
}

fn respond(state: &mut StubState, method: &str, path: &str, body: &str) -> (u16, &'static str, String) {
    let path = path.split('?').next().unwrap_or_default();
    let Some(rest) = path.strip_prefix("/api/") else {
        return not_found();
    };
    let decoded: Vec<String> = rest
        .split('/')
        .map(|segment| {
            urlencoding::decode(segment)
                .map(|s| s.into_owned())
                .unwrap_or_else(|_| segment.to_owned())
        })
        .collect();
    let segments: Vec<&str> = decoded.iter().map(String::as_str).collect();

    match (method, segments.as_slice()) {
        ("GET", ["content"]) => (200, JSON, Value::Array(state.records.clone()).to_string()),
        ("POST", ["content"]) => create(state, body),
        ("GET", ["content", id]) => match state.position(id) {
            Some(idx) => (200, JSON, state.records[idx].to_string()),
            None => not_found(),
        },
        ("DELETE", ["content", id]) => match state.position(id) {
            Some(idx) => {
                state.records.remove(idx);
                (200, JSON, json!({ "message": "Content deleted" }).to_string())
            }
            None => not_found(),
        },
        ("POST", ["content", id, "refresh"]) => match state.position(id) {
            Some(idx) => {
                state.records[idx]["freshness"] = json!({
                    "freshness_score": 100,
                    "status": "Very Fresh",
                    "days_old": 0,
                    "needs_update": false
                });
                (200, JSON, json!({ "message": "Content refreshed" }).to_string())
            }
            None => not_found(),
        },
        ("GET", ["content", id, "export", format]) => {
            if state.fail_exports {
                return (500, JSON, json!({ "detail": "export failed" }).to_string());
            }
            match state.position(id) {
                Some(idx) => export(&state.records[idx], format),
                None => not_found(),
            }
        }
        ("GET", ["queries", id]) => {
            let queries = state.queries.get(*id).cloned().unwrap_or_default();
            (200, JSON, Value::Array(queries).to_string())
        }
        ("GET", ["analytics"]) => (200, JSON, state.analytics.to_string()),
        ("GET", ["share", share_id]) => {
            let found = state
                .records
                .iter()
                .find(|r| r.get("share_id").and_then(Value::as_str) == Some(*share_id));
            match found {
                Some(record) => (200, JSON, record.to_string()),
                None => not_found(),
            }
        }
        ("GET", ["sitemap.xml"]) => (
            200,
            "application/xml",
            r#"<?xml version="1.0" encoding="UTF-8"?><urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"></urlset>"#.to_owned(),
        ),
        ("GET", ["robots.txt"]) => (200, "text/plain", "User-agent: *\nAllow: /\n".to_owned()),
        _ => not_found(),
    }
}

fn create(state: &mut StubState, body: &str) -> (u16, &'static str, String) {
    let input: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => return (400, JSON, json!({ "detail": "invalid json" }).to_string()),
    };
    match state.create.clone() {
        CreateBehavior::Reject { status, detail } => {
            let body = match detail {
                Some(detail) => json!({ "detail": detail }),
                None => json!({}),
            };
            (status, JSON, body.to_string())
        }
        CreateBehavior::Assign(id) => {
            let record = json!({
                "id": id,
                "title": input.get("title").cloned().unwrap_or(json!("Untitled")),
                "content": input.get("content").cloned().unwrap_or(json!("")),
                "url": input.get("url").cloned().unwrap_or(Value::Null),
                "keywords": [],
                "performance_score": 0
            });
            state.records.push(record.clone());
            (200, JSON, record.to_string())
        }
    }
}

fn export(record: &Value, format: &str) -> (u16, &'static str, String) {
    let field = |name: &str| record.get(name).cloned().unwrap_or(Value::Null);
    match format {
        "json" => (200, JSON, serde_json::to_string_pretty(record).unwrap_or_default()),
        "csv" => (
            200,
            "text/csv",
            format!("Field,Value\nid,{}\ntitle,{}\n", field("id"), field("title")),
        ),
        "html" => (
            200,
            "text/html",
            format!("<html><body><h1>{}</h1></body></html>", field("title")),
        ),
        _ => (400, JSON, json!({ "detail": "unsupported format" }).to_string()),
    }
}

pub fn record(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "content": "Body text",
        "url": null,
        "keywords": ["rust", "seo"],
        "performance_score": 72
    })
}
