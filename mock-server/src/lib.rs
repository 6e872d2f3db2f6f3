use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

pub const CONTEXT: &str = "/pa-admin-api/v3";
pub const USERNAME: &str = "Administrator";
pub const PASSWORD: &str = "2Access";
pub const VERSION: &str = "8.1.0";

pub const SEEDED_CERTIFICATE_ID: i64 = 1;
pub const SEEDED_CERTIFICATE_PEM: &str = "-----BEGIN CERTIFICATE-----\n\
MIIBszCCAV2gAwIBAgIJAKs3hT0mZ0ZhMA0GCSqGSIb3DQEBCwUAMBMxETAPBgNV\n\
BAMMCHBhLWFkbWluMB4XDTI0MDEwMTAwMDAwMFoXDTM0MDEwMTAwMDAwMFowEzER\n\
-----END CERTIFICATE-----\n";

/// Size of every PKCS#12 export; above ureq's default 10 MiB read cap.
pub const PKCS12_EXPORT_LEN: usize = 11 * 1024 * 1024;

const RESOURCES: &[&str] = &["agents", "sites", "certificates", "rules"];
const READ_ONLY: &[&str] = &["certificates"];

/// In-memory admin state. Ids come from one sequence shared by all resources.
#[derive(Debug, Default)]
pub struct Store {
    next_id: i64,
    resources: HashMap<&'static str, BTreeMap<i64, Value>>,
    certificate_files: HashMap<i64, String>,
}

impl Store {
    fn seeded() -> Self {
        let mut store = Store {
            next_id: SEEDED_CERTIFICATE_ID + 1,
            ..Default::default()
        };
        store.resources.entry("certificates").or_default().insert(
            SEEDED_CERTIFICATE_ID,
            json!({
                "id": SEEDED_CERTIFICATE_ID,
                "alias": "pa-admin",
                "subjectDn": "CN=pa-admin",
                "issuerDn": "CN=pa-admin",
                "subjectAlternativeNames": [],
                "keyAlgorithm": "RSA",
                "status": "Valid"
            }),
        );
        store
            .certificate_files
            .insert(SEEDED_CERTIFICATE_ID, SEEDED_CERTIFICATE_PEM.to_string());
        store
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::seeded()));
    let api = Router::new()
        .route("/version", get(version))
        .route("/broken", get(broken))
        .route("/certificates/{id}/file", get(certificate_file))
        .route("/agents/{id}/config/{ids}", get(agent_file))
        .route("/keyPairs/{id}/pkcs12", post(export_key_pair))
        .route("/{resource}", get(list).post(create))
        .route("/{resource}/{id}", get(fetch).put(update).delete(remove))
        .layer(middleware::from_fn(guard))
        .with_state(db);
    Router::new().nest(CONTEXT, api)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn failure(status: StatusCode, flash: &str) -> Response {
    (status, Json(json!({ "form": {}, "flash": [flash] }))).into_response()
}

fn resource_name(resource: &str) -> Option<&'static str> {
    RESOURCES.iter().copied().find(|r| *r == resource)
}

/// Rejects calls without valid Basic credentials (401) or without the XSRF
/// header (403), the way the admin API does.
async fn guard(request: Request, next: Next) -> Response {
    let expected = format!("Basic {}", STANDARD.encode(format!("{USERNAME}:{PASSWORD}")));
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == expected);
    if !authorized {
        return failure(StatusCode::UNAUTHORIZED, "Invalid credentials");
    }
    if !request.headers().contains_key("x-xsrf-header") {
        return failure(StatusCode::FORBIDDEN, "Missing X-XSRF-Header");
    }
    next.run(request).await
}

async fn version() -> Json<Value> {
    Json(json!({ "version": VERSION }))
}

async fn broken() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "text/html")],
        "<html><body><h1>500 Internal Server Error</h1></body></html>",
    )
        .into_response()
}

fn validate(body: &Value) -> Result<(), Response> {
    let name = body.get("name").and_then(Value::as_str).unwrap_or("");
    if name.trim().is_empty() {
        let payload = json!({
            "form": { "name": ["must not be blank"] },
            "flash": ["Validation failed"]
        });
        return Err((StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response());
    }
    Ok(())
}

async fn list(
    State(db): State<Db>,
    Path(resource): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let Some(resource) = resource_name(&resource) else {
        return failure(StatusCode::NOT_FOUND, "Resource not found");
    };
    let store = db.read().await;
    let name = params.get("name").map(String::as_str).unwrap_or("");
    let alias = params.get("alias").map(String::as_str).unwrap_or("");
    let items: Vec<Value> = store
        .resources
        .get(resource)
        .into_iter()
        .flat_map(|items| items.values())
        .filter(|item| name.is_empty() || item["name"] == name)
        .filter(|item| alias.is_empty() || item["alias"] == alias)
        .cloned()
        .collect();
    Json(json!({ "items": items })).into_response()
}

async fn create(
    State(db): State<Db>,
    Path(resource): Path<String>,
    Json(mut body): Json<Value>,
) -> Response {
    let Some(resource) = resource_name(&resource) else {
        return failure(StatusCode::NOT_FOUND, "Resource not found");
    };
    if READ_ONLY.contains(&resource) {
        return failure(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed");
    }
    if let Err(response) = validate(&body) {
        return response;
    }
    let mut store = db.write().await;
    let id = store.next_id;
    store.next_id += 1;
    body["id"] = json!(id);
    store
        .resources
        .entry(resource)
        .or_default()
        .insert(id, body.clone());
    tracing::debug!(resource, id, "created");
    Json(body).into_response()
}

async fn fetch(State(db): State<Db>, Path((resource, id)): Path<(String, i64)>) -> Response {
    let store = db.read().await;
    match resource_name(&resource)
        .and_then(|r| store.resources.get(r))
        .and_then(|items| items.get(&id))
    {
        Some(item) => Json(item.clone()).into_response(),
        None => failure(StatusCode::NOT_FOUND, "Resource not found"),
    }
}

async fn update(
    State(db): State<Db>,
    Path((resource, id)): Path<(String, i64)>,
    Json(mut body): Json<Value>,
) -> Response {
    let Some(resource) = resource_name(&resource) else {
        return failure(StatusCode::NOT_FOUND, "Resource not found");
    };
    if READ_ONLY.contains(&resource) {
        return failure(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed");
    }
    if let Err(response) = validate(&body) {
        return response;
    }
    let mut store = db.write().await;
    let Some(item) = store
        .resources
        .get_mut(resource)
        .and_then(|items| items.get_mut(&id))
    else {
        return failure(StatusCode::NOT_FOUND, "Resource not found");
    };
    body["id"] = json!(id);
    *item = body.clone();
    Json(body).into_response()
}

async fn remove(State(db): State<Db>, Path((resource, id)): Path<(String, i64)>) -> Response {
    let mut store = db.write().await;
    let removed = resource_name(&resource)
        .and_then(|r| store.resources.get_mut(r))
        .and_then(|items| items.remove(&id));
    match removed {
        Some(_) => {
            store.certificate_files.remove(&id);
            StatusCode::OK.into_response()
        }
        None => failure(StatusCode::NOT_FOUND, "Resource not found"),
    }
}

async fn certificate_file(State(db): State<Db>, Path(id): Path<i64>) -> Response {
    let store = db.read().await;
    match store.certificate_files.get(&id) {
        Some(pem) => (
            [(header::CONTENT_TYPE, "application/x-pem-file")],
            pem.clone(),
        )
            .into_response(),
        None => failure(StatusCode::NOT_FOUND, "Resource not found"),
    }
}

async fn agent_file(
    State(db): State<Db>,
    Path((id, shared_secret_ids)): Path<(i64, String)>,
) -> Response {
    let store = db.read().await;
    let Some(agent) = store.resources.get("agents").and_then(|a| a.get(&id)) else {
        return failure(StatusCode::NOT_FOUND, "Resource not found");
    };
    let properties = format!(
        "agent.engine.configuration.scheme=https\n\
         agent.engine.configuration.host={}\n\
         agent.engine.configuration.port={}\n\
         agent.engine.configuration.shared.secret.ids={shared_secret_ids}\n",
        agent["hostname"].as_str().unwrap_or_default(),
        agent["port"],
    );
    ([(header::CONTENT_TYPE, "text/plain")], properties).into_response()
}

async fn export_key_pair(Path(_id): Path<i64>, Json(body): Json<Value>) -> Response {
    let password = body.get("password").and_then(Value::as_str).unwrap_or("");
    if password.is_empty() {
        let payload = json!({
            "form": { "password": ["must not be blank"] },
            "flash": ["Validation failed"]
        });
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
    }
    (
        [(header::CONTENT_TYPE, "application/x-pkcs12")],
        vec![0x5a_u8; PKCS12_EXPORT_LEN],
    )
        .into_response()
}
