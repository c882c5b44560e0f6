use std::{collections::HashMap, sync::Arc, time::Duration};

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header, HeaderMap, Method, StatusCode},
    response::IntoResponse,
    routing::{any, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub tags: Vec<String>,
}

#[derive(Deserialize)]
pub struct CreateItem {
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Deserialize)]
pub struct UpdateItem {
    pub name: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// What `/echo` saw of the request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Echo {
    pub method: String,
    pub query: Vec<(String, String)>,
    pub content_type: Option<String>,
    pub body: String,
}

pub type Db = Arc<RwLock<HashMap<Uuid, Item>>>;

/// How long `/slow` waits before answering.
pub const SLOW_DELAY: Duration = Duration::from_secs(30);

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/{id}", get(get_item).patch(update_item).delete(delete_item))
        .route("/echo", any(echo))
        .route("/status/{code}", any(status))
        .route("/empty", any(empty))
        .route("/upload", post(upload))
        .route("/files/{name}", get(file))
        .route("/slow", any(slow))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Lists items, keeping only those carrying every `tag[]` in the query.
async fn list_items(
    State(db): State<Db>,
    Query(query): Query<Vec<(String, String)>>,
) -> Json<Vec<Item>> {
    let wanted: Vec<&str> = query
        .iter()
        .filter(|(key, _)| key == "tag[]")
        .map(|(_, value)| value.as_str())
        .collect();
    let items = db.read().await;
    let mut matching: Vec<Item> = items
        .values()
        .filter(|item| wanted.iter().all(|tag| item.tags.iter().any(|t| t == tag)))
        .cloned()
        .collect();
    matching.sort_by(|a, b| a.name.cmp(&b.name));
    Json(matching)
}

async fn create_item(
    State(db): State<Db>,
    Json(input): Json<CreateItem>,
) -> (StatusCode, Json<Item>) {
    let item = Item {
        id: Uuid::new_v4(),
        name: input.name,
        tags: input.tags,
    };
    db.write().await.insert(item.id, item.clone());
    (StatusCode::CREATED, Json(item))
}

async fn get_item(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<Item>, StatusCode> {
    let items = db.read().await;
    items.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_item(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateItem>,
) -> Result<Json<Item>, StatusCode> {
    let mut items = db.write().await;
    let item = items.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(name) = input.name {
        item.name = name;
    }
    if let Some(tags) = input.tags {
        item.tags = tags;
    }
    Ok(Json(item.clone()))
}

async fn delete_item(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    let mut items = db.write().await;
    items.remove(&id).map(|_| StatusCode::NO_CONTENT).ok_or(StatusCode::NOT_FOUND)
}

async fn echo(
    method: Method,
    Query(query): Query<Vec<(String, String)>>,
    headers: HeaderMap,
    body: Bytes,
) -> Json<Echo> {
    Json(Echo {
        method: method.to_string(),
        query,
        content_type: content_type(&headers),
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}

/// Answers with the requested status and a short text body.
async fn status(Path(code): Path<u16>) -> Result<(StatusCode, String), StatusCode> {
    let status = StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok((status, format!("status {code}")))
}

async fn empty() -> StatusCode {
    StatusCode::OK
}

/// Echoes the uploaded bytes back with the same content type.
async fn upload(headers: HeaderMap, body: Bytes) -> impl IntoResponse {
    let content_type =
        content_type(&headers).unwrap_or_else(|| "application/octet-stream".to_string());
    ([(header::CONTENT_TYPE, content_type)], body)
}

async fn file(Path(name): Path<String>) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "application/octet-stream".to_string()),
            (header::CONTENT_DISPOSITION, format!("attachment; filename=\"{name}\"")),
        ],
        file_contents(&name),
    )
}

/// Bytes served by `/files/{name}`.
pub fn file_contents(name: &str) -> Vec<u8> {
    format!("contents of {name}").into_bytes()
}

async fn slow() -> StatusCode {
    tokio::time::sleep(SLOW_DELAY).await;
    StatusCode::OK
}

fn content_type(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}
