//! Runs `SupabaseStore` against a local PostgREST stand-in served by axum.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    extract::{Query, State},
    http::{header::AUTHORIZATION, HeaderMap, HeaderName, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{Duration, TimeZone, Utc};
use serde_json::{json, Value};

use crate::server::{
    data::{supabase::SupabaseStore, VolanteStore},
    error::{store::StoreError, AppError},
    model::volante::CreateVolanteParam,
};

mod append_entry;
mod config;
mod delete_all_entries;
mod fetch_entries;

const ANON_KEY: &str = "anon-key";

type Params = Query<HashMap<String, String>>;

struct Tables {
    volantes: Vec<Value>,
    config: HashMap<String, String>,
    next_id: i64,
    /// Most rows a single read returns, like PostgREST's `db-max-rows`.
    max_rows: usize,
}

#[derive(Clone)]
struct FakePostgrest {
    tables: Arc<Mutex<Tables>>,
}

/// A running PostgREST stand-in and the URL it listens on.
struct FakeSupabase {
    fake: FakePostgrest,
    base_url: String,
}

impl FakeSupabase {
    async fn start() -> Self {
        Self::start_with_max_rows(usize::MAX).await
    }

    async fn start_with_max_rows(max_rows: usize) -> Self {
        let fake = FakePostgrest {
            tables: Arc::new(Mutex::new(Tables {
                volantes: Vec::new(),
                config: HashMap::new(),
                next_id: 0,
                max_rows,
            })),
        };

        let app = Router::new()
            .route(
                "/rest/v1/volantes",
                get(select_volantes)
                    .post(insert_volantes)
                    .delete(delete_volantes),
            )
            .route(
                "/rest/v1/system_config",
                get(select_config).post(upsert_config),
            )
            .with_state(fake.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            fake,
            base_url: format!("http://{}", addr),
        }
    }

    fn store(&self) -> SupabaseStore {
        SupabaseStore::new(
            reqwest::Client::new(),
            self.base_url.clone(),
            ANON_KEY.to_string(),
        )
    }

    fn stored_volantes(&self) -> usize {
        self.fake.tables.lock().unwrap().volantes.len()
    }

    fn stored_config(&self, key: &str) -> Option<String> {
        self.fake.tables.lock().unwrap().config.get(key).cloned()
    }
}

fn param(name: &str, cpf: &str, numbers: Vec<u8>, minutes: i64) -> CreateVolanteParam {
    CreateVolanteParam {
        name: name.to_string(),
        cpf: cpf.to_string(),
        numbers,
        timestamp: Utc.with_ymd_and_hms(2026, 1, 10, 12, 0, 0).unwrap() + Duration::minutes(minutes),
    }
}

fn authorized(headers: &HeaderMap) -> bool {
    let header = |name: HeaderName| headers.get(name).and_then(|value| value.to_str().ok());
    let bearer = format!("Bearer {}", ANON_KEY);
    header(HeaderName::from_static("apikey")) == Some(ANON_KEY)
        && header(AUTHORIZATION) == Some(bearer.as_str())
}

fn prefers(headers: &HeaderMap, preference: &str) -> bool {
    headers
        .get("prefer")
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.split(',').any(|p| p.trim() == preference))
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

async fn select_volantes(
    State(fake): State<FakePostgrest>,
    headers: HeaderMap,
    Query(params): Params,
) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "Invalid API key");
    }
    if params.get("order").map(String::as_str) != Some("timestamp.asc,id.asc") {
        return error(StatusCode::BAD_REQUEST, "unexpected order");
    }

    let tables = fake.tables.lock().unwrap();
    let offset = params
        .get("offset")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    let limit = params
        .get("limit")
        .and_then(|v| v.parse().ok())
        .unwrap_or(usize::MAX)
        .min(tables.max_rows);

    let page: Vec<Value> = tables
        .volantes
        .iter()
        .skip(offset)
        .take(limit)
        .cloned()
        .collect();

    Json(page).into_response()
}

async fn insert_volantes(
    State(fake): State<FakePostgrest>,
    headers: HeaderMap,
    Json(rows): Json<Vec<Value>>,
) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "Invalid API key");
    }

    let mut tables = fake.tables.lock().unwrap();
    let mut created = Vec::new();
    for mut row in rows {
        let identity = |v: &Value| {
            (
                v["cpf"].as_str().map(str::to_string),
                v["name"].as_str().map(|n| n.trim().to_lowercase()),
            )
        };
        if tables.volantes.iter().any(|v| identity(v) == identity(&row)) {
            return error(
                StatusCode::CONFLICT,
                "duplicate key value violates unique constraint",
            );
        }

        tables.next_id += 1;
        row["id"] = json!(tables.next_id);
        tables.volantes.push(row.clone());
        created.push(row);
    }

    if prefers(&headers, "return=representation") {
        (StatusCode::CREATED, Json(created)).into_response()
    } else {
        StatusCode::CREATED.into_response()
    }
}

async fn delete_volantes(
    State(fake): State<FakePostgrest>,
    headers: HeaderMap,
    Query(params): Params,
) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "Invalid API key");
    }
    if params.get("id").map(String::as_str) != Some("not.is.null") {
        return error(StatusCode::BAD_REQUEST, "DELETE requires a WHERE clause");
    }

    let deleted: Vec<Value> = fake
        .tables
        .lock()
        .unwrap()
        .volantes
        .drain(..)
        .map(|row| json!({ "id": row["id"] }))
        .collect();

    if prefers(&headers, "return=representation") {
        Json(deleted).into_response()
    } else {
        StatusCode::NO_CONTENT.into_response()
    }
}

async fn select_config(
    State(fake): State<FakePostgrest>,
    headers: HeaderMap,
    Query(params): Params,
) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "Invalid API key");
    }

    let tables = fake.tables.lock().unwrap();
    let rows: Vec<Value> = params
        .get("key")
        .and_then(|filter| filter.strip_prefix("eq."))
        .and_then(|key| tables.config.get_key_value(key))
        .map(|(key, value)| json!({ "key": key, "value": value }))
        .into_iter()
        .collect();

    Json(rows).into_response()
}

async fn upsert_config(
    State(fake): State<FakePostgrest>,
    headers: HeaderMap,
    Query(params): Params,
    Json(rows): Json<Vec<Value>>,
) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "Invalid API key");
    }

    let merge = params.get("on_conflict").map(String::as_str) == Some("key")
        && prefers(&headers, "resolution=merge-duplicates");

    let mut tables = fake.tables.lock().unwrap();
    for row in rows {
        let (Some(key), Some(value)) = (row["key"].as_str(), row["value"].as_str()) else {
            return error(StatusCode::BAD_REQUEST, "key and value are required");
        };
        if !merge && tables.config.contains_key(key) {
            return error(
                StatusCode::CONFLICT,
                "duplicate key value violates unique constraint",
            );
        }
        tables.config.insert(key.to_string(), value.to_string());
    }

    StatusCode::CREATED.into_response()
}
