//! `VolanteStore` backed by a hosted PostgREST API (Supabase).
//!
//! Talks to `{base_url}/rest/v1/volantes` and `{base_url}/rest/v1/system_config` with the
//! project's anon key. The hosted `volantes.numbers` column is a JSON/array column, so
//! numbers travel as a JSON array rather than encoded text.
//!
//! PostgREST caps every response at the project's `db-max-rows`, so full scans walk
//! the table with `limit`/`offset` until an empty page comes back.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};

use crate::server::{
    data::VolanteStore,
    error::{store::StoreError, AppError},
    model::volante::{CreateVolanteParam, Volante},
};

const VOLANTES_PATH: &str = "/rest/v1/volantes";
const SYSTEM_CONFIG_PATH: &str = "/rest/v1/system_config";

/// Rows requested per page; matches Supabase's default `db-max-rows`.
pub const DEFAULT_PAGE_SIZE: usize = 1000;

#[derive(Debug, Deserialize)]
struct VolanteRow {
    id: i64,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    cpf: Option<String>,
    #[serde(default)]
    numbers: Option<Vec<u8>>,
    timestamp: DateTime<Utc>,
}

impl VolanteRow {
    fn into_volante(self) -> Volante {
        Volante {
            id: self.id,
            name: self.name.unwrap_or_default(),
            cpf: self.cpf.unwrap_or_default(),
            numbers: self.numbers.unwrap_or_default(),
            timestamp: self.timestamp,
        }
    }
}

#[derive(Debug, Serialize)]
struct NewVolanteRow<'a> {
    name: &'a str,
    cpf: &'a str,
    numbers: &'a [u8],
    timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ConfigRow {
    key: String,
    value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

#[derive(Clone)]
pub struct SupabaseStore {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
    page_size: usize,
}

impl SupabaseStore {
    /// Creates a store talking to the given Supabase project.
    ///
    /// # Arguments
    /// - `http` - Shared HTTP client
    /// - `base_url` - Project URL without trailing slash, e.g. `https://xyz.supabase.co`
    /// - `anon_key` - Project anon key sent as `apikey` and bearer token
    pub fn new(http: reqwest::Client, base_url: String, anon_key: String) -> Self {
        Self {
            http,
            base_url,
            anon_key,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Overrides the number of rows requested per page when scanning volantes.
    #[cfg(test)]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
    }

    /// Returns the response when its status is a success, otherwise a `StoreError`.
    async fn check(operation: &'static str, response: Response) -> Result<Response, AppError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::CONFLICT {
            return Err(StoreError::Conflict.into());
        }

        let body = response.text().await.unwrap_or_default();
        Err(StoreError::UnexpectedStatus {
            operation,
            status: status.as_u16(),
            body,
        }
        .into())
    }
}

#[async_trait]
impl VolanteStore for SupabaseStore {
    async fn fetch_entries(&self) -> Result<Vec<Volante>, AppError> {
        let limit = self.page_size.to_string();
        let mut volantes = Vec::new();

        // The server may return fewer rows than requested, so only an empty page ends
        // the scan.
        loop {
            let offset = volantes.len().to_string();
            let response = self
                .authorize(self.http.get(self.url(VOLANTES_PATH)))
                .query(&[
                    ("select", "*"),
                    ("order", "timestamp.asc,id.asc"),
                    ("limit", limit.as_str()),
                    ("offset", offset.as_str()),
                ])
                .send()
                .await?;
            let rows: Vec<VolanteRow> = Self::check("fetch volantes", response)
                .await?
                .json()
                .await?;

            if rows.is_empty() {
                break;
            }
            volantes.extend(rows.into_iter().map(VolanteRow::into_volante));
        }

        Ok(volantes)
    }

    async fn append_entry(&self, param: CreateVolanteParam) -> Result<Volante, AppError> {
        let row = NewVolanteRow {
            name: &param.name,
            cpf: &param.cpf,
            numbers: &param.numbers,
            timestamp: param.timestamp,
        };

        let response = self
            .authorize(self.http.post(self.url(VOLANTES_PATH)))
            .header("Prefer", "return=representation")
            .json(&[row])
            .send()
            .await?;
        let rows: Vec<VolanteRow> = Self::check("insert volante", response)
            .await?
            .json()
            .await?;

        rows.into_iter()
            .next()
            .map(VolanteRow::into_volante)
            .ok_or_else(|| StoreError::MissingRow("insert volante").into())
    }

    async fn delete_all_entries(&self) -> Result<u64, AppError> {
        // PostgREST refuses unfiltered deletes
        let response = self
            .authorize(self.http.delete(self.url(VOLANTES_PATH)))
            .query(&[("id", "not.is.null"), ("select", "id")])
            .header("Prefer", "return=representation")
            .send()
            .await?;
        let rows: Vec<serde_json::Value> = Self::check("delete volantes", response)
            .await?
            .json()
            .await?;

        Ok(rows.len() as u64)
    }

    async fn get_config(&self, key: &str) -> Result<Option<String>, AppError> {
        let key_filter = format!("eq.{}", key);
        let response = self
            .authorize(self.http.get(self.url(SYSTEM_CONFIG_PATH)))
            .query(&[("select", "key,value"), ("key", key_filter.as_str())])
            .send()
            .await?;
        let rows: Vec<ConfigRow> = Self::check("fetch config", response)
            .await?
            .json()
            .await?;

        Ok(rows.into_iter().next().map(|row| row.value))
    }

    async fn set_config(&self, key: &str, value: &str) -> Result<(), AppError> {
        let row = ConfigRow {
            key: key.to_string(),
            value: value.to_string(),
            updated_at: Some(Utc::now()),
        };

        let response = self
            .authorize(self.http.post(self.url(SYSTEM_CONFIG_PATH)))
            .query(&[("on_conflict", "key")])
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(&[row])
            .send()
            .await?;
        Self::check("upsert config", response).await?;

        Ok(())
    }
}
