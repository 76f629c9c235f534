//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum serves as the top-level
//! error type that wraps domain-specific errors and implements `IntoResponse` for
//! automatic error handling in API endpoints.

pub mod auth;
pub mod config;
pub mod internal;
pub mod store;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, internal::InternalError, store::StoreError,
        validation::ValidationError,
    },
};

/// Message returned to clients while submissions are paused.
pub const ENTRIES_CLOSED_MESSAGE: &str =
    "O sistema não está aceitando novas sugestões no momento.";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Validation and authentication errors carry
/// user-facing messages; every store or internal failure becomes a generic 500 with
/// the detail logged server-side.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Submission rejected by the validator.
    ///
    /// Results in 400 Bad Request with the validation message surfaced verbatim.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for custom status code mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client error while talking to the hosted datastore.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Datastore answered but refused or failed the operation.
    #[error(transparent)]
    StoreErr(#[from] StoreError),

    /// Internal inconsistency, e.g. a stored row that cannot be decoded.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// New volantes are not being accepted right now.
    ///
    /// Results in 403 Forbidden.
    #[error("Submissions are paused")]
    EntriesClosed,

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `ValidationErr` and `BadRequest`
/// - 403 Forbidden - For `EntriesClosed`
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::ValidationErr(err) => {
                tracing::debug!("Rejected submission: {:?}", err);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: err.to_string(),
                    }),
                )
                    .into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::EntriesClosed => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: ENTRIES_CLOSED_MESSAGE.to_string(),
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Erro interno do servidor.".to_string(),
            }),
        )
            .into_response()
    }
}
