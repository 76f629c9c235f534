use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::{
    admin::{LoginFailedDto, MIN_PASSWORD_LENGTH},
    api::ErrorDto,
};

#[derive(Error, Debug)]
pub enum AuthError {
    /// Login request without a password.
    #[error("Password missing from login request")]
    PasswordRequired,

    /// Login password shorter than the minimum length.
    #[error("Password shorter than {MIN_PASSWORD_LENGTH} characters")]
    PasswordTooShort,

    /// Password hash does not match the configured admin hash.
    #[error("Incorrect admin password")]
    IncorrectPassword,

    /// Admin route called without an `Authorization` header or with an empty token.
    #[error("Missing bearer token")]
    MissingToken,

    /// Token signature, claims or expiry check failed.
    #[error("Invalid or expired token: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),
}

/// Converts authentication errors into HTTP responses.
///
/// - `PasswordRequired` / `PasswordTooShort` → 400 Bad Request
/// - `IncorrectPassword` → 401 Unauthorized with `{success: false, error}`
/// - `MissingToken` → 401 Unauthorized
/// - `InvalidToken` → 403 Forbidden
///
/// Token failures are logged at debug level; the client only sees the generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::PasswordRequired => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "Senha obrigatória.".to_string(),
                }),
            )
                .into_response(),
            Self::PasswordTooShort => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: format!(
                        "A senha deve ter no mínimo {} caracteres.",
                        MIN_PASSWORD_LENGTH
                    ),
                }),
            )
                .into_response(),
            Self::IncorrectPassword => (
                StatusCode::UNAUTHORIZED,
                Json(LoginFailedDto {
                    success: false,
                    error: "Senha incorreta.".to_string(),
                }),
            )
                .into_response(),
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Token não fornecido.".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidToken(err) => {
                dioxus_logger::tracing::debug!("Rejected admin token: {}", err);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "Token inválido ou expirado.".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
