use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        admin::{
            AdminTokenDto, EntryStatusDto, LoginFailedDto, LogoutDto, ResetDatabaseDto,
            ResetResultDto, ToggleEntriesDto, TokenStatusDto, VerifyPasswordDto,
        },
        api::ErrorDto,
    },
    server::{
        error::AppError,
        middleware::auth::AdminGuard,
        service::{admin::AdminService, entry_status::EntryStatusService},
        state::AppState,
    },
};

pub static ADMIN_TAG: &str = "admin";

/// POST /api/admin/verify-password - Exchange the admin password for a token
///
/// # Returns
/// - `200 OK`: Token valid for 24 hours
/// - `400 Bad Request`: Password missing or shorter than 12 characters
/// - `401 Unauthorized`: Wrong password
#[utoipa::path(
    post,
    path = "/api/admin/verify-password",
    tag = ADMIN_TAG,
    request_body = VerifyPasswordDto,
    responses(
        (status = 200, description = "Password accepted", body = AdminTokenDto),
        (status = 400, description = "Password missing or too short", body = ErrorDto),
        (status = 401, description = "Incorrect password", body = LoginFailedDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_password(
    State(state): State<AppState>,
    payload: Result<Json<VerifyPasswordDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload = payload.map(|Json(p)| p).unwrap_or_default();

    let issued = state.admin_auth.login(payload.password.as_deref())?;

    Ok((
        StatusCode::OK,
        Json(AdminTokenDto {
            success: true,
            token: issued.token,
            expires_in: issued.expires_in,
        }),
    ))
}

/// GET /api/admin/verify-token - Check that the bearer token is still valid
#[utoipa::path(
    get,
    path = "/api/admin/verify-token",
    tag = ADMIN_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Token is valid", body = TokenStatusDto),
        (status = 401, description = "Token missing", body = ErrorDto),
        (status = 403, description = "Token invalid or expired", body = ErrorDto)
    ),
)]
pub async fn verify_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let claims = AdminGuard::new(&state.admin_auth, &headers).require()?;

    Ok((
        StatusCode::OK,
        Json(TokenStatusDto {
            valid: true,
            admin: claims.into_dto(),
        }),
    ))
}

/// POST /api/admin/logout - Acknowledge logout
///
/// Tokens are stateless; the client discards its copy.
#[utoipa::path(
    post,
    path = "/api/admin/logout",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Logged out", body = LogoutDto)
    ),
)]
pub async fn logout() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(LogoutDto {
            success: true,
            message: "Logout realizado.".to_string(),
        }),
    )
}

/// GET /api/admin/entry-status - Whether new volantes are accepted
///
/// Stores the default (`true`) the first time it is read.
#[utoipa::path(
    get,
    path = "/api/admin/entry-status",
    tag = ADMIN_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Current flag", body = EntryStatusDto),
        (status = 401, description = "Token missing", body = ErrorDto),
        (status = 403, description = "Token invalid or expired", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_entry_status(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AdminGuard::new(&state.admin_auth, &headers).require()?;

    let accept_new_entries = EntryStatusService::new(state.store.as_ref())
        .entry_status()
        .await?;

    Ok((StatusCode::OK, Json(EntryStatusDto { accept_new_entries })))
}

/// POST /api/admin/entry-status - Set whether new volantes are accepted
#[utoipa::path(
    post,
    path = "/api/admin/entry-status",
    tag = ADMIN_TAG,
    security(("bearer" = [])),
    request_body = EntryStatusDto,
    responses(
        (status = 200, description = "Flag stored", body = EntryStatusDto),
        (status = 400, description = "Body missing acceptNewEntries", body = ErrorDto),
        (status = 401, description = "Token missing", body = ErrorDto),
        (status = 403, description = "Token invalid or expired", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_entry_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<EntryStatusDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AdminGuard::new(&state.admin_auth, &headers).require()?;

    let Ok(Json(payload)) = payload else {
        return Err(AppError::BadRequest(
            "acceptNewEntries deve ser true ou false.".to_string(),
        ));
    };

    let accept_new_entries = EntryStatusService::new(state.store.as_ref())
        .set_accepting_entries(payload.accept_new_entries)
        .await?;

    Ok((StatusCode::OK, Json(EntryStatusDto { accept_new_entries })))
}

/// POST /api/admin/toggle-entries - Set or flip the accepting-entries flag
///
/// With `acceptNewEntries` in the body the flag is set to that value; with an empty or
/// absent body it is flipped.
#[utoipa::path(
    post,
    path = "/api/admin/toggle-entries",
    tag = ADMIN_TAG,
    security(("bearer" = [])),
    request_body(content = ToggleEntriesDto, description = "Optional; omit to flip the flag"),
    responses(
        (status = 200, description = "Flag after the change", body = EntryStatusDto),
        (status = 401, description = "Token missing", body = ErrorDto),
        (status = 403, description = "Token invalid or expired", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_entries(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ToggleEntriesDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AdminGuard::new(&state.admin_auth, &headers).require()?;

    let payload = payload.map(|Json(p)| p).unwrap_or_default();

    let accept_new_entries = EntryStatusService::new(state.store.as_ref())
        .toggle(payload.accept_new_entries)
        .await?;

    Ok((StatusCode::OK, Json(EntryStatusDto { accept_new_entries })))
}

/// DELETE /api/admin/reset-database - Delete every volante
///
/// Requires `{"confirmationCode": "RESETAR"}`.
#[utoipa::path(
    delete,
    path = "/api/admin/reset-database",
    tag = ADMIN_TAG,
    security(("bearer" = [])),
    request_body = ResetDatabaseDto,
    responses(
        (status = 200, description = "Volantes deleted", body = ResetResultDto),
        (status = 400, description = "Wrong confirmation code", body = ErrorDto),
        (status = 401, description = "Token missing", body = ErrorDto),
        (status = 403, description = "Token invalid or expired", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_database(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ResetDatabaseDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AdminGuard::new(&state.admin_auth, &headers).require()?;

    let payload = payload.map(|Json(p)| p).unwrap_or_default();

    let deleted = AdminService::new(state.store.as_ref())
        .reset_database(payload.confirmation_code.as_deref())
        .await?;

    Ok((
        StatusCode::OK,
        Json(ResetResultDto {
            success: true,
            deleted,
        }),
    ))
}
