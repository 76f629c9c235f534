use crate::{
    client::{
        api::helper::{
            delete, get, parse_response, post, send_request, serialize_json, with_token,
        },
        model::error::ApiError,
    },
    model::admin::{
        AdminTokenDto, EntryStatusDto, LogoutDto, ResetDatabaseDto, ResetResultDto,
        ToggleEntriesDto, TokenStatusDto, VerifyPasswordDto,
    },
};

pub async fn verify_password(password: String) -> Result<AdminTokenDto, ApiError> {
    let body = serialize_json(&VerifyPasswordDto {
        password: Some(password),
    })?;
    let response = send_request(post("/api/admin/verify-password").body(body)).await?;
    parse_response(response).await
}

pub async fn verify_token(token: &str) -> Result<TokenStatusDto, ApiError> {
    let response = send_request(with_token(get("/api/admin/verify-token"), token)).await?;
    parse_response(response).await
}

pub async fn logout() -> Result<LogoutDto, ApiError> {
    let response = send_request(post("/api/admin/logout")).await?;
    parse_response(response).await
}

pub async fn get_entry_status(token: &str) -> Result<EntryStatusDto, ApiError> {
    let response = send_request(with_token(get("/api/admin/entry-status"), token)).await?;
    parse_response(response).await
}

/// Sets the accepting-entries flag, or flips it when `accept` is `None`.
pub async fn toggle_entries(
    token: &str,
    accept: Option<bool>,
) -> Result<EntryStatusDto, ApiError> {
    let body = serialize_json(&ToggleEntriesDto {
        accept_new_entries: accept,
    })?;
    let response =
        send_request(with_token(post("/api/admin/toggle-entries"), token).body(body)).await?;
    parse_response(response).await
}

pub async fn reset_database(
    token: &str,
    confirmation_code: String,
) -> Result<ResetResultDto, ApiError> {
    let body = serialize_json(&ResetDatabaseDto {
        confirmation_code: Some(confirmation_code),
    })?;
    let response =
        send_request(with_token(delete("/api/admin/reset-database"), token).body(body)).await?;
    parse_response(response).await
}
