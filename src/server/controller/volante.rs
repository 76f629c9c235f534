use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        volante::{CreateVolanteDto, VolanteCreatedDto, VolanteDto},
    },
    server::{
        error::AppError,
        model::volante::SubmissionPayload,
        service::{entry_status::EntryStatusService, volante::VolanteService},
        state::AppState,
    },
};

pub static VOLANTE_TAG: &str = "volante";

/// POST /api/volantes - Register a new volante
///
/// A body that is not valid JSON, or whose fields have the wrong types, is treated as an
/// empty submission and therefore rejected as missing fields.
#[utoipa::path(
    post,
    path = "/api/volantes",
    tag = VOLANTE_TAG,
    request_body = CreateVolanteDto,
    responses(
        (status = 201, description = "Volante registered", body = VolanteCreatedDto),
        (status = 400, description = "Submission failed validation", body = ErrorDto),
        (status = 403, description = "Submissions are paused", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_volante(
    State(state): State<AppState>,
    payload: Result<Json<SubmissionPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload = payload.map(|Json(p)| p).unwrap_or_default();

    if !EntryStatusService::new(state.store.as_ref())
        .is_accepting_entries()
        .await?
    {
        return Err(AppError::EntriesClosed);
    }

    let volante = VolanteService::new(state.store.as_ref())
        .register(&payload)
        .await?;

    Ok((StatusCode::CREATED, Json(volante.into_created_dto())))
}

/// GET /api/volantes/list - List every volante, oldest first
#[utoipa::path(
    get,
    path = "/api/volantes/list",
    tag = VOLANTE_TAG,
    responses(
        (status = 200, description = "All stored volantes", body = Vec<VolanteDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_volantes(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let volantes = VolanteService::new(state.store.as_ref()).list().await?;

    let dto: Vec<VolanteDto> = volantes.into_iter().map(|v| v.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}
