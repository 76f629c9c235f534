use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, stats::StatsDto},
    server::{error::AppError, service::stats::StatsService, state::AppState},
};

pub static STATS_TAG: &str = "stats";

/// GET /api/stats/top-numbers - Ten most chosen numbers and total volante count
#[utoipa::path(
    get,
    path = "/api/stats/top-numbers",
    tag = STATS_TAG,
    responses(
        (status = 200, description = "Number frequency ranking", body = StatsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_top_numbers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let stats = StatsService::new(state.store.as_ref()).top_numbers().await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}
