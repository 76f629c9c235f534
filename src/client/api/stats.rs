use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::stats::StatsDto,
};

pub async fn get_top_numbers() -> Result<StatsDto, ApiError> {
    let response = send_request(get("/api/stats/top-numbers")).await?;
    parse_response(response).await
}
