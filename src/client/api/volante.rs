use crate::{
    client::{
        api::helper::{parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::volante::{CreateVolanteDto, VolanteCreatedDto},
};

/// Submits a volante.
pub async fn submit_volante(dto: &CreateVolanteDto) -> Result<VolanteCreatedDto, ApiError> {
    let body = serialize_json(dto)?;
    let response = send_request(post("/api/volantes").body(body)).await?;
    parse_response(response).await
}
