use axum::{
    routing::{delete, get, post},
    Router,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        admin::{
            get_entry_status, logout, reset_database, set_entry_status, toggle_entries,
            verify_password, verify_token,
        },
        stats::get_top_numbers,
        volante::{create_volante, list_volantes},
    },
    state::AppState,
};

/// OpenAPI document served at `/api/docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(title = "Mega-Sena volantes API"),
    paths(
        crate::server::controller::volante::create_volante,
        crate::server::controller::volante::list_volantes,
        crate::server::controller::stats::get_top_numbers,
        crate::server::controller::admin::verify_password,
        crate::server::controller::admin::verify_token,
        crate::server::controller::admin::logout,
        crate::server::controller::admin::get_entry_status,
        crate::server::controller::admin::set_entry_status,
        crate::server::controller::admin::toggle_entries,
        crate::server::controller::admin::reset_database,
    ),
    modifiers(&BearerSecurity),
    tags(
        (name = "volante", description = "Volante submission and listing"),
        (name = "stats", description = "Number frequency statistics"),
        (name = "admin", description = "Password-gated administration")
    )
)]
pub struct ApiDoc;

struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/volantes", post(create_volante))
        .route("/api/volantes/list", get(list_volantes))
        .route("/api/stats/top-numbers", get(get_top_numbers))
        .route("/api/admin/verify-password", post(verify_password))
        .route("/api/admin/verify-token", get(verify_token))
        .route("/api/admin/logout", post(logout))
        .route(
            "/api/admin/entry-status",
            get(get_entry_status).post(set_entry_status),
        )
        .route("/api/admin/toggle-entries", post(toggle_entries))
        .route("/api/admin/reset-database", delete(reset_database))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
