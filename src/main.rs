mod client;
mod model;
mod util;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;
        use tower_http::cors::{Any, CorsLayer};

        use crate::server::{
            config::Config, service::admin::auth::AdminAuthService, startup, state::AppState,
        };

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let store = startup::connect_to_store(&config).await?;
        let admin_auth = AdminAuthService::from_config(&config);

        tracing::info!("Starting server");

        let mut router = dioxus::server::router(App);
        let server_routes = server::router::router()
            .with_state(AppState::new(store, admin_auth))
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            );
        router = router.merge(server_routes);

        Ok(router)
    })
}
