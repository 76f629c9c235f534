use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::server::{
    data::{memory::MemoryStore, VolanteStore},
    router::router,
    service::admin::auth::{hash_password, AdminAuthService},
    state::AppState,
};


const PASSWORD: &str = "senha-super-secreta";

struct TestApp {
    router: Router,
    store: MemoryStore,
    auth: AdminAuthService,
}

impl TestApp {
    fn new() -> Self {
        let store = MemoryStore::new();
        let auth = AdminAuthService::new(&hash_password(PASSWORD), "test-secret");
        let router = router().with_state(AppState::new(
            Arc::new(store.clone()) as Arc<dyn VolanteStore>,
            auth.clone(),
        ));

        Self {
            router,
            store,
            auth,
        }
    }

    fn token(&self) -> String {
        self.auth.issue_token().unwrap().token
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        self.dispatch(request).await
    }

    /// Sends a GET with a raw `Authorization` header value.
    async fn get_with_authorization(&self, uri: &str, authorization: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .header(header::AUTHORIZATION, authorization)
            .body(Body::empty())
            .unwrap();

        self.dispatch(request).await
    }

    async fn dispatch(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, value)
    }
}

fn submission(name: &str, cpf: &str, numbers: Value) -> Value {
    json!({ "name": name, "cpf": cpf, "numbers": numbers })
}
