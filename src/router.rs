use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa_swagger_ui::SwaggerUi;

use crate::db::ExerciseStore;
use crate::docs;
use crate::handlers::exercises::get_exercise;

/// Shared per-request state: the pooled exercise store plus the public
/// base URL advertised in the API docs.
#[derive(Clone)]
pub struct AppState {
    pub store: ExerciseStore,
    pub api_url: Option<String>,
}

impl AppState {
    pub fn new(store: ExerciseStore, api_url: Option<String>) -> Self {
        Self { store, api_url }
    }
}

/// Build the axum router: the lookup route, Swagger UI at `/api-docs`,
/// permissive CORS and request tracing.
pub fn praxis_router(state: AppState) -> Router {
    let openapi = docs::openapi(state.api_url.as_deref());
    Router::new()
        .route("/get-exercise", get(get_exercise))
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", openapi))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
