use utoipa::OpenApi;
use utoipa::openapi::ServerBuilder;

use crate::db::models::ExerciseRecord;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "API Documentation",
        version = "1.0.0",
        description = "API information"
    ),
    paths(crate::handlers::exercises::get_exercise),
    components(schemas(ExerciseRecord))
)]
pub struct ApiDoc;

/// OpenAPI document, with the configured public base URL (if any) in the
/// servers list.
pub fn openapi(api_url: Option<&str>) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    if let Some(url) = api_url {
        doc.servers = Some(vec![ServerBuilder::new().url(url).build()]);
    }
    doc
}
