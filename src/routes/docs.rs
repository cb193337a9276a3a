//! OpenAPI document generated from the handler annotations, with Swagger UI.

use crate::error::ErrorBody;
use crate::handlers::test as handlers;
use crate::model::{CreateTest, Test, TestPatch};
use crate::response::{DeleteResult, TestList};
use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub const DOCS_PATH: &str = "/api-docs";
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(title = "Test API", version = "1.0.0", description = "CRUD API for course tests"),
    paths(
        handlers::list_tests,
        handlers::get_test,
        handlers::create_test,
        handlers::update_test,
        handlers::delete_test,
    ),
    components(schemas(Test, CreateTest, TestPatch, TestList, DeleteResult, ErrorBody)),
    tags((name = "test", description = "API to manage tests"))
)]
pub struct ApiDoc;

/// Swagger UI at `/api-docs/`, backed by the JSON document at `OPENAPI_PATH`.
pub fn docs_routes() -> Router {
    Router::new().merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, ApiDoc::openapi()))
}
