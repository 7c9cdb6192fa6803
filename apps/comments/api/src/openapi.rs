use utoipa::OpenApi;

/// Root OpenAPI document; each domain contributes its paths via `nest`
#[derive(OpenApi)]
#[openapi(
    components(schemas(axum_helpers::ErrorResponse)),
    info(
        title = "Comments API",
        version = "0.1.0",
        description = "CRUD service for blog post comments backed by PostgreSQL"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = domain_comments::handlers::URL, api = domain_comments::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
