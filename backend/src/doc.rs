//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: every HTTP endpoint from the inbound layer (tasks, stats,
//!   categories, auth)
//! - **Schemas**: wrappers from [`crate::inbound::http::schemas`] that
//!   describe domain types without coupling them to utoipa
//! - **Security**: bearer token authentication scheme
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::login::LoginRequest;
use crate::inbound::http::schemas::{
    CategorySchema, CompletedPerDaySchema, CreateTaskRequestSchema, ErrorSchema,
    FieldLocationSchema, FieldViolationSchema, LoginSessionSchema, PrioritySchema, TaskSchema,
    UserProductivitySchema, UserSchema,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Name of the bearer security scheme referenced by protected paths.
pub const BEARER_SCHEME: &str = "BearerToken";

/// Enrich the generated document with the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            BEARER_SCHEME,
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .description(Some("Token issued by POST /auth/login."))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Taskboard API",
        description = "In-memory to-do list with owner-scoped listing, statistics and bearer token authentication."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("BearerToken" = [])),
    paths(
        crate::inbound::http::tasks::list_tasks,
        crate::inbound::http::tasks::create_task,
        crate::inbound::http::stats::completed_per_day,
        crate::inbound::http::stats::productivity,
        crate::inbound::http::categories::list_categories,
        crate::inbound::http::login::login,
    ),
    components(schemas(
        TaskSchema,
        PrioritySchema,
        CreateTaskRequestSchema,
        CategorySchema,
        UserSchema,
        LoginRequest,
        LoginSessionSchema,
        CompletedPerDaySchema,
        UserProductivitySchema,
        ErrorSchema,
        FieldViolationSchema,
        FieldLocationSchema
    )),
    tags(
        (name = "tasks", description = "Owner-scoped task listing and creation"),
        (name = "stats", description = "Aggregates across the task collection"),
        (name = "categories", description = "Reference data for task categories"),
        (name = "auth", description = "Token issuance")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying OpenAPI paths, schemas and security wiring.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/api/tasks")]
    #[case("/api/stats/completed-per-day")]
    #[case("/api/stats/productivity")]
    #[case("/api/categories")]
    #[case("/auth/login")]
    fn every_route_is_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[rstest]
    fn tasks_path_documents_list_and_create() {
        let doc = ApiDoc::openapi();
        let item = doc.paths.paths.get("/api/tasks").expect("tasks path");
        assert!(item.get.is_some());
        assert!(item.post.is_some());
    }

    #[rstest]
    fn task_schema_uses_camel_case_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let task = schemas.get("Task").expect("Task schema");

        for field in ["id", "title", "completed", "priority", "ownerId", "categoryId", "createdDate"] {
            assert_object_schema_has_field(task, field);
        }
    }

    #[rstest]
    fn error_schema_has_message_and_details() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error = schemas.get("Error").expect("Error schema");

        assert_object_schema_has_field(error, "error");
        assert_object_schema_has_field(error, "details");
    }

    #[rstest]
    fn bearer_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.as_ref().expect("components");
        assert!(components.security_schemes.contains_key(BEARER_SCHEME));
    }

    #[rstest]
    #[case("Priority", &["low", "medium", "high"])]
    #[case("FieldLocation", &["query", "body"])]
    fn enum_schemas_list_their_wire_names(#[case] name: &str, #[case] expected: &[&str]) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let rendered = serde_json::to_value(schemas.get(name).expect("enum schema"))
            .expect("schema serialises");
        let values: Vec<&str> = rendered["enum"]
            .as_array()
            .expect("string enum")
            .iter()
            .filter_map(serde_json::Value::as_str)
            .collect();
        assert_eq!(values, expected);
    }
}
