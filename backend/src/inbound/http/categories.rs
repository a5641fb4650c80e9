//! Category API handlers. Categories are public reference data.

use actix_web::{HttpResponse, get, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{CategorySchema, ErrorSchema};
use crate::inbound::http::state::HttpState;

/// List every category.
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "All categories", body = [CategorySchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["categories"],
    operation_id = "listCategories",
    security([])
)]
#[get("/categories")]
pub async fn list_categories(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let categories = state.categories.list_categories().await?;
    Ok(HttpResponse::Ok().json(categories))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{state_with_store, test_app};
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    #[actix_web::test]
    async fn lists_categories_without_authentication() {
        let app = actix_test::init_service(test_app(state_with_store())).await;
        let req = actix_test::TestRequest::get().uri("/api/categories").to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            body,
            json!([{"id": 1, "name": "Work"}, {"id": 2, "name": "Personal"}])
        );
    }
}
