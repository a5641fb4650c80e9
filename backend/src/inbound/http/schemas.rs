//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror the wire shape of their domain counterparts and live
//! in the inbound adapter where framework concerns belong.

use std::collections::BTreeMap;

use utoipa::ToSchema;

/// Where a rejected field was read from.
#[derive(ToSchema)]
#[schema(as = FieldLocation)]
pub enum FieldLocationSchema {
    #[schema(rename = "query")]
    Query,
    #[schema(rename = "body")]
    Body,
}

/// One failed field constraint.
#[derive(ToSchema)]
#[schema(as = FieldViolation)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct FieldViolationSchema {
    #[schema(example = "title")]
    field: String,
    location: FieldLocationSchema,
    #[schema(example = "title must be at least 3 characters")]
    message: String,
    /// Raw value supplied by the client.
    value: Option<serde_json::Value>,
}

/// Error envelope returned by every failing request.
#[derive(ToSchema)]
#[schema(as = Error)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ErrorSchema {
    /// Human-readable message.
    #[schema(example = "Invalid data")]
    error: String,
    /// Violation list for validation failures; absent otherwise.
    details: Option<serde_json::Value>,
}

/// Urgency attached to a task.
#[derive(ToSchema)]
#[schema(as = Priority)]
pub enum PrioritySchema {
    #[schema(rename = "low")]
    Low,
    #[schema(rename = "medium")]
    Medium,
    #[schema(rename = "high")]
    High,
}

/// A to-do item.
#[derive(ToSchema)]
#[schema(as = Task, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct TaskSchema {
    #[schema(example = 1)]
    id: u64,
    #[schema(example = "Learn Actix Web")]
    title: String,
    completed: bool,
    priority: PrioritySchema,
    #[schema(example = 1)]
    owner_id: u64,
    #[schema(example = 1)]
    category_id: u64,
    #[schema(value_type = String, format = Date, example = "2025-12-20")]
    created_date: String,
}

/// Body accepted by `POST /api/tasks`.
#[derive(ToSchema)]
#[schema(as = CreateTaskRequest, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct CreateTaskRequestSchema {
    /// At least three characters.
    #[schema(example = "Buy milk")]
    title: String,
    /// Must name an existing category.
    #[schema(example = 1)]
    category_id: i64,
    /// Defaults to `medium`.
    priority: Option<PrioritySchema>,
}

/// Task category.
#[derive(ToSchema)]
#[schema(as = Category)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct CategorySchema {
    #[schema(example = 1)]
    id: u64,
    #[schema(example = "Work")]
    name: String,
}

/// Application user.
#[derive(ToSchema)]
#[schema(as = User)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct UserSchema {
    #[schema(example = 1)]
    id: u64,
    #[schema(example = "Admin")]
    name: String,
}

/// Token and user returned by a successful login.
#[derive(ToSchema)]
#[schema(as = LoginSession)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct LoginSessionSchema {
    #[schema(example = "admin-token")]
    token: String,
    user: UserSchema,
}

/// Completed-task count keyed by `YYYY-MM-DD` creation date, in first-seen
/// order.
#[derive(ToSchema)]
#[schema(as = CompletedPerDay)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct CompletedPerDaySchema(BTreeMap<String, u64>);

/// Per-user completion figures.
#[derive(ToSchema)]
#[schema(as = UserProductivity)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct UserProductivitySchema {
    #[schema(example = "Admin")]
    user: String,
    #[schema(example = 2)]
    total: u64,
    #[schema(example = 1)]
    completed: u64,
    #[schema(example = "50%")]
    productivity: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[rstest]
    fn task_schema_uses_wire_names() {
        assert_eq!(TaskSchema::name(), "Task");
        let schema_json = schema_to_json::<TaskSchema>();
        for field in ["ownerId", "categoryId", "createdDate"] {
            assert!(schema_json.contains(field), "missing {field}");
        }
    }

    #[rstest]
    fn error_schema_describes_envelope() {
        assert_eq!(ErrorSchema::name(), "Error");
        let schema_json = schema_to_json::<ErrorSchema>();
        assert!(schema_json.contains("\"error\""));
        assert!(schema_json.contains("\"details\""));
    }

    #[rstest]
    fn priority_schema_lists_every_level() {
        let schema_json = schema_to_json::<PrioritySchema>();
        for level in ["low", "medium", "high"] {
            assert!(schema_json.contains(level), "missing {level}");
        }
    }
}
