//! Task API handlers.
//!
//! ```text
//! GET  /api/tasks?completed=true&priority=high&mode=or
//! POST /api/tasks {"title":"Buy milk","categoryId":1,"priority":"low"}
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;
use serde_json::Value;

use crate::domain::{
    CATEGORY_RESOURCE, CategoryId, Error, FieldLocation, MatchMode, NewTask, Priority,
    TITLE_MIN_CHARS, TaskFilter, TaskTitle,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::Caller;
use crate::inbound::http::schemas::{CreateTaskRequestSchema, ErrorSchema, TaskSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, IntegerInput, ValidationGate};

const COMPLETED: FieldName = FieldName::new("completed");
const PRIORITY: FieldName = FieldName::new("priority");
const MODE: FieldName = FieldName::new("mode");
const TITLE: FieldName = FieldName::new("title");
const CATEGORY_ID: FieldName = FieldName::new("categoryId");

const PRIORITY_NAMES: [&str; 3] = [
    Priority::Low.as_str(),
    Priority::Medium.as_str(),
    Priority::High.as_str(),
];
const MODE_NAMES: [&str; 2] = [MatchMode::And.as_str(), MatchMode::Or.as_str()];

/// Query string accepted by `GET /api/tasks`.
///
/// Values stay raw so that every malformed parameter is reported by the
/// validation gate rather than by the extractor.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListTasksQuery {
    /// `true`, `false`, `1` or `0`.
    pub completed: Option<String>,
    /// `low`, `medium` or `high`.
    pub priority: Option<String>,
    /// `and` (default) or `or`.
    pub mode: Option<String>,
}

impl ListTasksQuery {
    fn into_filter(self) -> Result<TaskFilter, Error> {
        let completed = self.completed.map(Value::String);
        let priority = self.priority.map(Value::String);
        let mode = self.mode.map(Value::String);

        let mut gate = ValidationGate::new(FieldLocation::Query);
        let completed = gate.optional_bool(COMPLETED, completed.as_ref());
        let priority =
            gate.optional_one_of::<Priority>(PRIORITY, priority.as_ref(), &PRIORITY_NAMES);
        let mode = gate.optional_one_of::<MatchMode>(MODE, mode.as_ref(), &MODE_NAMES);
        gate.finish_with(|| {
            Some(TaskFilter {
                completed,
                priority,
                mode: mode.unwrap_or_default(),
            })
        })
    }
}

/// List the caller's tasks, optionally filtered.
#[utoipa::path(
    get,
    path = "/api/tasks",
    params(ListTasksQuery),
    responses(
        (status = 200, description = "Tasks owned by the caller", body = [TaskSchema]),
        (status = 400, description = "Invalid query parameters", body = ErrorSchema),
        (status = 401, description = "Missing bearer token", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["tasks"],
    operation_id = "listTasks"
)]
#[get("/tasks")]
pub async fn list_tasks(
    state: web::Data<HttpState>,
    caller: Caller,
    query: web::Query<ListTasksQuery>,
) -> ApiResult<HttpResponse> {
    let filter = query.into_inner().into_filter()?;
    let tasks = state.tasks.list_tasks(caller.id(), &filter).await?;
    Ok(HttpResponse::Ok().json(tasks))
}

/// Validate a create-task body.
///
/// The body is read as raw JSON so that absent, `null` and mistyped members
/// are all reported as violations. `null` counts as present.
type ParsedTask = (Option<CategoryId>, TaskTitle, Option<Priority>);

fn parse_new_task(body: &Value) -> Result<ParsedTask, Error> {
    let mut gate = ValidationGate::new(FieldLocation::Body);
    let title = gate.min_length(TITLE, body.get("title"), TITLE_MIN_CHARS);
    let category_id = gate.integer(CATEGORY_ID, body.get("categoryId"));
    let priority =
        gate.optional_one_of::<Priority>(PRIORITY, body.get("priority"), &PRIORITY_NAMES);
    gate.finish_with(|| {
        let title = TaskTitle::new(title?).ok()?;
        // Negative ids and digit strings are well-formed but never match.
        let category_id = match category_id? {
            IntegerInput::Number(raw) => CategoryId::try_from(raw).ok(),
            IntegerInput::Unaddressable => None,
        };
        Some((category_id, title, priority))
    })
}

/// Create a task owned by the caller.
#[utoipa::path(
    post,
    path = "/api/tasks",
    request_body = CreateTaskRequestSchema,
    responses(
        (status = 201, description = "Task created", body = TaskSchema),
        (status = 400, description = "Invalid task fields", body = ErrorSchema),
        (status = 401, description = "Missing bearer token", body = ErrorSchema),
        (status = 404, description = "Category not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["tasks"],
    operation_id = "createTask"
)]
#[post("/tasks")]
pub async fn create_task(
    state: web::Data<HttpState>,
    caller: Caller,
    body: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let (category_id, title, priority) = parse_new_task(&body)?;
    let category_id = category_id.ok_or_else(|| Error::not_found(CATEGORY_RESOURCE))?;
    let task = state
        .task_commands
        .create_task(
            caller.id(),
            NewTask {
                title,
                category_id,
                priority,
            },
        )
        .await?;
    Ok(HttpResponse::Created().json(task))
}
