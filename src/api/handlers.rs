//! Request handlers and router construction for the task resource.
//!
//! Handlers parse the wire payload, run structural validation, invoke the
//! task service, and shape the HTTP-level result. Routing itself is left to
//! axum; everything with decision logic lives here.

use super::dto::{
    self, TaskBody, TaskCreateBody, TaskCreatedBody, TaskWriteBody, resource_path,
};
use super::error::ApiError;
use crate::task::domain::{Task, TaskId};
use crate::task::ports::TaskRepository;
use crate::task::services::TaskService;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use mockable::Clock;
use std::sync::Arc;

/// Shared application dependencies for the task handlers.
pub struct AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Business-rule service for the task resource.
    pub service: Arc<TaskService<R, C>>,
    /// Public base URL used to construct resource location strings.
    pub public_base_url: Arc<str>,
}

impl<R, C> AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates handler state from a service and a public base URL.
    pub fn new(service: Arc<TaskService<R, C>>, public_base_url: impl Into<Arc<str>>) -> Self {
        Self {
            service,
            public_base_url: public_base_url.into(),
        }
    }
}

impl<R, C> Clone for AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            public_base_url: Arc::clone(&self.public_base_url),
        }
    }
}

/// Builds the `/tasks` router over the given state.
#[must_use]
pub fn router<R, C>(state: AppState<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/tasks", post(create_task::<R, C>).get(list_tasks::<R, C>))
        .route(
            "/tasks/:id",
            get(get_task::<R, C>)
                .put(update_task::<R, C>)
                .delete(delete_task::<R, C>),
        )
        .with_state(state)
}

/// `POST /tasks`: validates the payload, creates the task, and answers 201
/// with the assigned id, the resource URL, and a `Location` header.
async fn create_task<R, C>(
    State(state): State<AppState<R, C>>,
    Json(body): Json<TaskCreateBody>,
) -> Result<impl IntoResponse, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let request = dto::validate_create(body).map_err(ApiError::Validation)?;
    let task = state.service.create(request).await.map_err(ApiError::from)?;
    let id = persisted_id(&task)?;
    let location = resource_path(id);
    let url = format!("{}{location}", state.public_base_url);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(TaskCreatedBody {
            id: id.value(),
            url,
        }),
    ))
}

/// `GET /tasks/{id}`: answers 200 with the task, or 404 when absent.
async fn get_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<i64>,
) -> Result<Json<TaskBody>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let task = state
        .service
        .get_by_id(TaskId::new(id))
        .await
        .map_err(ApiError::from)?;
    Ok(Json(render_task(&task)?))
}

/// `GET /tasks`: answers 200 with every task in insertion order; never 404.
async fn list_tasks<R, C>(
    State(state): State<AppState<R, C>>,
) -> Result<Json<Vec<TaskBody>>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let tasks = state.service.get_all().await.map_err(ApiError::from)?;
    let bodies = tasks
        .iter()
        .map(render_task)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(bodies))
}

/// `PUT /tasks/{id}`: validates the payload, replaces the stored task
/// wholesale, and answers 200 with the result.
async fn update_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<i64>,
    Json(body): Json<TaskWriteBody>,
) -> Result<Json<TaskBody>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let request = dto::validate_update(body).map_err(ApiError::Validation)?;
    let task = state
        .service
        .update(TaskId::new(id), request)
        .await
        .map_err(ApiError::from)?;
    Ok(Json(render_task(&task)?))
}

/// `DELETE /tasks/{id}`: answers 204 with an empty body, or 404 when the id
/// is unknown (including a repeat delete of the same id).
async fn delete_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    state
        .service
        .delete(TaskId::new(id))
        .await
        .map_err(ApiError::from)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Extracts the identity a persisted task must carry.
fn persisted_id(task: &Task) -> Result<TaskId, ApiError> {
    task.id().ok_or_else(|| {
        tracing::error!("persisted task is missing an identifier");
        ApiError::Internal
    })
}

/// Renders a persisted task as its wire body.
fn render_task(task: &Task) -> Result<TaskBody, ApiError> {
    TaskBody::from_task(task).ok_or_else(|| {
        tracing::error!("persisted task is missing an identifier");
        ApiError::Internal
    })
}
