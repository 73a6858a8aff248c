// src/presentation/http/controllers/applications.rs
use crate::application::{
    commands::job_applications::{
        CreateApplicationCommand, DeleteApplicationCommand, UpdateApplicationStatusCommand,
    },
    dto::ApplicationDto,
};
use crate::domain::job_application::ApplicationStatus;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateApplicationRequest {
    pub vacancy_id: i64,
    pub resume_id: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    pub status: ApplicationStatus,
}

#[utoipa::path(
    post,
    path = "/api/v1/applications",
    request_body = CreateApplicationRequest,
    responses(
        (status = 201, description = "Application submitted.", body = ApplicationDto),
        (status = 403, description = "Resume belongs to someone else.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Vacancy or resume not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Already applied to this vacancy.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Applications"
)]
pub async fn create_application(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateApplicationRequest>,
) -> HttpResult<(StatusCode, Json<ApplicationDto>)> {
    let command = CreateApplicationCommand {
        vacancy_id: payload.vacancy_id,
        resume_id: payload.resume_id,
    };

    let application = state
        .services
        .application_commands
        .create_application(&user, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(application)))
}

#[utoipa::path(
    get,
    path = "/api/v1/applications",
    responses(
        (status = 200, description = "Applications submitted by the caller.", body = [ApplicationDto]),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Applications"
)]
pub async fn list_my_applications(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<ApplicationDto>>> {
    state
        .services
        .application_queries
        .list_mine(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/applications/employer",
    responses(
        (status = 200, description = "Applications to the caller's vacancies.", body = [ApplicationDto]),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Applications"
)]
pub async fn list_employer_applications(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<ApplicationDto>>> {
    state
        .services
        .application_queries
        .list_for_employer(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/applications/{id}",
    params(("id" = i64, Path, description = "Application identifier")),
    responses(
        (status = 200, description = "Application.", body = ApplicationDto),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Applications"
)]
pub async fn get_application(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ApplicationDto>> {
    state
        .services
        .application_queries
        .get(&user, id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/applications/{id}/status",
    params(("id" = i64, Path, description = "Application identifier")),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status changed.", body = ApplicationDto),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Applications"
)]
pub async fn update_application_status(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateStatusRequest>,
) -> HttpResult<Json<ApplicationDto>> {
    let command = UpdateApplicationStatusCommand {
        id,
        status: payload.status,
    };

    state
        .services
        .application_commands
        .update_status(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/applications/{id}",
    params(("id" = i64, Path, description = "Application identifier")),
    responses(
        (status = 204, description = "Application withdrawn."),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Applications"
)]
pub async fn delete_application(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .application_commands
        .withdraw_application(&user, DeleteApplicationCommand { id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
