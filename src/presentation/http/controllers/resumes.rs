// src/presentation/http/controllers/resumes.rs
use super::vacancies::StatusFilter;
use crate::application::{
    ApplicationError,
    commands::resumes::{CreateResumeCommand, DeleteResumeCommand, UpdateResumeCommand},
    dto::ResumeDto,
    queries::resumes::ListResumesQuery,
};
use crate::domain::resume::{ResumeChanges, ResumeDetails, ResumeStatus};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateResumeRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub education: String,
    pub status: Option<ResumeStatus>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateResumeRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub skills: Option<Vec<String>>,
    pub experience: Option<String>,
    pub education: Option<String>,
    pub status: Option<ResumeStatus>,
}

impl From<UpdateResumeRequest> for ResumeChanges {
    fn from(request: UpdateResumeRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            skills: request.skills,
            experience: request.experience,
            education: request.education,
            status: request.status,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/resumes",
    params(StatusFilter),
    responses(
        (status = 200, description = "All resumes.", body = [ResumeDto]),
        (status = 400, description = "Unknown status.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Resumes"
)]
pub async fn list_resumes(
    Extension(state): Extension<HttpState>,
    Query(filter): Query<StatusFilter>,
) -> HttpResult<Json<Vec<ResumeDto>>> {
    let status = filter
        .status
        .as_deref()
        .map(str::parse::<ResumeStatus>)
        .transpose()
        .map_err(ApplicationError::from)?;

    state
        .services
        .resume_queries
        .list(ListResumesQuery { status })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/resumes/{id}",
    params(("id" = i64, Path, description = "Resume identifier")),
    responses(
        (status = 200, description = "Resume.", body = ResumeDto),
        (status = 404, description = "Not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Resumes"
)]
pub async fn get_resume(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ResumeDto>> {
    state
        .services
        .resume_queries
        .get(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/resumes/mine",
    responses(
        (status = 200, description = "Resumes owned by the caller.", body = [ResumeDto]),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Resumes"
)]
pub async fn list_my_resumes(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<ResumeDto>>> {
    state
        .services
        .resume_queries
        .list_mine(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/resumes",
    request_body = CreateResumeRequest,
    responses(
        (status = 201, description = "Resume created.", body = ResumeDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Employers cannot create resumes.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Resumes"
)]
pub async fn create_resume(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateResumeRequest>,
) -> HttpResult<(StatusCode, Json<ResumeDto>)> {
    let command = CreateResumeCommand {
        details: ResumeDetails {
            title: payload.title,
            description: payload.description,
            skills: payload.skills,
            experience: payload.experience,
            education: payload.education,
        },
        status: payload.status,
    };

    let resume = state
        .services
        .resume_commands
        .create_resume(&user, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(resume)))
}

#[utoipa::path(
    put,
    path = "/api/v1/resumes/{id}",
    params(("id" = i64, Path, description = "Resume identifier")),
    request_body = UpdateResumeRequest,
    responses(
        (status = 200, description = "Resume updated.", body = ResumeDto),
        (status = 403, description = "Not the owner.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Resumes"
)]
pub async fn update_resume(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateResumeRequest>,
) -> HttpResult<Json<ResumeDto>> {
    let command = UpdateResumeCommand {
        id,
        changes: payload.into(),
    };

    state
        .services
        .resume_commands
        .update_resume(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/resumes/{id}",
    params(("id" = i64, Path, description = "Resume identifier")),
    responses(
        (status = 204, description = "Resume and its applications deleted."),
        (status = 403, description = "Not the owner.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Resumes"
)]
pub async fn delete_resume(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .resume_commands
        .delete_resume(&user, DeleteResumeCommand { id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
