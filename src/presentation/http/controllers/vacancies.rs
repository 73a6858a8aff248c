// src/presentation/http/controllers/vacancies.rs
use super::double_option;
use crate::application::{
    ApplicationError,
    commands::vacancies::{CreateVacancyCommand, DeleteVacancyCommand, UpdateVacancyCommand},
    dto::{ApplicationDto, VacancyDto},
    queries::vacancies::ListVacanciesQuery,
};
use crate::domain::vacancy::{VacancyChanges, VacancyDetails, VacancyStatus};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StatusFilter {
    /// Only return records in this status.
    pub status: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateVacancyRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub responsibilities: String,
    pub salary: Option<i64>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub employment_type: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: String,
    pub status: Option<VacancyStatus>,
}

/// Partial update. Omitted fields are left as they are; `"salary": null`
/// clears the salary.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateVacancyRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub responsibilities: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i64>)]
    pub salary: Option<Option<i64>>,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    pub company: Option<String>,
    pub skills: Option<Vec<String>>,
    pub education: Option<String>,
    pub status: Option<VacancyStatus>,
}

impl From<UpdateVacancyRequest> for VacancyChanges {
    fn from(request: UpdateVacancyRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            requirements: request.requirements,
            responsibilities: request.responsibilities,
            salary: request.salary,
            location: request.location,
            employment_type: request.employment_type,
            company: request.company,
            skills: request.skills,
            education: request.education,
            status: request.status,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/vacancies",
    params(StatusFilter),
    responses(
        (status = 200, description = "All vacancies.", body = [VacancyDto]),
        (status = 400, description = "Unknown status.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Vacancies"
)]
pub async fn list_vacancies(
    Extension(state): Extension<HttpState>,
    Query(filter): Query<StatusFilter>,
) -> HttpResult<Json<Vec<VacancyDto>>> {
    let status = filter
        .status
        .as_deref()
        .map(str::parse::<VacancyStatus>)
        .transpose()
        .map_err(ApplicationError::from)?;

    state
        .services
        .vacancy_queries
        .list(ListVacanciesQuery { status })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/vacancies/{id}",
    params(("id" = i64, Path, description = "Vacancy identifier")),
    responses(
        (status = 200, description = "Vacancy.", body = VacancyDto),
        (status = 404, description = "Not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Vacancies"
)]
pub async fn get_vacancy(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<VacancyDto>> {
    state
        .services
        .vacancy_queries
        .get(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/vacancies/mine",
    responses(
        (status = 200, description = "Vacancies posted by the caller.", body = [VacancyDto]),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Vacancies"
)]
pub async fn list_my_vacancies(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<VacancyDto>>> {
    state
        .services
        .vacancy_queries
        .list_mine(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/vacancies",
    request_body = CreateVacancyRequest,
    responses(
        (status = 201, description = "Vacancy created.", body = VacancyDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Employers only.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Vacancies"
)]
pub async fn create_vacancy(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateVacancyRequest>,
) -> HttpResult<(StatusCode, Json<VacancyDto>)> {
    let command = CreateVacancyCommand {
        details: VacancyDetails {
            title: payload.title,
            description: payload.description,
            requirements: payload.requirements,
            responsibilities: payload.responsibilities,
            salary: payload.salary,
            location: payload.location,
            employment_type: payload.employment_type,
            company: payload.company,
            skills: payload.skills,
            education: payload.education,
        },
        status: payload.status,
    };

    let vacancy = state
        .services
        .vacancy_commands
        .create_vacancy(&user, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(vacancy)))
}

#[utoipa::path(
    put,
    path = "/api/v1/vacancies/{id}",
    params(("id" = i64, Path, description = "Vacancy identifier")),
    request_body = UpdateVacancyRequest,
    responses(
        (status = 200, description = "Vacancy updated.", body = VacancyDto),
        (status = 403, description = "Not the owner.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Vacancies"
)]
pub async fn update_vacancy(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateVacancyRequest>,
) -> HttpResult<Json<VacancyDto>> {
    let command = UpdateVacancyCommand {
        id,
        changes: payload.into(),
    };

    state
        .services
        .vacancy_commands
        .update_vacancy(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/vacancies/{id}",
    params(("id" = i64, Path, description = "Vacancy identifier")),
    responses(
        (status = 204, description = "Vacancy and its applications deleted."),
        (status = 403, description = "Not the owner.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Vacancies"
)]
pub async fn delete_vacancy(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .vacancy_commands
        .delete_vacancy(&user, DeleteVacancyCommand { id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/v1/vacancies/{id}/applications",
    params(("id" = i64, Path, description = "Vacancy identifier")),
    responses(
        (status = 200, description = "Applications to the vacancy with applicant details.", body = [ApplicationDto]),
        (status = 403, description = "Not the owner.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Vacancies"
)]
pub async fn list_vacancy_applications(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<Vec<ApplicationDto>>> {
    state
        .services
        .application_queries
        .list_for_vacancy(&user, id)
        .await
        .into_http()
        .map(Json)
}
