// src/presentation/http/openapi.rs
use serde::{Deserialize, Serialize};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::auth::register,
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::auth::validate,
        crate::presentation::http::controllers::auth::logout,
        crate::presentation::http::controllers::users::me,
        crate::presentation::http::controllers::users::update_me,
        crate::presentation::http::controllers::users::get_user,
        crate::presentation::http::controllers::admin::list_users,
        crate::presentation::http::controllers::admin::update_user,
        crate::presentation::http::controllers::admin::delete_user,
        crate::presentation::http::controllers::admin::stats,
        crate::presentation::http::controllers::vacancies::list_vacancies,
        crate::presentation::http::controllers::vacancies::list_my_vacancies,
        crate::presentation::http::controllers::vacancies::get_vacancy,
        crate::presentation::http::controllers::vacancies::create_vacancy,
        crate::presentation::http::controllers::vacancies::update_vacancy,
        crate::presentation::http::controllers::vacancies::delete_vacancy,
        crate::presentation::http::controllers::vacancies::list_vacancy_applications,
        crate::presentation::http::controllers::resumes::list_resumes,
        crate::presentation::http::controllers::resumes::list_my_resumes,
        crate::presentation::http::controllers::resumes::get_resume,
        crate::presentation::http::controllers::resumes::create_resume,
        crate::presentation::http::controllers::resumes::update_resume,
        crate::presentation::http::controllers::resumes::delete_resume,
        crate::presentation::http::controllers::applications::create_application,
        crate::presentation::http::controllers::applications::list_my_applications,
        crate::presentation::http::controllers::applications::list_employer_applications,
        crate::presentation::http::controllers::applications::get_application,
        crate::presentation::http::controllers::applications::update_application_status,
        crate::presentation::http::controllers::applications::delete_application,
        super::routes::health,
        serve_openapi
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::auth::RegisterRequest,
            crate::presentation::http::controllers::auth::LoginRequest,
            crate::presentation::http::controllers::auth::LoginResponse,
            crate::presentation::http::controllers::auth::ValidateRequest,
            crate::presentation::http::controllers::users::UpdateProfileRequest,
            crate::presentation::http::controllers::admin::AdminUpdateUserRequest,
            crate::presentation::http::controllers::vacancies::CreateVacancyRequest,
            crate::presentation::http::controllers::vacancies::UpdateVacancyRequest,
            crate::presentation::http::controllers::resumes::CreateResumeRequest,
            crate::presentation::http::controllers::resumes::UpdateResumeRequest,
            crate::presentation::http::controllers::applications::CreateApplicationRequest,
            crate::presentation::http::controllers::applications::UpdateStatusRequest,
            crate::application::dto::UserDto,
            crate::application::dto::UserStatsDto,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::PrincipalDto,
            crate::application::dto::VacancyDto,
            crate::application::dto::ResumeDto,
            crate::application::dto::ApplicationDto,
            crate::domain::user::Role,
            crate::domain::vacancy::VacancyStatus,
            crate::domain::resume::ResumeStatus,
            crate::domain::job_application::ApplicationStatus
        )
    ),
    tags(
        (name = "Auth", description = "Registration, login and token validation"),
        (name = "Users", description = "Profile endpoints"),
        (name = "Admin", description = "User administration"),
        (name = "Vacancies", description = "Vacancy postings"),
        (name = "Resumes", description = "Jobseeker resumes"),
        (name = "Applications", description = "Job applications"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&BearerSecurity),
    info(
        title = "Job Board API",
        description = "Identity and authorization core of a job board",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("JWT".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
    }
}

#[utoipa::path(
    get,
    path = "/api-docs/openapi.json",
    responses((status = 200, description = "OpenAPI document.")),
    tag = "System"
)]
pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}
