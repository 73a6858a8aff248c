// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{admin, applications, auth, resumes, users, vacancies},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post, put},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Browser origins allowed by CORS. Empty means any origin.
    pub allowed_origins: Vec<String>,
    pub request_timeout: Duration,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

pub fn build_router(state: HttpState, config: &RouterConfig) -> Router {
    let api = Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/validate", post(auth::validate))
        .route("/auth/logout", post(auth::logout))
        .route("/users/me", get(users::me).put(users::update_me))
        .route("/users/{id}", get(users::get_user))
        .route("/admin/users", get(admin::list_users))
        .route(
            "/admin/users/{id}",
            put(admin::update_user).delete(admin::delete_user),
        )
        .route("/admin/stats", get(admin::stats))
        .route(
            "/vacancies",
            get(vacancies::list_vacancies).post(vacancies::create_vacancy),
        )
        .route("/vacancies/mine", get(vacancies::list_my_vacancies))
        .route(
            "/vacancies/{id}",
            get(vacancies::get_vacancy)
                .put(vacancies::update_vacancy)
                .delete(vacancies::delete_vacancy),
        )
        .route(
            "/vacancies/{id}/applications",
            get(vacancies::list_vacancy_applications),
        )
        .route(
            "/resumes",
            get(resumes::list_resumes).post(resumes::create_resume),
        )
        .route("/resumes/mine", get(resumes::list_my_resumes))
        .route(
            "/resumes/{id}",
            get(resumes::get_resume)
                .put(resumes::update_resume)
                .delete(resumes::delete_resume),
        )
        .route(
            "/applications",
            get(applications::list_my_applications).post(applications::create_application),
        )
        .route(
            "/applications/employer",
            get(applications::list_employer_applications),
        )
        .route(
            "/applications/{id}",
            get(applications::get_application).delete(applications::delete_application),
        )
        .route(
            "/applications/{id}/status",
            put(applications::update_application_status),
        );

    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi::serve_openapi))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.allowed_origins))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring malformed CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
