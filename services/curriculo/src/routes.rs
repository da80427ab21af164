//! Web service routes

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    middleware,
    response::{Html, IntoResponse},
    routing::{any, get, post},
};
use axum_extra::extract::cookie::SignedCookieJar;
use chrono::Utc;
use serde_json::json;
use tracing::error;

use crate::{
    error::AppResult,
    middleware::require_login,
    session::SessionData,
    state::AppState,
    views::{IndexPage, Message, index_page},
};

pub mod auth;
pub mod objective;
pub mod records;
pub mod resume;

/// Create the router for the web service
pub fn create_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/curriculo", get(resume::show_resume))
        .route(
            "/customizacao/:tipo",
            get(resume::customize_from_query).post(resume::customize_from_form),
        )
        .route("/reset_customizacao", any(resume::reset_customization))
        .route(
            "/dadospessoais",
            get(records::back_to_index).post(records::save_personal_data),
        )
        .route(
            "/add_dadospessoais",
            get(records::back_to_index).post(records::save_personal_data),
        )
        .route(
            "/formacao",
            get(records::back_to_index).post(records::save_education),
        )
        .route(
            "/add_formacao",
            get(records::back_to_index).post(records::save_education),
        )
        .route("/delete_formacao/:id", any(records::delete_education))
        .route(
            "/experiencia",
            get(records::back_to_index).post(records::save_experience),
        )
        .route(
            "/add_experiencia",
            get(records::back_to_index).post(records::save_experience),
        )
        .route("/delete_experiencia/:id", any(records::delete_experience))
        .route(
            "/add_habilidade",
            get(records::back_to_index).post(records::save_skill),
        )
        .route("/delete_habilidade/:id", any(records::delete_skill))
        .route("/chatgpt", post(objective::generate_objective))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_login));

    Router::new()
        .route("/", get(index).post(index))
        .route("/login", get(index).post(auth::login))
        .route("/register", get(index).post(auth::register))
        .route("/logout", any(auth::logout))
        .route("/health", get(health_check))
        .merge(protected_routes)
        .with_state(state)
}

/// Render the index page for whoever holds the session
pub(crate) async fn render_index(
    state: &AppState,
    session: &SessionData,
    message: Option<Message>,
) -> AppResult<Html<String>> {
    let user = match session.current_user(Utc::now()) {
        Some(email) => state.user_service.get_user_by_email(email).await?,
        None => None,
    };

    let resume = match &user {
        Some(user) => Some(state.resume_service.get_resume(user.id).await?),
        None => None,
    };

    Ok(Html(index_page(&IndexPage {
        user: user.as_ref(),
        resume: resume.as_ref(),
        message,
    })))
}

/// Landing page
pub async fn index(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> AppResult<Html<String>> {
    render_index(&state, &SessionData::from_jar(&jar), None).await
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let database = match common::database::health_check(&state.db_pool).await {
        Ok(()) => true,
        Err(e) => {
            error!("Health check failed: {}", e);
            false
        }
    };

    let status = if database {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(json!({
            "status": if database { "ok" } else { "degraded" },
            "service": "curriculo",
            "database": database,
        })),
    )
}
