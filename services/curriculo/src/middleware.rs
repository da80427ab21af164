//! Login requirement for the résumé routes

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::cookie::SignedCookieJar;
use chrono::Utc;
use tracing::{debug, error};

use crate::{
    error::AppError,
    models::User,
    session::SessionData,
    state::AppState,
    views::{IndexPage, Message, NOT_LOGGED_IN, index_page},
};

/// The user behind the current request
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Let the request through only with a live session for an existing user.
///
/// Handlers behind this layer can extract `Extension<CurrentUser>` and
/// `Extension<SessionData>`.
pub async fn require_login(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    let session = SessionData::from_jar(&jar);

    let user = match session.current_user(Utc::now()) {
        Some(email) => match state.user_service.get_user_by_email(email).await {
            Ok(user) => user,
            Err(e) => {
                error!("Failed to load session user: {}", e);
                return AppError::Internal(e).into_response();
            }
        },
        None => None,
    };

    let Some(user) = user else {
        debug!("Rejected {} {}: not logged in", req.method(), req.uri().path());
        return Html(index_page(&IndexPage {
            message: Some(Message::danger(NOT_LOGGED_IN)),
            ..Default::default()
        }))
        .into_response();
    };

    req.extensions_mut().insert(CurrentUser(user));
    req.extensions_mut().insert(session);
    next.run(req).await
}
