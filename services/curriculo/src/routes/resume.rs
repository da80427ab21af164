//! Résumé page and its customization

use axum::{
    Extension, Form,
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::SignedCookieJar;
use serde::Deserialize;
use tracing::{info, warn};

use crate::{
    customization::{CustomizationError, CustomizationKind},
    error::AppResult,
    middleware::CurrentUser,
    render::{BaseResume, ResumeRenderer, decorate},
    session::SessionData,
    state::AppState,
    views::{Message, resume_page},
};

const UNKNOWN_KIND: &str = "Tipo de customização desconhecido.";
const INVALID_VALUE: &str = "Valor de customização inválido.";

#[derive(Debug, Default, Deserialize)]
pub struct CustomizationInput {
    #[serde(default)]
    pub value: String,
}

async fn render_resume(
    state: &AppState,
    user_id: i64,
    session: &SessionData,
    message: Option<Message>,
) -> AppResult<Html<String>> {
    let resume = state.resume_service.get_resume(user_id).await?;
    let rendered = decorate(BaseResume::new(&resume), &session.customizacao).render();

    Ok(Html(resume_page(
        &rendered,
        &session.customizacao,
        message.as_ref(),
    )))
}

pub async fn show_resume(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Extension(session): Extension<SessionData>,
) -> AppResult<Html<String>> {
    render_resume(&state, user.id, &session, None).await
}

pub async fn customize_from_query(
    state: State<AppState>,
    user: Extension<CurrentUser>,
    session: Extension<SessionData>,
    jar: SignedCookieJar,
    Path(kind): Path<String>,
    Query(input): Query<CustomizationInput>,
) -> AppResult<Response> {
    customize(state, user, session, jar, &kind, &input.value).await
}

pub async fn customize_from_form(
    state: State<AppState>,
    user: Extension<CurrentUser>,
    session: Extension<SessionData>,
    jar: SignedCookieJar,
    Path(kind): Path<String>,
    Form(input): Form<CustomizationInput>,
) -> AppResult<Response> {
    customize(state, user, session, jar, &kind, &input.value).await
}

/// Apply one customization, then go back to the résumé
async fn customize(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Extension(mut session): Extension<SessionData>,
    jar: SignedCookieJar,
    kind: &str,
    value: &str,
) -> AppResult<Response> {
    let applied = kind
        .parse::<CustomizationKind>()
        .and_then(|kind| session.customizacao.apply(kind, value));

    if let Err(e) = applied {
        warn!("Rejected customization for user {}: {}", user.id, e);
        let message = match e {
            CustomizationError::UnknownKind(_) => UNKNOWN_KIND,
            CustomizationError::InvalidValue { .. } => INVALID_VALUE,
        };
        let page = render_resume(&state, user.id, &session, Some(Message::danger(message))).await?;
        return Ok(page.into_response());
    }

    info!("User {} customized the résumé {}", user.id, kind);
    Ok((session.write(jar), Redirect::to("/curriculo")).into_response())
}

pub async fn reset_customization(
    Extension(mut session): Extension<SessionData>,
    jar: SignedCookieJar,
) -> (SignedCookieJar, Redirect) {
    session.customizacao.reset();
    (session.write(jar), Redirect::to("/curriculo"))
}
