//! Register, login and logout

use axum::{Form, extract::State, response::Html};
use axum_extra::extract::cookie::SignedCookieJar;
use chrono::Utc;
use tracing::info;

use super::render_index;
use crate::{
    error::AppResult,
    models::{LoginCredentials, NewUser},
    session::SessionData,
    state::AppState,
    validation::{
        EmailFormat, EmailUniqueness, InputsValidator, PasswordStrength, check_form,
    },
    views::{Message, NOT_LOGGED_IN},
};

const LOGIN_OK: &str = "Login realizado com sucesso.";
const LOGIN_FAILED: &str = "Usuário ou senha inválidos. Por favor, verifique e tente novamente.";
const REGISTERED: &str = "Usuário cadastrado com sucesso. Você está logado.";

/// Log in with `email` and `senha`
pub async fn login(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(credentials): Form<LoginCredentials>,
) -> AppResult<(SignedCookieJar, Html<String>)> {
    let mut session = SessionData::from_jar(&jar);

    let Some(user) = state.user_service.authenticate(&credentials).await? else {
        let page = render_index(&state, &session, Some(Message::danger(LOGIN_FAILED))).await?;
        return Ok((jar, page));
    };

    session.login(&user.email, state.config.session_lifetime());
    let jar = session.write(jar);
    let page = render_index(&state, &session, Some(Message::success(LOGIN_OK))).await?;

    Ok((jar, page))
}

/// Create an account and log it in
pub async fn register(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(new_user): Form<NewUser>,
) -> AppResult<(SignedCookieJar, Html<String>)> {
    let mut session = SessionData::from_jar(&jar);

    if let Some(rejection) = registration_rejection(&state, &new_user).await? {
        let page = render_index(&state, &session, Some(Message::danger(rejection))).await?;
        return Ok((jar, page));
    }

    let user = state.user_service.create_user(&new_user).await?;
    info!("Registered user {}", user.id);

    session.login(&user.email, state.config.session_lifetime());
    let jar = session.write(jar);
    let page = render_index(&state, &session, Some(Message::success(REGISTERED))).await?;

    Ok((jar, page))
}

/// First validation message that rejects the registration, if any
async fn registration_rejection(
    state: &AppState,
    new_user: &NewUser,
) -> anyhow::Result<Option<&'static str>> {
    if let Some(message) = check_form(&new_user.fields()).await? {
        return Ok(Some(message));
    }

    let mut validator = InputsValidator::new(EmailFormat);
    if let Some(message) = validator.rejection(new_user.email.as_str()).await? {
        return Ok(Some(message));
    }

    validator.set_strategy(EmailUniqueness::new(state.user_service.clone()));
    if let Some(message) = validator.rejection(new_user.email.as_str()).await? {
        return Ok(Some(message));
    }

    validator.set_strategy(PasswordStrength);
    validator.rejection(new_user.password.as_str()).await
}

/// Forget the user and the résumé customizations
pub async fn logout(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> AppResult<(SignedCookieJar, Html<String>)> {
    let mut session = SessionData::from_jar(&jar);

    if session.current_user(Utc::now()).is_none() {
        // Expired logins still carry customizations in the cookie.
        let jar = if session == SessionData::default() {
            jar
        } else {
            session.logout();
            session.write(jar)
        };
        let page = render_index(&state, &session, Some(Message::danger(NOT_LOGGED_IN))).await?;
        return Ok((jar, page));
    }

    session.logout();
    let jar = session.write(jar);
    let page = render_index(&state, &session, None).await?;

    Ok((jar, page))
}
