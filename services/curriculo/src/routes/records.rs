//! Personal data, education, experience and skill forms

use axum::{
    Extension, Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use tracing::{info, warn};

use super::render_index;
use crate::{
    error::{AppError, AppResult},
    middleware::CurrentUser,
    models::{EducationForm, ExperienceForm, PersonalDataForm, SkillForm},
    session::SessionData,
    state::AppState,
    validation::{EmailFormat, FormField, InputsValidator, check_form},
    views::Message,
};

/// Form pages are only reached through POST
pub async fn back_to_index() -> Redirect {
    Redirect::to("/")
}

/// Render the index with `message` when the form is rejected
async fn rejected(
    state: &AppState,
    session: &SessionData,
    message: &'static str,
) -> AppResult<Response> {
    Ok(render_index(state, session, Some(Message::danger(message)))
        .await?
        .into_response())
}

async fn form_rejection(fields: &[FormField]) -> AppResult<Option<&'static str>> {
    Ok(check_form(fields).await?)
}

fn checked_id(raw: Result<Option<i64>, std::num::ParseIntError>) -> AppResult<Option<i64>> {
    raw.map_err(|_| AppError::BadRequest("Identificador inválido.".to_string()))
}

pub async fn save_personal_data(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Extension(session): Extension<SessionData>,
    Form(form): Form<PersonalDataForm>,
) -> AppResult<Response> {
    if let Some(message) = form_rejection(&form.fields()).await? {
        return rejected(&state, &session, message).await;
    }

    let validator = InputsValidator::new(EmailFormat);
    if let Some(message) = validator.rejection(form.email.as_str()).await? {
        return rejected(&state, &session, message).await;
    }

    state.personal_data_service.save(user.id, &form).await?;
    Ok(Redirect::to("/").into_response())
}

pub async fn save_education(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Extension(session): Extension<SessionData>,
    Form(form): Form<EducationForm>,
) -> AppResult<Response> {
    if let Some(message) = form_rejection(&form.fields()).await? {
        return rejected(&state, &session, message).await;
    }

    match checked_id(form.record_id())? {
        Some(id) => {
            state
                .education_service
                .update(id, user.id, &form)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("education {id}")))?;
        }
        None => {
            state.education_service.create(user.id, &form).await?;
        }
    }

    Ok(Redirect::to("/").into_response())
}

pub async fn delete_education(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Redirect> {
    if !state.education_service.delete(id, user.id).await? {
        warn!("User {} tried to delete missing education {}", user.id, id);
        return Err(AppError::NotFound(format!("education {id}")));
    }

    info!("User {} deleted education {}", user.id, id);
    Ok(Redirect::to("/"))
}

pub async fn save_experience(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Extension(session): Extension<SessionData>,
    Form(form): Form<ExperienceForm>,
) -> AppResult<Response> {
    if let Some(message) = form_rejection(&form.fields()).await? {
        return rejected(&state, &session, message).await;
    }

    match checked_id(form.record_id())? {
        Some(id) => {
            state
                .experience_service
                .update(id, user.id, &form)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("experience {id}")))?;
        }
        None => {
            state.experience_service.create(user.id, &form).await?;
        }
    }

    Ok(Redirect::to("/").into_response())
}

pub async fn delete_experience(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Redirect> {
    if !state.experience_service.delete(id, user.id).await? {
        warn!("User {} tried to delete missing experience {}", user.id, id);
        return Err(AppError::NotFound(format!("experience {id}")));
    }

    info!("User {} deleted experience {}", user.id, id);
    Ok(Redirect::to("/"))
}

pub async fn save_skill(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Extension(session): Extension<SessionData>,
    Form(form): Form<SkillForm>,
) -> AppResult<Response> {
    if let Some(message) = form_rejection(&form.fields()).await? {
        return rejected(&state, &session, message).await;
    }

    state.skill_service.create(user.id, &form).await?;
    Ok(Redirect::to("/").into_response())
}

pub async fn delete_skill(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Redirect> {
    if !state.skill_service.delete(id, user.id).await? {
        warn!("User {} tried to delete missing skill {}", user.id, id);
        return Err(AppError::NotFound(format!("skill {id}")));
    }

    info!("User {} deleted skill {}", user.id, id);
    Ok(Redirect::to("/"))
}
