//! AI objective generation

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};

use crate::{openai::ObjectiveError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct ObjectiveRequest {
    #[serde(default)]
    pub titulo: String,
}

#[derive(Debug, Serialize)]
pub struct ObjectiveResponse {
    pub objetivo: String,
}

/// `{"titulo": ...}` in, `{"objetivo": ...}` out
pub async fn generate_objective(
    State(state): State<AppState>,
    payload: Result<Json<ObjectiveRequest>, JsonRejection>,
) -> Result<Json<ObjectiveResponse>, ObjectiveError> {
    let Json(request) = payload.map_err(|e| ObjectiveError::InvalidRequest(e.body_text()))?;

    let title = request.titulo.trim();
    if title.is_empty() {
        return Err(ObjectiveError::EmptyTitle);
    }

    let objetivo = state.objective_generator.generate(title).await?;
    Ok(Json(ObjectiveResponse { objetivo }))
}
