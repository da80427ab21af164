//! Education repository

use anyhow::Result;
use tracing::info;

use super::{OwnedRecord, Record, Repository};
use crate::models::{Education, EducationForm};

impl Record for Education {
    const TABLE: &'static str = "education";
    const COLUMNS: &'static str = "id, user_id, course, institution, date, description";
    const ORDER_BY: &'static str = "date DESC, id DESC";
}

impl OwnedRecord for Education {}

/// Education repository
pub type EducationRepository = Repository<Education>;

impl Repository<Education> {
    /// Insert an education entry for a user
    pub async fn add(&self, user_id: i64, form: &EducationForm) -> Result<Education> {
        info!("Creating education entry for user {}", user_id);

        let record = sqlx::query_as::<_, Education>(
            r#"
            INSERT INTO education (user_id, course, institution, date, description)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, user_id, course, institution, date, description
            "#,
        )
        .bind(user_id)
        .bind(form.course.trim())
        .bind(form.institution.trim())
        .bind(form.date.trim())
        .bind(form.description.trim())
        .fetch_one(self.pool())
        .await?;

        Ok(record)
    }

    /// Overwrite an education entry owned by the user
    pub async fn update(
        &self,
        id: i64,
        user_id: i64,
        form: &EducationForm,
    ) -> Result<Option<Education>> {
        info!("Updating education entry {} of user {}", id, user_id);

        let record = sqlx::query_as::<_, Education>(
            r#"
            UPDATE education
            SET course = ?, institution = ?, date = ?, description = ?
            WHERE id = ? AND user_id = ?
            RETURNING id, user_id, course, institution, date, description
            "#,
        )
        .bind(form.course.trim())
        .bind(form.institution.trim())
        .bind(form.date.trim())
        .bind(form.description.trim())
        .bind(id)
        .bind(user_id)
        .fetch_optional(self.pool())
        .await?;

        Ok(record)
    }
}
