//! Work experience repository

use anyhow::Result;
use tracing::info;

use super::{OwnedRecord, Record, Repository};
use crate::models::{Experience, ExperienceForm};

impl Record for Experience {
    const TABLE: &'static str = "experience";
    const COLUMNS: &'static str = "id, user_id, role, company, date, description";
    const ORDER_BY: &'static str = "date DESC, id DESC";
}

impl OwnedRecord for Experience {}

/// Experience repository
pub type ExperienceRepository = Repository<Experience>;

impl Repository<Experience> {
    /// Insert an experience entry for a user
    pub async fn add(&self, user_id: i64, form: &ExperienceForm) -> Result<Experience> {
        info!("Creating experience entry for user {}", user_id);

        let record = sqlx::query_as::<_, Experience>(
            r#"
            INSERT INTO experience (user_id, role, company, date, description)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, user_id, role, company, date, description
            "#,
        )
        .bind(user_id)
        .bind(form.role.trim())
        .bind(form.company.trim())
        .bind(form.date.trim())
        .bind(form.description.trim())
        .fetch_one(self.pool())
        .await?;

        Ok(record)
    }

    /// Overwrite an experience entry owned by the user
    pub async fn update(
        &self,
        id: i64,
        user_id: i64,
        form: &ExperienceForm,
    ) -> Result<Option<Experience>> {
        info!("Updating experience entry {} of user {}", id, user_id);

        let record = sqlx::query_as::<_, Experience>(
            r#"
            UPDATE experience
            SET role = ?, company = ?, date = ?, description = ?
            WHERE id = ? AND user_id = ?
            RETURNING id, user_id, role, company, date, description
            "#,
        )
        .bind(form.role.trim())
        .bind(form.company.trim())
        .bind(form.date.trim())
        .bind(form.description.trim())
        .bind(id)
        .bind(user_id)
        .fetch_optional(self.pool())
        .await?;

        Ok(record)
    }
}
