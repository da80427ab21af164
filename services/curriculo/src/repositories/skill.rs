//! Skill repository

use anyhow::Result;
use tracing::info;

use super::{OwnedRecord, Record, Repository};
use crate::models::{Skill, SkillForm};

impl Record for Skill {
    const TABLE: &'static str = "skills";
    const COLUMNS: &'static str = "id, user_id, name";
}

impl OwnedRecord for Skill {}

/// Skill repository
pub type SkillRepository = Repository<Skill>;

impl Repository<Skill> {
    /// Insert a skill for a user
    pub async fn add(&self, user_id: i64, form: &SkillForm) -> Result<Skill> {
        info!("Creating skill for user {}", user_id);

        let record = sqlx::query_as::<_, Skill>(
            r#"
            INSERT INTO skills (user_id, name)
            VALUES (?, ?)
            RETURNING id, user_id, name
            "#,
        )
        .bind(user_id)
        .bind(form.name.trim())
        .fetch_one(self.pool())
        .await?;

        Ok(record)
    }
}
