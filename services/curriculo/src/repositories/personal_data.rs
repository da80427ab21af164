//! Personal data repository

use anyhow::Result;
use tracing::info;

use super::{OwnedRecord, Record, Repository};
use crate::models::{PersonalData, PersonalDataForm};

impl Record for PersonalData {
    const TABLE: &'static str = "personal_data";
    const COLUMNS: &'static str = "id, user_id, name, email, title, objective, address, site, phone";
}

impl OwnedRecord for PersonalData {}

/// Personal data repository
pub type PersonalDataRepository = Repository<PersonalData>;

impl Repository<PersonalData> {
    /// Insert personal data for a user
    pub async fn add(&self, user_id: i64, form: &PersonalDataForm) -> Result<PersonalData> {
        info!("Creating personal data for user {}", user_id);

        let record = sqlx::query_as::<_, PersonalData>(
            r#"
            INSERT INTO personal_data (user_id, name, email, title, objective, address, site, phone)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id, user_id, name, email, title, objective, address, site, phone
            "#,
        )
        .bind(user_id)
        .bind(form.name.trim())
        .bind(form.email.trim())
        .bind(form.title.trim())
        .bind(form.objective.trim())
        .bind(form.address.trim())
        .bind(form.site.trim())
        .bind(form.phone.trim())
        .fetch_one(self.pool())
        .await?;

        Ok(record)
    }

    /// Overwrite every field of a user's personal data row
    pub async fn update(
        &self,
        id: i64,
        user_id: i64,
        form: &PersonalDataForm,
    ) -> Result<Option<PersonalData>> {
        info!("Updating personal data {} of user {}", id, user_id);

        let record = sqlx::query_as::<_, PersonalData>(
            r#"
            UPDATE personal_data
            SET name = ?, email = ?, title = ?, objective = ?, address = ?, site = ?, phone = ?
            WHERE id = ? AND user_id = ?
            RETURNING id, user_id, name, email, title, objective, address, site, phone
            "#,
        )
        .bind(form.name.trim())
        .bind(form.email.trim())
        .bind(form.title.trim())
        .bind(form.objective.trim())
        .bind(form.address.trim())
        .bind(form.site.trim())
        .bind(form.phone.trim())
        .bind(id)
        .bind(user_id)
        .fetch_optional(self.pool())
        .await?;

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::test_support;

    fn form(name: &str) -> PersonalDataForm {
        PersonalDataForm {
            name: name.to_string(),
            email: "ana@example.com".to_string(),
            title: "Engenheira de Software".to_string(),
            objective: "Construir sistemas confiáveis".to_string(),
            address: "São Paulo".to_string(),
            site: "https://ana.dev".to_string(),
            phone: "11 99999-0000".to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_then_update() -> Result<()> {
        let pool = test_support::pool().await?;
        let user_id = test_support::user(&pool, "ana@example.com").await?;
        let repository = PersonalDataRepository::new(pool);

        let created = repository.add(user_id, &form(" Ana ")).await?;
        assert_eq!(created.name, "Ana");
        assert_eq!(created.user_id, user_id);

        let updated = repository
            .update(created.id, user_id, &form("Ana Souza"))
            .await?
            .expect("row should exist");
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Ana Souza");

        let first = repository.first_by_user_id(user_id).await?;
        assert_eq!(first.map(|p| p.name), Some("Ana Souza".to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn test_update_is_scoped_to_owner() -> Result<()> {
        let pool = test_support::pool().await?;
        let owner = test_support::user(&pool, "ana@example.com").await?;
        let other = test_support::user(&pool, "bia@example.com").await?;
        let repository = PersonalDataRepository::new(pool);

        let created = repository.add(owner, &form("Ana")).await?;
        let hijack = repository.update(created.id, other, &form("Bia")).await?;
        assert!(hijack.is_none());
        Ok(())
    }
}
