//! Work experience service

use anyhow::Result;

use crate::models::{Experience, ExperienceForm};
use crate::repositories::ExperienceRepository;

/// Experience service
#[derive(Clone)]
pub struct ExperienceService {
    experience_repository: ExperienceRepository,
}

impl ExperienceService {
    pub fn new(experience_repository: ExperienceRepository) -> Self {
        Self {
            experience_repository,
        }
    }

    pub async fn create(&self, user_id: i64, form: &ExperienceForm) -> Result<Experience> {
        self.experience_repository.add(user_id, form).await
    }

    pub async fn update(
        &self,
        id: i64,
        user_id: i64,
        form: &ExperienceForm,
    ) -> Result<Option<Experience>> {
        self.experience_repository.update(id, user_id, form).await
    }

    pub async fn delete(&self, id: i64, user_id: i64) -> Result<bool> {
        self.experience_repository.delete(id, user_id).await
    }

    pub async fn get_by_id(&self, id: i64, user_id: i64) -> Result<Option<Experience>> {
        self.experience_repository.get_owned(id, user_id).await
    }

    pub async fn get_by_user_id(&self, user_id: i64) -> Result<Vec<Experience>> {
        self.experience_repository.get_all_by_user_id(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::test_support;

    #[tokio::test]
    async fn test_crud_round() -> Result<()> {
        let pool = test_support::pool().await?;
        let user_id = test_support::user(&pool, "ana@example.com").await?;
        let service = ExperienceService::new(ExperienceRepository::new(pool));

        let mut form = ExperienceForm {
            role: "Estagiária".to_string(),
            company: "Acme".to_string(),
            date: "2019".to_string(),
            description: "Suporte".to_string(),
            ..Default::default()
        };
        let created = service.create(user_id, &form).await?;

        form.role = "Desenvolvedora".to_string();
        service.update(created.id, user_id, &form).await?;

        let fetched = service.get_by_id(created.id, user_id).await?;
        assert_eq!(fetched.map(|e| e.role), Some("Desenvolvedora".to_string()));

        assert!(service.delete(created.id, user_id).await?);
        assert!(service.get_by_user_id(user_id).await?.is_empty());
        assert!(!service.delete(created.id, user_id).await?);
        Ok(())
    }
}
