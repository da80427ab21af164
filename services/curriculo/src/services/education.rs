//! Education service

use anyhow::Result;

use crate::models::{Education, EducationForm};
use crate::repositories::EducationRepository;

/// Education service
#[derive(Clone)]
pub struct EducationService {
    education_repository: EducationRepository,
}

impl EducationService {
    pub fn new(education_repository: EducationRepository) -> Self {
        Self {
            education_repository,
        }
    }

    pub async fn create(&self, user_id: i64, form: &EducationForm) -> Result<Education> {
        self.education_repository.add(user_id, form).await
    }

    pub async fn update(
        &self,
        id: i64,
        user_id: i64,
        form: &EducationForm,
    ) -> Result<Option<Education>> {
        self.education_repository.update(id, user_id, form).await
    }

    pub async fn delete(&self, id: i64, user_id: i64) -> Result<bool> {
        self.education_repository.delete(id, user_id).await
    }

    pub async fn get_by_id(&self, id: i64, user_id: i64) -> Result<Option<Education>> {
        self.education_repository.get_owned(id, user_id).await
    }

    pub async fn get_by_user_id(&self, user_id: i64) -> Result<Vec<Education>> {
        self.education_repository.get_all_by_user_id(user_id).await
    }
}
