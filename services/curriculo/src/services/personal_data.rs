//! Personal data service

use anyhow::Result;

use crate::models::{PersonalData, PersonalDataForm};
use crate::repositories::PersonalDataRepository;

/// Personal data service
#[derive(Clone)]
pub struct PersonalDataService {
    personal_data_repository: PersonalDataRepository,
}

impl PersonalDataService {
    pub fn new(personal_data_repository: PersonalDataRepository) -> Self {
        Self {
            personal_data_repository,
        }
    }

    pub async fn create(&self, user_id: i64, form: &PersonalDataForm) -> Result<PersonalData> {
        self.personal_data_repository.add(user_id, form).await
    }

    pub async fn update(
        &self,
        id: i64,
        user_id: i64,
        form: &PersonalDataForm,
    ) -> Result<Option<PersonalData>> {
        self.personal_data_repository.update(id, user_id, form).await
    }

    pub async fn get_by_user_id(&self, user_id: i64) -> Result<Option<PersonalData>> {
        self.personal_data_repository.first_by_user_id(user_id).await
    }

    /// Update the user's personal data, creating it on first save
    pub async fn save(&self, user_id: i64, form: &PersonalDataForm) -> Result<PersonalData> {
        if let Some(existing) = self.get_by_user_id(user_id).await? {
            if let Some(updated) = self.update(existing.id, user_id, form).await? {
                return Ok(updated);
            }
        }

        self.create(user_id, form).await
    }
}
