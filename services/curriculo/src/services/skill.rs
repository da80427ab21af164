//! Skill service

use anyhow::Result;

use crate::models::{Skill, SkillForm};
use crate::repositories::SkillRepository;

/// Skill service
#[derive(Clone)]
pub struct SkillService {
    skill_repository: SkillRepository,
}

impl SkillService {
    pub fn new(skill_repository: SkillRepository) -> Self {
        Self { skill_repository }
    }

    pub async fn create(&self, user_id: i64, form: &SkillForm) -> Result<Skill> {
        self.skill_repository.add(user_id, form).await
    }

    pub async fn delete(&self, id: i64, user_id: i64) -> Result<bool> {
        self.skill_repository.delete(id, user_id).await
    }

    pub async fn get_by_id(&self, id: i64, user_id: i64) -> Result<Option<Skill>> {
        self.skill_repository.get_owned(id, user_id).await
    }

    pub async fn get_by_user_id(&self, user_id: i64) -> Result<Vec<Skill>> {
        self.skill_repository.get_all_by_user_id(user_id).await
    }
}
