//! Application state shared across handlers

use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use sqlx::SqlitePool;

use crate::config::AppConfig;
use crate::openai::ObjectiveGenerator;
use crate::repositories::{
    EducationRepository, ExperienceRepository, PersonalDataRepository, SkillRepository,
    UserRepository,
};
use crate::services::{
    EducationService, ExperienceService, PersonalDataService, ResumeService, SkillService,
    UserService,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub config: Arc<AppConfig>,
    pub cookie_key: Key,
    pub user_service: UserService,
    pub personal_data_service: PersonalDataService,
    pub education_service: EducationService,
    pub experience_service: ExperienceService,
    pub skill_service: SkillService,
    pub resume_service: ResumeService,
    pub objective_generator: Arc<dyn ObjectiveGenerator>,
}

impl AppState {
    pub fn new(
        db_pool: SqlitePool,
        config: AppConfig,
        cookie_key: Key,
        objective_generator: Arc<dyn ObjectiveGenerator>,
    ) -> Self {
        let personal_data_repository = PersonalDataRepository::new(db_pool.clone());
        let education_repository = EducationRepository::new(db_pool.clone());
        let experience_repository = ExperienceRepository::new(db_pool.clone());
        let skill_repository = SkillRepository::new(db_pool.clone());

        Self {
            user_service: UserService::new(UserRepository::new(db_pool.clone())),
            personal_data_service: PersonalDataService::new(personal_data_repository.clone()),
            education_service: EducationService::new(education_repository.clone()),
            experience_service: ExperienceService::new(experience_repository.clone()),
            skill_service: SkillService::new(skill_repository.clone()),
            resume_service: ResumeService::new(
                personal_data_repository,
                education_repository,
                experience_repository,
                skill_repository,
            ),
            db_pool,
            config: Arc::new(config),
            cookie_key,
            objective_generator,
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}
