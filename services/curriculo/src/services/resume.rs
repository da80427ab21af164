//! Résumé aggregation

use anyhow::Result;
use tracing::info;

use crate::models::Resume;
use crate::repositories::{
    EducationRepository, ExperienceRepository, PersonalDataRepository, SkillRepository,
};

/// Collects every record that makes up a user's résumé
#[derive(Clone)]
pub struct ResumeService {
    personal_data_repository: PersonalDataRepository,
    education_repository: EducationRepository,
    experience_repository: ExperienceRepository,
    skill_repository: SkillRepository,
}

impl ResumeService {
    pub fn new(
        personal_data_repository: PersonalDataRepository,
        education_repository: EducationRepository,
        experience_repository: ExperienceRepository,
        skill_repository: SkillRepository,
    ) -> Self {
        Self {
            personal_data_repository,
            education_repository,
            experience_repository,
            skill_repository,
        }
    }

    pub async fn get_resume(&self, user_id: i64) -> Result<Resume> {
        info!("Loading résumé of user {}", user_id);

        let (personal_data, education, experience, skills) = tokio::try_join!(
            self.personal_data_repository.first_by_user_id(user_id),
            self.education_repository.get_all_by_user_id(user_id),
            self.experience_repository.get_all_by_user_id(user_id),
            self.skill_repository.get_all_by_user_id(user_id),
        )?;

        Ok(Resume {
            personal_data,
            education,
            experience,
            skills,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EducationForm, ExperienceForm, SkillForm};
    use crate::repositories::test_support;

    #[tokio::test]
    async fn test_get_resume_collects_only_the_users_records() -> Result<()> {
        let pool = test_support::pool().await?;
        let ana = test_support::user(&pool, "ana@example.com").await?;
        let bia = test_support::user(&pool, "bia@example.com").await?;

        let education = EducationRepository::new(pool.clone());
        let experience = ExperienceRepository::new(pool.clone());
        let skills = SkillRepository::new(pool.clone());
        let service = ResumeService::new(
            PersonalDataRepository::new(pool.clone()),
            education.clone(),
            experience.clone(),
            skills.clone(),
        );

        assert!(service.get_resume(ana).await?.is_empty());

        education
            .add(
                ana,
                &EducationForm {
                    course: "Computação".to_string(),
                    ..Default::default()
                },
            )
            .await?;
        experience
            .add(
                ana,
                &ExperienceForm {
                    role: "Desenvolvedora".to_string(),
                    ..Default::default()
                },
            )
            .await?;
        skills
            .add(bia, &SkillForm { name: "Excel".to_string() })
            .await?;

        let resume = service.get_resume(ana).await?;
        assert!(resume.personal_data.is_none());
        assert_eq!(resume.education.len(), 1);
        assert_eq!(resume.experience.len(), 1);
        assert!(resume.skills.is_empty());
        Ok(())
    }
}
