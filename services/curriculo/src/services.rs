//! Business services sitting on top of the repositories

pub mod education;
pub mod experience;
pub mod personal_data;
pub mod resume;
pub mod skill;
pub mod user;

pub use education::EducationService;
pub use experience::ExperienceService;
pub use personal_data::PersonalDataService;
pub use resume::ResumeService;
pub use skill::SkillService;
pub use user::UserService;
