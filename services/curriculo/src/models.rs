//! Domain records and the form payloads that create or change them

pub mod education;
pub mod experience;
pub mod personal_data;
pub mod resume;
pub mod skill;
pub mod user;

// Re-export for convenience
pub use education::{Education, EducationForm};
pub use experience::{Experience, ExperienceForm};
pub use personal_data::{PersonalData, PersonalDataForm};
pub use resume::Resume;
pub use skill::{Skill, SkillForm};
pub use user::{LoginCredentials, NewUser, User};

use std::num::ParseIntError;

/// Parse the optional hidden `id` field sent by the edit forms.
///
/// A missing or blank field means "create a new record".
pub(crate) fn parse_record_id(raw: Option<&str>) -> Result<Option<i64>, ParseIntError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_id() {
        assert_eq!(parse_record_id(None), Ok(None));
        assert_eq!(parse_record_id(Some("  ")), Ok(None));
        assert_eq!(parse_record_id(Some("12")), Ok(Some(12)));
        assert!(parse_record_id(Some("abc")).is_err());
    }
}
