//! Aggregated résumé view of a user's records

use serde::Serialize;

use super::{Education, Experience, PersonalData, Skill};

/// Everything needed to render a user's résumé
#[derive(Debug, Clone, Default, Serialize)]
pub struct Resume {
    pub personal_data: Option<PersonalData>,
    /// Most recent first
    pub education: Vec<Education>,
    /// Most recent first
    pub experience: Vec<Experience>,
    pub skills: Vec<Skill>,
}

impl Resume {
    pub fn is_empty(&self) -> bool {
        self.personal_data.is_none()
            && self.education.is_empty()
            && self.experience.is_empty()
            && self.skills.is_empty()
    }
}
