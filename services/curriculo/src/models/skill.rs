//! Skill model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::validation::FormField;

/// Skill entry
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Skill {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
}

/// Skill form payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillForm {
    #[serde(default, rename = "nome")]
    pub name: String,
}

impl SkillForm {
    pub fn fields(&self) -> Vec<FormField> {
        vec![FormField::new("nome", &self.name, 100)]
    }
}
