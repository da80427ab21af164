//! Work experience model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::num::ParseIntError;

use crate::validation::FormField;

/// Work experience entry
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Experience {
    pub id: i64,
    pub user_id: i64,
    pub role: String,
    pub company: String,
    pub date: String,
    pub description: String,
}

/// Experience form payload; `id` is set when an existing entry is edited
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExperienceForm {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "cargo")]
    pub role: String,
    #[serde(default, rename = "empresa")]
    pub company: String,
    #[serde(default, rename = "data")]
    pub date: String,
    #[serde(default, rename = "descricao")]
    pub description: String,
}

impl ExperienceForm {
    pub fn record_id(&self) -> Result<Option<i64>, ParseIntError> {
        super::parse_record_id(self.id.as_deref())
    }

    pub fn fields(&self) -> Vec<FormField> {
        vec![
            FormField::new("cargo", &self.role, 100),
            FormField::new("empresa", &self.company, 100),
            FormField::new("data", &self.date, 20),
            FormField::new("descricao", &self.description, 500),
        ]
    }
}
