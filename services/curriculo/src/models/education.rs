//! Education model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::num::ParseIntError;

use crate::validation::FormField;

/// Education entry
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Education {
    pub id: i64,
    pub user_id: i64,
    pub course: String,
    pub institution: String,
    pub date: String,
    pub description: String,
}

/// Education form payload; `id` is set when an existing entry is edited
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EducationForm {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "curso")]
    pub course: String,
    #[serde(default, rename = "instituicao")]
    pub institution: String,
    #[serde(default, rename = "data")]
    pub date: String,
    #[serde(default, rename = "descricao")]
    pub description: String,
}

impl EducationForm {
    pub fn record_id(&self) -> Result<Option<i64>, ParseIntError> {
        super::parse_record_id(self.id.as_deref())
    }

    pub fn fields(&self) -> Vec<FormField> {
        vec![
            FormField::new("curso", &self.course, 100),
            FormField::new("instituicao", &self.institution, 100),
            FormField::new("data", &self.date, 20),
            FormField::new("descricao", &self.description, 500),
        ]
    }
}
