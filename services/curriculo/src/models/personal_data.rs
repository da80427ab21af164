//! Personal data model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::validation::FormField;

/// Personal data entity, at most one per user
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PersonalData {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub title: String,
    pub objective: String,
    pub address: String,
    pub site: String,
    pub phone: String,
}

/// Personal data form payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonalDataForm {
    #[serde(default, rename = "nome")]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, rename = "titulo")]
    pub title: String,
    #[serde(default, rename = "objetivo")]
    pub objective: String,
    #[serde(default, rename = "endereco")]
    pub address: String,
    #[serde(default)]
    pub site: String,
    #[serde(default, rename = "telefone")]
    pub phone: String,
}

impl PersonalDataForm {
    pub fn fields(&self) -> Vec<FormField> {
        vec![
            FormField::new("nome", &self.name, 100),
            FormField::new("email", &self.email, 100),
            FormField::new("titulo", &self.title, 100),
            FormField::new("objetivo", &self.objective, 500),
            FormField::new("endereco", &self.address, 200),
            FormField::new("site", &self.site, 100),
            FormField::new("telefone", &self.phone, 20),
        ]
    }
}
