//! User model and related functionality

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::validation::FormField;

/// User entity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// New user registration payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewUser {
    #[serde(default)]
    pub email: String,
    #[serde(default, rename = "senha")]
    pub password: String,
}

impl NewUser {
    pub fn fields(&self) -> Vec<FormField> {
        vec![
            FormField::new("email", &self.email, 100),
            FormField::new("senha", &self.password, 100),
        ]
    }
}

/// User login credentials
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginCredentials {
    #[serde(default)]
    pub email: String,
    #[serde(default, rename = "senha")]
    pub password: String,
}
