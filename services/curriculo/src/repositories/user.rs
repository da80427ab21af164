//! User repository for database operations

use anyhow::Result;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use tracing::info;

use super::{Record, Repository};
use crate::models::{NewUser, User};

impl Record for User {
    const TABLE: &'static str = "users";
    const COLUMNS: &'static str = "id, email, password_hash";
}

/// User repository
pub type UserRepository = Repository<User>;

impl Repository<User> {
    /// Create a new user, storing an Argon2 hash of the password
    pub async fn add(&self, new_user: &NewUser) -> Result<User> {
        info!("Creating new user: {}", new_user.email);

        let salt = SaltString::generate(&mut rand::thread_rng());
        let argon2 = Argon2::default();
        let password_hash = argon2
            .hash_password(new_user.password.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?
            .to_string();

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash)
            VALUES (?, ?)
            RETURNING id, email, password_hash
            "#,
        )
        .bind(new_user.email.trim())
        .bind(&password_hash)
        .fetch_one(self.pool())
        .await?;

        Ok(user)
    }

    /// Find a user by email
    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email.trim())
        .fetch_optional(self.pool())
        .await?;

        Ok(user)
    }

    /// Verify a user's password
    pub fn verify_password(&self, user: &User, password: &str) -> Result<bool> {
        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|e| anyhow::anyhow!("Failed to parse password hash: {}", e))?;

        let argon2 = Argon2::default();
        let result = argon2.verify_password(password.as_bytes(), &parsed_hash);

        Ok(result.is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::test_support;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            password: "Segredo123".to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_hashes_password() -> Result<()> {
        let repository = UserRepository::new(test_support::pool().await?);

        let user = repository.add(&new_user(" ana@example.com ")).await?;
        assert_eq!(user.email, "ana@example.com");
        assert_ne!(user.password_hash, "Segredo123");
        assert!(repository.verify_password(&user, "Segredo123")?);
        assert!(!repository.verify_password(&user, "segredo123")?);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_by_email_and_id() -> Result<()> {
        let repository = UserRepository::new(test_support::pool().await?);
        let user = repository.add(&new_user("ana@example.com")).await?;

        let by_email = repository.get_by_email("ana@example.com").await?;
        assert_eq!(by_email.map(|u| u.id), Some(user.id));

        let by_id = repository.get_by_id(user.id).await?;
        assert_eq!(by_id.map(|u| u.email), Some("ana@example.com".to_string()));

        assert!(repository.get_by_email("bia@example.com").await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected_by_the_store() -> Result<()> {
        let repository = UserRepository::new(test_support::pool().await?);
        repository.add(&new_user("ana@example.com")).await?;

        assert!(repository.add(&new_user("ana@example.com")).await.is_err());
        Ok(())
    }
}
