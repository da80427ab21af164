//! User accounts and authentication

use anyhow::Result;
use tracing::{info, warn};

use crate::models::{LoginCredentials, NewUser, User};
use crate::repositories::UserRepository;

/// User service
#[derive(Clone)]
pub struct UserService {
    user_repository: UserRepository,
}

impl UserService {
    pub fn new(user_repository: UserRepository) -> Self {
        Self { user_repository }
    }

    pub async fn create_user(&self, new_user: &NewUser) -> Result<User> {
        self.user_repository.add(new_user).await
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.user_repository.get_by_email(email).await
    }

    /// Return the user when the email exists and the password matches
    pub async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Option<User>> {
        let Some(user) = self.get_user_by_email(&credentials.email).await? else {
            warn!("Login attempt for unknown email: {}", credentials.email.trim());
            return Ok(None);
        };

        if self
            .user_repository
            .verify_password(&user, &credentials.password)?
        {
            info!("User {} authenticated", user.id);
            Ok(Some(user))
        } else {
            warn!("Wrong password for user {}", user.id);
            Ok(None)
        }
    }
}
