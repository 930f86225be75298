use std::sync::Arc;

use crate::error::Result;
use crate::models::user::User;
use crate::repository::UserRepository;

#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// `None` means the email is already registered.
    pub async fn register(&self, user: User) -> Result<Option<User>> {
        let saved = self.users.save(user).await?;
        match &saved {
            Some(user) => tracing::info!(user_id = user.id, "user registered"),
            None => tracing::warn!("registration rejected: email already in use"),
        }
        Ok(saved)
    }

    /// `None` covers both an unknown email and a wrong password.
    pub async fn login(&self, email: &str, password: &str) -> Result<Option<User>> {
        let user = self.users.find_by_email_and_password(email, password).await?;
        if user.is_none() {
            tracing::warn!("login failed: invalid credentials");
        }
        Ok(user)
    }

    pub async fn delete(&self, email: &str, password: &str) -> Result<bool> {
        self.users.delete_by_email_and_password(email, password).await
    }
}
