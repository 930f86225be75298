use async_trait::async_trait;

use super::MemoryStore;
use crate::error::Result;
use crate::models::user::User;
use crate::repository::UserRepository;

/// Email uniqueness is checked under the store lock, like a unique index.
#[derive(Default)]
pub struct MemoryUserRepository {
    store: MemoryStore<User>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn save(&self, user: User) -> Result<Option<User>> {
        let email = user.email.clone();
        self.store.save_if(user, |existing| existing.email != email)
    }

    async fn find_by_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>> {
        self.store
            .find_first(|user| user.email == email && user.password == password)
    }

    async fn delete_by_email_and_password(&self, email: &str, password: &str) -> Result<bool> {
        self.store
            .delete_where(|user| user.email == email && user.password == password)
    }
}
