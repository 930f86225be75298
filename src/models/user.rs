use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Record;

/// Registered account. The password is stored and compared as plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub password: String,
}

impl User {
    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            email: email.into(),
            name: name.into(),
            password: password.into(),
        }
    }
}

impl Record for User {
    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}
