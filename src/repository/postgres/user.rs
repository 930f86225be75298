use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::Result;
use crate::models::user::User;
use crate::repository::UserRepository;

#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn save(&self, mut user: User) -> Result<Option<User>> {
        let mut conn = self.pool.acquire().await?;
        let inserted = sqlx::query_scalar::<_, i32>(
            "INSERT INTO users (email, name, password) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.password)
        .fetch_one(&mut *conn)
        .await;

        match inserted {
            Ok(id) => {
                user.id = id;
                Ok(Some(user))
            }
            // Only the email unique index maps to "not saved"; any other
            // failure is a fault.
            Err(sqlx::Error::Database(err)) if err.is_unique_violation() => {
                tracing::debug!("user email already registered");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn find_by_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>> {
        let mut conn = self.pool.acquire().await?;
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, name, password FROM users WHERE email = $1 AND password = $2",
        )
        .bind(email)
        .bind(password)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(user)
    }

    async fn delete_by_email_and_password(&self, email: &str, password: &str) -> Result<bool> {
        let mut conn = self.pool.acquire().await?;
        let res = sqlx::query("DELETE FROM users WHERE email = $1 AND password = $2")
            .bind(email)
            .bind(password)
            .execute(&mut *conn)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
