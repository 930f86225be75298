use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::Result;
use crate::models::candidate::Candidate;
use crate::repository::CandidateRepository;
use crate::utils::time::to_db_precision;

#[derive(Clone)]
pub struct PgCandidateRepository {
    pool: PgPool,
}

impl PgCandidateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CandidateRepository for PgCandidateRepository {
    async fn save(&self, mut candidate: Candidate) -> Result<Candidate> {
        candidate.creation_date = to_db_precision(candidate.creation_date);
        let mut conn = self.pool.acquire().await?;
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO candidates (name, description, creation_date, city_id, file_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&candidate.name)
        .bind(&candidate.description)
        .bind(candidate.creation_date)
        .bind(candidate.city_id)
        .bind(candidate.file_id)
        .fetch_one(&mut *conn)
        .await?;
        candidate.id = id;
        tracing::debug!(candidate_id = id, "candidate inserted");
        Ok(candidate)
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool> {
        let mut conn = self.pool.acquire().await?;
        let res = sqlx::query("DELETE FROM candidates WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn update(&self, candidate: Candidate) -> Result<bool> {
        let mut conn = self.pool.acquire().await?;
        let res = sqlx::query(
            r#"
            UPDATE candidates
            SET
                name = $2,
                description = $3,
                creation_date = $4,
                city_id = $5,
                file_id = $6
            WHERE id = $1
            "#,
        )
        .bind(candidate.id)
        .bind(&candidate.name)
        .bind(&candidate.description)
        .bind(to_db_precision(candidate.creation_date))
        .bind(candidate.city_id)
        .bind(candidate.file_id)
        .execute(&mut *conn)
        .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Candidate>> {
        let mut conn = self.pool.acquire().await?;
        let candidate = sqlx::query_as::<_, Candidate>(
            r#"
            SELECT id, name, description, creation_date, city_id, file_id
            FROM candidates
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(candidate)
    }

    async fn find_all(&self) -> Result<Vec<Candidate>> {
        let mut conn = self.pool.acquire().await?;
        let items = sqlx::query_as::<_, Candidate>(
            r#"
            SELECT id, name, description, creation_date, city_id, file_id
            FROM candidates
            ORDER BY id
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;
        Ok(items)
    }
}
