use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::Result;
use crate::models::file::File;
use crate::repository::FileRepository;

#[derive(Clone)]
pub struct PgFileRepository {
    pool: PgPool,
}

impl PgFileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FileRepository for PgFileRepository {
    async fn save(&self, mut file: File) -> Result<File> {
        let mut conn = self.pool.acquire().await?;
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO files (name, content) VALUES ($1, $2) RETURNING id",
        )
        .bind(&file.name)
        .bind(&file.content)
        .fetch_one(&mut *conn)
        .await?;
        file.id = id;
        tracing::debug!(file_id = id, size = file.content.len(), "file inserted");
        Ok(file)
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool> {
        let mut conn = self.pool.acquire().await?;
        let res = sqlx::query("DELETE FROM files WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn update(&self, file: File) -> Result<bool> {
        let mut conn = self.pool.acquire().await?;
        let res = sqlx::query("UPDATE files SET name = $2, content = $3 WHERE id = $1")
            .bind(file.id)
            .bind(&file.name)
            .bind(&file.content)
            .execute(&mut *conn)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<File>> {
        let mut conn = self.pool.acquire().await?;
        let file = sqlx::query_as::<_, File>("SELECT id, name, content FROM files WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(file)
    }

    async fn find_all(&self) -> Result<Vec<File>> {
        let mut conn = self.pool.acquire().await?;
        let items = sqlx::query_as::<_, File>("SELECT id, name, content FROM files ORDER BY id")
            .fetch_all(&mut *conn)
            .await?;
        Ok(items)
    }
}
