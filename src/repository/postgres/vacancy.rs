use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::Result;
use crate::models::vacancy::Vacancy;
use crate::repository::VacancyRepository;
use crate::utils::time::to_db_precision;

#[derive(Clone)]
pub struct PgVacancyRepository {
    pool: PgPool,
}

impl PgVacancyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VacancyRepository for PgVacancyRepository {
    async fn save(&self, mut vacancy: Vacancy) -> Result<Vacancy> {
        vacancy.creation_date = to_db_precision(vacancy.creation_date);
        let mut conn = self.pool.acquire().await?;
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO vacancies (title, description, creation_date, visible, city_id, file_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&vacancy.title)
        .bind(&vacancy.description)
        .bind(vacancy.creation_date)
        .bind(vacancy.visible)
        .bind(vacancy.city_id)
        .bind(vacancy.file_id)
        .fetch_one(&mut *conn)
        .await?;
        vacancy.id = id;
        tracing::debug!(vacancy_id = id, "vacancy inserted");
        Ok(vacancy)
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool> {
        let mut conn = self.pool.acquire().await?;
        let res = sqlx::query("DELETE FROM vacancies WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn update(&self, vacancy: Vacancy) -> Result<bool> {
        let mut conn = self.pool.acquire().await?;
        let res = sqlx::query(
            r#"
            UPDATE vacancies
            SET
                title = $2,
                description = $3,
                creation_date = $4,
                visible = $5,
                city_id = $6,
                file_id = $7
            WHERE id = $1
            "#,
        )
        .bind(vacancy.id)
        .bind(&vacancy.title)
        .bind(&vacancy.description)
        .bind(to_db_precision(vacancy.creation_date))
        .bind(vacancy.visible)
        .bind(vacancy.city_id)
        .bind(vacancy.file_id)
        .execute(&mut *conn)
        .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Vacancy>> {
        let mut conn = self.pool.acquire().await?;
        let vacancy = sqlx::query_as::<_, Vacancy>(
            r#"
            SELECT id, title, description, creation_date, visible, city_id, file_id
            FROM vacancies
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(vacancy)
    }

    async fn find_all(&self) -> Result<Vec<Vacancy>> {
        let mut conn = self.pool.acquire().await?;
        let items = sqlx::query_as::<_, Vacancy>(
            r#"
            SELECT id, title, description, creation_date, visible, city_id, file_id
            FROM vacancies
            ORDER BY id
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;
        Ok(items)
    }
}
