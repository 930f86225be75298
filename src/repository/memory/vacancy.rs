use async_trait::async_trait;

use super::MemoryStore;
use crate::error::Result;
use crate::models::vacancy::Vacancy;
use crate::repository::VacancyRepository;

#[derive(Default)]
pub struct MemoryVacancyRepository {
    store: MemoryStore<Vacancy>,
}

impl MemoryVacancyRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VacancyRepository for MemoryVacancyRepository {
    async fn save(&self, vacancy: Vacancy) -> Result<Vacancy> {
        let vacancy = self.store.save(vacancy)?;
        tracing::debug!(vacancy_id = vacancy.id, "vacancy stored in memory");
        Ok(vacancy)
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool> {
        self.store.delete_by_id(id)
    }

    async fn update(&self, vacancy: Vacancy) -> Result<bool> {
        self.store.update(vacancy)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Vacancy>> {
        self.store.find_by_id(id)
    }

    async fn find_all(&self) -> Result<Vec<Vacancy>> {
        self.store.find_all()
    }
}
