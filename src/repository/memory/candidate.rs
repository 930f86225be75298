use async_trait::async_trait;

use super::MemoryStore;
use crate::error::Result;
use crate::models::candidate::Candidate;
use crate::repository::CandidateRepository;

#[derive(Default)]
pub struct MemoryCandidateRepository {
    store: MemoryStore<Candidate>,
}

impl MemoryCandidateRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CandidateRepository for MemoryCandidateRepository {
    async fn save(&self, candidate: Candidate) -> Result<Candidate> {
        let candidate = self.store.save(candidate)?;
        tracing::debug!(candidate_id = candidate.id, "candidate stored in memory");
        Ok(candidate)
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool> {
        self.store.delete_by_id(id)
    }

    async fn update(&self, candidate: Candidate) -> Result<bool> {
        self.store.update(candidate)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Candidate>> {
        self.store.find_by_id(id)
    }

    async fn find_all(&self) -> Result<Vec<Candidate>> {
        self.store.find_all()
    }
}
