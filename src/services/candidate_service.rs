use std::sync::Arc;

use crate::dto::file_dto::FileDto;
use crate::error::Result;
use crate::models::candidate::Candidate;
use crate::repository::CandidateRepository;
use crate::services::file_service::FileService;

#[derive(Clone)]
pub struct CandidateService {
    candidates: Arc<dyn CandidateRepository>,
    files: FileService,
}

impl CandidateService {
    pub fn new(candidates: Arc<dyn CandidateRepository>, files: FileService) -> Self {
        Self { candidates, files }
    }

    /// Stores the attachment, then the candidate pointing at it.
    ///
    /// The two writes are independent: if the second one fails the file row
    /// stays behind without a referencing candidate.
    pub async fn save_with_attachment(
        &self,
        mut candidate: Candidate,
        file: FileDto,
    ) -> Result<Candidate> {
        let file = self.files.save(file).await?;
        candidate.file_id = file.id;
        let candidate = self.candidates.save(candidate).await?;
        tracing::info!(
            candidate_id = candidate.id,
            file_id = candidate.file_id,
            "candidate created"
        );
        Ok(candidate)
    }

    /// Stores the new attachment and repoints the candidate at it. The
    /// previous file is left in place, and a new file is stored even when the
    /// candidate does not exist.
    pub async fn update_with_attachment(
        &self,
        mut candidate: Candidate,
        file: FileDto,
    ) -> Result<bool> {
        let file = self.files.save(file).await?;
        candidate.file_id = file.id;
        self.update(candidate).await
    }

    pub async fn update(&self, candidate: Candidate) -> Result<bool> {
        let id = candidate.id;
        let updated = self.candidates.update(candidate).await?;
        tracing::debug!(candidate_id = id, updated, "candidate update");
        Ok(updated)
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<bool> {
        self.candidates.delete_by_id(id).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Candidate>> {
        self.candidates.find_by_id(id).await
    }

    pub async fn find_all(&self) -> Result<Vec<Candidate>> {
        self.candidates.find_all().await
    }
}
