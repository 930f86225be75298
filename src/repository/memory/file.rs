use async_trait::async_trait;

use super::MemoryStore;
use crate::error::Result;
use crate::models::file::File;
use crate::repository::FileRepository;

#[derive(Default)]
pub struct MemoryFileRepository {
    store: MemoryStore<File>,
}

impl MemoryFileRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FileRepository for MemoryFileRepository {
    async fn save(&self, file: File) -> Result<File> {
        let file = self.store.save(file)?;
        tracing::debug!(file_id = file.id, size = file.content.len(), "file stored in memory");
        Ok(file)
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool> {
        self.store.delete_by_id(id)
    }

    async fn update(&self, file: File) -> Result<bool> {
        self.store.update(file)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<File>> {
        self.store.find_by_id(id)
    }

    async fn find_all(&self) -> Result<Vec<File>> {
        self.store.find_all()
    }
}
