use std::sync::Arc;

use crate::dto::file_dto::FileDto;
use crate::error::Result;
use crate::models::file::File;
use crate::repository::FileRepository;

#[derive(Clone)]
pub struct FileService {
    files: Arc<dyn FileRepository>,
}

impl FileService {
    pub fn new(files: Arc<dyn FileRepository>) -> Self {
        Self { files }
    }

    /// Always creates a new row; existing files are never overwritten.
    pub async fn save(&self, file: FileDto) -> Result<File> {
        self.files.save(file.into()).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<FileDto>> {
        Ok(self.files.find_by_id(id).await?.map(FileDto::from))
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<bool> {
        self.files.delete_by_id(id).await
    }
}
