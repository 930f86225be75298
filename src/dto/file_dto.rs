use crate::models::file::File;

/// Attachment received from the client before a `File` row exists for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDto {
    pub name: String,
    pub content: Vec<u8>,
}

impl FileDto {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

impl From<File> for FileDto {
    fn from(value: File) -> Self {
        Self {
            name: value.name,
            content: value.content,
        }
    }
}

impl From<FileDto> for File {
    fn from(value: FileDto) -> Self {
        File::new(value.name, value.content)
    }
}
