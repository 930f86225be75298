use sqlx::FromRow;

use super::Record;

/// Stored attachment. Candidates and vacancies point at it through `file_id`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct File {
    pub id: i32,
    pub name: String,
    pub content: Vec<u8>,
}

impl File {
    pub fn new(name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            content,
        }
    }
}

impl Record for File {
    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}
