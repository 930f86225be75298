use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Candidate {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub creation_date: NaiveDateTime,
    pub city_id: i32,
    pub file_id: i32,
}

impl Candidate {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        creation_date: NaiveDateTime,
        city_id: i32,
        file_id: i32,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            description: description.into(),
            creation_date,
            city_id,
            file_id,
        }
    }
}

impl Record for Candidate {
    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}
