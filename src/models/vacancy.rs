use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Vacancy {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub creation_date: NaiveDateTime,
    pub visible: bool,
    pub city_id: i32,
    pub file_id: i32,
}

impl Vacancy {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        creation_date: NaiveDateTime,
        visible: bool,
        city_id: i32,
        file_id: i32,
    ) -> Self {
        Self {
            id: 0,
            title: title.into(),
            description: description.into(),
            creation_date,
            visible,
            city_id,
            file_id,
        }
    }
}

impl Record for Vacancy {
    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}
