use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::form_fields::FormFields;
use crate::error::Result;
use crate::models::vacancy::Vacancy;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VacancyForm {
    #[validate(length(min = 1))]
    pub title: String,
    pub description: String,
    pub creation_date: Option<NaiveDateTime>,
    pub visible: bool,
    #[validate(range(min = 1))]
    pub city_id: i32,
    pub file_id: Option<i32>,
}

impl VacancyForm {
    pub fn from_fields(fields: &FormFields) -> Result<Self> {
        Ok(Self {
            title: fields.required("title")?.to_string(),
            description: fields.text("description").unwrap_or_default().to_string(),
            creation_date: fields.parse("creation_date")?,
            visible: fields.flag("visible")?,
            city_id: fields.parse_required("city_id")?,
            file_id: fields.parse("file_id")?,
        })
    }

    pub fn into_vacancy(self, id: i32, default_creation_date: NaiveDateTime) -> Vacancy {
        Vacancy {
            id,
            title: self.title,
            description: self.description,
            creation_date: self.creation_date.unwrap_or(default_creation_date),
            visible: self.visible,
            city_id: self.city_id,
            file_id: self.file_id.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacancyListResponse {
    pub items: Vec<Vacancy>,
}
