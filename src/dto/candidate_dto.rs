use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::form_fields::FormFields;
use crate::error::Result;
use crate::models::candidate::Candidate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CandidateForm {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: String,
    pub creation_date: Option<NaiveDateTime>,
    #[validate(range(min = 1))]
    pub city_id: i32,
    pub file_id: Option<i32>,
}

impl CandidateForm {
    pub fn from_fields(fields: &FormFields) -> Result<Self> {
        Ok(Self {
            name: fields.required("name")?.to_string(),
            description: fields.text("description").unwrap_or_default().to_string(),
            creation_date: fields.parse("creation_date")?,
            city_id: fields.parse_required("city_id")?,
            file_id: fields.parse("file_id")?,
        })
    }

    /// Builds the record; `file_id` stays `0` until an attachment is stored.
    pub fn into_candidate(self, id: i32, default_creation_date: NaiveDateTime) -> Candidate {
        Candidate {
            id,
            name: self.name,
            description: self.description,
            creation_date: self.creation_date.unwrap_or(default_creation_date),
            city_id: self.city_id,
            file_id: self.file_id.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateListResponse {
    pub items: Vec<Candidate>,
}
