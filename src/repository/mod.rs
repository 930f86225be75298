//! Repository contracts shared by the in-memory and Postgres backends.
//!
//! Absence is reported as `None`/`false`; only backend faults are `Err`.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{candidate::Candidate, city::City, file::File, user::User, vacancy::Vacancy};

#[async_trait]
pub trait CandidateRepository: Send + Sync {
    /// Stores a new candidate under a fresh id, ignoring `candidate.id`.
    async fn save(&self, candidate: Candidate) -> Result<Candidate>;

    async fn delete_by_id(&self, id: i32) -> Result<bool>;

    /// Overwrites every field except `id`; never inserts on a miss.
    async fn update(&self, candidate: Candidate) -> Result<bool>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Candidate>>;

    async fn find_all(&self) -> Result<Vec<Candidate>>;
}

#[async_trait]
pub trait VacancyRepository: Send + Sync {
    async fn save(&self, vacancy: Vacancy) -> Result<Vacancy>;

    async fn delete_by_id(&self, id: i32) -> Result<bool>;

    async fn update(&self, vacancy: Vacancy) -> Result<bool>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Vacancy>>;

    async fn find_all(&self) -> Result<Vec<Vacancy>>;
}

#[async_trait]
pub trait FileRepository: Send + Sync {
    async fn save(&self, file: File) -> Result<File>;

    /// Referential integrity is backend-specific. Postgres refuses to delete
    /// a file a candidate or vacancy still points to and returns
    /// `Error::Database`; the in-memory backend removes it and the record's
    /// `file_id` is left dangling.
    async fn delete_by_id(&self, id: i32) -> Result<bool>;

    async fn update(&self, file: File) -> Result<bool>;

    async fn find_by_id(&self, id: i32) -> Result<Option<File>>;

    async fn find_all(&self) -> Result<Vec<File>>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns `None` when the email is already registered.
    async fn save(&self, user: User) -> Result<Option<User>>;

    async fn find_by_email_and_password(&self, email: &str, password: &str)
        -> Result<Option<User>>;

    async fn delete_by_email_and_password(&self, email: &str, password: &str) -> Result<bool>;
}

/// Read-only reference data.
#[async_trait]
pub trait CityRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<City>>;
}
