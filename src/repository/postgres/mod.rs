//! Postgres-backed repositories.
//!
//! Each call acquires its own pooled connection and returns it when the
//! `PoolConnection` guard drops, on success and on error alike.

mod candidate;
mod file;
mod user;
mod vacancy;

pub use candidate::PgCandidateRepository;
pub use file::PgFileRepository;
pub use user::PgUserRepository;
pub use vacancy::PgVacancyRepository;
