mod candidate;
mod city;
mod file;
mod store;
mod user;
mod vacancy;

pub use candidate::MemoryCandidateRepository;
pub use city::MemoryCityRepository;
pub use file::MemoryFileRepository;
pub use store::MemoryStore;
pub use user::MemoryUserRepository;
pub use vacancy::MemoryVacancyRepository;
