pub mod candidate;
pub mod city;
pub mod file;
pub mod user;
pub mod vacancy;

/// A persisted record kind whose identity is assigned by a repository.
///
/// An id of `0` means the record has not been saved yet.
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> i32;

    fn set_id(&mut self, id: i32);
}
