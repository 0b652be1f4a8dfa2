//! User repositories
//!
//! The [`UserRepository`] trait is the seam the HTTP layer depends on; the
//! in-memory implementation is the only store shipped.

pub mod memory;

pub use memory::InMemoryUserRepository;

use crate::errors::CoreResult;
use crate::models::User;

/// Storage contract for user records
pub trait UserRepository: Send + Sync {
    /// Every user in insertion order
    fn list_all(&self) -> CoreResult<Vec<User>>;

    /// Look a user up by id
    fn get_by_id(&self, id: i32) -> CoreResult<Option<User>>;

    /// Store a new user. Blank names are rejected; the id is `max + 1`, or 1 when empty.
    fn create(&self, name: &str) -> CoreResult<User>;

    /// Rename a user. An unknown id wins over a blank name.
    fn update(&self, id: i32, name: &str) -> CoreResult<User>;

    /// Remove a user and hand back the removed record
    fn delete(&self, id: i32) -> CoreResult<User>;

    /// Number of stored users
    fn len(&self) -> CoreResult<usize> {
        Ok(self.list_all()?.len())
    }

    fn is_empty(&self) -> CoreResult<bool> {
        Ok(self.len()? == 0)
    }
}
