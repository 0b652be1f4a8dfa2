//! In-memory user store

use super::UserRepository;
use crate::errors::{CoreError, CoreResult};
use crate::models::User;
use crate::validation::{validate_name, NAME_REQUIRED};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

const RESOURCE: &str = "users";

/// Users kept in a `Vec` behind a lock. Lookups are linear scans by id.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with the given names, numbered from 1
    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let users = names
            .into_iter()
            .zip(1..)
            .map(|(name, id)| User::new(id, name))
            .collect();

        Self {
            users: RwLock::new(users),
        }
    }

    /// Seed used by the plain CRUD routes
    pub fn crud_seed() -> Self {
        Self::with_names(["Alice", "Bob", "Mark"])
    }

    /// Seed used by the search routes
    pub fn search_seed() -> Self {
        Self::with_names([
            "111-Alice",
            "111-Bob",
            "Alice-222",
            "Bob-222",
            "333-Alice-333",
            "333-Bob-333",
        ])
    }

    /// Seed used by the service-backed and paginated routes
    pub fn service_seed() -> Self {
        Self::with_names(["Alice", "Bob", "Tom", "Jerry"])
    }

    fn read(&self) -> CoreResult<RwLockReadGuard<'_, Vec<User>>> {
        self.users
            .read()
            .map_err(|_| CoreError::lock_poisoned(RESOURCE))
    }

    fn write(&self) -> CoreResult<RwLockWriteGuard<'_, Vec<User>>> {
        self.users
            .write()
            .map_err(|_| CoreError::lock_poisoned(RESOURCE))
    }

    fn position(users: &[User], id: i32) -> CoreResult<usize> {
        users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| CoreError::not_found(format!("user {}", id)))
    }
}

impl UserRepository for InMemoryUserRepository {
    fn list_all(&self) -> CoreResult<Vec<User>> {
        let users = self.read()?;
        debug!(count = users.len(), "listing users");
        Ok(users.clone())
    }

    fn get_by_id(&self, id: i32) -> CoreResult<Option<User>> {
        Ok(self.read()?.iter().find(|u| u.id == id).cloned())
    }

    fn create(&self, name: &str) -> CoreResult<User> {
        let name = validate_name(Some(name), NAME_REQUIRED)?;

        // Reading the max and pushing happen under one write guard
        let mut users = self.write()?;
        debug!(count = users.len(), name, "creating user");

        let id = users.iter().map(|u| u.id).max().map_or(1, |max| max + 1);
        let user = User::new(id, name);
        users.push(user.clone());

        debug!(count = users.len(), id, "user created");
        Ok(user)
    }

    fn update(&self, id: i32, name: &str) -> CoreResult<User> {
        let mut users = self.write()?;
        let index = Self::position(&users, id)?;
        let name = validate_name(Some(name), NAME_REQUIRED)?;

        let user = &mut users[index];
        user.name = name.to_string();
        debug!(id, name, "user renamed");
        Ok(user.clone())
    }

    fn delete(&self, id: i32) -> CoreResult<User> {
        let mut users = self.write()?;
        let index = Self::position(&users, id)?;
        let removed = users.remove(index);
        debug!(count = users.len(), id, "user deleted");
        Ok(removed)
    }

    fn len(&self) -> CoreResult<usize> {
        Ok(self.read()?.len())
    }
}
