//! # Storage Traits
//!
//! Storage abstraction traits that the domain services depend on. The SQLite
//! repositories implement them; tests and alternative backends can provide
//! their own implementations.

use anyhow::Result;
use async_trait::async_trait;
use shared::{Animal, AnimalDraft, AnimalStatus, User, UserRole};

/// Interface for user storage operations
#[async_trait]
pub trait UserStorage: Send + Sync {
    /// Look up a user by username
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Look up a user whose username, password and role all match exactly
    async fn find_by_credentials(&self, username: &str, password: &str, role: UserRole) -> Result<Option<User>>;

    /// Insert a new user, returning its generated ID
    async fn store_user(&self, username: &str, password: &str, role: UserRole) -> Result<i64>;
}

/// Interface for animal storage operations
#[async_trait]
pub trait AnimalStorage: Send + Sync {
    /// List every animal ordered by ID
    async fn list_animals(&self) -> Result<Vec<Animal>>;

    /// Retrieve a specific animal by ID
    async fn get_animal(&self, animal_id: i64) -> Result<Option<Animal>>;

    /// List the animals owned by a customer
    async fn list_animals_by_owner(&self, owner: &str) -> Result<Vec<Animal>>;

    /// Insert a new animal, returning its generated ID
    async fn store_animal(&self, draft: &AnimalDraft, owner: Option<&str>) -> Result<i64>;

    /// Overwrite every field of an animal
    /// Returns true if the animal exists
    async fn update_animal(&self, animal_id: i64, draft: &AnimalDraft, owner: Option<&str>) -> Result<bool>;

    /// Put an animal back on sale: status `Available`, no owner
    async fn relist_animal(&self, animal_id: i64) -> Result<bool>;

    /// Set owner and status of an animal that is still available
    /// Returns false if the animal is missing or already bought
    async fn update_owner_and_status(&self, animal_id: i64, owner: &str, status: AnimalStatus) -> Result<bool>;

    /// Mark several available animals as bought by `owner` in one transaction.
    /// Returns the ID of the first animal that was no longer available, in
    /// which case nothing was changed.
    async fn purchase_animals(&self, animal_ids: &[i64], owner: &str) -> Result<Option<i64>>;

    /// Delete an animal
    /// Returns true if the animal was found and deleted
    async fn delete_animal(&self, animal_id: i64) -> Result<bool>;
}
