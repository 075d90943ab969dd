use anyhow::Result;
use log::{info, warn};
use std::sync::Arc;

use crate::storage::AnimalStorage;
use shared::{Animal, AnimalDraft, AnimalStatus};

use super::errors::DomainError;

/// Service for the admin's animal CRUD operations.
///
/// Keeps `owner` consistent with `status`: a bought animal always has an
/// owner (the acting admin when nobody else bought it), an available animal
/// never does.
#[derive(Clone)]
pub struct InventoryService {
    animals: Arc<dyn AnimalStorage>,
}

impl InventoryService {
    pub fn new(animals: Arc<dyn AnimalStorage>) -> Self {
        Self { animals }
    }

    /// List every animal regardless of status
    pub async fn list_animals(&self) -> Result<Vec<Animal>> {
        let animals = self.animals.list_animals().await?;
        info!("Loaded {} animals", animals.len());
        Ok(animals)
    }

    pub async fn get_animal(&self, animal_id: i64) -> Result<Animal> {
        self.animals
            .get_animal(animal_id)
            .await?
            .ok_or_else(|| DomainError::AnimalNotFound(animal_id).into())
    }

    /// Insert a new animal and return its ID
    pub async fn add_animal(&self, draft: &AnimalDraft, acting_user: &str) -> Result<i64> {
        info!("Adding animal: name={}, species={}, status={}", draft.name, draft.species, draft.status);

        let owner = match draft.status {
            AnimalStatus::Available => None,
            AnimalStatus::Bought => Some(acting_user),
        };
        let id = self.animals.store_animal(draft, owner).await?;

        info!("Added animal {} with ID: {}", draft.name, id);
        Ok(id)
    }

    /// Overwrite every editable field of an animal
    pub async fn update_animal(&self, animal_id: i64, draft: &AnimalDraft, acting_user: &str) -> Result<()> {
        info!("Updating animal: {}", animal_id);

        let existing = self.get_animal(animal_id).await?;
        let owner = match draft.status {
            AnimalStatus::Available => None,
            AnimalStatus::Bought => Some(existing.owner.as_deref().unwrap_or(acting_user)),
        };

        if !self.animals.update_animal(animal_id, draft, owner).await? {
            return Err(DomainError::AnimalNotFound(animal_id).into());
        }

        info!("Updated animal {} ({})", draft.name, animal_id);
        Ok(())
    }

    /// Change the status of an animal. Marking it `Bought` goes through
    /// [`Self::mark_bought`]; making it `Available` again clears the owner.
    pub async fn update_status(&self, animal_id: i64, status: AnimalStatus, acting_user: &str) -> Result<()> {
        match status {
            AnimalStatus::Bought => self.mark_bought(animal_id, acting_user).await,
            AnimalStatus::Available => {
                info!("Relisting animal {} as available", animal_id);
                if !self.animals.relist_animal(animal_id).await? {
                    return Err(DomainError::AnimalNotFound(animal_id).into());
                }
                Ok(())
            }
        }
    }

    /// Mark an available animal as bought, owned by the acting admin
    pub async fn mark_bought(&self, animal_id: i64, acting_user: &str) -> Result<()> {
        info!("Marking animal {} as bought by {}", animal_id, acting_user);

        if !self
            .animals
            .update_owner_and_status(animal_id, acting_user, AnimalStatus::Bought)
            .await?
        {
            // Distinguish a missing row from one that was already sold
            self.get_animal(animal_id).await?;
            warn!("Animal {} was already bought", animal_id);
            return Err(DomainError::NotAvailable { id: animal_id }.into());
        }
        Ok(())
    }

    pub async fn delete_animal(&self, animal_id: i64) -> Result<()> {
        info!("Deleting animal: {}", animal_id);

        if !self.animals.delete_animal(animal_id).await? {
            warn!("Animal not found: {}", animal_id);
            return Err(DomainError::AnimalNotFound(animal_id).into());
        }

        info!("Deleted animal: {}", animal_id);
        Ok(())
    }
}
