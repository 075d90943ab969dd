use anyhow::Result;
use log::{info, warn};
use std::sync::Arc;

use crate::storage::AnimalStorage;
use shared::{format_price, Animal, AnimalStatus, CheckoutResponse, Transaction};

use super::errors::DomainError;

/// Service for customer purchases and the purchases history
#[derive(Clone)]
pub struct CheckoutService {
    animals: Arc<dyn AnimalStorage>,
}

impl CheckoutService {
    pub fn new(animals: Arc<dyn AnimalStorage>) -> Self {
        Self { animals }
    }

    /// Snapshot for the browse page: every animal still for sale
    pub async fn available_animals(&self) -> Result<Vec<Animal>> {
        let animals: Vec<Animal> = self
            .animals
            .list_animals()
            .await?
            .into_iter()
            .filter(Animal::is_available)
            .collect();
        info!("Loaded {} available animals", animals.len());
        Ok(animals)
    }

    /// Buy a single animal straight from the details dialog
    pub async fn buy_one(&self, animal: &Animal, customer: &str) -> Result<CheckoutResponse> {
        info!("Customer {} buying animal {} ({})", customer, animal.name, animal.id);

        if !self
            .animals
            .update_owner_and_status(animal.id, customer, AnimalStatus::Bought)
            .await?
        {
            warn!("Animal {} is no longer available", animal.id);
            return Err(DomainError::NotAvailable { id: animal.id }.into());
        }

        let receipt = Transaction::new(customer, Self::bought_copy(animal, customer));
        let success_message = format!(
            "You bought {} for {}!",
            animal.name,
            format_price(receipt.total())
        );
        Ok(CheckoutResponse {
            receipts: vec![receipt],
            success_message,
        })
    }

    /// Buy every given animal or none of them
    pub async fn buy_selected(&self, selected: &[Animal], customer: &str) -> Result<CheckoutResponse> {
        if selected.is_empty() {
            return Err(DomainError::EmptySelection.into());
        }
        info!("Customer {} checking out {} animals", customer, selected.len());

        let ids: Vec<i64> = selected.iter().map(|a| a.id).collect();
        if let Some(blocked) = self.animals.purchase_animals(&ids, customer).await? {
            warn!("Checkout for {} aborted: animal {} no longer available", customer, blocked);
            return Err(DomainError::NotAvailable { id: blocked }.into());
        }

        let receipts: Vec<Transaction> = selected
            .iter()
            .map(|a| Transaction::new(customer, Self::bought_copy(a, customer)))
            .collect();
        let total: f64 = receipts.iter().map(Transaction::total).sum();
        info!("Checkout for {} complete, total {}", customer, format_price(total));

        Ok(CheckoutResponse {
            receipts,
            success_message: "You have bought the selected animals!".to_string(),
        })
    }

    /// Animals owned by the customer, read back from the database
    pub async fn purchases(&self, customer: &str) -> Result<Vec<Animal>> {
        let owned = self.animals.list_animals_by_owner(customer).await?;
        info!("Customer {} owns {} animals", customer, owned.len());
        Ok(owned)
    }

    fn bought_copy(animal: &Animal, customer: &str) -> Animal {
        Animal {
            status: AnimalStatus::Bought,
            owner: Some(customer.to_string()),
            ..animal.clone()
        }
    }
}
