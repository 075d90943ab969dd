//! # Pet Shop Backend
//!
//! Contains all non-UI logic for the pet shop application.
//!
//! - **storage**: the SQLite database (`sqlx`) and its repositories
//! - **domain**: auth, inventory, browse, cart and checkout logic
//! - **config**: YAML settings loaded at startup
//!
//! The UI talks to [`Backend`], a synchronous facade. It owns a
//! current-thread tokio runtime and blocks on each service call, so every
//! data access happens on the caller's thread and completes before the call
//! returns. The database connection is opened in [`Backend::open`] and
//! closed when the `Backend` is dropped.

pub mod config;
pub mod domain;
pub mod storage;

use anyhow::Result;
use log::info;
use std::path::Path;
use std::sync::Arc;
use tokio::runtime::Runtime;

use shared::{
    Animal, AnimalDraft, AnimalStatus, CheckoutResponse, LoginRequest, RegisterRequest, RegisterResponse,
};

pub use config::{AppConfig, ConfigSource};
pub use domain::*;
pub use storage::DbConnection;

use storage::{AnimalRepository, UserRepository};

/// Synchronous entry point used by the egui front end
pub struct Backend {
    runtime: Runtime,
    db: DbConnection,
    pub auth_service: AuthService,
    pub inventory_service: InventoryService,
    pub checkout_service: CheckoutService,
}

impl Backend {
    /// Open the database at `database_path` and wire up the services
    pub fn open(database_path: &Path) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        info!("Setting up database");
        let db = runtime.block_on(DbConnection::open(database_path))?;

        info!("Setting up domain services");
        let users = Arc::new(UserRepository::new(db.clone()));
        let animals = Arc::new(AnimalRepository::new(db.clone()));

        Ok(Self {
            runtime,
            db,
            auth_service: AuthService::new(users),
            inventory_service: InventoryService::new(animals.clone()),
            checkout_service: CheckoutService::new(animals),
        })
    }

    pub fn register(&self, request: &RegisterRequest) -> RegisterResponse {
        self.runtime.block_on(self.auth_service.register(request))
    }

    pub fn login(&self, request: &LoginRequest) -> bool {
        self.runtime.block_on(self.auth_service.login(request))
    }

    pub fn list_animals(&self) -> Result<Vec<Animal>> {
        self.runtime.block_on(self.inventory_service.list_animals())
    }

    pub fn add_animal(&self, draft: &AnimalDraft, acting_user: &str) -> Result<i64> {
        self.runtime.block_on(self.inventory_service.add_animal(draft, acting_user))
    }

    pub fn update_animal(&self, animal_id: i64, draft: &AnimalDraft, acting_user: &str) -> Result<()> {
        self.runtime
            .block_on(self.inventory_service.update_animal(animal_id, draft, acting_user))
    }

    pub fn update_status(&self, animal_id: i64, status: AnimalStatus, acting_user: &str) -> Result<()> {
        self.runtime
            .block_on(self.inventory_service.update_status(animal_id, status, acting_user))
    }

    pub fn mark_bought(&self, animal_id: i64, acting_user: &str) -> Result<()> {
        self.runtime.block_on(self.inventory_service.mark_bought(animal_id, acting_user))
    }

    pub fn delete_animal(&self, animal_id: i64) -> Result<()> {
        self.runtime.block_on(self.inventory_service.delete_animal(animal_id))
    }

    pub fn available_animals(&self) -> Result<Vec<Animal>> {
        self.runtime.block_on(self.checkout_service.available_animals())
    }

    pub fn buy_one(&self, animal: &Animal, customer: &str) -> Result<CheckoutResponse> {
        self.runtime.block_on(self.checkout_service.buy_one(animal, customer))
    }

    pub fn buy_selected(&self, selected: &[Animal], customer: &str) -> Result<CheckoutResponse> {
        self.runtime.block_on(self.checkout_service.buy_selected(selected, customer))
    }

    pub fn purchases(&self, customer: &str) -> Result<Vec<Animal>> {
        self.runtime.block_on(self.checkout_service.purchases(customer))
    }
}

impl Drop for Backend {
    fn drop(&mut self) {
        self.runtime.block_on(self.db.close());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::UserRole;
    use tempfile::TempDir;

    fn open_backend() -> (Backend, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let backend = Backend::open(&temp_dir.path().join("petshop.db")).expect("Failed to open backend");
        (backend, temp_dir)
    }

    fn draft(name: &str, species: &str, price: f64) -> AnimalDraft {
        AnimalDraft {
            name: name.to_string(),
            species: species.to_string(),
            age: 2,
            price,
            status: AnimalStatus::Available,
        }
    }

    #[test]
    fn test_customer_flow_through_facade() {
        let (backend, _dir) = open_backend();

        let registered = backend.register(&RegisterRequest {
            username: "alice".to_string(),
            password: "pw".to_string(),
            role: UserRole::Customer,
        });
        assert!(registered.success);
        assert!(backend.login(&LoginRequest {
            username: "alice".to_string(),
            password: "pw".to_string(),
            role: UserRole::Customer,
        }));

        backend.add_animal(&draft("Rex", "Dog", 10.0), "admin").unwrap();
        backend.add_animal(&draft("Milo", "Cat", 25.5), "admin").unwrap();

        let available = backend.available_animals().unwrap();
        assert_eq!(available.len(), 2);

        let response = backend.buy_selected(&available, "alice").unwrap();
        assert_eq!(shared::format_price(response.total()), "$35.50");
        assert_eq!(backend.purchases("alice").unwrap().len(), 2);
        assert!(backend.available_animals().unwrap().is_empty());
    }

    #[test]
    fn test_data_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("petshop.db");

        {
            let backend = Backend::open(&path).unwrap();
            backend.add_animal(&draft("Rex", "Dog", 10.0), "admin").unwrap();
        }

        let backend = Backend::open(&path).unwrap();
        let animals = backend.list_animals().unwrap();
        assert_eq!(animals.len(), 1);
        assert_eq!(animals[0].name, "Rex");
    }

    #[test]
    fn test_admin_operations_through_facade() {
        let (backend, _dir) = open_backend();
        let id = backend.add_animal(&draft("Rex", "Dog", 10.0), "admin").unwrap();

        backend.update_animal(id, &draft("Rexy", "Dog", 12.0), "admin").unwrap();
        backend.mark_bought(id, "admin").unwrap();
        assert!(backend.mark_bought(id, "admin").is_err());
        backend.update_status(id, AnimalStatus::Available, "admin").unwrap();
        backend.delete_animal(id).unwrap();

        assert!(backend.list_animals().unwrap().is_empty());
    }
}
