//! # Data Loading Module
//!
//! Fetches from the backend into the UI state containers.
//!
//! ## Key Functions:
//! - `refresh_admin_animals()` - full animal list for the admin panel
//! - `refresh_browse()` - available animals for the browse page
//! - `refresh_purchases()` - animals owned by the logged-in customer
//!
//! Each refresh replaces its snapshot wholesale. On failure the old
//! snapshot is kept and the error is shown to the user. A browse refresh
//! also drops cart lines whose animal is no longer for sale.

use log::{info, warn};

use crate::ui::app_state::PetShopApp;

impl PetShopApp {
    pub fn refresh_admin_animals(&mut self) {
        match self.backend().list_animals() {
            Ok(animals) => {
                info!("📋 Admin panel loaded {} animals", animals.len());
                self.admin.animals = animals;
                self.admin.loaded = true;
            }
            Err(e) => {
                warn!("Failed to load animals: {}", e);
                self.ui.set_error(format!("Failed to load animals: {}", e));
            }
        }
    }

    pub fn refresh_browse(&mut self) {
        match self.backend().available_animals() {
            Ok(animals) => {
                self.customer.browse.replace_snapshot(animals);
                self.customer.browse_loaded = true;

                let dropped = self.customer.cart.retain_available(self.customer.browse.snapshot());
                if !dropped.is_empty() {
                    let names: Vec<&str> = dropped.iter().map(|a| a.name.as_str()).collect();
                    info!("🛒 Dropped sold animals from cart: {}", names.join(", "));
                    if self.ui.error_message.is_none() {
                        self.ui.set_error(format!(
                            "No longer available, removed from your cart: {}",
                            names.join(", ")
                        ));
                    }
                }
            }
            Err(e) => {
                warn!("Failed to load available animals: {}", e);
                self.ui.set_error(format!("Failed to load animals: {}", e));
            }
        }
    }

    pub fn refresh_purchases(&mut self) {
        let Some(customer) = self.current_user() else {
            return;
        };
        match self.backend().purchases(&customer) {
            Ok(owned) => self.customer.owned = owned,
            Err(e) => {
                warn!("Failed to load purchases for {}: {}", customer, e);
                self.ui.set_error(format!("Failed to load purchases: {}", e));
            }
        }
    }
}
