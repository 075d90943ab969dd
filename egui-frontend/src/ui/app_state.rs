//! # App State Module
//!
//! Defines `PetShopApp`, the single struct holding all application state.
//!
//! ## Key Types:
//! - `PetShopApp` - backend handle plus one state container per concern
//!
//! ## State Management:
//! Each concern lives in its own container from `ui::state`. Screens read
//! from these containers every frame; actions in `ui::actions` mutate them
//! and then re-fetch whatever the mutation touched.

use log::info;
use petshop_backend::Backend;

use crate::ui::state::*;

/// Main application struct for the egui pet shop
pub struct PetShopApp {
    backend: Backend,

    pub nav: NavigationState,
    pub auth: AuthState,
    pub admin: AdminState,
    pub customer: CustomerState,
    pub ui: UIState,
}

impl PetShopApp {
    pub fn new(backend: Backend) -> Self {
        info!("🚀 Initializing PetShopApp");
        Self {
            backend,
            nav: NavigationState::new(),
            auth: AuthState::new(),
            admin: AdminState::new(),
            customer: CustomerState::new(),
            ui: UIState::new(),
        }
    }

    pub fn backend(&self) -> &Backend {
        &self.backend
    }

    /// Name of the logged-in user, if any
    pub fn current_user(&self) -> Option<String> {
        self.nav.username().map(str::to_string)
    }

    /// End the session and drop everything tied to it
    pub fn logout(&mut self) {
        self.nav.logout();
        self.auth.clear();
        self.admin.clear();
        self.customer.clear();
        self.ui.clear_messages();
    }
}
