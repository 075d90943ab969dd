//! # Actions Module
//!
//! What happens when the user clicks something. Every handler follows the
//! same flow: validate the form, call the backend, then re-fetch the
//! affected list so the screen always shows what the database holds.
//!
//! ## Responsibilities:
//! - Login and registration
//! - Admin add/edit/delete/mark-bought/relist
//! - Customer details, cart, single purchase and checkout
//!
//! Handlers never panic on backend failures; errors end up in
//! `ui.error_message` or in the inline message of the form that caused them.

use log::{info, warn};
use petshop_backend::{validate_animal_form, validate_login_form, validate_register_form, DomainError};
use shared::{Animal, AnimalStatus, CheckoutResponse, UserRole};

use crate::ui::app_state::PetShopApp;
use crate::ui::state::{AnimalDialogMode, AnimalDialogState, CustomerPage, FormMessage};

impl PetShopApp {
    // ---- auth ----

    pub fn handle_login(&mut self) {
        let form = &self.auth.login;
        let request = match validate_login_form(&form.username, &form.password, form.role) {
            Ok(request) => request,
            Err(e) => {
                self.auth.login.message = Some(FormMessage::Error(e.to_string()));
                return;
            }
        };

        if !self.backend().login(&request) {
            warn!("Login rejected for {}", request.username);
            self.auth.login.message = Some(FormMessage::Error("Invalid username or password".to_string()));
            return;
        }

        info!("🔑 {} logged in as {}", request.username, request.role);
        self.auth.clear();
        self.nav.login_succeeded(&request.username, request.role);
        self.ui
            .set_success(format!("Login successful! Welcome {}.", request.role.display()));

        match request.role {
            UserRole::Admin => self.refresh_admin_animals(),
            UserRole::Customer => {
                self.refresh_browse();
                self.refresh_purchases();
            }
        }
    }

    pub fn handle_register(&mut self) {
        let form = &self.auth.register;
        let request = match validate_register_form(&form.username, &form.password, &form.confirm_password, form.role)
        {
            Ok(request) => request,
            Err(e) => {
                self.auth.register.message = Some(FormMessage::Error(e.to_string()));
                return;
            }
        };

        let response = self.backend().register(&request);
        if response.success {
            info!("📝 Registered {} as {}", request.username, request.role);
            self.auth.register.clear();
            self.nav.back_to_menu();
            self.ui.set_success(response.message);
        } else {
            self.auth.register.message = Some(FormMessage::Error(response.message));
        }
    }

    // ---- admin ----

    pub fn open_add_dialog(&mut self) {
        self.admin.dialog = Some(AnimalDialogState::for_add());
    }

    pub fn open_edit_dialog(&mut self, animal: &Animal) {
        self.admin.dialog = Some(AnimalDialogState::for_edit(animal));
    }

    /// Submit the add/edit dialog. It stays open with an inline error if the
    /// fields don't parse or the backend refuses the change.
    pub fn save_animal_dialog(&mut self) {
        let Some(dialog) = self.admin.dialog.as_ref() else {
            return;
        };
        let mode = dialog.mode;
        let draft = match validate_animal_form(
            &dialog.name,
            &dialog.species,
            &dialog.age,
            &dialog.price,
            dialog.status.display(),
        ) {
            Ok(draft) => draft,
            Err(e) => {
                if let Some(dialog) = self.admin.dialog.as_mut() {
                    dialog.error = Some(e.to_string());
                }
                return;
            }
        };
        let acting_user = self.current_user().unwrap_or_default();

        let result = match mode {
            AnimalDialogMode::Add => self.backend().add_animal(&draft, &acting_user).map(|_| ()),
            AnimalDialogMode::Edit(id) => self.backend().update_animal(id, &draft, &acting_user),
        };

        match result {
            Ok(()) => {
                self.admin.dialog = None;
                let verb = match mode {
                    AnimalDialogMode::Add => "added",
                    AnimalDialogMode::Edit(_) => "updated",
                };
                self.ui.set_success(format!("{} {}", draft.name, verb));
            }
            Err(e) => {
                warn!("Saving animal failed: {}", e);
                if let Some(dialog) = self.admin.dialog.as_mut() {
                    dialog.error = Some(format!("Failed to save animal: {}", e));
                }
            }
        }
        self.refresh_admin_animals();
    }

    pub fn delete_animal(&mut self, animal_id: i64) {
        match self.backend().delete_animal(animal_id) {
            Ok(()) => self.ui.set_success("Animal deleted".to_string()),
            Err(e) => self.ui.set_error(format!("Failed to delete animal: {}", e)),
        }
        self.refresh_admin_animals();
    }

    pub fn mark_bought(&mut self, animal_id: i64) {
        let acting_user = self.current_user().unwrap_or_default();
        match self.backend().mark_bought(animal_id, &acting_user) {
            Ok(()) => self.ui.set_success("Animal marked as bought".to_string()),
            Err(e) => self.ui.set_error(describe_purchase_error(&e, &self.admin.animals)),
        }
        self.refresh_admin_animals();
    }

    /// Put a bought animal back on sale
    pub fn relist_animal(&mut self, animal_id: i64) {
        let acting_user = self.current_user().unwrap_or_default();
        match self
            .backend()
            .update_status(animal_id, AnimalStatus::Available, &acting_user)
        {
            Ok(()) => self.ui.set_success("Animal is available again".to_string()),
            Err(e) => self.ui.set_error(format!("Failed to update animal: {}", e)),
        }
        self.refresh_admin_animals();
    }

    // ---- customer ----

    pub fn open_customer_page(&mut self, page: CustomerPage) {
        self.nav.open_customer_page(page);
        match page {
            CustomerPage::Browse => self.refresh_browse(),
            CustomerPage::Purchases => self.refresh_purchases(),
            CustomerPage::Home | CustomerPage::Cart => {}
        }
    }

    pub fn show_details(&mut self, animal: &Animal) {
        self.customer.detail = Some(animal.clone());
    }

    pub fn add_to_cart(&mut self, animal: &Animal) {
        if self.customer.cart.add(animal.clone()) {
            info!("🛒 Added {} to cart", animal.name);
            self.ui.set_success(format!("{} added to cart", animal.name));
        }
        self.customer.detail = None;
    }

    /// Buy the animal shown in the details dialog
    pub fn buy_now(&mut self, animal: &Animal) {
        let Some(customer) = self.current_user() else {
            return;
        };
        self.customer.detail = None;

        match self.backend().buy_one(animal, &customer) {
            Ok(response) => {
                self.customer.cart.remove_ids(&[animal.id]);
                self.record_purchase(response);
            }
            Err(e) => self.ui.set_error(describe_purchase_error(&e, std::slice::from_ref(animal))),
        }
        self.refresh_browse();
        self.refresh_purchases();
    }

    /// Buy every selected cart line, all or nothing. Lines sold to someone
    /// else in the meantime are dropped by the re-fetch that follows.
    pub fn checkout_cart(&mut self) {
        let Some(customer) = self.current_user() else {
            return;
        };
        let selected = self.customer.cart.selected_animals();

        match self.backend().buy_selected(&selected, &customer) {
            Ok(response) => {
                let bought: Vec<i64> = response.receipts.iter().map(|r| r.animal.id).collect();
                self.customer.cart.remove_ids(&bought);
                self.record_purchase(response);
                self.nav.open_customer_page(CustomerPage::Purchases);
            }
            Err(e) => {
                let mut message = describe_purchase_error(&e, &selected);
                if matches!(e.downcast_ref::<DomainError>(), Some(DomainError::NotAvailable { .. })) {
                    message.push_str(" It was removed from your cart.");
                }
                self.ui.set_error(message);
            }
        }
        self.refresh_browse();
        self.refresh_purchases();
    }

    pub fn remove_unchecked_from_cart(&mut self) {
        let removed = self.customer.cart.remove_unchecked();
        if removed > 0 {
            info!("🗑 Removed {} unchecked cart lines", removed);
        }
    }

    fn record_purchase(&mut self, response: CheckoutResponse) {
        self.ui.set_success(response.success_message.clone());
        self.customer
            .session_receipts
            .extend(response.receipts.iter().cloned());
        self.customer.confirmation = Some(response);
    }
}

/// User-facing text for a failed purchase; `animals` is used to name the
/// animal that was already sold
fn describe_purchase_error(error: &anyhow::Error, animals: &[Animal]) -> String {
    match error.downcast_ref::<DomainError>() {
        Some(DomainError::NotAvailable { id }) => match animals.iter().find(|a| a.id == *id) {
            Some(animal) => format!("Sorry, {} has already been sold.", animal.name),
            None => format!("Sorry, animal #{} has already been sold.", id),
        },
        Some(DomainError::EmptySelection) => "Select at least one animal to buy.".to_string(),
        Some(other) => other.to_string(),
        None => format!("Purchase failed: {}", error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::state::Screen;
    use petshop_backend::Backend;
    use shared::AnimalDraft;
    use tempfile::TempDir;

    fn setup_app() -> (PetShopApp, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let backend = Backend::open(&temp_dir.path().join("petshop.db")).expect("Failed to open backend");
        (PetShopApp::new(backend), temp_dir)
    }

    fn register(app: &mut PetShopApp, username: &str, role: UserRole) {
        app.auth.register.username = username.to_string();
        app.auth.register.password = "pw".to_string();
        app.auth.register.confirm_password = "pw".to_string();
        app.auth.register.role = role;
        app.handle_register();
    }

    fn login(app: &mut PetShopApp, username: &str, role: UserRole) {
        app.auth.login.username = username.to_string();
        app.auth.login.password = "pw".to_string();
        app.auth.login.role = role;
        app.handle_login();
    }

    fn stock(app: &PetShopApp, name: &str, species: &str, price: f64) -> i64 {
        let draft = AnimalDraft {
            name: name.to_string(),
            species: species.to_string(),
            age: 2,
            price,
            status: AnimalStatus::Available,
        };
        app.backend().add_animal(&draft, "admin").unwrap()
    }

    #[test]
    fn test_register_then_login_routes_customer() {
        let (mut app, _dir) = setup_app();

        app.nav.enter();
        app.nav.open_register();
        register(&mut app, "alice", UserRole::Customer);
        assert_eq!(app.nav.screen, Screen::MainMenu);
        assert_eq!(app.ui.success_message.as_deref(), Some("Registered successfully!"));
        assert!(app.auth.register.username.is_empty());
        assert!(app.auth.register.message.is_none());

        login(&mut app, "alice", UserRole::Customer);
        assert_eq!(app.nav.screen, Screen::CustomerPanel);
        assert_eq!(app.ui.success_message.as_deref(), Some("Login successful! Welcome Customer."));
        assert!(app.customer.browse_loaded);
    }

    #[test]
    fn test_duplicate_registration_and_bad_login() {
        let (mut app, _dir) = setup_app();
        register(&mut app, "alice", UserRole::Customer);
        register(&mut app, "alice", UserRole::Admin);
        assert_eq!(
            app.auth.register.message,
            Some(FormMessage::Error("Username already exists.".to_string()))
        );

        login(&mut app, "alice", UserRole::Admin);
        assert_eq!(app.nav.screen, Screen::MainMenu);
        assert_eq!(
            app.auth.login.message,
            Some(FormMessage::Error("Invalid username or password".to_string()))
        );
    }

    #[test]
    fn test_form_errors_block_backend_calls() {
        let (mut app, _dir) = setup_app();
        app.handle_login();
        assert_eq!(
            app.auth.login.message,
            Some(FormMessage::Error("Please enter username and password".to_string()))
        );

        app.auth.register.username = "bob".to_string();
        app.auth.register.password = "a".to_string();
        app.auth.register.confirm_password = "b".to_string();
        app.handle_register();
        assert_eq!(
            app.auth.register.message,
            Some(FormMessage::Error("Passwords do not match".to_string()))
        );
    }

    #[test]
    fn test_admin_dialog_add_and_invalid_fields() {
        let (mut app, _dir) = setup_app();
        register(&mut app, "root", UserRole::Admin);
        login(&mut app, "root", UserRole::Admin);
        assert_eq!(app.nav.screen, Screen::AdminPanel);

        app.open_add_dialog();
        if let Some(dialog) = app.admin.dialog.as_mut() {
            dialog.name = "Rex".to_string();
            dialog.species = "Dog".to_string();
            dialog.age = "three".to_string();
            dialog.price = "10".to_string();
        }
        app.save_animal_dialog();
        let error = app.admin.dialog.as_ref().and_then(|d| d.error.clone());
        assert_eq!(error.as_deref(), Some("Please fill all fields correctly."));
        assert!(app.admin.animals.is_empty());

        if let Some(dialog) = app.admin.dialog.as_mut() {
            dialog.age = "3".to_string();
        }
        app.save_animal_dialog();
        assert!(app.admin.dialog.is_none());
        assert_eq!(app.admin.animals.len(), 1);
        assert_eq!(app.admin.animals[0].name, "Rex");
    }

    #[test]
    fn test_admin_mark_bought_relist_delete() {
        let (mut app, _dir) = setup_app();
        register(&mut app, "root", UserRole::Admin);
        login(&mut app, "root", UserRole::Admin);
        let id = stock(&app, "Rex", "Dog", 10.0);

        app.mark_bought(id);
        assert_eq!(app.admin.animals[0].status, AnimalStatus::Bought);
        assert_eq!(app.admin.animals[0].owner.as_deref(), Some("root"));

        app.relist_animal(id);
        assert_eq!(app.admin.animals[0].status, AnimalStatus::Available);
        assert_eq!(app.admin.animals[0].owner, None);

        app.delete_animal(id);
        assert!(app.admin.animals.is_empty());
    }

    #[test]
    fn test_cart_checkout_moves_to_purchases() {
        let (mut app, _dir) = setup_app();
        stock(&app, "Rex", "Dog", 10.0);
        stock(&app, "Milo", "Cat", 25.5);
        register(&mut app, "alice", UserRole::Customer);
        login(&mut app, "alice", UserRole::Customer);

        let animals = app.customer.browse.filtered().to_vec();
        assert_eq!(animals.len(), 2);
        for animal in &animals {
            app.add_to_cart(animal);
        }
        assert_eq!(app.customer.cart.formatted_total(), "$35.50");

        app.checkout_cart();

        assert!(app.customer.cart.is_empty());
        assert_eq!(app.nav.customer_page, CustomerPage::Purchases);
        assert_eq!(app.customer.owned.len(), 2);
        assert_eq!(app.customer.session_receipts.len(), 2);
        assert!(app.customer.browse.snapshot().is_empty());
        assert_eq!(
            app.ui.success_message.as_deref(),
            Some("You have bought the selected animals!")
        );
    }

    #[test]
    fn test_checkout_drops_animal_sold_elsewhere() {
        let (mut app, _dir) = setup_app();
        stock(&app, "Rex", "Dog", 10.0);
        stock(&app, "Milo", "Cat", 25.5);
        register(&mut app, "alice", UserRole::Customer);
        login(&mut app, "alice", UserRole::Customer);

        let animals = app.customer.browse.filtered().to_vec();
        for animal in &animals {
            app.add_to_cart(animal);
        }
        let milo = animals.iter().find(|a| a.name == "Milo").cloned().unwrap();
        app.backend().buy_one(&milo, "bob").unwrap();

        app.checkout_cart();
        assert_eq!(
            app.ui.error_message.as_deref(),
            Some("Sorry, Milo has already been sold. It was removed from your cart.")
        );
        assert!(!app.customer.cart.contains(milo.id));
        assert_eq!(app.customer.cart.len(), 1);
        assert!(app.customer.owned.is_empty());

        app.checkout_cart();
        assert!(app.customer.cart.is_empty());
        assert_eq!(app.customer.owned.len(), 1);
        assert_eq!(app.customer.owned[0].name, "Rex");
    }

    #[test]
    fn test_browse_refresh_drops_sold_cart_lines() {
        let (mut app, _dir) = setup_app();
        stock(&app, "Rex", "Dog", 10.0);
        register(&mut app, "alice", UserRole::Customer);
        login(&mut app, "alice", UserRole::Customer);
        let rex = app.customer.browse.filtered()[0].clone();
        app.add_to_cart(&rex);
        app.ui.clear_messages();

        app.backend().buy_one(&rex, "bob").unwrap();
        app.open_customer_page(CustomerPage::Browse);

        assert!(app.customer.cart.is_empty());
        assert_eq!(
            app.ui.error_message.as_deref(),
            Some("No longer available, removed from your cart: Rex")
        );
    }

    #[test]
    fn test_buy_now_of_sold_animal_reports_error() {
        let (mut app, _dir) = setup_app();
        stock(&app, "Rex", "Dog", 10.0);
        register(&mut app, "alice", UserRole::Customer);
        login(&mut app, "alice", UserRole::Customer);
        let rex = app.customer.browse.filtered()[0].clone();

        app.backend().buy_one(&rex, "bob").unwrap();
        app.buy_now(&rex);

        assert_eq!(app.ui.error_message.as_deref(), Some("Sorry, Rex has already been sold."));
        assert!(app.customer.owned.is_empty());
        assert!(app.customer.browse.snapshot().is_empty());
    }

    #[test]
    fn test_logout_clears_session_state() {
        let (mut app, _dir) = setup_app();
        stock(&app, "Rex", "Dog", 10.0);
        register(&mut app, "alice", UserRole::Customer);
        login(&mut app, "alice", UserRole::Customer);
        let rex = app.customer.browse.filtered()[0].clone();
        app.add_to_cart(&rex);

        app.logout();

        assert_eq!(app.nav.screen, Screen::MainMenu);
        assert!(app.customer.cart.is_empty());
        assert!(app.customer.browse.snapshot().is_empty());
        assert!(app.current_user().is_none());
    }
}
