//! # Domain Module
//!
//! Business logic of the pet shop, independent of egui and of SQLite.
//!
//! ## Module Organization
//!
//! - **auth_service**: registration and login against the users table
//! - **inventory_service**: admin CRUD on animals, owner/status consistency
//! - **checkout_service**: single purchase, cart checkout, purchases history
//! - **browse**: in-memory snapshot filtering for the browse page
//! - **cart**: client-side cart with per-line selection
//! - **validation**: form checks that run before any data access
//! - **errors**: `DomainError` and `FormError`
//!
//! ## Business Rules
//!
//! - Usernames are unique; passwords are compared verbatim
//! - An animal is `Bought` exactly when it has an owner
//! - An animal can be bought once; a checkout buys all selected animals or none

pub mod auth_service;
pub mod browse;
pub mod cart;
pub mod checkout_service;
pub mod errors;
pub mod inventory_service;
pub mod validation;

pub use auth_service::AuthService;
pub use browse::{categories, filter_animals, BrowseFilter, BrowseState, ALL_CATEGORIES};
pub use cart::{Cart, CartLine};
pub use checkout_service::CheckoutService;
pub use errors::{DomainError, FormError};
pub use inventory_service::InventoryService;
pub use validation::{validate_animal_form, validate_login_form, validate_register_form};
