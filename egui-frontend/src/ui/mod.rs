//! # UI Module
//!
//! The egui front end of the pet shop.
//!
//! - `app_state` - `PetShopApp`, the root of all UI state
//! - `app_coordinator` - `eframe::App` implementation and screen dispatch
//! - `actions` - click handlers that call the backend
//! - `data_loading` - snapshot refreshes
//! - `state` - per-concern state containers
//! - `components` - screens and widgets

pub mod actions;
pub mod app_coordinator;
pub mod app_state;
pub mod components;
pub mod data_loading;
pub mod state;

pub use app_state::PetShopApp;
pub use components::setup_pet_shop_style;
