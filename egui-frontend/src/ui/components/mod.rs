//! # UI Components Module
//!
//! One module per screen or widget of the pet shop app.
//!
//! ## Module Organization:
//! - `theme` - colors, global style and shared widget helpers
//! - `landing` - landing screen and main menu
//! - `auth_forms` - login and registration screens
//! - `admin_panel` / `animal_dialog` - inventory management
//! - `customer_panel` - sidebar and home page for customers
//! - `browse_page` / `animal_card` - browsing and the details window
//! - `cart_page` - cart and checkout
//! - `purchases_page` - owned animals, receipts, purchase confirmation

pub mod admin_panel;
pub mod animal_card;
pub mod animal_dialog;
pub mod auth_forms;
pub mod browse_page;
pub mod cart_page;
pub mod customer_panel;
pub mod landing;
pub mod purchases_page;
pub mod theme;

pub use theme::*;
