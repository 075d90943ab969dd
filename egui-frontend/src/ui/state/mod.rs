//! # UI State
//!
//! State containers for the pet shop app, split by concern:
//! - `navigation_state` - current screen, session, customer page
//! - `auth_state` - login and registration forms
//! - `admin_state` - admin animal list and add/edit dialog
//! - `customer_state` - browse snapshot, cart, purchases
//! - `ui_state` - error and success messages

pub mod admin_state;
pub mod auth_state;
pub mod customer_state;
pub mod navigation_state;
pub mod ui_state;

pub use admin_state::*;
pub use auth_state::*;
pub use customer_state::*;
pub use navigation_state::*;
pub use ui_state::*;
